/// Route derivation for SvelteKit-style route trees
///
/// Pure components that turn accumulated filesystem segments into URL
/// templates: segment classification, group stripping, optional-segment
/// expansion, placeholder substitution and the deduplicated result set.
pub mod expand;
pub mod segment;
pub mod set;

// Re-export commonly used types
pub use expand::derive_templates;
pub use segment::{classify_segment, RouteSegment, PLACEHOLDER};
pub use set::RouteSet;

/// The ordered segments leading from the route root down to one marker
/// file's directory.
///
/// One `RoutePath` is produced per marker file found during a scan; it is
/// not retained beyond the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    pub segments: Vec<RouteSegment>,
}

impl RoutePath {
    pub fn new(segments: Vec<RouteSegment>) -> Self {
        Self { segments }
    }

    /// Builds a route path from a `/`-separated relative directory path,
    /// classifying each component. Empty components are ignored, so
    /// leading or doubled slashes are harmless.
    ///
    /// # Examples
    ///
    /// ```
    /// use skpaths::route::{RoutePath, RouteSegment};
    ///
    /// let path = RoutePath::from_relative("blog/[slug]");
    /// assert_eq!(path.segments.len(), 2);
    /// assert_eq!(path.segments[1], RouteSegment::Dynamic("slug".to_string()));
    ///
    /// let root = RoutePath::from_relative("");
    /// assert!(root.segments.is_empty());
    /// ```
    pub fn from_relative(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|component| !component.is_empty())
                .map(segment::classify_segment)
                .collect(),
        }
    }
}
