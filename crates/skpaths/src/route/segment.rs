/// Segment classification for route directory names
///
/// Pure one-pass parsing of a single filesystem path segment into its
/// routing meaning. Same input always produces the same output; nothing
/// here touches the filesystem.

/// Placeholder token rendered in place of every variable segment.
///
/// Parameter names are discarded on purpose: the emitted type only encodes
/// that *some* string occupies the position, not which one.
pub const PLACEHOLDER: &str = "${string}";

/// One classified path segment from a route directory tree.
///
/// # Examples
///
/// ```
/// use skpaths::route::{classify_segment, RouteSegment};
///
/// assert!(matches!(classify_segment("about"), RouteSegment::Static(_)));
/// assert!(matches!(classify_segment("(marketing)"), RouteSegment::Group(_)));
/// assert!(matches!(classify_segment("[slug]"), RouteSegment::Dynamic(_)));
/// assert!(matches!(classify_segment("[[lang]]"), RouteSegment::Optional(_)));
/// assert!(matches!(classify_segment("[...rest]"), RouteSegment::CatchAll(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSegment {
    /// Plain text segment, emitted verbatim: `about`
    Static(String),
    /// Parenthesized grouping segment, never emitted: `(marketing)`
    Group(String),
    /// Single required variable segment: `[slug]`
    Dynamic(String),
    /// Variable segment that may be absent: `[[lang]]`
    Optional(String),
    /// One or more trailing variable components: `[...rest]`
    CatchAll(String),
}

impl RouteSegment {
    pub fn is_group(&self) -> bool {
        matches!(self, RouteSegment::Group(_))
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, RouteSegment::Optional(_))
    }

    /// Renders this segment as it appears in a finished template.
    ///
    /// Group segments are stripped before rendering; if one reaches this
    /// point anyway it renders to nothing.
    pub fn render(&self) -> &str {
        match self {
            RouteSegment::Static(text) => text,
            RouteSegment::Group(_) => "",
            RouteSegment::Dynamic(_) | RouteSegment::Optional(_) | RouteSegment::CatchAll(_) => {
                PLACEHOLDER
            }
        }
    }
}

/// Classifies one path segment (pure function).
///
/// Shapes are checked most-specific first:
///
/// 1. `(name)` → group
/// 2. `[[name]]` → optional (`[[...name]]` also lands here)
/// 3. `[...name]` → catch-all
/// 4. `[name]` → dynamic
/// 5. anything else → static
///
/// A recognized shape requires a non-empty inner name free of brackets and
/// parentheses. Malformed bracket text — `[]`, `[x`, `foo[x]bar`, nested
/// brackets — is not an error; it stays a literal static segment and flows
/// into the output as-is.
pub fn classify_segment(segment: &str) -> RouteSegment {
    if let Some(inner) = segment.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        if is_well_formed_name(inner) {
            return RouteSegment::Group(inner.to_string());
        }
    }

    if let Some(inner) = segment.strip_prefix("[[").and_then(|s| s.strip_suffix("]]")) {
        let name = inner.strip_prefix("...").unwrap_or(inner);
        if is_well_formed_name(name) {
            return RouteSegment::Optional(inner.to_string());
        }
    }

    if let Some(inner) = segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        if let Some(name) = inner.strip_prefix("...") {
            if is_well_formed_name(name) {
                return RouteSegment::CatchAll(name.to_string());
            }
        }
        if is_well_formed_name(inner) {
            return RouteSegment::Dynamic(inner.to_string());
        }
    }

    RouteSegment::Static(segment.to_string())
}

/// A usable inner name is non-empty and contains no bracket characters.
fn is_well_formed_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| matches!(c, '[' | ']' | '(' | ')'))
}
