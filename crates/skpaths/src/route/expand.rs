/// Template expansion for accumulated route paths
///
/// Turns one marker file's segment path into its final set of URL
/// templates: group segments drop out, optional segments expand into
/// presence/absence variants by suffix peeling, and every variable segment
/// renders as the `${string}` placeholder.
use super::segment::RouteSegment;
use super::RoutePath;

/// Renders a group-stripped segment slice as a URL template.
///
/// An empty slice renders as the root path `/`, never the empty string.
fn render(segments: &[&RouteSegment]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }

    let mut template = String::new();
    for segment in segments {
        template.push('/');
        template.push_str(segment.render());
    }
    template
}

/// Derives every URL template for one marker file's accumulated path.
///
/// Group segments are removed first. A path with nothing left after that
/// is the root — it yields exactly `/` and no further expansion runs.
///
/// Optional segments expand by *suffix peeling*, not subset enumeration:
/// the rightmost remaining optional segment is removed one step at a time,
/// and each intermediate path is rendered as a variant. The convention is
/// that optional segments trail the path, so this enumerates "keep the
/// first k optional segments" for every k, plus the all-present form,
/// which is always emitted last. A non-trailing optional segment is not
/// validated; the same peeling order simply applies to it.
///
/// # Examples
///
/// ```
/// use skpaths::route::{derive_templates, RoutePath};
///
/// let path = RoutePath::from_relative("[[lang]]/about");
/// assert_eq!(
///     derive_templates(&path),
///     vec!["/about".to_string(), "/${string}/about".to_string()]
/// );
/// ```
pub fn derive_templates(path: &RoutePath) -> Vec<String> {
    let stripped: Vec<&RouteSegment> = path
        .segments
        .iter()
        .filter(|segment| !segment.is_group())
        .collect();

    // Root is terminal: a marker directly under the route root, or under
    // group directories only, maps to `/` and nothing else
    if stripped.is_empty() {
        return vec!["/".to_string()];
    }

    let mut templates = Vec::new();

    let optional_positions: Vec<usize> = stripped
        .iter()
        .enumerate()
        .filter(|(_, segment)| segment.is_optional())
        .map(|(position, _)| position)
        .collect();

    if !optional_positions.is_empty() {
        let mut working = stripped.clone();

        // Peel rightmost-first; removing in reverse keeps the earlier
        // positions valid
        for &position in optional_positions.iter().rev() {
            working.remove(position);
            let variant = render(&working);
            if variant != "/" {
                templates.push(variant);
            }
        }

        // The fully-peeled form: root if nothing remains, otherwise the
        // remaining path, guarded against duplicate insertion
        let peeled = render(&working);
        if peeled == "/" {
            templates.push(peeled);
        } else if !templates.contains(&peeled) {
            templates.push(peeled);
        }
    }

    // The all-present form is always emitted
    templates.push(render(&stripped));
    templates
}
