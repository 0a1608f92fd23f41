/// Declaration emission
///
/// Serializes a finished route set into a TypeScript ambient module whose
/// `RoutePath` alias is a union of template-literal strings.
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::route::RouteSet;

/// Renders the declaration file contents for `routes`.
///
/// Every template becomes one backtick literal in the union, in set order;
/// `${string}` placeholders carry through as template-literal types. An
/// empty set renders the alias as `never`.
///
/// # Examples
///
/// ```
/// use skpaths::{render_declaration, RouteSet};
///
/// let mut routes = RouteSet::new();
/// routes.insert("/");
/// routes.insert("/blog/${string}");
///
/// let declaration = render_declaration(&routes, "$sveltekit-paths");
/// assert!(declaration.contains("declare module \"$sveltekit-paths\""));
/// assert!(declaration.contains("| `/blog/${string}`"));
/// ```
pub fn render_declaration(routes: &RouteSet, module_name: &str) -> String {
    if routes.is_empty() {
        return format!(
            "// Auto-generated route definitions\n\
             declare module \"{}\" {{\n    export type RoutePath = never;\n}}\n",
            module_name
        );
    }

    let union = routes
        .iter()
        .map(|route| format!("`{}`", route))
        .collect::<Vec<_>>()
        .join("\n      | ");

    format!(
        "// Auto-generated route definitions\n\
         declare module \"{}\" {{\n    export type RoutePath =\n      | {};\n}}\n",
        module_name, union
    )
}

/// Writes the declaration file, creating parent directories as needed.
///
/// The file is recreated by full overwrite on every cycle; there is no
/// atomic rename, and a crash mid-write leaves whatever made it to disk
/// until the next cycle regenerates it.
pub fn write_declaration(routes: &RouteSet, output: &Path, module_name: &str) -> Result<()> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    fs::write(output, render_declaration(routes, module_name))
        .with_context(|| format!("Failed to write declaration file: {}", output.display()))?;

    debug!("wrote {} template(s) to {}", routes.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_union_shape() {
        let mut routes = RouteSet::new();
        routes.insert("/");
        routes.insert("/about");
        routes.insert("/blog/${string}");

        let declaration = render_declaration(&routes, "$sveltekit-paths");
        let expected = r#"// Auto-generated route definitions
declare module "$sveltekit-paths" {
    export type RoutePath =
      | `/`
      | `/about`
      | `/blog/${string}`;
}
"#;
        assert_eq!(declaration, expected);
    }

    #[test]
    fn test_render_empty_set_is_never() {
        let routes = RouteSet::new();
        let declaration = render_declaration(&routes, "$sveltekit-paths");
        assert!(declaration.contains("export type RoutePath = never;"));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("types/sveltekit-paths/$types.d.ts");

        let mut routes = RouteSet::new();
        routes.insert("/about");

        write_declaration(&routes, &output, "$sveltekit-paths").unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("| `/about`;"));
    }

    #[test]
    fn test_write_overwrites_previous_contents() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("$types.d.ts");

        let mut first = RouteSet::new();
        first.insert("/old");
        write_declaration(&first, &output, "$sveltekit-paths").unwrap();

        let mut second = RouteSet::new();
        second.insert("/new");
        write_declaration(&second, &output, "$sveltekit-paths").unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("/new"));
        assert!(!written.contains("/old"));
    }
}
