//! # skpaths
//!
//! Derives a deduplicated set of canonical URL path templates from a
//! SvelteKit-style route directory and serializes them as a TypeScript
//! module declaration, so application code can refer to every reachable
//! route through one static `RoutePath` type.
//!
//! Route-tree conventions understood by the derivation:
//! - Static segments (`about`) pass through verbatim
//! - Route groups (`(marketing)`) organize files without affecting the URL
//! - Dynamic (`[slug]`), optional (`[[lang]]`) and catch-all (`[...rest]`)
//!   segments all render as the `${string}` placeholder
//! - Optional segments additionally expand into presence/absence variants
//!
//! A directory becomes routable when it contains one of the marker files
//! `+page.svelte`, `+page.server.ts` or `+server.ts`. The whole set is
//! recomputed from scratch on every run; there is no incremental state.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> anyhow::Result<()> {
//! use skpaths::{generate, GeneratorConfig};
//!
//! let config = GeneratorConfig::default();
//! let routes = generate(&config)?;
//! println!("{} route template(s)", routes.len());
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use std::path::Path;
use tracing::debug;

pub mod config;
pub mod emit;
pub mod route;
pub mod scan;

// Re-export the public surface
pub use config::GeneratorConfig;
pub use emit::{render_declaration, write_declaration};
pub use route::{classify_segment, derive_templates, RoutePath, RouteSegment, RouteSet, PLACEHOLDER};
pub use scan::{scan_routes, MARKER_FILES};

/// Scans `root` and derives the full route set.
///
/// Every marker file contributes at least one template; duplicates across
/// marker files collapse into a single member. The returned set follows
/// first-seen scan order, which is filesystem-dependent; its *content* is
/// stable across runs over an unchanged tree.
pub fn derive_route_set(root: &Path) -> Result<RouteSet> {
    let paths = scan::scan_routes(root)?;

    let mut routes = RouteSet::new();
    for path in &paths {
        for template in route::derive_templates(path) {
            routes.insert(template);
        }
    }

    debug!(
        "derived {} template(s) from {} marker file(s)",
        routes.len(),
        paths.len()
    );
    Ok(routes)
}

/// Runs one full scan-and-emit cycle: derive the route set from
/// `config.routes_dir` and overwrite the declaration file at
/// `config.output`.
///
/// Scan and write failures both abort the cycle; nothing is retried.
pub fn generate(config: &GeneratorConfig) -> Result<RouteSet> {
    let routes = derive_route_set(&config.routes_dir)?;
    emit::write_declaration(&routes, &config.output, &config.module_name)?;
    Ok(routes)
}
