/// Route-tree scanning
///
/// Recursively walks the route directory and records the accumulated
/// segment path for every marker file found. Nothing is cached between
/// scans; every run reads the tree in full.
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::route::{classify_segment, RoutePath, RouteSegment};

/// Filenames that mark a directory as a routable endpoint.
///
/// Matching is exact; `+page.svelte.bak` or `nested/+server.ts.orig` are
/// ignored like any other file.
pub const MARKER_FILES: [&str; 3] = ["+page.svelte", "+page.server.ts", "+server.ts"];

/// Recursively scans `root` and returns one accumulated path per marker
/// file.
///
/// Entry order within a directory is whatever the filesystem listing
/// returns — not sorted and not guaranteed stable, which makes the *list*
/// order nondeterministic while leaving the derived *set* content fixed.
/// An unreadable directory fails the whole scan; there is no retry.
pub fn scan_routes(root: &Path) -> Result<Vec<RoutePath>> {
    let mut found = Vec::new();
    visit(root, &[], &mut found)?;

    debug!(
        "scanned {}: {} marker file(s)",
        root.display(),
        found.len()
    );
    Ok(found)
}

fn visit(dir: &Path, base: &[RouteSegment], found: &mut Vec<RoutePath>) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read route directory: {}", dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let path = entry.path();

        if path.is_dir() {
            let name = entry.file_name();
            let mut next = base.to_vec();
            next.push(classify_segment(&name.to_string_lossy()));
            visit(&path, &next, found)?;
        } else if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if MARKER_FILES.contains(&name) {
                found.push(RoutePath::new(base.to_vec()));
            }
        }
    }

    Ok(())
}
