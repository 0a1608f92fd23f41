/// Watch-driven regeneration
///
/// Keeps the declaration file in sync with the route tree for the
/// lifetime of the process.
pub mod watcher;

pub use watcher::{RouteWatcher, WatchHandle};
