use anyhow::Result;
use colored::Colorize;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use skpaths::GeneratorConfig;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Watches the route directory and regenerates the declaration file on
/// every change.
///
/// A single consumer task drains change events one at a time: a full
/// scan-and-emit cycle completes, declaration write included, before the
/// next event is drawn. Events arriving mid-cycle buffer in the channel
/// and in the platform watcher, so regenerations never overlap.
pub struct RouteWatcher {
    config: GeneratorConfig,
}

/// Handle to a running watch task.
pub struct WatchHandle {
    shutdown: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl WatchHandle {
    /// Stops the watch loop and waits for any in-flight cycle to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(()).await;
        let _ = self.task.await;
    }
}

impl RouteWatcher {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Starts watching the route directory recursively.
    ///
    /// Returns a handle whose `shutdown` stops the loop; dropping the
    /// handle without calling it leaves the loop running for the
    /// lifetime of the process, which is the intended mode for a dev
    /// server.
    pub async fn watch(self) -> Result<WatchHandle> {
        let config = self.config;

        let (tx, mut rx) = mpsc::channel::<PathBuf>(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res {
                // Creations, edits and deletions all change the derived set
                if matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                ) {
                    for path in &event.paths {
                        // Ignore hidden files and editor swap directories
                        if path
                            .to_str()
                            .map_or(false, |s| s.contains("/.") || s.contains("\\."))
                        {
                            continue;
                        }

                        let _ = tx.blocking_send(path.clone());
                    }
                }
            }
        })?;

        watcher.watch(&config.routes_dir, RecursiveMode::Recursive)?;
        println!("  {} Watching: {}", "👀".cyan(), config.routes_dir.display());

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let task = tokio::spawn(async move {
            let _watcher = watcher; // Keep watcher alive

            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    changed = rx.recv() => match changed {
                        Some(path) => {
                            println!("{} Route file changed: {}", "🔄".yellow(), path.display());

                            // One full cycle per event; the next event is
                            // not drawn until the write has finished
                            match skpaths::generate(&config) {
                                Ok(routes) => {
                                    println!(
                                        "{} Route types updated ({} template(s))",
                                        "✓".green(),
                                        routes.len()
                                    );
                                }
                                Err(e) => {
                                    // Fail this cycle only; keep consuming events
                                    eprintln!("{} Regeneration failed: {}", "❌".red(), e);
                                }
                            }
                        }
                        None => break,
                    },
                }
            }
        });

        Ok(WatchHandle {
            shutdown: shutdown_tx,
            task,
        })
    }
}
