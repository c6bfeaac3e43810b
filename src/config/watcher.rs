//! Configuration file watcher for hot reload.
//!
//! Only modify/create events on the watched file trigger a reload. A file
//! that fails to load or validate is logged and skipped; the running site
//! list stays in place.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::LinkConfig;

/// Watches the site configuration and sends each successfully loaded version.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<LinkConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and a receiver for reloaded configurations.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<LinkConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching in a background thread.
    ///
    /// The returned watcher must be kept alive for as long as updates are wanted.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Self { path, update_tx } = self;
        let watched = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if triggers_reload(&event.kind) => reload(&path, &update_tx),
                Ok(_) => {}
                Err(e) => tracing::error!(error = %e, "Site config watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&watched, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?watched, "Site config watcher started");
        Ok(watcher)
    }
}

fn triggers_reload(kind: &EventKind) -> bool {
    kind.is_modify() || kind.is_create()
}

fn reload(path: &Path, tx: &mpsc::UnboundedSender<LinkConfig>) {
    match load_config(path) {
        Ok(config) => {
            let names: Vec<&str> = config.sites.iter().map(|s| s.name.as_str()).collect();
            tracing::info!(
                path = ?path,
                sites = config.sites.len(),
                items = config.items.len(),
                names = ?names,
                "Site config reloaded"
            );
            if tx.send(config).is_err() {
                tracing::debug!("Site config receiver dropped");
            }
        }
        Err(e) => {
            tracing::error!(path = ?path, error = %e, "Failed to reload site config, keeping current sites");
        }
    }
}
