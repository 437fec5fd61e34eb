use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Watches the dashboard config file and sends a notification whenever it is
/// written, created or replaced.
///
/// The parent directory is watched rather than the file itself, so editors
/// that save via rename, and a config file created after startup, are both
/// picked up.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// let (_watcher, mut rx) = aqmon_config::ConfigWatcher::spawn("/home/user/.config/aqmon/aqmon.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed, reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    let Some(dir) = path.parent().map(Path::to_path_buf) else {
        error!("Config path '{}' has no parent directory", path.display());
        return;
    };

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        warn!("Cannot watch '{}' (live reload disabled): {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) if is_relevant(&e, &path) => {
                // A full channel already holds a pending reload.
                if let Err(mpsc::error::TrySendError::Closed(())) = tx.try_send(()) {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

/// `true` when `event` modifies, creates or renames onto the watched file.
fn is_relevant(event: &notify::Event, path: &Path) -> bool {
    use notify::EventKind::*;

    matches!(event.kind, Modify(_) | Create(_)) && event.paths.iter().any(|p| p == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::{event::CreateKind, event::ModifyKind, Event, EventKind};

    #[test]
    fn modify_of_watched_file_is_relevant() {
        let path = Path::new("/tmp/aqmon/aqmon.toml");
        let event = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(path.to_path_buf());
        assert!(is_relevant(&event, path));
    }

    #[test]
    fn sibling_files_are_ignored() {
        let path = Path::new("/tmp/aqmon/aqmon.toml");
        let event = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/tmp/aqmon/other.toml"));
        assert!(!is_relevant(&event, path));
    }

    #[test]
    fn removal_is_ignored() {
        let path = Path::new("/tmp/aqmon/aqmon.toml");
        let event = Event::new(EventKind::Remove(notify::event::RemoveKind::File))
            .add_path(path.to_path_buf());
        assert!(!is_relevant(&event, path));
    }
}
