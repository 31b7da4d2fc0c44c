//! Theme application.

use tokio::sync::watch;
use tracing::debug;

use crate::types::DEFAULT_THEME;

/// Applies a theme to the active UI surface. Always succeeds.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeApplier: Send + Sync {
    fn apply(&self, name: &str);
}

/// Publishes the applied theme name on a `watch` channel.
///
/// UI code holds a receiver from [`WatchThemeApplier::subscribe`] and restyles
/// itself whenever the name changes.
#[derive(Debug)]
pub struct WatchThemeApplier {
    sender: watch::Sender<String>,
}

impl WatchThemeApplier {
    pub fn new(initial: impl Into<String>) -> Self {
        let (sender, _) = watch::channel(initial.into());
        Self { sender }
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.sender.subscribe()
    }

    pub fn current(&self) -> String {
        self.sender.borrow().clone()
    }
}

impl Default for WatchThemeApplier {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}

impl ThemeApplier for WatchThemeApplier {
    fn apply(&self, name: &str) {
        debug!("Applying theme '{}'", name);
        self.sender.send_replace(name.to_string());
    }
}
