use crate::types::Settings;

/// Notifications published by [`crate::SettingsManager`] on its broadcast channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    /// A snapshot was merged in from persistence.
    Loaded { settings: Settings },
    /// The current snapshot was persisted.
    Saved { settings: Settings },
    /// The undo or redo stack changed size or content.
    HistoryChanged { undo_len: usize, redo_len: usize },
}
