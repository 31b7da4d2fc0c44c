//! The settings manager: observable fields, persistence and undo/redo.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::errors::SettingsError;
use crate::events::SettingsEvent;
use crate::fields::SettingsFields;
use crate::file_picker::FilePicker;
use crate::history::{Change, ChangeHistory, ChangeRecord};
use crate::keys::SettingKey;
use crate::observable::{Observable, SubscriptionId};
use crate::persistence_iface::SettingsPersistenceProvider;
use crate::theme::ThemeApplier;
use crate::tracking::Tracking;
use crate::types::{SettingValue, Settings};

const DEFAULT_BROADCAST_CAPACITY: usize = 32;

/// Records changes of one field into the shared history while tracking is enabled.
#[derive(Clone)]
struct Recorder {
    history: Arc<Mutex<ChangeHistory>>,
    tracking: Tracking,
    event_sender: broadcast::Sender<SettingsEvent>,
}

impl Recorder {
    fn attach<T, F>(&self, key: SettingKey, field: &Observable<T>, wrap: F) -> (SettingKey, SubscriptionId)
    where
        T: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(Change<T>) -> ChangeRecord + Send + Sync + 'static,
    {
        let recorder = self.clone();
        let id = field.subscribe(move |previous, value| {
            if !recorder.tracking.is_enabled() {
                return;
            }
            let record = wrap(Change::new(previous.clone(), value.clone()));
            debug!("Recording change of '{}'", record.key());
            let (undo_len, redo_len) = {
                let mut history = recorder.history.lock();
                history.record(record);
                (history.undo_len(), history.redo_len())
            };
            publish(&recorder.event_sender, SettingsEvent::HistoryChanged { undo_len, redo_len });
        });
        (key, id)
    }
}

fn publish(sender: &broadcast::Sender<SettingsEvent>, event: SettingsEvent) {
    if sender.receiver_count() > 0 {
        if let Err(e) = sender.send(event) {
            warn!("Failed to publish settings event: {}", e);
        }
    }
}

/// Owns the live settings and coordinates persistence, theme application and
/// the file picker.
///
/// Every field write made while tracking is enabled lands on the undo stack,
/// whether it comes from [`SettingsManager::set`] or from a handle obtained via
/// [`SettingsManager::fields`]. Undo and redo restore a field with tracking
/// suspended, so they never record themselves.
pub struct SettingsManager {
    fields: SettingsFields,
    history: Arc<Mutex<ChangeHistory>>,
    tracking: Tracking,
    subscriptions: Vec<(SettingKey, SubscriptionId)>,
    persistence_provider: Arc<dyn SettingsPersistenceProvider>,
    theme_applier: Arc<dyn ThemeApplier>,
    file_picker: Arc<dyn FilePicker>,
    event_sender: broadcast::Sender<SettingsEvent>,
}

impl SettingsManager {
    /// Creates a manager with every field at its default value.
    pub fn new(
        persistence_provider: Arc<dyn SettingsPersistenceProvider>,
        theme_applier: Arc<dyn ThemeApplier>,
        file_picker: Arc<dyn FilePicker>,
    ) -> Self {
        let (event_sender, _) = broadcast::channel(DEFAULT_BROADCAST_CAPACITY);
        let fields = SettingsFields::default();
        let history = Arc::new(Mutex::new(ChangeHistory::new()));
        let tracking = Tracking::new();

        let recorder = Recorder {
            history: Arc::clone(&history),
            tracking: tracking.clone(),
            event_sender: event_sender.clone(),
        };
        let subscriptions = vec![
            recorder.attach(SettingKey::ShowTagCount, &fields.show_tag_count, ChangeRecord::ShowTagCount),
            recorder.attach(SettingKey::ShowDiffSection, &fields.show_diff_section, ChangeRecord::ShowDiffSection),
            recorder.attach(
                SettingKey::ShowCaptionDiffList,
                &fields.show_caption_diff_list,
                ChangeRecord::ShowCaptionDiffList,
            ),
            recorder.attach(SettingKey::ShowTagGroups, &fields.show_tag_groups, ChangeRecord::ShowTagGroups),
            recorder.attach(SettingKey::Theme, &fields.theme, ChangeRecord::Theme),
            recorder.attach(SettingKey::Autocomplete, &fields.autocomplete, ChangeRecord::Autocomplete),
            recorder.attach(SettingKey::AutocompleteFile, &fields.autocomplete_file, ChangeRecord::AutocompleteFile),
            recorder.attach(SettingKey::TagsIgnored, &fields.tags_ignored, ChangeRecord::TagsIgnored),
            recorder.attach(SettingKey::TaggerPort, &fields.tagger_port, ChangeRecord::TaggerPort),
            recorder.attach(
                SettingKey::RecursiveDatasetLoad,
                &fields.recursive_dataset_load,
                ChangeRecord::RecursiveDatasetLoad,
            ),
            recorder.attach(SettingKey::AutoCheckUpdates, &fields.auto_check_updates, ChangeRecord::AutoCheckUpdates),
        ];

        Self {
            fields,
            history,
            tracking,
            subscriptions,
            persistence_provider,
            theme_applier,
            file_picker,
            event_sender,
        }
    }

    /// Observable handles for UI binding.
    pub fn fields(&self) -> &SettingsFields {
        &self.fields
    }

    pub fn snapshot(&self) -> Settings {
        self.fields.snapshot()
    }

    pub fn get(&self, key: SettingKey) -> SettingValue {
        self.fields.get(key)
    }

    /// Edits one field. A theme edit is also applied to the UI.
    ///
    /// Returns whether the field value changed.
    pub fn set(&mut self, value: SettingValue) -> bool {
        match value {
            SettingValue::Theme(name) => self.set_and_apply_theme(name),
            other => self.fields.set(other),
        }
    }

    /// With a name, records it as the new theme and applies it. Without one,
    /// re-applies the current theme and leaves state alone.
    pub fn apply_theme(&mut self, name: Option<&str>) {
        match name {
            Some(name) => {
                self.set_and_apply_theme(name.to_string());
            }
            None => self.theme_applier.apply(&self.fields.theme.get()),
        }
    }

    fn set_and_apply_theme(&mut self, name: String) -> bool {
        let changed = self.fields.theme.set(name.clone());
        self.theme_applier.apply(&name);
        changed
    }

    /// Reverts the most recent change. Returns the restored field, or `None`
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> Option<SettingKey> {
        let record = self.history.lock().undo()?;
        let key = self.restore(record.previous());
        debug!("Undid change of '{}'", key);
        Some(key)
    }

    /// Re-applies the most recently undone change.
    pub fn redo(&mut self) -> Option<SettingKey> {
        let record = self.history.lock().redo()?;
        let key = self.restore(record.value());
        debug!("Redid change of '{}'", key);
        Some(key)
    }

    fn restore(&mut self, value: SettingValue) -> SettingKey {
        let key = value.key();
        {
            let _suspended = self.tracking.suspend();
            self.fields.set(value);
        }
        if key == SettingKey::Theme {
            self.theme_applier.apply(&self.fields.theme.get());
        }
        self.publish_history_changed();
        key
    }

    pub fn reset_history(&mut self) {
        self.history.lock().clear();
        self.publish_history_changed();
    }

    pub fn can_undo(&self) -> bool {
        self.history.lock().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.lock().can_redo()
    }

    pub fn undo_len(&self) -> usize {
        self.history.lock().undo_len()
    }

    pub fn redo_len(&self) -> usize {
        self.history.lock().redo_len()
    }

    /// A copy of both stacks.
    pub fn history(&self) -> ChangeHistory {
        self.history.lock().clone()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_enabled()
    }

    /// Merges the persisted snapshot into the live fields and clears history.
    ///
    /// Fields absent from storage keep their current values. Nothing is
    /// recorded and the theme is not applied; call
    /// [`SettingsManager::apply_theme`] with `None` afterwards for that.
    /// On failure fields and history are left untouched.
    pub async fn load(&mut self) -> Result<(), SettingsError> {
        info!("Loading settings...");
        let _suspended = self.tracking.suspend();

        let partial = self.persistence_provider.load().await.map_err(|e| {
            warn!("Loading settings failed: {}", e);
            e
        })?;
        for value in partial.into_values() {
            self.fields.set(value);
        }
        self.reset_history();

        let settings = self.fields.snapshot();
        info!("Settings loaded.");
        publish(&self.event_sender, SettingsEvent::Loaded { settings });
        Ok(())
    }

    /// Persists the current snapshot. History is cleared only on success.
    pub async fn save(&mut self) -> Result<(), SettingsError> {
        info!("Saving settings...");
        let settings = self.fields.snapshot();
        self.persistence_provider.save(&settings).await.map_err(|e| {
            warn!("Saving settings failed: {}", e);
            e
        })?;
        self.reset_history();

        info!("Settings saved.");
        publish(&self.event_sender, SettingsEvent::Saved { settings });
        Ok(())
    }

    /// Whether the live state equals the last persisted snapshot.
    pub async fn are_settings_saved(&self) -> Result<bool, SettingsError> {
        let settings = self.fields.snapshot();
        self.persistence_provider.compare(&settings).await
    }

    /// Lets the user pick the autocomplete data file and saves right away.
    ///
    /// Returns `Ok(false)` without touching anything when the user cancels.
    pub async fn change_autocomplete_file(&mut self) -> Result<bool, SettingsError> {
        let Some(path) = self.file_picker.pick_autocomplete_file().await else {
            debug!("Autocomplete file selection cancelled");
            return Ok(false);
        };

        info!("Autocomplete file set to {:?}", path);
        self.fields.autocomplete_file.set(path.to_string_lossy().into_owned());
        self.save().await?;
        Ok(true)
    }

    pub fn subscribe_to_events(&self) -> broadcast::Receiver<SettingsEvent> {
        self.event_sender.subscribe()
    }

    fn publish_history_changed(&self) {
        let (undo_len, redo_len) = {
            let history = self.history.lock();
            (history.undo_len(), history.redo_len())
        };
        publish(&self.event_sender, SettingsEvent::HistoryChanged { undo_len, redo_len });
    }
}

impl Drop for SettingsManager {
    fn drop(&mut self) {
        for (key, id) in self.subscriptions.drain(..) {
            self.fields.unsubscribe(key, id);
        }
    }
}
