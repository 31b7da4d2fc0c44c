use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

use tagger_settings::{
    FilePicker, FilesystemSettingsProvider, PartialSettings, SettingKey, SettingValue, Settings, SettingsError,
    SettingsManager, SettingsPersistenceProvider, ThemeApplier, WatchThemeApplier,
};

#[derive(Default)]
struct MemoryStore {
    stored: Mutex<Option<PartialSettings>>,
    last_saved: Mutex<Option<Settings>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStore {
    fn with_partial(partial: PartialSettings) -> Self {
        Self { stored: Mutex::new(Some(partial)), ..Self::default() }
    }
}

#[async_trait]
impl SettingsPersistenceProvider for MemoryStore {
    async fn load(&self) -> Result<PartialSettings, SettingsError> {
        Ok(self.stored.lock().unwrap().clone().unwrap_or_default())
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(SettingsError::io(
                "save",
                "/memory",
                std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            ));
        }
        *self.stored.lock().unwrap() = Some(PartialSettings::from(settings.clone()));
        *self.last_saved.lock().unwrap() = Some(settings.clone());
        Ok(())
    }

    async fn compare(&self, settings: &Settings) -> Result<bool, SettingsError> {
        let baseline = self.last_saved.lock().unwrap().clone().unwrap_or_default();
        Ok(baseline == *settings)
    }
}

#[derive(Default)]
struct RecordingTheme {
    applied: Mutex<Vec<String>>,
}

impl RecordingTheme {
    fn applied(&self) -> Vec<String> {
        self.applied.lock().unwrap().clone()
    }
}

impl ThemeApplier for RecordingTheme {
    fn apply(&self, name: &str) {
        self.applied.lock().unwrap().push(name.to_string());
    }
}

struct FixedPicker(Option<PathBuf>);

#[async_trait]
impl FilePicker for FixedPicker {
    async fn pick_autocomplete_file(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}

struct Harness {
    manager: SettingsManager,
    store: Arc<MemoryStore>,
    theme: Arc<RecordingTheme>,
}

fn harness_with(store: MemoryStore, picked: Option<PathBuf>) -> Harness {
    let store = Arc::new(store);
    let theme = Arc::new(RecordingTheme::default());
    let manager = SettingsManager::new(store.clone(), theme.clone(), Arc::new(FixedPicker(picked)));
    Harness { manager, store, theme }
}

fn harness() -> Harness {
    harness_with(MemoryStore::default(), None)
}

fn edits() -> Vec<SettingValue> {
    vec![
        SettingValue::TaggerPort(8080),
        SettingValue::ShowTagCount(true),
        SettingValue::TagsIgnored(["blurry", "watermark"].iter().map(|s| s.to_string()).collect()),
        SettingValue::AutocompleteFile("/data/tags.csv".to_string()),
        SettingValue::TaggerPort(9090),
        SettingValue::RecursiveDatasetLoad(true),
    ]
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(6)]
fn n_edits_n_undos_n_redos(#[case] n: usize) {
    let mut h = harness();
    let before = h.manager.snapshot();

    let applied: Vec<SettingValue> = edits().into_iter().take(n).collect();
    for value in &applied {
        h.manager.set(value.clone());
    }
    let after = h.manager.snapshot();

    for _ in 0..n {
        assert!(h.manager.undo().is_some());
    }
    assert_eq!(h.manager.snapshot(), before);

    let history = h.manager.history();
    let redo_keys: Vec<SettingKey> = history.redo_stack().iter().map(|r| r.key()).collect();
    let expected: Vec<SettingKey> = applied.iter().rev().map(|v| v.key()).collect();
    assert_eq!(redo_keys, expected);

    for _ in 0..n {
        assert!(h.manager.redo().is_some());
    }
    assert_eq!(h.manager.snapshot(), after);
}

#[tokio::test]
async fn tagger_port_scenario() {
    let mut h = harness();

    h.manager.set(SettingValue::TaggerPort(8080));
    h.manager.undo();
    assert_eq!(h.manager.snapshot().tagger_port, 3067);
    h.manager.redo();
    assert_eq!(h.manager.snapshot().tagger_port, 8080);

    h.manager.save().await.unwrap();
    assert!(!h.manager.can_undo());
    assert!(!h.manager.can_redo());
    assert_eq!(h.manager.undo(), None);
    assert_eq!(h.manager.snapshot().tagger_port, 8080);
}

#[test]
fn theme_scenario_applies_once_per_step() {
    let mut h = harness();

    h.manager.set(SettingValue::Theme("light".to_string()));
    assert_eq!(h.theme.applied(), vec!["light"]);

    h.manager.undo();
    assert_eq!(h.theme.applied(), vec!["light", "dark"]);
    assert_eq!(h.manager.fields().theme.get(), "dark");

    h.manager.redo();
    assert_eq!(h.theme.applied(), vec!["light", "dark", "light"]);
}

#[test]
fn edit_after_undo_discards_redo() {
    let mut h = harness();
    h.manager.set(SettingValue::ShowTagGroups(false));
    h.manager.set(SettingValue::Autocomplete(false));
    h.manager.undo();

    h.manager.fields().show_diff_section.set(false);
    assert!(!h.manager.can_redo());
    assert_eq!(h.manager.redo(), None);
}

#[tokio::test]
async fn saved_state_detection() {
    let mut h = harness();
    h.manager.set(SettingValue::ShowCaptionDiffList(false));
    h.manager.save().await.unwrap();
    assert!(h.manager.are_settings_saved().await.unwrap());

    h.manager.set(SettingValue::AutoCheckUpdates(false));
    assert!(!h.manager.are_settings_saved().await.unwrap());

    h.manager.undo();
    assert!(h.manager.are_settings_saved().await.unwrap());
}

#[tokio::test]
async fn load_preserves_fields_missing_from_storage() {
    let partial = PartialSettings { show_tag_count: Some(true), ..PartialSettings::default() };
    let mut h = harness_with(MemoryStore::with_partial(partial), None);
    h.manager.fields().tagger_port.set(5000);

    h.manager.load().await.unwrap();

    let settings = h.manager.snapshot();
    assert!(settings.show_tag_count);
    assert_eq!(settings.tagger_port, 5000);
    assert!(!h.manager.can_undo());
    assert!(h.theme.applied().is_empty());
}

#[tokio::test]
async fn failed_save_leaves_history_in_place() {
    let store = MemoryStore::default();
    store.fail_saves.store(true, Ordering::SeqCst);
    let mut h = harness_with(store, None);
    h.manager.set(SettingValue::TaggerPort(8080));

    assert!(matches!(h.manager.save().await, Err(SettingsError::Io { .. })));
    assert_eq!(h.manager.undo(), Some(SettingKey::TaggerPort));
    assert_eq!(h.manager.snapshot().tagger_port, 3067);
}

#[tokio::test]
async fn autocomplete_file_pick_and_cancel() {
    let mut cancelled = harness();
    assert!(!cancelled.manager.change_autocomplete_file().await.unwrap());
    assert_eq!(cancelled.store.saves.load(Ordering::SeqCst), 0);
    assert_eq!(cancelled.manager.snapshot(), Settings::default());

    let mut picked = harness_with(MemoryStore::default(), Some(PathBuf::from("/data/e621.csv")));
    assert!(picked.manager.change_autocomplete_file().await.unwrap());
    assert_eq!(picked.store.saves.load(Ordering::SeqCst), 1);
    assert_eq!(picked.manager.snapshot().autocomplete_file, "/data/e621.csv");
    assert!(picked.manager.are_settings_saved().await.unwrap());
}

#[tokio::test]
async fn filesystem_round_trip_with_watch_theme() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config").join("settings.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{ "theme": "light", "tagsIgnored": ["a", "a", "b"], "unknown": 1 }"#).unwrap();

    let theme = Arc::new(WatchThemeApplier::default());
    let mut receiver = theme.subscribe();
    let mut manager = SettingsManager::new(
        Arc::new(FilesystemSettingsProvider::new(&path)),
        theme.clone(),
        Arc::new(FixedPicker(None)),
    );

    manager.load().await.unwrap();
    let expected_tags: BTreeSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    assert_eq!(manager.snapshot().tags_ignored, expected_tags);
    assert_eq!(theme.current(), "dark");
    assert!(manager.are_settings_saved().await.unwrap());

    manager.apply_theme(None);
    receiver.changed().await.unwrap();
    assert_eq!(*receiver.borrow(), "light");
    assert!(!manager.can_undo());

    manager.set(SettingValue::TaggerPort(8080));
    assert!(!manager.are_settings_saved().await.unwrap());
    manager.save().await.unwrap();
    assert!(manager.are_settings_saved().await.unwrap());

    let mut reloaded = SettingsManager::new(
        Arc::new(FilesystemSettingsProvider::new(&path)),
        Arc::new(WatchThemeApplier::default()),
        Arc::new(FixedPicker(None)),
    );
    reloaded.load().await.unwrap();
    assert_eq!(reloaded.snapshot(), manager.snapshot());
}
