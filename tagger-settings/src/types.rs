use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::keys::SettingKey;

pub const DEFAULT_THEME: &str = "dark";
pub const DEFAULT_TAGGER_PORT: u16 = 3067;

/// A point-in-time snapshot of every setting.
///
/// Serialized with the camelCase keys of the settings file. Missing keys
/// fall back to their defaults when deserializing a full snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub show_tag_count: bool,
    pub show_diff_section: bool,
    pub show_caption_diff_list: bool,
    pub show_tag_groups: bool,
    pub theme: String,
    pub autocomplete: bool,
    pub autocomplete_file: String,
    pub tags_ignored: BTreeSet<String>,
    pub tagger_port: u16,
    pub recursive_dataset_load: bool,
    pub auto_check_updates: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_tag_count: false,
            show_diff_section: true,
            show_caption_diff_list: true,
            show_tag_groups: true,
            theme: DEFAULT_THEME.to_string(),
            autocomplete: true,
            autocomplete_file: String::new(),
            tags_ignored: BTreeSet::new(),
            tagger_port: DEFAULT_TAGGER_PORT,
            recursive_dataset_load: false,
            auto_check_updates: true,
        }
    }
}

impl Settings {
    /// Returns a copy where every field present in `partial` replaces the
    /// current one; absent fields are kept.
    pub fn merged_with(mut self, partial: PartialSettings) -> Self {
        for value in partial.into_values() {
            self.apply(value);
        }
        self
    }

    /// Overwrites the field named by `value`.
    pub fn apply(&mut self, value: SettingValue) {
        match value {
            SettingValue::ShowTagCount(v) => self.show_tag_count = v,
            SettingValue::ShowDiffSection(v) => self.show_diff_section = v,
            SettingValue::ShowCaptionDiffList(v) => self.show_caption_diff_list = v,
            SettingValue::ShowTagGroups(v) => self.show_tag_groups = v,
            SettingValue::Theme(v) => self.theme = v,
            SettingValue::Autocomplete(v) => self.autocomplete = v,
            SettingValue::AutocompleteFile(v) => self.autocomplete_file = v,
            SettingValue::TagsIgnored(v) => self.tags_ignored = v,
            SettingValue::TaggerPort(v) => self.tagger_port = v,
            SettingValue::RecursiveDatasetLoad(v) => self.recursive_dataset_load = v,
            SettingValue::AutoCheckUpdates(v) => self.auto_check_updates = v,
        }
    }

    pub fn get(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::ShowTagCount => SettingValue::ShowTagCount(self.show_tag_count),
            SettingKey::ShowDiffSection => SettingValue::ShowDiffSection(self.show_diff_section),
            SettingKey::ShowCaptionDiffList => SettingValue::ShowCaptionDiffList(self.show_caption_diff_list),
            SettingKey::ShowTagGroups => SettingValue::ShowTagGroups(self.show_tag_groups),
            SettingKey::Theme => SettingValue::Theme(self.theme.clone()),
            SettingKey::Autocomplete => SettingValue::Autocomplete(self.autocomplete),
            SettingKey::AutocompleteFile => SettingValue::AutocompleteFile(self.autocomplete_file.clone()),
            SettingKey::TagsIgnored => SettingValue::TagsIgnored(self.tags_ignored.clone()),
            SettingKey::TaggerPort => SettingValue::TaggerPort(self.tagger_port),
            SettingKey::RecursiveDatasetLoad => SettingValue::RecursiveDatasetLoad(self.recursive_dataset_load),
            SettingKey::AutoCheckUpdates => SettingValue::AutoCheckUpdates(self.auto_check_updates),
        }
    }
}

/// A possibly incomplete snapshot, as read back from persistence.
///
/// Unknown keys are ignored and `tagsIgnored` is deduplicated on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_tag_count: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_diff_section: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_caption_diff_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_tag_groups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_ignored: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagger_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive_dataset_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_check_updates: Option<bool>,
}

impl PartialSettings {
    /// The present fields, in [`SettingKey::ALL`] order.
    pub fn into_values(self) -> Vec<SettingValue> {
        [
            self.show_tag_count.map(SettingValue::ShowTagCount),
            self.show_diff_section.map(SettingValue::ShowDiffSection),
            self.show_caption_diff_list.map(SettingValue::ShowCaptionDiffList),
            self.show_tag_groups.map(SettingValue::ShowTagGroups),
            self.theme.map(SettingValue::Theme),
            self.autocomplete.map(SettingValue::Autocomplete),
            self.autocomplete_file.map(SettingValue::AutocompleteFile),
            self.tags_ignored.map(SettingValue::TagsIgnored),
            self.tagger_port.map(SettingValue::TaggerPort),
            self.recursive_dataset_load.map(SettingValue::RecursiveDatasetLoad),
            self.auto_check_updates.map(SettingValue::AutoCheckUpdates),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == PartialSettings::default()
    }
}

impl From<Settings> for PartialSettings {
    fn from(settings: Settings) -> Self {
        Self {
            show_tag_count: Some(settings.show_tag_count),
            show_diff_section: Some(settings.show_diff_section),
            show_caption_diff_list: Some(settings.show_caption_diff_list),
            show_tag_groups: Some(settings.show_tag_groups),
            theme: Some(settings.theme),
            autocomplete: Some(settings.autocomplete),
            autocomplete_file: Some(settings.autocomplete_file),
            tags_ignored: Some(settings.tags_ignored),
            tagger_port: Some(settings.tagger_port),
            recursive_dataset_load: Some(settings.recursive_dataset_load),
            auto_check_updates: Some(settings.auto_check_updates),
        }
    }
}

/// The value of a single setting, tagged by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    ShowTagCount(bool),
    ShowDiffSection(bool),
    ShowCaptionDiffList(bool),
    ShowTagGroups(bool),
    Theme(String),
    Autocomplete(bool),
    AutocompleteFile(String),
    TagsIgnored(BTreeSet<String>),
    TaggerPort(u16),
    RecursiveDatasetLoad(bool),
    AutoCheckUpdates(bool),
}

impl SettingValue {
    pub fn key(&self) -> SettingKey {
        match self {
            SettingValue::ShowTagCount(_) => SettingKey::ShowTagCount,
            SettingValue::ShowDiffSection(_) => SettingKey::ShowDiffSection,
            SettingValue::ShowCaptionDiffList(_) => SettingKey::ShowCaptionDiffList,
            SettingValue::ShowTagGroups(_) => SettingKey::ShowTagGroups,
            SettingValue::Theme(_) => SettingKey::Theme,
            SettingValue::Autocomplete(_) => SettingKey::Autocomplete,
            SettingValue::AutocompleteFile(_) => SettingKey::AutocompleteFile,
            SettingValue::TagsIgnored(_) => SettingKey::TagsIgnored,
            SettingValue::TaggerPort(_) => SettingKey::TaggerPort,
            SettingValue::RecursiveDatasetLoad(_) => SettingKey::RecursiveDatasetLoad,
            SettingValue::AutoCheckUpdates(_) => SettingKey::AutoCheckUpdates,
        }
    }
}
