//! The eleven observable settings fields.

use std::collections::BTreeSet;

use crate::keys::SettingKey;
use crate::observable::{Observable, SubscriptionId};
use crate::types::{SettingValue, Settings};

/// Live, observable settings state.
///
/// Cloning yields handles to the same fields, so a UI layer can bind to them
/// directly. Writes through a handle go through the same change tracking as
/// edits made via the manager.
#[derive(Debug, Clone)]
pub struct SettingsFields {
    pub show_tag_count: Observable<bool>,
    pub show_diff_section: Observable<bool>,
    pub show_caption_diff_list: Observable<bool>,
    pub show_tag_groups: Observable<bool>,
    pub theme: Observable<String>,
    pub autocomplete: Observable<bool>,
    pub autocomplete_file: Observable<String>,
    pub tags_ignored: Observable<BTreeSet<String>>,
    pub tagger_port: Observable<u16>,
    pub recursive_dataset_load: Observable<bool>,
    pub auto_check_updates: Observable<bool>,
}

impl Default for SettingsFields {
    fn default() -> Self {
        Self::from_settings(Settings::default())
    }
}

impl SettingsFields {
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            show_tag_count: Observable::new(settings.show_tag_count),
            show_diff_section: Observable::new(settings.show_diff_section),
            show_caption_diff_list: Observable::new(settings.show_caption_diff_list),
            show_tag_groups: Observable::new(settings.show_tag_groups),
            theme: Observable::new(settings.theme),
            autocomplete: Observable::new(settings.autocomplete),
            autocomplete_file: Observable::new(settings.autocomplete_file),
            tags_ignored: Observable::new(settings.tags_ignored),
            tagger_port: Observable::new(settings.tagger_port),
            recursive_dataset_load: Observable::new(settings.recursive_dataset_load),
            auto_check_updates: Observable::new(settings.auto_check_updates),
        }
    }

    pub fn snapshot(&self) -> Settings {
        Settings {
            show_tag_count: self.show_tag_count.get(),
            show_diff_section: self.show_diff_section.get(),
            show_caption_diff_list: self.show_caption_diff_list.get(),
            show_tag_groups: self.show_tag_groups.get(),
            theme: self.theme.get(),
            autocomplete: self.autocomplete.get(),
            autocomplete_file: self.autocomplete_file.get(),
            tags_ignored: self.tags_ignored.get(),
            tagger_port: self.tagger_port.get(),
            recursive_dataset_load: self.recursive_dataset_load.get(),
            auto_check_updates: self.auto_check_updates.get(),
        }
    }

    pub fn get(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::ShowTagCount => SettingValue::ShowTagCount(self.show_tag_count.get()),
            SettingKey::ShowDiffSection => SettingValue::ShowDiffSection(self.show_diff_section.get()),
            SettingKey::ShowCaptionDiffList => SettingValue::ShowCaptionDiffList(self.show_caption_diff_list.get()),
            SettingKey::ShowTagGroups => SettingValue::ShowTagGroups(self.show_tag_groups.get()),
            SettingKey::Theme => SettingValue::Theme(self.theme.get()),
            SettingKey::Autocomplete => SettingValue::Autocomplete(self.autocomplete.get()),
            SettingKey::AutocompleteFile => SettingValue::AutocompleteFile(self.autocomplete_file.get()),
            SettingKey::TagsIgnored => SettingValue::TagsIgnored(self.tags_ignored.get()),
            SettingKey::TaggerPort => SettingValue::TaggerPort(self.tagger_port.get()),
            SettingKey::RecursiveDatasetLoad => SettingValue::RecursiveDatasetLoad(self.recursive_dataset_load.get()),
            SettingKey::AutoCheckUpdates => SettingValue::AutoCheckUpdates(self.auto_check_updates.get()),
        }
    }

    /// Writes one field. Returns whether its value changed.
    pub fn set(&self, value: SettingValue) -> bool {
        match value {
            SettingValue::ShowTagCount(v) => self.show_tag_count.set(v),
            SettingValue::ShowDiffSection(v) => self.show_diff_section.set(v),
            SettingValue::ShowCaptionDiffList(v) => self.show_caption_diff_list.set(v),
            SettingValue::ShowTagGroups(v) => self.show_tag_groups.set(v),
            SettingValue::Theme(v) => self.theme.set(v),
            SettingValue::Autocomplete(v) => self.autocomplete.set(v),
            SettingValue::AutocompleteFile(v) => self.autocomplete_file.set(v),
            SettingValue::TagsIgnored(v) => self.tags_ignored.set(v),
            SettingValue::TaggerPort(v) => self.tagger_port.set(v),
            SettingValue::RecursiveDatasetLoad(v) => self.recursive_dataset_load.set(v),
            SettingValue::AutoCheckUpdates(v) => self.auto_check_updates.set(v),
        }
    }

    pub(crate) fn unsubscribe(&self, key: SettingKey, id: SubscriptionId) -> bool {
        match key {
            SettingKey::ShowTagCount => self.show_tag_count.unsubscribe(id),
            SettingKey::ShowDiffSection => self.show_diff_section.unsubscribe(id),
            SettingKey::ShowCaptionDiffList => self.show_caption_diff_list.unsubscribe(id),
            SettingKey::ShowTagGroups => self.show_tag_groups.unsubscribe(id),
            SettingKey::Theme => self.theme.unsubscribe(id),
            SettingKey::Autocomplete => self.autocomplete.unsubscribe(id),
            SettingKey::AutocompleteFile => self.autocomplete_file.unsubscribe(id),
            SettingKey::TagsIgnored => self.tags_ignored.unsubscribe(id),
            SettingKey::TaggerPort => self.tagger_port.unsubscribe(id),
            SettingKey::RecursiveDatasetLoad => self.recursive_dataset_load.unsubscribe(id),
            SettingKey::AutoCheckUpdates => self.auto_check_updates.unsubscribe(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_snapshot_agree() {
        let fields = SettingsFields::default();
        assert!(fields.set(SettingValue::TaggerPort(8080)));
        assert!(!fields.set(SettingValue::TaggerPort(8080)));
        assert!(fields.set(SettingValue::TagsIgnored(["x".to_string()].into_iter().collect())));

        let snapshot = fields.snapshot();
        assert_eq!(snapshot.tagger_port, 8080);
        assert!(snapshot.tags_ignored.contains("x"));
        for key in SettingKey::ALL {
            assert_eq!(fields.get(key), snapshot.get(key));
        }
    }
}
