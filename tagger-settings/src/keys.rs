use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown setting key: {0}")]
pub struct SettingKeyParseError(String);

/// Name of one of the eleven settings fields.
///
/// Displays and parses as the camelCase key used in the persisted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingKey {
    ShowTagCount,
    ShowDiffSection,
    ShowCaptionDiffList,
    ShowTagGroups,
    Theme,
    Autocomplete,
    AutocompleteFile,
    TagsIgnored,
    TaggerPort,
    RecursiveDatasetLoad,
    AutoCheckUpdates,
}

impl SettingKey {
    pub const ALL: [SettingKey; 11] = [
        SettingKey::ShowTagCount,
        SettingKey::ShowDiffSection,
        SettingKey::ShowCaptionDiffList,
        SettingKey::ShowTagGroups,
        SettingKey::Theme,
        SettingKey::Autocomplete,
        SettingKey::AutocompleteFile,
        SettingKey::TagsIgnored,
        SettingKey::TaggerPort,
        SettingKey::RecursiveDatasetLoad,
        SettingKey::AutoCheckUpdates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::ShowTagCount => "showTagCount",
            SettingKey::ShowDiffSection => "showDiffSection",
            SettingKey::ShowCaptionDiffList => "showCaptionDiffList",
            SettingKey::ShowTagGroups => "showTagGroups",
            SettingKey::Theme => "theme",
            SettingKey::Autocomplete => "autocomplete",
            SettingKey::AutocompleteFile => "autocompleteFile",
            SettingKey::TagsIgnored => "tagsIgnored",
            SettingKey::TaggerPort => "taggerPort",
            SettingKey::RecursiveDatasetLoad => "recursiveDatasetLoad",
            SettingKey::AutoCheckUpdates => "autoCheckUpdates",
        }
    }
}

impl Display for SettingKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = SettingKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SettingKeyParseError(s.to_string()))
    }
}
