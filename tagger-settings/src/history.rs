//! Linear undo/redo history of settings changes.

use std::collections::BTreeSet;

use crate::keys::SettingKey;
use crate::types::SettingValue;

/// Old and new value of one field change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change<T> {
    pub previous: T,
    pub value: T,
}

impl<T> Change<T> {
    pub fn new(previous: T, value: T) -> Self {
        Self { previous, value }
    }
}

/// A recorded change, tagged by the field it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeRecord {
    ShowTagCount(Change<bool>),
    ShowDiffSection(Change<bool>),
    ShowCaptionDiffList(Change<bool>),
    ShowTagGroups(Change<bool>),
    Theme(Change<String>),
    Autocomplete(Change<bool>),
    AutocompleteFile(Change<String>),
    TagsIgnored(Change<BTreeSet<String>>),
    TaggerPort(Change<u16>),
    RecursiveDatasetLoad(Change<bool>),
    AutoCheckUpdates(Change<bool>),
}

macro_rules! change_side {
    ($record:expr, $side:ident) => {
        match $record {
            ChangeRecord::ShowTagCount(c) => SettingValue::ShowTagCount(c.$side),
            ChangeRecord::ShowDiffSection(c) => SettingValue::ShowDiffSection(c.$side),
            ChangeRecord::ShowCaptionDiffList(c) => SettingValue::ShowCaptionDiffList(c.$side),
            ChangeRecord::ShowTagGroups(c) => SettingValue::ShowTagGroups(c.$side),
            ChangeRecord::Theme(c) => SettingValue::Theme(c.$side.clone()),
            ChangeRecord::Autocomplete(c) => SettingValue::Autocomplete(c.$side),
            ChangeRecord::AutocompleteFile(c) => SettingValue::AutocompleteFile(c.$side.clone()),
            ChangeRecord::TagsIgnored(c) => SettingValue::TagsIgnored(c.$side.clone()),
            ChangeRecord::TaggerPort(c) => SettingValue::TaggerPort(c.$side),
            ChangeRecord::RecursiveDatasetLoad(c) => SettingValue::RecursiveDatasetLoad(c.$side),
            ChangeRecord::AutoCheckUpdates(c) => SettingValue::AutoCheckUpdates(c.$side),
        }
    };
}

impl ChangeRecord {
    pub fn key(&self) -> SettingKey {
        match self {
            ChangeRecord::ShowTagCount(_) => SettingKey::ShowTagCount,
            ChangeRecord::ShowDiffSection(_) => SettingKey::ShowDiffSection,
            ChangeRecord::ShowCaptionDiffList(_) => SettingKey::ShowCaptionDiffList,
            ChangeRecord::ShowTagGroups(_) => SettingKey::ShowTagGroups,
            ChangeRecord::Theme(_) => SettingKey::Theme,
            ChangeRecord::Autocomplete(_) => SettingKey::Autocomplete,
            ChangeRecord::AutocompleteFile(_) => SettingKey::AutocompleteFile,
            ChangeRecord::TagsIgnored(_) => SettingKey::TagsIgnored,
            ChangeRecord::TaggerPort(_) => SettingKey::TaggerPort,
            ChangeRecord::RecursiveDatasetLoad(_) => SettingKey::RecursiveDatasetLoad,
            ChangeRecord::AutoCheckUpdates(_) => SettingKey::AutoCheckUpdates,
        }
    }

    /// The value the field held before the change; restored by undo.
    pub fn previous(&self) -> SettingValue {
        change_side!(self, previous)
    }

    /// The value the change wrote; restored by redo.
    pub fn value(&self) -> SettingValue {
        change_side!(self, value)
    }
}

/// Undo and redo stacks, top at the end of each vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeHistory {
    undo_stack: Vec<ChangeRecord>,
    redo_stack: Vec<ChangeRecord>,
}

impl ChangeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a fresh user change. Anything that could be redone is discarded.
    pub fn record(&mut self, record: ChangeRecord) {
        self.undo_stack.push(record);
        self.redo_stack.clear();
    }

    /// Moves the newest undo entry onto the redo stack and returns it.
    pub fn undo(&mut self) -> Option<ChangeRecord> {
        let record = self.undo_stack.pop()?;
        self.redo_stack.push(record.clone());
        Some(record)
    }

    /// Moves the newest redo entry back onto the undo stack and returns it.
    pub fn redo(&mut self) -> Option<ChangeRecord> {
        let record = self.redo_stack.pop()?;
        self.undo_stack.push(record.clone());
        Some(record)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_stack(&self) -> &[ChangeRecord] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[ChangeRecord] {
        &self.redo_stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn port(previous: u16, value: u16) -> ChangeRecord {
        ChangeRecord::TaggerPort(Change::new(previous, value))
    }

    #[test]
    fn record_accessors_follow_the_variant() {
        let record = ChangeRecord::Theme(Change::new("dark".to_string(), "light".to_string()));
        assert_eq!(record.key(), SettingKey::Theme);
        assert_eq!(record.previous(), SettingValue::Theme("dark".to_string()));
        assert_eq!(record.value(), SettingValue::Theme("light".to_string()));
    }

    #[test]
    fn undo_and_redo_move_one_record() {
        let mut history = ChangeHistory::new();
        history.record(port(1, 2));
        history.record(port(2, 3));

        assert_eq!(history.undo(), Some(port(2, 3)));
        assert_eq!((history.undo_len(), history.redo_len()), (1, 1));
        assert_eq!(history.redo(), Some(port(2, 3)));
        assert_eq!(history.undo_stack(), &[port(1, 2), port(2, 3)]);
        assert!(!history.can_redo());
    }

    #[test]
    fn record_after_undo_clears_redo() {
        let mut history = ChangeHistory::new();
        history.record(port(1, 2));
        history.undo();
        assert!(history.can_redo());

        history.record(port(1, 5));
        assert!(!history.can_redo());
        assert_eq!(history.undo_stack(), &[port(1, 5)]);
    }

    #[test]
    fn empty_stacks_are_noops() {
        let mut history = ChangeHistory::new();
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert_eq!(history, ChangeHistory::default());
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = ChangeHistory::new();
        history.record(port(1, 2));
        history.record(port(2, 3));
        history.undo();

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
