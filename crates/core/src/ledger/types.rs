//! Ledger types.

use std::collections::BTreeMap;

use crate::grouping::TitleGroup;

/// Titles reported by earlier runs, each with the group it was reported with.
///
/// Entries are write-once: inserting a title that is already present keeps
/// the existing snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportedSet {
    entries: BTreeMap<String, TitleGroup>,
}

impl ReportedSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `title` has been reported.
    pub fn contains(&self, title: &str) -> bool {
        self.entries.contains_key(title)
    }

    /// The snapshot recorded for `title`.
    pub fn get(&self, title: &str) -> Option<&TitleGroup> {
        self.entries.get(title)
    }

    /// Records a group under its title.
    ///
    /// Returns `false`, leaving the set unchanged, if the title is already present.
    pub fn insert(&mut self, group: TitleGroup) -> bool {
        if self.entries.contains_key(&group.title) {
            return false;
        }
        self.entries.insert(group.title.clone(), group);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshots in title order.
    pub fn iter(&self) -> impl Iterator<Item = &TitleGroup> {
        self.entries.values()
    }
}

impl FromIterator<TitleGroup> for ReportedSet {
    fn from_iter<I: IntoIterator<Item = TitleGroup>>(iter: I) -> Self {
        let mut set = Self::new();
        for group in iter {
            set.insert(group);
        }
        set
    }
}
