// src/selection.rs
// Active credential set, kept in issuance-date order

use serde::Serialize;

use crate::catalog::CredentialDescriptor;

/// What a toggle did to the set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggled {
    Added,
    Removed,
}

/// The credentials the user has activated.
///
/// Never holds two entries with the same id. After every insertion the set
/// is re-sorted ascending by issuance date; the sort is stable so a new
/// entry lands after existing entries issued on the same day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    entries: Vec<CredentialDescriptor>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the descriptor if present, otherwise insert it and re-sort
    pub fn toggle(&mut self, card: &CredentialDescriptor) -> Toggled {
        if self.contains(card.id) {
            self.entries.retain(|c| c.id != card.id);
            Toggled::Removed
        } else {
            self.insert_sorted(*card);
            Toggled::Added
        }
    }

    /// Insert if absent. Returns false when the id was already active.
    pub fn activate(&mut self, card: &CredentialDescriptor) -> bool {
        if self.contains(card.id) {
            return false;
        }
        self.insert_sorted(*card);
        true
    }

    fn insert_sorted(&mut self, card: CredentialDescriptor) {
        self.entries.push(card);
        self.entries.sort_by_key(|c| c.issued_on());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CredentialDescriptor> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[CredentialDescriptor] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.entries.iter().map(|c| c.id).collect()
    }

    /// Aggregate ZEN score of the active set
    pub fn total_score(&self) -> u32 {
        self.entries.iter().map(|c| c.score).sum()
    }

    /// First entry of `catalog`, in catalog order, that is not active
    pub fn first_inactive<'a>(
        &self,
        catalog: &'a [CredentialDescriptor],
    ) -> Option<&'a CredentialDescriptor> {
        catalog.iter().find(|c| !self.contains(c.id))
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a CredentialDescriptor;
    type IntoIter = std::slice::Iter<'a, CredentialDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, CATALOG};

    fn card(id: &str) -> &'static CredentialDescriptor {
        catalog::find(id).unwrap()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = SelectionSet::new();
        assert_eq!(set.toggle(card("web3-1")), Toggled::Added);
        assert!(set.contains("web3-1"));
        assert_eq!(set.toggle(card("web3-1")), Toggled::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn test_sorted_by_date_after_insertions() {
        let mut set = SelectionSet::new();
        for id in ["spec-4", "pioneer-1", "web3-1", "vanguard-1", "spec-1"] {
            set.toggle(card(id));
        }
        assert_eq!(
            set.ids(),
            vec!["pioneer-1", "spec-1", "vanguard-1", "web3-1", "spec-4"]
        );
    }

    #[test]
    fn test_double_toggle_restores_order() {
        let mut set = SelectionSet::new();
        for id in ["vanguard-3", "pioneer-2", "spec-2"] {
            set.toggle(card(id));
        }
        let before = set.clone();
        set.toggle(card("web3-2"));
        set.toggle(card("web3-2"));
        assert_eq!(set, before);

        set.toggle(card("pioneer-2"));
        set.toggle(card("pioneer-2"));
        assert_eq!(set, before);
    }

    #[test]
    fn test_activate_never_duplicates() {
        let mut set = SelectionSet::new();
        assert!(set.activate(card("spec-3")));
        assert!(!set.activate(card("spec-3")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_total_score_and_first_inactive() {
        let mut set = SelectionSet::new();
        assert_eq!(set.first_inactive(CATALOG).map(|c| c.id), Some("pioneer-1"));
        set.toggle(card("pioneer-1"));
        set.toggle(card("vanguard-4"));
        assert_eq!(set.total_score(), 50);
        assert_eq!(set.first_inactive(CATALOG).map(|c| c.id), Some("pioneer-2"));

        for c in CATALOG {
            set.activate(c);
        }
        assert!(set.first_inactive(CATALOG).is_none());
    }
}
