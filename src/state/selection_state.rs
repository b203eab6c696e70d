//! Selection State
//!
//! The set of records the user has marked, keyed by record id.

use hashlink::LinkedHashMap;

use crate::domain::artwork::Artwork;

/// Insertion-ordered selection set keyed by record id.
///
/// Selection deliberately survives page changes: records selected on a
/// previous page stay in the set until explicitly overwritten, even though
/// they are no longer part of the loaded page. Hosts that want eviction on
/// page change opt in via [`SelectionState::prune_missing`]; the controller
/// never prunes on its own.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: LinkedHashMap<u64, Artwork>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Check membership by record id
    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.contains_key(&id)
    }

    /// Selected record ids, in selection order
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.selected.keys().copied()
    }

    /// Selected records, in selection order
    pub fn records(&self) -> impl Iterator<Item = &Artwork> {
        self.selected.values()
    }

    /// Clone the selection out (e.g. for a host checkbox binding)
    pub fn to_vec(&self) -> Vec<Artwork> {
        self.selected.values().cloned().collect()
    }

    // ==================== Mutations ====================

    /// Set membership of a single record (row checkbox semantics)
    pub fn toggle(&mut self, record: &Artwork, selected: bool) {
        if selected {
            self.selected.insert(record.id, record.clone());
        } else {
            self.selected.remove(&record.id);
        }
    }

    /// Set membership of all given records at once (header checkbox
    /// semantics)
    pub fn toggle_all(&mut self, records: &[Artwork], selected: bool) {
        for record in records {
            self.toggle(record, selected);
        }
    }

    /// Replace the selection wholesale
    pub fn set_selection(&mut self, records: impl IntoIterator<Item = Artwork>) {
        self.selected = records
            .into_iter()
            .map(|record| (record.id, record))
            .collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop every selected record that is not part of `current`. Returns
    /// the number of evicted records.
    pub fn prune_missing(&mut self, current: &[Artwork]) -> usize {
        let before = self.selected.len();
        self.selected
            .retain(|id, _| current.iter().any(|record| record.id == *id));
        before - self.selected.len()
    }

    /// The first `min(n, source.len())` records of `source`, in source
    /// order. This is the bulk "select first N rows" shortcut.
    pub fn first_n(source: &[Artwork], n: usize) -> Vec<Artwork> {
        source.iter().take(n).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: u64) -> Artwork {
        Artwork {
            id,
            title: format!("Artwork {id}"),
            place_of_origin: None,
            artist_display: None,
            date_start: None,
            date_end: None,
        }
    }

    fn artworks(ids: &[u64]) -> Vec<Artwork> {
        ids.iter().copied().map(artwork).collect()
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut selection = SelectionState::new();
        let record = artwork(1);

        selection.toggle(&record, true);
        assert!(selection.is_selected(1));

        selection.toggle(&record, false);
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_sets_membership_at_once() {
        let mut selection = SelectionState::new();
        let rows = artworks(&[1, 2, 3]);

        selection.toggle_all(&rows, true);
        assert_eq!(selection.len(), 3);

        selection.toggle_all(&rows[..2], false);
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn set_selection_replaces_wholesale() {
        let mut selection = SelectionState::new();
        selection.toggle_all(&artworks(&[1, 2]), true);

        selection.set_selection(artworks(&[7, 8, 9]));
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![7, 8, 9]);
        assert!(!selection.is_selected(1));
    }

    #[test]
    fn first_n_clamps_and_preserves_order() {
        let rows = artworks(&[5, 3, 9, 1]);

        let picked = SelectionState::first_n(&rows, 2);
        assert_eq!(picked.iter().map(|r| r.id).collect::<Vec<_>>(), vec![5, 3]);

        assert!(SelectionState::first_n(&rows, 0).is_empty());
        assert_eq!(SelectionState::first_n(&rows, 4).len(), 4);
        assert_eq!(SelectionState::first_n(&rows, 100).len(), 4);
    }

    #[test]
    fn prune_missing_evicts_stale_records() {
        let mut selection = SelectionState::new();
        selection.toggle_all(&artworks(&[1, 2, 3]), true);

        let evicted = selection.prune_missing(&artworks(&[2, 4]));
        assert_eq!(evicted, 2);
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![2]);
    }
}
