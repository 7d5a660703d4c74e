use crate::layout::ItemId;

/// What a toggle did, so the caller can fire the matching notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected,
    Deselected,
}

/// Selection state for gallery items, independent of rendering.
///
/// In single-select mode (the default), selecting a new item replaces the
/// current selection; toggling an already-selected item always deselects it.
#[derive(Debug, Clone)]
pub struct SelectionState {
    /// Selected ids in selection order
    selected: Vec<ItemId>,
    single: bool,
}

impl SelectionState {
    pub fn new(single: bool) -> Self {
        Self {
            selected: Vec::new(),
            single,
        }
    }

    /// Flip the selection state of one item.
    pub fn toggle(&mut self, id: ItemId) -> SelectionChange {
        if let Some(pos) = self.selected.iter().position(|&s| s == id) {
            self.selected.remove(pos);
            SelectionChange::Deselected
        } else {
            if self.single {
                self.selected.clear();
            }
            self.selected.push(id);
            SelectionChange::Selected
        }
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    /// Currently selected ids, in the order they were selected.
    pub fn current(&self) -> &[ItemId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectionChange, SelectionState};
    use crate::layout::ItemId;

    #[test]
    fn toggle_selects_then_deselects() {
        let mut sel = SelectionState::new(true);
        assert_eq!(sel.toggle(ItemId(3)), SelectionChange::Selected);
        assert!(sel.is_selected(ItemId(3)));
        assert_eq!(sel.toggle(ItemId(3)), SelectionChange::Deselected);
        assert!(sel.is_empty());
    }

    #[test]
    fn single_mode_replaces_the_previous_selection() {
        let mut sel = SelectionState::new(true);
        sel.toggle(ItemId(1));
        sel.toggle(ItemId(2));
        assert_eq!(sel.current(), &[ItemId(2)]);
    }

    #[test]
    fn multi_mode_accumulates_in_selection_order() {
        let mut sel = SelectionState::new(false);
        sel.toggle(ItemId(4));
        sel.toggle(ItemId(1));
        sel.toggle(ItemId(7));
        assert_eq!(sel.current(), &[ItemId(4), ItemId(1), ItemId(7)]);

        sel.toggle(ItemId(1));
        assert_eq!(sel.current(), &[ItemId(4), ItemId(7)]);
    }

    #[test]
    fn clear_empties_the_selection() {
        let mut sel = SelectionState::new(false);
        sel.toggle(ItemId(0));
        sel.toggle(ItemId(1));
        sel.clear();
        assert!(sel.is_empty());
        assert!(!sel.is_selected(ItemId(0)));
    }
}
