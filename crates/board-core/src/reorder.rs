//! Reorder Engine
//!
//! Live list-splice while dragging: every drag-over moves the dragged note to
//! the hovered slot, so the list itself is already reordered when the drop
//! happens.

/// Remove the element at `from` and re-insert it at `to`; returns whether the list changed.
/// Single-element relocation, not a swap. Out-of-range indices leave the list unchanged.
pub fn move_element<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= list.len() || to >= list.len() {
        return false;
    }
    let item = list.remove(from);
    list.insert(to, item);
    true
}

/// Index of the note being dragged, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    dragged_index: Option<usize>,
}

impl DragState {
    pub fn dragged_index(&self) -> Option<usize> {
        self.dragged_index
    }

    pub fn is_dragging(&self, index: usize) -> bool {
        self.dragged_index == Some(index)
    }

    pub fn start(&mut self, index: usize) {
        self.dragged_index = Some(index);
    }

    /// Move the dragged element of `list` to `target`. Returns whether the list changed.
    /// Reads the current list every call, never a snapshot taken at drag start.
    pub fn over<T>(&mut self, list: &mut Vec<T>, target: usize) -> bool {
        let Some(from) = self.dragged_index else {
            return false;
        };
        if from == target {
            return false;
        }
        if !move_element(list, from, target) {
            return false;
        }
        self.dragged_index = Some(target);
        true
    }

    /// Clear the drag; returns the index that was being dragged
    pub fn end(&mut self) -> Option<usize> {
        self.dragged_index.take()
    }
}
