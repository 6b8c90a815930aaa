//! Board State
//!
//! Single container for the active board: id, ordered notes, sync status,
//! load flag and drag state. Mutations apply immediately; the caller then takes
//! a [`SyncPayload`] (read after the mutation, never before) and hands it to
//! the sync controller.

use log::debug;

use crate::form::NoteDraft;
use crate::note::{Note, NoteColor};
use crate::reorder::DragState;
use crate::sync::SyncStatus;

/// Full snapshot to push after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPayload {
    pub board_id: Option<String>,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    board_id: Option<String>,
    notes: Vec<Note>,
    sync_status: SyncStatus,
    loaded: bool,
    drag: DragState,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board_id(&self) -> Option<&str> {
        self.board_id.as_deref()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn sync_status(&self) -> SyncStatus {
        self.sync_status
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn index_of(&self, note_id: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.id == note_id)
    }

    pub fn set_board_id(&mut self, board_id: Option<String>) {
        self.board_id = board_id;
    }

    pub fn set_sync_status(&mut self, status: SyncStatus) {
        self.sync_status = status;
    }

    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    /// Replace the whole list with a freshly read remote value (board load only)
    pub fn replace_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    /// Prepend a new note built from `draft`; returns it
    pub fn add_note(&mut self, draft: NoteDraft) -> Note {
        let note = Note::new(draft.title, draft.content, draft.color, draft.author);
        debug!("[BOARD] Adding note {}", note.id);
        self.notes.insert(0, note.clone());
        note
    }

    /// Convenience for `add_note` without a form
    pub fn add(&mut self, title: &str, content: &str, color: NoteColor, author: &str) -> Note {
        self.add_note(NoteDraft {
            title: title.to_string(),
            content: content.to_string(),
            color,
            author: author.to_string(),
        })
    }

    /// Remove the note with `note_id`; returns whether anything was removed
    pub fn delete_note(&mut self, note_id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != note_id);
        let removed = self.notes.len() != before;
        debug!("[BOARD] Delete {} (removed={})", note_id, removed);
        removed
    }

    pub fn drag_start(&mut self, index: usize) {
        if index < self.notes.len() {
            self.drag.start(index);
        }
    }

    /// Live shuffle: move the dragged note to `index`
    pub fn drag_over(&mut self, index: usize) -> bool {
        self.drag.over(&mut self.notes, index)
    }

    /// Clear the drag; the caller syncs the already-reordered list
    pub fn drag_end(&mut self) -> Option<usize> {
        self.drag.end()
    }

    pub fn sync_payload(&self) -> SyncPayload {
        SyncPayload {
            board_id: self.board_id.clone(),
            notes: self.notes.clone(),
        }
    }
}
