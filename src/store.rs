//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Board data and its transitions live in `board_core::BoardState`; this
//! store adds the modal state around it.

use board_core::{BoardState, Note, StatusSink, SyncPayload, SyncStatus};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active board: id, ordered notes, sync status, drag state
    pub board: BoardState,
    /// Create form is open
    pub create_open: bool,
    /// Note awaiting delete confirmation
    pub deleting_note: Option<String>,
    /// Note shown in the detail view
    pub viewing_note: Option<Note>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a board transition and return its result
pub fn store_update_board<R>(store: &AppStore, f: impl FnOnce(&mut BoardState) -> R) -> R {
    let board_field = store.board();
    let mut board = board_field.write();
    f(&mut board)
}

/// Snapshot for syncing, read after the latest mutation
pub fn store_sync_payload(store: &AppStore) -> SyncPayload {
    store.board().read_untracked().sync_payload()
}

/// Current index of a note (tracked)
pub fn store_index_of(store: &AppStore, note_id: &str) -> Option<usize> {
    store.board().read().index_of(note_id)
}

pub fn store_open_create(store: &AppStore, open: bool) {
    store.create_open().set(open);
}

pub fn store_request_delete(store: &AppStore, note_id: Option<String>) {
    store.deleting_note().set(note_id);
}

pub fn store_view_note(store: &AppStore, note: Option<Note>) {
    store.viewing_note().set(note);
}

/// Routes sync status transitions into the store
#[derive(Clone, Copy)]
pub struct StoreStatus(pub AppStore);

impl StatusSink for StoreStatus {
    fn set_status(&self, status: SyncStatus) {
        store_update_board(&self.0, |board| board.set_sync_status(status));
    }
}
