//! End-to-end board flows over in-memory fakes.

use std::cell::RefCell;

use crate::form::NoteForm;
use crate::gate::Gate;
use crate::identity::{board_query, AddressBar, LocalStore};
use crate::loader::load_board;
use crate::note::{NoteColor, DEFAULT_AUTHOR};
use crate::state::BoardState;
use crate::sync::{SyncController, SyncStatus};
use crate::test_support::{sample_notes, MemoryAddressBar, MemoryDocumentStore, MemoryLocalStore};

const KEY: &str = "last_board_id";

async fn loaded_board(remote: &MemoryDocumentStore, address: &MemoryAddressBar) -> RefCell<BoardState> {
    let storage = MemoryLocalStore::default();
    let state = RefCell::new(BoardState::new());
    let loaded = load_board(remote, address, &storage, KEY, &state).await;
    let mut board = state.borrow_mut();
    board.set_board_id(loaded.board_id);
    if let Some(notes) = loaded.notes {
        board.replace_notes(notes);
    }
    board.mark_loaded();
    drop(board);
    state
}

async fn push(remote: &MemoryDocumentStore, state: &RefCell<BoardState>) {
    let payload = state.borrow().sync_payload();
    SyncController::new(remote)
        .sync(payload.board_id.as_deref(), &payload.notes, state)
        .await;
}

#[tokio::test]
async fn test_first_visit_creates_board() {
    let remote = MemoryDocumentStore::with_next_id("abc123");
    let address = MemoryAddressBar::default();
    let storage = MemoryLocalStore::default();
    let state = RefCell::new(BoardState::new());

    let loaded = load_board(&remote, &address, &storage, KEY, &state).await;
    {
        let mut board = state.borrow_mut();
        board.set_board_id(loaded.board_id);
        board.replace_notes(loaded.notes.unwrap_or_default());
        board.mark_loaded();
    }

    let board = state.borrow();
    let id = address.board_param().unwrap();
    assert_eq!(board_query("b", &id), "?b=abc123");
    assert_eq!(storage.get(KEY).as_deref(), Some("abc123"));
    assert!(board.notes().is_empty());
    assert!(board.is_loaded());
    assert_eq!(board.sync_status(), SyncStatus::Synced);
}

#[tokio::test]
async fn test_unresolvable_board_still_loads() {
    let remote = MemoryDocumentStore::default();
    remote.fail_create(true);
    let state = loaded_board(&remote, &MemoryAddressBar::default()).await;

    let board = state.borrow();
    assert!(board.is_loaded());
    assert_eq!(board.board_id(), None);
    assert!(board.notes().is_empty());
    assert_eq!(board.sync_status(), SyncStatus::Error);
}

#[tokio::test]
async fn test_add_note_prepends_and_syncs_full_list() {
    let remote = MemoryDocumentStore::with_document("b1", sample_notes(&["A"]));
    let state = loaded_board(&remote, &MemoryAddressBar::with_param("b1")).await;

    let form = NoteForm {
        title: "Hi".into(),
        content: "World".into(),
        color: NoteColor::Yellow,
        author: String::new(),
        password: "1212".into(),
    };
    let draft = form.validate(&Gate::default()).unwrap();
    let note = state.borrow_mut().add_note(draft);
    push(&remote, &state).await;

    assert_eq!(note.author, DEFAULT_AUTHOR);
    let stored = remote.document("b1").unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0], note);
    assert_eq!(stored[1].id, "A");
    assert_eq!(state.borrow().sync_status(), SyncStatus::Synced);
}

#[tokio::test]
async fn test_denied_gate_leaves_list_alone() {
    let remote = MemoryDocumentStore::with_document("b1", sample_notes(&["A", "B"]));
    let state = loaded_board(&remote, &MemoryAddressBar::with_param("b1")).await;

    if Gate::default().check("wrong").is_allowed() {
        state.borrow_mut().delete_note("A");
        push(&remote, &state).await;
    }

    assert_eq!(state.borrow().notes().len(), 2);
    assert_eq!(remote.replace_calls(), 0);
}

#[tokio::test]
async fn test_drag_then_drop_syncs_reordered_list() {
    let remote = MemoryDocumentStore::with_document("b1", sample_notes(&["A", "B", "C"]));
    let state = loaded_board(&remote, &MemoryAddressBar::with_param("b1")).await;

    {
        let mut board = state.borrow_mut();
        board.drag_start(0);
        board.drag_over(1);
        board.drag_over(2);
        board.drag_end();
    }
    push(&remote, &state).await;

    let order: Vec<String> = remote.document("b1").unwrap().into_iter().map(|n| n.id).collect();
    assert_eq!(order, vec!["B", "C", "A"]);
}

#[tokio::test]
async fn test_drop_outside_target_syncs_last_order() {
    let remote = MemoryDocumentStore::with_document("b1", sample_notes(&["A", "B", "C"]));
    let state = loaded_board(&remote, &MemoryAddressBar::with_param("b1")).await;

    {
        let mut board = state.borrow_mut();
        board.drag_start(2);
        board.drag_over(0);
        assert_eq!(board.drag_end(), Some(0));
    }
    push(&remote, &state).await;

    let order: Vec<String> = remote.document("b1").unwrap().into_iter().map(|n| n.id).collect();
    assert_eq!(order, vec!["C", "A", "B"]);
    assert_eq!(remote.replace_calls(), 1);
}

#[tokio::test]
async fn test_failed_sync_keeps_optimistic_mutation() {
    let remote = MemoryDocumentStore::with_document("b1", sample_notes(&["A", "B"]));
    let state = loaded_board(&remote, &MemoryAddressBar::with_param("b1")).await;
    remote.fail_replace(true);

    state.borrow_mut().delete_note("A");
    push(&remote, &state).await;

    assert_eq!(state.borrow().notes().len(), 1);
    assert_eq!(state.borrow().sync_status(), SyncStatus::Error);
    assert_eq!(remote.document("b1").unwrap().len(), 2);

    remote.fail_replace(false);
    state.borrow_mut().add("retry", "next mutation", NoteColor::Orange, "");
    push(&remote, &state).await;
    assert_eq!(remote.document("b1").unwrap().len(), 2);
    assert_eq!(state.borrow().sync_status(), SyncStatus::Synced);
}

#[tokio::test]
async fn test_overlapping_syncs_last_to_resolve_wins() {
    let remote = MemoryDocumentStore::with_document("b1", vec![]);
    let state = loaded_board(&remote, &MemoryAddressBar::with_param("b1")).await;
    // first replace lands after the second one
    remote.delay_replaces(&[3, 0]);

    state.borrow_mut().add("older", "1", NoteColor::Yellow, "");
    let older = state.borrow().sync_payload();
    state.borrow_mut().add("newer", "2", NoteColor::Yellow, "");
    let newer = state.borrow().sync_payload();

    let controller = SyncController::new(&remote);
    tokio::join!(
        controller.sync(older.board_id.as_deref(), &older.notes, &state),
        controller.sync(newer.board_id.as_deref(), &newer.notes, &state),
    );

    assert_eq!(remote.document("b1"), Some(older.notes));
    assert_eq!(state.borrow().notes().len(), 2);
    assert_eq!(state.borrow().sync_status(), SyncStatus::Synced);
}
