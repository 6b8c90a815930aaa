//! Board Actions
//!
//! Wires UI events to board transitions. Every mutation is applied to the
//! store first; the sync payload is read afterwards and pushed in the
//! background. Network results only ever touch the sync status.

use board_core::{load_board, FormError, GateDecision, NoteForm, SyncController};
use leptos::task::spawn_local;
use leptos_dragdrop::DragGesture;
use log::{debug, info};

use crate::browser::{BrowserAddressBar, BrowserLocalStore};
use crate::context::BoardContext;
use crate::store::{store_request_delete, store_sync_payload, store_update_board, AppStore, StoreStatus};

/// Resolve the board and fetch its notes; always ends loaded
pub fn load(store: AppStore, ctx: BoardContext) {
    spawn_local(async move {
        let remote = ctx.remote();
        let address = BrowserAddressBar::new(&ctx.config.board_param);
        let sink = StoreStatus(store);
        let loaded = load_board(&remote, &address, &BrowserLocalStore, &ctx.config.storage_key, &sink).await;

        store_update_board(&store, |board| {
            board.set_board_id(loaded.board_id);
            if let Some(notes) = loaded.notes {
                board.replace_notes(notes);
            }
            board.mark_loaded();
        });
    });
}

/// Push the current full list to the remote document
fn sync_now(store: AppStore, ctx: BoardContext) {
    let payload = store_sync_payload(&store);
    spawn_local(async move {
        let remote = ctx.remote();
        SyncController::new(&remote)
            .sync(payload.board_id.as_deref(), &payload.notes, &StoreStatus(store))
            .await;
    });
}

/// Validate the create form (gate first) and prepend the note
pub fn submit_note(store: AppStore, ctx: BoardContext, form: &NoteForm) -> Result<(), FormError> {
    let draft = form.validate(ctx.gate())?;
    let note = store_update_board(&store, |board| board.add_note(draft));
    info!("[APP] Posted note {}", note.id);
    sync_now(store, ctx);
    Ok(())
}

/// Delete after a successful gate check; a denied attempt changes nothing
pub fn confirm_delete(store: AppStore, ctx: BoardContext, note_id: &str, password: &str) -> GateDecision {
    let decision = ctx.gate().check(password);
    if decision.is_allowed() {
        store_update_board(&store, |board| board.delete_note(note_id));
        store_request_delete(&store, None);
        sync_now(store, ctx);
    }
    decision
}

/// Drive the reorder engine from drag gestures; drop syncs the live order
pub fn handle_drag(store: AppStore, ctx: BoardContext, gesture: DragGesture) {
    match gesture {
        DragGesture::Start(index) => {
            debug!("[DND] Start at {}", index);
            store_update_board(&store, |board| board.drag_start(index));
        }
        DragGesture::Over(index) => {
            store_update_board(&store, |board| board.drag_over(index));
        }
        DragGesture::End => {
            let from = store_update_board(&store, |board| board.drag_end());
            debug!("[DND] Dropped (last index {:?})", from);
            sync_now(store, ctx);
        }
    }
}
