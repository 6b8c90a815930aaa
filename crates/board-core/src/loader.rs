//! Board Load
//!
//! Startup flow: resolve the board id, then fetch its notes. Always ends in
//! a loaded state, whatever failed on the way.

use log::{info, warn};

use crate::identity::{AddressBar, BoardIdentityResolver, LocalStore};
use crate::note::Note;
use crate::remote::DocumentStore;
use crate::sync::{StatusSink, SyncStatus};

/// Result of the startup flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedBoard {
    pub board_id: Option<String>,
    /// `None` when the fetch was skipped or failed; keep whatever is in memory
    pub notes: Option<Vec<Note>>,
}

pub async fn load_board<S, A, L>(
    remote: &S,
    address: &A,
    storage: &L,
    storage_key: &str,
    sink: &dyn StatusSink,
) -> LoadedBoard
where
    S: DocumentStore + ?Sized,
    A: AddressBar + ?Sized,
    L: LocalStore + ?Sized,
{
    let board_id = BoardIdentityResolver::new(remote, address, storage, storage_key)
        .resolve(sink)
        .await;

    let Some(id) = board_id.as_deref() else {
        warn!("[BOARD] No board id, showing an empty board");
        return LoadedBoard {
            board_id: None,
            notes: None,
        };
    };

    sink.set_status(SyncStatus::Syncing);
    let notes = match remote.read(id).await {
        Ok(notes) => {
            info!("[BOARD] Loaded {} notes from board {}", notes.len(), id);
            sink.set_status(SyncStatus::Synced);
            Some(notes)
        }
        Err(e) => {
            warn!("[BOARD] Fetch failed for board {}: {}", id, e);
            sink.set_status(SyncStatus::Error);
            None
        }
    };

    LoadedBoard { board_id, notes }
}
