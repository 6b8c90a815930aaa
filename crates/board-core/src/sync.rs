//! Sync Controller
//!
//! Pushes the full note list to the remote store after every mutation.
//! No deltas, no retries, no sequencing: overlapping syncs race and the last
//! one to resolve sets the final status.

use std::cell::{Cell, RefCell};

use log::{debug, warn};

use crate::note::Note;
use crate::remote::DocumentStore;
use crate::state::BoardState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncStatus {
    #[default]
    Idle,
    Syncing,
    Synced,
    Error,
}

impl SyncStatus {
    /// Badge text shown in the header
    pub fn label(&self) -> &'static str {
        match self {
            SyncStatus::Synced => "Cloud Synced",
            SyncStatus::Syncing => "Syncing...",
            SyncStatus::Idle | SyncStatus::Error => "Offline",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::Idle => "idle",
            SyncStatus::Syncing => "syncing",
            SyncStatus::Synced => "synced",
            SyncStatus::Error => "error",
        }
    }
}

/// Receives sync status transitions (a UI signal, a state cell, a test recorder)
pub trait StatusSink {
    fn set_status(&self, status: SyncStatus);
}

impl StatusSink for Cell<SyncStatus> {
    fn set_status(&self, status: SyncStatus) {
        self.set(status);
    }
}

impl StatusSink for RefCell<BoardState> {
    fn set_status(&self, status: SyncStatus) {
        self.borrow_mut().set_sync_status(status);
    }
}

impl<T: StatusSink + ?Sized> StatusSink for &T {
    fn set_status(&self, status: SyncStatus) {
        (**self).set_status(status);
    }
}

pub struct SyncController<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: DocumentStore + ?Sized> SyncController<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Overwrite the board document with `notes`.
    ///
    /// Without a board id this returns immediately and leaves the status alone.
    /// Returns the status it finished with.
    pub async fn sync(
        &self,
        board_id: Option<&str>,
        notes: &[Note],
        sink: &dyn StatusSink,
    ) -> Option<SyncStatus> {
        let board_id = board_id?;
        sink.set_status(SyncStatus::Syncing);
        debug!("[SYNC] Pushing {} notes to board {}", notes.len(), board_id);

        let status = match self.store.replace(board_id, notes).await {
            Ok(()) => SyncStatus::Synced,
            Err(e) => {
                warn!("[SYNC] Replace failed for board {}: {}", board_id, e);
                SyncStatus::Error
            }
        };
        sink.set_status(status);
        Some(status)
    }
}
