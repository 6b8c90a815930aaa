//! Board Identity Resolver
//!
//! Picks the active board id from, in order: the address bar query
//! parameter, the id remembered in local storage, or a freshly created remote
//! document. Ids found in storage or newly created are written back to both
//! the address bar and storage.

use log::{error, info};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::remote::DocumentStore;
use crate::sync::{StatusSink, SyncStatus};

/// Address bar access: read the board parameter, rewrite it without reloading
pub trait AddressBar {
    fn board_param(&self) -> Option<String>;
    fn set_board_param(&self, board_id: &str);
}

/// Persistent key-value storage (browser local storage)
pub trait LocalStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `?<param>=<percent-encoded id>`
pub fn board_query(param: &str, board_id: &str) -> String {
    format!("?{}={}", param, utf8_percent_encode(board_id, NON_ALPHANUMERIC))
}

pub struct BoardIdentityResolver<'a, S: ?Sized, A: ?Sized, L: ?Sized> {
    remote: &'a S,
    address: &'a A,
    storage: &'a L,
    storage_key: &'a str,
}

impl<'a, S, A, L> BoardIdentityResolver<'a, S, A, L>
where
    S: DocumentStore + ?Sized,
    A: AddressBar + ?Sized,
    L: LocalStore + ?Sized,
{
    pub fn new(remote: &'a S, address: &'a A, storage: &'a L, storage_key: &'a str) -> Self {
        Self {
            remote,
            address,
            storage,
            storage_key,
        }
    }

    /// Resolve the board id. `None` means no board could be determined; the
    /// caller shows an empty board and skips the fetch. No retries.
    pub async fn resolve(&self, sink: &dyn StatusSink) -> Option<String> {
        if let Some(id) = self.address.board_param().filter(|id| !id.is_empty()) {
            info!("[BOARD] Using board {} from address bar", id);
            return Some(id);
        }

        let id = match self.storage.get(self.storage_key).filter(|id| !id.is_empty()) {
            Some(id) => {
                info!("[BOARD] Using remembered board {}", id);
                id
            }
            None => {
                sink.set_status(SyncStatus::Syncing);
                match self.remote.create(&[]).await {
                    Ok(id) => {
                        info!("[BOARD] Created new board {}", id);
                        id
                    }
                    Err(e) => {
                        error!("[BOARD] Failed to create new board: {}", e);
                        sink.set_status(SyncStatus::Error);
                        return None;
                    }
                }
            }
        };

        self.storage.set(self.storage_key, &id);
        self.address.set_board_param(&id);
        Some(id)
    }
}
