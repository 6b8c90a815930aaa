//! Instant Board Core
//!
//! Platform-neutral board logic:
//! - note: Note entity and color palette
//! - remote: document store abstraction and the jsonBlob HTTP client
//! - identity: board id resolution (address bar, local storage, remote create)
//! - state: in-memory note list with its transitions
//! - reorder: live list-splice used while dragging
//! - sync: full-snapshot push and sync status tracking
//! - gate / form: shared-secret check and note form validation
//! - polish: optional AI text rewrite

mod config;
mod error;
mod form;
mod gate;
mod identity;
mod loader;
mod note;
mod polish;
mod remote;
mod reorder;
mod state;
mod sync;

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod scenarios;

pub use config::{BoardConfig, PolishConfig};
pub use error::{BoardError, BoardResult};
pub use form::{FormError, NoteDraft, NoteForm};
pub use gate::{Gate, GateDecision, SHARED_SECRET};
pub use identity::{board_query, AddressBar, BoardIdentityResolver, LocalStore};
pub use loader::{load_board, LoadedBoard};
pub use note::{new_note_id, now_millis, Note, NoteColor, DEFAULT_AUTHOR, UNTITLED};
pub use polish::{GeminiGenerator, PolishAdapter, TextGenerator, POLISH_PROMPT};
pub use remote::{id_from_location, DocumentStore, JsonBlobClient};
pub use reorder::{move_element, DragState};
pub use state::{BoardState, SyncPayload};
pub use sync::{StatusSink, SyncController, SyncStatus};
