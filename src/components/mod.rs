//! UI Components
//!
//! Reusable Leptos components.

mod board_header;
mod create_modal;
mod delete_modal;
mod detail_modal;
mod note_grid;
mod sticky_note;

pub use board_header::BoardHeader;
pub use create_modal::CreateModal;
pub use delete_modal::DeleteModal;
pub use detail_modal::DetailModal;
pub use note_grid::NoteGrid;
pub use sticky_note::StickyNote;
