//! Detail Modal Component
//!
//! Read-only view of a single note.

use board_core::Note;
use leptos::prelude::*;

use crate::format::{format_date_time, note_color_class};
use crate::store::{store_view_note, use_app_store};

#[component]
pub fn DetailModal(note: Note) -> impl IntoView {
    let store = use_app_store();
    let close = move || store_view_note(&store, None);

    let class = format!("modal detail-modal {}", note_color_class(note.color));

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <div class=class on:click=|ev| ev.stop_propagation()>
                <div class="modal-head">
                    <h2 class="detail-title">{note.display_title().to_string()}</h2>
                    <button class="modal-close" on:click=move |_| close()>"×"</button>
                </div>
                <div class="detail-meta">
                    <span class="detail-author">{note.display_author().to_string()}</span>
                    <span class="detail-date">{format_date_time(note.created_at)}</span>
                </div>
                <p class="detail-content">{note.content.clone()}</p>
            </div>
        </div>
    }
}
