//! Sticky Note Component
//!
//! One draggable note card. Its index is looked up by id at event time.

use board_core::Note;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_item_mouseenter, make_on_mousedown, DndSignals};

use crate::format::{format_date, note_color_class};
use crate::store::{store_index_of, store_request_delete, store_view_note, use_app_store, AppStateStoreFields};

#[component]
pub fn StickyNote(note: Note, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    let note_id = note.id.clone();
    let index = Signal::derive(move || store_index_of(&store, &note_id));

    let on_mousedown = make_on_mousedown(dnd, index);
    let on_mouseenter = make_on_item_mouseenter(dnd, index);

    let is_dragged = move || {
        index
            .get()
            .is_some_and(|current| store.board().read().drag().is_dragging(current))
    };

    let base_class = format!("sticky-note {}", note_color_class(note.color));
    let class = move || {
        if is_dragged() {
            format!("{} dragging", base_class)
        } else {
            base_class.clone()
        }
    };

    let view_note = note.clone();
    let on_click = move |_: web_sys::MouseEvent| {
        // A mouse-up that ended a drag also fires click
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        store_view_note(&store, Some(view_note.clone()));
    };

    let delete_id = note.id.clone();
    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        store_request_delete(&store, Some(delete_id.clone()));
    };

    view! {
        <div
            class=class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:click=on_click
        >
            <div class="sticky-note-head">
                <h3 class="sticky-note-title">{note.display_title().to_string()}</h3>
                <button class="sticky-note-delete" title="Delete" on:click=on_delete>"×"</button>
            </div>
            <p class="sticky-note-content">{note.content.clone()}</p>
            <div class="sticky-note-meta">
                <span class="sticky-note-author">"BY " {note.display_author().to_string()}</span>
                <span class="sticky-note-date">{format_date(note.created_at)}</span>
            </div>
        </div>
    }
}
