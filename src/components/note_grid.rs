//! Note Grid Component
//!
//! Board info bar and the reorderable grid of sticky notes.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_listeners, create_dnd_signals, DragGesture};

use crate::actions;
use crate::components::StickyNote;
use crate::context::use_board_context;
use crate::format::short_board_id;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NoteGrid() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_board_context();

    let dnd = create_dnd_signals(Callback::new(move |gesture: DragGesture| {
        actions::handle_drag(store, ctx.clone(), gesture);
    }));
    bind_global_listeners(dnd);

    let board_label = move || short_board_id(store.board().read().board_id());
    let total = move || store.board().read().notes().len();
    let notes = move || store.board().read().notes().to_vec();

    view! {
        <div class="board-info-bar">
            <span class="board-id">"Board ID: " {board_label}</span>
            <span class="board-count">"Total " {total} " posts • Hold & Drag to reorder"</span>
        </div>

        <Show
            when=move || { total() > 0 }
            fallback=|| view! {
                <div class="board-empty">"게시물이 없습니다. 첫 메모를 남겨주세요!"</div>
            }
        >
            <div class="note-grid">
                <For
                    each=notes
                    key=|note| note.id.clone()
                    children=move |note| view! { <StickyNote note=note dnd=dnd /> }
                />
            </div>
        </Show>
    }
}
