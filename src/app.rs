//! Instant Board Frontend App
//!
//! Header, note grid, create button and the three modals.

use board_core::BoardConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::components::{BoardHeader, CreateModal, DeleteModal, DetailModal, NoteGrid};
use crate::context::BoardContext;
use crate::store::{store_open_create, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = BoardContext::new(BoardConfig::from_build_env());

    // Provide context to all children
    provide_context(store);
    provide_context(ctx.clone());

    // Resolve and load the board on mount
    Effect::new(move |_| {
        actions::load(store, ctx.clone());
    });

    let is_loaded = move || store.board().read().is_loaded();

    view! {
        <Show when=is_loaded fallback=|| view! { <LoadingScreen /> }>
            <div class="board-layout">
                <BoardHeader />

                <main class="board-main">
                    <NoteGrid />
                </main>

                <button
                    class="fab-create"
                    title="New note"
                    on:click=move |_| store_open_create(&store, true)
                >
                    "+"
                </button>

                <Show when=move || store.create_open().get()>
                    <CreateModal />
                </Show>

                {move || store.deleting_note().get().map(|note_id| view! { <DeleteModal note_id=note_id /> })}

                {move || store.viewing_note().get().map(|note| view! { <DetailModal note=note /> })}

                <footer class="board-footer">"© 2025 INSTANT BOARD • DRAG & DROP ENABLED"</footer>
            </div>
        </Show>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p class="loading-text">"Connecting to Cloud Board..."</p>
        </div>
    }
}
