//! Board Header Component
//!
//! Title, sync status badge and share-link button.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::browser::{copy_to_clipboard, current_href};
use crate::store::{use_app_store, AppStateStoreFields};

/// Header bar with sync badge and share button
#[component]
pub fn BoardHeader() -> impl IntoView {
    let store = use_app_store();
    let (copied, set_copied) = signal(false);

    let status = move || store.board().read().sync_status();

    let dot_class = move || format!("sync-dot {}", status().as_str());

    // Copy the current address (with ?b=) and flash a confirmation
    let share = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            let Some(href) = current_href() else {
                return;
            };
            match copy_to_clipboard(&href).await {
                Ok(()) => {
                    set_copied.set(true);
                    TimeoutFuture::new(2_000).await;
                    set_copied.set(false);
                }
                Err(e) => warn!("[APP] Share link copy failed: {}", e),
            }
        });
    };

    view! {
        <header class="board-header">
            <div class="board-brand">
                <div class="board-logo">"I"</div>
                <div>
                    <h1 class="board-title">"INSTANT BOARD"</h1>
                    <p class="board-subtitle">"By Sangmin"</p>
                </div>
            </div>

            <div class="board-header-actions">
                <div class="sync-badge">
                    <div class=dot_class></div>
                    <span class="sync-label">{move || status().label()}</span>
                </div>

                <button class="share-btn" on:click=share>
                    {move || if copied.get() { "Link copied!" } else { "Share" }}
                </button>
            </div>
        </header>
    }
}
