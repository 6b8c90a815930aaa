//! Delete Modal Component
//!
//! Password prompt guarding note deletion.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_board_context;
use crate::store::{store_request_delete, use_app_store};

/// Shown while a note is awaiting delete confirmation
#[component]
pub fn DeleteModal(note_id: String) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_board_context();

    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<&'static str>);

    let cancel = move || store_request_delete(&store, None);

    let confirm = move || {
        let decision = actions::confirm_delete(store, ctx.clone(), &note_id, &password.get_untracked());
        if !decision.is_allowed() {
            set_error.set(Some("비밀번호가 틀렸습니다."));
            set_password.set(String::new());
        }
    };
    let confirm_on_enter = confirm.clone();

    view! {
        <div class="modal-backdrop" on:click=move |_| cancel()>
            <div class="modal delete-modal" on:click=|ev| ev.stop_propagation()>
                <h2>"Delete this note?"</h2>
                <p class="modal-hint">"Enter the board password to confirm."</p>

                <input
                    type="password"
                    class="delete-password"
                    placeholder="Password"
                    autofocus=true
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            confirm_on_enter();
                        }
                    }
                />

                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                <div class="modal-actions">
                    <button class="cancel-btn" on:click=move |_| cancel()>"Cancel"</button>
                    <button class="danger-btn" on:click=move |_| confirm()>"Delete"</button>
                </div>
            </div>
        </div>
    }
}
