//! Create Modal Component
//!
//! New-note form: title, content, color, author and the shared password.
//! Content can optionally be rewritten by the polish service first.

use board_core::{NoteColor, NoteForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::actions;
use crate::context::use_board_context;
use crate::format::note_color_class;
use crate::store::{store_open_create, use_app_store};

fn textarea_value(ev: &web_sys::Event) -> Option<String> {
    let area = ev.target()?.dyn_into::<web_sys::HtmlTextAreaElement>().ok()?;
    Some(area.value())
}

#[component]
pub fn CreateModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_board_context();
    let polish_enabled = ctx.polish_enabled();

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (color, set_color) = signal(NoteColor::default());
    let (author, set_author) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (polishing, set_polishing) = signal(false);

    let close = move || store_open_create(&store, false);

    let polish_ctx = ctx.clone();
    let on_polish = move |_: web_sys::MouseEvent| {
        let text = content.get_untracked();
        if text.trim().is_empty() || polishing.get_untracked() {
            return;
        }
        set_polishing.set(true);
        let polisher = polish_ctx.polisher();
        spawn_local(async move {
            let improved = polisher.polish(&text).await;
            set_content.set(improved);
            set_polishing.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = NoteForm {
            title: title.get_untracked(),
            content: content.get_untracked(),
            color: color.get_untracked(),
            author: author.get_untracked(),
            password: password.get_untracked(),
        };
        match actions::submit_note(store, ctx.clone(), &form) {
            Ok(()) => {
                set_title.set(String::new());
                set_content.set(String::new());
                set_author.set(String::new());
                set_password.set(String::new());
                set_error.set(None);
                close();
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <form
                class="modal create-modal"
                on:submit=on_submit
                on:click=|ev| ev.stop_propagation()
            >
                <div class="modal-head">
                    <h2>"New Note"</h2>
                    <button type="button" class="modal-close" on:click=move |_| close()>"×"</button>
                </div>

                <input
                    type="text"
                    class="create-title"
                    placeholder="Title (optional)"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />

                <div class="create-content-row">
                    <textarea
                        class="create-content"
                        placeholder="What's on your mind?"
                        prop:value=move || content.get()
                        on:input=move |ev| {
                            if let Some(value) = textarea_value(&ev) {
                                set_content.set(value);
                            }
                        }
                    ></textarea>
                    <Show when=move || polish_enabled>
                        <button
                            type="button"
                            class="polish-btn"
                            disabled=move || polishing.get()
                            on:click=on_polish.clone()
                        >
                            {move || if polishing.get() { "Thinking..." } else { "Magic Polish" }}
                        </button>
                    </Show>
                </div>

                <div class="color-picker">
                    {NoteColor::ALL.into_iter().map(|option| {
                        let swatch = format!("color-swatch {}", note_color_class(option));
                        view! {
                            <button
                                type="button"
                                title=option.as_str()
                                class=move || if color.get() == option { format!("{} active", swatch) } else { swatch.clone() }
                                on:click=move |_| set_color.set(option)
                            ></button>
                        }
                    }).collect_view()}
                </div>

                <input
                    type="text"
                    class="create-author"
                    placeholder="Name (optional)"
                    prop:value=move || author.get()
                    on:input=move |ev| set_author.set(event_target_value(&ev))
                />

                <input
                    type="password"
                    class="create-password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        set_password.set(event_target_value(&ev));
                        set_error.set(None);
                    }
                />

                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| close()>"Cancel"</button>
                    <button type="submit" class="confirm-btn">"Post"</button>
                </div>
            </form>
        </div>
    }
}
