//! Todo Modal Component
//!
//! Modal form for adding a new checklist entry: icon picker plus text
//! input. New entries always start unchecked.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::TodoDraft;

/// Icon glyph options
const ICON_CHOICES: &[&str] = &["🔥", "📘", "💪", "🧹", "🛒", "✉️"];

/// Add-item modal
#[component]
pub fn TodoModal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_add_item: Callback<TodoDraft>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (icon, set_icon) = signal(ICON_CHOICES[0].to_string());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text_value = text.get();
        if text_value.is_empty() { return; }

        on_add_item.run(TodoDraft {
            icon: icon.get(),
            text: text_value,
            checked: false,
        });
        set_text.set(String::new());
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <form class="add-item-form" on:submit=add_item>
                    <div class="icon-selector-row">
                        {ICON_CHOICES.iter().map(|glyph| {
                            let value = glyph.to_string();
                            let value_clone = value.clone();
                            let is_selected = move || icon.get() == value;
                            view! {
                                <button
                                    type="button"
                                    class=move || if is_selected() { "icon-btn active" } else { "icon-btn" }
                                    on:click=move |_| set_icon.set(value_clone.clone())
                                >
                                    {*glyph}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <input
                        type="text"
                        placeholder="Add new todo..."
                        prop:value=move || text.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_text.set(input.value());
                        }
                    />

                    <div class="modal-actions">
                        <button type="submit">"Add"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
