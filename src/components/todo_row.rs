//! Todo Row Component
//!
//! One checklist entry. The checked state renders straight from the
//! container's data; the keyed list re-renders this row whenever a field
//! changes, so no row-local copy exists to go stale.

use leptos::prelude::*;

use crate::context::TodoContext;
use crate::models::TodoItem;

/// A single item row
#[component]
pub fn TodoRow(item: TodoItem, #[prop(into)] on_check: Callback<(u32, bool)>) -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");

    let id = item.id;
    let checked = item.checked;

    // Right-click opens the delete menu at the pointer position
    let on_context_menu = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.open_menu(id, ev.client_x(), ev.client_y());
    };

    view! {
        <div
            class=move || if checked { "item checked" } else { "item" }
            on:contextmenu=on_context_menu
        >
            <span class="icon">{item.icon.clone()}</span>
            <span class="text">{item.text.clone()}</span>
            <input
                type="checkbox"
                checked=checked
                on:change=move |_| on_check.run((id, !checked))
            />
        </div>
    }
}
