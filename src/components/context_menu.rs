//! Item Context Menu Component
//!
//! Declarative delete menu: rendered from the single `MenuAnchor` piece of
//! state in `TodoContext`, so at most one menu exists and dismissal is
//! just clearing that state. A full-screen backdrop catches the next
//! click (or right-click) anywhere.

use leptos::prelude::*;

use crate::context::TodoContext;

/// Single-entry context menu anchored at the invoking pointer position
#[component]
pub fn ItemContextMenu(#[prop(into)] on_delete: Callback<u32>) -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");

    view! {
        {move || ctx.menu.get().map(|anchor| view! {
            <div
                class="context-menu-backdrop"
                on:click=move |_| ctx.close_menu()
                on:contextmenu=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ctx.close_menu();
                }
            >
                <div
                    class="context-menu"
                    style=format!("left: {}px; top: {}px;", anchor.x, anchor.y)
                >
                    <div
                        class="context-menu-item"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_delete.run(anchor.item_id);
                            ctx.close_menu();
                        }
                    >
                        "Delete"
                    </div>
                </div>
            </div>
        })}
    }
}
