//! Todo List Component
//!
//! List container: owns the authoritative item list, hydrates it from the
//! todo endpoint on mount, and ships the full list back after every
//! mutation. Renders the header, the item rows, the add modal, and the
//! delete context menu.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{MenuAnchor, TodoContext};
use crate::list;
use crate::models::{SaveTodosRequest, TodoDraft, TodoItem};
use crate::session::Session;
use crate::components::{ItemContextMenu, TodoModal, TodoRow};

/// Fire-and-forget full-list write for the current session key.
///
/// Local state is already updated when this runs; a failed write is logged
/// and nothing is rolled back.
fn push_todos(items: Vec<TodoItem>) {
    let session = Session::current();
    let request = SaveTodosRequest {
        uid: session.uid,
        date: session.date,
        todos: list::to_records(&items),
    };
    spawn_local(async move {
        match api::save_todos(&request).await {
            Ok(response) => {
                web_sys::console::log_2(&"[TODO] POST response:".into(), &response);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[TODO] Error saving todos: {}", e).into());
            }
        }
    });
}

/// Checklist container
#[component]
pub fn TodoList(#[prop(into)] title: String, items: Vec<TodoItem>) -> impl IntoView {
    let (todo_items, set_todo_items) = signal(items);
    let (modal_open, set_modal_open) = signal(false);
    let (menu, set_menu) = signal(None::<MenuAnchor>);

    // Provide context to rows and the menu overlay
    provide_context(TodoContext::new((menu, set_menu)));

    // Hydrate from the server on mount; a non-empty day-record replaces
    // the seed wholesale, anything else keeps it
    Effect::new(move |_| {
        spawn_local(async move {
            let session = Session::current();
            match api::fetch_todos(&session.uid, &session.date).await {
                Ok(Some(records)) => {
                    web_sys::console::log_1(
                        &format!("[TODO] Loaded {} todos for {}", records.len(), session.date)
                            .into(),
                    );
                    set_todo_items.set(list::from_records(&records));
                }
                Ok(None) => {}
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[TODO] Error fetching todos: {}", e).into(),
                    );
                }
            }
        });
    });

    let on_check = Callback::new(move |(id, checked): (u32, bool)| {
        let mut updated = todo_items.get();
        list::set_checked(&mut updated, id, checked);
        set_todo_items.set(updated.clone());
        push_todos(updated);
    });

    let on_delete = Callback::new(move |id: u32| {
        let mut updated = todo_items.get();
        list::remove(&mut updated, id);
        set_todo_items.set(updated.clone());
        push_todos(updated);
    });

    let on_add = Callback::new(move |draft: TodoDraft| {
        let mut updated = todo_items.get();
        list::append(&mut updated, draft);
        set_todo_items.set(updated.clone());
        set_modal_open.set(false);
        push_todos(updated);
    });

    view! {
        <div class="todo-container">
            <header class="todo-header">
                <div class="todo-title">{title}</div>
                <button class="add-button" on:click=move |_| set_modal_open.set(true)>
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="18"
                        height="18"
                        viewBox="0 0 14 14"
                        fill="none"
                    >
                        <path d="M14 8H8V14H6V8H0V6H6V0H8V6H14V8Z" fill="#799E7D"></path>
                    </svg>
                </button>
            </header>

            <div class="items">
                <For
                    each=move || todo_items.get()
                    key=|item| {
                        // Key on every mutable field so a change re-renders the row
                        (item.id, item.checked, item.text.clone(), item.icon.clone())
                    }
                    children=move |item| {
                        view! { <TodoRow item=item on_check=on_check /> }
                    }
                />
            </div>

            <Show when=move || modal_open.get()>
                <TodoModal
                    on_close=Callback::new(move |_| set_modal_open.set(false))
                    on_add_item=on_add
                />
            </Show>

            <ItemContextMenu on_delete=on_delete />
        </div>
    }
}
