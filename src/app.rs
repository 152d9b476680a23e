//! Day-Todo Frontend App

use leptos::prelude::*;

use crate::components::TodoList;
use crate::models::TodoItem;

/// Starter list shown until the server responds (and kept if it has
/// nothing for today)
fn seed_items() -> Vec<TodoItem> {
    vec![
        TodoItem {
            id: 1,
            icon: "🔥".to_string(),
            text: "Morning run".to_string(),
            checked: false,
        },
        TodoItem {
            id: 2,
            icon: "📘".to_string(),
            text: "Read 20 pages".to_string(),
            checked: false,
        },
    ]
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TodoList title="Today" items=seed_items() />
        </div>
    }
}
