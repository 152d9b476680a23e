//! List Operations
//!
//! Pure helpers for the checklist state: local id assignment, checked
//! replacement, order-preserving removal, and wire mapping.

use crate::models::{TodoDraft, TodoItem, TodoRecord};

/// Next local id: one past the current maximum (1 for an empty list)
pub fn next_id(items: &[TodoItem]) -> u32 {
    items.iter().fold(0, |max, item| max.max(item.id)) + 1
}

/// Append a new item built from the draft, returning its assigned id
pub fn append(items: &mut Vec<TodoItem>, draft: TodoDraft) -> u32 {
    let id = next_id(items);
    items.push(TodoItem {
        id,
        icon: draft.icon,
        text: draft.text,
        checked: draft.checked,
    });
    id
}

/// Replace the checked flag of the matching item, leaving the rest untouched
pub fn set_checked(items: &mut [TodoItem], id: u32, checked: bool) {
    if let Some(item) = items.iter_mut().find(|item| item.id == id) {
        item.checked = checked;
    }
}

/// Remove the matching item, preserving the order of the rest
pub fn remove(items: &mut Vec<TodoItem>, id: u32) {
    items.retain(|item| item.id != id);
}

/// Map the local list to wire records in display order
pub fn to_records(items: &[TodoItem]) -> Vec<TodoRecord> {
    items
        .iter()
        .map(|item| TodoRecord {
            todo_name: item.text.clone(),
            todo_complete: item.checked,
            todo_icon: item.icon.clone(),
        })
        .collect()
}

/// Rebuild the local list from wire records; ids restart at the array index
pub fn from_records(records: &[TodoRecord]) -> Vec<TodoItem> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| TodoItem {
            id: index as u32,
            icon: record.todo_icon.clone(),
            text: record.todo_name.clone(),
            checked: record.todo_complete,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SaveTodosRequest;

    fn make_item(id: u32, icon: &str, text: &str, checked: bool) -> TodoItem {
        TodoItem {
            id,
            icon: icon.to_string(),
            text: text.to_string(),
            checked,
        }
    }

    fn make_draft(icon: &str, text: &str) -> TodoDraft {
        TodoDraft {
            icon: icon.to_string(),
            text: text.to_string(),
            checked: false,
        }
    }

    #[test]
    fn test_first_id_on_empty_list() {
        let mut items = Vec::new();
        let id = append(&mut items, make_draft("🔥", "run"));
        assert_eq!(id, 1);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_ids_are_max_plus_one() {
        let mut items = Vec::new();
        assert_eq!(append(&mut items, make_draft("🔥", "run")), 1);
        assert_eq!(append(&mut items, make_draft("📘", "read")), 2);
        assert_eq!(append(&mut items, make_draft("🧹", "clean")), 3);

        // Removing from the middle must not cause id reuse
        remove(&mut items, 2);
        assert_eq!(append(&mut items, make_draft("🛒", "shop")), 4);
    }

    #[test]
    fn test_set_checked_touches_only_the_match() {
        let mut items = vec![
            make_item(1, "🔥", "run", false),
            make_item(2, "📘", "read", false),
        ];
        set_checked(&mut items, 1, true);

        assert!(items[0].checked);
        assert_eq!(items[1], make_item(2, "📘", "read", false));
    }

    #[test]
    fn test_set_checked_unknown_id_is_noop() {
        let mut items = vec![make_item(1, "🔥", "run", false)];
        set_checked(&mut items, 99, true);
        assert!(!items[0].checked);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut items = vec![
            make_item(1, "🔥", "run", false),
            make_item(2, "📘", "read", true),
            make_item(3, "🧹", "clean", false),
        ];
        remove(&mut items, 2);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[1].id, 3);
    }

    #[test]
    fn test_remove_unknown_id_keeps_all() {
        let mut items = vec![make_item(1, "🔥", "run", false)];
        remove(&mut items, 99);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_hydration_assigns_index_ids() {
        let records = vec![
            TodoRecord {
                todo_name: "run".to_string(),
                todo_complete: true,
                todo_icon: "🔥".to_string(),
            },
            TodoRecord {
                todo_name: "read".to_string(),
                todo_complete: false,
                todo_icon: "📘".to_string(),
            },
        ];

        let items = from_records(&records);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], make_item(0, "🔥", "run", true));
        assert_eq!(items[1], make_item(1, "📘", "read", false));
    }

    #[test]
    fn test_toggle_then_full_list_write_body() {
        let mut items = vec![make_item(1, "🔥", "run", false)];
        set_checked(&mut items, 1, true);

        let request = SaveTodosRequest {
            uid: "u-1".to_string(),
            date: "2024-05-01".to_string(),
            todos: to_records(&items),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap()["todos"],
            serde_json::json!([
                { "todo_name": "run", "todo_complete": true, "todo_icon": "🔥" }
            ])
        );
    }

    #[test]
    fn test_add_then_full_list_write_body() {
        let mut items = vec![make_item(1, "🔥", "run", false)];
        let id = append(&mut items, make_draft("📘", "read"));

        assert_eq!(id, 2);
        assert_eq!(items.len(), 2);

        let records = to_records(&items);
        assert_eq!(records[0].todo_name, "run");
        assert_eq!(records[1].todo_name, "read");
        assert!(!records[1].todo_complete);
    }
}
