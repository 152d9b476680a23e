//! Frontend Models
//!
//! Local item model plus the wire-format structures the todo endpoint
//! speaks. Ids exist only locally; the wire carries name/complete/icon.

use serde::{Deserialize, Serialize};

/// One checklist entry as the widget holds it
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: u32,
    pub icon: String,
    pub text: String,
    pub checked: bool,
}

/// Fields for a new entry before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct TodoDraft {
    pub icon: String,
    pub text: String,
    pub checked: bool,
}

/// One todo as the server stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub todo_name: String,
    pub todo_complete: bool,
    pub todo_icon: String,
}

/// One day's worth of todos in a read response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DayRecord {
    pub todos: Vec<TodoRecord>,
}

/// Read response envelope; `todos` may be absent when `success` is false
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TodosResponse {
    pub success: bool,
    #[serde(default)]
    pub todos: Vec<DayRecord>,
}

/// Full-list write request, keyed by user and calendar date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveTodosRequest {
    pub uid: String,
    pub date: String,
    pub todos: Vec<TodoRecord>,
}
