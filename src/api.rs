//! Todo Endpoint Bindings
//!
//! Async wrappers around the browser Fetch API for the todo endpoint.
//! Read returns the first day-record's todos; write ships the full list
//! snapshot and hands back the raw response JSON for logging.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config;
use crate::models::{SaveTodosRequest, TodoRecord, TodosResponse};

/// Fetch the persisted list for (uid, date).
///
/// Returns `Some` with the first day-record's todos when the response is
/// successful and carries at least one day-record, `None` when the server
/// has nothing for this key. The caller keeps its local list on `None`.
pub async fn fetch_todos(uid: &str, date: &str) -> Result<Option<Vec<TodoRecord>>, String> {
    let url = format!("{}/todo?uid={}&date={}", config::api_base(), uid, date);

    let opts = RequestInit::new();
    opts.set_method("GET");

    let json = run_json_request(&url, &opts).await?;
    let data: TodosResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| format!("Response error: {}", e))?;

    if data.success && !data.todos.is_empty() {
        Ok(Some(data.todos.into_iter().next().map(|day| day.todos).unwrap_or_default()))
    } else {
        Ok(None)
    }
}

/// Persist the full list snapshot for (uid, date).
///
/// The response body is parsed as JSON but not validated; the caller only
/// logs it.
pub async fn save_todos(request: &SaveTodosRequest) -> Result<JsValue, String> {
    let url = format!("{}/todo", config::api_base());
    let body =
        serde_json::to_string(request).map_err(|e| format!("Serialization error: {}", e))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    run_json_request(&url, &opts).await
}

/// Issue one request and parse the response body as JSON
async fn run_json_request(url: &str, opts: &RequestInit) -> Result<JsValue, String> {
    let request = Request::new_with_str_and_init(url, opts)
        .map_err(|e| format!("Request error: {:?}", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("Request error: {:?}", e))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| format!("Network error: {:?}", e))?;

    let body = response
        .json()
        .map_err(|e| format!("Response error: {:?}", e))?;
    JsFuture::from(body)
        .await
        .map_err(|e| format!("Response error: {:?}", e))
}
