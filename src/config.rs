//! Endpoint Configuration

/// Base URL of the todo endpoint.
///
/// Resolved at build time from `TODO_API_URL`, falling back to the local
/// dev server.
pub fn api_base() -> &'static str {
    option_env!("TODO_API_URL").unwrap_or("http://localhost:4000")
}
