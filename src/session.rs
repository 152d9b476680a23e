//! Session Inputs
//!
//! The two values every request is keyed by: the locally persisted user
//! id and the current calendar date.

/// Request identity: uid + ISO calendar date
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub uid: String,
    pub date: String,
}

impl Session {
    /// Snapshot the current session.
    ///
    /// A missing uid downgrades to an empty string with a console warning
    /// so mutations still produce their write.
    pub fn current() -> Self {
        let uid = stored_uid().unwrap_or_else(|| {
            web_sys::console::warn_1(&"[TODO] No uid in localStorage".into());
            String::new()
        });
        Session { uid, date: today() }
    }
}

/// Read the persisted uid from localStorage
fn stored_uid() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item("uid").ok()?
}

/// Current date as `YYYY-MM-DD`, taken from the JS Date ISO string
fn today() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.split('T').next().unwrap_or_default().to_string()
}
