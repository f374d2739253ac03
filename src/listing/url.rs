//! Shareable-location sync (browser only)
//!
//! The query state is mirrored into the address bar so the current view
//! survives a reload and can be shared as a link. History entries are
//! replaced, not pushed; paging through a list should not bury the back
//! button.

#![cfg(feature = "web")]

use web_sys::wasm_bindgen::JsValue;

/// Raw query string of the current location, if one is present.
pub fn current_search() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    if search.is_empty() {
        None
    } else {
        Some(search)
    }
}

/// Replace the location's query string with the encoded state.
pub fn publish(query_string: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    let url = if query_string.is_empty() {
        path
    } else {
        format!("{path}?{query_string}")
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}
