//! Mirroring of small pieces of page state into the URL query string.
//!
//! Only the query string is touched, through `history.replaceState`, so no
//! navigation happens and no history entries pile up.

use std::collections::HashMap;
use web_sys::window;

fn parse_query(search: &str) -> HashMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Rebuild `search` with `key` set to `value`; an empty value drops the key.
fn with_param(search: &str, key: &str, value: &str) -> String {
    let mut params = parse_query(search);
    if value.is_empty() {
        params.remove(key);
    } else {
        params.insert(key.to_string(), value.to_string());
    }

    if params.is_empty() {
        return String::new();
    }

    // Stable ordering keeps the URL from flapping between equivalent forms.
    let ordered: std::collections::BTreeMap<_, _> = params.into_iter().collect();
    match serde_qs::to_string(&ordered) {
        Ok(query) => format!("?{}", query),
        Err(e) => {
            log::error!("Failed to encode query string: {}", e);
            String::new()
        }
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn read_param(key: &str) -> Option<String> {
    parse_query(&current_search()).remove(key)
}

pub fn write_param(key: &str, value: &str) {
    let current = current_search();
    let next = with_param(&current, key, value);
    if current == next {
        return;
    }

    let Some(w) = window() else {
        return;
    };
    let url = if next.is_empty() {
        w.location().pathname().unwrap_or_else(|_| "/".to_string())
    } else {
        next
    };
    let result = w.history().and_then(|history| {
        history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url))
    });
    if let Err(e) = result {
        log::error!("Failed to update URL with {}: {:?}", url, e);
    }
}
