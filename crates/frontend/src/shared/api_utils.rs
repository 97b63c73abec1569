//! Base URL resolution for calls to the HTTP API.
//!
//! The API listens on port 3000 of the host that served the console.

const API_PORT: u16 = 3000;

/// Get the base URL for API requests, e.g. `"http://localhost:3000"`.
///
/// Returns an empty string if there is no window (nothing to derive from).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_parts(&protocol, &hostname)
}

fn base_from_parts(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_parts() {
        assert_eq!(base_from_parts("http:", "localhost"), "http://localhost:3000");
        assert_eq!(
            base_from_parts("https:", "admin.example.com"),
            "https://admin.example.com:3000"
        );
    }
}
