//! URL utility functions for reading query parameters

use web_sys::window;

/// Get a query parameter from the current page URL.
///
/// Reads `window.location.search` directly, so it works before the router is
/// mounted.
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    query_param(&search, key)
}

/// Look up `key` in a query string (with or without the leading `?`).
///
/// The first occurrence wins. A key without `=` yields an empty value.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);
    if query_string.is_empty() {
        return None;
    }

    query_string.split('&').find_map(|pair| {
        let (param_key, param_value) = pair.split_once('=').unwrap_or((pair, ""));
        if param_key != key {
            return None;
        }
        Some(
            urlencoding::decode(param_value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| param_value.to_string()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?log=debug", "log"), Some("debug".to_string()));
        assert_eq!(query_param("a=1&log=warn", "log"), Some("warn".to_string()));
        assert_eq!(query_param("?a=1&log=x&log=y", "log"), Some("x".to_string()));
    }

    #[test]
    fn test_query_param_decoding() {
        assert_eq!(
            query_param("?name=Jane%20Doe", "name"),
            Some("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_query_param_missing() {
        assert_eq!(query_param("", "log"), None);
        assert_eq!(query_param("?", "log"), None);
        assert_eq!(query_param("?logging=debug", "log"), None);
        assert_eq!(query_param("?log", "log"), Some(String::new()));
    }
}
