//! Route building for the OWS `/{controller}/{action}/{id}` URL scheme.
//!
//! ```rust
//! use newegg_api::clients::path::{get_path, post_path};
//!
//! assert_eq!(get_path("Stores.egg", None, None), "/Stores.egg/");
//! assert_eq!(
//!     get_path("Stores.egg", Some("Categories"), Some("1")),
//!     "/Stores.egg/Categories/1"
//! );
//! assert_eq!(post_path("Search.egg", "Advanced"), "/Search.egg/Advanced/");
//! ```

use urlencoding::encode;

/// Builds a GET path.
///
/// Returns `/{controller}/{action}/{id}` when both `action` and `id` are
/// given, otherwise `/{controller}/`. Each segment is percent-encoded.
#[must_use]
pub fn get_path(controller: &str, action: Option<&str>, id: Option<&str>) -> String {
    match (action, id) {
        (Some(action), Some(id)) => format!(
            "/{}/{}/{}",
            encode(controller),
            encode(action),
            encode(id)
        ),
        _ => format!("/{}/", encode(controller)),
    }
}

/// Builds a POST path: `/{controller}/{action}/`.
#[must_use]
pub fn post_path(controller: &str, action: &str) -> String {
    format!("/{}/{}/", encode(controller), encode(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_path_without_action_or_id() {
        assert_eq!(get_path("Stores.egg", None, None), "/Stores.egg/");
    }

    #[test]
    fn test_get_path_requires_both_action_and_id() {
        assert_eq!(get_path("Stores.egg", Some("Categories"), None), "/Stores.egg/");
        assert_eq!(get_path("Stores.egg", None, Some("1")), "/Stores.egg/");
    }

    #[test]
    fn test_get_path_with_action_and_id_has_no_trailing_slash() {
        assert_eq!(
            get_path("Stores.egg", Some("Categories"), Some("7")),
            "/Stores.egg/Categories/7"
        );
    }

    #[test]
    fn test_post_path_has_trailing_slash() {
        assert_eq!(post_path("Navigation.egg", "Retrieve"), "/Navigation.egg/Retrieve/");
    }

    #[test]
    fn test_segments_are_percent_encoded() {
        assert_eq!(
            get_path("Stores.egg", Some("Categories"), Some("a b/c")),
            "/Stores.egg/Categories/a%20b%2Fc"
        );
    }
}
