//! URL routing for the two addressable areas
//!
//! Only two places can be reached from the URL:
//! - `#admin` - Admin panel (login or dashboard)
//! - `#privacy-policy`, `#privacy`, or a path ending in `/privacy-policy`
//!   or `/privacy` - Privacy policy
//!
//! Everything else is driven by in-app navigation.

/// Area requested by the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialRoute {
    Admin,
    Privacy,
}

const PRIVACY_SLUGS: [&str; 2] = ["privacy-policy", "privacy"];

/// Normalize a fragment: strip `#` and `/`, surrounding spaces, lowercase.
fn normalize(fragment: &str) -> String {
    fragment
        .trim()
        .trim_matches(|c| c == '#' || c == '/')
        .to_ascii_lowercase()
}

/// Route a URL fragment (with or without `#`).
pub fn route_fragment(fragment: &str) -> Option<SpecialRoute> {
    match normalize(fragment).as_str() {
        "admin" => Some(SpecialRoute::Admin),
        slug if PRIVACY_SLUGS.contains(&slug) => Some(SpecialRoute::Privacy),
        _ => None,
    }
}

/// Route a URL path. Only the privacy page is reachable by path.
pub fn route_path(path: &str) -> Option<SpecialRoute> {
    let path = path.trim().trim_end_matches('/').to_ascii_lowercase();
    let last = path.rsplit('/').next().unwrap_or_default();
    if PRIVACY_SLUGS.contains(&last) {
        Some(SpecialRoute::Privacy)
    } else {
        None
    }
}

/// Route the current location. The fragment wins over the path.
pub fn route(fragment: Option<&str>, path: &str) -> Option<SpecialRoute> {
    fragment
        .and_then(route_fragment)
        .or_else(|| route_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_fragment() {
        assert_eq!(route_fragment("#admin"), Some(SpecialRoute::Admin));
        assert_eq!(route_fragment("admin"), Some(SpecialRoute::Admin));
        assert_eq!(route_fragment("#/ADMIN/"), Some(SpecialRoute::Admin));
    }

    #[test]
    fn privacy_fragments() {
        assert_eq!(route_fragment("#privacy-policy"), Some(SpecialRoute::Privacy));
        assert_eq!(route_fragment("#Privacy"), Some(SpecialRoute::Privacy));
    }

    #[test]
    fn other_fragments_are_ignored() {
        assert_eq!(route_fragment(""), None);
        assert_eq!(route_fragment("#planets"), None);
        assert_eq!(route_fragment("#administrator"), None);
    }

    #[test]
    fn privacy_path_suffix() {
        assert_eq!(route_path("/privacy-policy"), Some(SpecialRoute::Privacy));
        assert_eq!(route_path("/app/privacy/"), Some(SpecialRoute::Privacy));
        assert_eq!(route_path("/"), None);
        assert_eq!(route_path("/admin"), None);
        assert_eq!(route_path("/not-privacy"), None);
    }

    #[test]
    fn fragment_wins_over_path() {
        assert_eq!(route(Some("admin"), "/privacy"), Some(SpecialRoute::Admin));
        assert_eq!(route(Some("planets"), "/privacy"), Some(SpecialRoute::Privacy));
        assert_eq!(route(None, "/"), None);
    }
}
