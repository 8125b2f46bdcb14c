use serde::{Deserialize, Serialize};

/// One entry in the top navigation. The registry is fixed at compile time;
/// nothing in the app mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub title: &'static str,
}

/// Ordered navigation registry. Order is significant and preserved by the
/// renderer. Hrefs and titles are unique within the list.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        href: "/",
        title: "Dashbord",
    },
    NavItem {
        href: "/search",
        title: "Search",
    },
    NavItem {
        href: "/warchlist",
        title: "Watchlist",
    },
];

/// Destination the user menu navigates to on sign-out.
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Whether a nav candidate should render as active for the current path.
///
/// The root href matches only the root path exactly. Any other href matches
/// itself or a descendant route, anchored at a path-segment boundary, so
/// `/search/results` activates `/search` while `/search-results` does not.
/// Blank inputs never match; this sits in a render path and must not panic.
pub fn is_nav_active(current_path: &str, href: &str) -> bool {
    if current_path.is_empty() || href.is_empty() {
        return false;
    }
    if href == "/" {
        return current_path == "/";
    }
    current_path == href
        || current_path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Identity data rendered in the user menu. Supplied by the session
/// collaborator; the UI renders whatever it receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

impl UserProfile {
    /// Stand-in profile used until a real session source is wired up.
    pub fn placeholder() -> Self {
        Self {
            name: "Ava Chen".into(),
            email: "ava@tickerboard.dev".into(),
            avatar_url: "/assets/avatars/default.png".into(),
        }
    }

    /// First character of the display name, shown while the avatar image
    /// is unavailable. An empty name falls back to `?`.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}
