use app_shell::UserProfile;
use leptos::*;

use crate::nav::NavItems;
use crate::user_menu::UserMenu;

const LOGO_SRC: &str = "/assets/logo.svg";
const LOGO_WIDTH: u32 = 140;
const LOGO_HEIGHT: u32 = 32;

/// Sticky page banner: logo link, primary nav, user menu, in that order.
/// The nav region is hidden below the small breakpoint; the user menu's
/// compact nav takes over there (see theme.rs).
#[component]
pub fn Header(
    #[prop(into)] current_path: Signal<String>,
    profile: UserProfile,
    navigate: Callback<String>,
) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="header-inner">
                <a href="/" class="logo-link">
                    <img
                        src=LOGO_SRC
                        alt="Tickerboard logo"
                        width=LOGO_WIDTH
                        height=LOGO_HEIGHT
                    />
                </a>
                <nav class="header-nav">
                    <NavItems current_path=current_path/>
                </nav>
                <UserMenu profile=profile current_path=current_path navigate=navigate/>
            </div>
        </header>
    }
}
