use app_shell::UserProfile;
use leptos::*;

use crate::header::Header;

/// Full-page layout: banner on top, page content below. Children are
/// whatever the active route renders; absent children leave the content
/// region empty but the banner always renders.
#[component]
pub fn AppShell(
    #[prop(into)] current_path: Signal<String>,
    profile: UserProfile,
    navigate: Callback<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <Header current_path=current_path profile=profile navigate=navigate/>
        <main class="page-content">{children.map(|render| render())}</main>
    }
}
