use app_shell::{UserProfile, SIGN_IN_PATH};
use leptos::*;

use crate::nav::NavItems;

/// Avatar with the profile image layered over a one-character fallback.
#[component]
fn Avatar(profile: UserProfile, #[prop(optional)] large: bool) -> impl IntoView {
    let class = if large { "avatar avatar-lg" } else { "avatar" };
    let alt = format!("@{}", profile.name);
    view! {
        <span class=class>
            <span class="avatar-fallback">{profile.initial()}</span>
            <img src=profile.avatar_url alt=alt/>
        </span>
    }
}

/// User identity control: trigger button plus a dropdown panel with the
/// identity block, a compact nav for small viewports, and sign-out.
///
/// The profile comes from the session collaborator and is rendered as-is;
/// `navigate` comes from the routing collaborator and receives the sign-in
/// path when the user signs out. No session teardown happens here.
#[component]
pub fn UserMenu(
    profile: UserProfile,
    #[prop(into)] current_path: Signal<String>,
    navigate: Callback<String>,
) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let panel_class = move || {
        if open.get() {
            "menu-panel panel open"
        } else {
            "menu-panel panel"
        }
    };
    let trigger_profile = profile.clone();
    let panel_profile = profile.clone();

    view! {
        <div class="user-menu">
            <button
                class="menu-trigger"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                <Avatar profile=trigger_profile/>
                <span class="trigger-name">{profile.name.clone()}</span>
            </button>
            <div class=panel_class role="menu">
                <div class="menu-identity">
                    <Avatar profile=panel_profile.clone() large=true/>
                    <div>
                        <div class="identity-name">{panel_profile.name.clone()}</div>
                        <div class="identity-email">{panel_profile.email.clone()}</div>
                    </div>
                </div>
                <hr class="menu-separator"/>
                <button
                    class="menu-item"
                    role="menuitem"
                    on:click=move |_| navigate.call(SIGN_IN_PATH.to_string())
                >
                    "Sign out"
                </button>
                <hr class="menu-separator wide-only"/>
                <nav class="menu-nav">
                    <NavItems current_path=current_path/>
                </nav>
            </div>
        </div>
    }
}
