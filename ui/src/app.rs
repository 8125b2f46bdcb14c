use app_shell::UserProfile;
use leptos::*;
use leptos_meta::*;
use leptos_router::{use_location, use_navigate, Route, Router, Routes};

use crate::shell::AppShell;
use crate::state::{provide_session_ctx, use_session_ctx};
use crate::theme::GLOBAL_CSS;

/// Application root. Owns the collaborator wiring: the router supplies the
/// current path and the navigate capability, the session context supplies
/// the profile, and everything below receives them as explicit inputs.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session_ctx(UserProfile::placeholder());

    view! {
        <Style>{GLOBAL_CSS}</Style>
        <Router>
            <RoutedShell/>
        </Router>
    }
}

// Must live inside <Router/>: use_navigate panics without one, which is the
// intended failure mode when the routing collaborator is missing.
#[component]
fn RoutedShell() -> impl IntoView {
    let session = use_session_ctx();
    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());
    let router_navigate = use_navigate();
    let navigate = Callback::new(move |path: String| {
        router_navigate(&path, Default::default());
    });

    move || {
        let profile = session.profile.get();
        view! {
            <AppShell current_path=current_path profile=profile navigate=navigate>
                <Routes>
                    <Route path="/" view=DashboardPage/>
                    <Route path="/search" view=SearchPage/>
                    <Route path="/warchlist" view=WatchlistPage/>
                    <Route path="/sign-in" view=SignInPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </AppShell>
        }
    }
}

#[component]
fn DashboardPage() -> impl IntoView {
    view! {
        <section>
            <h1>"Dashbord"</h1>
            <p>"Market overview lands here."</p>
        </section>
    }
}

#[component]
fn SearchPage() -> impl IntoView {
    view! {
        <section>
            <h1>"Search"</h1>
            <p>"Symbol search lands here."</p>
        </section>
    }
}

#[component]
fn WatchlistPage() -> impl IntoView {
    view! {
        <section>
            <h1>"Watchlist"</h1>
            <p>"Tracked symbols land here."</p>
        </section>
    }
}

#[component]
fn SignInPage() -> impl IntoView {
    view! {
        <section>
            <h1>"Sign in"</h1>
            <p>"Authentication is handled elsewhere."</p>
        </section>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <section>
            <h1>"Not found"</h1>
        </section>
    }
}
