use app_shell::{is_nav_active, NAV_ITEMS};
use leptos::*;

/// Navigation list rendered from the static registry, one link per entry in
/// registry order. The current path is injected rather than read from
/// ambient router state so the list renders the same anywhere.
#[component]
pub fn NavItems(#[prop(into)] current_path: Signal<String>) -> impl IntoView {
    view! {
        <ul class="nav-list">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    let href = item.href;
                    let link_class = move || {
                        if is_nav_active(&current_path.get(), href) {
                            "nav-link active"
                        } else {
                            "nav-link"
                        }
                    };
                    view! {
                        <li>
                            <a href=href class=link_class>
                                {item.title}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
