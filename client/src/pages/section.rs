//! Placeholder content for any menu route.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use shell_state::NavigationState;

/// Shows the label of the menu entry matching the current path.
#[component]
pub fn SectionPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();
    let location = use_location();

    let heading = move || {
        let path = location.pathname.get();
        nav.with(|n| n.tree().label_for(&path).map(str::to_owned))
            .unwrap_or_else(|| "Page not found".to_owned())
    };

    view! {
        <section class="section-page">
            <h1 class="section-page__title">{heading}</h1>
        </section>
    }
}
