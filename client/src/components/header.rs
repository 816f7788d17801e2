//! Top header bar with the mobile menu button and theme toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use shell_state::NavigationState;

use crate::components::theme_toggle::ThemeToggle;

/// Header shown above the page content.
#[component]
pub fn Header() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();
    let location = use_location();

    let title = move || {
        let path = location.pathname.get();
        nav.with(|n| n.tree().label_for(&path).map(str::to_owned)).unwrap_or_default()
    };
    let mobile_open = move || nav.with(NavigationState::mobile_open);

    view! {
        <header class="header">
            <button
                class="header__menu"
                title="Open navigation"
                aria-label="Open navigation"
                aria-controls="sidebar"
                aria-expanded=move || mobile_open().to_string()
                on:click=move |_| nav.update(|n| n.set_mobile_open(!n.mobile_open()))
            >
                "\u{2630}"
            </button>
            <span class="header__title">{title}</span>
            <span class="header__spacer"></span>
            <ThemeToggle/>
        </header>
    }
}
