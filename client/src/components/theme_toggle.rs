//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::theme::ThemeHandle;

/// Flips between explicit light and dark.
///
/// Renders an inert placeholder of the same size until the controller is
/// ready, so server markup and the first client render agree.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeHandle>();
    let view = theme.view();

    let ready = move || view.get().is_ready();
    let label = move || view.get().toggle_label();
    let icon = move || view.get().toggle_icon();

    view! {
        <button
            class="btn theme-toggle"
            class:theme-toggle--pending=move || !ready()
            disabled=move || !ready()
            title=label
            aria-label=label
            on:click=move |_| theme.toggle()
        >
            <span class="theme-toggle__icon" aria-hidden="true">{icon}</span>
        </button>
    }
}
