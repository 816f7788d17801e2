//! Page frame: sidebar, header, and the routed content area.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use shell_state::NavigationState;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

/// Wraps routed content and keeps navigation state in step with the URL.
#[component]
pub fn ShellLayout(children: Children) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();
    let location = use_location();

    // Seed the active groups before the first render so server and client
    // markup agree on which submenus are open.
    nav.update_untracked(|n| n.on_route_change(&location.pathname.get_untracked()));

    Effect::new(move || {
        let path = location.pathname.get();
        if nav.with_untracked(|n| n.current_path() != Some(path.as_str())) {
            nav.update(|n| n.on_route_change(&path));
        }
    });

    let collapsed = move || nav.with(NavigationState::collapsed);

    view! {
        <div class="shell" class:shell--collapsed=collapsed>
            <Sidebar/>
            <div class="shell__body">
                <Header/>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}
