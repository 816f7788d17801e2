//! Collapsible navigation sidebar.
//!
//! ARCHITECTURE
//! ============
//! Desktop shows a rail that collapses to icons; below the breakpoint the same
//! markup becomes an overlay opened from the header. All state lives in the
//! shared `NavigationState` signal; this module only renders it and forwards
//! clicks.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use shell_state::{NavItem, NavLink, NavigationState};

use crate::state::navigation::{menu_items, user_menu_items};

/// Sidebar with collapse control, primary menu, and user menu.
#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();

    let collapsed = move || nav.with(NavigationState::collapsed);
    let mobile_open = move || nav.with(NavigationState::mobile_open);
    // Rebuilds the menu only when the tree itself is replaced.
    let items = Memo::new(move |_| nav.with(menu_items));

    #[cfg(feature = "hydrate")]
    {
        let breakpoint = nav.with_untracked(NavigationState::mobile_breakpoint_px);
        let watch = StoredValue::new_local(None::<shell_state::Subscription>);
        Effect::new(move || {
            if watch.with_value(Option::is_some) {
                return;
            }
            let query = crate::util::media_query::min_width_query(breakpoint);
            let sub = crate::util::media_query::watch(
                &query,
                Box::new(move |_| {
                    if let Some(width) = crate::util::media_query::viewport_width() {
                        nav.update(|n| n.on_viewport_width(width));
                    }
                }),
            );
            watch.set_value(Some(sub));
        });
    }

    view! {
        <div
            class="sidebar-backdrop"
            class:sidebar-backdrop--visible=mobile_open
            aria-hidden="true"
            on:click=move |_| nav.update(|n| n.set_mobile_open(false))
        ></div>
        <aside
            id="sidebar"
            class="sidebar"
            class:sidebar--collapsed=collapsed
            class:sidebar--mobile-open=mobile_open
        >
            <div class="sidebar__header">
                <span class="sidebar__brand">"Beyond UI"</span>
                <button
                    class="sidebar__collapse"
                    title="Toggle sidebar"
                    aria-label="Toggle sidebar"
                    aria-expanded=move || (!collapsed()).to_string()
                    on:click=move |_| nav.update(NavigationState::toggle_collapsed)
                >
                    {move || if collapsed() { "\u{00bb}" } else { "\u{00ab}" }}
                </button>
            </div>
            <nav class="sidebar__nav" aria-label="Primary">
                {move || {
                    items.get().into_iter().map(|item| view! { <SidebarItem item=item/> }).collect::<Vec<_>>()
                }}
            </nav>
            <SidebarUserMenu/>
        </aside>
    }
}

/// One top-level entry: a plain link, or a group with a submenu.
#[component]
fn SidebarItem(item: NavItem) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();
    let location = use_location();

    let active = {
        let item = item.clone();
        move || item.is_active(&location.pathname.get())
    };
    let badge = {
        let count = item.badge_count;
        move || nav.with(|n| n.visible_badge(count))
    };
    let collapsed = move || nav.with(NavigationState::collapsed);
    let label = item.label.clone();

    if !item.is_parent() {
        return view! {
            <a
                href=item.route.clone()
                class="sidebar__item"
                class:sidebar__item--active=active.clone()
                title=label.clone()
                aria-current=move || active().then_some("page")
                on:click=move |_| nav.update(|n| n.set_mobile_open(false))
            >
                <span class="sidebar__label" class:sidebar__label--hidden=collapsed>{label.clone()}</span>
                {move || badge().map(|count| view! { <span class="sidebar__badge">{count}</span> })}
            </a>
        }
        .into_any();
    }

    let group_id = item.id.clone();
    let open = {
        let id = group_id.clone();
        move || nav.with(|n| n.is_group_expanded(&id))
    };
    let submenu_id = format!("sidebar-group-{}", item.id);
    let children = item.children.clone();

    view! {
        <div class="sidebar__group" class:sidebar__group--open=open.clone()>
            <button
                class="sidebar__item sidebar__group-toggle"
                class:sidebar__item--active=active
                title=label.clone()
                aria-expanded={
                    let open = open.clone();
                    move || open().to_string()
                }
                aria-controls=submenu_id.clone()
                on:click=move |_| nav.update(|n| n.toggle_group(&group_id))
            >
                <span class="sidebar__label" class:sidebar__label--hidden=collapsed>{label.clone()}</span>
                {move || badge().map(|count| view! { <span class="sidebar__badge">{count}</span> })}
                <span class="sidebar__chevron" class:sidebar__chevron--open=open.clone() aria-hidden="true">
                    "\u{25be}"
                </span>
            </button>
            <Show when=open.clone()>
                <div id=submenu_id.clone() class="sidebar__submenu" role="group">
                    {children.iter().cloned().map(|link| view! { <SidebarLink link=link/> }).collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

/// Child entry inside a group.
#[component]
fn SidebarLink(link: NavLink) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();
    let location = use_location();

    let active = {
        let link = link.clone();
        move || link.is_active(&location.pathname.get())
    };
    let badge = {
        let count = link.badge_count;
        move || nav.with(|n| n.visible_badge(count))
    };

    view! {
        <a
            href=link.route.clone()
            class="sidebar__subitem"
            class:sidebar__subitem--active=active.clone()
            aria-current=move || active().then_some("page")
            on:click=move |_| nav.update(|n| n.set_mobile_open(false))
        >
            {link.label.clone()}
            {move || badge().map(|count| view! { <span class="sidebar__badge">{count}</span> })}
        </a>
    }
}

/// Footer menu with documentation, support, and settings links.
#[component]
fn SidebarUserMenu() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();
    let open = move || nav.with(NavigationState::user_menu_open);
    let collapsed = move || nav.with(NavigationState::collapsed);

    view! {
        <div class="sidebar__user">
            <button
                class="sidebar__user-toggle"
                title="Account"
                aria-expanded=move || open().to_string()
                aria-controls="sidebar-user-menu"
                disabled=collapsed
                on:click=move |_| nav.update(NavigationState::toggle_user_menu)
            >
                <span class="sidebar__avatar" aria-hidden="true">"U"</span>
                <span class="sidebar__label" class:sidebar__label--hidden=collapsed>"Account"</span>
            </button>
            <Show when=open.clone()>
                <div id="sidebar-user-menu" class="sidebar__submenu" role="group">
                    {user_menu_items().into_iter().map(|link| view! { <SidebarLink link=link/> }).collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
