//! Built-in sidebar menu and navigation state construction.
//!
//! DESIGN
//! ======
//! The menu normally comes from `shell.json`. When the config lists no items,
//! or lists an invalid set, the built-in menu below is used so the shell never
//! renders an empty sidebar.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use shell_state::{NavItem, NavLink, NavigationConfig, NavigationState};

/// Primary menu.
pub fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::new("dashboard", "Dashboard", "/"),
        NavItem::new("search", "Search", "/search"),
        NavItem::new("reporting", "Reporting", "/reporting").with_children(vec![
            NavLink::new("check-ins", "Check-ins", "/reporting/check-ins"),
            NavLink::new("objectives", "Objectives", "/reporting/objectives"),
            NavLink::new("career-hub", "Career Hub", "/reporting/career-hub"),
        ]),
        NavItem::new("notifications", "Notifications", "/notifications").with_badge(2),
        NavItem::new("mail", "Mail", "/mail").with_children(vec![NavLink::new("inbox", "Inbox", "/mail/inbox")]),
        NavItem::new("kanban", "Kanban", "/kanban"),
        NavItem::new("tasks", "Tasks", "/tasks").with_badge(3),
    ]
}

/// Footer user menu entries.
pub fn user_menu_items() -> Vec<NavLink> {
    vec![
        NavLink::new("docs", "Documentation", "/docs"),
        NavLink::new("support", "Support", "/support"),
        NavLink::new("settings", "Settings", "/settings"),
    ]
}

/// Top-level entries currently in the tree, for rendering.
pub fn menu_items(state: &NavigationState) -> Vec<NavItem> {
    state.tree().items().to_vec()
}

/// Navigation state for a freshly mounted shell.
pub fn initial_state(config: &NavigationConfig) -> NavigationState {
    let mut config = config.clone();
    if config.items.is_empty() {
        config.items = default_items();
    }
    NavigationState::from_config(&config).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "navigation config rejected, using built-in menu");
        let fallback = NavigationConfig { mobile_breakpoint_px: config.mobile_breakpoint_px, items: default_items() };
        NavigationState::from_config(&fallback).unwrap_or_default()
    })
}
