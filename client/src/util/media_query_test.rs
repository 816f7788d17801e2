#![cfg(not(feature = "hydrate"))]

use super::*;
use shell_state::{MemoryStore, ResolvedScheme, ThemeConfig, ThemeController};

#[test]
fn min_width_query_formats_breakpoint() {
    assert_eq!(min_width_query(768), "(min-width: 768px)");
}

#[test]
fn queries_never_match_outside_browser() {
    assert!(!matches(PREFERS_DARK_QUERY));
    assert!(!MediaQueryColorScheme.prefers_dark());
    assert_eq!(viewport_width(), None);
}

#[test]
fn watch_is_inert_outside_browser() {
    let sub = watch(PREFERS_DARK_QUERY, Box::new(|_| {}));
    assert!(!sub.is_active());
}

#[test]
fn system_preference_resolves_light_on_server() {
    let theme = ThemeController::new(ThemeConfig::default(), MemoryStore::new(), MediaQueryColorScheme);
    theme.initialize();
    assert_eq!(theme.resolved(), Some(ResolvedScheme::Light));
}
