#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn apply_is_noop_but_callable() {
    apply(ResolvedScheme::Dark, ThemeAttribute::Class, true);
    apply(ResolvedScheme::Light, ThemeAttribute::DataTheme, false);
}

#[test]
fn transition_guard_disables_every_transition() {
    assert!(NO_TRANSITIONS_CSS.starts_with('*'));
    assert!(NO_TRANSITIONS_CSS.contains("transition:none!important"));
}
