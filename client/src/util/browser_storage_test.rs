#![cfg(not(feature = "hydrate"))]

use super::*;
use shell_state::{ManualColorScheme, ReadinessState, ResolvedScheme, ThemeConfig, ThemeController, ThemePreference};

#[test]
fn read_reports_unavailable_outside_browser() {
    assert!(matches!(LocalStorageStore.read("theme"), Err(StateError::PersistenceUnavailable(_))));
}

#[test]
fn write_reports_unavailable_outside_browser() {
    assert!(matches!(LocalStorageStore.write("theme", "dark"), Err(StateError::PersistenceUnavailable(_))));
}

#[test]
fn controller_over_unavailable_storage_still_works() {
    let theme = ThemeController::new(ThemeConfig::default(), LocalStorageStore, ManualColorScheme::new(true));
    assert_eq!(theme.initialize(), ReadinessState::Ready);
    assert_eq!(theme.resolved(), Some(ResolvedScheme::Dark));

    theme.toggle_theme();
    assert_eq!(theme.preference(), ThemePreference::Light);
}
