use super::*;
use shell_state::{ManualColorScheme, MemoryStore, ThemeConfig};

fn controller(os_dark: bool) -> ThemeController {
    ThemeController::new(ThemeConfig::default(), MemoryStore::new(), ManualColorScheme::new(os_dark))
}

// =============================================================
// ThemeView
// =============================================================

#[test]
fn default_view_is_pending() {
    let view = ThemeView::default();
    assert_eq!(view.readiness, ReadinessState::Pending);
    assert_eq!(view.preference, ThemePreference::System);
    assert!(!view.is_ready());
    assert_eq!(view.toggle_icon(), "");
    assert_eq!(view.toggle_label(), "Toggle theme");
}

#[test]
fn view_of_pending_controller_matches_default() {
    assert_eq!(ThemeView::from_controller(&controller(true)), ThemeView::default());
}

#[test]
fn view_of_ready_controller_carries_resolution() {
    let theme = controller(true);
    theme.initialize();
    let view = ThemeView::from_controller(&theme);
    assert!(view.is_ready());
    assert_eq!(view.resolved, Some(ResolvedScheme::Dark));
    assert_eq!(view.toggle_label(), "Switch to light theme");
    assert_eq!(view.toggle_icon(), "\u{2600}");
}

#[test]
fn view_tracks_toggle() {
    let theme = controller(false);
    theme.initialize();
    theme.toggle_theme();
    let view = ThemeView::from_controller(&theme);
    assert_eq!(view.preference, ThemePreference::Dark);
    assert_eq!(view.resolved, Some(ResolvedScheme::Dark));
}
