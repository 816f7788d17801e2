//! Reactive bridge between the theme controller and Leptos components.
//!
//! DESIGN
//! ======
//! The controller is single-threaded and holds browser callbacks, so it lives
//! in local storage on the reactive owner. Components read a plain
//! [`ThemeView`] snapshot from a signal and act through [`ThemeHandle`].
//! Until the hydrate-side mount runs the view stays `Pending`, on the server
//! and during the first client pass alike, so both render the same markup.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;
use shell_state::{ReadinessState, ResolvedScheme, Subscription, ThemeController, ThemePreference};

use crate::util::dark_mode;

/// Render-facing snapshot of the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeView {
    pub readiness: ReadinessState,
    pub preference: ThemePreference,
    pub resolved: Option<ResolvedScheme>,
}

impl ThemeView {
    pub fn from_controller(theme: &ThemeController) -> Self {
        Self { readiness: theme.readiness(), preference: theme.preference(), resolved: theme.resolved() }
    }

    pub fn is_ready(&self) -> bool {
        self.readiness == ReadinessState::Ready && self.resolved.is_some()
    }

    /// Accessible label for the toggle button.
    pub fn toggle_label(&self) -> &'static str {
        match self.resolved {
            Some(ResolvedScheme::Dark) => "Switch to light theme",
            Some(ResolvedScheme::Light) => "Switch to dark theme",
            None => "Toggle theme",
        }
    }

    /// Glyph for the toggle button: the scheme a click switches to.
    pub fn toggle_icon(&self) -> &'static str {
        match self.resolved {
            Some(ResolvedScheme::Dark) => "\u{2600}",
            Some(ResolvedScheme::Light) => "\u{263e}",
            None => "",
        }
    }
}

struct MountedTheme {
    controller: ThemeController,
    _subscription: Subscription,
}

/// Context handle shared by theme-aware components.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    view: RwSignal<ThemeView>,
    mounted: StoredValue<Option<MountedTheme>, LocalStorage>,
}

impl Default for ThemeHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeHandle {
    pub fn new() -> Self {
        Self { view: RwSignal::new(ThemeView::default()), mounted: StoredValue::new_local(None) }
    }

    pub fn view(self) -> RwSignal<ThemeView> {
        self.view
    }

    /// Take ownership of `controller`, initialize it, and mirror it into the
    /// view. A second mount is ignored.
    pub fn mount(self, controller: ThemeController) {
        if self.mounted.with_value(Option::is_some) {
            return;
        }
        let view = self.view;
        let attribute = controller.attribute();
        let quiet = controller.disable_transition_on_change();
        let subscription = controller.subscribe(move |scheme| {
            dark_mode::apply(scheme, attribute, quiet);
            view.update(|v| v.resolved = Some(scheme));
        });
        controller.initialize();
        self.view.set(ThemeView::from_controller(&controller));
        self.mounted.set_value(Some(MountedTheme { controller, _subscription: subscription }));
    }

    pub fn toggle(self) {
        self.with_controller(ThemeController::toggle_theme);
    }

    pub fn set(self, preference: ThemePreference) {
        self.with_controller(|theme| theme.set_theme(preference));
    }

    fn with_controller(self, action: impl FnOnce(&ThemeController)) {
        let Some(controller) = self.mounted.with_value(|m| m.as_ref().map(|m| m.controller.clone())) else {
            tracing::debug!("theme action before mount ignored");
            return;
        };
        action(&controller);
        self.view.set(ThemeView::from_controller(&controller));
    }
}
