//! Reflects the resolved color scheme onto the `<html>` element.
//!
//! Either toggles the `dark` class or sets `data-theme`, depending on the
//! configured [`ThemeAttribute`]. Requires a browser environment; without
//! the `hydrate` feature this is a no-op so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use shell_state::{ResolvedScheme, ThemeAttribute};

/// Class toggled on the root element for the dark scheme.
pub const DARK_CLASS: &str = "dark";

/// Attribute written when [`ThemeAttribute::DataTheme`] is configured.
pub const DATA_THEME_ATTR: &str = "data-theme";

/// Injected for the duration of a flip when transitions are suppressed.
pub const NO_TRANSITIONS_CSS: &str = "*,*::before,*::after{transition:none!important}";

/// Apply `scheme` to the document root.
///
/// With `suppress_transitions`, a temporary stylesheet disables transitions
/// and styles are flushed before it is removed, so colors switch in one frame
/// instead of animating.
pub fn apply(scheme: ResolvedScheme, attribute: ThemeAttribute, suppress_transitions: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(el) = document.document_element() else {
            return;
        };
        let guard = if suppress_transitions { transition_guard(&document, &el) } else { None };
        match attribute {
            ThemeAttribute::Class => {
                let _ = el.class_list().toggle_with_force(DARK_CLASS, scheme.is_dark());
            }
            ThemeAttribute::DataTheme => {
                let _ = el.set_attribute(DATA_THEME_ATTR, scheme.as_str());
            }
        }
        if let Some(style) = guard {
            // Reading layout forces the style flush.
            let _ = el.client_width();
            style.remove();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (scheme, attribute, suppress_transitions);
    }
}

#[cfg(feature = "hydrate")]
fn transition_guard(document: &web_sys::Document, root: &web_sys::Element) -> Option<web_sys::Element> {
    let style = document.create_element("style").ok()?;
    style.set_text_content(Some(NO_TRANSITIONS_CSS));
    if root.append_child(&style).is_err() {
        tracing::debug!("could not attach transition guard");
        return None;
    }
    Some(style)
}
