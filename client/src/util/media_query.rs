//! `matchMedia` glue: the OS color-scheme source and viewport queries.
//!
//! Without the `hydrate` feature queries never match and watches are inert,
//! which resolves `system` to light during server rendering. Nothing
//! theme-dependent is rendered before the controller is ready anyway.

#[cfg(test)]
#[path = "media_query_test.rs"]
mod media_query_test;

use shell_state::{ColorSchemeSource, Subscription};

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Media query that is true at or above `breakpoint_px`.
#[must_use]
pub fn min_width_query(breakpoint_px: u32) -> String {
    format!("(min-width: {breakpoint_px}px)")
}

/// Current answer for `query`.
pub fn matches(query: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(query).ok().flatten())
            .is_some_and(|list| list.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        false
    }
}

/// Call `on_change` whenever `query` flips. The handler is removed when the
/// returned subscription is dropped.
pub fn watch(query: &str, on_change: Box<dyn Fn(bool)>) -> Subscription {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(list) = web_sys::window().and_then(|w| w.match_media(query).ok().flatten()) else {
            tracing::debug!(query, "matchMedia unavailable, not watching");
            return Subscription::noop();
        };
        let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(ev.matches());
        });
        if list.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref()).is_err() {
            tracing::debug!(query, "could not attach media query listener");
            return Subscription::noop();
        }
        Subscription::new(move || {
            let _ = list.remove_event_listener_with_callback("change", handler.as_ref().unchecked_ref());
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (query, on_change);
        Subscription::noop()
    }
}

/// Inner width of the window in CSS pixels.
pub fn viewport_width() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let px = width.max(0.0) as u32;
        Some(px)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// OS dark-mode preference via `(prefers-color-scheme: dark)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryColorScheme;

impl ColorSchemeSource for MediaQueryColorScheme {
    fn prefers_dark(&self) -> bool {
        matches(PREFERS_DARK_QUERY)
    }

    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Subscription {
        watch(PREFERS_DARK_QUERY, on_change)
    }
}
