//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, media
//! queries, root element attributes) from page and component logic. Each one
//! compiles to an inert fallback without the `hydrate` feature.

pub mod browser_storage;
pub mod dark_mode;
pub mod media_query;
