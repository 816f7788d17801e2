//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application shell while reading/writing the
//! navigation and theme state provided through Leptos context.

pub mod header;
pub mod shell_layout;
pub mod sidebar;
pub mod theme_toggle;
