//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The state machines themselves live in `shell-state`. These modules adapt
//! them to Leptos contexts and hold the shell's built-in configuration.

pub mod config;
pub mod navigation;
pub mod theme;
