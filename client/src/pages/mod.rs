//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Every menu route renders the same placeholder section; the shell around it
//! is what this crate is about.

pub mod section;
