//! Embedded shell configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use shell_state::ShellConfig;

const SHELL_CONFIG_JSON: &str = include_str!("../../shell.json");

/// Configuration compiled into the bundle.
pub fn load() -> ShellConfig {
    parse(SHELL_CONFIG_JSON)
}

/// Parse `raw`, falling back to defaults when it is broken.
pub fn parse(raw: &str) -> ShellConfig {
    ShellConfig::from_json(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "shell config rejected, using defaults");
        ShellConfig::default()
    })
}
