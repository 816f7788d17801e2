use super::*;
use shell_state::{ThemeAttribute, ThemePreference};

#[test]
fn embedded_config_parses() {
    assert!(ShellConfig::from_json(SHELL_CONFIG_JSON).is_ok());
}

#[test]
fn embedded_config_uses_theme_key_and_class_attribute() {
    let config = load();
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.theme.default_preference, ThemePreference::System);
    assert_eq!(config.theme.attribute, ThemeAttribute::Class);
    assert_eq!(config.navigation.mobile_breakpoint_px, 768);
}

#[test]
fn broken_config_falls_back_to_defaults() {
    assert_eq!(parse("not json"), ShellConfig::default());
}
