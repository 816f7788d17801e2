use super::*;
use shell_state::NavigationTree;

#[test]
fn default_items_form_a_valid_tree() {
    let tree = NavigationTree::new(default_items()).unwrap();
    assert!(tree.is_parent("reporting"));
    assert!(tree.is_parent("mail"));
    assert_eq!(tree.get("tasks").and_then(|i| i.badge_count), Some(3));
}

#[test]
fn empty_config_uses_built_in_menu() {
    let state = initial_state(&NavigationConfig::default());
    assert_eq!(state.tree().items().len(), default_items().len());
    assert!(!state.collapsed());
}

#[test]
fn configured_items_replace_built_in_menu() {
    let config = NavigationConfig { mobile_breakpoint_px: 640, items: vec![NavItem::new("home", "Home", "/")] };
    let state = initial_state(&config);
    assert_eq!(state.tree().items().len(), 1);
    assert_eq!(state.mobile_breakpoint_px(), 640);
}

#[test]
fn invalid_items_fall_back_to_built_in_menu() {
    let config = NavigationConfig {
        mobile_breakpoint_px: 1024,
        items: vec![NavItem::new("dup", "A", "/a"), NavItem::new("dup", "B", "/b")],
    };
    let state = initial_state(&config);
    assert!(state.tree().get("dashboard").is_some());
    assert_eq!(state.mobile_breakpoint_px(), 1024);
}

#[test]
fn user_menu_ids_do_not_clash_with_primary_menu() {
    let mut items = default_items();
    items.extend(user_menu_items().into_iter().map(|link| NavItem::new(link.id, link.label, link.route)));
    assert!(NavigationTree::new(items).is_ok());
}

#[test]
fn menu_items_follow_replaced_tree() {
    let mut state = initial_state(&NavigationConfig::default());
    assert_eq!(menu_items(&state).len(), default_items().len());

    let tree = NavigationTree::new(vec![NavItem::new("home", "Home", "/")]).unwrap();
    state.set_tree(tree);
    let items = menu_items(&state);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "home");
}
