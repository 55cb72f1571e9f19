use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_matches_generated_markup() {
    let config = PageConfig::default();
    let sidebar = config.sidebar.as_ref().unwrap();
    assert_eq!(sidebar.menu_toggle_id, "menuToggle");
    assert_eq!(sidebar.sidebar_id, "sidebar");
    assert_eq!(sidebar.submenus.len(), 3);
    assert_eq!(sidebar.submenus[2], SubmenuConfig::new("calculatorsToggle", "calculatorsMenu"));

    let filter = config.filter.as_ref().unwrap();
    assert_eq!(filter.row_selector, "tbody tr[data-proof]");
    assert_eq!(filter.stats_id, "stats");

    assert_eq!(config.theme.storage_key, DEFAULT_THEME_STORAGE_KEY);
    assert_eq!(config.theme.attribute, "data-theme");
    assert_eq!(config.theme.init_delay_ms, 50);
    assert_eq!(config.theme.visibility_delay_ms, 100);
}

#[test]
fn default_config_is_valid() {
    assert!(PageConfig::default().validate().is_ok());
}

#[test]
fn filter_selectors_use_radio_name() {
    let filter = FilterConfig::default();
    assert_eq!(filter.radio_selector(), "input[name=\"proofFilter\"]");
    assert_eq!(filter.checked_selector(), "input[name=\"proofFilter\"]:checked");
}

// =============================================================
// JSON parsing
// =============================================================

#[test]
fn empty_json_yields_defaults() {
    let config = PageConfig::from_json("{}").unwrap();
    assert_eq!(config, PageConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config = PageConfig::from_json(r#"{"theme": {"toggle_id": "modeSwitch"}}"#).unwrap();
    assert_eq!(config.theme.toggle_id, "modeSwitch");
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.sidebar, Some(SidebarConfig::default()));
}

#[test]
fn null_section_disables_controller() {
    let config = PageConfig::from_json(r#"{"sidebar": null}"#).unwrap();
    assert!(config.sidebar.is_none());
    assert!(config.filter.is_some());
}

#[test]
fn submenus_can_be_replaced() {
    let config = PageConfig::from_json(
        r#"{"sidebar": {"submenus": [{"toggle_id": "a", "menu_id": "b"}]}}"#,
    )
    .unwrap();
    let sidebar = config.sidebar.unwrap();
    assert_eq!(sidebar.submenus, vec![SubmenuConfig::new("a", "b")]);
    assert_eq!(sidebar.open_class, "open");
}

#[test]
fn malformed_json_is_rejected() {
    let err = PageConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, PageError::ConfigJson(_)));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_ids_are_rejected() {
    let err = PageConfig::from_json(r#"{"filter": {"stats_id": ""}}"#).unwrap_err();
    match err {
        PageError::InvalidConfig(msg) => assert_eq!(msg, "filter.stats_id must not be empty"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_submenu_ids_name_their_index() {
    let mut config = PageConfig::default();
    config.sidebar.as_mut().unwrap().submenus[1].menu_id = "  ".into();
    let err = config.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid page config: sidebar.submenus[1].menu_id must not be empty"
    );
}

#[test]
fn disabled_sections_skip_validation() {
    let config = PageConfig { sidebar: None, filter: None, theme: ThemeConfig::default() };
    assert!(config.validate().is_ok());
}
