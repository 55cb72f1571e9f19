//! Page configuration: element ids, selectors, class names, and timings.
//!
//! Every field has a default matching the generated leaderboard markup, so
//! an empty JSON object (or no config at all) binds the stock page. Pages
//! with different markup pass a partial JSON override to `boot`.

use serde::{Deserialize, Serialize};

use crate::error::PageError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_THEME_INIT_DELAY_MS: u32 = 50;
pub const DEFAULT_THEME_VISIBILITY_DELAY_MS: u32 = 100;

/// Top-level config. A `null` sidebar or filter section disables that
/// controller for the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub sidebar: Option<SidebarConfig>,
    pub filter: Option<FilterConfig>,
    pub theme: ThemeConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sidebar: Some(SidebarConfig::default()),
            filter: Some(FilterConfig::default()),
            theme: ThemeConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty ids, selectors, and class names.
    pub fn validate(&self) -> Result<(), PageError> {
        if let Some(sidebar) = &self.sidebar {
            require("sidebar.menu_toggle_id", &sidebar.menu_toggle_id)?;
            require("sidebar.sidebar_id", &sidebar.sidebar_id)?;
            require("sidebar.open_class", &sidebar.open_class)?;
            require("sidebar.active_class", &sidebar.active_class)?;
            for (i, submenu) in sidebar.submenus.iter().enumerate() {
                require(&format!("sidebar.submenus[{i}].toggle_id"), &submenu.toggle_id)?;
                require(&format!("sidebar.submenus[{i}].menu_id"), &submenu.menu_id)?;
            }
        }
        if let Some(filter) = &self.filter {
            require("filter.radio_name", &filter.radio_name)?;
            require("filter.row_selector", &filter.row_selector)?;
            require("filter.proof_attribute", &filter.proof_attribute)?;
            require("filter.stats_id", &filter.stats_id)?;
            require("filter.hidden_class", &filter.hidden_class)?;
        }
        require("theme.toggle_id", &self.theme.toggle_id)?;
        require("theme.storage_key", &self.theme.storage_key)?;
        require("theme.attribute", &self.theme.attribute)?;
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), PageError> {
    if value.trim().is_empty() {
        return Err(PageError::InvalidConfig(format!("{field} must not be empty")));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Button that opens and closes the drawer.
    pub menu_toggle_id: String,
    /// The drawer itself.
    pub sidebar_id: String,
    /// Class present on the drawer while it is open.
    pub open_class: String,
    /// Class present on a submenu trigger while its section is active.
    pub active_class: String,
    /// Expandable sections, in markup order.
    pub submenus: Vec<SubmenuConfig>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            menu_toggle_id: "menuToggle".into(),
            sidebar_id: "sidebar".into(),
            open_class: "open".into(),
            active_class: "active".into(),
            submenus: vec![
                SubmenuConfig::new("coursesToggle", "coursesMenu"),
                SubmenuConfig::new("eventsToggle", "eventsMenu"),
                SubmenuConfig::new("calculatorsToggle", "calculatorsMenu"),
            ],
        }
    }
}

/// A submenu trigger and the section it expands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmenuConfig {
    pub toggle_id: String,
    pub menu_id: String,
}

impl SubmenuConfig {
    pub fn new(toggle_id: impl Into<String>, menu_id: impl Into<String>) -> Self {
        Self { toggle_id: toggle_id.into(), menu_id: menu_id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// `name` shared by the filter radio inputs.
    pub radio_name: String,
    /// Rows subject to filtering.
    pub row_selector: String,
    /// Row attribute holding the proof type.
    pub proof_attribute: String,
    /// Element receiving the summary line.
    pub stats_id: String,
    /// Class that hides a filtered-out row.
    pub hidden_class: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            radio_name: "proofFilter".into(),
            row_selector: "tbody tr[data-proof]".into(),
            proof_attribute: "data-proof".into(),
            stats_id: "stats".into(),
            hidden_class: "hidden".into(),
        }
    }
}

impl FilterConfig {
    /// Selector matching every radio in the filter group.
    pub fn radio_selector(&self) -> String {
        format!("input[name=\"{}\"]", self.radio_name)
    }

    /// Selector matching the currently checked radio.
    pub fn checked_selector(&self) -> String {
        format!("input[name=\"{}\"]:checked", self.radio_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Attribute set on both `<html>` and `<body>`.
    pub attribute: String,
    /// Debounce before binding the toggle after `DOMContentLoaded`.
    pub init_delay_ms: u32,
    /// Delay before re-checking the toggle when the tab becomes visible.
    pub visibility_delay_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "themeToggle".into(),
            storage_key: DEFAULT_THEME_STORAGE_KEY.into(),
            attribute: DEFAULT_THEME_ATTRIBUTE.into(),
            init_delay_ms: DEFAULT_THEME_INIT_DELAY_MS,
            visibility_delay_ms: DEFAULT_THEME_VISIBILITY_DELAY_MS,
        }
    }
}
