//! Navigation drawer and submenu open/closed state.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// `KeyboardEvent.key` value that dismisses the drawer.
pub const ESCAPE_KEY: &str = "Escape";

/// Per-submenu flags. `active` drives the trigger's highlight class and
/// `expanded` the section's visibility; each flips on every trigger click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmenuState {
    /// Trigger carries the active class.
    pub active: bool,
    /// Section is shown (`display: block`).
    pub expanded: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
    submenus: Vec<SubmenuState>,
}

impl SidebarState {
    /// Restore state observed in existing markup.
    pub fn from_parts(open: bool, submenus: Vec<SubmenuState>) -> Self {
        Self { open, submenus }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub fn submenu(&self, index: usize) -> Option<SubmenuState> {
        self.submenus.get(index).copied()
    }

    /// Flip the drawer. Returns the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the drawer. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Document-level click. Closes the drawer when the click landed outside
    /// both the drawer and its trigger. Returns `true` if the drawer closed.
    pub fn handle_outside_click(&mut self, inside_sidebar: bool, on_toggle: bool) -> bool {
        if inside_sidebar || on_toggle {
            return false;
        }
        self.close()
    }

    /// Document-level keydown. Returns `true` if the drawer closed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key != ESCAPE_KEY {
            return false;
        }
        self.close()
    }

    /// Flip one submenu. `None` when `index` is out of range.
    pub fn toggle_submenu(&mut self, index: usize) -> Option<SubmenuState> {
        let submenu = self.submenus.get_mut(index)?;
        submenu.active = !submenu.active;
        submenu.expanded = !submenu.expanded;
        Some(*submenu)
    }
}
