//! Light/dark theme state and its persistence seam.
//!
//! `ThemeState` is the single owner of the active theme. It reads the
//! persisted value once when created and writes through its `ThemeStore` on
//! every toggle; nothing else holds theme state.

use std::fmt;
use std::str::FromStr;

use crate::error::PageError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Default when nothing is persisted.
    #[default]
    Light,
    /// Persisted as `"dark"`.
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme for a persisted value. Unset or unrecognized values are `Light`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }

    /// Toggle button text: the icon of the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1F319}",
            Self::Dark => "\u{2600}\u{FE0F}",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PageError::UnknownTheme(other.to_string())),
        }
    }
}

/// Where the theme string is persisted between page loads.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str) -> Result<(), PageError>;
}

impl<S: ThemeStore + ?Sized> ThemeStore for Box<S> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&mut self, value: &str) -> Result<(), PageError> {
        (**self).save(value)
    }
}

/// Non-persistent store; used when `localStorage` is unavailable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    #[cfg(test)]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self { value: Some(value.into()) }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) -> Result<(), PageError> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

#[derive(Debug)]
pub struct ThemeState<S> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeState<S> {
    /// Read the persisted theme, defaulting to `Light`.
    pub fn load(store: S) -> Self {
        let current = Theme::from_stored(store.load().as_deref());
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip the theme and persist it.
    ///
    /// The in-memory theme flips even when persisting fails, so the page
    /// still responds; the error is returned for the caller to report.
    pub fn toggle(&mut self) -> Result<Theme, PageError> {
        self.set(self.current.toggled())
    }

    pub fn set(&mut self, theme: Theme) -> Result<Theme, PageError> {
        self.current = theme;
        self.store.save(theme.as_str())?;
        Ok(theme)
    }

    /// Re-read the store, e.g. after another tab changed the theme.
    /// Returns `true` if the active theme changed.
    pub fn reload(&mut self) -> bool {
        let stored = Theme::from_stored(self.store.load().as_deref());
        std::mem::replace(&mut self.current, stored) != stored
    }
}

/// What to do with the toggle button when a bind is attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindDecision {
    /// No toggle on the page.
    Missing,
    /// The bound element is still the one on the page.
    Keep,
    /// Nothing bound yet, or the markup replaced the button.
    Bind,
}

impl BindDecision {
    /// `bound_is_found` is `None` when nothing is bound, otherwise whether
    /// the bound element is the same node as the one just looked up.
    pub fn for_toggle(found: bool, bound_is_found: Option<bool>) -> Self {
        match (found, bound_is_found) {
            (false, _) => Self::Missing,
            (true, Some(true)) => Self::Keep,
            (true, _) => Self::Bind,
        }
    }
}

/// Tickets for delayed binds. Only the most recent ticket may fire, so a
/// newly scheduled bind supersedes any pending one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BindSchedule {
    latest: u64,
    pending: bool,
}

impl BindSchedule {
    /// Schedule a bind and return its ticket.
    pub fn schedule(&mut self) -> u64 {
        self.latest += 1;
        self.pending = true;
        self.latest
    }

    /// Drop whatever is pending.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume `ticket`. `true` only for the latest, uncancelled ticket.
    pub fn fire(&mut self, ticket: u64) -> bool {
        if !self.pending || ticket != self.latest {
            return false;
        }
        self.pending = false;
        true
    }
}
