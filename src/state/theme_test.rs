use std::cell::RefCell;
use std::rc::Rc;

use super::*;

/// Store backed by a value shared with other handles, like `localStorage`
/// seen from two tabs.
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<Option<String>>>);

impl ThemeStore for SharedStore {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&mut self, value: &str) -> Result<(), PageError> {
        *self.0.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

struct FailingStore;

impl ThemeStore for FailingStore {
    fn load(&self) -> Option<String> {
        Some("dark".into())
    }

    fn save(&mut self, _value: &str) -> Result<(), PageError> {
        Err(PageError::StorageUnavailable)
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_round_trips_through_str() {
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn unknown_theme_string_is_an_error() {
    let err = "Dark".parse::<Theme>().unwrap_err();
    assert!(matches!(err, PageError::UnknownTheme(v) if v == "Dark"));
}

#[test]
fn from_stored_defaults_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn toggled_flips_between_variants() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggle_button_describes_the_next_theme() {
    assert_eq!(Theme::Dark.toggle_icon(), "☀️");
    assert_eq!(Theme::Light.toggle_icon(), "🌙");
    assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn load_reads_persisted_value() {
    let state = ThemeState::load(MemoryThemeStore::with_value("dark"));
    assert_eq!(state.current(), Theme::Dark);
}

#[test]
fn load_without_value_is_light() {
    let state = ThemeState::load(MemoryThemeStore::default());
    assert_eq!(state.current(), Theme::Light);
}

#[test]
fn toggle_persists_new_value() {
    let mut state = ThemeState::load(MemoryThemeStore::default());
    assert_eq!(state.toggle().unwrap(), Theme::Dark);
    assert_eq!(state.store().load().as_deref(), Some("dark"));
}

#[test]
fn double_toggle_restores_persisted_value() {
    for initial in ["light", "dark"] {
        let mut state = ThemeState::load(MemoryThemeStore::with_value(initial));
        state.toggle().unwrap();
        state.toggle().unwrap();
        assert_eq!(state.current().as_str(), initial);
        assert_eq!(state.store().load().as_deref(), Some(initial));
    }
}

#[test]
fn toggle_after_unknown_value_writes_dark() {
    let mut state = ThemeState::load(MemoryThemeStore::with_value("sepia"));
    assert_eq!(state.current(), Theme::Light);
    state.toggle().unwrap();
    assert_eq!(state.store().load().as_deref(), Some("dark"));
}

#[test]
fn failed_save_still_flips_theme() {
    let mut state = ThemeState::load(FailingStore);
    assert_eq!(state.current(), Theme::Dark);
    assert!(matches!(state.toggle(), Err(PageError::StorageUnavailable)));
    assert_eq!(state.current(), Theme::Light);
}

#[test]
fn boxed_store_delegates() {
    let store: Box<dyn ThemeStore> = Box::new(MemoryThemeStore::with_value("dark"));
    let mut state = ThemeState::load(store);
    assert_eq!(state.current(), Theme::Dark);
    state.set(Theme::Light).unwrap();
    assert_eq!(state.store().load().as_deref(), Some("light"));
}

// =============================================================
// Reload
// =============================================================

#[test]
fn reload_picks_up_theme_written_elsewhere() {
    let shared = SharedStore::default();
    *shared.0.borrow_mut() = Some("light".into());
    let mut this_tab = ThemeState::load(shared.clone());
    let mut other_tab = ThemeState::load(shared);

    other_tab.toggle().unwrap();
    assert_eq!(this_tab.current(), Theme::Light);

    assert!(this_tab.reload());
    assert_eq!(this_tab.current(), Theme::Dark);
}

#[test]
fn reload_without_change_reports_false() {
    let mut state = ThemeState::load(MemoryThemeStore::with_value("dark"));
    assert!(!state.reload());
    assert_eq!(state.current(), Theme::Dark);
}

#[test]
fn reload_after_key_cleared_falls_back_to_light() {
    let shared = SharedStore::default();
    *shared.0.borrow_mut() = Some("dark".into());
    let mut state = ThemeState::load(shared.clone());
    shared.0.borrow_mut().take();
    assert!(state.reload());
    assert_eq!(state.current(), Theme::Light);
}

// =============================================================
// BindDecision
// =============================================================

#[test]
fn bind_when_nothing_bound() {
    assert_eq!(BindDecision::for_toggle(true, None), BindDecision::Bind);
}

#[test]
fn keep_when_bound_element_is_still_on_page() {
    assert_eq!(BindDecision::for_toggle(true, Some(true)), BindDecision::Keep);
}

#[test]
fn rebind_when_button_was_replaced() {
    assert_eq!(BindDecision::for_toggle(true, Some(false)), BindDecision::Bind);
}

#[test]
fn missing_toggle_wins_over_existing_binding() {
    assert_eq!(BindDecision::for_toggle(false, None), BindDecision::Missing);
    assert_eq!(BindDecision::for_toggle(false, Some(false)), BindDecision::Missing);
}

// =============================================================
// BindSchedule
// =============================================================

#[test]
fn scheduled_bind_fires_once() {
    let mut schedule = BindSchedule::default();
    let ticket = schedule.schedule();
    assert!(schedule.is_pending());
    assert!(schedule.fire(ticket));
    assert!(!schedule.fire(ticket));
    assert!(!schedule.is_pending());
}

#[test]
fn new_schedule_supersedes_pending_bind() {
    let mut schedule = BindSchedule::default();
    let first = schedule.schedule();
    let second = schedule.schedule();
    assert!(!schedule.fire(first));
    assert!(schedule.fire(second));
}

#[test]
fn cancelled_bind_never_fires() {
    let mut schedule = BindSchedule::default();
    let ticket = schedule.schedule();
    schedule.cancel();
    assert!(!schedule.is_pending());
    assert!(!schedule.fire(ticket));
}
