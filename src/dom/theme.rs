//! Theme attribute application and toggle-button binding.
//!
//! The controller owns the theme state, the toggle's click listener, and
//! any pending bind timer. The bound toggle element is tracked directly, so
//! re-entry (DOM ready, tab visible again, manual reinit) binds only when the
//! button changed or nothing is bound yet. Tab re-entry and manual reinit
//! also re-read the stored theme, so a change made in another tab shows up.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, Node, Storage};

use super::{document, is_ready, window};
use crate::config::ThemeConfig;
use crate::error::PageError;
use crate::state::theme::{
    BindDecision, BindSchedule, MemoryThemeStore, Theme, ThemeState, ThemeStore,
};

/// `ThemeStore` backed by `window.localStorage`.
pub struct LocalThemeStore {
    storage: Storage,
    key: String,
}

impl LocalThemeStore {
    pub fn open(key: &str) -> Result<Self, PageError> {
        let storage = window()?.local_storage().ok().flatten().ok_or(PageError::StorageUnavailable)?;
        Ok(Self { storage, key: key.to_string() })
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        self.storage.get_item(&self.key).ok().flatten()
    }

    fn save(&mut self, value: &str) -> Result<(), PageError> {
        self.storage.set_item(&self.key, value)?;
        Ok(())
    }
}

/// Local storage when available, otherwise an in-memory fallback.
pub fn open_store(key: &str) -> Box<dyn ThemeStore> {
    match LocalThemeStore::open(key) {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("{err}; theme changes will not persist");
            Box::new(MemoryThemeStore::default())
        }
    }
}

/// Set `attribute` on `<html>` and, once it exists, `<body>`.
pub fn apply_theme(document: &Document, attribute: &str, theme: Theme) -> Result<(), PageError> {
    if let Some(root) = document.document_element() {
        root.set_attribute(attribute, theme.as_str())?;
    }
    if let Some(body) = document.body() {
        body.set_attribute(attribute, theme.as_str())?;
    }
    Ok(())
}

/// Apply the persisted theme without binding anything.
pub fn apply_stored_theme(config: &ThemeConfig) -> Result<Theme, PageError> {
    let store = open_store(&config.storage_key);
    let theme = Theme::from_stored(store.load().as_deref());
    apply_theme(&document()?, &config.attribute, theme)?;
    Ok(theme)
}

fn render_toggle(button: &Element, theme: Theme) -> Result<(), PageError> {
    button.set_text_content(Some(theme.toggle_icon()));
    button.set_attribute("aria-label", theme.toggle_label())?;
    Ok(())
}

struct BoundToggle {
    element: Element,
    _click: EventListener,
}

struct Inner {
    config: ThemeConfig,
    document: Document,
    state: RefCell<ThemeState<Box<dyn ThemeStore>>>,
    toggle: RefCell<Option<BoundToggle>>,
    schedule: RefCell<BindSchedule>,
    pending: RefCell<Option<Timeout>>,
    ready: RefCell<Option<EventListener>>,
}

impl Inner {
    fn apply(&self, theme: Theme) {
        if let Err(err) = apply_theme(&self.document, &self.config.attribute, theme) {
            log::warn!("could not apply theme {theme}: {err}");
        }
    }

    fn render(&self, button: &Element, theme: Theme) {
        if let Err(err) = render_toggle(button, theme) {
            log::warn!("could not update theme toggle: {err}");
        }
    }

    /// Pick up a theme persisted by another tab and show it, whether or not
    /// the toggle gets rebound afterwards.
    fn resync(&self) {
        if !self.state.borrow_mut().reload() {
            return;
        }
        let theme = self.state.borrow().current();
        self.apply(theme);
        if let Some(bound) = self.toggle.borrow().as_ref() {
            self.render(&bound.element, theme);
        }
        log::info!("theme resynced from storage: {theme}");
    }

    fn bind_toggle(this: &Rc<Self>) {
        let found = this.document.get_element_by_id(&this.config.toggle_id);
        let bound_is_found = this.toggle.borrow().as_ref().map(|bound| {
            found.as_ref().is_some_and(|element| {
                let node: &Node = element;
                bound.element.is_same_node(Some(node))
            })
        });
        let element = match (BindDecision::for_toggle(found.is_some(), bound_is_found), found) {
            (BindDecision::Bind, Some(element)) => element,
            (BindDecision::Keep, _) => return,
            _ => {
                log::warn!("theme toggle button not found on this page");
                return;
            }
        };

        let theme = this.state.borrow().current();
        this.apply(theme);
        this.render(&element, theme);

        let weak = Rc::downgrade(this);
        let button = element.clone();
        let click = EventListener::new(&element, "click", move |event| {
            event.prevent_default();
            if let Some(inner) = weak.upgrade() {
                inner.on_click(&button);
            }
        });
        // Replacing a previous binding drops its listener.
        *this.toggle.borrow_mut() = Some(BoundToggle { element, _click: click });
        log::info!("theme toggle initialized with theme: {theme}");
    }

    fn on_click(&self, button: &Element) {
        let result = self.state.borrow_mut().toggle();
        let theme = self.state.borrow().current();
        if let Err(err) = result {
            log::warn!("could not persist theme {theme}: {err}");
        }
        self.apply(theme);
        self.render(button, theme);
        log::info!("theme switched to: {theme}");
    }

    /// Bind after `delay_ms`. A later schedule (or `cancel_pending`)
    /// supersedes this one.
    fn schedule_bind(this: &Rc<Self>, delay_ms: u32) {
        let ticket = this.schedule.borrow_mut().schedule();
        let weak: Weak<Self> = Rc::downgrade(this);
        let timeout = Timeout::new(delay_ms, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.schedule.borrow_mut().fire(ticket) {
                Self::bind_toggle(&inner);
            }
        });
        *this.pending.borrow_mut() = Some(timeout);
    }

    fn cancel_pending(&self) {
        self.schedule.borrow_mut().cancel();
        self.pending.borrow_mut().take();
    }
}

/// Owns the theme state and toggle binding. Dropping it detaches the
/// listeners and cancels pending timers.
pub struct ThemeController {
    inner: Rc<Inner>,
    _visibility: EventListener,
}

impl ThemeController {
    /// Apply the stored theme now and bind the toggle once the DOM is ready.
    pub fn init(config: ThemeConfig) -> Result<Self, PageError> {
        let document = document()?;
        let state = ThemeState::load(open_store(&config.storage_key));
        let inner = Rc::new(Inner {
            config,
            document: document.clone(),
            state: RefCell::new(state),
            toggle: RefCell::new(None),
            schedule: RefCell::new(BindSchedule::default()),
            pending: RefCell::new(None),
            ready: RefCell::new(None),
        });
        inner.apply(inner.state.borrow().current());

        if is_ready(&document) {
            Inner::bind_toggle(&inner);
        } else {
            let weak = Rc::downgrade(&inner);
            let listener = EventListener::once(&document, "DOMContentLoaded", move |_event| {
                if let Some(inner) = weak.upgrade() {
                    let delay = inner.config.init_delay_ms;
                    Inner::schedule_bind(&inner, delay);
                }
            });
            *inner.ready.borrow_mut() = Some(listener);
        }

        let weak = Rc::downgrade(&inner);
        let visibility = EventListener::new(&document, "visibilitychange", move |_event| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.document.hidden() {
                inner.resync();
                let delay = inner.config.visibility_delay_ms;
                Inner::schedule_bind(&inner, delay);
            }
        });

        Ok(Self { inner, _visibility: visibility })
    }

    pub fn theme(&self) -> Theme {
        self.inner.state.borrow().current()
    }

    /// Re-read the stored theme, drop the current toggle binding, and bind
    /// again.
    pub fn reinitialize(&self) {
        log::info!("reinitializing theme toggle");
        self.inner.cancel_pending();
        self.inner.resync();
        self.inner.toggle.borrow_mut().take();
        Inner::bind_toggle(&self.inner);
    }
}
