//! Page entrypoint: boots the controllers and hands JS an owning handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller starts immediately so the stored theme is applied
//! before first paint. The sidebar and filter need the page markup, so they
//! bind once the document has left the `loading` state. A controller that
//! fails to bind is logged and skipped; the others keep working.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::PageConfig;
use crate::dom::filter::FilterController;
use crate::dom::sidebar::SidebarController;
use crate::dom::theme::ThemeController;
use crate::dom::{self, is_ready};
use crate::error::PageError;

#[derive(Default)]
struct Widgets {
    sidebar: Option<SidebarController>,
    filter: Option<FilterController>,
}

/// All controllers for one page. Dropping it removes every listener.
pub struct Page {
    theme: ThemeController,
    widgets: Rc<RefCell<Widgets>>,
    _ready: Option<EventListener>,
}

impl Page {
    pub fn boot(config: PageConfig) -> Result<Self, PageError> {
        config.validate()?;
        let document = dom::document()?;
        let theme = ThemeController::init(config.theme.clone())?;
        let widgets = Rc::new(RefCell::new(Widgets::default()));

        let ready = if is_ready(&document) {
            bind_widgets(&document, &config, &widgets);
            None
        } else {
            let widgets = Rc::clone(&widgets);
            let target = document.clone();
            Some(EventListener::once(&target, "DOMContentLoaded", move |_event| {
                bind_widgets(&document, &config, &widgets);
            }))
        };

        Ok(Self { theme, widgets, _ready: ready })
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn sidebar_open(&self) -> Option<bool> {
        self.widgets.borrow().sidebar.as_ref().map(SidebarController::is_open)
    }

    pub fn refresh_filter(&self) -> Option<String> {
        self.widgets.borrow().filter.as_ref().map(|filter| filter.refresh().to_string())
    }
}

fn bind_widgets(document: &Document, config: &PageConfig, widgets: &RefCell<Widgets>) {
    let mut widgets = widgets.borrow_mut();
    if let Some(sidebar) = &config.sidebar {
        match SidebarController::bind(document, sidebar) {
            Ok(controller) => widgets.sidebar = Some(controller),
            Err(err) => log::error!("sidebar not bound: {err}"),
        }
    }
    if let Some(filter) = &config.filter {
        match FilterController::bind(document, filter) {
            Ok(controller) => widgets.filter = Some(controller),
            Err(err) => log::error!("record filter not bound: {err}"),
        }
    }
}

/// JS-facing owner of a booted page.
#[wasm_bindgen]
pub struct PageHandle {
    page: Option<Page>,
}

#[wasm_bindgen]
impl PageHandle {
    /// Force the theme toggle to bind again, e.g. after the page swapped
    /// its header markup.
    #[wasm_bindgen(js_name = reinitializeThemeToggle)]
    pub fn reinitialize_theme_toggle(&self) {
        if let Some(page) = &self.page {
            page.theme().reinitialize();
        }
    }

    /// Active theme name, or `undefined` after `dispose`.
    pub fn theme(&self) -> Option<String> {
        self.page.as_ref().map(|page| page.theme().theme().as_str().to_string())
    }

    #[wasm_bindgen(js_name = sidebarOpen)]
    pub fn sidebar_open(&self) -> Option<bool> {
        self.page.as_ref().and_then(Page::sidebar_open)
    }

    /// Re-run the record filter and return the summary line.
    #[wasm_bindgen(js_name = refreshFilter)]
    pub fn refresh_filter(&self) -> Option<String> {
        self.page.as_ref().and_then(Page::refresh_filter)
    }

    /// Detach every listener and cancel pending timers.
    pub fn dispose(&mut self) {
        if self.page.take().is_some() {
            log::info!("page controllers disposed");
        }
    }
}

/// Boot the page controllers. `config_json` is an optional, possibly
/// partial, `PageConfig` in JSON form.
#[wasm_bindgen]
pub fn boot(config_json: Option<String>) -> Result<PageHandle, JsValue> {
    let config = match config_json.as_deref() {
        Some(raw) => PageConfig::from_json(raw)?,
        None => PageConfig::default(),
    };
    let page = Page::boot(config)?;
    Ok(PageHandle { page: Some(page) })
}
