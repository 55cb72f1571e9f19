//! Navigation drawer binding.
//!
//! The drawer's open flag is mirrored to a class on the sidebar element;
//! each submenu mirrors `active` to a class on its trigger and `expanded` to
//! the section's inline `display`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Node};

use super::{element_by_id, html_element_by_id, set_class};
use crate::config::SidebarConfig;
use crate::error::PageError;
use crate::state::sidebar::{SidebarState, SubmenuState};

struct Submenu {
    toggle: Element,
    menu: HtmlElement,
}

/// Bound sidebar. Dropping it detaches every listener.
pub struct SidebarController {
    state: Rc<RefCell<SidebarState>>,
    _listeners: Vec<EventListener>,
}

impl SidebarController {
    pub fn bind(document: &Document, config: &SidebarConfig) -> Result<Self, PageError> {
        let menu_toggle = element_by_id(document, &config.menu_toggle_id)?;
        let sidebar = element_by_id(document, &config.sidebar_id)?;
        let submenus = config
            .submenus
            .iter()
            .map(|sub| {
                Ok(Submenu {
                    toggle: element_by_id(document, &sub.toggle_id)?,
                    menu: html_element_by_id(document, &sub.menu_id)?,
                })
            })
            .collect::<Result<Vec<_>, PageError>>()?;

        let observed = submenus
            .iter()
            .map(|sub| SubmenuState {
                active: sub.toggle.class_list().contains(&config.active_class),
                expanded: is_displayed(&sub.menu),
            })
            .collect();
        let state = Rc::new(RefCell::new(SidebarState::from_parts(
            sidebar.class_list().contains(&config.open_class),
            observed,
        )));

        let mut listeners = Vec::with_capacity(submenus.len() + 3);

        listeners.push({
            let state = Rc::clone(&state);
            let sidebar = sidebar.clone();
            let open_class = config.open_class.clone();
            EventListener::new(&menu_toggle, "click", move |event| {
                // Keep the document handler from treating this as an outside click.
                event.stop_propagation();
                let open = state.borrow_mut().toggle();
                set_class(&sidebar, &open_class, open);
            })
        });

        listeners.push({
            let state = Rc::clone(&state);
            let sidebar = sidebar.clone();
            let menu_toggle = menu_toggle.clone();
            let open_class = config.open_class.clone();
            EventListener::new(document, "click", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside_sidebar = sidebar.contains(target.as_ref());
                let on_toggle = menu_toggle.contains(target.as_ref());
                if state.borrow_mut().handle_outside_click(inside_sidebar, on_toggle) {
                    set_class(&sidebar, &open_class, false);
                }
            })
        });

        listeners.push({
            let state = Rc::clone(&state);
            let sidebar = sidebar.clone();
            let open_class = config.open_class.clone();
            EventListener::new(document, "keydown", move |event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if state.borrow_mut().handle_key(&key_event.key()) {
                    set_class(&sidebar, &open_class, false);
                }
            })
        });

        for (index, submenu) in submenus.into_iter().enumerate() {
            let state = Rc::clone(&state);
            let active_class = config.active_class.clone();
            let target = submenu.toggle.clone();
            listeners.push(EventListener::new(&target, "click", move |_event| {
                let Some(flags) = state.borrow_mut().toggle_submenu(index) else {
                    return;
                };
                set_class(&submenu.toggle, &active_class, flags.active);
                set_display(&submenu.menu, flags.expanded);
            }));
        }

        log::debug!("sidebar bound with {} submenus", config.submenus.len());
        Ok(Self { state, _listeners: listeners })
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }
}

fn is_displayed(menu: &HtmlElement) -> bool {
    menu.style().get_property_value("display").is_ok_and(|value| value == "block")
}

fn set_display(menu: &HtmlElement, expanded: bool) {
    let value = if expanded { "block" } else { "none" };
    if let Err(err) = menu.style().set_property("display", value) {
        log::warn!("could not set submenu display: {}", PageError::from(err));
    }
}
