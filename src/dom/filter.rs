//! Records table filter binding.
//!
//! Rows are collected once at bind time; the filter only flips their hidden
//! class and rewrites the summary line.

use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::{element_by_id, query_all, set_class};
use crate::config::FilterConfig;
use crate::error::PageError;
use crate::state::filter::{FilterSummary, ProofFilter, ProofType, classify};

struct Table {
    document: Document,
    config: FilterConfig,
    rows: Vec<Element>,
    stats: Element,
}

impl Table {
    fn selected_filter(&self) -> ProofFilter {
        let value = self
            .document
            .query_selector(&self.config.checked_selector())
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value());
        let (filter, fallback) = ProofFilter::from_radio(value.as_deref());
        if let Some(err) = fallback {
            log::warn!("{err}; showing all records");
        }
        filter
    }

    fn refresh(&self) -> FilterSummary {
        let filter = self.selected_filter();
        let attribute = &self.config.proof_attribute;
        let proofs = self
            .rows
            .iter()
            .map(|row| ProofType::from_optional(row.get_attribute(attribute).as_deref()));
        let outcome = classify(filter, proofs);

        for (row, visible) in self.rows.iter().zip(&outcome.visibility) {
            set_class(row, &self.config.hidden_class, !visible);
        }
        self.stats.set_text_content(Some(&outcome.summary.to_string()));
        outcome.summary
    }
}

/// Bound filter. Dropping it detaches the radio listeners.
pub struct FilterController {
    table: Rc<Table>,
    _listeners: Vec<EventListener>,
}

impl FilterController {
    /// Bind the radio group and apply the default-checked filter once.
    pub fn bind(document: &Document, config: &FilterConfig) -> Result<Self, PageError> {
        let stats = element_by_id(document, &config.stats_id)?;
        let rows = query_all(document, &config.row_selector)?;
        let radios = query_all(document, &config.radio_selector())?;
        if radios.is_empty() {
            log::warn!("no radios named {:?}; filter stays on all records", config.radio_name);
        }

        let table = Rc::new(Table {
            document: document.clone(),
            config: config.clone(),
            rows,
            stats,
        });

        let listeners = radios
            .iter()
            .map(|radio| {
                let table = Rc::clone(&table);
                EventListener::new(radio, "change", move |_event| {
                    let summary = table.refresh();
                    log::debug!("{summary}");
                })
            })
            .collect();

        let summary = table.refresh();
        log::debug!("filter bound: {summary}");
        Ok(Self { table, _listeners: listeners })
    }

    /// Re-run the filter against the current radio selection.
    pub fn refresh(&self) -> FilterSummary {
        self.table.refresh()
    }
}
