//! Calculator session service
//!
//! Owns the two pieces of form state and applies user events to them one at a time.

use std::sync::Arc;

use tracing::debug;

use crate::application::form::{FormView, Labels};
use crate::domain::{coerce_amount, Adjustment, Figures, LineItemId, LineItems};
use crate::infrastructure::traits::IdGenerator;

/// A single user interaction with the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// "add" pressed
    AddItem,
    /// Delete pressed on a row
    RemoveItem(LineItemId),
    /// Text typed into a row's amount field
    EditItem { id: LineItemId, text: String },
    /// Slider dragged to a value
    SlideAdjustment(f64),
    /// Text typed into the adjustment's numeric field
    EditAdjustment(String),
}

/// Service holding line items and the adjustment for one session.
pub struct CalculatorService {
    ids: Arc<dyn IdGenerator>,
    items: LineItems,
    adjustment: Adjustment,
}

impl CalculatorService {
    /// Create a session with one empty line item.
    pub fn new(ids: Arc<dyn IdGenerator>, initial_adjustment: Adjustment) -> Self {
        let items = LineItems::new(ids.next_id());
        Self {
            ids,
            items,
            adjustment: initial_adjustment,
        }
    }

    pub fn items(&self) -> &LineItems {
        &self.items
    }

    pub fn adjustment(&self) -> Adjustment {
        self.adjustment
    }

    /// Append a zero-amount item with a fresh id.
    pub fn add(&mut self) -> LineItemId {
        let id = loop {
            let candidate = self.ids.next_id();
            if !self.items.contains(&candidate) {
                break candidate;
            }
            debug!("add: generator repeated id {}, retrying", candidate);
        };
        self.items.push(id.clone());
        debug!("add: id={} count={}", id, self.items.len());
        id
    }

    /// Remove an item; no-op for the last remaining item or an unknown id.
    pub fn remove(&mut self, id: &LineItemId) -> bool {
        let removed = self.items.remove(id);
        if removed {
            debug!("remove: id={} count={}", id, self.items.len());
        } else {
            debug!("remove: ignored id={} count={}", id, self.items.len());
        }
        removed
    }

    /// Set an item's amount in man-units; non-finite becomes 0.
    pub fn update(&mut self, id: &LineItemId, amount: f64) -> bool {
        let updated = self.items.update(id, amount);
        debug!("update: id={} amount={} applied={}", id, amount, updated);
        updated
    }

    /// Set an item's amount from field text.
    pub fn update_text(&mut self, id: &LineItemId, text: &str) -> bool {
        self.update(id, coerce_amount(text))
    }

    /// Move the slider; the value is clamped and snapped.
    pub fn slide_adjustment(&mut self, value: f64) {
        self.adjustment = Adjustment::from_slider(value);
        debug!("slide: requested={} value={}", value, self.adjustment.value());
    }

    /// Type into the adjustment field; the value is not clamped.
    pub fn edit_adjustment(&mut self, text: &str) {
        self.adjustment = Adjustment::from_input(coerce_amount(text));
        debug!("edit adjustment: text={:?} value={}", text, self.adjustment.value());
    }

    /// Apply one event. Returns whether the state may have changed.
    pub fn apply(&mut self, event: FormEvent) -> bool {
        match event {
            FormEvent::AddItem => {
                self.add();
                true
            }
            FormEvent::RemoveItem(id) => self.remove(&id),
            FormEvent::EditItem { id, text } => self.update_text(&id, &text),
            FormEvent::SlideAdjustment(value) => {
                self.slide_adjustment(value);
                true
            }
            FormEvent::EditAdjustment(text) => {
                self.edit_adjustment(&text);
                true
            }
        }
    }

    /// Derive the figures from the current state.
    pub fn figures(&self) -> Figures {
        Figures::derive(&self.items, self.adjustment)
    }

    /// Build the view of the current state.
    pub fn view(&self, labels: &Labels) -> FormView {
        FormView::render(&self.items, self.adjustment, labels)
    }
}
