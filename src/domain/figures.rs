//! Derivation engine: line items + adjustment -> four yen figures

use serde::Serialize;

use crate::domain::entities::{Adjustment, LineItems, MAN_UNIT};

/// Consumption tax rate applied to the pre-tax total.
pub const TAX_RATE: f64 = 0.10;

/// Partner's percentage of the pre-tax total.
pub const PARTNER_RATE: f64 = 0.05;

/// Derived figures in yen. Never stored; derive again after every change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Figures {
    /// Sum of all line items (pre-tax)
    pub raw_total: f64,
    /// `raw_total` with tax added
    pub tax_included: f64,
    /// Percentage of `raw_total` plus the flat adjustment
    pub partner_share: f64,
    /// What is left of `tax_included` after the partner's share
    pub remainder: f64,
}

impl Figures {
    pub fn derive(items: &LineItems, adjustment: Adjustment) -> Self {
        let raw_total: f64 = items.iter().map(|item| item.amount * MAN_UNIT).sum();
        let tax_included = raw_total * (1.0 + TAX_RATE);
        let partner_share = raw_total * PARTNER_RATE + adjustment.in_yen();
        Self {
            raw_total,
            tax_included,
            partner_share,
            remainder: tax_included - partner_share,
        }
    }
}

/// Partner percentage as shown in labels, e.g. `5`.
pub fn partner_percent() -> f64 {
    (PARTNER_RATE * 100.0).round()
}
