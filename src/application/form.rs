//! Form view model
//!
//! A pure function of `(line items, adjustment)`: every render builds a new
//! [`FormView`] and derives the figures again. Nothing here holds state.

use serde::{Deserialize, Serialize};

use crate::domain::currency::{format_man, format_man_value};
use crate::domain::figures::partner_percent;
use crate::domain::{format_yen, Adjustment, Figures, LineItemId, LineItems};

/// Placeholder shown in an empty amount field.
pub const AMOUNT_PLACEHOLDER: &str = "e.g. 100";

/// User-facing names on the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Labels {
    /// Form heading
    pub title: String,
    /// Who receives the percentage plus the flat adjustment
    pub partner: String,
    /// Who receives the remainder
    pub payee: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Calculator".into(),
            partner: "Partner".into(),
            payee: "Payee".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub title: String,
    pub rows: Vec<RowView>,
    pub adjustment: AdjustmentView,
    pub results: ResultsView,
}

/// One line item input row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// 1-based display position
    pub position: usize,
    pub id: LineItemId,
    /// Field text; empty when the amount is 0
    pub input: String,
    pub placeholder: &'static str,
    /// Delete affordance, hidden while only one row exists
    pub deletable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentView {
    pub label: String,
    pub value: f64,
    /// Numeric field text
    pub input: String,
    /// Typed value lies outside what the slider can show
    pub beyond_slider: bool,
    pub slider: SliderView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderView {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Thumb position, the value clamped into `[min, max]`
    pub position: f64,
}

impl SliderView {
    /// Number of discrete thumb positions.
    pub fn stops(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    /// Index of the stop nearest to `position`.
    pub fn stop_index(&self) -> usize {
        ((self.position - self.min) / self.step).round() as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub figures: Figures,
    pub tax_included_label: String,
    pub tax_included: String,
    pub raw_total_label: String,
    pub raw_total: String,
    pub partner_label: String,
    pub partner_share: String,
    pub remainder_label: String,
    pub remainder: String,
}

impl FormView {
    pub fn render(items: &LineItems, adjustment: Adjustment, labels: &Labels) -> Self {
        let deletable = items.can_remove();
        let rows = items
            .iter()
            .enumerate()
            .map(|(idx, item)| RowView {
                position: idx + 1,
                id: item.id.clone(),
                input: amount_input(item.amount),
                placeholder: AMOUNT_PLACEHOLDER,
                deletable,
            })
            .collect();

        let figures = Figures::derive(items, adjustment);

        Self {
            title: labels.title.clone(),
            rows,
            adjustment: AdjustmentView {
                label: format!("{} share", labels.partner),
                value: adjustment.value(),
                input: format_man_value(adjustment.value()),
                beyond_slider: !adjustment.is_within_slider(),
                slider: SliderView {
                    min: Adjustment::SLIDER_MIN,
                    max: Adjustment::SLIDER_MAX,
                    step: Adjustment::SLIDER_STEP,
                    position: adjustment.slider_position(),
                },
            },
            results: ResultsView {
                figures,
                tax_included_label: "Total incl. tax".into(),
                tax_included: format_yen(figures.tax_included),
                raw_total_label: "excl. tax".into(),
                raw_total: format_yen(figures.raw_total),
                partner_label: format!(
                    "{} share ({}% + {})",
                    labels.partner,
                    partner_percent(),
                    format_man(adjustment.value())
                ),
                partner_share: format_yen(figures.partner_share),
                remainder_label: format!("Transfer to {}", labels.payee),
                remainder: format_yen(figures.remainder),
            },
        }
    }
}

fn amount_input(amount: f64) -> String {
    if amount == 0.0 {
        String::new()
    } else {
        format_man_value(amount)
    }
}
