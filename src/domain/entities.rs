//! Domain entities: line items and the adjustment parameter
//!
//! All amounts are man-units (10,000 yen) until the derivation step converts them.

use std::fmt;

/// Yen per man-unit.
pub const MAN_UNIT: f64 = 10_000.0;

/// Opaque identifier of a line item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineItemId(String);

impl LineItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One revenue entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: LineItemId,
    /// Pre-tax amount in man-units
    pub amount: f64,
}

/// Ordered line items, never empty.
///
/// Order is insertion order. Ids are unique; callers mint them and
/// [`LineItems::push`] refuses duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItems {
    items: Vec<LineItem>,
}

impl LineItems {
    /// Create the collection with its first item at amount 0.
    pub fn new(first: LineItemId) -> Self {
        Self {
            items: vec![LineItem {
                id: first,
                amount: 0.0,
            }],
        }
    }

    /// Append a zero-amount item. Returns false if the id is already taken.
    pub fn push(&mut self, id: LineItemId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.items.push(LineItem { id, amount: 0.0 });
        true
    }

    /// Remove the item with `id` unless it is the last one.
    pub fn remove(&mut self, id: &LineItemId) -> bool {
        if self.items.len() <= 1 {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Replace the amount of the item with `id`. Non-finite amounts become 0.
    pub fn update(&mut self, id: &LineItemId, amount: f64) -> bool {
        let amount = finite_or_zero(amount);
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.amount = amount;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &LineItemId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    pub fn get(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Item at 1-based display position.
    pub fn at_position(&self, position: usize) -> Option<&LineItem> {
        position.checked_sub(1).and_then(|idx| self.items.get(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false, the first item can never be removed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a delete would take effect.
    pub fn can_remove(&self) -> bool {
        self.items.len() > 1
    }
}

/// The flat part of the partner's share, in man-units.
///
/// The slider and the numeric field are two views of this one value:
/// the slider clamps and snaps, the field takes whatever parses.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Adjustment(f64);

impl Adjustment {
    pub const SLIDER_MIN: f64 = 0.0;
    pub const SLIDER_MAX: f64 = 10.0;
    pub const SLIDER_STEP: f64 = 0.5;

    /// Value as typed into the numeric field: unclamped, non-finite becomes 0.
    pub fn from_input(value: f64) -> Self {
        Self(finite_or_zero(value))
    }

    /// Value as set by the slider: clamped to the range, snapped to the step.
    pub fn from_slider(value: f64) -> Self {
        let value = finite_or_zero(value).clamp(Self::SLIDER_MIN, Self::SLIDER_MAX);
        let steps = ((value - Self::SLIDER_MIN) / Self::SLIDER_STEP).round();
        Self((Self::SLIDER_MIN + steps * Self::SLIDER_STEP).min(Self::SLIDER_MAX))
    }

    /// Man-units.
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn in_yen(self) -> f64 {
        self.0 * MAN_UNIT
    }

    /// Where the slider thumb sits for this value.
    pub fn slider_position(self) -> f64 {
        self.0.clamp(Self::SLIDER_MIN, Self::SLIDER_MAX)
    }

    pub fn is_within_slider(self) -> bool {
        (Self::SLIDER_MIN..=Self::SLIDER_MAX).contains(&self.0)
    }
}

/// Parse free-form numeric text the way a number input does.
///
/// Empty, unparsable and non-finite text all yield 0.
pub fn coerce_amount(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> LineItemId {
        LineItemId::new(s)
    }

    #[test]
    fn given_new_collection_when_created_then_holds_single_zero_item() {
        let items = LineItems::new(id("1"));
        assert_eq!(items.len(), 1);
        assert_eq!(items.get(&id("1")).map(|i| i.amount), Some(0.0));
        assert!(!items.can_remove());
    }

    #[test]
    fn given_duplicate_id_when_push_then_rejected() {
        let mut items = LineItems::new(id("1"));
        assert!(!items.push(id("1")));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn given_unknown_id_when_update_then_nothing_changes() {
        let mut items = LineItems::new(id("1"));
        assert!(!items.update(&id("nope"), 3.0));
        assert_eq!(items.get(&id("1")).map(|i| i.amount), Some(0.0));
    }

    #[test]
    fn given_nan_when_update_then_amount_is_zero() {
        let mut items = LineItems::new(id("1"));
        items.update(&id("1"), 7.0);
        items.update(&id("1"), f64::NAN);
        assert_eq!(items.get(&id("1")).map(|i| i.amount), Some(0.0));
    }

    #[test]
    fn given_positions_when_lookup_then_one_based() {
        let mut items = LineItems::new(id("a"));
        items.push(id("b"));
        assert_eq!(items.at_position(0), None);
        assert_eq!(items.at_position(2).map(|i| i.id.as_str()), Some("b"));
        assert_eq!(items.at_position(3), None);
    }

    #[test]
    fn test_slider_snaps_to_half_steps() {
        assert_eq!(Adjustment::from_slider(3.26).value(), 3.5);
        assert_eq!(Adjustment::from_slider(3.24).value(), 3.0);
        assert_eq!(Adjustment::from_slider(-4.0).value(), 0.0);
        assert_eq!(Adjustment::from_slider(42.0).value(), 10.0);
    }

    #[test]
    fn test_input_is_not_clamped() {
        let adj = Adjustment::from_input(25.0);
        assert_eq!(adj.value(), 25.0);
        assert_eq!(adj.slider_position(), 10.0);
        assert!(!adj.is_within_slider());
        assert_eq!(Adjustment::from_input(f64::INFINITY).value(), 0.0);
    }
}
