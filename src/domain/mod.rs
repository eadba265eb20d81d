//! Domain layer: entities and the derivation engine
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod currency;
pub mod entities;
pub mod figures;

pub use currency::{format_man, format_yen};
pub use entities::{coerce_amount, Adjustment, LineItem, LineItemId, LineItems, MAN_UNIT};
pub use figures::{Figures, PARTNER_RATE, TAX_RATE};
