//! I/O boundary traits for testability
//!
//! The id generator is the only external collaborator of the form; services
//! take it as a trait object so tests can mint predictable ids.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::LineItemId;

/// Mints identifiers for new line items.
pub trait IdGenerator: Send + Sync {
    /// Return a new identifier. Uniqueness against existing items is checked by the caller.
    fn next_id(&self) -> LineItemId;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Random UUID v4 ids.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> LineItemId {
        LineItemId::new(Uuid::new_v4().to_string())
    }
}

/// Counting ids: "1", "2", ...
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> LineItemId {
        LineItemId::new(self.next.fetch_add(1, Ordering::Relaxed).to_string())
    }
}
