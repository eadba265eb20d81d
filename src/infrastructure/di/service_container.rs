//! Service container for dependency injection
//!
//! Wires settings and the id generator into calculator sessions.

use std::sync::Arc;

use crate::application::services::CalculatorService;
use crate::config::Settings;
use crate::domain::Adjustment;
use crate::infrastructure::traits::{IdGenerator, UuidGenerator};

/// Container holding settings and shared collaborators.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Line item id source
    pub ids: Arc<dyn IdGenerator>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(UuidGenerator))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            settings: Arc::new(settings),
            ids,
        }
    }

    /// Start a fresh calculator session at the configured default adjustment.
    pub fn calculator(&self) -> CalculatorService {
        CalculatorService::new(
            Arc::clone(&self.ids),
            Adjustment::from_input(self.settings.default_adjustment),
        )
    }
}
