//! Application state for the PAYE Payroll Tax Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, TaxConfig};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded tax schedule configuration.
#[derive(Clone)]
pub struct AppState {
    /// The loaded tax configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the loaded tax configuration.
    pub fn tax_config(&self) -> &TaxConfig {
        self.config.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_tax_config_exposes_loaded_schedule() {
        let loader = ConfigLoader::load("./config/gh_paye").unwrap();
        let state = AppState::new(loader);

        assert_eq!(state.tax_config().brackets().len(), 7);
        assert_eq!(state.tax_config().metadata().code, "GH-PAYE-2021");
    }
}
