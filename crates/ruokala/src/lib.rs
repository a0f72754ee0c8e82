//! Ruokala: find nearby student restaurants and their menus.
//!
//! The page geolocates the user, ranks restaurants by distance, renders a
//! filterable table plus a map, and shows each restaurant's menu in a dialog.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init from './ruokala.js';
//!
//! // Binds the page elements, asks for a position and loads the table.
//! await init();
//! ```

#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args,
    unreachable_pub
)]

pub use ruokala_core as core;

use ruokala_core::{AppConfig, ConfigError};

pub mod browser;

/// Configuration compiled into the bundle.
pub const EMBEDDED_CONFIG: &str = include_str!("../ruokala.yaml");

/// Parse the embedded configuration.
pub fn embedded_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_yaml(EMBEDDED_CONFIG)
}

#[cfg(target_arch = "wasm32")]
pub use browser::start;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = embedded_config().unwrap();
        assert_eq!(config.api.language, "fi");
        assert_eq!(config.map.container, "restaurant-map");
        assert_eq!(config.selectors.detail_dialog, "#restaurant-dialog");
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(embedded_config().unwrap(), AppConfig::default());
    }
}
