//! YAML configuration for the restaurant page.
//!
//! Every section is optional; missing keys fall back to the production
//! defaults.
//!
//! ```yaml
//! api:
//!   base_url: https://media1.edu.metropolia.fi/restaurant/api/v1
//!   language: fi
//! geolocation:
//!   enable_high_accuracy: true
//!   timeout_ms: 5000
//!   maximum_age_ms: 0
//! map:
//!   zoom: 9
//! log_level: info
//! ```

use crate::error::ConfigError;
use crate::geolocation::PositionOptions;
use crate::source::Endpoints;
use serde::{Deserialize, Serialize};

/// Restaurant API location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, without the `/restaurants` path
    pub base_url: String,
    /// Menu language tag
    pub language: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://media1.edu.metropolia.fi/restaurant/api/v1".to_string(),
            language: "fi".to_string(),
        }
    }
}

/// Position request options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationConfig {
    /// Ask for the most accurate fix
    pub enable_high_accuracy: bool,
    /// Request timeout in milliseconds
    pub timeout_ms: u32,
    /// Cached-fix tolerance in milliseconds
    pub maximum_age_ms: u32,
}

impl GeolocationConfig {
    /// Options in the browser's shape.
    #[must_use]
    pub const fn options(&self) -> PositionOptions {
        PositionOptions {
            enable_high_accuracy: self.enable_high_accuracy,
            timeout: self.timeout_ms,
            maximum_age: self.maximum_age_ms,
        }
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        let options = PositionOptions::default();
        Self {
            enable_high_accuracy: options.enable_high_accuracy,
            timeout_ms: options.timeout,
            maximum_age_ms: options.maximum_age,
        }
    }
}

/// Map widget settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Id of the element the map renders into
    pub container: String,
    /// Style URL
    pub style: String,
    /// Access token; empty means "read it from the page"
    pub access_token: String,
    /// Initial centre, `[longitude, latitude]`
    pub center: [f64; 2],
    /// Initial zoom level
    pub zoom: f64,
    /// Marker colour, any CSS colour
    pub marker_color: String,
    /// Popup offset in pixels
    pub popup_offset: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container: "restaurant-map".to_string(),
            style: "mapbox://styles/mapbox/streets-v12".to_string(),
            access_token: String::new(),
            center: [24.9375, 60.170833],
            zoom: 9.0,
            marker_color: "var(--purple)".to_string(),
            popup_offset: 25,
        }
    }
}

/// CSS selectors for the elements the page must provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Restaurant table
    pub table: String,
    /// Restaurant detail dialog
    pub detail_dialog: String,
    /// Error dialog
    pub error_dialog: String,
    /// Company filter radio inputs
    pub filter_inputs: String,
    /// Navigation menu toggle button
    pub menu_toggle: String,
    /// Dark mode checkbox
    pub dark_mode_toggle: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            table: "#restaurant-list table".to_string(),
            detail_dialog: "#restaurant-dialog".to_string(),
            error_dialog: "#error-dialog".to_string(),
            filter_inputs: "#filter-form input[name='company']".to_string(),
            menu_toggle: "#menu-toggle".to_string(),
            dark_mode_toggle: "#dark-mode-toggle".to_string(),
        }
    }
}

/// Complete page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Restaurant API
    pub api: ApiConfig,
    /// Position request
    pub geolocation: GeolocationConfig,
    /// Map widget
    pub map: MapConfig,
    /// Page element selectors
    pub selectors: Selectors,
    /// Maximum log level: `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            geolocation: GeolocationConfig::default(),
            map: MapConfig::default(),
            selectors: Selectors::default(),
            log_level: "info".to_string(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl AppConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml_ng::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml_ng::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api.base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.api.language.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api.language",
                reason: "must not be empty".to_string(),
            });
        }
        if !(0.0..=22.0).contains(&self.map.zoom) {
            return Err(ConfigError::Invalid {
                field: "map.zoom",
                reason: format!("{} is outside 0..=22", self.map.zoom),
            });
        }
        let [lng, lat] = self.map.center;
        if !(-180.0..=180.0).contains(&lng) || !(-90.0..=90.0).contains(&lat) {
            return Err(ConfigError::Invalid {
                field: "map.center",
                reason: format!("[{lng}, {lat}] is not a longitude/latitude pair"),
            });
        }
        if self.map.container.is_empty() {
            return Err(ConfigError::Invalid {
                field: "map.container",
                reason: "must not be empty".to_string(),
            });
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid {
                field: "log_level",
                reason: format!("unknown level '{}'", self.log_level),
            });
        }
        Ok(())
    }

    /// API endpoints described by this config.
    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api.base_url, &self.api.language)
    }
}
