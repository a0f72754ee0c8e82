//! Geolocation request options and failures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Options for a single-shot position request.
///
/// Serializes with the names the browser's `PositionOptions` dictionary uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionOptions {
    /// Ask for the most accurate fix the device can give
    pub enable_high_accuracy: bool,
    /// Give up after this many milliseconds
    pub timeout: u32,
    /// Accept a cached fix at most this old, in milliseconds
    pub maximum_age: u32,
}

impl PositionOptions {
    /// Timeout as a duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.timeout))
    }

    /// Cached-fix tolerance as a duration.
    #[must_use]
    pub fn maximum_age(&self) -> Duration {
        Duration::from_millis(u64::from(self.maximum_age))
    }
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: 5000,
            maximum_age: 0,
        }
    }
}

/// Platform-defined reason a position request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionErrorKind {
    /// The user or browser refused access
    PermissionDenied,
    /// No fix could be obtained
    PositionUnavailable,
    /// The request ran past its timeout
    Timeout,
    /// A code outside the standard set
    Unknown,
}

/// A failed position request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionError {
    /// Numeric platform code
    pub code: u16,
    /// Platform message
    pub message: String,
}

impl PositionError {
    /// Create a new position error.
    #[must_use]
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Classify the numeric code.
    #[must_use]
    pub const fn kind(&self) -> PositionErrorKind {
        match self.code {
            1 => PositionErrorKind::PermissionDenied,
            2 => PositionErrorKind::PositionUnavailable,
            3 => PositionErrorKind::Timeout,
            _ => PositionErrorKind::Unknown,
        }
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR({}): {}", self.code, self.message)
    }
}

impl std::error::Error for PositionError {}
