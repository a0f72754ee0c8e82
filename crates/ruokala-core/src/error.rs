//! Error types.

use thiserror::Error;

/// A failed API request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never produced a response
    #[error("request to {url} failed: {message}")]
    Transport {
        /// Requested URL
        url: String,
        /// Transport failure description
        message: String,
    },
    /// The server answered with a non-success status
    #[error("{status} {status_text} ({url})")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
        /// HTTP reason phrase
        status_text: String,
    },
    /// The body was not the JSON we expected
    #[error("invalid response from {url}: {message}")]
    Decode {
        /// Requested URL
        url: String,
        /// Parser message
        message: String,
    },
}

impl RequestError {
    /// The URL the failed request targeted.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }
}

/// A required page element could not be bound at startup.
///
/// Every variant is fatal: the page is not usable until the markup is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No global `window`
    #[error("no window available")]
    NoWindow,
    /// No `document` on the window
    #[error("no document available")]
    NoDocument,
    /// The selector was rejected by the browser
    #[error("invalid selector '{0}'")]
    InvalidSelector(String),
    /// Restaurant table not found
    #[error("restaurant table not found ('{0}')")]
    MissingTable(String),
    /// Detail dialog not found
    #[error("restaurant dialog not found ('{0}')")]
    MissingDetailDialog(String),
    /// Error dialog not found
    #[error("error dialog not found ('{0}')")]
    MissingErrorDialog(String),
    /// No company filter radios found
    #[error("company filter inputs not found ('{0}')")]
    MissingFilterInputs(String),
    /// Navigation menu toggle not found
    #[error("menu toggle not found ('{0}')")]
    MissingMenuToggle(String),
    /// Dark mode toggle not found
    #[error("dark mode toggle not found ('{0}')")]
    MissingDarkModeToggle(String),
    /// Map container not found
    #[error("map container not found ('#{0}')")]
    MissingMapContainer(String),
    /// An element exists but is not the expected kind
    #[error("element '{selector}' is not a {expected}")]
    WrongElementType {
        /// Selector that matched
        selector: String,
        /// Expected element interface
        expected: &'static str,
    },
}

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The YAML could not be parsed
    #[error("config parse error: {0}")]
    Parse(String),
    /// A value is out of range or empty
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted field path
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}
