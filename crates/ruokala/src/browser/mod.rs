//! Browser runtime for the restaurant page.
//!
//! This module binds [`ruokala_core`]'s board to the DOM, the Geolocation
//! API, the restaurant REST API and Mapbox GL.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod geolocation;
#[cfg(target_arch = "wasm32")]
pub mod handles;
#[cfg(target_arch = "wasm32")]
pub mod http;
#[cfg(target_arch = "wasm32")]
pub mod map;
#[cfg(target_arch = "wasm32")]
pub mod table;

#[cfg(target_arch = "wasm32")]
pub use app::{start, App};
#[cfg(target_arch = "wasm32")]
pub use handles::ViewHandles;
#[cfg(target_arch = "wasm32")]
pub use http::HttpClient;

/// Class marking the row whose dialog is open.
pub const HIGHLIGHT_CLASS: &str = "highlight";

/// `<body>` class toggled by the dark mode switch.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// `<body>` class toggled by the navigation menu button.
pub const MENU_OPEN_CLASS: &str = "menu-open";

/// Convert a serializable value into a plain JS object.
#[cfg(target_arch = "wasm32")]
pub(crate) fn to_js<T: serde::Serialize>(value: &T) -> Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue> {
    let json = serde_json::to_string(value)
        .map_err(|e| wasm_bindgen::JsValue::from_str(&format!("JSON serialize error: {}", e)))?;
    js_sys::JSON::parse(&json)
}
