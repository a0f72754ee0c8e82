//! Mapbox GL JS bindings and marker placement.
//!
//! The page loads `mapbox-gl.js`, which defines the global `mapboxgl`.

use super::to_js;
use ruokala_core::{MapConfig, MarkerSpec};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `mapboxgl.Map`
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Map)]
    pub type MapboxMap;

    #[wasm_bindgen(catch, constructor, js_namespace = mapboxgl, js_class = "Map")]
    fn new(options: &JsValue) -> Result<MapboxMap, JsValue>;

    /// `mapboxgl.Marker`
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Marker;

    #[wasm_bindgen(catch, constructor, js_namespace = mapboxgl)]
    fn new(options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = setLngLat)]
    fn set_lng_lat(this: &Marker, lng_lat: &js_sys::Array) -> Marker;

    #[wasm_bindgen(method, js_name = setPopup)]
    fn set_popup(this: &Marker, popup: &Popup) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &MapboxMap) -> Marker;

    /// `mapboxgl.Popup`
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Popup;

    #[wasm_bindgen(catch, constructor, js_namespace = mapboxgl)]
    fn new(options: &JsValue) -> Result<Popup, JsValue>;

    #[wasm_bindgen(method, js_name = setHTML)]
    fn set_html(this: &Popup, html: &str) -> Popup;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions<'a> {
    container: &'a str,
    style: &'a str,
    center: [f64; 2],
    zoom: f64,
    access_token: &'a str,
}

#[derive(Serialize)]
struct MarkerOptions<'a> {
    color: &'a str,
}

#[derive(Serialize)]
struct PopupOptions {
    offset: u32,
}

/// Create the map and add one marker with a popup per entry.
///
/// Markers are placed once; later filtering does not touch them.
///
/// # Errors
///
/// Fails when `mapboxgl` is not loaded or rejects the options.
pub fn show_markers(
    config: &MapConfig,
    access_token: &str,
    markers: &[MarkerSpec],
) -> Result<MapboxMap, JsValue> {
    let map = MapboxMap::new(&to_js(&MapOptions {
        container: &config.container,
        style: &config.style,
        center: config.center,
        zoom: config.zoom,
        access_token,
    })?)?;

    let marker_options = to_js(&MarkerOptions {
        color: &config.marker_color,
    })?;
    let popup_options = to_js(&PopupOptions {
        offset: config.popup_offset,
    })?;

    for spec in markers {
        let popup = Popup::new(&popup_options)?.set_html(&spec.popup_html);
        let [lng, lat] = spec.lng_lat;
        Marker::new(&marker_options)?
            .set_lng_lat(&js_sys::Array::of2(&lng.into(), &lat.into()))
            .set_popup(&popup)
            .add_to(&map);
    }

    tracing::info!(markers = markers.len(), "map ready");
    Ok(map)
}

/// Token from the config, or from `<meta name="mapbox-token">`.
#[must_use]
pub fn access_token(config: &MapConfig, document: &web_sys::Document) -> Option<String> {
    if !config.access_token.is_empty() {
        return Some(config.access_token.clone());
    }
    document
        .query_selector("meta[name='mapbox-token']")
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
        .filter(|token| !token.is_empty())
}
