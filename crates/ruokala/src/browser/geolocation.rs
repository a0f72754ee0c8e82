//! Single-shot position request.

use super::to_js;
use ruokala_core::{Coordinates, PositionError, PositionOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{GeolocationPosition, GeolocationPositionError};

/// Code used when the platform gives no `GeolocationPositionError`.
const POSITION_UNAVAILABLE: u16 = 2;

/// Ask the device for its position once.
///
/// # Errors
///
/// Returns the platform's error code and message, or
/// `POSITION_UNAVAILABLE` when geolocation is missing altogether.
pub async fn current_position(options: &PositionOptions) -> Result<Coordinates, PositionError> {
    let geolocation = web_sys::window()
        .ok_or_else(|| PositionError::new(POSITION_UNAVAILABLE, "no window"))?
        .navigator()
        .geolocation()
        .map_err(|e| PositionError::new(POSITION_UNAVAILABLE, format!("{:?}", e)))?;
    let options: web_sys::PositionOptions = to_js(options)
        .map_err(|e| PositionError::new(POSITION_UNAVAILABLE, format!("{:?}", e)))?
        .unchecked_into();

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &options,
        ) {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });

    // Only the success callback resolves the promise.
    let position: GeolocationPosition = JsFuture::from(promise)
        .await
        .map_err(to_position_error)?
        .unchecked_into();
    let coords = position.coords();
    Ok(Coordinates::new(coords.latitude(), coords.longitude()))
}

fn to_position_error(value: JsValue) -> PositionError {
    match value.dyn_into::<GeolocationPositionError>() {
        Ok(err) => PositionError::new(err.code(), err.message()),
        Err(other) => PositionError::new(POSITION_UNAVAILABLE, format!("{:?}", other)),
    }
}
