//! ブラウザの位置情報API

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{GeolocationPosition, GeolocationPositionError, PositionOptions};
use waste_sort_common::geolocation::{
    POSITION_HIGH_ACCURACY, POSITION_MAX_AGE_MS, POSITION_TIMEOUT_MS,
};
use waste_sort_common::{Coordinates, LocateError};

/// 現在地を取得（タイムアウト10秒、5分以内のキャッシュ可、高精度）
pub async fn current_position() -> Result<Coordinates, LocateError> {
    let window = web_sys::window().ok_or(LocateError::Unsupported)?;
    let navigator = window.navigator();

    let has_api = js_sys::Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false);
    if !has_api {
        return Err(LocateError::Unsupported);
    }
    let geolocation = navigator.geolocation().map_err(|_| LocateError::Unsupported)?;

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(POSITION_HIGH_ACCURACY);
    options.set_timeout(POSITION_TIMEOUT_MS);
    options.set_maximum_age(POSITION_MAX_AGE_MS);

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) =
            geolocation.get_current_position_with_error_callback_and_options(&resolve, Some(&reject), &options)
        {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let position: GeolocationPosition = value.unchecked_into();
            let coords = position.coords();
            Ok(Coordinates {
                latitude: coords.latitude(),
                longitude: coords.longitude(),
            })
        }
        Err(err) => match err.dyn_into::<GeolocationPositionError>() {
            Ok(e) => Err(LocateError::from_position_error_code(e.code(), &e.message())),
            Err(other) => Err(LocateError::Location(format!("{:?}", other))),
        },
    }
}
