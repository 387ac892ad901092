//! JS option object → typed options.
//!
//! Keys are read one at a time with `Reflect::get`. Missing, `undefined`,
//! `null` and non-number values all count as "not provided"; unknown keys
//! are ignored so callers can pass a whole UI state object.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

use crate::engine::{GradientOptions, OutputFormat, Overrides};

/// Read `obj[key]` as a number.
pub fn number_field(obj: &JsValue, key: &str) -> Option<f64> {
    if !obj.is_object() {
        return None;
    }
    Reflect::get(obj, &JsValue::from_str(key)).ok()?.as_f64()
}

/// Read `obj[key]` as a string.
pub fn string_field(obj: &JsValue, key: &str) -> Option<String> {
    if !obj.is_object() {
        return None;
    }
    Reflect::get(obj, &JsValue::from_str(key)).ok()?.as_string()
}

/// A bound passed as a positional argument: `undefined`/`null` are absent.
pub fn bound(value: &JsValue) -> Option<f64> {
    if value.is_undefined() || value.is_null() {
        None
    } else {
        // Non-numeric bounds become NaN and flow through the math.
        Some(value.as_f64().unwrap_or(f64::NAN))
    }
}

/// Parse the recognized construction keys.
pub fn options_from_js(obj: &JsValue) -> GradientOptions {
    GradientOptions {
        color_max: number_field(obj, "colorMax"),
        output_format: string_field(obj, "outputFormat").map(|s| OutputFormat::from_name(&s)),
        red_center_factor: number_field(obj, "redCenterFactor"),
        green_center_factor: number_field(obj, "greenCenterFactor"),
        blue_center_factor: number_field(obj, "blueCenterFactor"),
        range_divisor: number_field(obj, "rangeDivisor")
            .or_else(|| number_field(obj, "widthDivisions")),
        red_divisor: number_field(obj, "redDivisor"),
        green_divisor: number_field(obj, "greenDivisor"),
        blue_divisor: number_field(obj, "blueDivisor"),
    }
}

/// Parse a per-call options object, including `min`/`max`.
pub fn overrides_from_js(obj: &JsValue) -> Overrides {
    Overrides {
        min: number_field(obj, "min"),
        max: number_field(obj, "max"),
        options: options_from_js(obj),
    }
}
