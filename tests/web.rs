//! JS-facing tests, run with `wasm-pack test --node` (or `--headless --chrome`).

#![cfg(target_arch = "wasm32")]

use gradient_gauss::interop::options::{options_from_js, overrides_from_js};
use gradient_gauss::GradientGauss;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn js_object(entries: &[(&str, JsValue)]) -> JsValue {
    let obj = Object::new();
    for (key, value) in entries {
        Reflect::set(&obj, &JsValue::from_str(key), value).unwrap();
    }
    obj.into()
}

fn as_numbers(value: JsValue) -> Vec<f64> {
    Array::from(&value).iter().map(|v| v.as_f64().unwrap()).collect()
}

fn array_gradient() -> GradientGauss {
    let options = js_object(&[("outputFormat", "array".into())]);
    GradientGauss::new(1.into(), 100.into(), options).unwrap()
}

#[wasm_bindgen_test]
fn throws_without_bounds() {
    assert!(GradientGauss::new(JsValue::UNDEFINED, JsValue::UNDEFINED, JsValue::UNDEFINED).is_err());
    assert!(GradientGauss::new(JsValue::NULL, 10.into(), JsValue::UNDEFINED).is_err());
    assert!(GradientGauss::new(0.into(), 0.into(), JsValue::UNDEFINED).is_ok());
}

#[wasm_bindgen_test]
fn defaults_when_constructed() {
    let g = GradientGauss::new(1.into(), 100.into(), JsValue::UNDEFINED).unwrap();
    assert_eq!(g.value_max(), 100.0);
    assert_eq!(g.value_min(), 1.0);
    assert_eq!(g.format(), g.default_output_format());
    assert_eq!(g.max_color_value(), g.default_max_color_value());
    assert_eq!(g.red_center_pct(), g.default_red_center_factor());
    assert_eq!(g.green_center_pct(), g.default_green_center_factor());
    assert_eq!(g.blue_center_pct(), g.default_blue_center_factor());
    assert_eq!(g.width_div(), g.default_width_divisions());
}

#[wasm_bindgen_test]
fn uses_passed_options() {
    let options = js_object(&[
        ("colorMax", 200.into()),
        ("outputFormat", "foo".into()),
        ("redCenterFactor", 0.5.into()),
        ("greenCenterFactor", 1.0.into()),
        ("blueCenterFactor", 0.1.into()),
        ("rangeDivisor", 2.into()),
    ]);
    let g = GradientGauss::new(1.into(), 100.into(), options).unwrap();
    assert_eq!(g.max_color_value(), 200.0);
    assert_eq!(g.format(), "foo");
    assert_eq!(g.red_center_pct(), 0.5);
    assert_eq!(g.green_center_pct(), 1.0);
    assert_eq!(g.blue_center_pct(), 0.1);
    assert_eq!(g.width_div(), 2.0);
    assert!(g.get_color(50.0, JsValue::UNDEFINED).is_undefined());
}

#[wasm_bindgen_test]
fn width_divisions_alias() {
    let opts = options_from_js(&js_object(&[("widthDivisions", 7.into())]));
    assert_eq!(opts.range_divisor, Some(7.0));

    let both = js_object(&[("widthDivisions", 7.into()), ("rangeDivisor", 3.into())]);
    assert_eq!(options_from_js(&both).range_divisor, Some(3.0));
}

#[wasm_bindgen_test]
fn non_numbers_are_unset() {
    let o = overrides_from_js(&js_object(&[
        ("max", "fifty".into()),
        ("colorMax", JsValue::NULL),
        ("containerWidth", 640.into()),
    ]));
    assert_eq!(o.max, None);
    assert_eq!(o.options.color_max, None);
    assert_eq!(overrides_from_js(&JsValue::UNDEFINED), Default::default());
}

#[wasm_bindgen_test]
fn formats_rgba_and_array() {
    let g = array_gradient();
    let css = g.format_output(vec![100.0, 50.0, 25.0, 255.0], "rgba");
    assert_eq!(css.as_string().as_deref(), Some("rgba(100, 50, 25, 255)"));

    let arr = g.format_output(vec![50.0, 50.0, 40.0, 255.0], "array");
    assert_eq!(as_numbers(arr), vec![50.0, 50.0, 40.0, 255.0]);
}

#[wasm_bindgen_test]
fn color_for_value_and_max_override() {
    let g = array_gradient();
    assert_eq!(as_numbers(g.get_color(50.0, JsValue::UNDEFINED)), vec![9.0, 255.0, 122.0, 255.0]);

    let call = js_object(&[("max", 50.into())]);
    assert_eq!(as_numbers(g.get_color(50.0, call)), vec![254.0, 13.0, 0.0, 255.0]);
    assert_eq!(g.value_max(), 100.0);
}

#[wasm_bindgen_test]
fn paints_into_typed_buffer() {
    let g = array_gradient();
    let mut buf = vec![0u8; 100 * 2 * 4];
    assert_eq!(g.paint_gradient(&mut buf, 100, 2, JsValue::UNDEFINED), 2);
    assert_eq!(&buf[200..204], &[9, 255, 122, 255]);
    assert_eq!(&buf[600..604], &[9, 255, 122, 255]);
}
