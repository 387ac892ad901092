use wasm_bindgen::prelude::*;

pub mod engine;
pub mod interop;
pub mod math;
pub mod paint;

use engine::{ColorOutput, GradientEngine, OutputFormat, Rgba};
use interop::options;

/// Gaussian gradient exposed to JS as `GradientGauss`.
///
/// ```js
/// const gradient = new GradientGauss(0, canvas.width, { outputFormat: 'array' });
/// const [r, g, b, a] = gradient.getColor(x, sliderState);
/// ```
#[wasm_bindgen]
pub struct GradientGauss {
    engine: GradientEngine,
}

#[wasm_bindgen]
impl GradientGauss {
    /// Throws when `min` or `max` is `undefined`/`null`; `0` is a valid bound.
    #[wasm_bindgen(constructor)]
    pub fn new(min: JsValue, max: JsValue, options: JsValue) -> Result<GradientGauss, JsError> {
        let engine = GradientEngine::new(
            options::bound(&min),
            options::bound(&max),
            options::options_from_js(&options),
        )?;
        Ok(Self { engine })
    }

    /// Color for `value`: an `rgba(...)` string, a 4-number array, or
    /// `undefined` when the effective output format is unrecognized.
    #[wasm_bindgen(js_name = getColor)]
    pub fn get_color(&self, value: f64, options: JsValue) -> JsValue {
        let overrides = options::overrides_from_js(&options);
        let output = self.engine.get_color(value, &overrides);
        if output.is_none() {
            web_sys::console::warn_1(&JsValue::from_str(
                "GradientGauss: unrecognized outputFormat, expected 'rgba' or 'array'",
            ));
        }
        output_to_js(output)
    }

    /// Format raw components (`[r, g, b, a]`) as `format` would.
    #[wasm_bindgen(js_name = formatOutput)]
    pub fn format_output(&self, color: Vec<f64>, format: &str) -> JsValue {
        let component = |i: usize| color.get(i).copied().unwrap_or(f64::NAN);
        let rgba = [component(0), component(1), component(2), component(3)];
        output_to_js(GradientEngine::format_output(rgba, &OutputFormat::from_name(format)))
    }

    /// Paint one color per column into `rgba_out` (width × height RGBA8).
    ///
    /// Returns the number of complete rows written.
    #[wasm_bindgen(js_name = paintGradient)]
    pub fn paint_gradient(&self, rgba_out: &mut [u8], width: u32, height: u32, options: JsValue) -> u32 {
        let overrides = options::overrides_from_js(&options);
        paint::strip::paint_strip(&self.engine, &overrides, rgba_out, width, height)
    }

    #[wasm_bindgen(getter, js_name = valueMin)]
    pub fn value_min(&self) -> f64 {
        self.engine.min()
    }

    #[wasm_bindgen(getter, js_name = valueMax)]
    pub fn value_max(&self) -> f64 {
        self.engine.max()
    }

    #[wasm_bindgen(getter, js_name = maxColorValue)]
    pub fn max_color_value(&self) -> f64 {
        self.engine.max_color_value()
    }

    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.engine.format().name().to_string()
    }

    #[wasm_bindgen(getter, js_name = redCenterPct)]
    pub fn red_center_pct(&self) -> f64 {
        self.engine.red_center_factor()
    }

    #[wasm_bindgen(getter, js_name = greenCenterPct)]
    pub fn green_center_pct(&self) -> f64 {
        self.engine.green_center_factor()
    }

    #[wasm_bindgen(getter, js_name = blueCenterPct)]
    pub fn blue_center_pct(&self) -> f64 {
        self.engine.blue_center_factor()
    }

    #[wasm_bindgen(getter, js_name = widthDiv)]
    pub fn width_div(&self) -> f64 {
        self.engine.width_divisions()
    }

    #[wasm_bindgen(getter, js_name = redDivisor)]
    pub fn red_divisor(&self) -> Option<f64> {
        self.engine.red_divisor()
    }

    #[wasm_bindgen(getter, js_name = greenDivisor)]
    pub fn green_divisor(&self) -> Option<f64> {
        self.engine.green_divisor()
    }

    #[wasm_bindgen(getter, js_name = blueDivisor)]
    pub fn blue_divisor(&self) -> Option<f64> {
        self.engine.blue_divisor()
    }

    #[wasm_bindgen(getter, js_name = DefaultMaxColorValue)]
    pub fn default_max_color_value(&self) -> f64 {
        GradientEngine::DEFAULT_MAX_COLOR_VALUE
    }

    #[wasm_bindgen(getter, js_name = DefaultOutputFormat)]
    pub fn default_output_format(&self) -> String {
        GradientEngine::DEFAULT_OUTPUT_FORMAT.to_string()
    }

    #[wasm_bindgen(getter, js_name = DefaultRedCenterFactor)]
    pub fn default_red_center_factor(&self) -> f64 {
        GradientEngine::DEFAULT_RED_CENTER_FACTOR
    }

    #[wasm_bindgen(getter, js_name = DefaultGreenCenterFactor)]
    pub fn default_green_center_factor(&self) -> f64 {
        GradientEngine::DEFAULT_GREEN_CENTER_FACTOR
    }

    #[wasm_bindgen(getter, js_name = DefaultBlueCenterFactor)]
    pub fn default_blue_center_factor(&self) -> f64 {
        GradientEngine::DEFAULT_BLUE_CENTER_FACTOR
    }

    #[wasm_bindgen(getter, js_name = DefaultWidthDivisions)]
    pub fn default_width_divisions(&self) -> f64 {
        GradientEngine::DEFAULT_WIDTH_DIVISIONS
    }
}

impl GradientGauss {
    /// The wrapped engine, for Rust callers.
    pub fn engine(&self) -> &GradientEngine {
        &self.engine
    }
}

/// `Rgba` string → JS string, array → JS `Array` of numbers, none → `undefined`.
fn output_to_js(output: Option<ColorOutput>) -> JsValue {
    match output {
        Some(ColorOutput::Rgba(css)) => JsValue::from_str(&css),
        Some(ColorOutput::Array(color)) => color_to_js(&color).into(),
        None => JsValue::UNDEFINED,
    }
}

fn color_to_js(color: &Rgba) -> js_sys::Array {
    color.iter().map(|c| JsValue::from_f64(*c)).collect()
}
