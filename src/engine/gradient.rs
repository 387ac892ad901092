/// Gaussian gradient engine.
///
/// Maps any value to an RGBA color by evaluating three independent bell
/// curves (red, green, blue) placed along a `[min, max]` range. Stored
/// configuration is fixed at construction; every `get_color` call may
/// override any parameter for that call only.

use tracing::{debug, warn};

use super::error::ConfigurationError;
use super::gaussian::ChannelCurve;
use super::types::*;
use crate::math::utils;

/// Gaussian gradient over a numeric range.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientEngine {
    min: f64,
    max: f64,
    amplitude: f64,
    output_format: OutputFormat,
    red_center_factor: f64,
    green_center_factor: f64,
    blue_center_factor: f64,
    width_divisions: f64,
    red_divisor: Option<f64>,
    green_divisor: Option<f64>,
    blue_divisor: Option<f64>,
}

/// Parameters effective for a single call; derived, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedParams {
    pub min: f64,
    pub max: f64,
    pub amplitude: f64,
    pub output_format: OutputFormat,
    /// Center factors in red, green, blue order
    pub factors: [f64; 3],
    /// Effective (unfloored) divisors in red, green, blue order
    pub divisors: [f64; 3],
}

impl ResolvedParams {
    pub fn curve(&self, channel: Channel) -> ChannelCurve {
        let i = channel as usize;
        ChannelCurve::new(self.min, self.max, self.factors[i], self.divisors[i])
    }
}

/// Call-time value wins, then the instance value.
#[inline]
fn pick<T: Clone>(call: Option<&T>, instance: &T) -> T {
    utils::first_or(&[call], instance)
}

impl GradientEngine {
    pub const DEFAULT_MAX_COLOR_VALUE: f64 = DEFAULT_MAX_COLOR_VALUE;
    pub const DEFAULT_OUTPUT_FORMAT: &'static str = DEFAULT_OUTPUT_FORMAT;
    pub const DEFAULT_RED_CENTER_FACTOR: f64 = DEFAULT_RED_CENTER_FACTOR;
    pub const DEFAULT_GREEN_CENTER_FACTOR: f64 = DEFAULT_GREEN_CENTER_FACTOR;
    pub const DEFAULT_BLUE_CENTER_FACTOR: f64 = DEFAULT_BLUE_CENTER_FACTOR;
    pub const DEFAULT_WIDTH_DIVISIONS: f64 = DEFAULT_WIDTH_DIVISIONS;

    /// Build an engine over `[min, max]`.
    ///
    /// Fails only when a bound is absent; `Some(0.0)` is a valid bound and
    /// `min > max` is accepted as-is.
    pub fn new(
        min: Option<f64>,
        max: Option<f64>,
        options: GradientOptions,
    ) -> Result<Self, ConfigurationError> {
        let (min, max) = ConfigurationError::require_range(min, max)?;

        let engine = Self {
            min,
            max,
            amplitude: pick(options.color_max.as_ref(), &DEFAULT_MAX_COLOR_VALUE),
            output_format: options.output_format.unwrap_or_default(),
            red_center_factor: pick(options.red_center_factor.as_ref(), &DEFAULT_RED_CENTER_FACTOR),
            green_center_factor: pick(
                options.green_center_factor.as_ref(),
                &DEFAULT_GREEN_CENTER_FACTOR,
            ),
            blue_center_factor: pick(options.blue_center_factor.as_ref(), &DEFAULT_BLUE_CENTER_FACTOR),
            width_divisions: pick(options.range_divisor.as_ref(), &DEFAULT_WIDTH_DIVISIONS),
            red_divisor: options.red_divisor,
            green_divisor: options.green_divisor,
            blue_divisor: options.blue_divisor,
        };

        debug!(
            min,
            max,
            amplitude = engine.amplitude,
            format = %engine.output_format,
            width_divisions = engine.width_divisions,
            "gradient engine configured"
        );
        Ok(engine)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Peak channel value (`colorMax`).
    pub fn max_color_value(&self) -> f64 {
        self.amplitude
    }

    pub fn format(&self) -> &OutputFormat {
        &self.output_format
    }

    pub fn red_center_factor(&self) -> f64 {
        self.red_center_factor
    }

    pub fn green_center_factor(&self) -> f64 {
        self.green_center_factor
    }

    pub fn blue_center_factor(&self) -> f64 {
        self.blue_center_factor
    }

    pub fn width_divisions(&self) -> f64 {
        self.width_divisions
    }

    pub fn red_divisor(&self) -> Option<f64> {
        self.red_divisor
    }

    pub fn green_divisor(&self) -> Option<f64> {
        self.green_divisor
    }

    pub fn blue_divisor(&self) -> Option<f64> {
        self.blue_divisor
    }

    /// Merge call-time overrides over the stored configuration.
    ///
    /// Every key resolves on its own (call, then instance, then default);
    /// a resolved channel divisor then wins over the resolved shared divisor.
    pub fn resolve(&self, overrides: &Overrides) -> ResolvedParams {
        let o = &overrides.options;

        let shared = pick(o.range_divisor.as_ref(), &self.width_divisions);
        let divisor = |call: Option<f64>, instance: Option<f64>| call.or(instance).unwrap_or(shared);

        ResolvedParams {
            min: pick(overrides.min.as_ref(), &self.min),
            max: pick(overrides.max.as_ref(), &self.max),
            amplitude: pick(o.color_max.as_ref(), &self.amplitude),
            output_format: pick(o.output_format.as_ref(), &self.output_format),
            factors: [
                pick(o.red_center_factor.as_ref(), &self.red_center_factor),
                pick(o.green_center_factor.as_ref(), &self.green_center_factor),
                pick(o.blue_center_factor.as_ref(), &self.blue_center_factor),
            ],
            divisors: [
                divisor(o.red_divisor, self.red_divisor),
                divisor(o.green_divisor, self.green_divisor),
                divisor(o.blue_divisor, self.blue_divisor),
            ],
        }
    }

    /// Raw `[r, g, b, 255]` components for `value`.
    pub fn color_at(&self, value: f64, overrides: &Overrides) -> Rgba {
        Self::evaluate(value, &self.resolve(overrides))
    }

    fn evaluate(value: f64, params: &ResolvedParams) -> Rgba {
        let [r, g, b] = Channel::ALL.map(|c| params.curve(c).evaluate(value, params.amplitude));
        [r, g, b, ALPHA]
    }

    /// Color for `value`, formatted per the effective output format.
    ///
    /// Returns `None` when the effective format is not `"rgba"` or `"array"`.
    pub fn get_color(&self, value: f64, overrides: &Overrides) -> Option<ColorOutput> {
        let params = self.resolve(overrides);
        let color = Self::evaluate(value, &params);
        let output = Self::format_output(color, &params.output_format);
        if output.is_none() {
            warn!(format = %params.output_format, "unrecognized output format, no color produced");
        }
        output
    }

    /// Format raw components.
    pub fn format_output(color: Rgba, format: &OutputFormat) -> Option<ColorOutput> {
        match format {
            OutputFormat::Rgba => {
                let [r, g, b, a] = color.map(utils::format_component);
                Some(ColorOutput::Rgba(format!("rgba({r}, {g}, {b}, {a})")))
            }
            OutputFormat::Array => Some(ColorOutput::Array(color)),
            OutputFormat::Unrecognized(_) => None,
        }
    }
}
