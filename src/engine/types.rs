/// Core option and output types for the gradient engine.
///
/// Every option is an `Option<_>` so that "not provided" is always
/// distinguishable from a provided zero.

use std::fmt;

/// Peak value of each channel's curve.
pub const DEFAULT_MAX_COLOR_VALUE: f64 = 255.0;
/// Name of the default output format.
pub const DEFAULT_OUTPUT_FORMAT: &str = "rgba";
pub const DEFAULT_RED_CENTER_FACTOR: f64 = 1.0;
pub const DEFAULT_GREEN_CENTER_FACTOR: f64 = 0.5;
pub const DEFAULT_BLUE_CENTER_FACTOR: f64 = 0.25;
/// Shared divisor applied to the range span to derive curve width.
pub const DEFAULT_WIDTH_DIVISIONS: f64 = 5.0;

/// Smallest divisor ever applied to the span.
pub const MIN_DIVISOR: f64 = 0.1;
/// Smallest curve width ever used.
pub const MIN_WIDTH: f64 = 1.0;

/// Alpha is not configurable, every color is fully opaque.
pub const ALPHA: f64 = 255.0;

/// Raw color components `[r, g, b, a]`.
pub type Rgba = [f64; 4];

/// How `get_color` presents its result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// `"rgba(R, G, B, A)"` string
    Rgba,
    /// Four-element numeric sequence
    Array,
    /// Any other name; kept so callers can read back what they passed in
    Unrecognized(String),
}

impl OutputFormat {
    /// Parse from a format name (matching the JS option values).
    pub fn from_name(name: &str) -> Self {
        match name {
            "rgba" => OutputFormat::Rgba,
            "array" => OutputFormat::Array,
            other => OutputFormat::Unrecognized(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            OutputFormat::Rgba => "rgba",
            OutputFormat::Array => "array",
            OutputFormat::Unrecognized(name) => name,
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::from_name(DEFAULT_OUTPUT_FORMAT)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A formatted color.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorOutput {
    Rgba(String),
    Array(Rgba),
}

impl ColorOutput {
    /// Raw components when the output is an array.
    pub fn as_array(&self) -> Option<&Rgba> {
        match self {
            ColorOutput::Array(c) => Some(c),
            ColorOutput::Rgba(_) => None,
        }
    }

    /// CSS string when the output is rgba.
    pub fn as_css(&self) -> Option<&str> {
        match self {
            ColorOutput::Rgba(s) => Some(s),
            ColorOutput::Array(_) => None,
        }
    }
}

/// Recognized configuration options — shared by construction and per-call overrides.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradientOptions {
    /// Peak amplitude (`colorMax`)
    pub color_max: Option<f64>,
    pub output_format: Option<OutputFormat>,
    pub red_center_factor: Option<f64>,
    pub green_center_factor: Option<f64>,
    pub blue_center_factor: Option<f64>,
    /// Shared width divisor (`rangeDivisor` / `widthDivisions`)
    pub range_divisor: Option<f64>,
    pub red_divisor: Option<f64>,
    pub green_divisor: Option<f64>,
    pub blue_divisor: Option<f64>,
}

impl GradientOptions {
    pub fn with_color_max(mut self, v: f64) -> Self {
        self.color_max = Some(v);
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn with_center_factors(mut self, red: f64, green: f64, blue: f64) -> Self {
        self.red_center_factor = Some(red);
        self.green_center_factor = Some(green);
        self.blue_center_factor = Some(blue);
        self
    }

    pub fn with_range_divisor(mut self, v: f64) -> Self {
        self.range_divisor = Some(v);
        self
    }

    pub fn with_channel_divisors(
        mut self,
        red: Option<f64>,
        green: Option<f64>,
        blue: Option<f64>,
    ) -> Self {
        self.red_divisor = red;
        self.green_divisor = green;
        self.blue_divisor = blue;
        self
    }
}

/// One-shot options for a single `get_color` call.
///
/// Same keys as construction plus ad-hoc `min`/`max`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub options: GradientOptions,
}

impl Overrides {
    /// No overrides — use the engine's stored configuration.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, v: f64) -> Self {
        self.min = Some(v);
        self
    }

    pub fn with_max(mut self, v: f64) -> Self {
        self.max = Some(v);
        self
    }

    pub fn with_options(mut self, options: GradientOptions) -> Self {
        self.options = options;
        self
    }
}

impl From<GradientOptions> for Overrides {
    fn from(options: GradientOptions) -> Self {
        Self { min: None, max: None, options }
    }
}

/// Red, green and blue, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::from_name("rgba"), OutputFormat::Rgba);
        assert_eq!(OutputFormat::from_name("array"), OutputFormat::Array);
        let foo = OutputFormat::from_name("foo");
        assert_eq!(foo, OutputFormat::Unrecognized("foo".to_string()));
        assert_eq!(foo.name(), "foo");
        assert_eq!(OutputFormat::default().to_string(), DEFAULT_OUTPUT_FORMAT);
    }

    #[test]
    fn test_options_default_unset() {
        let o = GradientOptions::default();
        assert!(o.color_max.is_none());
        assert!(o.output_format.is_none());
        assert!(o.range_divisor.is_none());
        assert!(o.red_divisor.is_none());
    }

    #[test]
    fn test_overrides_from_options() {
        let o: Overrides = GradientOptions::default().with_color_max(10.0).into();
        assert_eq!(o.min, None);
        assert_eq!(o.max, None);
        assert_eq!(o.options.color_max, Some(10.0));
    }
}
