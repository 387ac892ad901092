/// Gaussian bell curve evaluation.
///
/// Each color channel is one curve: peak `amplitude` at `center`,
/// symmetric falloff governed by `width`.

use crate::engine::types::{MIN_DIVISOR, MIN_WIDTH};
use crate::math::utils;

/// `round(amplitude * exp(-(value - center)^2 / (2 * width^2)))`.
#[inline]
pub fn gauss(value: f64, amplitude: f64, center: f64, width: f64) -> f64 {
    let numerator = (value - center).powi(2);
    let denominator = 2.0 * width.powi(2);
    (amplitude * (-(numerator / denominator)).exp()).round()
}

/// Center and width of one channel's curve over a range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelCurve {
    pub center: f64,
    pub width: f64,
}

impl ChannelCurve {
    /// Place a curve on `[min, max]`.
    ///
    /// The center is `min + max * factor`, so it can land outside the range.
    /// The divisor is floored at `MIN_DIVISOR` and the width at `MIN_WIDTH`.
    pub fn new(min: f64, max: f64, factor: f64, divisor: f64) -> Self {
        let divisor = utils::floor_at(divisor, MIN_DIVISOR);
        let width = utils::floor_at((max - min).abs() / divisor, MIN_WIDTH);
        Self { center: min + max * factor, width }
    }

    #[inline]
    pub fn evaluate(&self, value: f64, amplitude: f64) -> f64 {
        gauss(value, amplitude, self.center, self.width)
    }
}
