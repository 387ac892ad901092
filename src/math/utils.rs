//! Numeric helpers shared by the Gaussian engine and the strip painter.

/// Clamp a value to [min, max] range.
#[inline(always)]
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v < min { min } else if v > max { max } else { v }
}

/// Raise `v` to at least `floor`. NaN stays NaN.
#[inline(always)]
pub fn floor_at(v: f64, floor: f64) -> f64 {
    if v < floor { floor } else { v }
}

/// Pick the first provided value, falling back to `fallback`.
#[inline(always)]
pub fn first_or<T: Clone>(candidates: &[Option<&T>], fallback: &T) -> T {
    candidates
        .iter()
        .find_map(|c| *c)
        .unwrap_or(fallback)
        .clone()
}

/// Pack a channel value in [0, 255] into a byte. NaN becomes 0.
#[inline(always)]
pub fn channel_to_byte(v: f64) -> u8 {
    if v.is_nan() { 0 } else { clamp(v.round(), 0.0, 255.0) as u8 }
}

/// Render a component the way a JS template string would (`-0` prints as `0`).
pub fn format_component(v: f64) -> String {
    if v == 0.0 { "0".to_string() } else { v.to_string() }
}
