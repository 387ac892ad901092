//! Gradient strip painter.
//!
//! Column `x` is colored with `get_color(x)`; every row of the strip repeats
//! the same column colors.

use tracing::debug;

use crate::engine::types::{Channel, ALPHA};
use crate::engine::{GradientEngine, Overrides, Rgba};
use crate::math::utils;

/// Sample one color per column index `0..columns`.
pub fn sample_strip(engine: &GradientEngine, overrides: &Overrides, columns: u32) -> Vec<Rgba> {
    let params = engine.resolve(overrides);
    let curves = Channel::ALL.map(|c| params.curve(c));

    (0..columns)
        .map(|x| {
            let v = x as f64;
            let [r, g, b] = curves.map(|c| c.evaluate(v, params.amplitude));
            [r, g, b, ALPHA]
        })
        .collect()
}

/// Paint a `width` × `height` strip into a row-major RGBA8 buffer.
///
/// Stops at the end of `rgba_out` instead of overrunning it.
/// Returns the number of complete rows written.
pub fn paint_strip(
    engine: &GradientEngine,
    overrides: &Overrides,
    rgba_out: &mut [u8],
    width: u32,
    height: u32,
) -> u32 {
    debug!(width, height, buffer_len = rgba_out.len(), "painting gradient strip");

    let row_bytes = match (width as usize).checked_mul(4) {
        Some(0) | None => return 0,
        Some(n) => n,
    };

    // Pack the row once, then copy it down.
    let row: Vec<u8> = sample_strip(engine, overrides, width)
        .iter()
        .flat_map(|c| c.map(utils::channel_to_byte))
        .collect();

    let mut rows_written = 0;
    for dest in rgba_out.chunks_mut(row_bytes).take(height as usize) {
        dest.copy_from_slice(&row[..dest.len()]);
        if dest.len() == row_bytes {
            rows_written += 1;
        }
    }

    rows_written
}
