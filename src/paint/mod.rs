//! Painting module — fills RGBA pixel buffers from a gradient engine.
//!
//! One color per pixel column, repeated down every row, the way a canvas
//! consumer draws a horizontal gradient strip.

pub mod strip;
