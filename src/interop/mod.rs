//! Conversions between JS values and engine types.

pub mod options;
