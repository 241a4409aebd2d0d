//! Constant-speed resampling of parametric curves.
//!
//! Given an arbitrary function `f(t) -> point` over `[0, 1]`, this crate
//! produces a path that traces the same curve but advances at an
//! approximately uniform speed, regardless of how unevenly `f` itself moves
//! through its parameter.
//!
//! The pipeline, leaves first:
//!
//! - [`bake`] evaluates `f` at equidistant parameters.
//! - [`polyline_length`] estimates arc length from the samples.
//! - [`resample_linear`] re-walks the sampled polyline at a fixed spacing,
//!   carrying leftover distance across chained segments.
//! - [`Lerper`] turns evenly spaced points back into a continuous function,
//!   and [`path`] wires the whole pipeline together.
//!
//! Point types are anything implementing [`PointLike`]: `f64` scalars and
//! the `glam` double-precision vectors out of the box.

/// Error types used across the crate.
pub mod error;
/// Piecewise-linear reconstruction and the path builder.
pub mod path;
/// The point capability trait and its stock implementations.
pub mod point;
/// Fixed-spacing polyline resampling with carry state.
pub mod resample;
/// Sampling and length estimation.
pub mod sample;

pub use crate::{
    error::{Error, Result},
    path::{ConstantSpeedPath, Lerper, path},
    point::PointLike,
    resample::{Resampled, resample_linear},
    sample::{bake, polyline_length},
};
