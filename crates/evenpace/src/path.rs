//! Piecewise-linear reconstruction of sampled curves and the constant-speed
//! path builder tying the pipeline together.

use crate::{
    error,
    point::PointLike,
    resample::resample_linear,
    sample::{bake, polyline_length},
};

/// A piecewise-linear interpolant over an owned point sequence.
///
/// Evaluation maps `u` in `[0, 1]` across the whole sequence with uniform
/// index spacing. The struct holds no mutable state, so a shared reference
/// can be evaluated concurrently from any number of callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Lerper<P> {
    /// The captured sequence; always at least two points.
    points: Vec<P>,
}

impl<P: PointLike> Lerper<P> {
    /// Wrap `points` into an interpolant. At least two points are required.
    pub fn new(points: Vec<P>) -> error::Result<Self> {
        if points.len() < 2 {
            return Err(error::Error::InvalidArgument(format!(
                "a lerper requires at least 2 points, got {}",
                points.len()
            )));
        }
        Ok(Self { points })
    }

    /// Evaluate the interpolant at `u`.
    pub fn at(&self, u: f64) -> P {
        let count = self.points.len();
        if count == 2 {
            return self.points[0].lerp(self.points[1], u);
        }

        let last = (count - 1) as f64;
        let x = u * last;
        let lo = x.floor().clamp(0.0, last) as usize;
        let hi = x.ceil().clamp(0.0, last) as usize;

        // Degenerate local interval: no meaningful interpolation factor.
        if self.points[lo] == self.points[hi] {
            return self.points[lo];
        }
        self.points[lo].lerp(self.points[hi], x - lo as f64)
    }

    /// The captured point sequence.
    pub fn points(&self) -> &[P] {
        &self.points
    }
}

/// A resampled rendition of a parametric function that advances at an
/// approximately constant speed.
///
/// Produced by [`path`]. Evaluating across `u` from 0 to 1 traces the same
/// curve as the source function at uniform arc-length increments per index
/// step; callers that need uniform speed per unit `u` scale by
/// [`total_length`](Self::total_length).
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantSpeedPath<P> {
    /// Interpolant over the evenly spaced backing points.
    lerper: Lerper<P>,
    /// Estimated arc length of the source curve.
    total_length: f64,
    /// Arc-length spacing between consecutive backing points.
    step: f64,
}

impl<P: PointLike> ConstantSpeedPath<P> {
    /// Evaluate the path at `u` in `[0, 1]`.
    pub fn at(&self, u: f64) -> P {
        self.lerper.at(u)
    }

    /// Estimated arc length of the source curve.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Arc-length spacing between consecutive backing points.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The evenly spaced backing points.
    pub fn points(&self) -> &[P] {
        self.lerper.points()
    }
}

/// Build a constant-speed rendition of `f` over `[0, 1]`.
///
/// The pipeline bakes `f` at `length_accuracy.unwrap_or(accuracy)` samples
/// to estimate its arc length, re-bakes at `accuracy` samples when a
/// distinct `length_accuracy` was supplied (trading sampling cost against
/// length accuracy independently of shape fidelity), resamples the polyline
/// at spacing `minimum_speed`, and wraps the result in a [`Lerper`].
///
/// Fails with [`error::Error::InvalidArgument`] when `accuracy` or
/// `length_accuracy` is below 2, `minimum_speed` is not strictly positive,
/// or the curve is shorter than a single `minimum_speed` step.
pub fn path<P: PointLike>(
    f: impl Fn(f64) -> P,
    minimum_speed: f64,
    accuracy: usize,
    length_accuracy: Option<usize>,
) -> error::Result<ConstantSpeedPath<P>> {
    let length_samples = length_accuracy.unwrap_or(accuracy);
    let mut points = bake(&f, length_samples)?;
    let total_length = polyline_length(&points);

    if length_samples != accuracy {
        points = bake(&f, accuracy)?;
    }

    let resampled = resample_linear(&points, minimum_speed, Some(total_length), None)?;
    log::debug!(
        "path: {} samples, length {total_length:.4}, {} points at spacing {minimum_speed}",
        points.len(),
        resampled.points.len(),
    );

    Ok(ConstantSpeedPath {
        lerper: Lerper::new(resampled.points)?,
        total_length,
        step: minimum_speed,
    })
}
