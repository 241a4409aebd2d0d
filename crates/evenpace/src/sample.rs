//! Discrete sampling of parametric functions and polyline length
//! estimation.

use crate::{error, point::PointLike};

/// Minimum number of samples accepted by [`bake`].
const MIN_SAMPLES: usize = 2;

/// Evaluate `f` at `samples` equidistant parameters across `[0, 1]`.
///
/// The endpoints are always included: the first element is `f(0)` and the
/// last is `f(1)`. Evaluation happens in ascending parameter order and the
/// output preserves it. `f` is assumed pure and total on `[0, 1]`; it is not
/// invoked at all when `samples` is rejected.
pub fn bake<P: PointLike>(f: impl Fn(f64) -> P, samples: usize) -> error::Result<Vec<P>> {
    if samples < MIN_SAMPLES {
        return Err(error::Error::InvalidArgument(format!(
            "bake requires at least {MIN_SAMPLES} samples, got {samples}"
        )));
    }

    let last = (samples - 1) as f64;
    Ok((0..samples).map(|i| f(i as f64 / last)).collect())
}

/// Total length of the polyline through `points`: the sum of consecutive
/// pairwise distances.
///
/// This is a lower bound on the arc length of the curve the points were
/// sampled from, and refining the sampling never decreases it. Sequences
/// with fewer than two points measure `0.0`.
pub fn polyline_length<P: PointLike>(points: &[P]) -> f64 {
    points.windows(2).map(|pair| pair[0].distance(pair[1])).sum()
}
