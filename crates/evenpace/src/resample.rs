//! Fixed-spacing resampling of polylines, with carry state for chaining
//! consecutive path segments.

use crate::{error, point::PointLike};

/// Output of [`resample_linear`]: the evenly spaced points plus the carry
/// distance left unconsumed at the final vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Resampled<P> {
    /// Points spaced `delta` apart along the input polyline.
    pub points: Vec<P>,
    /// Distance still owed at the end of the input, to be threaded into the
    /// next chained call.
    ///
    /// `Some(0.0)` means the march landed exactly on the final vertex; it is
    /// distinct from "no carry" and makes the next chained call emit a point
    /// right at the join. Present whenever the input was valid.
    pub carry: Option<f64>,
}

/// Walk the polyline through `points` and emit points spaced `delta` apart
/// along it.
///
/// When `carry_in` is absent the output is seeded with the first input
/// point. When it is present the spacing budget of the previous segment is
/// still open: the first march step consumes `carry_in` instead of `delta`
/// (exactly once), so chained calls concatenate into the same sequence a
/// single call over the joined polyline would produce.
///
/// Zero-length input segments are snapped over in a single iteration and
/// contribute no output. `total_length` is a capacity hint only and never
/// affects the result.
pub fn resample_linear<P: PointLike>(
    points: &[P],
    delta: f64,
    total_length: Option<f64>,
    carry_in: Option<f64>,
) -> error::Result<Resampled<P>> {
    if delta <= 0.0 || !delta.is_finite() {
        return Err(error::Error::InvalidArgument(format!(
            "resample spacing must be strictly positive, got {delta}"
        )));
    }
    if points.len() < 2 {
        return Err(error::Error::InvalidArgument(format!(
            "resampling requires at least 2 points, got {}",
            points.len()
        )));
    }

    let mut out = match total_length {
        // Emitted points are bounded by the remaining length over the
        // spacing, plus the seeded start.
        Some(total) if total.is_finite() => {
            let remaining = (total - carry_in.unwrap_or(0.0)).max(0.0);
            Vec::with_capacity(((remaining / delta).ceil() as usize).saturating_add(1))
        }
        _ => Vec::new(),
    };

    if carry_in.is_none() {
        out.push(points[0]);
    }

    let mut pos = points[0];
    let mut target_index = 1;
    // Budget for the next march step. Consumed exactly once per iteration:
    // the carry covers the first step only, a vertex overshoot the step
    // right after a snap, and `delta` every other time.
    let mut step = carry_in.unwrap_or(delta);

    while let Some(&target) = points.get(target_index) {
        let distance = pos.distance(target);
        let distance_left = distance - step;

        if distance_left > 0.0 {
            // The budget runs out inside this segment: emit a point and keep
            // marching toward the same vertex.
            pos = pos.advance_toward(target, step);
            out.push(pos);
            step = delta;
        } else {
            // The budget reaches past the vertex, or the segment is
            // zero-length: snap to the vertex and put the overshoot toward
            // the next segment.
            pos = target;
            target_index += 1;
            step = -distance_left;
        }
    }

    log::trace!(
        "resampled {} points into {} at spacing {delta}, carry {step}",
        points.len(),
        out.len(),
    );

    // The loop always ends in the snap branch, so `step` holds the
    // unconsumed overshoot at the final vertex.
    Ok(Resampled {
        points: out,
        carry: Some(step),
    })
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::error;

    #[test]
    fn spacing_matches_delta() -> error::Result<()> {
        let resampled = resample_linear(&[0.0, 1.0, 2.0, 3.0], 0.75, None, None)?;
        assert_eq!(resampled.points, vec![0.0, 0.75, 1.5, 2.25]);
        assert_eq!(resampled.carry, Some(0.0));
        for pair in resampled.points.windows(2) {
            assert!((pair[0].distance(pair[1]) - 0.75).abs() < 1e-12);
        }
        Ok(())
    }

    #[test]
    fn overshoot_carries_across_vertices() -> error::Result<()> {
        let resampled = resample_linear(&[0.0, 1.0, 2.0, 3.0], 1.5, None, None)?;
        assert_eq!(resampled.points, vec![0.0, 1.5]);
        // The march lands exactly on the final vertex: zero carry, but a
        // carry nonetheless.
        assert_eq!(resampled.carry, Some(0.0));
        Ok(())
    }

    #[test]
    fn chained_calls_match_single_call() -> error::Result<()> {
        let full = resample_linear(&[0.0, 1.0, 2.0, 3.0], 1.5, None, None)?;

        let head = resample_linear(&[0.0, 1.0], 1.5, None, None)?;
        let tail = resample_linear(&[1.0, 2.0, 3.0], 1.5, None, head.carry)?;

        let mut joined = head.points.clone();
        joined.extend_from_slice(&tail.points);
        assert_eq!(joined, full.points);
        assert_eq!(tail.carry, full.carry);
        Ok(())
    }

    #[test]
    fn zero_carry_emits_the_join_point() -> error::Result<()> {
        let resampled = resample_linear(&[5.0, 7.0], 1.0, None, Some(0.0))?;
        // No seeded start; the zero budget places the first point exactly at
        // the join vertex.
        assert_eq!(resampled.points, vec![5.0, 6.0]);
        Ok(())
    }

    #[test]
    fn zero_length_segments_are_skipped() -> error::Result<()> {
        let resampled = resample_linear(&[0.0, 0.0, 0.0, 5.0], 1.0, None, None)?;
        assert_eq!(resampled.points, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(resampled.carry, Some(0.0));
        Ok(())
    }

    #[test]
    fn landing_on_interior_vertex_emits_it_once() -> error::Result<()> {
        let resampled = resample_linear(&[0.0, 1.0, 2.0], 1.0, None, None)?;
        assert_eq!(resampled.points, vec![0.0, 1.0]);
        assert_eq!(resampled.carry, Some(0.0));
        Ok(())
    }

    #[test]
    fn undershoot_is_returned_as_carry() -> error::Result<()> {
        let resampled = resample_linear(&[0.0, 1.0], 1.5, None, None)?;
        assert_eq!(resampled.points, vec![0.0]);
        assert_eq!(resampled.carry, Some(0.5));
        Ok(())
    }

    #[test]
    fn planar_corner_keeps_arc_spacing() -> error::Result<()> {
        let corner = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
        ];
        let resampled = resample_linear(&corner, 0.75, None, None)?;
        assert_eq!(resampled.points[0], DVec2::new(0.0, 0.0));
        assert_eq!(resampled.points[1], DVec2::new(0.75, 0.0));
        // 1.5 units along the polyline: around the corner, half a unit up.
        assert_eq!(resampled.points[2], DVec2::new(1.0, 0.5));
        assert_eq!(resampled.carry, Some(0.25));
        Ok(())
    }

    #[test]
    fn rejects_non_positive_or_non_finite_spacing() {
        for delta in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = resample_linear(&[0.0, 1.0], delta, None, None);
            assert!(matches!(result, Err(error::Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn rejects_short_inputs() {
        assert!(resample_linear::<f64>(&[], 1.0, None, None).is_err());
        assert!(resample_linear(&[1.0], 1.0, None, None).is_err());
    }

    #[test]
    fn length_hint_does_not_change_output() -> error::Result<()> {
        let bare = resample_linear(&[0.0, 1.0, 2.0, 3.0], 0.7, None, None)?;
        for hint in [0.0, 1.0, 3.0, 100.0] {
            let hinted = resample_linear(&[0.0, 1.0, 2.0, 3.0], 0.7, Some(hint), None)?;
            assert_eq!(hinted, bare);
        }
        Ok(())
    }
}
