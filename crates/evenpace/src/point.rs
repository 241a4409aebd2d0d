//! The capability interface point types must provide, with implementations
//! for scalars and the `glam` double-precision vectors.

use std::{
    fmt::Debug,
    ops::{Add, Mul, Sub},
};

use glam::{DVec2, DVec3};

/// A value the pipeline can march through: a scalar or a fixed-dimension
/// vector.
///
/// The arithmetic supertraits supply displacements (`Sub`), adding a scaled
/// displacement back onto a point (`Add` + `Mul<f64>`), and thereby linear
/// interpolation; [`distance`](Self::distance) supplies the non-negative
/// separation between two points. All points fed through one pipeline run
/// share a single implementing type; the generics make mixing types a
/// compile error rather than a runtime one.
pub trait PointLike:
    Copy + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
    /// Distance between `self` and `other`: the Euclidean magnitude of the
    /// displacement, or the absolute difference for scalars.
    fn distance(self, other: Self) -> f64;

    /// Linearly interpolate from `self` to `other` at parameter `t`.
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Move `step` units from `self` toward `target` along the straight
    /// segment between them.
    ///
    /// Requires `self.distance(target) > 0`; callers must not ask for a
    /// direction on a zero-length segment.
    fn advance_toward(self, target: Self, step: f64) -> Self {
        let distance = self.distance(target);
        debug_assert!(distance > 0.0, "advance_toward on a zero-length segment");
        // Scaled addition of the unit direction.
        self + (target - self) * (step / distance)
    }
}

impl PointLike for f64 {
    fn distance(self, other: Self) -> f64 {
        (other - self).abs()
    }

    /// For scalars the direction degenerates to the sign of the
    /// displacement, so the step is applied exactly.
    fn advance_toward(self, target: Self, step: f64) -> Self {
        debug_assert!(self != target, "advance_toward on a zero-length segment");
        self + (target - self).signum() * step
    }
}

impl PointLike for DVec2 {
    fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }
}

impl PointLike for DVec3 {
    fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }
}
