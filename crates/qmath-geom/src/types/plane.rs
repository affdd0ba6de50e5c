// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use qmath_core::Vec3;

/// Axial classification of a plane normal.
///
/// A plane is axial when its normal is exactly `+X`, `+Y` or `+Z`. Axial
/// planes can be classified against a box with a single comparison per
/// extent (see [`crate::box_on_plane_side_fast`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlaneKind {
    /// Normal is `(1, 0, 0)`.
    AxialX,
    /// Normal is `(0, 1, 0)`.
    AxialY,
    /// Normal is `(0, 0, 1)`.
    AxialZ,
    /// Any other orientation.
    NonAxial,
}

impl PlaneKind {
    /// Classifies a normal.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn of(normal: &Vec3) -> Self {
        let n = normal.to_array();
        let unit = |axis: usize| (0..3).all(|i| n[i] == if i == axis { 1.0 } else { 0.0 });
        if unit(0) {
            Self::AxialX
        } else if unit(1) {
            Self::AxialY
        } else if unit(2) {
            Self::AxialZ
        } else {
            Self::NonAxial
        }
    }

    /// Axis index for axial planes, `None` otherwise.
    #[must_use]
    pub const fn axis(self) -> Option<usize> {
        match self {
            Self::AxialX => Some(0),
            Self::AxialY => Some(1),
            Self::AxialZ => Some(2),
            Self::NonAxial => None,
        }
    }
}

/// Computes the signbits of a normal: bit `i` is set iff `normal[i] < 0`.
///
/// `-0.0` does not set its bit.
#[must_use]
pub fn signbits_for(normal: &Vec3) -> u8 {
    let mut bits = 0u8;
    for i in 0..3 {
        if normal[i] < 0.0 {
            bits |= 1 << i;
        }
    }
    bits
}

/// Oriented plane `{ p : normal · p = dist }`.
///
/// Invariants:
/// - `signbits()` always equals [`signbits_for`] of the current normal.
/// - `kind()` always equals [`PlaneKind::of`] of the current normal.
///
/// The normal is expected to be unit length but is not normalized here; BSP
/// loaders hand over normals exactly as stored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    normal: Vec3,
    dist: f32,
    signbits: u8,
    kind: PlaneKind,
}

impl Plane {
    /// Creates a plane and derives its signbits and kind from `normal`.
    #[must_use]
    pub fn new(normal: Vec3, dist: f32) -> Self {
        Self {
            normal,
            dist,
            signbits: signbits_for(&normal),
            kind: PlaneKind::of(&normal),
        }
    }

    /// Plane through `point` facing along `normal`.
    #[must_use]
    pub fn from_point_normal(point: &Vec3, normal: Vec3) -> Self {
        Self::new(normal, normal.dot(point))
    }

    /// Plane normal.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed offset from the origin along the normal.
    #[must_use]
    pub fn dist(&self) -> f32 {
        self.dist
    }

    /// Sign bits of the normal (bit `i` set iff `normal[i] < 0`).
    #[must_use]
    pub fn signbits(&self) -> u8 {
        self.signbits
    }

    /// Axial classification of the normal.
    #[must_use]
    pub fn kind(&self) -> PlaneKind {
        self.kind
    }

    /// Replaces the normal, recomputing signbits and kind.
    pub fn set_normal(&mut self, normal: Vec3) {
        self.normal = normal;
        self.signbits = signbits_for(&normal);
        self.kind = PlaneKind::of(&normal);
    }

    /// Replaces the offset.
    pub fn set_dist(&mut self, dist: f32) {
        self.dist = dist;
    }

    /// Signed distance of `p` from the plane; positive on the front side.
    #[must_use]
    pub fn distance_to(&self, p: &Vec3) -> f32 {
        self.normal.dot(p) - self.dist
    }

    /// The same plane facing the other way.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(-self.normal, -self.dist)
    }
}
