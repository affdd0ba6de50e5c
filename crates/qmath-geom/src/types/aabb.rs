// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use qmath_core::{Mat3x4, Vec3};

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `mins` components are less than or equal to `maxs` components.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    mins: Vec3,
    maxs: Vec3,
}

impl Aabb {
    /// Constructs a box from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `mins` is greater than its counterpart in
    /// `maxs` (or either is NaN).
    #[must_use]
    pub fn new(mins: Vec3, maxs: Vec3) -> Self {
        assert!(
            mins[0] <= maxs[0] && mins[1] <= maxs[1] && mins[2] <= maxs[2],
            "invalid AABB: mins {mins:?} > maxs {maxs:?}"
        );
        Self { mins, maxs }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn mins(&self) -> Vec3 {
        self.mins
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn maxs(&self) -> Vec3 {
        self.maxs
    }

    /// Builds a box centered at `center` with half-extents `hx, hy, hz`.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, hx: f32, hy: f32, hz: f32) -> Self {
        let he = Vec3::new(hx, hy, hz);
        Self::new(center.sub(&he), center.add(&he))
    }

    /// Center point of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.mins.lerp(&self.maxs, 0.5)
    }

    /// Selects a corner: bit `i` of `select` picks `mins[i]` when set and
    /// `maxs[i]` when clear.
    ///
    /// This is the same convention plane signbits use, so
    /// `corner(plane.signbits())` is the corner furthest along the plane
    /// normal.
    #[must_use]
    pub fn corner(&self, select: u8) -> Vec3 {
        let mut out = self.maxs;
        for i in 0..3 {
            if select & (1 << i) != 0 {
                out[i] = self.mins[i];
            }
        }
        out
    }

    /// Returns `true` if `p` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, p: &Vec3) -> bool {
        (0..3).all(|i| self.mins[i] <= p[i] && p[i] <= self.maxs[i])
    }

    /// Returns `true` if this box overlaps another (inclusive on faces).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|i| self.maxs[i] >= other.mins[i] && self.mins[i] <= other.maxs[i])
    }

    /// Returns the union of two boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut mins = self.mins;
        let mut maxs = self.maxs;
        for i in 0..3 {
            mins[i] = mins[i].min(other.mins[i]);
            maxs[i] = maxs[i].max(other.maxs[i]);
        }
        Self { mins, maxs }
    }

    /// Grows the box by a uniform margin `m` in all directions.
    ///
    /// # Panics
    /// Panics if a negative margin would invert the box.
    #[must_use]
    pub fn inflate(&self, m: f32) -> Self {
        let delta = Vec3::splat(m);
        Self::new(self.mins.sub(&delta), self.maxs.add(&delta))
    }

    /// Computes the box that bounds this one after transformation by `xf`.
    ///
    /// Evaluates the eight corners under the affine transform and builds a
    /// new axis-aligned box containing them.
    #[must_use]
    pub fn transformed(&self, xf: &Mat3x4) -> Self {
        let first = xf.transform_point(&self.corner(0));
        let mut out = Self {
            mins: first,
            maxs: first,
        };
        for select in 1..8 {
            out = out.union_point(&xf.transform_point(&self.corner(select)));
        }
        out
    }

    /// Builds the minimal box that contains all `points`.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let seed = Self {
            mins: *first,
            maxs: *first,
        };
        Some(rest.iter().fold(seed, |acc, p| acc.union_point(p)))
    }

    fn union_point(&self, p: &Vec3) -> Self {
        let mut mins = self.mins;
        let mut maxs = self.maxs;
        for i in 0..3 {
            mins[i] = mins[i].min(p[i]);
            maxs[i] = maxs[i].max(p[i]);
        }
        Self { mins, maxs }
    }
}
