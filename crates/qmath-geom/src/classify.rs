// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Box-versus-plane side classification.

use bitflags::bitflags;
use qmath_core::Vec3;

use crate::types::aabb::Aabb;
use crate::types::plane::Plane;

bitflags! {
    /// Which side(s) of a plane a box touches.
    ///
    /// Never empty: a box is always at least in front of or behind a plane.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        /// Some point of the box satisfies `normal · p >= dist`.
        const FRONT = 1;
        /// Some point of the box satisfies `normal · p < dist`.
        const BACK = 2;
        /// The plane splits the box.
        const BOTH = Self::FRONT.bits() | Self::BACK.bits();
    }
}

/// Classifies `bbox` against `plane`.
///
/// Evaluates only the two corners that matter: the one furthest along the
/// normal and the one furthest against it, chosen per axis from the plane's
/// signbits. Front wins ties (`>=`), back is strict (`<`).
///
/// Axes where the normal is zero contribute nothing, so boxes that are
/// unbounded along the plane (infinite extents) still classify.
///
/// # Panics
/// Panics if neither side is reported. That needs a NaN in the plane or box,
/// or a corner distance that sums `+inf` and `-inf` across two axes.
#[must_use]
pub fn box_on_plane_side(bbox: &Aabb, plane: &Plane) -> Sides {
    let signbits = plane.signbits();
    let normal = plane.normal();
    let far = bbox.corner(signbits);
    let near = bbox.corner(!signbits & 0b111);

    let mut sides = Sides::empty();
    if plane_dot(&normal, &far) >= plane.dist() {
        sides |= Sides::FRONT;
    }
    if plane_dot(&normal, &near) < plane.dist() {
        sides |= Sides::BACK;
    }
    assert!(!sides.is_empty(), "box_on_plane_side: bad signbits {signbits}");
    sides
}

/// `normal · corner`, skipping axes the normal ignores (`0 * inf` is NaN).
///
/// Terms are accumulated in axis order, so finite inputs give the same bits
/// as a plain dot product.
#[allow(clippy::float_cmp)]
fn plane_dot(normal: &Vec3, corner: &Vec3) -> f32 {
    (0..3)
        .filter(|&i| normal[i] != 0.0)
        .fold(0.0, |acc, i| acc + normal[i] * corner[i])
}

/// [`box_on_plane_side`] with a shortcut for axial planes.
///
/// For an axial plane the box is compared against `dist` on the plane's axis
/// only. A box whose face lies exactly on the plane counts as being on the
/// side of its volume alone, so a box with `maxs[axis] == dist` reports
/// [`Sides::BACK`] here where the general test reports [`Sides::BOTH`].
#[must_use]
pub fn box_on_plane_side_fast(bbox: &Aabb, plane: &Plane) -> Sides {
    let Some(axis) = plane.kind().axis() else {
        return box_on_plane_side(bbox, plane);
    };
    let dist = plane.dist();
    if dist <= bbox.mins()[axis] {
        Sides::FRONT
    } else if dist >= bbox.maxs()[axis] {
        Sides::BACK
    } else {
        Sides::BOTH
    }
}
