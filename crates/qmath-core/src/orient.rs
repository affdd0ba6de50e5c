// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Orientation helpers: Euler angles to basis vectors, perpendiculars,
//! plane projection, and arbitrary-axis rotation.
//!
//! Angle triples are stored in a [`Vec3`] indexed by [`PITCH`], [`YAW`] and
//! [`ROLL`], in degrees. The world is Z-up: yaw turns about +Z, pitch about
//! the lateral axis, roll about the forward axis.

use crate::scalar::{deg_to_rad, rad_to_deg};
use crate::{Mat3, Vec3};

/// Index of the pitch angle (up/down) in an angle triple.
pub const PITCH: usize = 0;
/// Index of the yaw angle (left/right) in an angle triple.
pub const YAW: usize = 1;
/// Index of the roll angle (fall over) in an angle triple.
pub const ROLL: usize = 2;

/// Forward/right/up frame derived from an angle triple.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Basis {
    /// Direction the frame is facing.
    pub forward: Vec3,
    /// Direction to the right of `forward`.
    pub right: Vec3,
    /// Direction above `forward`.
    pub up: Vec3,
}

/// Converts `(pitch, yaw, roll)` in degrees into forward/right/up vectors.
///
/// With `sp, cp`, `sy, cy`, `sr, cr` the sines and cosines of pitch, yaw and
/// roll:
///
/// ```text
/// forward = ( cp*cy,             cp*sy,             -sp   )
/// right   = (-sr*sp*cy + cr*sy, -sr*sp*sy - cr*cy, -sr*cp )
/// up      = ( cr*sp*cy + sr*sy,  cr*sp*sy - sr*cy,  cr*cp )
/// ```
///
/// Positive pitch looks down. Cameras, projectile launches and view bobbing
/// are all written against exactly these signs.
///
/// # Examples
/// ```
/// use qmath_core::{angle_vectors, Vec3};
/// let b = angle_vectors(&Vec3::ZERO);
/// assert_eq!(b.forward.to_array(), [1.0, 0.0, 0.0]);
/// assert_eq!(b.up.to_array(), [0.0, 0.0, 1.0]);
/// ```
pub fn angle_vectors(angles: &Vec3) -> Basis {
    let (sy, cy) = libm::sincosf(deg_to_rad(angles[YAW]));
    let (sp, cp) = libm::sincosf(deg_to_rad(angles[PITCH]));
    let (sr, cr) = libm::sincosf(deg_to_rad(angles[ROLL]));

    Basis {
        forward: Vec3::new(cp * cy, cp * sy, -sp),
        right: Vec3::new(-sr * sp * cy + cr * sy, -sr * sp * sy - cr * cy, -sr * cp),
        up: Vec3::new(cr * sp * cy + sr * sy, cr * sp * sy - sr * cy, cr * cp),
    }
}

/// Converts a direction into `(pitch, yaw, 0)` degrees.
///
/// Yaw and pitch are reported in `[0, 360)`. A vector with no horizontal
/// component gets yaw `0` and pitch `90` (pointing up) or `270` otherwise.
///
/// Pitch here is positive for upward directions, the opposite sign of
/// [`angle_vectors`]; callers feeding the result back must negate pitch.
pub fn vector_to_angles(v: &Vec3) -> Vec3 {
    let (pitch, yaw) = if v[0] == 0.0 && v[1] == 0.0 {
        (if v[2] > 0.0 { 90.0 } else { 270.0 }, 0.0)
    } else {
        let mut yaw = rad_to_deg(libm::atan2f(v[1], v[0]));
        if yaw < 0.0 {
            yaw += 360.0;
        }
        let forward = libm::sqrtf(v[0] * v[0] + v[1] * v[1]);
        let mut pitch = rad_to_deg(libm::atan2f(v[2], forward));
        if pitch < 0.0 {
            pitch += 360.0;
        }
        (pitch, yaw)
    };
    let mut out = Vec3::ZERO;
    out[PITCH] = pitch;
    out[YAW] = yaw;
    out
}

/// Orthogonal projection of `point` onto the plane through the origin with
/// the given `normal`.
///
/// `normal` need not be unit length; the projection divides by
/// `dot(normal, normal)`. A zero normal is not guarded: the division
/// produces infinities/NaN in the result.
pub fn project_point_on_plane(point: &Vec3, normal: &Vec3) -> Vec3 {
    let inv_denom = 1.0 / normal.dot(normal);
    let d = normal.dot(point) * inv_denom;
    let n = normal.scale(inv_denom);
    point.sub(&n.scale(d))
}

/// Returns a unit vector perpendicular to `src`.
///
/// `src` is assumed normalized. The coordinate axis with the strictly
/// smallest `|src[i]|` (scanning from X, first hit wins ties) is projected
/// onto the plane orthogonal to `src` and normalized.
///
/// A zero `src` has no meaningful answer; the result is unspecified
/// (currently NaN components).
pub fn perpendicular_vector(src: &Vec3) -> Vec3 {
    let mut pos = 0;
    let mut min_elem = 1.0_f32;
    for i in 0..3 {
        if src[i].abs() < min_elem {
            pos = i;
            min_elem = src[i].abs();
        }
    }
    let mut axis = Vec3::ZERO;
    axis[pos] = 1.0;

    project_point_on_plane(&axis, src).normalized()
}

/// Rotates `point` by `degrees` about the axis `dir` (right-handed).
///
/// `dir` is used as-is to build the rotation frame, so it should be
/// normalized by the caller. The frame `[vr | vup | dir]` (with `vr` from
/// [`perpendicular_vector`] and `vup = vr × dir`) is conjugated with a
/// Z rotation: `R = F * Rz(degrees) * Fᵀ`.
///
/// # Examples
/// ```
/// use qmath_core::{rotate_point_around_vector, Vec3};
/// let p = rotate_point_around_vector(&Vec3::UNIT_Z, &Vec3::UNIT_X, 90.0);
/// assert!((p.y() - 1.0).abs() < 1e-6 && p.x().abs() < 1e-6);
/// ```
pub fn rotate_point_around_vector(dir: &Vec3, point: &Vec3, degrees: f32) -> Vec3 {
    let vf = *dir;
    let vr = perpendicular_vector(dir);
    let vup = vr.cross(&vf);

    let frame = Mat3::from_columns(vr, vup, vf);
    let rot = frame
        .concat(&Mat3::rotation_z(deg_to_rad(degrees)))
        .concat(&frame.transpose());
    rot.transform(point)
}
