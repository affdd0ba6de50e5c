// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::float_cmp)]
use proptest::prelude::*;
use qmath_core::{
    angle_vectors, perpendicular_vector, rotate_point_around_vector, Mat3, Mat3x4, Vec3, PITCH,
    ROLL, YAW,
};

fn approx_eq3(a: Vec3, b: [f32; 3], tol: f32) {
    for (i, expected) in b.iter().enumerate() {
        let diff = (a[i] - expected).abs();
        assert!(diff <= tol, "component {i}: expected {expected}, got {} (diff {diff})", a[i]);
    }
}

fn angles(pitch: f32, yaw: f32, roll: f32) -> Vec3 {
    let mut a = Vec3::ZERO;
    a[PITCH] = pitch;
    a[YAW] = yaw;
    a[ROLL] = roll;
    a
}

#[test]
fn rotate_about_z_by_quarter_turn() {
    let p = rotate_point_around_vector(&Vec3::UNIT_Z, &Vec3::UNIT_X, 90.0);
    approx_eq3(p, [0.0, 1.0, 0.0], 1e-6);
}

#[test]
fn rotate_about_x_moves_y_to_z() {
    let p = rotate_point_around_vector(&Vec3::UNIT_X, &Vec3::UNIT_Y, 90.0);
    approx_eq3(p, [0.0, 0.0, 1.0], 1e-6);
}

#[test]
fn full_turn_returns_to_start() {
    let dir = Vec3::new(1.0, 2.0, 3.0).normalized();
    let point = Vec3::new(-4.0, 0.5, 2.0);
    let p = rotate_point_around_vector(&dir, &point, 360.0);
    approx_eq3(p, point.to_array(), 1e-5);
}

#[test]
fn angle_vectors_right_and_up_follow_roll_and_yaw() {
    // Rolling a quarter turn tips right down and up to the left.
    let b = angle_vectors(&angles(0.0, 0.0, 90.0));
    approx_eq3(b.right, [0.0, 0.0, -1.0], 1e-6);
    approx_eq3(b.up, [0.0, -1.0, 0.0], 1e-6);

    // Facing +Y, right is +X.
    let b = angle_vectors(&angles(0.0, 90.0, 0.0));
    approx_eq3(b.forward, [0.0, 1.0, 0.0], 1e-6);
    approx_eq3(b.right, [1.0, 0.0, 0.0], 1e-6);
    approx_eq3(b.up, [0.0, 0.0, 1.0], 1e-6);

    // Pitch and roll together, checked against the expanded products.
    let (p, y, r) = (30.0_f32, 45.0_f32, 60.0_f32);
    let (sp, cp) = p.to_radians().sin_cos();
    let (sy, cy) = y.to_radians().sin_cos();
    let (sr, cr) = r.to_radians().sin_cos();
    let b = angle_vectors(&angles(p, y, r));
    approx_eq3(b.right, [-sr * sp * cy + cr * sy, -sr * sp * sy - cr * cy, -sr * cp], 1e-5);
    approx_eq3(b.up, [cr * sp * cy + sr * sy, cr * sp * sy - sr * cy, cr * cp], 1e-5);
}

#[test]
fn angle_vectors_identity_frame() {
    let b = angle_vectors(&Vec3::ZERO);
    approx_eq3(b.forward, [1.0, 0.0, 0.0], 1e-7);
    approx_eq3(b.right, [0.0, -1.0, 0.0], 1e-7);
    approx_eq3(b.up, [0.0, 0.0, 1.0], 1e-7);
}

#[test]
fn angle_vectors_yaw_and_pitch_signs() {
    let b = angle_vectors(&angles(0.0, 90.0, 0.0));
    approx_eq3(b.forward, [0.0, 1.0, 0.0], 1e-6);
    approx_eq3(b.right, [1.0, 0.0, 0.0], 1e-6);

    // Positive pitch looks down.
    let b = angle_vectors(&angles(90.0, 0.0, 0.0));
    approx_eq3(b.forward, [0.0, 0.0, -1.0], 1e-6);
    approx_eq3(b.up, [1.0, 0.0, 0.0], 1e-6);

    // A quarter roll swings up onto the unrolled right vector.
    let b = angle_vectors(&angles(0.0, 0.0, 90.0));
    approx_eq3(b.right, [0.0, 0.0, -1.0], 1e-6);
    approx_eq3(b.up, [0.0, -1.0, 0.0], 1e-6);
}

#[test]
fn concat_rotations_multiplies_row_major() {
    let a = Mat3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let b = Mat3::new([[9.0, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]]);
    assert_eq!(
        a.concat(&b).to_rows(),
        [[30.0, 24.0, 18.0], [84.0, 69.0, 54.0], [138.0, 114.0, 90.0]]
    );
    assert_eq!(Mat3::IDENTITY.concat(&a), a);
}

#[test]
fn concat_transforms_composes_translation() {
    let rot = Mat3::new([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    let outer = Mat3x4::from_parts(&rot, Vec3::new(10.0, 0.0, 0.0));
    let inner = Mat3x4::from_parts(&Mat3::IDENTITY, Vec3::new(1.0, 2.0, 3.0));
    let composed = outer.concat(&inner);
    // t = R1 * t2 + t1 = (-2, 1, 3) + (10, 0, 0)
    assert_eq!(composed.translation().to_array(), [8.0, 1.0, 3.0]);
    assert_eq!(composed.rotation(), rot);

    let p = Vec3::new(1.0, 1.0, 1.0);
    assert_eq!(
        composed.transform_point(&p),
        outer.transform_point(&inner.transform_point(&p))
    );
}

proptest! {
    #[test]
    fn identity_concat_leaves_transform_unchanged(rows in prop::array::uniform3(prop::array::uniform4(-1000.0f32..1000.0))) {
        let t = Mat3x4::new(rows);
        prop_assert_eq!(Mat3x4::IDENTITY.concat(&t), t);
        prop_assert_eq!(t.concat(&Mat3x4::IDENTITY), t);
    }

    #[test]
    fn angle_vectors_is_orthonormal(p in -180.0f32..180.0, y in -360.0f32..360.0, r in -180.0f32..180.0) {
        let b = angle_vectors(&angles(p, y, r));
        for v in [b.forward, b.right, b.up] {
            prop_assert!((v.length() - 1.0).abs() < 1e-5);
        }
        prop_assert!(b.forward.dot(&b.right).abs() < 1e-5);
        prop_assert!(b.forward.dot(&b.up).abs() < 1e-5);
        prop_assert!(b.right.dot(&b.up).abs() < 1e-5);
        // (forward, right, up) is left-handed: forward × right = -up.
        let c = b.forward.cross(&b.right);
        for i in 0..3 {
            prop_assert!((c[i] + b.up[i]).abs() < 1e-5);
        }
    }

    #[test]
    fn perpendicular_vector_is_unit_and_orthogonal(v in prop::array::uniform3(-1.0f32..1.0)) {
        let src = Vec3::from(v);
        prop_assume!(src.length() > 1e-2);
        let src = src.normalized();
        let p = perpendicular_vector(&src);
        prop_assert!((p.length() - 1.0).abs() < 1e-5);
        prop_assert!(p.dot(&src).abs() < 1e-5);
    }

    #[test]
    fn rotation_preserves_length(
        axis in prop::array::uniform3(-1.0f32..1.0),
        point in prop::array::uniform3(-100.0f32..100.0),
        degrees in -720.0f32..720.0,
    ) {
        let dir = Vec3::from(axis);
        prop_assume!(dir.length() > 1e-2);
        let dir = dir.normalized();
        let point = Vec3::from(point);
        let out = rotate_point_around_vector(&dir, &point, degrees);
        prop_assert!((out.length() - point.length()).abs() <= 1e-3 * (1.0 + point.length()));
        // The component along the axis is unchanged.
        prop_assert!((out.dot(&dir) - point.dot(&dir)).abs() <= 1e-3 * (1.0 + point.length()));
    }
}
