// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used, clippy::float_cmp)]
use qmath_core::{Mat3, Mat3x4, Vec3};
use qmath_geom::Aabb;

#[test]
fn corner_selection_follows_signbits() {
    let b = Aabb::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(b.corner(0), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(b.corner(0b001), Vec3::new(-1.0, 2.0, 3.0));
    assert_eq!(b.corner(0b110), Vec3::new(1.0, -2.0, -3.0));
    assert_eq!(b.corner(0b111), Vec3::new(-1.0, -2.0, -3.0));
}

#[test]
fn union_and_inflate() {
    let a = Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 1.0, 1.0);
    let b = Aabb::from_center_half_extents(Vec3::new(4.0, 0.0, 0.0), 1.0, 1.0, 1.0);
    assert!(!a.overlaps(&b));
    let u = a.union(&b);
    assert_eq!(u.mins(), Vec3::new(-1.0, -1.0, -1.0));
    assert_eq!(u.maxs(), Vec3::new(5.0, 1.0, 1.0));
    assert_eq!(u.center(), Vec3::new(2.0, 0.0, 0.0));
    assert!(a.inflate(1.0).overlaps(&b));
}

#[test]
fn faces_are_inclusive() {
    let a = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
    let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    assert!(a.overlaps(&b));
    assert!(a.contains_point(&Vec3::new(1.0, 0.5, 0.0)));
    assert!(!a.contains_point(&Vec3::new(1.01, 0.5, 0.0)));
}

#[test]
fn from_points_handles_empty_and_spread() {
    assert!(Aabb::from_points(&[]).is_none());
    let pts = [
        Vec3::new(3.0, -1.0, 0.0),
        Vec3::new(-2.0, 5.0, 1.0),
        Vec3::new(0.0, 0.0, -4.0),
    ];
    let b = Aabb::from_points(&pts).unwrap();
    assert_eq!(b.mins(), Vec3::new(-2.0, -1.0, -4.0));
    assert_eq!(b.maxs(), Vec3::new(3.0, 5.0, 1.0));
}

#[test]
fn transformed_bounds_rotated_corners() {
    let b = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0));
    let xf = Mat3x4::from_parts(&Mat3::rotation_z(core::f32::consts::FRAC_PI_2), Vec3::new(10.0, 0.0, 0.0));
    let t = b.transformed(&xf);
    // Rotating by a quarter turn about Z swaps the X and Y extents.
    let size = t.maxs().sub(&t.mins());
    assert!((size.x() - 1.0).abs() < 1e-5);
    assert!((size.y() - 2.0).abs() < 1e-5);
    assert!((size.z() - 1.0).abs() < 1e-5);
    assert!(t.contains_point(&xf.transform_point(&b.center())));
}

#[test]
#[should_panic(expected = "invalid AABB")]
fn inverted_box_is_rejected() {
    let _ = Aabb::new(Vec3::splat(1.0), Vec3::ZERO);
}
