// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry for BSP traversal.

This crate provides:
- Axis-aligned bounding boxes (`Aabb`).
- Planes with cached signbits and axial kind (`Plane`, `PlaneKind`).
- Box-versus-plane classification (`box_on_plane_side`) returning `Sides`.

Design notes:
- Float32 throughout, matching the map formats it serves.
- Classification is branch-light: two dot products per call.
"]
#![forbid(unsafe_code)]

mod classify;
/// Foundational geometric types.
pub mod types;

pub use classify::{box_on_plane_side, box_on_plane_side_fast, Sides};
pub use types::aabb::Aabb;
pub use types::plane::{signbits_for, Plane, PlaneKind};
