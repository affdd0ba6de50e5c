// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Geometry types consumed by BSP traversal (boxes and planes).
//!
//! Notes:
//! - Box containment and overlap are inclusive on faces.
//! - Plane signbits are a cached function of the normal and are kept in sync
//!   by every mutator.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Oriented planes with cached signbits and axial classification."]
pub mod plane;
