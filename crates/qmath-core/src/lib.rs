// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! qmath-core: engine math primitives.
//!
//! Vectors, Euler-angle frames, 3×3 rotations and 3×4 transforms, scalar
//! and fixed-point helpers, float list parsing, the game-variant flag, and
//! (behind the default `projection` feature) GL-style 4×4 matrices with a
//! world-to-screen projector.
//!
//! Every function is pure and reentrant: inputs are caller-owned values and
//! results are returned, never written to shared scratch space. The only
//! process-wide state is the write-once [`GameVariant`] cell.
#![forbid(unsafe_code)]

mod compat;
mod error;
mod fixed;
mod mat3;
#[cfg(feature = "projection")]
mod mat4;
mod orient;
mod parse;
mod scalar;
mod vec3;

pub use compat::{
    game_variant, is_hipnotic, is_kurok, is_quake, is_rogue, is_superhot, set_game_variant,
    superhot, GameVariant,
};
pub use error::MathError;
pub use fixed::{invert_24_to_16, FRAC_BITS_16, FRAC_BITS_24, INVERT_SATURATION_THRESHOLD};
pub use mat3::{Mat3, Mat3x4};
#[cfg(feature = "projection")]
pub use mat4::{project, Mat4, Vec4, NEAR_PLANE};
pub use orient::{
    angle_vectors, perpendicular_vector, project_point_on_plane, rotate_point_around_vector,
    vector_to_angles, Basis, PITCH, ROLL, YAW,
};
pub use parse::{atof, parse_floats, CommandTokenizer, Tokenizer, MAX_ARGS};
pub use scalar::{
    angle_mod, deg_to_rad, floor_div_mod, greatest_common_divisor, q_log2, rad_to_deg, rsqrt,
    sin_cos, ANGLE_STEPS,
};
pub use vec3::Vec3;
