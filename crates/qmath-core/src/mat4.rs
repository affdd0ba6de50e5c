// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::orient::{PITCH, ROLL, YAW};
use crate::scalar::deg_to_rad;
use crate::Vec3;

/// Distance to the near clip plane baked into [`Mat4::projection`].
pub const NEAR_PLANE: f32 = 4.0;

/// Homogeneous 4-component vector used with [`Mat4::transform4`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Promotes a point to homogeneous coordinates (`w = 1`).
    pub const fn from_point(p: Vec3) -> Self {
        let [x, y, z] = p.to_array();
        Self::new(x, y, z, 1.0)
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }
}

/// Column‑major 4×4 matrix in GL layout.
///
/// - Element `(row, col)` lives at index `col * 4 + row`; translation
///   occupies indices 12..15.
/// - [`Mat4::multiply`] computes `self * rhs`, so `a.multiply(&b)` applies
///   `b` first when transforming column vectors. Swapping operands yields a
///   different matrix.
///
/// # Examples
/// ```
/// use qmath_core::{Mat4, Vec4};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = t.transform4(&Vec4::new(2.0, 4.0, -1.0, 1.0));
/// assert_eq!(p.to_array(), [7.0, 1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a translation matrix.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                tx, ty, tz, 1.0,    // col 3 (translation)
            ],
        }
    }

    /// Rotation of `degrees` about the axis `(x, y, z)`, GL `glRotate` style.
    ///
    /// The axis is used as given; pass a unit axis for a pure rotation.
    pub fn rotation(degrees: f32, x: f32, y: f32, z: f32) -> Self {
        let (s, c) = libm::sincosf(deg_to_rad(degrees));
        let t = 1.0 - c;
        Self::new([
            x * x * t + c,
            y * x * t + z * s,
            x * z * t - y * s,
            0.0,
            x * y * t - z * s,
            y * y * t + c,
            y * z * t + x * s,
            0.0,
            x * z * t + y * s,
            y * z * t - x * s,
            z * z * t + c,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Perspective projection for a `wdivh` aspect ratio and a vertical
    /// field of view of `fovy` degrees.
    ///
    /// The near plane sits at [`NEAR_PLANE`] and the far plane at infinity,
    /// so clip-space depth is `-z - 2 * NEAR_PLANE` against `w = -z`.
    pub fn projection(wdivh: f32, fovy: f32) -> Self {
        let ymax = NEAR_PLANE * libm::tanf(deg_to_rad(fovy) * 0.5);
        let ymin = -ymax;
        let xmin = ymin * wdivh;
        let xmax = ymax * wdivh;

        let mut proj = [0.0; 16];
        proj[0] = (2.0 * NEAR_PLANE) / (xmax - xmin);
        proj[8] = (xmax + xmin) / (xmax - xmin);
        proj[5] = (2.0 * NEAR_PLANE) / (ymax - ymin);
        proj[9] = (ymax + ymin) / (ymax - ymin);
        proj[10] = -1.0;
        proj[14] = -2.0 * NEAR_PLANE;
        proj[11] = -1.0;
        Self::new(proj)
    }

    /// World-to-eye matrix for a camera at `vieworg` looking along
    /// `viewangles` (pitch, yaw, roll in degrees).
    ///
    /// Starts from the Z-up to GL eye-space swizzle (`-90°` about X, then
    /// `90°` about Z), applies `-roll`, `-pitch`, `-yaw` about X, Y, Z, and
    /// finally translates by `-vieworg`.
    pub fn model_view(viewangles: &Vec3, vieworg: &Vec3) -> Self {
        Self::identity()
            .multiply(&Self::rotation(-90.0, 1.0, 0.0, 0.0))
            .multiply(&Self::rotation(90.0, 0.0, 0.0, 1.0))
            .multiply(&Self::rotation(-viewangles[ROLL], 1.0, 0.0, 0.0))
            .multiply(&Self::rotation(-viewangles[PITCH], 0.0, 1.0, 0.0))
            .multiply(&Self::rotation(-viewangles[YAW], 0.0, 0.0, 1.0))
            .multiply(&Self::translation(-vieworg[0], -vieworg[1], -vieworg[2]))
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns the matrix as a column‑major array.
    pub const fn to_array(self) -> [f32; 16] {
        self.data
    }

    const fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Transforms a homogeneous vector: `self * v`.
    pub fn transform4(&self, v: &Vec4) -> Vec4 {
        let [x, y, z, w] = v.data;
        let mut out = [0.0; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = self.at(row, 0) * x + self.at(row, 1) * y + self.at(row, 2) * z + self.at(row, 3) * w;
        }
        Vec4 { data: out }
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

/// Projects a world-space point to screen fractions.
///
/// Runs `input` through [`Mat4::model_view`] and [`Mat4::projection`],
/// divides by `w`, and maps each NDC axis from `[-1, 1]` to `[0, 1]`
/// (`x` left to right, `y` bottom to top). Points behind the camera are not
/// flagged; their fractions fall outside `[0, 1]` or flip sign.
///
/// # Examples
/// ```
/// use qmath_core::{project, Vec3};
/// // A point straight ahead lands in the centre of the screen.
/// let s = project(&Vec3::new(100.0, 0.0, 0.0), &Vec3::ZERO, &Vec3::ZERO, 4.0 / 3.0, 90.0);
/// assert!((s.x() - 0.5).abs() < 1e-5 && (s.y() - 0.5).abs() < 1e-5);
/// ```
pub fn project(input: &Vec3, viewangles: &Vec3, vieworg: &Vec3, wdivh: f32, fovy: f32) -> Vec3 {
    let model_view = Mat4::model_view(viewangles, vieworg);
    let proj = Mat4::projection(wdivh, fovy);

    let eye = model_view.transform4(&Vec4::from_point(*input));
    let [x, y, z, w] = proj.transform4(&eye).to_array();

    Vec3::new((1.0 + x / w) / 2.0, (1.0 + y / w) / 2.0, (1.0 + z / w) / 2.0)
}
