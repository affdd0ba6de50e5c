// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::Vec3;

/// Row-major 3×3 matrix used for rotations.
///
/// Orthonormality is not enforced; callers building rotations are
/// responsible for supplying an orthonormal basis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    rows: [[f32; 3]; 3],
}

impl Mat3 {
    /// Identity rotation.
    pub const IDENTITY: Self = Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Creates a matrix from row-major data.
    pub const fn new(rows: [[f32; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Builds a matrix whose columns are `c0`, `c1`, `c2`.
    pub fn from_columns(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::new([
            [c0[0], c1[0], c2[0]],
            [c0[1], c1[1], c2[1]],
            [c0[2], c1[2], c2[2]],
        ])
    }

    /// Rotation about +Z by `radians`, laid out as `[[c, s, 0], [-s, c, 0], [0, 0, 1]]`.
    pub fn rotation_z(radians: f32) -> Self {
        let (s, c) = libm::sincosf(radians);
        Self::new([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Returns the rows as arrays.
    pub const fn to_rows(self) -> [[f32; 3]; 3] {
        self.rows
    }

    /// Element at `(row, col)`.
    pub const fn at(&self, row: usize, col: usize) -> f32 {
        self.rows[row][col]
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let m = &self.rows;
        Self::new([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Concatenates two rotations: `self * rhs`.
    pub fn concat(&self, rhs: &Self) -> Self {
        let a = &self.rows;
        let b = &rhs.rows;
        let mut out = [[0.0; 3]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = a[row][0] * b[0][col] + a[row][1] * b[1][col] + a[row][2] * b[2][col];
            }
        }
        Self::new(out)
    }

    /// Multiplies a column vector: `self * v`.
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        let m = &self.rows;
        Vec3::new(
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        )
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.concat(&rhs)
    }
}

/// Row-major 3×4 affine transform: a 3×3 rotation plus a translation column.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3x4 {
    rows: [[f32; 4]; 3],
}

impl Mat3x4 {
    /// Identity transform.
    pub const IDENTITY: Self = Self::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
    ]);

    /// Creates a transform from row-major data.
    pub const fn new(rows: [[f32; 4]; 3]) -> Self {
        Self { rows }
    }

    /// Builds a transform from a rotation and a translation.
    pub fn from_parts(rotation: &Mat3, translation: Vec3) -> Self {
        let r = rotation.to_rows();
        Self::new([
            [r[0][0], r[0][1], r[0][2], translation[0]],
            [r[1][0], r[1][1], r[1][2], translation[1]],
            [r[2][0], r[2][1], r[2][2], translation[2]],
        ])
    }

    /// Returns the rows as arrays.
    pub const fn to_rows(self) -> [[f32; 4]; 3] {
        self.rows
    }

    /// The 3×3 rotation part.
    pub fn rotation(&self) -> Mat3 {
        let m = &self.rows;
        Mat3::new([
            [m[0][0], m[0][1], m[0][2]],
            [m[1][0], m[1][1], m[1][2]],
            [m[2][0], m[2][1], m[2][2]],
        ])
    }

    /// The translation column.
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.rows[0][3], self.rows[1][3], self.rows[2][3])
    }

    /// Composes two transforms: applying the result equals applying `rhs`
    /// first, then `self`.
    ///
    /// The rotation part is `R1 * R2`; the translation is `R1 * t2 + t1`.
    pub fn concat(&self, rhs: &Self) -> Self {
        let a = &self.rows;
        let b = &rhs.rows;
        let mut out = [[0.0; 4]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for col in 0..3 {
                out_row[col] =
                    a[row][0] * b[0][col] + a[row][1] * b[1][col] + a[row][2] * b[2][col];
            }
            out_row[3] = a[row][0] * b[0][3] + a[row][1] * b[1][3] + a[row][2] * b[2][3] + a[row][3];
        }
        Self::new(out)
    }

    /// Transforms a point (rotation, then translation).
    pub fn transform_point(&self, p: &Vec3) -> Vec3 {
        let m = &self.rows;
        Vec3::new(
            m[0][0] * p[0] + m[0][1] * p[1] + m[0][2] * p[2] + m[0][3],
            m[1][0] * p[0] + m[1][1] * p[1] + m[1][2] * p[2] + m[1][3],
            m[2][0] * p[0] + m[2][1] * p[1] + m[2][2] * p[2] + m[2][3],
        )
    }
}

impl core::ops::Mul for Mat3x4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.concat(&rhs)
    }
}
