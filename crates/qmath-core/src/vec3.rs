// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// Three-component vector used for positions, directions, and angle triples.
///
/// * Components are `f32` in engine units (or degrees when the vector holds
///   an angle triple indexed by [`crate::PITCH`], [`crate::YAW`],
///   [`crate::ROLL`]).
/// * The type is a plain value: copying it is the "VectorCopy" operation.
/// * Indexing (`v[0]`, `v[1]`, `v[2]`) mirrors the `float[3]` layout the
///   classification and matrix code is written against.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f32; 3]", into = "[f32; 3]"))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The origin, `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Vector with all three components set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] + other.data[0],
            self.data[1] + other.data[1],
            self.data[2] + other.data[2],
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] - other.data[0],
            self.data[1] - other.data[1],
            self.data[2] - other.data[2],
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.data[0] * scalar,
            self.data[1] * scalar,
            self.data[2] * scalar,
        )
    }

    /// Returns `self + scale * other` (the engine's `VectorMA`).
    ///
    /// Evaluated component-wise without fused multiply-add.
    pub fn multiply_add(&self, scale: f32, other: &Self) -> Self {
        Self::new(
            self.data[0] + scale * other.data[0],
            self.data[1] + scale * other.data[1],
            self.data[2] + scale * other.data[2],
        )
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f32 {
        self.sub(other).length()
    }

    /// Normalizes the vector in place and returns its original length.
    ///
    /// A vector whose length is exactly zero is left untouched and `0.0` is
    /// returned; no division happens, so the zero vector never turns into
    /// NaN or infinity. Tiny non-zero vectors are still scaled.
    pub fn normalize_in_place(&mut self) -> f32 {
        let length = self.length();
        if length != 0.0 {
            let inv = 1.0 / length;
            self.data[0] *= inv;
            self.data[1] *= inv;
            self.data[2] *= inv;
        }
        length
    }

    /// By-value form of [`Vec3::normalize_in_place`].
    pub fn normalized(mut self) -> Self {
        self.normalize_in_place();
        self
    }

    /// Negates every component in place (the engine's `VectorInverse`).
    pub fn invert(&mut self) {
        self.data = [-self.data[0], -self.data[1], -self.data[2]];
    }

    /// Linear interpolation `self + frac * (to - self)`.
    ///
    /// `frac` is not clamped: values outside `[0, 1]` extrapolate.
    pub fn lerp(&self, to: &Self, frac: f32) -> Self {
        Self::new(
            self.data[0] + frac * (to.data[0] - self.data[0]),
            self.data[1] + frac * (to.data[1] - self.data[1]),
            self.data[2] + frac * (to.data[2] - self.data[2]),
        )
    }

    /// Returns `true` when all components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data[0] == 0.0 && self.data[1] == 0.0 && self.data[2] == 0.0
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, idx: usize) -> &f32 {
        &self.data[idx]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.data[idx]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::add(&self, &rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::sub(&self, &rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(mut self) -> Self {
        self.invert();
        self
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::add(self, &rhs);
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::sub(self, &rhs);
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}
