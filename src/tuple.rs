//! Tuple algebra for points, vectors, and colors.
//!
//! A [`Tuple`] is an immutable 4-component `f64` value. The `w` component
//! discriminates points (`w == 1`) from direction vectors (`w == 0`); colors
//! reuse the same structure with the first three components read through the
//! `r`/`g`/`b` accessors. Every operation returns a new value.
//!
//! Floating-point geometry accumulates rounding error, so the module
//! standardizes on one tolerance/precision pair: [`EPSILON`] for
//! approximate comparison and 5 decimal places for equivalence rounding.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Absolute tolerance for approximate floating-point comparison.
pub const EPSILON: f64 = 1e-5;

/// Scale factor for rounding to the 5-decimal equivalence precision.
const EQUIV_SCALE: f64 = 1e5;

/// Compare two floats for approximate equality within [`EPSILON`].
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Round a float to the crate-wide 5-decimal equivalence precision.
///
/// Used for deterministic display and comparison independent of
/// floating-point noise.
#[must_use]
pub fn round_equiv(v: f64) -> f64 {
    (v * EQUIV_SCALE).round() / EQUIV_SCALE
}

/// A 4-component tuple representing a point, a vector, or a color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tuple {
    /// X coordinate (red channel for colors).
    pub x: f64,
    /// Y coordinate (green channel for colors).
    pub y: f64,
    /// Z coordinate (blue channel for colors).
    pub z: f64,
    /// Point/vector discriminant; unused for colors.
    pub w: f64,
}

impl Tuple {
    /// Opaque black.
    pub const BLACK: Self = Self::color(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::color(1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::color(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Self = Self::color(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::color(0.0, 0.0, 1.0);

    /// Create a raw tuple from all four components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Create a point (`w = 1`).
    #[must_use]
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Create a direction vector (`w = 0`).
    #[must_use]
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Create a color from red/green/blue channels in `[0, 1]`.
    ///
    /// Out-of-gamut channel values are legal and only clamped at export
    /// time.
    #[must_use]
    pub const fn color(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 0.0)
    }

    /// Red channel (alias for `x`).
    #[must_use]
    pub const fn r(&self) -> f64 {
        self.x
    }

    /// Green channel (alias for `y`).
    #[must_use]
    pub const fn g(&self) -> f64 {
        self.y
    }

    /// Blue channel (alias for `z`).
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.z
    }

    /// Whether this tuple is a point (`w == 1`).
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    /// Whether this tuple is a direction vector (`w == 0`).
    #[must_use]
    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// Euclidean norm over all four components.
    ///
    /// `w` participates; pass vectors (`w = 0`) when geometric length is
    /// intended.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Scale to unit magnitude.
    ///
    /// A zero-magnitude input divides by zero and propagates IEEE NaN
    /// components rather than trapping; callers needing strict geometric
    /// vectors must check the magnitude themselves.
    #[must_use]
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Dot product over all four components.
    #[must_use]
    pub fn dot(&self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Right-handed cross product of two 3-vectors.
    ///
    /// Defined on the x/y/z components only; the result is a vector
    /// (`w = 0`).
    #[must_use]
    pub fn cross(&self, rhs: Self) -> Self {
        Self::vector(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Linear interpolation between two tuples.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Component-wise approximate equality within [`EPSILON`].
    #[must_use]
    pub fn approx_eq(&self, rhs: Self) -> bool {
        approx_eq(self.x, rhs.x)
            && approx_eq(self.y, rhs.y)
            && approx_eq(self.z, rhs.z)
            && approx_eq(self.w, rhs.w)
    }

    /// Component-wise rounding to the 5-decimal equivalence precision.
    #[must_use]
    pub fn round_equiv(&self) -> Self {
        Self::new(
            round_equiv(self.x),
            round_equiv(self.y),
            round_equiv(self.z),
            round_equiv(self.w),
        )
    }
}

impl Add for Tuple {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Tuple {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Tuple {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f64> for Tuple {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

/// Hadamard (component-wise) product, used for blending light and surface
/// colors. Distinct from [`Tuple::dot`].
impl Mul for Tuple {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.x * rhs.x,
            self.y * rhs.y,
            self.z * rhs.z,
            self.w * rhs.w,
        )
    }
}

impl Div<f64> for Tuple {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
