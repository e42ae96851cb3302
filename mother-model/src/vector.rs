use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Simple two dimensional vector used for positions, deltas and sizes.
///
/// Only the x axis carries meaning for the horizontal window; y is kept so
/// pointer samples and slot dimensions round-trip unchanged.
///
/// Mutating operations return `&mut Self` so they chain:
///
/// ```
/// use mother_model::Vec2;
///
/// let mut v = Vec2::new(200.0, 0.0);
/// v.minus(Vec2::new(50.0, 0.0)).multiply(2.0);
/// assert_eq!(v, Vec2::new(300.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector with only the x component set.
    pub const fn horizontal(x: f64) -> Self {
        Self { x, y: 0.0 }
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn copy_from(&mut self, other: Vec2) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self
    }

    pub fn equals(&self, other: Vec2) -> bool {
        *self == other
    }

    pub fn plus(&mut self, other: Vec2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn minus(&mut self, other: Vec2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    /// Component-wise multiply. A bare `f64` scales both axes.
    pub fn multiply(&mut self, factor: impl Into<Vec2>) -> &mut Self {
        let factor = factor.into();
        self.x *= factor.x;
        self.y *= factor.y;
        self
    }

    /// Component-wise remainder (sign follows the dividend, like `%`).
    ///
    /// A zero divisor component leaves that component untouched rather than
    /// producing NaN.
    pub fn modulo(&mut self, divisor: impl Into<Vec2>) -> &mut Self {
        let divisor = divisor.into();
        if divisor.x != 0.0 {
            self.x %= divisor.x;
        }
        if divisor.y != 0.0 {
            self.y %= divisor.y;
        }
        self
    }

    // Non-mutating variants

    /// Difference between `self` and `other`.
    ///
    /// `200 - 300 => -100`, `200 - (-10) => 210`.
    pub fn delta(self, other: Vec2) -> Vec2 {
        let mut out = self;
        out.minus(other);
        out
    }

    pub fn product(self, factor: impl Into<Vec2>) -> Vec2 {
        let mut out = self;
        out.multiply(factor);
        out
    }

    pub fn remainder(self, divisor: impl Into<Vec2>) -> Vec2 {
        let mut out = self;
        out.modulo(divisor);
        out
    }

    // for readability when the vector holds a size
    pub fn width(&self) -> f64 {
        self.x
    }

    pub fn height(&self) -> f64 {
        self.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<f64> for Vec2 {
    fn from(scalar: f64) -> Self {
        Vec2::new(scalar, scalar)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.plus(rhs);
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        self.delta(rhs)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.minus(rhs);
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        self.product(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
