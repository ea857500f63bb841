//! 3-vectors of fixed-point components.

use std::fmt::{Display, Error as FmtError, Formatter};

use crate::fixed::FixedPoint;
use crate::Result;

/// An ordered triple of [FixedPoint] values.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Vector3 {
    pub x: FixedPoint,
    pub y: FixedPoint,
    pub z: FixedPoint,
}

impl Vector3 {
    pub const fn new(x: FixedPoint, y: FixedPoint, z: FixedPoint) -> Vector3 {
        Vector3 { x, y, z }
    }

    /// Component-wise addition.
    pub fn add(self, rhs: Vector3) -> Result<Vector3> {
        Ok(Vector3 {
            x: self.x.add(rhs.x)?,
            y: self.y.add(rhs.y)?,
            z: self.z.add(rhs.z)?,
        })
    }

    /// Component-wise subtraction.
    pub fn sub(self, rhs: Vector3) -> Result<Vector3> {
        Ok(Vector3 {
            x: self.x.sub(rhs.x)?,
            y: self.y.sub(rhs.y)?,
            z: self.z.sub(rhs.z)?,
        })
    }

    /// Multiply every component by the scalar `s`.
    pub fn scale(self, s: FixedPoint) -> Result<Vector3> {
        Ok(Vector3 {
            x: self.x.mul(s)?,
            y: self.y.mul(s)?,
            z: self.z.mul(s)?,
        })
    }

    /// The dot product.
    pub fn dot(self, rhs: Vector3) -> Result<FixedPoint> {
        self.x
            .mul(rhs.x)?
            .add(self.y.mul(rhs.y)?)?
            .add(self.z.mul(rhs.z)?)
    }

    /// The cross product, by the determinant expansion.
    pub fn cross(self, rhs: Vector3) -> Result<Vector3> {
        Ok(Vector3 {
            x: self.y.mul(rhs.z)?.sub(self.z.mul(rhs.y)?)?,
            y: self.z.mul(rhs.x)?.sub(self.x.mul(rhs.z)?)?,
            z: self.x.mul(rhs.y)?.sub(self.y.mul(rhs.x)?)?,
        })
    }

    /// The Euclidean norm `sqrt(self . self)`. The floor rounding of the
    /// component squares keeps the dot product non-negative, so the square
    /// root domain check cannot fire.
    pub fn norm(self) -> Result<FixedPoint> {
        self.dot(self)?.sqrt()
    }
}

impl Display for Vector3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), FmtError> {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
