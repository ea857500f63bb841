//! Hyperbolic functions and their inverses, expressed through the
//! exponential and logarithm family.

use crate::fixed::{FixedPoint, SCALE};
use crate::{Error, Result};

impl FixedPoint {
    /// `sinh x = (e^x - e^-x) / 2`.
    pub fn sinh(self) -> Result<FixedPoint> {
        let ex = self.exp()?;
        let enx = (-self).exp()?;
        ex.sub(enx)?.div(FixedPoint::from_int(2))
    }

    /// `cosh x = (e^x + e^-x) / 2`.
    pub fn cosh(self) -> Result<FixedPoint> {
        let ex = self.exp()?;
        let enx = (-self).exp()?;
        ex.add(enx)?.div(FixedPoint::from_int(2))
    }

    /// `tanh x = sinh x / cosh x`.
    pub fn tanh(self) -> Result<FixedPoint> {
        self.sinh()?.div(self.cosh()?)
    }

    /// `asinh x = ln(x + sqrt(x^2 + 1))`, defined for all representable `x`.
    pub fn asinh(self) -> Result<FixedPoint> {
        let root = self.mul(self)?.add(FixedPoint::ONE)?.sqrt()?;
        self.add(root)?.ln()
    }

    /// `acosh x = ln(x + sqrt(x^2 - 1))` for `x >= 1`, otherwise
    /// [Error::Domain].
    pub fn acosh(self) -> Result<FixedPoint> {
        if self.0 < SCALE {
            return Err(Error::Domain);
        }
        let root = self.mul(self)?.sub(FixedPoint::ONE)?.sqrt()?;
        self.add(root)?.ln()
    }

    /// `atanh x = ln((1 + x) / (1 - x)) / 2` for `|x| < 1`, otherwise
    /// [Error::Domain].
    pub fn atanh(self) -> Result<FixedPoint> {
        if self.0.abs() >= SCALE {
            return Err(Error::Domain);
        }
        let num = FixedPoint::ONE.add(self)?;
        let den = FixedPoint::ONE.sub(self)?;
        num.div(den)?.ln()?.div(FixedPoint::from_int(2))
    }
}
