//! Exponentiation and square roots.

use rug::Integer;
use tracing::{debug, trace};

use crate::fixed::{FixedPoint, FRACTIONAL_BITS};
use crate::{Error, Result};

/// Number of Newton-Raphson refinements in [FixedPoint::sqrt]. The initial
/// estimate is within a factor two of the root and every step at least
/// halves the square of the relative error, so 8 steps converge for the
/// whole 186-bit radicand range without a runtime convergence test.
pub const SQRT_NEWTON_STEPS: usize = 8;

impl FixedPoint {
    /// Raise `self` to the power `e`.
    ///
    /// A zero exponent yields one for any base, `0^0` included. Integer
    /// exponents use binary exponentiation, with negative exponents computed
    /// as the reciprocal of the positive-exponent result. Fractional
    /// exponents require a positive base and evaluate as
    /// `exp2(e * log2(self))`; a non-positive base fails with
    /// [Error::Domain].
    pub fn pow(self, e: FixedPoint) -> Result<FixedPoint> {
        if e.is_zero() {
            return Ok(FixedPoint::ONE);
        }
        if !e.is_integer() {
            if self.0 <= 0 {
                return Err(Error::Domain);
            }
            debug!("fractional exponent, evaluating as exp2(e * log2(base))");
            return self.log2()?.mul(e)?.exp2();
        }

        let n = e.0 >> FRACTIONAL_BITS;
        let mut bits = n.unsigned_abs();
        let mut base = self;
        let mut acc = FixedPoint::ONE;
        // At most 64 significant exponent bits for any in-range integer.
        while bits > 0 {
            if bits & 1 == 1 {
                acc = acc.mul(base)?;
            }
            bits >>= 1;
            if bits > 0 {
                base = base.mul(base)?;
            }
        }

        if n < 0 {
            FixedPoint::ONE.div(acc)
        } else {
            Ok(acc)
        }
    }

    /// The square root of a non-negative value, exact to the Q64.61 grid.
    ///
    /// Computes the integer square root of `value << 61` by Newton-Raphson
    /// iteration with a bit-length-derived initial estimate and the fixed
    /// step count [SQRT_NEWTON_STEPS].
    pub fn sqrt(self) -> Result<FixedPoint> {
        if self.0 < 0 {
            return Err(Error::Domain);
        }
        if self.0 == 0 {
            return Ok(FixedPoint::ZERO);
        }

        let a = Integer::from(self.0) << FRACTIONAL_BITS;
        let bits = a.significant_bits();
        let mut x = Integer::from(1) << ((bits + 1) / 2);
        trace!("sqrt of a {}-bit radicand, estimate 2^{}", bits, (bits + 1) / 2);

        for _ in 0..SQRT_NEWTON_STEPS {
            x = (Integer::from(&a / &x) + &x) >> 1u32;
        }
        // The iteration can settle one above the floor square root.
        if Integer::from(&x * &x) > a {
            x -= 1;
        }

        // The root of an in-range value is always in range.
        FixedPoint::from_wide(x)
    }
}
