//! The exponential and logarithm family.
//!
//! `exp2` splits its argument into an integer part, applied as a bit shift,
//! and a fractional remainder in `[0, 1)`, approximated by a fixed-degree
//! polynomial. `log2` normalizes the argument to a mantissa in `[1, 2)` and
//! approximates the logarithm of the mantissa by an odd polynomial in
//! `(m - 1)/(m + 1)`. The natural and base-10 logarithms are constant
//! multiples of `log2`.

use crate::fixed::{FixedPoint, FRACTIONAL_BITS};
use crate::{Error, Result};

/// `ln 2` in Q64.61.
const LN2: i128 = 1598288580650331957;

/// `log10 2` in Q64.61.
const LOG10_2: i128 = 694127911065419642;

/// `log2 e` in Q64.61.
const LOG2_E: i128 = 3326628274461080623;

/// Coefficients of `2^f = sum c_k f^k` on `[0, 1)`: the degree-10 truncation
/// of `e^(f ln 2)`, `c_k = (ln 2)^k / k!` in Q64.61. Worst-case truncation
/// error `4.5e-10`.
const EXP2_COEFFS: [i128; 11] = [
    2305843009213693952,
    1598288580650331957,
    553924611699467178,
    127983760947416057,
    22177895764539869,
    3074509183988633,
    355181228747896,
    35170409613489,
    3047283782841,
    234690684716,
    16267518641,
];

/// Coefficients of `ln m = sum c_k z^(2k+1)` with `z = (m - 1)/(m + 1)`,
/// `c_k = 2/(2k+1)` in Q64.61, truncated at `z^15`. For `m` in `[1, 2)`,
/// `z < 1/3` and the truncation error stays below `1e-9`.
const LN_MANTISSA_COEFFS: [i128; 8] = [
    4611686018427387904,
    1537228672809129301,
    922337203685477581,
    658812288346769701,
    512409557603043100,
    419244183493398900,
    354745078340568300,
    307445734561825860,
];

impl FixedPoint {
    /// `2^self`. Fails with [Error::Range] when the result leaves the
    /// representable window; deep negative arguments underflow to zero.
    pub fn exp2(self) -> Result<FixedPoint> {
        let n = self.0 >> FRACTIONAL_BITS;
        let f = FixedPoint(self.0 - (n << FRACTIONAL_BITS));

        let mut acc = FixedPoint(EXP2_COEFFS[10]);
        for &c in EXP2_COEFFS[..10].iter().rev() {
            acc = acc.mul(f)?.add(FixedPoint(c))?;
        }

        if n >= 0 {
            // The polynomial value is at least 2^61, so 64 shifts always
            // overflow the window.
            if n >= 64 {
                return Err(Error::Range);
            }
            FixedPoint::from_bits(acc.0 << n)
        } else {
            let shift = (-n).min(127) as u32;
            Ok(FixedPoint(acc.0 >> shift))
        }
    }

    /// The base-2 logarithm of a positive value.
    pub fn log2(self) -> Result<FixedPoint> {
        if self.0 <= 0 {
            return Err(Error::Domain);
        }

        // Binary exponent and mantissa in [1, 2).
        let msb = 127 - self.0.leading_zeros() as i32;
        let e = msb - FRACTIONAL_BITS as i32;
        let m = if e >= 0 {
            FixedPoint(self.0 >> e)
        } else {
            FixedPoint(self.0 << -e)
        };

        let z = m.sub(FixedPoint::ONE)?.div(m.add(FixedPoint::ONE)?)?;
        let z2 = z.mul(z)?;
        let mut acc = FixedPoint(LN_MANTISSA_COEFFS[7]);
        for &c in LN_MANTISSA_COEFFS[..7].iter().rev() {
            acc = acc.mul(z2)?.add(FixedPoint(c))?;
        }
        let log2_m = z.mul(acc)?.mul(FixedPoint(LOG2_E))?;

        FixedPoint::from_int(e as i64).add(log2_m)
    }

    /// The natural logarithm of a positive value.
    pub fn ln(self) -> Result<FixedPoint> {
        self.log2()?.mul(FixedPoint(LN2))
    }

    /// The base-10 logarithm of a positive value.
    pub fn log10(self) -> Result<FixedPoint> {
        self.log2()?.mul(FixedPoint(LOG10_2))
    }

    /// `e^self`, evaluated as `exp2(self * log2 e)`.
    pub fn exp(self) -> Result<FixedPoint> {
        self.mul(FixedPoint(LOG2_E))?.exp2()
    }
}
