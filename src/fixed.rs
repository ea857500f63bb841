//! The Q64.61 fixed-point representation and its elementary arithmetic.
//!
//! A [FixedPoint] stores `round(real * 2^61)` as a signed integer with the
//! invariant `|value| < 2^125`. At the field boundary the same number is
//! exchanged as a residue of the Stark prime `P`: residues in `[0, P/2]` are
//! non-negative, residues in `(P/2, P)` stand for `residue - P`. Conversion in
//! and out of residue form is the only place where modular canonicalization
//! happens; all internal arithmetic is ordinary signed integer arithmetic.

use std::cmp::Ordering;
use std::fmt::{Display, Error as FmtError, Formatter};
use std::ops::Neg;

use once_cell::sync::Lazy;
use rug::{Complete, Integer};

use crate::{Error, Result};

/// Number of fractional bits in the Q64.61 format.
pub const FRACTIONAL_BITS: u32 = 61;

/// The scale factor `2^61` of the Q64.61 format.
pub const SCALE: i128 = 1 << FRACTIONAL_BITS;

/// Strict magnitude bound on the scaled value: `|value| < 2^125`.
pub(crate) const BOUND: i128 = 1 << 125;

const FRACT_MASK: i128 = SCALE - 1;

/// The Stark prime `P`, the modulus of the residue form.
pub static PRIME: Lazy<Integer> = Lazy::new(|| {
    Integer::parse("3618502788666131213697322783095070105623107215331596699973092056135872020481")
        .unwrap()
        .complete()
});

/// `P div 2`, the sign threshold of the residue form.
pub static PRIME_HALF: Lazy<Integer> = Lazy::new(|| (&*PRIME >> 1u32).complete());

/// A real number in Q64.61 fixed-point format.
///
/// Values are immutable; every operation produces a new value and
/// re-establishes the representation invariant before returning.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FixedPoint(pub(crate) i128);

impl FixedPoint {
    pub const ZERO: FixedPoint = FixedPoint(0);
    pub const ONE: FixedPoint = FixedPoint(SCALE);
    /// `π` in Q64.61, the encoding used on the wire by the field environment.
    pub const PI: FixedPoint = FixedPoint(7244019458077122842);

    /// Create a fixed-point number from its scaled integer representation.
    pub fn from_bits(bits: i128) -> Result<FixedPoint> {
        if bits > -BOUND && bits < BOUND {
            Ok(FixedPoint(bits))
        } else {
            Err(Error::Range)
        }
    }

    /// The scaled integer representation, i.e. `round(real * 2^61)`.
    pub const fn to_bits(self) -> i128 {
        self.0
    }

    /// Convert a real number to the fixed-point grid, rounding half away
    /// from zero. Fails with [Error::Range] for non-finite inputs and for
    /// scaled magnitudes of `2^125` or more.
    pub fn from_f64(v: f64) -> Result<FixedPoint> {
        if !v.is_finite() {
            return Err(Error::Range);
        }
        let scaled = (v * SCALE as f64).round();
        if scaled <= -(BOUND as f64) || scaled >= BOUND as f64 {
            return Err(Error::Range);
        }
        Ok(FixedPoint(scaled as i128))
    }

    /// Recover the real number represented by this value.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Convert an integer. Infallible: any `i64` scaled by `2^61` stays
    /// below the `2^125` bound.
    pub const fn from_int(v: i64) -> FixedPoint {
        FixedPoint((v as i128) << FRACTIONAL_BITS)
    }

    /// Canonicalize a field residue in `[0, P)` into a fixed-point value,
    /// interpreting residues above `P/2` as negative per the half-modulus
    /// sign rule.
    pub fn from_residue(r: &Integer) -> Result<FixedPoint> {
        if *r < 0 || *r >= *PRIME {
            return Err(Error::Range);
        }
        let signed = if *r > *PRIME_HALF {
            (r - &*PRIME).complete()
        } else {
            r.clone()
        };
        Self::from_wide(signed)
    }

    /// The canonical residue of this value in `[0, P)`.
    pub fn to_residue(&self) -> Integer {
        if self.0 < 0 {
            &*PRIME + Integer::from(self.0)
        } else {
            Integer::from(self.0)
        }
    }

    /// Narrow a double-width intermediate back into the representable window.
    pub(crate) fn from_wide(v: Integer) -> Result<FixedPoint> {
        match v.to_i128() {
            Some(v) if v > -BOUND && v < BOUND => Ok(FixedPoint(v)),
            _ => Err(Error::Range),
        }
    }

    /// Exact addition, range-checked.
    pub fn add(self, rhs: FixedPoint) -> Result<FixedPoint> {
        // Two in-range operands cannot overflow an i128, only the window.
        Self::from_bits(self.0 + rhs.0)
    }

    /// Exact subtraction, range-checked.
    pub fn sub(self, rhs: FixedPoint) -> Result<FixedPoint> {
        Self::from_bits(self.0 - rhs.0)
    }

    /// Fixed-point multiplication: the double-width signed product shifted
    /// right by 61 bits, rounding toward negative infinity.
    pub fn mul(self, rhs: FixedPoint) -> Result<FixedPoint> {
        let wide = Integer::from(self.0) * Integer::from(rhs.0);
        Self::from_wide(wide >> FRACTIONAL_BITS)
    }

    /// Fixed-point division, with the same floor rounding as [Self::mul].
    pub fn div(self, rhs: FixedPoint) -> Result<FixedPoint> {
        if rhs.0 == 0 {
            return Err(Error::DivisionByZero);
        }
        use rug::ops::DivRounding;
        let wide = Integer::from(self.0) << FRACTIONAL_BITS;
        Self::from_wide(wide.div_floor(Integer::from(rhs.0)))
    }

    /// Round toward negative infinity to the nearest integer.
    pub fn floor(self) -> Result<FixedPoint> {
        Self::from_bits(self.0 >> FRACTIONAL_BITS << FRACTIONAL_BITS)
    }

    /// Round toward positive infinity to the nearest integer.
    pub fn ceil(self) -> Result<FixedPoint> {
        Self::from_bits((self.0 + FRACT_MASK) >> FRACTIONAL_BITS << FRACTIONAL_BITS)
    }

    pub fn min(self, rhs: FixedPoint) -> FixedPoint {
        if self.0 <= rhs.0 { self } else { rhs }
    }

    pub fn max(self, rhs: FixedPoint) -> FixedPoint {
        if self.0 >= rhs.0 { self } else { rhs }
    }

    pub fn abs(self) -> FixedPoint {
        FixedPoint(self.0.abs())
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// True when the fractional 61 bits are all zero.
    pub const fn is_integer(self) -> bool {
        self.0 & FRACT_MASK == 0
    }

    pub fn signum(self) -> FixedPoint {
        match self.0.cmp(&0) {
            Ordering::Greater => FixedPoint::ONE,
            Ordering::Equal => FixedPoint::ZERO,
            Ordering::Less => -FixedPoint::ONE,
        }
    }
}

impl Neg for FixedPoint {
    type Output = FixedPoint;

    fn neg(self) -> FixedPoint {
        // The window is symmetric, so negation cannot leave it.
        FixedPoint(-self.0)
    }
}

impl Display for FixedPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), FmtError> {
        write!(f, "{}", self.to_f64())
    }
}
