//! Deterministic Q64.61 fixed-point mathematics over the Stark prime field.
//!
//! Every value is a [FixedPoint]: a real number scaled by `2^61` and stored as
//! a signed 125-bit magnitude, interchangeable with a canonical residue of the
//! 252-bit Stark prime through the half-modulus sign rule. On top of that
//! representation the crate provides exact elementary arithmetic, powers and
//! roots, the exponential/logarithm family, trigonometric and hyperbolic
//! functions, and 3-vector operations. Every operation is a pure function with
//! a compile-time-bounded iteration count that fails explicitly on domain,
//! range, or division-by-zero violations instead of wrapping silently.
//!
//! For example:
//!
//! ```
//! use math64x61::FixedPoint;
//!
//! let x = FixedPoint::from_f64(1.5)?;
//! let y = FixedPoint::from_f64(2.0)?;
//! assert_eq!(x.mul(y)?.to_f64(), 3.0);
//!
//! let z = FixedPoint::from_f64(64.0)?;
//! assert_eq!(z.sqrt()?.to_f64(), 8.0);
//! # Ok::<(), math64x61::Error>(())
//! ```

pub mod fixed;
pub mod vector;

mod explog;
mod hyperbolic;
mod power;
mod trig;

pub use fixed::FixedPoint;
pub use vector::Vector3;

/// Errors that can occur when evaluating a fixed-point operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The argument lies outside the mathematical domain of the function,
    /// e.g. the square root of a negative number or the logarithm of zero.
    Domain,
    /// A conversion or an intermediate result exceeds the representable
    /// window of `|value| < 2^125 / 2^61`.
    Range,
    /// The divisor is the representation of zero.
    DivisionByZero,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Domain => write!(f, "The argument is outside the domain of the function"),
            Error::Range => write!(f, "The value is outside the representable Q64.61 range"),
            Error::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
