//! Trigonometric functions and their inverses.
//!
//! `sin` and `cos` reduce the angle modulo `2π` and fold it into `[0, π/2]`
//! with the half- and quarter-turn identities before evaluating a
//! fixed-degree odd polynomial. `atan` folds its argument below
//! `tan(π/12)` with the reciprocal and `π/6`-rotation identities; `asin`
//! and `acos` are expressed through `atan` and `sqrt`.
//!
//! The reduction constants are derived from [FixedPoint::PI], so angles
//! constructed as multiples of that constant reduce exactly.

use crate::fixed::{FixedPoint, SCALE};
use crate::{Error, Result};

const PI: i128 = FixedPoint::PI.0;
const HALF_PI: i128 = PI / 2;
const TWO_PI: i128 = PI * 2;

/// `π/6` in Q64.61.
const SIXTH_PI: i128 = 1207336576346187140;

/// `sqrt 3` in Q64.61.
const SQRT3: i128 = 3993837246235628775;

/// `tan(π/12) = 2 - sqrt 3` in Q64.61, the fold threshold of [FixedPoint::atan].
const TAN_TWELFTH_PI: i128 = 617848772191759129;

/// Coefficients of `sin x = x * sum (-1)^k c_k x^(2k)` on `[0, π/2]`,
/// `c_k = 1/(2k+1)!` in Q64.61, truncated at `x^17`. Worst-case truncation
/// error `5e-14`.
const SIN_COEFFS: [i128; 9] = [
    2305843009213693952,
    384307168202282325,
    19215358410114116,
    457508533574146,
    6354285188530,
    57766228987,
    370296340,
    1763316,
    6483,
];

/// Coefficients of `atan z = z * sum (-1)^k c_k z^(2k)`, `c_k = 1/(2k+1)`
/// in Q64.61, truncated at `z^17`. After folding, `|z| <= 2 - sqrt 3` and
/// the truncation error stays below `1e-12`.
const ATAN_COEFFS: [i128; 9] = [
    2305843009213693952,
    768614336404564651,
    461168601842738790,
    329406144173384850,
    256204778801521550,
    209622091746699450,
    177372539170284150,
    153722867280912930,
    135637824071393762,
];

/// Evaluate an odd polynomial `x * (c_0 - x^2 (c_1 - x^2 (c_2 - ...)))`
/// with alternating-sign coefficients, by Horner's rule.
fn alternating_odd_poly(x: FixedPoint, coeffs: &[i128]) -> Result<FixedPoint> {
    let x2 = x.mul(x)?;
    let mut acc = FixedPoint(coeffs[coeffs.len() - 1]);
    for &c in coeffs[..coeffs.len() - 1].iter().rev() {
        acc = FixedPoint(c).sub(x2.mul(acc)?)?;
    }
    x.mul(acc)
}

impl FixedPoint {
    /// The sine of an angle in radians.
    pub fn sin(self) -> Result<FixedPoint> {
        // Into [0, 2π), then fold by half and quarter turns into [0, π/2].
        let r = self.0.rem_euclid(TWO_PI);
        let (r, negate) = if r >= PI { (r - PI, true) } else { (r, false) };
        let r = if r > HALF_PI { PI - r } else { r };

        let s = alternating_odd_poly(FixedPoint(r), &SIN_COEFFS)?;
        Ok(if negate { -s } else { s })
    }

    /// The cosine of an angle in radians, as the sine of the shifted angle.
    pub fn cos(self) -> Result<FixedPoint> {
        let r = self.0.rem_euclid(TWO_PI);
        FixedPoint(r + HALF_PI).sin()
    }

    /// The tangent of an angle in radians.
    ///
    /// Near odd multiples of `π/2` the cosine approaches the representation
    /// of zero: the quotient grows without bound and fails with
    /// [Error::DivisionByZero] if the cosine rounds to exactly zero.
    pub fn tan(self) -> Result<FixedPoint> {
        self.sin()?.div(self.cos()?)
    }

    /// The inverse tangent, in `(-π/2, π/2)`.
    pub fn atan(self) -> Result<FixedPoint> {
        let x = self.abs();

        // |x| > 1: atan x = π/2 - atan(1/x).
        let (x, reciprocal) = if x.0 > SCALE {
            (FixedPoint::ONE.div(x)?, true)
        } else {
            (x, false)
        };

        // Above tan(π/12): atan x = π/6 + atan((sqrt3 x - 1)/(x + sqrt3)),
        // which maps the argument into [0, tan(π/12)].
        let (x, offset) = if x.0 > TAN_TWELFTH_PI {
            let num = x.mul(FixedPoint(SQRT3))?.sub(FixedPoint::ONE)?;
            let den = x.add(FixedPoint(SQRT3))?;
            (num.div(den)?, SIXTH_PI)
        } else {
            (x, 0)
        };

        let mut r = alternating_odd_poly(x, &ATAN_COEFFS)?.0 + offset;
        if reciprocal {
            r = HALF_PI - r;
        }
        Ok(FixedPoint(if self.0 < 0 { -r } else { r }))
    }

    /// The inverse sine, in `[-π/2, π/2]`. The argument must lie in
    /// `[-1, 1]`, otherwise [Error::Domain].
    pub fn asin(self) -> Result<FixedPoint> {
        if self.0.abs() > SCALE {
            return Err(Error::Domain);
        }
        if self.0.abs() == SCALE {
            // The generic formula divides by zero at the endpoints.
            return Ok(FixedPoint(if self.0 < 0 { -HALF_PI } else { HALF_PI }));
        }
        let den = FixedPoint::ONE.sub(self.mul(self)?)?.sqrt()?;
        self.div(den)?.atan()
    }

    /// The inverse cosine, in `[0, π]`. The argument must lie in `[-1, 1]`,
    /// otherwise [Error::Domain].
    pub fn acos(self) -> Result<FixedPoint> {
        Ok(FixedPoint(HALF_PI - self.asin()?.0))
    }
}

#[cfg(test)]
mod test {
    use super::FixedPoint;
    use crate::Error;

    fn almost(a: f64, b: f64) -> bool {
        (a - b).abs() <= f64::max(5e-7, 5e-7 * f64::max(a.abs(), b.abs()))
    }

    /// An angle built the way callers build them: a multiple of the PI
    /// constant.
    fn angle(multiple: f64) -> FixedPoint {
        FixedPoint::PI.mul(FixedPoint::from_f64(multiple).unwrap()).unwrap()
    }

    #[test]
    fn sin_of_negative_angles() {
        for m in [-2.25, -2.0, -1.75, -1.5, -1.25, -1.0, -0.75, -0.5, -0.25] {
            let r = angle(m).sin().unwrap();
            let exp = (m * std::f64::consts::PI).sin();
            assert!(almost(r.to_f64(), exp), "sin({}π): {} != {}", m, r.to_f64(), exp);
        }
    }

    #[test]
    fn sin_of_positive_angles() {
        for m in [0.0, 0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0, 2.25] {
            let r = angle(m).sin().unwrap();
            let exp = (m * std::f64::consts::PI).sin();
            assert!(almost(r.to_f64(), exp), "sin({}π): {} != {}", m, r.to_f64(), exp);
        }
    }

    #[test]
    fn sin_of_half_pi_is_one() {
        let r = angle(0.5).sin().unwrap();
        assert!(almost(r.to_f64(), 1.0));
    }

    #[test]
    fn cos_of_angles() {
        for m in [-2.25, -1.75, -1.0, -0.5, -0.25, 0.0, 0.25, 0.5, 1.0, 1.75, 2.25] {
            let r = angle(m).cos().unwrap();
            let exp = (m * std::f64::consts::PI).cos();
            assert!(almost(r.to_f64(), exp), "cos({}π): {} != {}", m, r.to_f64(), exp);
        }
    }

    #[test]
    fn sin_cos_identity() {
        for v in [-3.7, -1.2, 0.0, 0.4, 1.1, 2.9, 12.345] {
            let x = FixedPoint::from_f64(v).unwrap();
            let s = x.sin().unwrap();
            let c = x.cos().unwrap();
            let r = s.mul(s).unwrap().add(c.mul(c).unwrap()).unwrap();
            assert!(almost(r.to_f64(), 1.0), "at {}: {}", v, r.to_f64());
        }
    }

    #[test]
    fn tan_of_angles() {
        // Away from the poles at odd multiples of π/2.
        for m in [-2.25, -2.0, -1.75, -1.25, -1.0, -0.75, -0.25, 0.0, 0.25, 0.75, 1.0, 2.25] {
            let r = angle(m).tan().unwrap();
            let exp = (m * std::f64::consts::PI).tan();
            assert!(almost(r.to_f64(), exp), "tan({}π): {} != {}", m, r.to_f64(), exp);
        }
    }

    #[test]
    fn atan_values() {
        for v in [-1.5, -1.0, -0.75, -0.5, -0.25, 0.0, 0.25, 0.5, 0.75, 1.0, 5.0, 100.0] {
            let r = FixedPoint::from_f64(v).unwrap().atan().unwrap();
            let exp = v.atan();
            assert!(almost(r.to_f64(), exp), "atan({}): {} != {}", v, r.to_f64(), exp);
        }
    }

    #[test]
    fn asin_values() {
        for v in [-1.0, -0.75, -0.5, -0.25, 0.0, 0.25, 0.5, 0.75, 1.0] {
            let r = FixedPoint::from_f64(v).unwrap().asin().unwrap();
            let exp = v.asin();
            assert!(almost(r.to_f64(), exp), "asin({}): {} != {}", v, r.to_f64(), exp);
        }
    }

    #[test]
    fn acos_values() {
        for v in [-1.0, -0.75, -0.5, -0.25, 0.0, 0.25, 0.5, 0.75, 1.0] {
            let r = FixedPoint::from_f64(v).unwrap().acos().unwrap();
            let exp = v.acos();
            assert!(almost(r.to_f64(), exp), "acos({}): {} != {}", v, r.to_f64(), exp);
        }
    }

    #[test]
    fn asin_acos_domain_errors() {
        let out = FixedPoint::from_f64(1.5).unwrap();
        assert_eq!(out.asin(), Err(Error::Domain));
        assert_eq!(out.acos(), Err(Error::Domain));
        assert_eq!((-out).asin(), Err(Error::Domain));
    }
}
