//! End-to-end properties of the public surface, checked against `f64`
//! references at the tolerance an embedding environment relies on.

use math64x61::{Error, FixedPoint, Vector3};

const REL_TOL: f64 = 5e-7;
const ABS_TOL: f64 = 5e-7;

fn almost(a: f64, b: f64) -> bool {
    (a - b).abs() <= f64::max(ABS_TOL, REL_TOL * f64::max(a.abs(), b.abs()))
}

fn fp(v: f64) -> FixedPoint {
    FixedPoint::from_f64(v).unwrap()
}

#[test]
fn conversion_round_trips_within_one_ulp() {
    for v in [0.0, 1.0, -1.0, 0.1, -2.7, 1.6e9, -3.9e12, 2.0f64.powi(60)] {
        let x = fp(v);
        assert!((x.to_f64() - v).abs() <= 2.0f64.powi(-61) * v.abs().max(1.0));
    }
}

#[test]
fn mul_then_div_recovers_the_argument() {
    for (x, y) in [(1.5, 2.0), (-7.25, 0.125), (3.1e8, -2.2), (0.0001, 99.0)] {
        let r = fp(x).mul(fp(y)).unwrap().div(fp(y)).unwrap();
        assert!(almost(r.to_f64(), x), "{} != {}", r.to_f64(), x);
    }
}

#[test]
fn pow_identities() {
    for v in [0.0, 1.0, -3.5, 42.0, -1.9e6] {
        let x = fp(v);
        assert_eq!(x.pow(fp(0.0)).unwrap(), fp(1.0));
        assert_eq!(x.pow(fp(1.0)).unwrap(), x);
    }
}

#[test]
fn pythagorean_identity() {
    for v in [-9.9, -2.6, -0.5, 0.0, 0.3, 1.7, 4.1, 8.8] {
        let x = fp(v);
        let s = x.sin().unwrap();
        let c = x.cos().unwrap();
        let r = s.mul(s).unwrap().add(c.mul(c).unwrap()).unwrap();
        assert!(
            (r.to_f64() - 1.0).abs() <= 1e-6,
            "sin^2 + cos^2 at {}: {}",
            v,
            r.to_f64()
        );
    }
}

#[test]
fn sqrt_squares_back_and_rejects_negatives() {
    for v in [0.0, 0.5, 2.0, 64.0, 1.7e10] {
        let s = fp(v).sqrt().unwrap();
        assert!(almost(s.mul(s).unwrap().to_f64(), v));
    }
    assert_eq!(fp(-0.001).sqrt(), Err(Error::Domain));
}

#[test]
fn vector_norm_matches_dot() {
    let a = Vector3::new(fp(1.25), fp(-3.5), fp(2.0));
    let norm = a.norm().unwrap();
    let dot = a.dot(a).unwrap();
    assert!(almost(norm.to_f64(), dot.to_f64().sqrt()));
}

#[test]
fn mul_scenario() {
    let r = fp(1.5).mul(fp(2.0)).unwrap();
    assert!(almost(r.to_f64(), 3.0));
}

#[test]
fn sqrt_scenario() {
    let r = fp(64.0).sqrt().unwrap();
    assert!(almost(r.to_f64(), 8.0));
}

#[test]
fn sin_of_half_pi_scenario() {
    let r = FixedPoint::PI.mul(fp(0.5)).unwrap().sin().unwrap();
    assert!(almost(r.to_f64(), 1.0));
}

#[test]
fn boundary_failures() {
    assert_eq!(FixedPoint::from_f64(2.0f64.powi(64)), Err(Error::Range));
    assert_eq!(fp(1.0).div(fp(0.0)), Err(Error::DivisionByZero));
    assert_eq!(fp(1.5).acos(), Err(Error::Domain));
    assert_eq!(fp(0.5).acosh(), Err(Error::Domain));
    assert_eq!(fp(1.0).atanh(), Err(Error::Domain));
    assert_eq!(fp(0.0).log2(), Err(Error::Domain));
    assert_eq!(fp(-2.0).pow(fp(0.5)), Err(Error::Domain));
}

#[test]
fn errors_display_a_reason() {
    assert!(Error::Domain.to_string().contains("domain"));
    assert!(Error::Range.to_string().contains("range"));
    assert!(Error::DivisionByZero.to_string().contains("zero"));
}
