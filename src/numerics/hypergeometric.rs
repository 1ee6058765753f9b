//! numerics::hypergeometric — Kummer's confluent hypergeometric ₁F₁.
//!
//! Purpose
//! -------
//! Evaluate ₁F₁(a; c; z) = Σ_{k≥0} (a)ₖ/(c)ₖ · zᵏ/k!, the confluent
//! hypergeometric function appearing in the finite part of the
//! closed-form integral reduction. Gamma-family special functions are
//! taken from `statrs`; ₁F₁ is the one collaborator the ecosystem stack
//! does not provide, so it is implemented here by direct series
//! summation with a stabilizing transformation.
//!
//! Key behaviors
//! -------------
//! - Sum the Taylor series with the term-ratio recurrence
//!   tₖ₊₁ = tₖ · (a+k)/(c+k) · z/(k+1), stopping once a term falls
//!   below machine-relative size.
//! - Apply the Kummer transformation ₁F₁(a;c;z) = eᶻ·₁F₁(c−a;c;−z) for
//!   negative arguments, where the raw series alternates and loses
//!   precision to cancellation.
//!
//! Invariants & assumptions
//! ------------------------
//! - `c` must not be zero or a negative integer (series poles); callers
//!   in this crate use c = H_i + H_j ∈ (0, 2], which never hits a pole.
//! - For the arguments used by the evaluator (|z| up to a few tens) the
//!   truncated series reaches near machine precision well within the
//!   term budget; larger |z| degrades gracefully rather than erroring.

/// Hard cap on series terms. The series for |z| in the evaluator's
/// operating range converges in well under a hundred terms.
const MAX_TERMS: usize = 1_000;

/// Compute ₁F₁(a; c; z).
///
/// Parameters
/// ----------
/// - `a`: numerator parameter. A non-positive integer makes the series
///   terminate (₁F₁ degenerates to a polynomial).
/// - `c`: denominator parameter; must not be zero or a negative integer.
/// - `z`: argument. Negative arguments are routed through the Kummer
///   transformation to keep all summed terms single-signed.
///
/// Returns
/// -------
/// `f64`
///   The series value. Non-finite inputs or parameter poles propagate
///   as NaN/±∞ rather than panicking.
pub fn hyp1f1(a: f64, c: f64, z: f64) -> f64 {
    if z < 0.0 {
        return z.exp() * series(c - a, c, -z);
    }
    series(a, c, z)
}

fn series(a: f64, c: f64, z: f64) -> f64 {
    let mut term = 1.0;
    let mut sum = 1.0;

    for k in 0..MAX_TERMS {
        let kf = k as f64;
        term *= (a + kf) / (c + kf) * z / (kf + 1.0);
        sum += term;
        if term.abs() <= f64::EPSILON * sum.abs() {
            break;
        }
    }

    sum
}
