//! fou — fractional Ornstein–Uhlenbeck cross-covariance integrals.
//!
//! Purpose
//! -------
//! Collect the integral evaluators and their shared infrastructure for
//! the covariance structure of Ornstein–Uhlenbeck-type processes driven
//! by fractional Brownian motion. This subtree implements the three
//! interchangeable representations of
//!
//!   I(h) = ∫₀ʰ ∫₋∞⁰ exp(aᵢu + aⱼv)·(u − v)^(Hᵢ+Hⱼ−2) dv du
//!
//! together with common input validation and error handling, including
//! Python bridges for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Expose the degenerate-case formula [`integral_h2`], the
//!   general-case evaluator [`integral`] with its [`Method`] selector,
//!   elementwise variants over vectors of upper limits, and the
//!   double-quadrature reference oracle [`integral_quad`].
//! - Centralize input guards in [`validate_input`], ensuring the
//!   Hurst-sum precondition and upper-limit constraints are checked
//!   once, consistently, before any numerical work.
//! - Provide a dedicated error type [`IntegralError`] and result alias
//!   [`IntegralResult`], plus a conversion layer to Python exceptions
//!   when the `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every call is a stateless, referentially transparent computation;
//!   there is no shared mutable state and no ordering requirement
//!   between calls.
//! - For any valid input, the closed form, the reduced single integral,
//!   and the double-integral oracle agree within 1e-10 relative
//!   tolerance; this cross-method contract is enforced by the
//!   integration suite under `tests/`.
//! - Evaluators report user-facing invalid inputs via [`IntegralResult`]
//!   and never panic on them; numerical-domain violations (zero rates,
//!   Hᵢ+Hⱼ = 1) propagate as non-finite floats by contract.
//!
//! Conventions
//! -----------
//! - This subtree is focused on *integral evaluation*; the quadrature
//!   and hypergeometric collaborators live in [`crate::numerics`].
//! - Error messages are phrased in terms of domain constraints such as
//!   "must lie in (0, 2]" rather than low-level details.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use fou_integrals::fou::{integral, Method};
//!
//!   let value = integral(1.0, 1.0, 1.0, 0.75, 0.75, Method::ClosedForm)?;
//!   assert!(value > 0.0);
//!   # Ok::<(), fou_integrals::fou::IntegralError>(())
//!   ```
//!
//! - Python bindings expose thin wrappers around the same entry points
//!   and rely on `From<IntegralError> for PyErr` to raise `ValueError`.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` messages and payload
//!   embedding; tests in [`validation`] exercise all guard branches.
//! - Unit tests in [`integral`] cover degenerate dispatch, the e − 1
//!   scenario, method agreement, monotonicity, elementwise consistency,
//!   and boundary rejection; the oracle grid comparison lives in
//!   `tests/integration_cross_method.rs`.

pub mod errors;
pub mod integral;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{IntegralError, IntegralResult};
pub use self::integral::{
    Method, integral, integral_elementwise, integral_h2, integral_h2_elementwise, integral_quad,
};
pub use self::validation::validate_input;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use fou_integrals::fou::prelude::*;
//
// to import the main evaluation surface in a single line.

pub mod prelude {
    pub use super::errors::{IntegralError, IntegralResult};
    pub use super::integral::{
        Method, integral, integral_elementwise, integral_h2, integral_h2_elementwise,
        integral_quad,
    };
}
