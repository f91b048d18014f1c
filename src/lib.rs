//! # gamma-approx
//!
//! Closed-form approximations of the gamma function and its factorial-family
//! derivatives, no-std compatible. Allocation-free and stateless: every call
//! is a bounded, deterministic computation over a small immutable constant
//! table, suitable for embedded targets.
//!
//! ## Quick start
//!
//! ```
//! use gamma_approx::{factorial, gamma, lgamma};
//!
//! // Γ(5) = 4! = 24, exact via the integer table
//! assert_eq!(gamma(5.0_f64), 24.0);
//!
//! // Γ(0.5) = √π
//! let sqrt_pi = core::f64::consts::PI.sqrt();
//! assert!((gamma(0.5_f64) - sqrt_pi).abs() < 1e-8);
//!
//! // ln Γ(x) stays finite long after Γ(x) has overflowed
//! assert_eq!(factorial(35.0), f32::INFINITY);
//! assert!(lgamma(1.0e18_f64).is_finite());
//! ```
//!
//! ## Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`gamma`] | Gamma function Γ(x) |
//! | [`lgamma`] | Log-gamma ln Γ(x) |
//! | [`factorial`] / [`factorial_int`] | x! = Γ(x+1) |
//! | [`lfactorial`] / [`lfactorial_int`] | ln x! |
//! | [`subfactorial`] | Derangement count !n |
//! | [`lsubfactorial`] | ln !n |
//! | [`fast::gamma`] | Raw Stirling formula, no checks |
//! | [`fast::lgamma`] | Exponent-field log-gamma estimate |
//! | [`fast::lgamma_corrected`] | Mantissa-table-refined estimate |
//!
//! ## Engines
//!
//! The precise functions partition the real line into regimes — NaN
//! passthrough, poles, exact integer table, a corrected Stirling form for
//! x ≥ 12, argument reduction below 12, and the reflection formula for
//! negative arguments — and always compute in f64 before narrowing to the
//! caller's precision. The [`fast`] module is an independent second engine
//! that skips all of that: branch-light, recursion-free evaluation whose
//! accuracy improves with the argument's magnitude.
//!
//! Errors travel as IEEE-754 sentinels, never as `Result`: NaN marks a
//! domain error (a pole, or a negative argument to a factorial), +∞ marks
//! magnitude overflow, and NaN input propagates unchanged.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm |
//! | `libm`  | no      | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
use num_traits::Float;

pub mod fast;
pub mod traits;

mod factorial_fn;
mod gamma_fn;
mod lgamma_fn;


pub use factorial_fn::{
    factorial, factorial_int, lfactorial, lfactorial_int, lsubfactorial, subfactorial,
};
pub use gamma_fn::gamma;
pub use lgamma_fn::lgamma;
pub use traits::{BitFloat, FloatScalar};

// ---------------------------------------------------------------------------
// Shared domain constants
// ---------------------------------------------------------------------------

/// Factorial lookup table: FACTORIALS[n] = n! for n = 0..=34.
/// 34! is the largest factorial representable in single precision.
pub(crate) const FACTORIALS: [f32; 35] = [
    1.0,
    1.0,
    2.0,
    6.0,
    24.0,
    120.0,
    720.0,
    5040.0,
    40320.0,
    362880.0,
    3628800.0,
    39916800.0,
    479001600.0,
    6227020800.0,
    87178291200.0,
    1307674368000.0,
    20922789888000.0,
    355687428096000.0,
    6402373705728000.0,
    121645100408832000.0,
    2432902008176640000.0,
    51090942171709440000.0,
    1124000727777607680000.0,
    25852016738884976640000.0,
    620448401733239439360000.0,
    15511210043330985984000000.0,
    403291461126605635584000000.0,
    10888869450418352160768000000.0,
    304888344611713860501504000000.0,
    8841761993739701954543616000000.0,
    265252859812191058636308480000000.0,
    8222838654177922817725562880000000.0,
    263130836933693530167218012160000000.0,
    8683317618811886495518194401280000000.0,
    295232799039604140847618609643520000000.0,
];

/// Arguments below this are shifted upward before asymptotic evaluation;
/// at and above it the corrected Stirling form is accurate to ~1e-9
/// relative.
pub(crate) const REDUCTION_CUTOFF: f64 = 12.0;

/// True when x lands exactly on an integer. Every float of magnitude
/// ≥ 2^53 is an integer under this test, so the classification holds at
/// arbitrary magnitudes with no integer cast involved.
#[inline]
pub(crate) fn is_integer(x: f64) -> bool {
    x == x.floor()
}

/// Corrected Stirling argument x + 1/(12x − 0.1/x), shared by the gamma
/// and log-gamma asymptotic forms.
#[inline]
pub(crate) fn stirling_term(x: f64) -> f64 {
    x + 1.0 / (12.0 * x - 0.1 / x)
}
