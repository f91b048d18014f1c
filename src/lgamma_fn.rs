//! Log-gamma via log-space Stirling evaluation and subtractive reduction.

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::traits::FloatScalar;
use crate::{is_integer, stirling_term, REDUCTION_CUTOFF};

/// Above this the dropped 0.5·(ln 2π − ln x) term is smaller than the
/// result can resolve, and the cheaper two-term form takes over.
const TWO_TERM_CUTOFF: f64 = 134_217_728.0; // 2^27

/// Natural logarithm of the gamma function, ln Γ(x).
///
/// This engine exists separately from `gamma(x).ln()` because Γ(x)
/// overflows near x ≈ 171 while ln Γ(x) stays representable to the top of
/// the f64 range — it is the only way to get factorial-like magnitudes
/// for large arguments.
///
/// ln Γ(1) = ln Γ(2) = 0 are returned exactly. For 12 ≤ x < 2^27 the
/// full log-space Stirling form is used; above 2^27 the two-term form
/// x·(ln x − 1); below 12 the same argument reduction as [`gamma`],
/// subtracting logs instead of dividing. Negative non-integers reflect in
/// log space and come out NaN exactly where Γ(x) < 0. Non-positive
/// integers return NaN, and NaN input propagates.
///
/// Like [`gamma`], the computation runs in f64 and narrows on return.
///
/// [`gamma`]: crate::gamma
///
/// # Example
///
/// ```
/// use gamma_approx::lgamma;
///
/// assert_eq!(lgamma(1.0_f64), 0.0);
/// assert_eq!(lgamma(2.0_f64), 0.0);
///
/// // ln Γ(100) ≈ 359.1342, no overflow
/// assert!((lgamma(100.0_f64) - 359.1342053695754).abs() < 1e-6);
/// ```
pub fn lgamma<T: FloatScalar>(x: T) -> T {
    T::from(lgamma_impl(x.to_f64().unwrap())).unwrap()
}

/// Domain-partitioned engine core, always in f64.
pub(crate) fn lgamma_impl(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }

    // exact zeros of ln Γ
    if x == 1.0 || x == 2.0 {
        return 0.0;
    }

    if x <= 0.0 {
        if is_integer(x) {
            return f64::NAN;
        }
        // Log-space reflection; ln of a negative reflection factor is NaN
        // exactly where Γ(x) < 0
        let a = -x;
        let pi = core::f64::consts::PI;
        return (pi / (pi * (a + 1.0)).sin()).ln() - lgamma_impl(a + 1.0);
    }

    if x >= TWO_TERM_CUTOFF {
        return x * (x.ln() - 1.0);
    }

    if x >= REDUCTION_CUTOFF {
        return lstirling(x);
    }

    // Same shift as the gamma reduction, subtracting ln(y−i) per step
    let diff = REDUCTION_CUTOFF as i32 - x as i32;
    let y = x + f64::from(diff);
    let mut r = lstirling(y);
    for i in 1..=diff {
        r -= (y - f64::from(i)).ln();
    }
    r
}

/// Log-space Stirling form with the same correction term as the gamma
/// engine: 0.5·(ln 2π − ln x) + x·(ln(x + 1/(12x − 0.1/x)) − 1).
fn lstirling(x: f64) -> f64 {
    let tau = core::f64::consts::TAU;
    0.5 * (tau.ln() - x.ln()) + x * (stirling_term(x).ln() - 1.0)
}
