//! Factorial-family functions layered on the gamma engines.

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::gamma_fn::gamma_impl;
use crate::lgamma_fn::lgamma_impl;
use crate::FACTORIALS;

/// n + 1 as f64 without wrapping at i64::MAX.
#[inline]
fn successor(n: i64) -> f64 {
    (i128::from(n) + 1) as f64
}

/// Factorial x! = Γ(x+1) for real x ≥ 0.
///
/// Exact for integer x up to 34; +∞ once x! overflows single precision;
/// NaN for negative arguments.
///
/// # Example
///
/// ```
/// use gamma_approx::factorial;
///
/// assert_eq!(factorial(5.0), 120.0);
/// assert_eq!(factorial(40.0), f32::INFINITY);
/// assert!(factorial(-1.5).is_nan());
/// ```
pub fn factorial(x: f32) -> f32 {
    if x < 0.0 {
        return f32::NAN;
    }
    gamma_impl(f64::from(x) + 1.0) as f32
}

/// Factorial n! for integer n ≥ 0, straight from the lookup table.
///
/// # Example
///
/// ```
/// use gamma_approx::factorial_int;
///
/// assert_eq!(factorial_int(10), 3628800.0);
/// assert_eq!(factorial_int(35), f32::INFINITY);
/// assert!(factorial_int(-1).is_nan());
/// ```
pub fn factorial_int(n: i64) -> f32 {
    if n < 0 {
        return f32::NAN;
    }
    if n >= FACTORIALS.len() as i64 {
        return f32::INFINITY;
    }
    FACTORIALS[n as usize]
}

/// Log-factorial ln x! = ln Γ(x+1) for real x ≥ 0; NaN for negative x.
///
/// Stays finite far beyond the point where [`factorial`] overflows.
///
/// # Example
///
/// ```
/// use gamma_approx::lfactorial;
///
/// assert_eq!(lfactorial(0.0), 0.0);
/// assert!((lfactorial(10.0) - 3628800.0_f32.ln()).abs() < 1e-4);
/// ```
pub fn lfactorial(x: f32) -> f32 {
    if x < 0.0 {
        return f32::NAN;
    }
    lgamma_impl(f64::from(x) + 1.0) as f32
}

/// Log-factorial ln n! for integer n ≥ 0; NaN for negative n.
///
/// The successor n+1 is formed in 128-bit arithmetic, so the full i64
/// range is accepted without wrapping.
///
/// # Example
///
/// ```
/// use gamma_approx::lfactorial_int;
///
/// assert_eq!(lfactorial_int(1), 0.0);
/// assert!(lfactorial_int(i64::MAX).is_finite());
/// ```
pub fn lfactorial_int(n: i64) -> f32 {
    if n < 0 {
        return f32::NAN;
    }
    lgamma_impl(successor(n)) as f32
}

/// Subfactorial (derangement count) !n = round((n! + 1)/e) for n ≥ 0.
///
/// Within the table range the rounded closed form is used; from n = 35 on
/// the count overflows single precision and +∞ is returned. Negative n
/// returns NaN.
///
/// # Example
///
/// ```
/// use gamma_approx::subfactorial;
///
/// assert_eq!(subfactorial(0), 1.0);
/// assert_eq!(subfactorial(4), 9.0);
/// assert_eq!(subfactorial(35), f32::INFINITY);
/// ```
pub fn subfactorial(n: i64) -> f32 {
    if n < 0 {
        return f32::NAN;
    }
    if n >= FACTORIALS.len() as i64 {
        return f32::INFINITY;
    }
    ((f64::from(FACTORIALS[n as usize]) + 1.0) / core::f64::consts::E).round() as f32
}

/// Log-subfactorial ln !n for n ≥ 0; NaN for negative n.
///
/// Within the table range this is the log of [`subfactorial`]; beyond it
/// !n ≈ n!/e, so ln !n = ln Γ(n+1) − 1, which stays finite across the
/// whole i64 range (with the same widened successor as
/// [`lfactorial_int`]).
///
/// # Example
///
/// ```
/// use gamma_approx::lsubfactorial;
///
/// assert_eq!(lsubfactorial(0), 0.0);
/// assert!((lsubfactorial(4) - 9.0_f32.ln()).abs() < 1e-6);
/// assert!(lsubfactorial(1000).is_finite());
/// ```
pub fn lsubfactorial(n: i64) -> f32 {
    if n < 0 {
        return f32::NAN;
    }
    if n < FACTORIALS.len() as i64 {
        let count = (f64::from(FACTORIALS[n as usize]) + 1.0) / core::f64::consts::E;
        return count.round().ln() as f32;
    }
    (lgamma_impl(successor(n)) - 1.0) as f32
}
