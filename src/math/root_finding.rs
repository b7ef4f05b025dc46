//! Bracketing bisection for scalar functions of one variable.
//!
//! The solver knows nothing about the function it drives. Infinite values
//! keep their sign and take part in bracketing, so a caller can report
//! "unboundedly positive" with `f64::INFINITY`. `NaN` marks a failed
//! evaluation.

use crate::error::SolveError;

/// How a search interval grows while no sign change is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// The interval doubles in width about its midpoint.
    Symmetric,
    /// For strictly positive domains: the lower bound halves and the upper
    /// bound doubles.
    Positive,
}

impl Expansion {
    /// Returns the next, wider interval.
    #[must_use]
    pub fn widen(self, lo: f64, hi: f64) -> (f64, f64) {
        match self {
            Self::Symmetric => {
                let center = lo + 0.5 * (hi - lo);
                let half = hi - lo;
                (center - half, center + half)
            }
            Self::Positive => (lo * 0.5, hi * 2.0),
        }
    }

    /// Moves one bound a quarter of the way towards the other.
    ///
    /// `Positive` intervals are nudged in log space.
    #[must_use]
    pub fn nudge(self, from: f64, towards: f64) -> f64 {
        match self {
            Self::Symmetric => from + 0.25 * (towards - from),
            Self::Positive => from * (towards / from).powf(0.25),
        }
    }
}

/// Limits and tolerances for one root search.
#[derive(Debug, Clone, Copy)]
pub struct BracketParams {
    /// Maximum number of interval expansions before giving up.
    pub max_expand: usize,
    /// Maximum number of bisection steps.
    pub max_iter: usize,
    /// The search stops once `|f(x)| < tolerance`.
    pub tolerance: f64,
    /// Growth policy for the bracketing phase.
    pub expansion: Expansion,
    /// Number of inward nudges tried for a bound that evaluates to `NaN`
    /// before expansion starts.
    pub probe_attempts: usize,
}

impl Default for BracketParams {
    fn default() -> Self {
        Self {
            max_expand: 20,
            max_iter: 64,
            tolerance: 1e-6,
            expansion: Expansion::Symmetric,
            probe_attempts: 0,
        }
    }
}

/// Finds `x` with `f(x) ≈ 0`, starting from the interval `[lo, hi]`.
///
/// The interval is widened per [`BracketParams::expansion`] until the two
/// bound values have opposite signs, then bisected. Returns the midpoint of
/// the final bracket when the iteration budget runs out before `tolerance`
/// is met.
///
/// # Errors
///
/// Returns [`SolveError::RootNotBracketed`] if no sign change is found
/// within `max_expand` expansions, or if the bracket narrows onto a region
/// where `f` only evaluates to `NaN`.
pub fn find_root<F>(mut f: F, lo: f64, hi: f64, params: &BracketParams) -> Result<f64, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let (mut lo, mut hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let mut f_lo = f(lo);
    let mut f_hi = f(hi);

    for _ in 0..params.probe_attempts {
        if !f_lo.is_nan() && !f_hi.is_nan() {
            break;
        }
        if f_lo.is_nan() {
            lo = params.expansion.nudge(lo, hi);
            f_lo = f(lo);
        }
        if f_hi.is_nan() {
            hi = params.expansion.nudge(hi, lo);
            f_hi = f(hi);
        }
    }

    let mut expansions = 0;
    loop {
        if converged(f_lo, params.tolerance) {
            return Ok(lo);
        }
        if converged(f_hi, params.tolerance) {
            return Ok(hi);
        }
        if opposite_signs(f_lo, f_hi) {
            break;
        }
        if expansions == params.max_expand {
            return Err(SolveError::RootNotBracketed { lo, hi });
        }
        expansions += 1;

        // A bound whose widened value fails to evaluate stays where it is.
        let (next_lo, next_hi) = params.expansion.widen(lo, hi);
        let value = f(next_lo);
        if !value.is_nan() || f_lo.is_nan() {
            lo = next_lo;
            f_lo = value;
        }
        let value = f(next_hi);
        if !value.is_nan() || f_hi.is_nan() {
            hi = next_hi;
            f_hi = value;
        }
    }

    for _ in 0..params.max_iter {
        let mid = lo + 0.5 * (hi - lo);
        if mid <= lo || mid >= hi {
            break;
        }
        let (mid, f_mid) = match split(&mut f, lo, hi, mid) {
            Some(point) => point,
            None => return Err(SolveError::RootNotBracketed { lo, hi }),
        };
        if converged(f_mid, params.tolerance) {
            return Ok(mid);
        }
        if (f_mid > 0.0) == (f_lo > 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    Ok(lo + 0.5 * (hi - lo))
}

/// Evaluates the bisection point, stepping to the quarter points of the
/// bracket when the midpoint fails to evaluate.
fn split<F>(f: &mut F, lo: f64, hi: f64, mid: f64) -> Option<(f64, f64)>
where
    F: FnMut(f64) -> f64,
{
    let quarter = 0.25 * (hi - lo);
    [mid, lo + quarter, hi - quarter]
        .into_iter()
        .map(|x| (x, f(x)))
        .find(|(_, value)| !value.is_nan())
}

fn converged(value: f64, tolerance: f64) -> bool {
    value.abs() < tolerance
}

/// Whether two evaluations straddle zero. `NaN` never brackets.
fn opposite_signs(a: f64, b: f64) -> bool {
    !a.is_nan() && !b.is_nan() && (a > 0.0) != (b > 0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params(tolerance: f64) -> BracketParams {
        BracketParams {
            tolerance,
            ..BracketParams::default()
        }
    }

    #[test]
    fn finds_square_root_of_two() {
        let root = find_root(|x| x * x - 2.0, 0.0, 2.0, &params(1e-12)).unwrap();
        assert_abs_diff_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn accepts_reversed_bounds() {
        let root = find_root(|x| x - 0.25, 1.0, 0.0, &params(1e-12)).unwrap();
        assert_abs_diff_eq!(root, 0.25, epsilon = 1e-9);
    }

    #[test]
    fn symmetric_expansion_reaches_root_outside_initial_interval() {
        let root = find_root(|x| x - 37.0, -1.0, 1.0, &params(1e-10)).unwrap();
        assert_abs_diff_eq!(root, 37.0, epsilon = 1e-8);
    }

    #[test]
    fn positive_expansion_stays_positive() {
        let p = BracketParams {
            expansion: Expansion::Positive,
            ..params(1e-12)
        };
        let mut smallest = f64::INFINITY;
        let root = find_root(
            |x| {
                smallest = smallest.min(x);
                1.0 / x - 0.001
            },
            1.0,
            10.0,
            &p,
        )
        .unwrap();
        assert!((root - 1000.0).abs() < 1e-4, "root = {root}");
        assert!(smallest > 0.0);
    }

    #[test]
    fn reports_not_bracketed_without_sign_change() {
        let result = find_root(|x| x * x + 1.0, -1.0, 1.0, &params(1e-9));
        assert!(matches!(result, Err(SolveError::RootNotBracketed { .. })));
    }

    #[test]
    fn expansion_budget_is_respected() {
        let mut calls = 0;
        let p = BracketParams {
            max_expand: 3,
            ..params(1e-9)
        };
        let result = find_root(
            |x| {
                calls += 1;
                x * x + 1.0
            },
            -1.0,
            1.0,
            &p,
        );
        assert!(result.is_err());
        assert_eq!(calls, 2 + 2 * 3);
    }

    #[test]
    fn positive_infinity_counts_as_positive() {
        let f = |x: f64| if x < 1.0 { f64::INFINITY } else { 2.0 - x };
        let root = find_root(f, 0.5, 3.0, &params(1e-10)).unwrap();
        assert_abs_diff_eq!(root, 2.0, epsilon = 1e-8);
    }

    #[test]
    fn nan_bound_is_probed_inward() {
        let f = |x: f64| if x < 1.0 { f64::NAN } else { x - 3.0 };

        let without_probe = find_root(f, 0.5, 10.0, &params(1e-10));
        assert!(without_probe.is_err());

        let with_probe = BracketParams {
            probe_attempts: 5,
            ..params(1e-10)
        };
        let root = find_root(f, 0.5, 10.0, &with_probe).unwrap();
        assert_abs_diff_eq!(root, 3.0, epsilon = 1e-8);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn nan_midpoint_is_stepped_around() {
        let f = |x: f64| if x == 1.0 { f64::NAN } else { x - 1.5 };
        let root = find_root(f, 0.0, 2.0, &params(1e-10)).unwrap();
        assert_abs_diff_eq!(root, 1.5, epsilon = 1e-8);
    }

    #[test]
    fn nan_band_around_root_is_not_bracketed() {
        let f = |x: f64| if (x - 1.0).abs() < 0.1 { f64::NAN } else { x - 1.0 };
        let result = find_root(f, 0.0, 2.0, &params(1e-10));
        assert!(matches!(result, Err(SolveError::RootNotBracketed { .. })));
    }

    #[test]
    fn returns_bound_that_already_satisfies_tolerance() {
        let root = find_root(|x| x, 0.0, 5.0, &params(1e-9)).unwrap();
        assert!(root.abs() < f64::EPSILON);
    }

    #[test]
    fn nudge_moves_a_quarter_of_the_way() {
        assert_abs_diff_eq!(Expansion::Symmetric.nudge(0.0, 8.0), 2.0);
        assert_abs_diff_eq!(Expansion::Positive.nudge(1.0, 16.0), 2.0, epsilon = 1e-12);
    }
}
