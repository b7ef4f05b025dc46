use tracing::warn;

use crate::geometry::curve::rise;
use crate::geometry::{CatenaryCurve, SpanCurve, SpanProfile};
use crate::math::root_finding::find_root;

use super::vertex::solve_vertex_fraction;
use super::{SolveStrategy, SolverParams, Stage, StageOutcome};

/// Sag mode: searches `a` so that the curve dips `sag_ratio · L` below the
/// chord at mid-span.
///
/// The dip shrinks as `a` grows. Candidates whose vertex search fails are
/// `NaN`, which the outer search probes around before expanding.
pub(super) fn solve(profile: &SpanProfile, sag_ratio: f64, params: &SolverParams) -> StageOutcome {
    let sag_ratio = sag_ratio.max(0.0);
    let span = profile.span();
    let mid = 0.5 * span;
    let target = sag_ratio * span;

    let residual = |a: f64| match solve_vertex_fraction(profile, a, params) {
        Ok(u) => (0.5 * profile.dz() - rise(a, u * span, mid)) - target,
        Err(_) => f64::NAN,
    };

    let lo = (0.01 * span).max(0.1);
    let hi = 100.0 * span;
    let solved = find_root(
        residual,
        lo,
        hi,
        &params.shape_search(params.sag_probe_attempts),
    )
    .and_then(|a| solve_vertex_fraction(profile, a, params).map(|u| (a, u * span)));

    match solved {
        Ok((a, b)) => StageOutcome::Solved(
            SpanCurve::Catenary(CatenaryCurve::new(*profile, a, b)),
            SolveStrategy::Sag,
        ),
        Err(err) => {
            warn!(%err, sag_ratio, "sag search failed, using parabola");
            StageOutcome::Fallback(Stage::Parabola { sag_ratio })
        }
    }
}
