use tracing::{debug, warn};

use crate::geometry::curve::arc_length;
use crate::geometry::{CatenaryCurve, SpanCurve, SpanProfile};
use crate::math::root_finding::find_root;

use super::vertex::solve_vertex;
use super::{SolveStrategy, SolverParams, Stage, StageOutcome};

/// Length mode: searches `a` so that the arc length between the supports
/// equals the target, solving the vertex for every candidate `a`.
///
/// Predicted length falls as `a` grows. A candidate whose vertex search
/// fails counts as infinitely long.
pub(super) fn solve(
    profile: &SpanProfile,
    target_length: f64,
    params: &SolverParams,
) -> StageOutcome {
    let span = profile.span();
    let chord = profile.chord_length();
    let target = target_length.max(chord + params.length_epsilon);
    if target > target_length {
        debug!(target_length, chord, "target length clamped to chord");
    }

    let residual = |a: f64| match solve_vertex(profile, a, params) {
        Ok(b) => arc_length(a, b, span) - target,
        Err(_) => f64::INFINITY,
    };

    let lo = (span / 600.0).max(0.1);
    let hi = 1000.0 * span;
    let solved = find_root(residual, lo, hi, &params.shape_search(0))
        .and_then(|a| solve_vertex(profile, a, params).map(|b| (a, b)));

    match solved {
        Ok((a, b)) => StageOutcome::Solved(
            SpanCurve::Catenary(CatenaryCurve::new(*profile, a, b)),
            SolveStrategy::Length,
        ),
        Err(err) => {
            let sag_ratio = parabolic_sag_ratio(profile, target);
            warn!(%err, target, sag_ratio, "length search failed");
            StageOutcome::Fallback(Stage::Sag { sag_ratio })
        }
    }
}

/// Sag ratio of the parabola whose length matches `length`, from
/// `length ≈ chord + 8·sag² / (3·chord)`.
fn parabolic_sag_ratio(profile: &SpanProfile, length: f64) -> f64 {
    let chord = profile.chord_length();
    let excess = (length - chord).max(0.0);
    (3.0 * chord * excess / 8.0).sqrt() / profile.span()
}
