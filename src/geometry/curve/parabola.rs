use crate::geometry::SpanProfile;

use super::Curve;

/// Parabolic approximation of a sagging span.
///
/// The cable is deflected below the straight chord by
/// `sag_ratio · span · 4t(1 − t)` with `t = x / span`, so the mid-span dip is
/// exactly `sag_ratio · span`. Always finite.
#[derive(Debug, Clone, Copy)]
pub struct ParabolicCurve {
    profile: SpanProfile,
    sag_ratio: f64,
}

impl ParabolicCurve {
    /// Creates a parabolic span. Negative sag ratios are clamped to zero.
    #[must_use]
    pub fn new(profile: SpanProfile, sag_ratio: f64) -> Self {
        Self {
            profile,
            sag_ratio: sag_ratio.max(0.0),
        }
    }

    /// A straight chord between the supports.
    #[must_use]
    pub fn chord(profile: SpanProfile) -> Self {
        Self::new(profile, 0.0)
    }

    /// Catenary constant of the catenary this parabola approximates,
    /// `span² / (8 · sag)`. Infinite for a straight chord.
    #[must_use]
    pub fn equivalent_constant(&self) -> f64 {
        let sag = self.sag_ratio * self.profile.span();
        if sag <= 0.0 {
            return f64::INFINITY;
        }
        self.profile.span() * self.profile.span() / (8.0 * sag)
    }
}

impl Curve for ParabolicCurve {
    fn profile(&self) -> &SpanProfile {
        &self.profile
    }

    fn height(&self, x: f64) -> f64 {
        let span = self.profile.span();
        if span <= 0.0 {
            return self.profile.z0();
        }
        let t = x / span;
        self.profile.chord_height(x) - self.sag_ratio * span * 4.0 * t * (1.0 - t)
    }
}
