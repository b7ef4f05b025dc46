pub mod curve;
pub mod profile;

pub use curve::{CatenaryCurve, CatenaryParams, Curve, CurveDomain, ParabolicCurve, SpanCurve};
pub use profile::SpanProfile;
