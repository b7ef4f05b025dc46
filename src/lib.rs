//! Catenary geometry for a cable hanging between two support points.
//!
//! The entry point is [`TessellateCatenary`]: give it two points in a local
//! frame with `+Z` up and a [`Mode`], and it returns the sampled cable with
//! descriptive metadata.
//!
//! ```
//! use catenary::math::Point3;
//! use catenary::{Mode, TessellateCatenary};
//!
//! let samples = TessellateCatenary::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(200.0, 0.0, 0.0),
//!     Mode::Physics { tension: 15_000.0, linear_weight: 30.0 },
//! )
//! .execute()?;
//! assert_eq!(samples.points.len(), 65);
//! # Ok::<(), catenary::CatenaryError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{CatenaryError, Result};
pub use operations::solve::{Mode, SolveStrategy, SolverParams};
pub use tessellation::{CatenaryMetadata, SampleSet, SamplingParams, TessellateCatenary};
