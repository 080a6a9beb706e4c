//! Numerischer Kern: Parametrisierung, Spline-Löser, Hermite- und Bézier-Auswertung.

pub mod bezier;
pub mod curve_data;
pub mod error;
pub mod fitting;
pub mod hermite;
pub mod parameterization;
pub mod spline_solver;

pub use bezier::{BezierHandles, BEZIER_SAMPLES_PER_SEGMENT};
pub use curve_data::{CurveData, HandleRatio, HandleSide, SampledCurve};
pub use error::FitError;
pub use fitting::FittingKind;
pub use hermite::{AxisSamples, HermiteSegment, SAMPLE_COUNT, T_STEP};
pub use parameterization::{AxisKnots, Knot, ParameterizationKind};
pub use spline_solver::Slope;
