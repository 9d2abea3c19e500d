//! SweepKit geometry: sampled curves with orthonormal frames.

pub mod control_points;
pub mod curve;
pub mod frame;

pub use control_points::{ControlPoints, Dimension};
pub use curve::{eval_bezier, eval_bspline, eval_catmull_rom, eval_circle, Curve, SplineKind};
pub use frame::{CurveFrame, FrameTransport};
