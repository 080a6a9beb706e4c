//! Interaktiver Kurven-Fit für 2D-Punktfolgen.
//! Core-Funktionalität als Library exportiert für Host-Anwendungen und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    CanvasCommand, CanvasController, CanvasIntent, CanvasState, CurveFrame, EditMode, HandleLine,
    Selection,
};
pub use core::{
    CurveData, FitError, FittingKind, HandleSide, ParameterizationKind, SampledCurve, Slope,
};
pub use shared::FitOptions;
