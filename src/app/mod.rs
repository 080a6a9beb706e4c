//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod fit_controller;
pub mod frame;
pub mod handlers;
pub mod interaction;
mod intent_mapping;
/// Canvas State und Bearbeitungssitzung
pub mod state;
pub mod tangent_edit;

pub use command_log::CommandLog;
pub use controller::CanvasController;
pub use events::{CanvasCommand, CanvasIntent};
pub use frame::{CurveFrame, HandleLine};
pub use interaction::{InteractionPhase, Selection};
pub use state::{CanvasState, EditMode, EditSession, FitSettings};
