//! CanvasIntent- und CanvasCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::CanvasCommand;
pub use intent::CanvasIntent;
