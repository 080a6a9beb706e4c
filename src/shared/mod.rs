//! Geteilte Konfiguration und Konstanten.

pub mod options;

pub use options::FitOptions;
pub use options::{BASE_TANGENT_LENGTH, PICK_TOLERANCE};
