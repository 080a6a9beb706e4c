//! Fehlertypen des numerischen Kerns.

use thiserror::Error;

/// Fehler beim Parametrisieren, Lösen oder Bearbeiten einer Kurve.
///
/// Der Kern erzeugt nie NaN-Werte: entartete Eingaben werden als
/// Fehler gemeldet, der Aufrufer entscheidet über den Fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FitError {
    /// Weniger als zwei Punkte, keine Kurve möglich
    #[error("mindestens 2 Punkte erforderlich, vorhanden: {count}")]
    TooFewPoints { count: usize },
    /// Parameter-Intervall der Länge 0 (doppelte Parameterwerte)
    #[error("Parameter-Intervall {index} hat Länge 0")]
    DegenerateInterval { index: usize },
    /// Tangenten-Bearbeitung ohne passenden Modus angefordert
    #[error("Modus-Kombination ungültig: {reason}")]
    InvalidModeCombination { reason: &'static str },
    /// Handle-Ratio 0, die Steigung ist aus dem Handle nicht rückrechenbar
    #[error("Handle-Ratio an Punkt {index} ist 0")]
    DegenerateHandleRatio { index: usize },
    /// Punkt-Index außerhalb der Punktfolge
    #[error("Index {index} außerhalb der Punktfolge (Länge {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
