//! Kurvendarstellung für den Fit.

use serde::{Deserialize, Serialize};

/// Art der gefitteten Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FittingKind {
    /// Natürlicher kubischer Spline, pro Achse über Hermite ausgewertet
    #[default]
    Spline,
    /// Stückweise kubische Bézier-Kette mit geschätzten Handles
    Bezier,
}

impl FittingKind {
    pub const ALL: [Self; 2] = [Self::Spline, Self::Bezier];

    pub fn label(self) -> &'static str {
        match self {
            Self::Spline => "Spline",
            Self::Bezier => "Bézier",
        }
    }

    /// Tangenten-Bearbeitung (G0/G1) ist nur auf Splines definiert.
    pub fn supports_tangent_edit(self) -> bool {
        matches!(self, Self::Spline)
    }
}
