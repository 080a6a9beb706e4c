use crate::app::state::EditMode;
use crate::core::{FittingKind, HandleSide, ParameterizationKind};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCommand {
    /// Punkt an Canvas-Position anhängen
    AddPoint { pos: glam::Vec2 },
    /// Punkt für Drag auswählen
    SelectPoint { index: usize },
    /// Tangenten-Handle für Drag auswählen
    SelectTangent { side: HandleSide, index: usize },
    /// Laufende Auswahl auf Cursor-Position ziehen
    DragTo { pos: glam::Vec2 },
    /// Drag festschreiben (oder Auswahl ohne Bewegung beenden)
    CommitDrag,
    /// Drag verwerfen, committeter Zustand bleibt
    CancelDrag,
    /// Punkteingabe beenden
    FinishAdding,
    /// Punkteingabe aktivieren
    EnableAdding,
    /// Letzten Punkt entfernen
    RemoveLastPoint,
    /// Alle Punkte entfernen
    RemoveAllPoints,
    /// Kurvendarstellung setzen
    SetFittingKind { kind: FittingKind },
    /// Parametrisierung setzen
    SetParameterization { kind: ParameterizationKind },
    /// Bearbeitungsmodus setzen
    SetEditMode { mode: EditMode },
}
