use crate::app::state::EditMode;
use crate::core::{FittingKind, ParameterizationKind};

/// Canvas-Intents sind Eingaben des Hosts ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasIntent {
    /// Primärtaste gedrückt
    PointerPressed { pos: glam::Vec2 },
    /// Maus mit gedrückter Primärtaste bewegt
    PointerDragged { pos: glam::Vec2 },
    /// Primärtaste losgelassen
    PointerReleased { pos: glam::Vec2 },
    /// Punkteingabe beenden (Mittelklick)
    FinishAddingRequested,
    /// Punkteingabe wieder aufnehmen
    EnableAddingRequested,
    /// Letzten Punkt entfernen
    RemoveLastRequested,
    /// Alle Punkte entfernen
    RemoveAllRequested,
    /// Kurvendarstellung im Menü gewählt
    FittingKindSelected { kind: FittingKind },
    /// Parametrisierung im Menü gewählt
    ParameterizationSelected { kind: ParameterizationKind },
    /// Bearbeitungsmodus im Menü gewählt
    EditModeSelected { mode: EditMode },
}
