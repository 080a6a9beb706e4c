//! Canvas State: zentrale Datenhaltung.

use super::interaction::{InteractionPhase, Selection};
use super::CommandLog;
use crate::core::{CurveData, FittingKind, ParameterizationKind};
use crate::shared::FitOptions;

/// Bearbeitungsmodus nach Abschluss der Punkteingabe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Keine Bearbeitung
    #[default]
    None,
    /// Punkte verschieben
    MovePoint,
    /// Tangenten unabhängig (nur Lage-Stetigkeit)
    TangentG0,
    /// Tangenten gespiegelt kolinear, Längen unabhängig
    TangentG1,
}

impl EditMode {
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::MovePoint,
        Self::TangentG0,
        Self::TangentG1,
    ];

    pub fn is_tangent(self) -> bool {
        matches!(self, Self::TangentG0 | Self::TangentG1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "Keine",
            Self::MovePoint => "Punkt verschieben",
            Self::TangentG0 => "Tangente G0",
            Self::TangentG1 => "Tangente G1",
        }
    }
}

/// Moduswahl für den Fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FitSettings {
    pub fitting: FittingKind,
    pub parameterization: ParameterizationKind,
}

/// Transiente Bearbeitungssitzung.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EditSession {
    /// Aktiver Bearbeitungsmodus
    pub mode: EditMode,
    /// Laufende Auswahl bzw. Drag
    pub phase: InteractionPhase,
}

impl EditSession {
    pub fn selection(&self) -> Selection {
        self.phase.selection()
    }
}

/// Hauptzustand des Canvas
pub struct CanvasState {
    /// Committete Punkte samt Handles und Steigungen
    pub data: CurveData,
    /// Kurvendarstellung und Parametrisierung
    pub settings: FitSettings,
    /// Bearbeitungssitzung
    pub session: EditSession,
    /// Klicks hängen neue Punkte an
    pub adding: bool,
    /// Laufzeit-Optionen
    pub options: FitOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl CanvasState {
    /// Erstellt einen leeren Canvas im Eingabemodus.
    pub fn new() -> Self {
        Self::with_options(FitOptions::default())
    }

    /// Erstellt einen leeren Canvas mit den Startwerten aus `options`.
    pub fn with_options(options: FitOptions) -> Self {
        Self {
            data: CurveData::new(),
            settings: FitSettings {
                fitting: options.default_fitting,
                parameterization: options.default_parameterization,
            },
            session: EditSession::default(),
            adding: true,
            options,
            command_log: CommandLog::new(),
        }
    }

    pub fn point_count(&self) -> usize {
        self.data.len()
    }

    /// Das Bearbeitungsmenü steht erst nach der Eingabe und ab 2 Punkten bereit.
    pub fn can_edit(&self) -> bool {
        !self.adding && self.data.len() >= 2
    }

    /// Im Menü angebotene Bearbeitungsmodi.
    pub fn available_edit_modes(&self) -> Vec<EditMode> {
        if !self.can_edit() {
            return vec![EditMode::None];
        }
        EditMode::ALL
            .into_iter()
            .filter(|m| !m.is_tangent() || self.settings.fitting.supports_tangent_edit())
            .collect()
    }

    /// Setzt auf einen leeren Canvas im Eingabemodus zurück.
    pub fn reset_to_adding(&mut self) {
        self.data.clear();
        self.adding = true;
        self.session = EditSession::default();
    }
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new()
    }
}
