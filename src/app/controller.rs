//! Canvas Controller für zentrale Event-Verarbeitung.

use glam::Vec2;

use super::frame::{self, CurveFrame};
use super::{CanvasCommand, CanvasIntent, CanvasState};

/// Orchestriert Host-Events und Handler auf den CanvasState.
#[derive(Default)]
pub struct CanvasController;

impl CanvasController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut CanvasState,
        intent: CanvasIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(
        &self,
        state: &CanvasState,
        intent: CanvasIntent,
    ) -> Vec<CanvasCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem CanvasState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut CanvasState,
        command: CanvasCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Punkteingabe ===
            CanvasCommand::AddPoint { pos } => handlers::editing::add_point(state, pos)?,
            CanvasCommand::FinishAdding => handlers::editing::finish_adding(state),
            CanvasCommand::EnableAdding => handlers::editing::enable_adding(state),
            CanvasCommand::RemoveLastPoint => handlers::editing::remove_last(state)?,
            CanvasCommand::RemoveAllPoints => handlers::editing::remove_all(state),

            // === Auswahl & Drag ===
            CanvasCommand::SelectPoint { index } => handlers::drag::select_point(state, index),
            CanvasCommand::SelectTangent { side, index } => {
                handlers::drag::select_tangent(state, side, index)
            }
            CanvasCommand::DragTo { pos } => handlers::drag::drag_to(state, pos),
            CanvasCommand::CommitDrag => handlers::drag::commit(state)?,
            CanvasCommand::CancelDrag => handlers::drag::cancel(state),

            // === Modi ===
            CanvasCommand::SetFittingKind { kind } => {
                handlers::modes::set_fitting_kind(state, kind)?
            }
            CanvasCommand::SetParameterization { kind } => {
                handlers::modes::set_parameterization(state, kind)?
            }
            CanvasCommand::SetEditMode { mode } => handlers::modes::set_edit_mode(state, mode)?,
        }

        Ok(())
    }

    /// Baut den Frame des aktuellen Ticks (reiner Lesezugriff).
    pub fn build_frame(&self, state: &CanvasState, cursor: Vec2) -> CurveFrame {
        frame::build(state, cursor)
    }
}
