//! Mapping von Host-Intents auf mutierende Canvas-Commands.

use super::interaction::{hit_test, Selection};
use super::{CanvasCommand, CanvasIntent, CanvasState};

/// Übersetzt einen `CanvasIntent` in eine Sequenz ausführbarer `CanvasCommand`s.
///
/// Hit-Tests passieren hier, damit die Handler nur noch Indizes sehen.
pub fn map_intent_to_commands(state: &CanvasState, intent: CanvasIntent) -> Vec<CanvasCommand> {
    match intent {
        CanvasIntent::PointerPressed { pos } => {
            if state.adding {
                return vec![CanvasCommand::AddPoint { pos }];
            }
            match hit_test(&state.data, state.session.mode, &state.options, pos) {
                Selection::Point(index) => vec![CanvasCommand::SelectPoint { index }],
                Selection::Tangent(side, index) => {
                    vec![CanvasCommand::SelectTangent { side, index }]
                }
                Selection::None => vec![],
            }
        }
        CanvasIntent::PointerDragged { pos } => {
            if state.session.phase.is_active() {
                vec![CanvasCommand::DragTo { pos }]
            } else {
                vec![]
            }
        }
        CanvasIntent::PointerReleased { pos } => {
            if state.session.phase.is_dragging() {
                vec![CanvasCommand::DragTo { pos }, CanvasCommand::CommitDrag]
            } else if state.session.phase.is_active() {
                // Reine Auswahl ohne Bewegung wird nicht zum Drag
                vec![CanvasCommand::CommitDrag]
            } else {
                vec![]
            }
        }
        CanvasIntent::FinishAddingRequested => vec![CanvasCommand::FinishAdding],
        CanvasIntent::EnableAddingRequested => with_cancel(state, CanvasCommand::EnableAdding),
        CanvasIntent::RemoveLastRequested => with_cancel(state, CanvasCommand::RemoveLastPoint),
        CanvasIntent::RemoveAllRequested => with_cancel(state, CanvasCommand::RemoveAllPoints),
        CanvasIntent::FittingKindSelected { kind } => {
            with_cancel(state, CanvasCommand::SetFittingKind { kind })
        }
        CanvasIntent::ParameterizationSelected { kind } => {
            with_cancel(state, CanvasCommand::SetParameterization { kind })
        }
        CanvasIntent::EditModeSelected { mode } => {
            with_cancel(state, CanvasCommand::SetEditMode { mode })
        }
    }
}

/// Bricht eine laufende Interaktion vor dem eigentlichen Command ab.
fn with_cancel(state: &CanvasState, command: CanvasCommand) -> Vec<CanvasCommand> {
    if state.session.phase.is_active() {
        vec![CanvasCommand::CancelDrag, command]
    } else {
        vec![command]
    }
}

#[cfg(test)]
mod tests;
