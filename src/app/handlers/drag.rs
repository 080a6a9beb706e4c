//! Handler für Auswahl, Drag und Commit von Punkten und Handles.

use crate::app::interaction::{handle_exists, DragCommit, InteractionPhase, Selection};
use crate::app::{fit_controller, tangent_edit, CanvasState};

/// Wählt einen Punkt für einen Drag aus.
pub fn select_point(state: &mut CanvasState, index: usize) {
    if index >= state.data.len() {
        log::warn!("Punkt-Auswahl {} außerhalb der Punktfolge", index);
        return;
    }
    state.session.phase = InteractionPhase::press(Selection::Point(index));
}

/// Wählt ein Tangenten-Handle für einen Drag aus.
pub fn select_tangent(state: &mut CanvasState, side: crate::core::HandleSide, index: usize) {
    if !state.session.mode.is_tangent() {
        log::warn!("Handle-Auswahl ohne Tangenten-Modus ignoriert");
        return;
    }
    if !handle_exists(side, index, state.data.len()) {
        log::warn!("Handle {:?}[{}] existiert nicht, Auswahl ignoriert", side, index);
        return;
    }
    state.session.phase = InteractionPhase::press(Selection::Tangent(side, index));
}

/// Aktualisiert die Vorschau-Position der laufenden Auswahl.
pub fn drag_to(state: &mut CanvasState, pos: glam::Vec2) {
    state.session.phase = state.session.phase.drag(pos);
}

/// Schreibt einen bestätigten Drag in den committeten Zustand.
///
/// Punkt-Commits berechnen Steigungen und Handles vollständig neu,
/// Handle-Commits leiten nur die Steigungen des Punkts neu ab.
pub fn commit(state: &mut CanvasState) -> anyhow::Result<()> {
    let phase = std::mem::take(&mut state.session.phase);
    match phase.release() {
        Some(DragCommit::Point { index, position }) => {
            state.data.set_position(index, position)?;
            fit_controller::refit(
                &mut state.data,
                state.settings,
                state.options.base_tangent_length,
            )?;
            log::info!(
                "Punkt {} verschoben nach ({:.1}, {:.1})",
                index,
                position.x,
                position.y
            );
        }
        Some(DragCommit::Tangent {
            side,
            index,
            position,
        }) => {
            tangent_edit::apply_handle_drag(
                &mut state.data,
                state.session.mode,
                side,
                index,
                position,
            )?;
            log::info!("Handle {:?}[{}] festgeschrieben", side, index);
        }
        None => {}
    }
    Ok(())
}

/// Verwirft die laufende Interaktion.
pub fn cancel(state: &mut CanvasState) {
    if state.session.phase.is_dragging() {
        log::debug!("Drag abgebrochen, committeter Zustand unverändert");
    }
    state.session.phase = InteractionPhase::Idle;
}
