//! Handler für Punkteingabe und Entfernen von Punkten.

use crate::app::fit_controller;
use crate::app::state::EditMode;
use crate::app::CanvasState;

/// Hängt einen Punkt an und berechnet die Kurve neu.
pub fn add_point(state: &mut CanvasState, pos: glam::Vec2) -> anyhow::Result<()> {
    if !state.adding {
        log::warn!("Punkt ({:.1}, {:.1}) ignoriert: Eingabe ist beendet", pos.x, pos.y);
        return Ok(());
    }
    state.data.push(pos);
    fit_controller::refit(
        &mut state.data,
        state.settings,
        state.options.base_tangent_length,
    )?;
    log::debug!("Punkt {} hinzugefügt: ({:.1}, {:.1})", state.data.len() - 1, pos.x, pos.y);
    Ok(())
}

/// Beendet die Punkteingabe, ohne einen Punkt anzuhängen.
pub fn finish_adding(state: &mut CanvasState) {
    state.adding = false;
    log::info!("Punkteingabe beendet ({} Punkte)", state.data.len());
}

/// Nimmt die Punkteingabe wieder auf; der Bearbeitungsmodus wird zurückgesetzt.
pub fn enable_adding(state: &mut CanvasState) {
    state.adding = true;
    state.session.mode = EditMode::None;
    log::info!("Punkteingabe aktiviert");
}

/// Entfernt den letzten Punkt. Unter 2 Punkten wird alles zurückgesetzt.
pub fn remove_last(state: &mut CanvasState) -> anyhow::Result<()> {
    if state.data.pop().is_none() {
        return Ok(());
    }
    if state.data.len() < 2 {
        state.reset_to_adding();
        log::info!("Weniger als 2 Punkte: Canvas zurückgesetzt");
        return Ok(());
    }
    fit_controller::refit(
        &mut state.data,
        state.settings,
        state.options.base_tangent_length,
    )?;
    log::info!("Letzter Punkt entfernt, {} verbleibend", state.data.len());
    Ok(())
}

/// Entfernt alle Punkte und kehrt in den Eingabemodus zurück.
pub fn remove_all(state: &mut CanvasState) {
    let removed = state.data.len();
    state.reset_to_adding();
    log::info!("Alle {} Punkte entfernt", removed);
}
