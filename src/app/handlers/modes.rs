//! Handler für Moduswahl: Kurvendarstellung, Parametrisierung, Bearbeitung.

use crate::app::fit_controller;
use crate::app::state::EditMode;
use crate::app::CanvasState;
use crate::core::{FittingKind, ParameterizationKind};

fn refit(state: &mut CanvasState) -> anyhow::Result<()> {
    fit_controller::refit(
        &mut state.data,
        state.settings,
        state.options.base_tangent_length,
    )?;
    Ok(())
}

/// Setzt die Kurvendarstellung und berechnet neu.
///
/// Ein aktiver Tangenten-Modus fällt bei Bézier auf `None` zurück.
pub fn set_fitting_kind(state: &mut CanvasState, kind: FittingKind) -> anyhow::Result<()> {
    state.settings.fitting = kind;
    if state.session.mode.is_tangent() && !kind.supports_tangent_edit() {
        state.session.mode = EditMode::None;
        log::info!("Tangenten-Modus für {} nicht verfügbar, zurückgesetzt", kind.label());
    }
    refit(state)?;
    log::info!("Kurvendarstellung: {}", kind.label());
    Ok(())
}

/// Setzt die Parametrisierung und berechnet neu.
pub fn set_parameterization(
    state: &mut CanvasState,
    kind: ParameterizationKind,
) -> anyhow::Result<()> {
    state.settings.parameterization = kind;
    refit(state)?;
    log::info!("Parametrisierung: {}", kind.label());
    Ok(())
}

/// Setzt den Bearbeitungsmodus.
///
/// Ungültige Kombinationen werden mit Warnung abgelehnt, der Zustand bleibt.
/// Committete Handles und Steigungen bleiben beim Wechsel erhalten.
pub fn set_edit_mode(state: &mut CanvasState, mode: EditMode) -> anyhow::Result<()> {
    if mode != EditMode::None && !state.can_edit() {
        log::warn!(
            "{} abgelehnt: Bearbeitung erst nach der Eingabe mit mindestens 2 Punkten",
            mode.label()
        );
        return Ok(());
    }
    if mode.is_tangent() && !state.settings.fitting.supports_tangent_edit() {
        log::warn!(
            "{} abgelehnt: nur für {} verfügbar",
            mode.label(),
            FittingKind::Spline.label()
        );
        return Ok(());
    }
    state.session.mode = mode;
    log::info!("Bearbeitungsmodus: {}", mode.label());
    Ok(())
}
