//! Per-Frame-Ausgabe für den Host-Renderer.
//!
//! Der Frame wird in jedem Tick vollständig aus dem committeten Zustand und
//! der laufenden Sitzung neu berechnet; es gibt keinen Cache.

use glam::Vec2;

use super::fit_controller;
use super::interaction::{handle_exists, hit_test, InteractionPhase, Selection};
use super::state::CanvasState;
use crate::core::{CurveData, HandleSide, SampledCurve};

/// Linie vom Punkt zu einem seiner Tangenten-Handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleLine {
    pub index: usize,
    pub side: HandleSide,
    pub point: Vec2,
    pub handle: Vec2,
}

/// Alles, was der Host in einem Tick zeichnet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveFrame {
    /// Gesampelte Kurve als Polyline
    pub curve: Vec<Vec2>,
    /// Sample-Index jedes Kurvenpunkts in `curve`
    pub knot_indices: Vec<usize>,
    /// Zu zeichnende Punkte (bei Punkt-Drag mit Vorschau-Position)
    pub points: Vec<Vec2>,
    /// Tangenten-Linien, nur in Tangenten-Modi
    pub handle_lines: Vec<HandleLine>,
    /// `true` wenn die Kurve nicht dem committeten Zustand entspricht
    pub is_preview: bool,
    /// Element unter dem Cursor
    pub hovered: Selection,
}

/// Baut den Frame für die aktuelle Cursor-Position.
pub fn build(state: &CanvasState, cursor: Vec2) -> CurveFrame {
    let base_length = state.options.base_tangent_length;
    let settings = state.settings;

    if state.adding {
        let result =
            fit_controller::preview_adding(state.data.positions(), cursor, settings, base_length);
        let curve = unwrap_curve(result);
        return CurveFrame {
            is_preview: !curve.is_empty(),
            curve: curve.points,
            knot_indices: curve.knot_indices,
            points: state.data.positions().to_vec(),
            handle_lines: Vec::new(),
            hovered: Selection::None,
        };
    }

    let preview = match state.session.phase {
        InteractionPhase::DraggingPoint { index, cursor } => fit_controller::preview_point_move(
            &state.data,
            settings,
            index,
            cursor,
            base_length,
        )
        .inspect_err(|e| log::debug!("Punkt-Vorschau verworfen: {}", e))
        .ok(),
        InteractionPhase::DraggingTangent {
            side,
            index,
            cursor,
        } => fit_controller::preview_handle_drag(
            &state.data,
            state.session.mode,
            side,
            index,
            cursor,
        )
        .inspect_err(|e| log::debug!("Handle-Vorschau verworfen: {}", e))
        .ok(),
        _ => None,
    };

    let is_preview = preview.is_some();
    let shown = preview.as_ref().unwrap_or(&state.data);
    let curve = unwrap_curve(fit_controller::evaluate(shown, settings));

    let handle_lines = if state.session.mode.is_tangent() {
        handle_lines(shown)
    } else {
        Vec::new()
    };

    let hovered = if state.session.phase.is_dragging() {
        state.session.selection()
    } else {
        hit_test(shown, state.session.mode, &state.options, cursor)
    };

    CurveFrame {
        curve: curve.points,
        knot_indices: curve.knot_indices,
        points: shown.positions().to_vec(),
        handle_lines,
        is_preview,
        hovered,
    }
}

fn unwrap_curve(result: Result<SampledCurve, crate::core::FitError>) -> SampledCurve {
    result.unwrap_or_else(|e| {
        log::debug!("Kurve nicht auswertbar: {}", e);
        SampledCurve::default()
    })
}

/// Linien aller existierenden Handles.
fn handle_lines(data: &CurveData) -> Vec<HandleLine> {
    let len = data.len();
    let mut lines = Vec::with_capacity(2 * len.saturating_sub(1));
    for (index, &point) in data.positions().iter().enumerate() {
        for side in [HandleSide::Left, HandleSide::Right] {
            if !handle_exists(side, index, len) {
                continue;
            }
            if let Some(handle) = data.handle(side, index) {
                lines.push(HandleLine {
                    index,
                    side,
                    point,
                    handle,
                });
            }
        }
    }
    lines
}
