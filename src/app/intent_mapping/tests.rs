use glam::Vec2;

use crate::app::interaction::InteractionPhase;
use crate::app::{CanvasCommand, CanvasIntent, CanvasState, EditMode};
use crate::core::{CurveData, FittingKind, HandleSide};

use super::map_intent_to_commands;

fn editing_state(mode: EditMode) -> CanvasState {
    let mut state = CanvasState::new();
    state.data = CurveData::from_points(&[Vec2::ZERO, Vec2::new(100.0, 0.0)]);
    state
        .data
        .set_handle(HandleSide::Right, 0, Vec2::new(50.0, 0.0))
        .unwrap();
    state.adding = false;
    state.session.mode = mode;
    state
}

#[test]
fn press_while_adding_maps_to_add_point() {
    let state = CanvasState::new();

    let commands = map_intent_to_commands(
        &state,
        CanvasIntent::PointerPressed {
            pos: Vec2::new(3.0, 4.0),
        },
    );

    assert_eq!(
        commands,
        vec![CanvasCommand::AddPoint {
            pos: Vec2::new(3.0, 4.0)
        }]
    );
}

#[test]
fn press_on_point_selects_point_in_tangent_mode() {
    let state = editing_state(EditMode::TangentG1);

    let commands = map_intent_to_commands(
        &state,
        CanvasIntent::PointerPressed {
            pos: Vec2::new(99.0, 1.0),
        },
    );

    assert_eq!(commands, vec![CanvasCommand::SelectPoint { index: 1 }]);
}

#[test]
fn press_on_handle_selects_tangent() {
    let state = editing_state(EditMode::TangentG0);

    let commands = map_intent_to_commands(
        &state,
        CanvasIntent::PointerPressed {
            pos: Vec2::new(51.0, -2.0),
        },
    );

    assert_eq!(
        commands,
        vec![CanvasCommand::SelectTangent {
            side: HandleSide::Right,
            index: 0
        }]
    );
}

#[test]
fn press_on_empty_canvas_maps_to_nothing() {
    let state = editing_state(EditMode::MovePoint);

    let commands = map_intent_to_commands(
        &state,
        CanvasIntent::PointerPressed {
            pos: Vec2::new(40.0, 40.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn drag_without_selection_maps_to_nothing() {
    let state = editing_state(EditMode::MovePoint);

    let commands = map_intent_to_commands(&state, CanvasIntent::PointerDragged { pos: Vec2::ONE });

    assert!(commands.is_empty());
}

#[test]
fn release_after_drag_maps_to_drag_and_commit_in_order() {
    let mut state = editing_state(EditMode::MovePoint);
    state.session.phase = InteractionPhase::DraggingPoint {
        index: 1,
        cursor: Vec2::ONE,
    };

    let commands =
        map_intent_to_commands(&state, CanvasIntent::PointerReleased { pos: Vec2::ZERO });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], CanvasCommand::DragTo { .. }));
    assert!(matches!(commands[1], CanvasCommand::CommitDrag));
}

#[test]
fn release_after_plain_selection_only_commits() {
    let mut state = editing_state(EditMode::MovePoint);
    state.session.phase = InteractionPhase::SelectingPoint(0);

    let commands =
        map_intent_to_commands(&state, CanvasIntent::PointerReleased { pos: Vec2::ONE });

    assert_eq!(commands, vec![CanvasCommand::CommitDrag]);
}

#[test]
fn mode_switch_mid_drag_cancels_first() {
    let mut state = editing_state(EditMode::MovePoint);
    state.session.phase = InteractionPhase::SelectingPoint(0);

    let commands = map_intent_to_commands(
        &state,
        CanvasIntent::FittingKindSelected {
            kind: FittingKind::Bezier,
        },
    );

    assert_eq!(
        commands,
        vec![
            CanvasCommand::CancelDrag,
            CanvasCommand::SetFittingKind {
                kind: FittingKind::Bezier
            }
        ]
    );
}
