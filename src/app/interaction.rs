//! Interaktions-Zustandsautomat: Auswahl, Drag und Commit.
//!
//! Der Automat hält nur die transiente Sitzung. Committete Daten werden
//! erst beim Loslassen über [`DragCommit`] zurückgeschrieben.

use glam::Vec2;

use super::state::EditMode;
use crate::core::{CurveData, HandleSide};
use crate::shared::FitOptions;

/// Ausgewähltes bzw. unter dem Cursor liegendes Element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// Punkt `i`
    Point(usize),
    /// Handle einer Seite von Punkt `i`
    Tangent(HandleSide, usize),
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Phase der laufenden Interaktion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionPhase {
    #[default]
    Idle,
    /// Punkt gedrückt, noch nicht bewegt
    SelectingPoint(usize),
    /// Punkt wird gezogen; `cursor` ist die Vorschau-Position
    DraggingPoint { index: usize, cursor: Vec2 },
    /// Handle gedrückt, noch nicht bewegt
    SelectingTangent(HandleSide, usize),
    /// Handle wird gezogen
    DraggingTangent {
        side: HandleSide,
        index: usize,
        cursor: Vec2,
    },
}

/// Was beim Loslassen festgeschrieben werden muss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragCommit {
    Point { index: usize, position: Vec2 },
    Tangent {
        side: HandleSide,
        index: usize,
        position: Vec2,
    },
}

impl InteractionPhase {
    /// Aktuelle Auswahl der Phase.
    pub fn selection(&self) -> Selection {
        match *self {
            Self::Idle => Selection::None,
            Self::SelectingPoint(i) | Self::DraggingPoint { index: i, .. } => Selection::Point(i),
            Self::SelectingTangent(side, i) | Self::DraggingTangent { side, index: i, .. } => {
                Selection::Tangent(side, i)
            }
        }
    }

    /// `true` solange eine Auswahl oder ein Drag läuft.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            Self::DraggingPoint { .. } | Self::DraggingTangent { .. }
        )
    }

    /// Startet eine Auswahl auf dem getroffenen Element.
    pub fn press(hit: Selection) -> Self {
        match hit {
            Selection::None => Self::Idle,
            Selection::Point(i) => Self::SelectingPoint(i),
            Selection::Tangent(side, i) => Self::SelectingTangent(side, i),
        }
    }

    /// Bestätigt bzw. aktualisiert den Drag. Ohne Auswahl: No-op.
    pub fn drag(self, cursor: Vec2) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::SelectingPoint(index) | Self::DraggingPoint { index, .. } => {
                Self::DraggingPoint { index, cursor }
            }
            Self::SelectingTangent(side, index) | Self::DraggingTangent { side, index, .. } => {
                Self::DraggingTangent {
                    side,
                    index,
                    cursor,
                }
            }
        }
    }

    /// Beendet die Interaktion; nur ein bestätigter Drag erzeugt einen Commit.
    pub fn release(self) -> Option<DragCommit> {
        match self {
            Self::DraggingPoint { index, cursor } => Some(DragCommit::Point {
                index,
                position: cursor,
            }),
            Self::DraggingTangent {
                side,
                index,
                cursor,
            } => Some(DragCommit::Tangent {
                side,
                index,
                position: cursor,
            }),
            _ => None,
        }
    }
}

/// `true` wenn das Handle geometrisch existiert.
///
/// Der erste Punkt hat kein linkes, der letzte kein rechtes Handle.
pub fn handle_exists(side: HandleSide, index: usize, len: usize) -> bool {
    if index >= len || len < 2 {
        return false;
    }
    match side {
        HandleSide::Left => index > 0,
        HandleSide::Right => index + 1 < len,
    }
}

/// Hit-Test mit quadratischer Toleranz-Box.
///
/// Punkte werden vor Handles geprüft; Handles nur in Tangenten-Modi.
/// Ohne Bearbeitungsmodus ist nichts auswählbar.
pub fn hit_test(data: &CurveData, mode: EditMode, options: &FitOptions, cursor: Vec2) -> Selection {
    if mode == EditMode::None {
        return Selection::None;
    }

    if let Some(i) = data
        .positions()
        .iter()
        .position(|&p| options.hits(p, cursor))
    {
        return Selection::Point(i);
    }

    if !mode.is_tangent() {
        return Selection::None;
    }

    let len = data.len();
    for i in 0..len {
        for side in [HandleSide::Left, HandleSide::Right] {
            if !handle_exists(side, i, len) {
                continue;
            }
            if let Some(handle) = data.handle(side, i) {
                if options.hits(handle, cursor) {
                    return Selection::Tangent(side, i);
                }
            }
        }
    }
    Selection::None
}
