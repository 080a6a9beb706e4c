//! Besitzender Container für Punkte und ihre abgeleiteten Tangenten-Daten.
//!
//! Positionen, Handles, Ratios und Steigungen liegen in parallelen Vecs,
//! die ausschließlich über atomare Operationen verändert werden. Alle Vecs
//! haben jederzeit die Länge der Punktfolge.

use glam::Vec2;

use super::spline_solver::Slope;
use super::FitError;

/// Seite eines Tangenten-Handles relativ zum Punkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSide {
    Left,
    Right,
}

impl HandleSide {
    /// Die gegenüberliegende Seite.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Verhältnis `Basislänge / |Steigung|` pro Seite.
///
/// Wird beim Ableiten der Handles aus den Steigungen gesetzt und beim
/// Zurückrechnen der Steigung aus einem gezogenen Handle wiederverwendet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleRatio {
    pub l: f32,
    pub r: f32,
}

impl Default for HandleRatio {
    fn default() -> Self {
        Self { l: 1.0, r: 1.0 }
    }
}

impl HandleRatio {
    pub fn get(&self, side: HandleSide) -> f32 {
        match side {
            HandleSide::Left => self.l,
            HandleSide::Right => self.r,
        }
    }
}

/// Gesampelte Kurve als Polyline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledCurve {
    pub points: Vec<Vec2>,
    /// Sample-Index jedes Eingabepunkts in `points`
    pub knot_indices: Vec<usize>,
}

impl SampledCurve {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Punktfolge mit Handles, Ratios und Steigungen pro Achse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveData {
    positions: Vec<Vec2>,
    left_handles: Vec<Vec2>,
    right_handles: Vec<Vec2>,
    ratios: Vec<HandleRatio>,
    slopes_x: Vec<Slope>,
    slopes_y: Vec<Slope>,
}

impl CurveData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut einen Container aus einer Punktfolge (Handles auf den Punkten).
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut data = Self::new();
        for &p in points {
            data.push(p);
        }
        data
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Hängt einen Punkt an. Handles starten auf dem Punkt, Ratio 1, Steigung 0.
    pub fn push(&mut self, position: Vec2) {
        self.positions.push(position);
        self.left_handles.push(position);
        self.right_handles.push(position);
        self.ratios.push(HandleRatio::default());
        self.slopes_x.push(Slope::default());
        self.slopes_y.push(Slope::default());
    }

    /// Entfernt den letzten Punkt samt aller zugehörigen Einträge.
    pub fn pop(&mut self) -> Option<Vec2> {
        let position = self.positions.pop()?;
        self.left_handles.pop();
        self.right_handles.pop();
        self.ratios.pop();
        self.slopes_x.pop();
        self.slopes_y.pop();
        Some(position)
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.left_handles.clear();
        self.right_handles.clear();
        self.ratios.clear();
        self.slopes_x.clear();
        self.slopes_y.clear();
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<Vec2> {
        self.positions.get(index).copied()
    }

    /// Verschiebt einen Punkt; abgeleitete Daten bleiben unverändert.
    pub fn set_position(&mut self, index: usize, position: Vec2) -> Result<(), FitError> {
        let len = self.len();
        let slot = self
            .positions
            .get_mut(index)
            .ok_or(FitError::IndexOutOfRange { index, len })?;
        *slot = position;
        Ok(())
    }

    pub fn handle(&self, side: HandleSide, index: usize) -> Option<Vec2> {
        match side {
            HandleSide::Left => self.left_handles.get(index).copied(),
            HandleSide::Right => self.right_handles.get(index).copied(),
        }
    }

    pub fn left_handles(&self) -> &[Vec2] {
        &self.left_handles
    }

    pub fn right_handles(&self) -> &[Vec2] {
        &self.right_handles
    }

    pub fn set_handle(
        &mut self,
        side: HandleSide,
        index: usize,
        position: Vec2,
    ) -> Result<(), FitError> {
        let len = self.len();
        let handles = match side {
            HandleSide::Left => &mut self.left_handles,
            HandleSide::Right => &mut self.right_handles,
        };
        let slot = handles
            .get_mut(index)
            .ok_or(FitError::IndexOutOfRange { index, len })?;
        *slot = position;
        Ok(())
    }

    pub fn ratio(&self, index: usize) -> Option<HandleRatio> {
        self.ratios.get(index).copied()
    }

    pub fn ratios(&self) -> &[HandleRatio] {
        &self.ratios
    }

    pub fn slopes_x(&self) -> &[Slope] {
        &self.slopes_x
    }

    pub fn slopes_y(&self) -> &[Slope] {
        &self.slopes_y
    }

    /// Ersetzt Steigungen beider Achsen; Längen müssen zur Punktfolge passen.
    pub fn set_slopes(&mut self, slopes_x: Vec<Slope>, slopes_y: Vec<Slope>) -> Result<(), FitError> {
        let len = self.len();
        if slopes_x.len() != len || slopes_y.len() != len {
            return Err(FitError::IndexOutOfRange {
                index: slopes_x.len().max(slopes_y.len()),
                len,
            });
        }
        self.slopes_x = slopes_x;
        self.slopes_y = slopes_y;
        Ok(())
    }

    /// Setzt die Steigungen beider Achsen an einem Punkt.
    pub fn set_slope(&mut self, index: usize, slope_x: Slope, slope_y: Slope) -> Result<(), FitError> {
        let len = self.len();
        if index >= len {
            return Err(FitError::IndexOutOfRange { index, len });
        }
        self.slopes_x[index] = slope_x;
        self.slopes_y[index] = slope_y;
        Ok(())
    }

    /// Ersetzt alle Handles samt Ratios; Längen müssen zur Punktfolge passen.
    pub fn set_handles(
        &mut self,
        left: Vec<Vec2>,
        right: Vec<Vec2>,
        ratios: Vec<HandleRatio>,
    ) -> Result<(), FitError> {
        let len = self.len();
        if left.len() != len || right.len() != len || ratios.len() != len {
            return Err(FitError::IndexOutOfRange {
                index: left.len().max(right.len()).max(ratios.len()),
                len,
            });
        }
        self.left_handles = left;
        self.right_handles = right;
        self.ratios = ratios;
        Ok(())
    }

    /// Prüft die Längen-Invariante aller parallelen Vecs.
    pub fn is_consistent(&self) -> bool {
        let n = self.positions.len();
        self.left_handles.len() == n
            && self.right_handles.len() == n
            && self.ratios.len() == n
            && self.slopes_x.len() == n
            && self.slopes_y.len() == n
    }
}
