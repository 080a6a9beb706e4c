//! Tangenten-Handles: Ableitung aus Steigungen und Bearbeitung in G0/G1.
//!
//! Ein Handle liegt bei `P ± s · ratio`, wobei `s = (dx/dt, dy/dt)` die
//! Steigung der jeweiligen Seite ist. `ratio` wird beim Ableiten so gewählt,
//! dass das Handle die Basislänge hat, und beim Ziehen beibehalten: die
//! Handle-Länge skaliert dann direkt den Betrag der Steigung.

use glam::Vec2;

use super::interaction::handle_exists;
use super::state::EditMode;
use crate::core::{CurveData, FitError, HandleRatio, HandleSide, Slope};

/// Ratio für eine Steigung, sodass das Handle `base_length` lang wird.
///
/// Bei verschwindender Steigung oder nicht positiver Basislänge bleibt das
/// Ratio 1, damit die Steigung aus dem Handle rückrechenbar bleibt.
fn ratio_for(slope: Vec2, base_length: f32) -> f32 {
    let len = slope.length();
    if len > f32::EPSILON && base_length > f32::EPSILON {
        base_length / len
    } else {
        1.0
    }
}

/// Leitet alle Handles und Ratios aus den gespeicherten Steigungen ab.
pub fn derive_handles(data: &mut CurveData, base_length: f32) -> Result<(), FitError> {
    let len = data.len();
    let mut left = Vec::with_capacity(len);
    let mut right = Vec::with_capacity(len);
    let mut ratios = Vec::with_capacity(len);

    for (i, &p) in data.positions().iter().enumerate() {
        let sx = data.slopes_x()[i];
        let sy = data.slopes_y()[i];
        let mut ratio = HandleRatio::default();

        let r = Vec2::new(sx.r, sy.r);
        if handle_exists(HandleSide::Right, i, len) {
            ratio.r = ratio_for(r, base_length);
            right.push(p + r * ratio.r);
        } else {
            right.push(p);
        }

        let l = Vec2::new(sx.l, sy.l);
        if handle_exists(HandleSide::Left, i, len) {
            ratio.l = ratio_for(l, base_length);
            left.push(p - l * ratio.l);
        } else {
            left.push(p);
        }

        ratios.push(ratio);
    }

    data.set_handles(left, right, ratios)
}

/// Ratio einer Seite; ein Ratio nahe 0 ist ein Fehler statt einer Division durch 0.
fn usable_ratio(data: &CurveData, side: HandleSide, index: usize) -> Result<f32, FitError> {
    let ratio = data
        .ratio(index)
        .ok_or(FitError::IndexOutOfRange {
            index,
            len: data.len(),
        })?
        .get(side);
    if ratio > f32::EPSILON {
        Ok(ratio)
    } else {
        Err(FitError::DegenerateHandleRatio { index })
    }
}

/// Rechnet die Steigung einer Seite aus dem Handle zurück.
///
/// Fehlt die Gegenseite (Randpunkt), erhält sie denselben Wert.
fn rederive_slope(data: &mut CurveData, side: HandleSide, index: usize) -> Result<(), FitError> {
    let len = data.len();
    let p = data
        .position(index)
        .ok_or(FitError::IndexOutOfRange { index, len })?;
    let handle = data
        .handle(side, index)
        .ok_or(FitError::IndexOutOfRange { index, len })?;
    let ratio = usable_ratio(data, side, index)?;

    let mut sx = data.slopes_x()[index];
    let mut sy = data.slopes_y()[index];
    match side {
        HandleSide::Right => {
            let s = (handle - p) / ratio;
            sx.r = s.x;
            sy.r = s.y;
        }
        HandleSide::Left => {
            let s = (p - handle) / ratio;
            sx.l = s.x;
            sy.l = s.y;
        }
    }
    if !handle_exists(side.opposite(), index, len) {
        sx = mirror(sx, side);
        sy = mirror(sy, side);
    }
    data.set_slope(index, sx, sy)
}

fn mirror(slope: Slope, from: HandleSide) -> Slope {
    match from {
        HandleSide::Right => Slope::shared(slope.r),
        HandleSide::Left => Slope::shared(slope.l),
    }
}

/// Setzt ein Handle auf `cursor` und erzwingt die Stetigkeit des Modus.
///
/// - G0: nur das gezogene Handle und seine Steigung ändern sich
/// - G1: das Gegen-Handle wird durch den Punkt gespiegelt und behält
///   seinen eigenen Abstand; liegt `cursor` auf dem Punkt, bleibt es stehen
///
/// Arbeitet auf dem übergebenen Container; für Vorschauen eine Kopie übergeben.
pub fn apply_handle_drag(
    data: &mut CurveData,
    mode: EditMode,
    side: HandleSide,
    index: usize,
    cursor: Vec2,
) -> Result<(), FitError> {
    if !mode.is_tangent() {
        return Err(FitError::InvalidModeCombination {
            reason: "Tangenten-Drag ohne Tangenten-Modus",
        });
    }
    let len = data.len();
    if !handle_exists(side, index, len) {
        return Err(FitError::IndexOutOfRange { index, len });
    }
    let p = data
        .position(index)
        .ok_or(FitError::IndexOutOfRange { index, len })?;
    let opposite = side.opposite();
    let mirrors = mode == EditMode::TangentG1 && handle_exists(opposite, index, len);

    // Vor jeder Änderung prüfen, damit der Container konsistent bleibt
    usable_ratio(data, side, index)?;
    if mirrors {
        usable_ratio(data, opposite, index)?;
    }

    data.set_handle(side, index, cursor)?;
    rederive_slope(data, side, index)?;

    if mirrors {
        let dragged = cursor - p;
        let dragged_len = dragged.length();
        if dragged_len > f32::EPSILON {
            let opposite_pos = data
                .handle(opposite, index)
                .ok_or(FitError::IndexOutOfRange { index, len })?;
            let ratio_distance = p.distance(opposite_pos) / dragged_len;
            data.set_handle(opposite, index, p - dragged * ratio_distance)?;
            rederive_slope(data, opposite, index)?;
        }
    }

    log::trace!(
        "Handle {:?}[{}] auf ({:.1}, {:.1}) ({:?})",
        side,
        index,
        cursor.x,
        cursor.y,
        mode
    );
    Ok(())
}
