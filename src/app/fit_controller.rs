//! Orchestrierung des Fits: Parametrisierung, Lösen, Handles, Auswertung.
//!
//! `refit` schreibt abgeleitete Daten (Steigungen, Handles) in einen
//! Container. Alle Vorschau-Funktionen arbeiten auf einer Kopie und lassen
//! den committeten Zustand unberührt.

use glam::Vec2;

use super::state::{EditMode, FitSettings};
use super::tangent_edit;
use crate::core::{
    bezier, hermite, spline_solver, AxisKnots, CurveData, FitError, FittingKind, HandleRatio,
    HandleSide, ParameterizationKind, SampledCurve, Slope,
};

/// Stützstellen mit Fallback auf Uniform bei leeren Parameter-Intervallen.
///
/// Liefert zusätzlich, ob der Fallback gegriffen hat.
fn resolve_knots(
    points: &[Vec2],
    kind: ParameterizationKind,
) -> Result<(AxisKnots, bool), FitError> {
    let knots = kind.axis_knots(points)?;
    match spline_solver::check_intervals(&knots.x) {
        Ok(()) => Ok((knots, false)),
        Err(FitError::DegenerateInterval { .. }) if kind != ParameterizationKind::Uniform => {
            Ok((ParameterizationKind::Uniform.axis_knots(points)?, true))
        }
        Err(e) => Err(e),
    }
}

/// Setzt Handles aus der Bézier-Schätzung; Steigungen bleiben neutral.
fn apply_bezier_handles(data: &mut CurveData) -> Result<(), FitError> {
    let handles = bezier::estimate_handles(data.positions());
    let len = data.len();
    data.set_slopes(vec![Slope::default(); len], vec![Slope::default(); len])?;
    data.set_handles(handles.left, handles.right, vec![HandleRatio::default(); len])
}

/// Berechnet Steigungen und Handles vollständig aus den Punkten neu.
///
/// Unter 2 Punkten gibt es nichts abzuleiten.
pub fn refit(data: &mut CurveData, settings: FitSettings, base_length: f32) -> Result<(), FitError> {
    if data.len() < 2 {
        return Ok(());
    }

    match settings.fitting {
        FittingKind::Spline => {
            let (knots, fell_back) = resolve_knots(data.positions(), settings.parameterization)?;
            if fell_back {
                log::warn!(
                    "{}: Parameter-Intervall der Länge 0, verwende Uniform",
                    settings.parameterization.label()
                );
            }
            let slopes_x = spline_solver::solve_natural(&knots.x)?;
            let slopes_y = spline_solver::solve_natural(&knots.y)?;
            data.set_slopes(slopes_x, slopes_y)?;
            tangent_edit::derive_handles(data, base_length)?;
        }
        FittingKind::Bezier => apply_bezier_handles(data)?,
    }

    log::debug!(
        "Refit: {} Punkte, {:?}/{:?}",
        data.len(),
        settings.fitting,
        settings.parameterization
    );
    Ok(())
}

/// Sampelt die Kurve aus den gespeicherten Steigungen bzw. Handles.
///
/// Unter 2 Punkten ist das Ergebnis leer.
pub fn evaluate(data: &CurveData, settings: FitSettings) -> Result<SampledCurve, FitError> {
    if data.len() < 2 {
        return Ok(SampledCurve::default());
    }

    match settings.fitting {
        FittingKind::Spline => {
            let (knots, fell_back) = resolve_knots(data.positions(), settings.parameterization)?;
            if fell_back {
                log::trace!("Auswertung mit Uniform-Fallback");
            }
            let xs = hermite::sample_chain(&knots.x, data.slopes_x());
            let ys = hermite::sample_chain(&knots.y, data.slopes_y());
            let points = xs
                .values
                .iter()
                .zip(&ys.values)
                .map(|(x, y)| Vec2::new(x.value, y.value))
                .collect();
            Ok(SampledCurve {
                points,
                knot_indices: xs.knot_indices,
            })
        }
        FittingKind::Bezier => {
            let handles = bezier::BezierHandles {
                left: data.left_handles().to_vec(),
                right: data.right_handles().to_vec(),
            };
            Ok(bezier::sample_chain(data.positions(), &handles))
        }
    }
}

/// Fit einer losen Punktfolge ohne gespeicherten Zustand.
pub fn fit_points(
    points: &[Vec2],
    settings: FitSettings,
    base_length: f32,
) -> Result<(CurveData, SampledCurve), FitError> {
    let mut data = CurveData::from_points(points);
    refit(&mut data, settings, base_length)?;
    let curve = evaluate(&data, settings)?;
    Ok((data, curve))
}

/// Gummiband-Vorschau beim Eingeben: committete Punkte plus Cursor.
pub fn preview_adding(
    points: &[Vec2],
    cursor: Vec2,
    settings: FitSettings,
    base_length: f32,
) -> Result<SampledCurve, FitError> {
    if points.is_empty() {
        return Ok(SampledCurve::default());
    }
    let mut with_cursor = points.to_vec();
    with_cursor.push(cursor);
    fit_points(&with_cursor, settings, base_length).map(|(_, curve)| curve)
}

/// Vorschau eines verschobenen Punkts auf einer Kopie der Daten.
pub fn preview_point_move(
    data: &CurveData,
    settings: FitSettings,
    index: usize,
    position: Vec2,
    base_length: f32,
) -> Result<CurveData, FitError> {
    let mut preview = data.clone();
    preview.set_position(index, position)?;
    refit(&mut preview, settings, base_length)?;
    Ok(preview)
}

/// Vorschau eines gezogenen Handles auf einer Kopie der Daten.
pub fn preview_handle_drag(
    data: &CurveData,
    mode: EditMode,
    side: HandleSide,
    index: usize,
    cursor: Vec2,
) -> Result<CurveData, FitError> {
    let mut preview = data.clone();
    tangent_edit::apply_handle_drag(&mut preview, mode, side, index, cursor)?;
    Ok(preview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn spline(kind: ParameterizationKind) -> FitSettings {
        FitSettings {
            fitting: FittingKind::Spline,
            parameterization: kind,
        }
    }

    fn zigzag() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 2.0),
        ]
    }

    #[test]
    fn test_spline_passes_through_points_for_all_parameterizations() {
        let points = zigzag();
        for kind in ParameterizationKind::ALL {
            let (data, curve) = fit_points(&points, spline(kind), 50.0).unwrap();
            assert!(data.is_consistent());
            assert_eq!(curve.knot_indices.len(), points.len());
            for (p, &idx) in points.iter().zip(&curve.knot_indices) {
                assert_eq!(curve.points[idx], *p, "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_coincident_points_fall_back_without_nan() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(9.0, 1.0),
        ];
        let (_, curve) = fit_points(&points, spline(ParameterizationKind::Chordal), 50.0).unwrap();
        assert!(!curve.is_empty());
        assert!(curve.points.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_zero_base_length_handle_drag_stays_finite() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 200.0),
            Vec2::new(200.0, 0.0),
        ];
        let settings = spline(ParameterizationKind::Uniform);
        let (data, _) = fit_points(&points, settings, 0.0).unwrap();
        let edited = preview_handle_drag(
            &data,
            EditMode::TangentG0,
            HandleSide::Right,
            1,
            Vec2::new(150.0, 260.0),
        )
        .unwrap();
        let curve = evaluate(&edited, settings).unwrap();
        assert!(!curve.is_empty());
        assert!(curve.points.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_bezier_two_points_straight() {
        let settings = FitSettings {
            fitting: FittingKind::Bezier,
            parameterization: ParameterizationKind::Uniform,
        };
        let (_, curve) = fit_points(&[Vec2::ZERO, Vec2::new(5.0, 5.0)], settings, 50.0).unwrap();
        assert_eq!(curve.points, vec![Vec2::ZERO, Vec2::new(5.0, 5.0)]);
    }

    #[test]
    fn test_preview_point_move_leaves_original() {
        let (data, _) = fit_points(&zigzag(), spline(ParameterizationKind::Uniform), 50.0).unwrap();
        let before = data.clone();
        let preview = preview_point_move(
            &data,
            spline(ParameterizationKind::Uniform),
            1,
            Vec2::new(1.0, 5.0),
            50.0,
        )
        .unwrap();
        assert_eq!(data, before);
        assert_eq!(preview.position(1), Some(Vec2::new(1.0, 5.0)));
        assert_ne!(preview.slopes_y(), data.slopes_y());
    }

    #[test]
    fn test_preview_adding_with_single_point_is_line() {
        let curve = preview_adding(
            &[Vec2::ZERO],
            Vec2::new(10.0, 20.0),
            spline(ParameterizationKind::Centripetal),
            50.0,
        )
        .unwrap();
        assert_eq!(curve.points.first(), Some(&Vec2::ZERO));
        assert_eq!(curve.points.last(), Some(&Vec2::new(10.0, 20.0)));
        for p in &curve.points {
            assert_abs_diff_eq!(p.y, 2.0 * p.x, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_preview_adding_without_points_is_empty() {
        let curve = preview_adding(&[], Vec2::ONE, spline(ParameterizationKind::Uniform), 50.0)
            .unwrap();
        assert!(curve.is_empty());
    }

    #[test]
    fn test_tangent_edit_changes_evaluated_curve() {
        let settings = spline(ParameterizationKind::Uniform);
        let (data, curve) = fit_points(&zigzag(), settings, 50.0).unwrap();
        let p = data.position(1).unwrap();
        let preview = preview_handle_drag(
            &data,
            EditMode::TangentG0,
            HandleSide::Right,
            1,
            p + Vec2::new(0.0, -80.0),
        )
        .unwrap();
        let edited = evaluate(&preview, settings).unwrap();
        assert_eq!(edited.points.len(), curve.points.len());
        assert_ne!(edited.points, curve.points);
        // Punkte werden weiterhin interpoliert
        for (q, &idx) in zigzag().iter().zip(&edited.knot_indices) {
            assert_eq!(edited.points[idx], *q);
        }
    }
}
