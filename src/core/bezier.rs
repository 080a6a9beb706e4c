//! Kubische Bézier-Ketten: Handle-Schätzung (Catmull-Rom) und De-Casteljau-Auswertung.

use glam::Vec2;

use super::curve_data::SampledCurve;

/// Samples pro Segment, beide Endpunkte eingeschlossen.
pub const BEZIER_SAMPLES_PER_SEGMENT: usize = 100;

/// Geschätzte Kontrollpunkte aller Punkte einer Kette.
///
/// `left[0]` und `right[n-1]` existieren geometrisch nicht und liegen auf
/// dem jeweiligen Punkt selbst.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierHandles {
    pub left: Vec<Vec2>,
    pub right: Vec<Vec2>,
}

/// Schätzt linke und rechte Handles im Catmull-Rom-Stil.
///
/// - Innere Punkte: `P ± (next - prev) / 6`
/// - Randpunkte: Ableitung der Parabel durch die drei Randpunkte, gedrittelt
/// - Zwei Punkte: Handles auf den Sehnen-Dritteln (Gerade)
pub fn estimate_handles(points: &[Vec2]) -> BezierHandles {
    let n = points.len();
    let mut left = points.to_vec();
    let mut right = points.to_vec();
    if n < 2 {
        return BezierHandles { left, right };
    }
    if n == 2 {
        let chord = points[1] - points[0];
        right[0] = points[0] + chord / 3.0;
        left[1] = points[1] - chord / 3.0;
        return BezierHandles { left, right };
    }

    for i in 1..n - 1 {
        let offset = (points[i + 1] - points[i - 1]) / 6.0;
        left[i] = points[i] - offset;
        right[i] = points[i] + offset;
    }

    let start_tangent = 2.0 * (points[1] - points[0]) - (points[2] - points[0]) * 0.5;
    right[0] = points[0] + start_tangent / 3.0;

    let end_tangent = 2.0 * (points[n - 1] - points[n - 2]) - (points[n - 1] - points[n - 3]) * 0.5;
    left[n - 1] = points[n - 1] - end_tangent / 3.0;

    BezierHandles { left, right }
}

/// Wertet ein kubisches Bézier-Segment per De Casteljau aus.
pub fn de_casteljau(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let a = p0.lerp(p1, t);
    let b = p1.lerp(p2, t);
    let c = p2.lerp(p3, t);
    let ab = a.lerp(b, t);
    let bc = b.lerp(c, t);
    ab.lerp(bc, t)
}

/// Sampelt ein Segment `{P0, R0, L1, P1}` mit fester Sample-Anzahl.
pub fn sample_segment(control: [Vec2; 4], out: &mut Vec<Vec2>) {
    let [p0, p1, p2, p3] = control;
    let last = (BEZIER_SAMPLES_PER_SEGMENT - 1) as f32;
    out.extend((0..BEZIER_SAMPLES_PER_SEGMENT).map(|k| {
        let t = k as f32 / last;
        de_casteljau(p0, p1, p2, p3, t)
    }));
}

/// Sampelt die ganze Kette durch `points` mit den gegebenen Handles.
///
/// Segmente werden ohne Deduplizierung der Grenzpunkte aneinandergehängt.
/// Genau zwei Punkte ergeben die gerade Strecke `[P0, P1]`.
pub fn sample_chain(points: &[Vec2], handles: &BezierHandles) -> SampledCurve {
    let n = points.len();
    if n < 2 {
        return SampledCurve::default();
    }
    if n == 2 {
        return SampledCurve {
            points: points.to_vec(),
            knot_indices: vec![0, 1],
        };
    }

    let mut curve = SampledCurve {
        points: Vec::with_capacity((n - 1) * BEZIER_SAMPLES_PER_SEGMENT),
        knot_indices: Vec::with_capacity(n),
    };
    for i in 0..n - 1 {
        curve.knot_indices.push(curve.points.len());
        let control = [points[i], handles.right[i], handles.left[i + 1], points[i + 1]];
        sample_segment(control, &mut curve.points);
    }
    curve.knot_indices.push(curve.points.len() - 1);
    curve
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_two_points_straight_segment() {
        let points = [Vec2::ZERO, Vec2::new(5.0, 5.0)];
        let curve = sample_chain(&points, &estimate_handles(&points));
        assert_eq!(curve.points, vec![Vec2::ZERO, Vec2::new(5.0, 5.0)]);
        assert_eq!(curve.knot_indices, vec![0, 1]);
    }

    #[test]
    fn test_two_point_handles_on_chord() {
        let points = [Vec2::ZERO, Vec2::new(3.0, 6.0)];
        let handles = estimate_handles(&points);
        assert_abs_diff_eq!(handles.right[0].x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(handles.right[0].y, 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(handles.left[1].x, 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(handles.left[1].y, 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_interior_handles_catmull_rom() {
        let points = [Vec2::ZERO, Vec2::new(1.0, 2.0), Vec2::new(6.0, 2.0)];
        let handles = estimate_handles(&points);
        assert_eq!(handles.right[1], Vec2::new(1.0, 2.0) + Vec2::new(1.0, 2.0 / 6.0));
        assert_eq!(handles.left[1], Vec2::new(1.0, 2.0) - Vec2::new(1.0, 2.0 / 6.0));
    }

    #[test]
    fn test_end_handles_follow_chain_on_line() {
        // Gleichabständige Punkte auf einer Geraden → Handles auf den Dritteln
        let points = [Vec2::ZERO, Vec2::new(3.0, 0.0), Vec2::new(6.0, 0.0)];
        let handles = estimate_handles(&points);
        assert_abs_diff_eq!(handles.right[0].x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(handles.left[2].x, 5.0, epsilon = 1e-6);
        assert_eq!(handles.left[0], points[0]);
        assert_eq!(handles.right[2], points[2]);
    }

    #[test]
    fn test_de_casteljau_matches_bernstein() {
        let (p0, p1, p2, p3) = (
            Vec2::ZERO,
            Vec2::new(1.0, 3.0),
            Vec2::new(4.0, -2.0),
            Vec2::new(5.0, 1.0),
        );
        for &t in &[0.0f32, 0.3, 0.5, 0.8, 1.0] {
            let inv = 1.0 - t;
            let expected = inv * inv * inv * p0
                + 3.0 * inv * inv * t * p1
                + 3.0 * inv * t * t * p2
                + t * t * t * p3;
            let got = de_casteljau(p0, p1, p2, p3, t);
            assert_abs_diff_eq!(got.x, expected.x, epsilon = 1e-5);
            assert_abs_diff_eq!(got.y, expected.y, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_chain_passes_through_points() {
        let points = [
            Vec2::ZERO,
            Vec2::new(2.0, 4.0),
            Vec2::new(5.0, 1.0),
            Vec2::new(8.0, 3.0),
        ];
        let curve = sample_chain(&points, &estimate_handles(&points));
        assert_eq!(curve.points.len(), 3 * BEZIER_SAMPLES_PER_SEGMENT);
        assert_eq!(curve.knot_indices.len(), points.len());
        for (p, &idx) in points.iter().zip(&curve.knot_indices) {
            assert_abs_diff_eq!(curve.points[idx].x, p.x, epsilon = 1e-5);
            assert_abs_diff_eq!(curve.points[idx].y, p.y, epsilon = 1e-5);
        }
    }
}
