//! Auswertung kubischer Hermite-Segmente.
//!
//! Ein Segment ist durch zwei Stützstellen `(t0, v0)`, `(t1, v1)` und zwei
//! Steigungen `dv0`, `dv1` vollständig bestimmt. Die Schrittweite hängt nur
//! von der globalen Sample-Anzahl ab, nicht von der Segmentlänge.

use super::parameterization::Knot;
use super::spline_solver::Slope;

/// Globale Sample-Anzahl für den Parameterbereich [0, 1].
pub const SAMPLE_COUNT: usize = 500;

/// Schrittweite im Parameterraum.
pub const T_STEP: f32 = 1.0 / (SAMPLE_COUNT - 1) as f32;

/// `h0(x) = (1 + 2·(x-x0)/(x1-x0)) · ((x-x1)/(x0-x1))²`
#[inline]
fn h0(x0: f32, x1: f32, x: f32) -> f32 {
    let q = (x - x1) / (x0 - x1);
    (1.0 + 2.0 * (x - x0) / (x1 - x0)) * q * q
}

/// `H0(x) = (x-x0) · ((x-x1)/(x0-x1))²`
#[inline]
fn big_h0(x0: f32, x1: f32, x: f32) -> f32 {
    let q = (x - x1) / (x0 - x1);
    (x - x0) * q * q
}

/// Kubisches Hermite-Segment einer Achse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermiteSegment {
    pub start: Knot,
    pub end: Knot,
    /// Steigung `dv/dt` am Start
    pub start_slope: f32,
    /// Steigung `dv/dt` am Ende
    pub end_slope: f32,
}

impl HermiteSegment {
    pub fn new(start: Knot, end: Knot, start_slope: f32, end_slope: f32) -> Self {
        Self {
            start,
            end,
            start_slope,
            end_slope,
        }
    }

    /// Wert des Segments an der Stelle `t`.
    ///
    /// An `t0` bzw. `t1` wird exakt `v0` bzw. `v1` geliefert.
    pub fn eval(&self, t: f32) -> f32 {
        let (t0, t1) = (self.start.t, self.end.t);
        if t1 == t0 {
            return self.start.value;
        }
        self.start.value * h0(t0, t1, t)
            + self.end.value * h0(t1, t0, t)
            + self.start_slope * big_h0(t0, t1, t)
            + self.end_slope * big_h0(t1, t0, t)
    }

    /// Anzahl der Schritte (Intervalle) über `[t0, t1]`.
    pub fn step_count(&self) -> usize {
        let steps = (self.end.t - self.start.t) / T_STEP;
        // Rundungsrauschen bei ganzzahligen Vielfachen nicht aufrunden
        let rounded = steps.round();
        let steps = if (steps - rounded).abs() < 1e-3 {
            rounded
        } else {
            steps.ceil()
        };
        steps.max(1.0) as usize
    }

    /// Lazy Sample-Folge über `[t0, t1]`, beide Enden eingeschlossen.
    ///
    /// Jeder Aufruf startet eine neue Folge.
    pub fn samples(&self) -> HermiteSamples {
        HermiteSamples {
            segment: *self,
            index: 0,
            steps: self.step_count(),
        }
    }
}

/// Iterator über die Samples eines [`HermiteSegment`].
#[derive(Debug, Clone)]
pub struct HermiteSamples {
    segment: HermiteSegment,
    index: usize,
    steps: usize,
}

impl Iterator for HermiteSamples {
    type Item = Knot;

    fn next(&mut self) -> Option<Knot> {
        if self.index > self.steps {
            return None;
        }
        let t = if self.index == self.steps {
            // Endpunkt exakt treffen, keine Akkumulationsfehler
            self.segment.end.t
        } else {
            self.segment.start.t + self.index as f32 * T_STEP
        };
        self.index += 1;
        Some(Knot::new(t, self.segment.eval(t)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HermiteSamples {}

/// Gesampelte Achse einer Segment-Kette.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisSamples {
    /// `(t, v)`-Paare aller Segmente, ohne Deduplizierung der Segmentgrenzen
    pub values: Vec<Knot>,
    /// Sample-Index jeder Stützstelle in `values`
    pub knot_indices: Vec<usize>,
}

/// Sampelt die Hermite-Kette durch `knots` mit Steigungen `slopes`.
///
/// Segment `i` nutzt `slopes[i].r` als Start- und `slopes[i + 1].l` als
/// End-Steigung. Beide Slices müssen gleich lang sein (≥ 2).
pub fn sample_chain(knots: &[Knot], slopes: &[Slope]) -> AxisSamples {
    let mut out = AxisSamples::default();
    if knots.len() < 2 || slopes.len() != knots.len() {
        return out;
    }

    for i in 0..knots.len() - 1 {
        let segment = HermiteSegment::new(knots[i], knots[i + 1], slopes[i].r, slopes[i + 1].l);
        out.knot_indices.push(out.values.len());
        out.values.extend(segment.samples());
    }
    // Letzte Stützstelle = letztes Sample des letzten Segments
    out.knot_indices.push(out.values.len() - 1);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_endpoints_exact() {
        let seg = HermiteSegment::new(Knot::new(0.2, 3.5), Knot::new(0.7, -1.25), 4.0, -9.0);
        assert_eq!(seg.eval(0.2), 3.5);
        assert_eq!(seg.eval(0.7), -1.25);
    }

    #[test]
    fn test_linear_data_stays_linear() {
        // Steigung = Sekante → Gerade
        let seg = HermiteSegment::new(Knot::new(0.0, 1.0), Knot::new(2.0, 5.0), 2.0, 2.0);
        assert_abs_diff_eq!(seg.eval(0.5), 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(seg.eval(1.0), 3.0, epsilon = 1e-5);
        assert_abs_diff_eq!(seg.eval(1.5), 4.0, epsilon = 1e-5);
    }

    #[test]
    fn test_cubic_reproduced() {
        // v(t) = t³ auf [0, 1]: v(0)=0, v(1)=1, v'(0)=0, v'(1)=3
        let seg = HermiteSegment::new(Knot::new(0.0, 0.0), Knot::new(1.0, 1.0), 0.0, 3.0);
        for &t in &[0.1f32, 0.25, 0.5, 0.9] {
            assert_abs_diff_eq!(seg.eval(t), t * t * t, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_samples_cover_both_ends() {
        let seg = HermiteSegment::new(Knot::new(0.0, 0.0), Knot::new(1.0 / 3.0, 1.0), 3.0, 3.0);
        let samples: Vec<Knot> = seg.samples().collect();
        assert_eq!(samples.len(), seg.step_count() + 1);
        assert_eq!(samples.first().unwrap().t, 0.0);
        assert_eq!(samples.last().unwrap().t, 1.0 / 3.0);
        assert_eq!(samples.last().unwrap().value, 1.0);
        for w in samples.windows(2) {
            assert!(w[1].t > w[0].t);
        }
    }

    #[test]
    fn test_samples_restartable() {
        let seg = HermiteSegment::new(Knot::new(0.0, 0.0), Knot::new(0.5, 2.0), 1.0, -1.0);
        let first: Vec<Knot> = seg.samples().collect();
        let second: Vec<Knot> = seg.samples().collect();
        assert_eq!(first, second);
        assert_eq!(seg.samples().len(), first.len());
    }

    #[test]
    fn test_full_range_uses_global_sample_count() {
        let seg = HermiteSegment::new(Knot::new(0.0, 0.0), Knot::new(1.0, 1.0), 1.0, 1.0);
        assert_eq!(seg.samples().count(), SAMPLE_COUNT);
    }

    #[test]
    fn test_sample_chain_knot_indices_hit_knots() {
        let knots = vec![Knot::new(0.0, 0.0), Knot::new(0.4, 2.0), Knot::new(1.0, 1.0)];
        let slopes = vec![Slope { l: 1.0, r: 1.0 }; 3];
        let chain = sample_chain(&knots, &slopes);
        assert_eq!(chain.knot_indices.len(), 3);
        for (knot, &idx) in knots.iter().zip(&chain.knot_indices) {
            assert_eq!(chain.values[idx], *knot);
        }
    }

    #[test]
    fn test_sample_chain_rejects_mismatched_slopes() {
        let knots = vec![Knot::new(0.0, 0.0), Knot::new(1.0, 1.0)];
        let chain = sample_chain(&knots, &[Slope::default()]);
        assert!(chain.values.is_empty());
    }
}
