//! Parametrisierung einer Punktfolge (Uniform, Chordal, Zentripetal, Foley-Nielsen).
//!
//! Jeder Punkt erhält einen monotonen Parameterwert `t_i` mit `t_0 = 0`.
//! Daraus entstehen die Stützstellen `(t_i, x_i)` und `(t_i, y_i)`, sodass
//! x(t) und y(t) als zwei unabhängige 1D-Kurven gefittet werden.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::FitError;

/// Stützstelle einer Achse: Parameterwert und Koordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    pub t: f32,
    pub value: f32,
}

impl Knot {
    pub fn new(t: f32, value: f32) -> Self {
        Self { t, value }
    }
}

/// Stützstellen beider Achsen mit gemeinsamer Parametrisierung.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisKnots {
    /// `(t_i, x_i)`
    pub x: Vec<Knot>,
    /// `(t_i, y_i)`
    pub y: Vec<Knot>,
}

impl AxisKnots {
    /// Baut die Stützstellen aus Punkten und zugehörigen Parameterwerten.
    fn from_params(points: &[Vec2], params: &[f32]) -> Self {
        let x = points
            .iter()
            .zip(params)
            .map(|(p, &t)| Knot::new(t, p.x))
            .collect();
        let y = points
            .iter()
            .zip(params)
            .map(|(p, &t)| Knot::new(t, p.y))
            .collect();
        Self { x, y }
    }

    /// Anzahl der Stützstellen pro Achse.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// `true` wenn keine Stützstellen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Parameterwerte in Punktreihenfolge.
    pub fn params(&self) -> impl Iterator<Item = f32> + '_ {
        self.x.iter().map(|k| k.t)
    }
}

/// Strategie zur Parametrisierung der Punktfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParameterizationKind {
    /// `t_i = i / (n-1)`
    #[default]
    Uniform,
    /// Kumulierte Sehnenlänge
    Chordal,
    /// Kumulierte Wurzel der Sehnenlänge
    Centripetal,
    /// Sehnenlänge mit Knickwinkel-Korrektur (Foley-Nielsen)
    Foley,
}

impl ParameterizationKind {
    /// Alle Strategien in Menü-Reihenfolge.
    pub const ALL: [Self; 4] = [
        Self::Uniform,
        Self::Chordal,
        Self::Centripetal,
        Self::Foley,
    ];

    /// Anzeigename für das Host-Menü.
    pub fn label(self) -> &'static str {
        match self {
            Self::Uniform => "Uniform",
            Self::Chordal => "Chordal",
            Self::Centripetal => "Zentripetal",
            Self::Foley => "Foley-Nielsen",
        }
    }

    /// Berechnet einen Parameterwert pro Punkt.
    ///
    /// Ergebnis ist monoton nicht-fallend und beginnt bei 0. Chordal,
    /// Zentripetal und Foley enden bei exakt 1; sind alle Sehnen leer,
    /// fällt die Berechnung auf Uniform zurück.
    pub fn parameterize(self, points: &[Vec2]) -> Result<Vec<f32>, FitError> {
        if points.len() < 2 {
            return Err(FitError::TooFewPoints {
                count: points.len(),
            });
        }
        let params = match self {
            Self::Uniform => uniform(points.len()),
            Self::Chordal => normalized_cumulative(&chord_lengths(points)),
            Self::Centripetal => {
                let deltas: Vec<f32> = chord_lengths(points).iter().map(|d| d.sqrt()).collect();
                normalized_cumulative(&deltas)
            }
            Self::Foley => foley_nielsen(points),
        };
        Ok(params)
    }

    /// Parametrisiert die Punkte und liefert die Stützstellen beider Achsen.
    pub fn axis_knots(self, points: &[Vec2]) -> Result<AxisKnots, FitError> {
        let params = self.parameterize(points)?;
        Ok(AxisKnots::from_params(points, &params))
    }
}

/// Gleichverteilte Parameter auf [0, 1].
fn uniform(n: usize) -> Vec<f32> {
    let last = (n - 1) as f32;
    (0..n).map(|i| i as f32 / last).collect()
}

/// Euklidische Sehnenlängen `|P_{i+1} - P_i|`.
fn chord_lengths(points: &[Vec2]) -> Vec<f32> {
    points.windows(2).map(|w| w[0].distance(w[1])).collect()
}

/// Kumuliert Intervall-Längen und normiert auf [0, 1].
fn normalized_cumulative(deltas: &[f32]) -> Vec<f32> {
    let total: f32 = deltas.iter().sum();
    // Negierter Vergleich fängt auch NaN ab
    if !(total > f32::EPSILON) {
        return uniform(deltas.len() + 1);
    }

    let mut params = Vec::with_capacity(deltas.len() + 1);
    let mut acc = 0.0f32;
    params.push(0.0);
    for d in deltas {
        acc += d;
        params.push((acc / total).min(1.0));
    }
    if let Some(last) = params.last_mut() {
        *last = 1.0;
    }
    params
}

/// Foley-Nielsen: jede Sehne wird mit den Knickwinkeln an ihren Enden gewichtet.
///
/// `dt_i = d_i · (1 + 1.5·θ_i·d_{i-1}/(d_{i-1}+d_i) + 1.5·θ_{i+1}·d_{i+1}/(d_i+d_{i+1}))`,
/// Randsegmente nutzen nur den vorhandenen Winkel-Term.
fn foley_nielsen(points: &[Vec2]) -> Vec<f32> {
    let n = points.len();
    if n < 3 {
        return uniform(n);
    }

    let d = chord_lengths(points);
    // theta[k] gehört zum inneren Punkt k + 1
    let theta: Vec<f32> = (1..n - 1)
        .map(|i| turning_angle(points[i - 1], points[i], points[i + 1]))
        .collect();

    let segments = d.len();
    let deltas: Vec<f32> = (0..segments)
        .map(|i| {
            let mut factor = 1.0;
            if i > 0 {
                factor += 1.5 * theta[i - 1] * neighbor_weight(d[i - 1], d[i]);
            }
            if i + 1 < segments {
                factor += 1.5 * theta[i] * neighbor_weight(d[i + 1], d[i]);
            }
            d[i] * factor
        })
        .collect();

    normalized_cumulative(&deltas)
}

fn neighbor_weight(neighbor: f32, own: f32) -> f32 {
    let sum = neighbor + own;
    if sum > f32::EPSILON {
        neighbor / sum
    } else {
        0.0
    }
}

/// Außenwinkel am Punkt `at` (Kosinussatz), gekappt auf π/2.
///
/// Bei einer leeren Nachbarsehne ist kein Winkel definiert → 0.
fn turning_angle(prev: Vec2, at: Vec2, next: Vec2) -> f32 {
    let d_prev = prev.distance(at);
    let d_next = at.distance(next);
    if d_prev <= f32::EPSILON || d_next <= f32::EPSILON {
        return 0.0;
    }
    let l2 = prev.distance_squared(next);
    let cos_interior = ((d_prev * d_prev + d_next * d_next - l2) / (2.0 * d_prev * d_next))
        .clamp(-1.0, 1.0);
    (PI - cos_interior.acos()).min(FRAC_PI_2)
}
