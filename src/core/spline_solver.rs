//! Natürlicher kubischer Spline über Tridiagonal-System (Thomas-Algorithmus).
//!
//! Pro Achse werden aus den Stützstellen `(t_i, v_i)` die zweiten Ableitungen
//! `M_i` gelöst (`M_0 = M_{n-1} = 0`) und in Steigungen an den Segment-Enden
//! umgerechnet.

use super::parameterization::Knot;
use super::FitError;

/// Steigung an einem Punkt, jeweils von links und rechts kommend.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Slope {
    /// Steigung am Ende des linken Segments
    pub l: f32,
    /// Steigung am Anfang des rechten Segments
    pub r: f32,
}

impl Slope {
    pub fn new(l: f32, r: f32) -> Self {
        Self { l, r }
    }

    /// Beidseitig gleiche Steigung (C1-stetiger Punkt).
    pub fn shared(value: f32) -> Self {
        Self { l: value, r: value }
    }
}

/// Löst den natürlichen Spline und liefert eine [`Slope`] pro Stützstelle.
///
/// Innere Punkte bekommen links und rechts denselben Wert. Am ersten Punkt
/// gilt `l = r`, am letzten `r = l`.
///
/// # Fehler
/// - `TooFewPoints` bei weniger als 2 Stützstellen
/// - `DegenerateInterval` wenn ein `h_i = t_{i+1} - t_i` nicht positiv ist
pub fn solve_natural(knots: &[Knot]) -> Result<Vec<Slope>, FitError> {
    let n = knots.len();
    if n < 2 {
        return Err(FitError::TooFewPoints { count: n });
    }

    let h = intervals(knots)?;
    let m = second_derivatives(knots, &h);

    let mut slopes = vec![Slope::default(); n];
    for i in 0..n - 1 {
        let (d0, d1) = segment_slopes(knots[i], knots[i + 1], m[i], m[i + 1], h[i]);
        slopes[i] = Slope::shared(d0);
        if i == n - 2 {
            slopes[i + 1] = Slope::shared(d1);
        }
    }

    log::trace!("Natürlicher Spline gelöst: {} Stützstellen", n);
    Ok(slopes)
}

/// Prüft, ob alle Parameter-Intervalle positiv sind.
pub fn check_intervals(knots: &[Knot]) -> Result<(), FitError> {
    intervals(knots).map(|_| ())
}

/// Intervall-Längen `h_i`, leere oder negative Intervalle sind ein Fehler.
fn intervals(knots: &[Knot]) -> Result<Vec<f32>, FitError> {
    knots
        .windows(2)
        .enumerate()
        .map(|(index, w)| {
            let h = w[1].t - w[0].t;
            if h > f32::EPSILON {
                Ok(h)
            } else {
                Err(FitError::DegenerateInterval { index })
            }
        })
        .collect()
}

/// Zweite Ableitungen `M_0..M_{n-1}` mit natürlichen Randbedingungen.
///
/// Für n = 2 gibt es keine inneren Unbekannten, alle `M_i` sind 0.
fn second_derivatives(knots: &[Knot], h: &[f32]) -> Vec<f32> {
    let n = knots.len();
    let mut m = vec![0.0f32; n];
    let inner = n.saturating_sub(2);
    if inner == 0 {
        return m;
    }

    // Zeile k gehört zum inneren Punkt i = k + 1
    let mut diag = Vec::with_capacity(inner);
    let mut upper = Vec::with_capacity(inner);
    let mut rhs = Vec::with_capacity(inner);
    for i in 1..n - 1 {
        let secant_prev = (knots[i].value - knots[i - 1].value) / h[i - 1];
        let secant_next = (knots[i + 1].value - knots[i].value) / h[i];
        diag.push(2.0 * (h[i - 1] + h[i]));
        upper.push(h[i]);
        rhs.push(6.0 * (secant_next - secant_prev));
    }

    // Vorwärts-Elimination, Unterdiagonale von Zeile k ist h[k]
    for k in 1..inner {
        let factor = h[k] / diag[k - 1];
        diag[k] -= factor * upper[k - 1];
        rhs[k] -= factor * rhs[k - 1];
    }

    // Rückwärts-Substitution
    m[inner] = rhs[inner - 1] / diag[inner - 1];
    for k in (0..inner - 1).rev() {
        m[k + 1] = (rhs[k] - upper[k] * m[k + 2]) / diag[k];
    }
    m
}

/// Steigungen am Anfang und Ende eines Segments aus den `M`-Werten.
fn segment_slopes(a: Knot, b: Knot, m0: f32, m1: f32, h: f32) -> (f32, f32) {
    let secant = (b.value - a.value) / h;
    let d0 = -h * (2.0 * m0 + m1) / 6.0 + secant;
    let d1 = h * (2.0 * m1 + m0) / 6.0 + secant;
    (d0, d1)
}
