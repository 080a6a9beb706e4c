//! Zentrale Konfiguration für den Kurven-Editor.
//!
//! `FitOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::core::{FittingKind, ParameterizationKind};

// ── Selektion ───────────────────────────────────────────────────────

/// Halbe Kantenlänge der quadratischen Pick-Box (Canvas-Einheiten).
pub const PICK_TOLERANCE: f32 = 3.0;

// ── Tangenten ───────────────────────────────────────────────────────

/// Basislänge eines aus der Steigung abgeleiteten Tangenten-Handles.
pub const BASE_TANGENT_LENGTH: f32 = 50.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Fit-Optionen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    /// Pick-Toleranz pro Achse (quadratische Box, kein Kreis)
    pub pick_tolerance: f32,
    /// Länge neu abgeleiteter Tangenten-Handles
    pub base_tangent_length: f32,
    /// Kurvendarstellung beim Start
    pub default_fitting: FittingKind,
    /// Parametrisierung beim Start
    pub default_parameterization: ParameterizationKind,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            pick_tolerance: PICK_TOLERANCE,
            base_tangent_length: BASE_TANGENT_LENGTH,
            default_fitting: FittingKind::default(),
            default_parameterization: ParameterizationKind::default(),
        }
    }
}

impl FitOptions {
    /// Parst Optionen aus einem TOML-String; fehlende Felder erhalten Defaults.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Prüft Werte, die sonst zu Divisionen durch 0 führen.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.base_tangent_length.is_finite() || self.base_tangent_length <= 0.0 {
            bail!(
                "base_tangent_length muss positiv sein, ist {}",
                self.base_tangent_length
            );
        }
        if !self.pick_tolerance.is_finite() || self.pick_tolerance < 0.0 {
            bail!(
                "pick_tolerance darf nicht negativ sein, ist {}",
                self.pick_tolerance
            );
        }
        Ok(())
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// `true` wenn `cursor` in der quadratischen Pick-Box um `target` liegt.
    pub fn hits(&self, target: glam::Vec2, cursor: glam::Vec2) -> bool {
        let d = (target - cursor).abs();
        d.x < self.pick_tolerance && d.y < self.pick_tolerance
    }
}
