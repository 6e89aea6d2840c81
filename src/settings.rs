//! Simulation settings and hidden toggles
//!
//! Persisted as JSON. Counts are read only when the world is (re)built;
//! everything else feeds the per-frame [`TickInput`] or the renderer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::error::{Error, Result};
use crate::sim::{Arena, RateLevel, TickInput};

/// Simulation settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Sliders ===
    /// Temperature in °C
    pub temperature_c: f32,
    /// Reactant gas units at (re)start
    pub reactant_count: usize,
    /// Oxide units at (re)start
    pub oxide_count: usize,

    // === Hidden controls ===
    /// Reaction-rate multiplier (R)
    pub rate: RateLevel,
    /// Low-temperature trap (T)
    pub trap_mode: bool,
    /// Diagnostic overlay (P)
    pub show_diagnostics: bool,
    /// Atom labels on the rendered molecules
    pub show_atoms: bool,

    /// Fixed RNG seed; fresh entropy when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            // Stoichiometric default only; the sliders stay free
            temperature_c: 50.0,
            reactant_count: 10,
            oxide_count: 10,

            rate: RateLevel::Normal,
            trap_mode: false,
            show_diagnostics: false,
            show_atoms: false,

            seed: None,
        }
    }
}

impl Settings {
    pub fn arena(&self) -> Arena {
        Arena {
            width: self.arena_width,
            height: self.arena_height,
        }
    }

    /// Per-frame inputs for the simulation core
    pub fn tick_input(&self, paused: bool) -> TickInput {
        TickInput {
            temperature_c: self.temperature_c,
            rate: self.rate,
            trap_mode: self.trap_mode,
            paused,
        }
    }

    pub fn cycle_rate(&mut self) {
        self.rate = self.rate.next();
    }

    pub fn toggle_trap(&mut self) {
        self.trap_mode = !self.trap_mode;
    }

    pub fn toggle_diagnostics(&mut self) {
        self.show_diagnostics = !self.show_diagnostics;
    }

    pub fn toggle_atoms(&mut self) {
        self.show_atoms = !self.show_atoms;
    }

    /// Apply a hidden-key press. Returns false for keys with no binding.
    pub fn handle_key(&mut self, key: char) -> bool {
        match key.to_ascii_lowercase() {
            'p' => self.toggle_diagnostics(),
            't' => self.toggle_trap(),
            'r' => self.cycle_rate(),
            _ => return false,
        }
        true
    }

    /// Reject arenas the simulation cannot lay out
    pub fn validate(&self) -> Result<()> {
        if !self.arena_width.is_finite() || self.arena_width <= 0.0 {
            return Err(Error::InvalidSetting(
                "arena width must be finite and > 0".into(),
            ));
        }
        if !self.arena_height.is_finite() || self.arena_height <= 0.0 {
            return Err(Error::InvalidSetting(
                "arena height must be finite and > 0".into(),
            ));
        }
        Ok(())
    }

    /// Load and validate settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}): {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "interface-reaction-{}-{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_defaults_match_classroom_setup() {
        let s = Settings::default();
        assert_eq!(s.reactant_count, 10);
        assert_eq!(s.oxide_count, 10);
        assert_eq!(s.temperature_c, 50.0);
        assert_eq!(s.rate, RateLevel::Normal);
        assert!(!s.trap_mode);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_hidden_keys() {
        let mut s = Settings::default();
        assert!(s.handle_key('R'));
        assert_eq!(s.rate, RateLevel::Fast);
        assert!(s.handle_key('t'));
        assert!(s.trap_mode);
        assert!(s.handle_key('p'));
        assert!(s.show_diagnostics);
        assert!(!s.handle_key('x'));
    }

    #[test]
    fn test_tick_input_carries_live_values() {
        let mut s = Settings::default();
        s.temperature_c = 12.0;
        s.toggle_trap();
        let input = s.tick_input(true);
        assert_eq!(input.temperature_c, 12.0);
        assert!(input.trap_mode);
        assert!(input.paused);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"temperature_c": 90.0, "seed": 3}"#).unwrap();
        assert_eq!(s.temperature_c, 90.0);
        assert_eq!(s.seed, Some(3));
        assert_eq!(s.reactant_count, 10);
    }

    #[test]
    fn test_invalid_arena_rejected() {
        let s = Settings {
            arena_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(s.validate(), Err(Error::InvalidSetting(_))));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let mut s = Settings::default();
        s.oxide_count = 25;
        s.seed = Some(99);
        s.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, s);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let s = Settings::load_or_default(temp_path("does-not-exist"));
        assert_eq!(s, Settings::default());
    }
}
