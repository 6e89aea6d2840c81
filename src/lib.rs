//! Interface Reaction - a gas reacting at the surface of a solid pile
//!
//! Core modules:
//! - `sim`: Simulation core (kinetics, motion, overlap, interface reactions)
//! - `diagnostics`: Read-only counts and overlay text
//! - `renderer`: Instance data for whatever draws the scene
//! - `settings`: Persisted configuration and hidden toggles

pub mod diagnostics;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use diagnostics::{Counts, Readout};
pub use error::{Error, Result};
pub use settings::Settings;
pub use sim::{Simulation, TickInput, World};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Default arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Gas spawn region: inset from the left, right and top walls
    pub const GAS_SPAWN_MARGIN: f32 = 60.0;
    /// Gas spawn region stops this far above the bottom wall (keeps clear of the pile)
    pub const GAS_SPAWN_FLOOR: f32 = 220.0;

    /// Atom radii used for envelopes and display
    pub const H_RADIUS: f32 = 6.0;
    pub const O_RADIUS: f32 = 8.0;
    pub const CU_RADIUS: f32 = 10.0;

    /// Calibration window for agitation speed (°C)
    pub const SPEED_CAL_LOW_C: f32 = 10.0;
    pub const SPEED_CAL_HIGH_C: f32 = 120.0;
    /// Speed at the low end of the calibration window
    pub const SPEED_BASE: f32 = 0.45;
    /// Speed gained across the calibration window
    pub const SPEED_SPAN: f32 = 3.35;
    pub const SPEED_MIN: f32 = 0.40;
    pub const SPEED_MAX: f32 = 3.8;

    /// Arrhenius parameters
    pub const GAS_CONSTANT: f32 = 8.314;
    pub const ACTIVATION_ENERGY: f32 = 10_500.0;
    pub const PRE_EXPONENTIAL: f32 = 0.65;
    /// Probability ceiling per contact, applied after the rate multiplier
    pub const PROBABILITY_MAX: f32 = 0.55;
    pub const KELVIN_OFFSET: f32 = 273.15;
    /// Absolute temperatures below this are treated as this (K)
    pub const MIN_ABSOLUTE_TEMP: f32 = 1.0;

    /// Below this temperature (°C) kinetics are additionally damped
    pub const COLD_THRESHOLD_C: f32 = 25.0;
    pub const COLD_PROBABILITY_DAMP: f32 = 0.08;
    pub const COLD_SPEED_DAMP: f32 = 0.78;
    pub const TRAP_PROBABILITY_DAMP: f32 = 0.015;
    pub const TRAP_SPEED_DAMP: f32 = 0.55;

    /// Pile layout
    pub const PILE_BASE_OFFSET: f32 = 90.0; // above bottom wall
    pub const PILE_SPACING: f32 = 18.0;
    pub const PILE_ROW_PITCH: f32 = PILE_SPACING * 0.9;
    /// Widest allowed base row; each row above is one unit narrower
    pub const PILE_MAX_ROW_WIDTH: usize = 12;
    pub const PILE_MAX_ROWS: usize = 9;
    pub const PILE_JITTER_X: f32 = 3.0;
    pub const PILE_JITTER_Y: f32 = 2.0;

    /// Effective contact size of one solid unit
    pub const SOLID_RADIUS: f32 = 18.0;
    /// Contact is detected slightly before visual overlap
    pub const CONTACT_FACTOR: f32 = 1.25;
    /// Height over which the surface boost ramps from floor to 1.0
    pub const EXPOSURE_SPAN: f32 = 220.0;
    pub const EXPOSURE_FLOOR: f32 = 0.35;

    /// Below this center distance a pair is left alone (no defined direction)
    pub const OVERLAP_MIN_DISTANCE: f32 = 0.001;
    /// De-clump passes run right after (re)initialization
    pub const DECLUMP_ITERATIONS: usize = 140;

    /// Product spawn offset from the converted solid
    pub const PRODUCT_OFFSET_X: f32 = 20.0;
    pub const PRODUCT_OFFSET_Y_MIN: f32 = 10.0;
    pub const PRODUCT_OFFSET_Y_MAX: f32 = 30.0;
}

/// Clamp `x` into `[lo, hi]` without panicking on NaN or inverted bounds
#[inline]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    x.max(lo).min(hi)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Unit vector along `v`, or zero when `v` has no length
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}
