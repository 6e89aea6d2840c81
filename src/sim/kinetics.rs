//! Temperature-driven kinetics
//!
//! Maps the live temperature and the two hidden modifiers to an agitation
//! speed and a per-contact reaction probability. Recomputed every step.

use serde::{Deserialize, Serialize};

use crate::clamp;
use crate::consts::*;

/// Hidden reaction-rate multiplier, cycled through a fixed ordered set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RateLevel {
    Half,
    #[default]
    Normal,
    Fast,
    Faster,
}

impl RateLevel {
    pub const ALL: [RateLevel; 4] = [
        RateLevel::Half,
        RateLevel::Normal,
        RateLevel::Fast,
        RateLevel::Faster,
    ];

    pub fn multiplier(&self) -> f32 {
        match self {
            RateLevel::Half => 0.5,
            RateLevel::Normal => 1.0,
            RateLevel::Fast => 1.8,
            RateLevel::Faster => 2.8,
        }
    }

    /// Next level, wrapping back to the slowest
    pub fn next(&self) -> Self {
        match self {
            RateLevel::Half => RateLevel::Normal,
            RateLevel::Normal => RateLevel::Fast,
            RateLevel::Fast => RateLevel::Faster,
            RateLevel::Faster => RateLevel::Half,
        }
    }
}

/// Per-frame kinetic parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KineticParams {
    /// Multiplier applied to every mobile unit's velocity this step
    pub speed: f32,
    /// Chance that one gas/oxide contact converts, before the surface boost
    pub reaction_probability: f32,
}

/// Compute kinetics for a temperature in °C.
///
/// Any input is accepted: extreme values are clamped into the visual speed
/// range and the probability ceiling. NaN is read as the low calibration point.
pub fn kinetic_params(temperature_c: f32, rate: RateLevel, trap_mode: bool) -> KineticParams {
    let tc = if temperature_c.is_nan() {
        SPEED_CAL_LOW_C
    } else {
        temperature_c
    };
    let tk = (tc + KELVIN_OFFSET).max(MIN_ABSOLUTE_TEMP);

    let t = (tc - SPEED_CAL_LOW_C) / (SPEED_CAL_HIGH_C - SPEED_CAL_LOW_C);
    let mut speed = clamp(SPEED_BASE + t * SPEED_SPAN, SPEED_MIN, SPEED_MAX);

    let arrhenius = PRE_EXPONENTIAL * (-ACTIVATION_ENERGY / (GAS_CONSTANT * tk)).exp();
    let mut p = clamp(arrhenius * rate.multiplier(), 0.0, PROBABILITY_MAX);

    if tc < COLD_THRESHOLD_C {
        if trap_mode {
            p *= TRAP_PROBABILITY_DAMP;
            speed *= TRAP_SPEED_DAMP;
        } else {
            p *= COLD_PROBABILITY_DAMP;
            speed *= COLD_SPEED_DAMP;
        }
    }

    KineticParams {
        speed,
        reaction_probability: p,
    }
}
