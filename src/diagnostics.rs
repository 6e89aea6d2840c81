//! Diagnostic readout
//!
//! Pure reads of the world: species counts next to the initial snapshot and
//! the reaction total. Safe to call while paused.

use serde::Serialize;

use crate::sim::kinetics::RateLevel;
use crate::sim::state::{InitialCounts, MobileKind, SolidKind, World};
use crate::sim::tick::TickInput;

/// Current population of each species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Counts {
    pub reactant_gas: usize,
    pub product_gas: usize,
    pub oxide: usize,
    pub metal: usize,
}

impl Counts {
    pub fn of(world: &World) -> Self {
        let mut counts = Self::default();
        for m in &world.mobiles {
            match m.kind {
                MobileKind::BinaryGas => counts.reactant_gas += 1,
                MobileKind::TernaryProduct => counts.product_gas += 1,
            }
        }
        for s in &world.solids {
            match s.kind {
                SolidKind::Oxide => counts.oxide += 1,
                SolidKind::Metal => counts.metal += 1,
            }
        }
        counts
    }
}

/// Everything the diagnostic overlay shows
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readout {
    pub counts: Counts,
    pub initial: InitialCounts,
    pub reaction_events: u64,
    pub steps: u64,
    pub temperature_c: f32,
    pub trap_mode: bool,
    pub rate: RateLevel,
}

impl Readout {
    pub fn new(world: &World, input: &TickInput) -> Self {
        Self {
            counts: Counts::of(world),
            initial: world.initial,
            reaction_events: world.reaction_events,
            steps: world.steps,
            temperature_c: input.temperature_c,
            trap_mode: input.trap_mode,
            rate: input.rate,
        }
    }

    /// Overlay text, one entry per line
    pub fn lines(&self) -> Vec<String> {
        let on_off = if self.trap_mode { "ON" } else { "OFF" };
        vec![
            "Diagnostics (P)".to_string(),
            format!(
                "T = {:.0} °C   |   Trap mode (T): {}",
                self.temperature_c, on_off
            ),
            format!("Reaction rate (R): x{:.1}", self.rate.multiplier()),
            format!(
                "Initial: gas={}   solid={}",
                self.initial.reactant_gas, self.initial.oxide_solid
            ),
            format!(
                "Remaining: gas={}   solid={}",
                self.counts.reactant_gas, self.counts.oxide
            ),
            format!(
                "Products: gas={}   solid={}",
                self.counts.product_gas, self.counts.metal
            ),
            format!("Reaction events: {}", self.reaction_events),
        ]
    }
}

impl std::fmt::Display for Readout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
