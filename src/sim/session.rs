//! Simulation session
//!
//! Owns one world together with its random source and exposure scoring.
//! Restart discards the world and builds a fresh one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::resolve_overlaps;
use super::pile::build_pile;
use super::reaction::{ExposureScore, HeightExposure};
use super::state::{Arena, InitialCounts, MobileKind, MobileUnit, World};
use super::tick::{StepReport, TickInput, tick};
use crate::consts::*;
use crate::diagnostics::Readout;
use crate::settings::Settings;

/// Build a fresh world: reactant gas above the pile, an all-oxide pile,
/// counters reset, gas de-clumped before the first frame.
pub fn build_world<R: Rng + ?Sized>(
    arena: Arena,
    reactant_count: usize,
    oxide_count: usize,
    rng: &mut R,
) -> World {
    let mut world = World::empty(arena);

    let x_range = spawn_range(GAS_SPAWN_MARGIN, arena.width - GAS_SPAWN_MARGIN);
    let y_range = spawn_range(GAS_SPAWN_MARGIN, arena.height - GAS_SPAWN_FLOOR);
    world.mobiles = (0..reactant_count)
        .map(|_| {
            let pos = Vec2::new(
                rng.random_range(x_range.0..=x_range.1),
                rng.random_range(y_range.0..=y_range.1),
            );
            let vel = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
            MobileUnit::new(MobileKind::BinaryGas, pos, vel)
        })
        .collect();

    world.solids = build_pile(oxide_count, &arena, rng);

    world.initial = InitialCounts {
        reactant_gas: world.mobiles.len(),
        oxide_solid: world.solids.len(),
    };

    for _ in 0..DECLUMP_ITERATIONS {
        if resolve_overlaps(&mut world.mobiles) == 0 {
            break;
        }
    }

    world
}

/// Spawn interval, collapsed to its midpoint when the arena is too small.
/// A non-finite arena edge collapses it onto the finite margin.
fn spawn_range(lo: f32, hi: f32) -> (f32, f32) {
    if !hi.is_finite() {
        (lo, lo)
    } else if hi >= lo {
        (lo, hi)
    } else {
        let mid = (lo + hi) * 0.5;
        (mid, mid)
    }
}

/// One run of the simulation
pub struct Simulation {
    world: World,
    rng: Pcg32,
    seed: u64,
    exposure: Box<dyn ExposureScore>,
}

impl Simulation {
    /// Create a session and build its first world.
    ///
    /// Without a seed one is drawn from OS entropy; either way it is logged.
    pub fn new(arena: Arena, reactant_count: usize, oxide_count: usize, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let mut sim = Self {
            world: World::empty(arena),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            exposure: Box::new(HeightExposure::default()),
        };
        sim.restart(reactant_count, oxide_count);
        sim
    }

    /// Session sized and seeded from persisted settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.arena(),
            settings.reactant_count,
            settings.oxide_count,
            settings.seed,
        )
    }

    /// Swap the surface exposure heuristic
    pub fn with_exposure(mut self, exposure: impl ExposureScore + 'static) -> Self {
        self.exposure = Box::new(exposure);
        self
    }

    /// Discard the current world and build a new one in the same arena
    pub fn restart(&mut self, reactant_count: usize, oxide_count: usize) {
        self.world = build_world(self.world.arena, reactant_count, oxide_count, &mut self.rng);
        log::info!(
            "World built: {} reactant gas, {} oxide (seed {})",
            self.world.initial.reactant_gas,
            self.world.initial.oxide_solid,
            self.seed
        );
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &TickInput) -> StepReport {
        tick(&mut self.world, input, self.exposure.as_ref(), &mut self.rng)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Diagnostic readout for the current world and live inputs
    pub fn readout(&self, input: &TickInput) -> Readout {
        Readout::new(&self.world, input)
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("seed", &self.seed)
            .field("world", &self.world)
            .finish_non_exhaustive()
    }
}
