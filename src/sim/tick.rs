//! Per-frame simulation step
//!
//! motion -> gas overlap -> interface reactions -> purge, run to completion.

use rand::Rng;

use super::collision::{advance, resolve_overlaps};
use super::kinetics::{RateLevel, kinetic_params};
use super::reaction::{ExposureScore, react_at_interface};
use super::state::World;

/// Live parameters for a single step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Temperature in °C, read fresh every step
    pub temperature_c: f32,
    /// Hidden reaction-rate multiplier
    pub rate: RateLevel,
    /// Hidden low-temperature trap
    pub trap_mode: bool,
    /// Skip every mutation while set
    pub paused: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            temperature_c: 50.0,
            rate: RateLevel::default(),
            trap_mode: false,
            paused: false,
        }
    }
}

/// Outcome of one call to [`tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// False when the step was skipped because of pause
    pub advanced: bool,
    pub reactions: u64,
}

/// Advance the world by one step
pub fn tick<R, E>(world: &mut World, input: &TickInput, exposure: &E, rng: &mut R) -> StepReport
where
    R: Rng + ?Sized,
    E: ExposureScore + ?Sized,
{
    if input.paused {
        return StepReport::default();
    }

    let kinetics = kinetic_params(input.temperature_c, input.rate, input.trap_mode);
    let arena = world.arena;

    for unit in world.mobiles.iter_mut() {
        advance(unit, kinetics.speed, &arena);
    }

    resolve_overlaps(&mut world.mobiles);

    let reactions = react_at_interface(world, kinetics.reaction_probability, exposure, rng);
    world.steps += 1;

    StepReport {
        advanced: true,
        reactions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::reaction::HeightExposure;
    use crate::sim::state::{Arena, MobileKind, MobileUnit};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn drifting_world() -> World {
        let mut world = World::empty(Arena::default());
        world.mobiles.push(MobileUnit::new(
            MobileKind::BinaryGas,
            Vec2::new(200.0, 100.0),
            Vec2::new(1.0, 0.0),
        ));
        world
    }

    #[test]
    fn test_tick_moves_gas() {
        let mut world = drifting_world();
        let mut rng = Pcg32::seed_from_u64(1);
        let input = TickInput::default();
        let report = tick(&mut world, &input, &HeightExposure::default(), &mut rng);

        assert!(report.advanced);
        assert_eq!(world.steps, 1);
        let speed = kinetic_params(input.temperature_c, input.rate, input.trap_mode).speed;
        assert!((world.mobiles[0].pos.x - (200.0 + speed)).abs() < 1e-4);
    }

    #[test]
    fn test_tick_pause() {
        let mut world = drifting_world();
        let before = world.clone();
        let mut rng = Pcg32::seed_from_u64(1);
        let input = TickInput {
            paused: true,
            ..Default::default()
        };

        for _ in 0..10 {
            let report = tick(&mut world, &input, &HeightExposure::default(), &mut rng);
            assert!(!report.advanced);
        }
        assert_eq!(world, before);
    }

    #[test]
    fn test_colder_moves_slower() {
        let mut warm = drifting_world();
        let mut cold = drifting_world();
        let mut rng = Pcg32::seed_from_u64(1);
        let exposure = HeightExposure::default();

        tick(&mut warm, &TickInput::default(), &exposure, &mut rng);
        let cold_input = TickInput {
            temperature_c: 0.0,
            ..Default::default()
        };
        tick(&mut cold, &cold_input, &exposure, &mut rng);

        assert!(cold.mobiles[0].pos.x < warm.mobiles[0].pos.x);
    }
}
