//! Gas/solid interface reactions
//!
//! Each live reactant gas unit looks for the first oxide in pile order that
//! it touches. Touching bounces the gas back; a single draw then decides
//! whether that contact converts the oxide to metal and emits a product.

use glam::Vec2;
use rand::Rng;

use super::state::{Arena, MobileKind, MobileUnit, SolidKind, StaticUnit, World};
use crate::consts::*;
use crate::{clamp, distance};

/// Scores how exposed a solid unit is to the gas, in `[0, 1]`.
///
/// Sees the whole live pile so neighbour-aware scoring can replace the
/// default without touching the reaction pass. `index` is the scored unit's
/// position in `pile`. The reaction pass multiplies the contact probability
/// by this score.
pub trait ExposureScore {
    fn score(&self, pile: &[StaticUnit], index: usize, arena: &Arena) -> f32;
}

/// Height-based exposure: units higher in the arena score closer to 1.0,
/// buried units near the base get the floor value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightExposure {
    /// Distance above the bottom wall at which the score reaches 1.0
    pub span: f32,
    pub floor: f32,
}

impl Default for HeightExposure {
    fn default() -> Self {
        Self {
            span: EXPOSURE_SPAN,
            floor: EXPOSURE_FLOOR,
        }
    }
}

impl ExposureScore for HeightExposure {
    fn score(&self, pile: &[StaticUnit], index: usize, arena: &Arena) -> f32 {
        let y = pile[index].pos().y;
        clamp((arena.height - y) / self.span, self.floor, 1.0)
    }
}

/// Distance at which a gas unit of the given radius touches a solid unit
#[inline]
pub fn contact_threshold(gas_radius: f32) -> f32 {
    (gas_radius + SOLID_RADIUS) * CONTACT_FACTOR
}

/// Run the interface pass over the whole world and purge consumed gas.
///
/// Returns the number of reactions fired.
pub fn react_at_interface<R, E>(
    world: &mut World,
    reaction_probability: f32,
    exposure: &E,
    rng: &mut R,
) -> u64
where
    R: Rng + ?Sized,
    E: ExposureScore + ?Sized,
{
    let mut products = Vec::new();
    let arena = world.arena;

    for gas in world.mobiles.iter_mut() {
        if gas.consumed || !gas.is_reactant() {
            continue;
        }
        let threshold = contact_threshold(gas.envelope_radius());

        for idx in 0..world.solids.len() {
            let solid = &world.solids[idx];
            if solid.kind != SolidKind::Oxide {
                continue;
            }
            let at = solid.pos();
            if distance(gas.pos, at) > threshold {
                continue;
            }

            gas.vel = -gas.vel;

            let chance = reaction_probability * exposure.score(&world.solids, idx, &arena);
            if rng.random::<f32>() < chance {
                gas.consumed = true;
                world.solids[idx].reduce();
                products.push(spawn_product(at, rng));
                log::debug!(
                    "Reaction at ({:.1}, {:.1}), chance {:.4}",
                    at.x,
                    at.y,
                    chance
                );
                break;
            }
        }
    }

    let fired = products.len() as u64;
    world.reaction_events += fired;
    world.mobiles.extend(products);
    world.purge_consumed();
    fired
}

/// A product unit released just above the converted solid
fn spawn_product<R: Rng + ?Sized>(at: Vec2, rng: &mut R) -> MobileUnit {
    let pos = Vec2::new(
        at.x + rng.random_range(-PRODUCT_OFFSET_X..PRODUCT_OFFSET_X),
        at.y - rng.random_range(PRODUCT_OFFSET_Y_MIN..PRODUCT_OFFSET_Y_MAX),
    );
    let vel = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
    MobileUnit::new(MobileKind::TernaryProduct, pos, vel)
}
