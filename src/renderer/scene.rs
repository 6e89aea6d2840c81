//! Scene assembly for the drawing collaborator
//!
//! Breaks every unit into atom discs and bond lines. Solid units get a small
//! temperature-scaled vibration added on top of their stored position; the
//! world itself is only ever borrowed immutably.

use glam::Vec2;

use super::vertex::{AtomInstance, BondInstance, colors, labels};
use crate::consts::{CU_RADIUS, H_RADIUS, O_RADIUS};
use crate::sim::state::{MobileKind, SolidKind, World};

/// Phase advance per rendered frame (radians)
pub const VIBRATION_STEP: f32 = 0.03;

/// Vibration amplitude for a temperature in °C
pub fn vibration_amplitude(temperature_c: f32) -> f32 {
    (0.2 + (temperature_c / 120.0) * 0.5).max(0.0)
}

/// Everything needed to draw one frame, back to front
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub atoms: Vec<AtomInstance>,
    pub bonds: Vec<BondInstance>,
}

/// Builds scenes and keeps the render-only frame clock
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    frame: u64,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Build the next frame. Advances the vibration clock even while paused.
    pub fn build(&mut self, world: &World, temperature_c: f32, show_atoms: bool) -> Scene {
        let mut scene = Scene {
            atoms: Vec::with_capacity(world.solids.len() * 2 + world.mobiles.len() * 3),
            bonds: Vec::new(),
        };
        let amp = vibration_amplitude(temperature_c);
        let clock = self.frame as f32 * VIBRATION_STEP;

        // Pile first so gas draws over it
        for solid in &world.solids {
            let phase = solid.vibration_phase + clock;
            let c = solid.pos() + Vec2::new(phase.cos(), phase.sin()) * amp;
            match solid.kind {
                SolidKind::Oxide => {
                    push_bond(&mut scene, c, CU_RADIUS, O_RADIUS);
                    push_atom(&mut scene, c - Vec2::X * CU_RADIUS, Atom::Cu, show_atoms);
                    push_atom(&mut scene, c + Vec2::X * O_RADIUS, Atom::O, show_atoms);
                }
                SolidKind::Metal => push_atom(&mut scene, c, Atom::Cu, show_atoms),
            }
        }

        for gas in &world.mobiles {
            let c = gas.pos;
            match gas.kind {
                MobileKind::BinaryGas => {
                    push_bond(&mut scene, c, H_RADIUS, H_RADIUS);
                    push_atom(&mut scene, c - Vec2::X * H_RADIUS, Atom::H, show_atoms);
                    push_atom(&mut scene, c + Vec2::X * H_RADIUS, Atom::H, show_atoms);
                }
                MobileKind::TernaryProduct => {
                    let spread = O_RADIUS + H_RADIUS - 2.0;
                    let drop = O_RADIUS - 2.0;
                    push_atom(&mut scene, c, Atom::O, show_atoms);
                    push_atom(&mut scene, c + Vec2::new(-spread, drop), Atom::H, show_atoms);
                    push_atom(&mut scene, c + Vec2::new(spread, drop), Atom::H, show_atoms);
                }
            }
        }

        self.frame += 1;
        scene
    }
}

#[derive(Debug, Clone, Copy)]
enum Atom {
    H,
    O,
    Cu,
}

fn push_atom(scene: &mut Scene, at: Vec2, atom: Atom, show_label: bool) {
    let (radius, color, label) = match atom {
        Atom::H => (H_RADIUS, colors::HYDROGEN, labels::H),
        Atom::O => (O_RADIUS, colors::OXYGEN, labels::O),
        Atom::Cu => (CU_RADIUS, colors::COPPER, labels::CU),
    };
    let label = if show_label { label } else { labels::NONE };
    scene
        .atoms
        .push(AtomInstance::new(at.x, at.y, radius, color, label));
}

/// Horizontal bond between a left atom of radius `left_r` and a right atom of radius `right_r`
fn push_bond(scene: &mut Scene, c: Vec2, left_r: f32, right_r: f32) {
    scene.bonds.push(BondInstance::new(
        [c.x - left_r + 1.0, c.y],
        [c.x + right_r - 1.0, c.y],
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Arena, MobileUnit, StaticUnit};

    fn small_world() -> World {
        let mut world = World::empty(Arena::default());
        world.mobiles.push(MobileUnit::new(
            MobileKind::BinaryGas,
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
        ));
        world.mobiles.push(MobileUnit::new(
            MobileKind::TernaryProduct,
            Vec2::new(200.0, 100.0),
            Vec2::ZERO,
        ));
        world
            .solids
            .push(StaticUnit::new(SolidKind::Oxide, Vec2::new(400.0, 400.0), 0.0));
        world
            .solids
            .push(StaticUnit::new(SolidKind::Metal, Vec2::new(418.0, 400.0), 1.0));
        world
    }

    #[test]
    fn test_atom_breakdown() {
        let world = small_world();
        let scene = SceneBuilder::new().build(&world, 50.0, false);
        // oxide 2 + metal 1 + gas 2 + product 3
        assert_eq!(scene.atoms.len(), 8);
        assert_eq!(scene.bonds.len(), 2);
        assert!(scene.atoms.iter().all(|a| a.label == labels::NONE));
    }

    #[test]
    fn test_bonds_span_their_unit() {
        let world = small_world();
        let scene = SceneBuilder::new().build(&world, 0.0, false);
        assert!(scene.bonds.iter().all(|b| b.color == colors::BOND));
        // Gas bond is not jittered: centered on the unit, inside both atoms
        let gas = scene.bonds[1];
        assert_eq!(gas.from, [100.0 - H_RADIUS + 1.0, 100.0]);
        assert_eq!(gas.to, [100.0 + H_RADIUS - 1.0, 100.0]);
    }

    #[test]
    fn test_labels_follow_flag() {
        let world = small_world();
        let scene = SceneBuilder::new().build(&world, 50.0, true);
        assert_eq!(scene.atoms[0].label, labels::CU);
        assert_eq!(scene.atoms[1].label, labels::O);
        assert_eq!(scene.atoms[2].label, labels::CU);
        assert_eq!(scene.atoms[3].label, labels::H);
    }

    #[test]
    fn test_vibration_is_cosmetic() {
        let world = small_world();
        let before = world.clone();
        let mut builder = SceneBuilder::new();
        let amp = vibration_amplitude(120.0);
        for _ in 0..50 {
            let scene = builder.build(&world, 120.0, false);
            // Metal atom sits on the unit center plus the offset
            let metal = scene.atoms[2];
            let offset = Vec2::from(metal.position) - world.solids[1].pos();
            assert!(offset.length() <= amp + 1e-4);
        }
        assert_eq!(builder.frame(), 50);
        assert_eq!(world, before);
    }

    #[test]
    fn test_vibration_advances_between_frames() {
        let world = small_world();
        let mut builder = SceneBuilder::new();
        let first = builder.build(&world, 50.0, false).atoms[2];
        let second = builder.build(&world, 50.0, false).atoms[2];
        assert_ne!(first.position, second.position);
    }

    #[test]
    fn test_gas_is_not_jittered() {
        let world = small_world();
        let scene = SceneBuilder::new().build(&world, 120.0, false);
        // Product oxygen sits exactly on its unit center
        assert_eq!(scene.atoms[5].position, [200.0, 100.0]);
    }
}
