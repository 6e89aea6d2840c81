//! World state and particle entities
//!
//! The world is rebuilt wholesale on restart and read, never mutated, by
//! diagnostics and rendering.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gas-phase species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MobileKind {
    /// Diatomic gas consumed by reactions
    BinaryGas,
    /// Triatomic gas emitted by a reaction
    TernaryProduct,
}

impl MobileKind {
    /// Collision/contact radius for this species
    pub fn envelope_radius(&self) -> f32 {
        match self {
            MobileKind::BinaryGas => 2.0 * H_RADIUS + 4.0,
            MobileKind::TernaryProduct => O_RADIUS + 2.0 * H_RADIUS + 6.0,
        }
    }
}

/// A free-moving gas unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobileUnit {
    pub kind: MobileKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Set by a reaction; the unit is purged at the end of the same step
    pub consumed: bool,
}

impl MobileUnit {
    pub fn new(kind: MobileKind, pos: Vec2, vel: Vec2) -> Self {
        Self {
            kind,
            pos,
            vel,
            consumed: false,
        }
    }

    #[inline]
    pub fn envelope_radius(&self) -> f32 {
        self.kind.envelope_radius()
    }

    #[inline]
    pub fn is_reactant(&self) -> bool {
        self.kind == MobileKind::BinaryGas
    }
}

/// Solid-phase species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolidKind {
    Oxide,
    Metal,
}

/// A pile-bound solid unit. Its position never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticUnit {
    pub kind: SolidKind,
    pos: Vec2,
    /// Starting angle of the cosmetic vibration; the renderer advances it per frame
    pub vibration_phase: f32,
}

impl StaticUnit {
    pub fn new(kind: SolidKind, pos: Vec2, vibration_phase: f32) -> Self {
        Self {
            kind,
            pos,
            vibration_phase,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Convert in place. Returns false if the unit was already metal.
    pub fn reduce(&mut self) -> bool {
        if self.kind == SolidKind::Oxide {
            self.kind = SolidKind::Metal;
            true
        } else {
            false
        }
    }
}

/// Rectangular arena with the origin at the top-left corner, y pointing down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// Counts captured once when the world is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InitialCounts {
    pub reactant_gas: usize,
    pub oxide_solid: usize,
}

/// Complete simulation state for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub arena: Arena,
    /// Gas units in creation order (products are appended)
    pub mobiles: Vec<MobileUnit>,
    /// Solid units in pile order; never grows or shrinks during a run
    pub solids: Vec<StaticUnit>,
    pub initial: InitialCounts,
    /// Reactions fired since the world was built
    pub reaction_events: u64,
    /// Unpaused steps advanced since the world was built
    pub steps: u64,
}

impl World {
    /// An empty world in the given arena
    pub fn empty(arena: Arena) -> Self {
        Self {
            arena,
            mobiles: Vec::new(),
            solids: Vec::new(),
            initial: InitialCounts::default(),
            reaction_events: 0,
            steps: 0,
        }
    }

    /// Drop every unit marked consumed
    pub fn purge_consumed(&mut self) {
        self.mobiles.retain(|m| !m.consumed);
    }
}
