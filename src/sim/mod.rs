//! Simulation core
//!
//! Everything that changes the world lives here:
//! - Kinetics recomputed from live inputs every step
//! - Gas motion, wall reflection and gas-gas anti-overlap
//! - Stochastic reactions at the gas/solid interface
//! - All randomness through an injected, seedable RNG
//! - No rendering or platform dependencies

pub mod collision;
pub mod kinetics;
pub mod pile;
pub mod reaction;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{advance, min_clearance, resolve_overlaps};
pub use kinetics::{KineticParams, RateLevel, kinetic_params};
pub use pile::{build_pile, pile_capacity};
pub use reaction::{ExposureScore, HeightExposure, contact_threshold, react_at_interface};
pub use session::{Simulation, build_world};
pub use state::{Arena, InitialCounts, MobileKind, MobileUnit, SolidKind, StaticUnit, World};
pub use tick::{StepReport, TickInput, tick};
