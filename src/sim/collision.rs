//! Wall reflection and gas-gas anti-overlap
//!
//! Solids never take part here: the pile is placed non-overlapping and the
//! interface reaction pass is the only gas-solid interaction.

use super::state::{Arena, MobileUnit};
use crate::consts::OVERLAP_MIN_DISTANCE;
use crate::{distance, normalize};

/// Advance a unit by its velocity scaled by `speed`, then reflect off the walls.
///
/// A unit whose envelope crosses a wall is clamped back to touch it and the
/// matching velocity component flips sign.
pub fn advance(unit: &mut MobileUnit, speed: f32, arena: &Arena) {
    unit.pos += unit.vel * speed;

    let r = unit.envelope_radius();
    if unit.pos.x < r {
        unit.pos.x = r;
        unit.vel.x = -unit.vel.x;
    }
    if unit.pos.x > arena.width - r {
        unit.pos.x = arena.width - r;
        unit.vel.x = -unit.vel.x;
    }
    if unit.pos.y < r {
        unit.pos.y = r;
        unit.vel.y = -unit.vel.y;
    }
    if unit.pos.y > arena.height - r {
        unit.pos.y = arena.height - r;
        unit.vel.y = -unit.vel.y;
    }
}

/// One pass over every unordered pair of live gas units.
///
/// Overlapping pairs are pushed apart along their center line by half the
/// overlap each. Returns how many pairs were separated.
pub fn resolve_overlaps(units: &mut [MobileUnit]) -> usize {
    let mut separated = 0;
    for i in 0..units.len() {
        if units[i].consumed {
            continue;
        }
        let (head, tail) = units.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if b.consumed {
                continue;
            }
            let min_d = a.envelope_radius() + b.envelope_radius();
            let d = distance(a.pos, b.pos);
            if d < min_d && d > OVERLAP_MIN_DISTANCE {
                let push = normalize(a.pos - b.pos) * ((min_d - d) * 0.5);
                a.pos += push;
                b.pos -= push;
                separated += 1;
            }
        }
    }
    separated
}

/// Smallest gap between any two live units; negative means overlap.
/// `None` when fewer than two units are live.
pub fn min_clearance(units: &[MobileUnit]) -> Option<f32> {
    let live: Vec<&MobileUnit> = units.iter().filter(|u| !u.consumed).collect();
    let mut best: Option<f32> = None;
    for (i, a) in live.iter().enumerate() {
        for b in &live[i + 1..] {
            let gap = distance(a.pos, b.pos) - (a.envelope_radius() + b.envelope_radius());
            best = Some(best.map_or(gap, |g| g.min(gap)));
        }
    }
    best
}
