//! Solid pile construction
//!
//! Builds a compact heap at the bottom of the arena: widest row at the base,
//! each row above one unit narrower and centered, so consecutive rows sit
//! half a spacing apart like stacked bricks.

use glam::Vec2;
use rand::Rng;

use super::state::{Arena, SolidKind, StaticUnit};
use crate::consts::*;

/// Width of the base row for a pile of `count` units
pub fn base_row_width(count: usize) -> usize {
    let w = ((2 * count) as f32).sqrt().ceil() as usize;
    w.clamp(1, PILE_MAX_ROW_WIDTH)
}

/// Number of units in `row` (0 = base) of a pile whose base row is `base_width` wide
#[inline]
pub fn row_width(base_width: usize, row: usize) -> usize {
    base_width.saturating_sub(row).max(1)
}

/// Most units a pile can hold
pub fn pile_capacity() -> usize {
    (0..PILE_MAX_ROWS)
        .map(|row| row_width(PILE_MAX_ROW_WIDTH, row))
        .sum()
}

/// Build a pile of up to `count` oxide units.
///
/// Requests beyond the pile capacity are truncated; the returned vector holds
/// only what was placed.
pub fn build_pile<R: Rng + ?Sized>(count: usize, arena: &Arena, rng: &mut R) -> Vec<StaticUnit> {
    let mut solids = Vec::with_capacity(count.min(pile_capacity()));
    if count == 0 {
        return solids;
    }

    let base_y = arena.height - PILE_BASE_OFFSET;
    let base_x = arena.width * 0.5;
    let base_width = base_row_width(count);

    let mut row = 0;
    while solids.len() < count && row < PILE_MAX_ROWS {
        let in_row = row_width(base_width, row).min(count - solids.len());
        let y = base_y - row as f32 * PILE_ROW_PITCH;
        let x_start = base_x - (in_row as f32 - 1.0) * PILE_SPACING * 0.5;
        for k in 0..in_row {
            let jitter = Vec2::new(
                rng.random_range(-PILE_JITTER_X..PILE_JITTER_X),
                rng.random_range(-PILE_JITTER_Y..PILE_JITTER_Y),
            );
            let pos = Vec2::new(x_start + k as f32 * PILE_SPACING, y) + jitter;
            let phase = rng.random_range(0.0..std::f32::consts::TAU);
            solids.push(StaticUnit::new(SolidKind::Oxide, pos, phase));
        }
        row += 1;
    }

    if solids.len() < count {
        log::warn!(
            "Pile full: placed {} of {} requested oxide units",
            solids.len(),
            count
        );
    }
    solids
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_base_row_width() {
        assert_eq!(base_row_width(1), 2);
        assert_eq!(base_row_width(10), 5);
        assert_eq!(base_row_width(30), 8);
        assert_eq!(base_row_width(10_000), PILE_MAX_ROW_WIDTH);
    }

    #[test]
    fn test_rows_narrow_upward() {
        assert_eq!(row_width(5, 0), 5);
        assert_eq!(row_width(5, 1), 4);
        assert_eq!(row_width(5, 9), 1);
    }

    #[test]
    fn test_empty_pile() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(build_pile(0, &Arena::default(), &mut rng).is_empty());
    }

    #[test]
    fn test_pile_all_oxide_and_counted() {
        let mut rng = Pcg32::seed_from_u64(7);
        let pile = build_pile(10, &Arena::default(), &mut rng);
        assert_eq!(pile.len(), 10);
        assert!(pile.iter().all(|s| s.kind == SolidKind::Oxide));
    }

    #[test]
    fn test_pile_sits_near_bottom() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let pile = build_pile(40, &arena, &mut rng);
        let lowest_allowed = arena.height - PILE_BASE_OFFSET - PILE_JITTER_Y;
        let top = arena.height
            - PILE_BASE_OFFSET
            - (PILE_MAX_ROWS as f32 - 1.0) * PILE_ROW_PITCH
            - PILE_JITTER_Y;
        for s in &pile {
            assert!(s.pos().y <= arena.height - PILE_BASE_OFFSET + PILE_JITTER_Y);
            assert!(s.pos().y >= top);
        }
        // Base row is populated
        assert!(pile.iter().any(|s| s.pos().y >= lowest_allowed));
    }

    #[test]
    fn test_pile_truncates_at_capacity() {
        let mut rng = Pcg32::seed_from_u64(11);
        let pile = build_pile(pile_capacity() + 25, &Arena::default(), &mut rng);
        assert_eq!(pile.len(), pile_capacity());
    }
}
