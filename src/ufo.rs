//! The bonus saucer: a rare spawn that crawls right to left along row 1.

use std::ops::{Range, RangeInclusive};

use log::debug;
use rand::Rng;

use crate::entities::GameState;

pub const SPAWN_ROLL: RangeInclusive<u32> = 1..=1000;
/// Draws in this window activate the UFO (0.2% per tick).
pub const SPAWN_WINDOW: Range<u32> = 540..542;
/// Ticks the UFO waits between moves.
pub const MOVE_CADENCE: u32 = 2;

/// Draw once; activate if the draw lands in the spawn window.
/// Always consumes a draw, even when the UFO is already flying.
pub fn roll_spawn(state: &mut GameState, rng: &mut impl Rng) -> bool {
    let draw = rng.gen_range(SPAWN_ROLL);
    if state.ufo.active || !SPAWN_WINDOW.contains(&draw) {
        return false;
    }
    state.ufo.active = true;
    debug!("ufo launched at column {}", state.ufo.x);
    true
}

/// Move the active UFO one column left when its timer allows; past the left
/// edge it goes back to the spawn side and waits for the next roll.
pub fn step(state: &mut GameState) {
    let ufo = &mut state.ufo;
    if !ufo.active {
        return;
    }
    if ufo.move_timer > 0 {
        ufo.move_timer -= 1;
        return;
    }
    if ufo.x <= 0.0 {
        ufo.park(state.width);
    } else {
        ufo.x -= 1.0;
    }
    ufo.move_timer = MOVE_CADENCE;
}
