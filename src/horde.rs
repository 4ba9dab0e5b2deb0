//! The horde's lockstep march.
//!
//! A shared countdown gates every step. On expiry the whole formation either
//! sweeps one column or, after touching an edge, drops one row and turns
//! around. Members only roll for fire while sweeping.

use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;

use crate::compute::finish_round;
use crate::entities::{
    cell, Bullet, GameState, Heading, March, Mode, Phase, MARCH_RESET_FLOOR, MARCH_RESET_START,
};

/// Each member draws from this range once per sweep...
pub const FIRE_ROLL: RangeInclusive<u32> = 1..=1000;
/// ...and fires on exactly this value.
pub const FIRE_HIT: u32 = 543;

/// Advance the march timer by one tick, stepping the horde when it expires.
/// Returns `true` if the horde moved.
pub fn step(state: &mut GameState, rng: &mut impl Rng) -> bool {
    if state.march.timer > 0 {
        state.march.timer -= 1;
        return false;
    }
    advance(state, rng);
    state.march.timer = state.march.reset as u32;
    true
}

/// One horde step, regardless of the timer.
pub fn advance(state: &mut GameState, rng: &mut impl Rng) {
    match state.march.phase {
        Phase::Descending => state.march.phase = Phase::Lateral,
        Phase::Lateral => {
            let right_edge = state.width as f32 - 1.0;
            let mut volley = Vec::new();
            for invader in &state.horde {
                if invader.x >= right_edge {
                    state.march.heading = Heading::Left;
                    state.march.phase = Phase::Descending;
                } else if invader.x <= 0.0 {
                    state.march.heading = Heading::Right;
                    state.march.phase = Phase::Descending;
                }
                if rng.gen_range(FIRE_ROLL) == FIRE_HIT {
                    volley.push(Bullet::enemy(invader.x, invader.y + 1.0));
                }
            }
            if !volley.is_empty() {
                debug!("horde fired {} shot(s)", volley.len());
            }
            for bullet in volley {
                state.spawn_bullet(bullet);
            }
        }
    }

    let descending = state.march.phase == Phase::Descending;
    let dx = state.march.heading.dx();
    for invader in &mut state.horde {
        if descending {
            invader.y += 1.0;
        } else {
            invader.x += dx;
        }
    }

    let barrier_row = cell(state.barrier_row);
    if state.horde.iter().any(|invader| cell(invader.y) >= barrier_row) {
        finish_round(state, Mode::GameOver);
    }
}

/// Shorten the step interval after a kill, spreading the full speed range
/// over the members still alive.
pub fn accelerate(march: &mut March, remaining: usize) {
    if remaining == 0 {
        return;
    }
    let range = MARCH_RESET_START - MARCH_RESET_FLOOR;
    march.reset = (march.reset - range / remaining as f32).max(MARCH_RESET_FLOOR);
}
