//! Bullet hit tests and their consequences.
//!
//! Each check takes a bullet and returns `true` when the bullet was consumed.
//! Searches run back-to-front over the target collection, and the matched
//! element is removed only after the search has finished.

use log::debug;

use crate::compute::finish_round;
use crate::entities::{
    cell, Bullet, BulletOwner, GameState, Mode, Player, BARRIER_CLEARED, UFO_POINTS,
};
use crate::horde;

/// Half-width of the UFO hitbox in cells.
pub const UFO_SPAN: i32 = 2;
/// Half-width of the player hitbox in cells.
pub const PLAYER_SPAN: f32 = 1.0;

/// Run every check that applies to `bullet`, in priority order
/// barrier → horde/UFO → player. At most one of them consumes it.
pub fn resolve(state: &mut GameState, bullet: &Bullet) -> bool {
    if check_barriers(state, bullet) {
        return true;
    }
    match bullet.owner {
        BulletOwner::Player => check_enemies(state, bullet),
        BulletOwner::Enemy => check_player(state, bullet),
    }
}

/// A bullet at or above a barrier's row, inside its span, chips one point of
/// strength off it. This holds for both owners, so a barrier shields its whole
/// column. At zero the barrier is removed and its cleared glyph
/// is flashed for this frame.
pub fn check_barriers(state: &mut GameState, bullet: &Bullet) -> bool {
    let col = cell(bullet.x);
    let row = cell(bullet.y);

    let hit = state
        .barriers
        .iter()
        .rposition(|barrier| row <= cell(barrier.y) && barrier.spans(col));
    let Some(idx) = hit else { return false };

    state.barriers[idx].strength -= 1;
    if state.barriers[idx].strength <= 0 {
        let wreck = state.remove_barrier(idx);
        debug!("barrier at column {} destroyed", wreck.x);
        state.flash(wreck.left(), wreck.y, BARRIER_CLEARED);
    }
    true
}

/// Player bullets only: exact cell match against a horde member, then the
/// UFO's ±2 span. The win condition is checked whether or not anything was hit.
pub fn check_enemies(state: &mut GameState, bullet: &Bullet) -> bool {
    let col = cell(bullet.x);
    let row = cell(bullet.y);

    let hit = state
        .horde
        .iter()
        .rposition(|invader| cell(invader.x) == col && cell(invader.y) == row);

    let consumed = if let Some(idx) = hit {
        let invader = state.remove_invader(idx);
        state.score += invader.kind.points();
        horde::accelerate(&mut state.march, state.horde.len());
        true
    } else if state.ufo.active
        && (col - cell(state.ufo.x)).abs() <= UFO_SPAN
        && row == cell(state.ufo.y)
    {
        state.score += UFO_POINTS;
        state.ufo.park(state.width);
        debug!("ufo shot down");
        true
    } else {
        false
    };

    if state.horde.is_empty() {
        finish_round(state, Mode::Win);
    }
    consumed
}

/// Enemy bullets only: a hit costs a life and sends the player home.
pub fn check_player(state: &mut GameState, bullet: &Bullet) -> bool {
    let col = cell(bullet.x);
    let p = &state.player;
    let in_span = col >= cell(p.x - PLAYER_SPAN) && col <= cell(p.x + PLAYER_SPAN);
    if !in_span || cell(bullet.y) != cell(p.y) {
        return false;
    }

    let lives = state.player.lives.saturating_sub(1);
    state.player = Player::home(state.width, state.height, lives);
    debug!("player hit, {} lives left", lives);
    if lives == 0 {
        finish_round(state, Mode::GameOver);
    }
    true
}
