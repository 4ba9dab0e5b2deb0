//! Game director: round setup, input handling and the per-tick order of
//! operations.
//!
//! The public transitions take the current `GameState` by reference and
//! return a new one; the component steps they call (`ufo`, `collision`,
//! `horde`) mutate that copy in place. Randomness only comes through the
//! injected RNG.

use log::info;
use rand::Rng;

use crate::board;
use crate::collision;
use crate::entities::{
    cell, Bullet, GameState, March, Mode, Player, Ufo, PLAYER_LIVES,
};
use crate::horde;
use crate::input::Command;
use crate::ufo;

/// Ticks the player must wait between shots.
pub const FIRE_COOLDOWN: u32 = 15;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Initial state: intro screen, empty board, high score from disk.
pub fn init_state(width: u16, height: u16, high_score: u32) -> GameState {
    let player = Player::home(width, height, PLAYER_LIVES);
    GameState {
        barrier_row: (player.y - 2.0).max(0.0),
        player,
        bullets: Vec::new(),
        barriers: Vec::new(),
        horde: Vec::new(),
        ufo: Ufo::parked(width),
        march: March::default(),
        score: 0,
        high_score,
        mode: Mode::Intro,
        fire_cooldown: 0,
        flashes: Vec::new(),
        pending_save: None,
        round_in_progress: false,
        running: true,
        frame: 0,
        width,
        height,
    }
}

/// Intro → Playing: rebuild the board from scratch. Score and lives carry
/// over only when the previous round was abandoned mid-play.
pub fn start_round(state: &mut GameState) {
    if !state.round_in_progress {
        state.score = 0;
        state.player.lives = PLAYER_LIVES;
    }
    state.player = Player::home(state.width, state.height, state.player.lives);

    let layout = board::layout(state.width, state.player.y);
    state.barriers = layout.barriers;
    state.horde = layout.horde;
    state.barrier_row = layout.barrier_row;

    state.bullets.clear();
    state.flashes.clear();
    state.march = March::default();
    state.ufo = Ufo::parked(state.width);
    state.fire_cooldown = 0;
    state.pending_save = None;
    state.round_in_progress = true;
    state.mode = Mode::Playing;

    info!(
        "round started: {} barriers, {} invaders, {} lives",
        state.barriers.len(),
        state.horde.len(),
        state.player.lives
    );
}

/// Playing → GameOver / Win. Only the first outcome of a round sticks; it
/// queues the high score for saving exactly once.
pub fn finish_round(state: &mut GameState, outcome: Mode) {
    if state.mode != Mode::Playing {
        return;
    }
    state.mode = outcome;
    state.round_in_progress = false;
    state.high_score = state.high_score.max(state.score);
    state.pending_save = Some(state.high_score);
    info!("round over ({:?}) with score {}", outcome, state.score);
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.mode == Mode::Playing && next.player.x - 1.0 > 0.0 {
        next.player.x -= 1.0;
    }
    next
}

pub fn move_player_right(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.mode == Mode::Playing && next.player.x + 1.0 < state.width as f32 {
        next.player.x += 1.0;
    }
    next
}

/// Fire from just above the ship, if the cooldown has run out.
pub fn player_shoot(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.mode == Mode::Playing && next.fire_cooldown == 0 {
        next.spawn_bullet(Bullet::player(next.player.x, next.player.y - 1.0));
        next.fire_cooldown = FIRE_COOLDOWN;
    }
    next
}

/// Apply one command to the state.
pub fn apply_command(state: &GameState, command: Command) -> GameState {
    match command {
        Command::MoveLeft => move_player_left(state),
        Command::MoveRight => move_player_right(state),
        Command::Fire => player_shoot(state),
        Command::Quit => GameState {
            running: false,
            ..state.clone()
        },
        Command::Cancel => {
            let mut next = state.clone();
            if next.mode == Mode::Intro {
                next.running = false;
            } else {
                info!("back to intro from {:?}", next.mode);
                next.mode = Mode::Intro;
            }
            next
        }
        Command::Confirm => {
            let mut next = state.clone();
            if next.mode == Mode::Intro {
                start_round(&mut next);
            }
            next
        }
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Move every bullet, drop the ones that left the board, and resolve hits for
/// the rest. Consumed bullets are not written back.
pub fn step_bullets(state: &mut GameState) {
    let height = state.height as i32;
    let bullets = std::mem::take(&mut state.bullets);
    let mut survivors = Vec::with_capacity(bullets.len());

    for mut bullet in bullets {
        bullet.y += bullet.owner.speed();
        let row = cell(bullet.y);
        if row <= 0 || row >= height {
            continue;
        }
        if !collision::resolve(state, &bullet) {
            survivors.push(bullet);
        }
    }

    state.bullets = survivors;
}

/// Advance the simulation by one frame, then apply at most one input.
///
/// Order: UFO spawn roll, UFO step, bullets (movement and collisions), horde,
/// fire cooldown. Intro and finished rounds skip everything but the roll and
/// the input. Once a round is over the UFO and the bullets stop as well, not
/// only the horde and the player, so the score is fixed from that tick on.
pub fn tick(state: &GameState, input: Option<Command>, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.frame += 1;
    next.flashes.clear();

    ufo::roll_spawn(&mut next, rng);

    if next.mode == Mode::Playing {
        ufo::step(&mut next);
        step_bullets(&mut next);
        if next.mode == Mode::Playing {
            horde::step(&mut next, rng);
        }
        next.fire_cooldown = next.fire_cooldown.saturating_sub(1);
    }

    match input {
        Some(command) => apply_command(&next, command),
        None => next,
    }
}
