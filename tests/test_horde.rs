use shell_invaders::compute::init_state;
use shell_invaders::entities::*;
use shell_invaders::horde::*;

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> GameState {
    let mut s = init_state(80, 24, 0);
    s.mode = Mode::Playing;
    s.round_in_progress = true;
    s
}

/// Always draws the bottom of the range: never hits the fire value.
fn quiet_rng() -> StepRng {
    StepRng::new(0, 0)
}

fn trooper(x: f32, y: f32) -> Invader {
    Invader { x, y, kind: InvaderKind::Trooper }
}

// ── timer ─────────────────────────────────────────────────────────────────────

#[test]
fn steps_once_every_reset_plus_one_ticks() {
    let mut s = make_state();
    s.horde.push(trooper(40.0, 5.0));
    s.march.reset = 3.0;
    let mut rng = quiet_rng();

    let moved: Vec<bool> = (0..12).map(|_| step(&mut s, &mut rng)).collect();
    let ticks: Vec<usize> = moved
        .iter()
        .enumerate()
        .filter(|(_, m)| **m)
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(ticks, vec![1, 5, 9]);
    assert_eq!(s.horde[0].x, 37.0);
}

#[test]
fn timer_reloads_with_truncated_reset() {
    let mut s = make_state();
    s.march.reset = 29.14;
    assert!(step(&mut s, &mut quiet_rng()));
    assert_eq!(s.march.timer, 29);
}

// ── movement ──────────────────────────────────────────────────────────────────

#[test]
fn lateral_step_moves_everyone_one_column() {
    let mut s = make_state();
    s.horde.push(trooper(40.0, 5.0));
    s.horde.push(trooper(42.0, 7.0));
    advance(&mut s, &mut quiet_rng());
    assert_eq!(s.horde[0].x, 39.0);
    assert_eq!(s.horde[1].x, 41.0);
    assert_eq!(s.horde[0].y, 5.0);
}

#[test]
fn right_edge_drops_and_turns() {
    let mut s = make_state();
    s.march.heading = Heading::Right;
    s.horde.push(trooper(79.0, 5.0));
    s.horde.push(trooper(60.0, 5.0));
    let mut rng = quiet_rng();

    advance(&mut s, &mut rng);
    assert_eq!(s.march.heading, Heading::Left);
    assert_eq!(s.march.phase, Phase::Descending);
    assert_eq!((s.horde[0].x, s.horde[0].y), (79.0, 6.0));
    assert_eq!((s.horde[1].x, s.horde[1].y), (60.0, 6.0));

    advance(&mut s, &mut rng);
    assert_eq!(s.march.phase, Phase::Lateral);
    assert_eq!((s.horde[0].x, s.horde[0].y), (78.0, 6.0));
}

#[test]
fn left_edge_drops_and_turns() {
    let mut s = make_state();
    s.horde.push(trooper(0.0, 5.0));
    let mut rng = quiet_rng();

    advance(&mut s, &mut rng);
    assert_eq!(s.march.heading, Heading::Right);
    assert_eq!(s.horde[0].y, 6.0);

    advance(&mut s, &mut rng);
    assert_eq!(s.horde[0].x, 1.0);
}

#[test]
fn reaching_barrier_row_is_game_over() {
    let mut s = make_state();
    s.score = 55;
    s.march.heading = Heading::Right;
    s.horde.push(trooper(79.0, 18.0));
    let mut rng = quiet_rng();

    advance(&mut s, &mut rng);
    assert_eq!(s.horde[0].y, 19.0);
    assert_eq!(s.mode, Mode::GameOver);
    assert_eq!(s.pending_save, Some(55));

    // Sticks: a second step doesn't re-queue or change the outcome.
    s.pending_save = None;
    advance(&mut s, &mut rng);
    assert_eq!(s.mode, Mode::GameOver);
    assert_eq!(s.pending_save, None);
}

// ── fire ──────────────────────────────────────────────────────────────────────

#[test]
fn quiet_rng_never_fires() {
    let mut s = make_state();
    for i in 0..20 {
        s.horde.push(trooper(10.0 + i as f32 * 2.0, 5.0));
    }
    let mut rng = quiet_rng();
    for _ in 0..10 {
        advance(&mut s, &mut rng);
    }
    assert!(s.bullets.is_empty());
}

#[test]
fn horde_fires_below_the_shooter() {
    let mut s = make_state();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        s.horde = (0..50).map(|i| trooper(10.0 + i as f32, 5.0)).collect();
        s.march.phase = Phase::Lateral;
        advance(&mut s, &mut rng);
    }
    // 10,000 rolls at 1 in 1,000.
    assert!(!s.bullets.is_empty());
    assert!(s.bullets.len() < 40);
    for b in &s.bullets {
        assert_eq!(b.owner, BulletOwner::Enemy);
        assert_eq!(b.y, 6.0);
    }
}

// ── acceleration ──────────────────────────────────────────────────────────────

#[test]
fn first_kill_of_thirty() {
    let mut m = March::default();
    accelerate(&mut m, 29);
    assert!((m.reset - (30.0 - 25.0 / 29.0)).abs() < 1e-4);
}

#[test]
fn reset_never_below_floor() {
    let mut m = March::default();
    m.reset = 5.5;
    accelerate(&mut m, 1);
    assert_eq!(m.reset, MARCH_RESET_FLOOR);
}

#[test]
fn reset_shrinks_with_every_kill() {
    let mut m = March::default();
    let mut last = m.reset;
    for remaining in (1..150).rev() {
        accelerate(&mut m, remaining);
        assert!(m.reset <= last);
        assert!(m.reset >= MARCH_RESET_FLOOR);
        last = m.reset;
    }
    assert_eq!(m.reset, MARCH_RESET_FLOOR);
}

#[test]
fn no_survivors_leaves_reset_alone() {
    let mut m = March::default();
    accelerate(&mut m, 0);
    assert_eq!(m.reset, MARCH_RESET_START);
}
