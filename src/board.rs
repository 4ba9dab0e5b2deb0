//! Deterministic board layout derived from the viewport.
//!
//! Barriers sit two rows above the player, evenly spaced; the horde fills the
//! space above them in rows two apart, starting at row 3, in three point tiers
//! by vertical band.

use crate::entities::{Barrier, Invader, InvaderKind, BARRIER_WIDTH};

/// Rows between the player and the barrier line.
const BARRIER_LIFT: f32 = 2.0;
const HORDE_TOP: u32 = 3;
const HORDE_ROW_GAP: u32 = 2;
const HORDE_COL_GAP: u32 = 2;
/// Rows kept clear between the lowest horde row and the barriers.
const HORDE_CLEARANCE: u32 = 5;

#[derive(Clone, Debug)]
pub struct Layout {
    pub barriers: Vec<Barrier>,
    pub horde: Vec<Invader>,
    pub barrier_row: f32,
}

impl InvaderKind {
    /// Tier for a horde row: rows 3–5 are captains, 7–9 raiders, the rest troopers.
    pub fn for_row(row: u32) -> Self {
        match row {
            3..=5 => InvaderKind::Captain,
            7..=9 => InvaderKind::Raider,
            _ => InvaderKind::Trooper,
        }
    }
}

/// Number of barriers that fit a viewport `width` columns wide (at least one).
pub fn barrier_count(width: u16) -> u32 {
    (width as u32 / (BARRIER_WIDTH as u32 - 1) / 2).max(1)
}

/// Build the barrier line and the horde for a fresh round.
pub fn layout(width: u16, player_row: f32) -> Layout {
    let w = width as u32;
    let count = barrier_count(width);
    let spacing = (w / count).max(1);
    let barrier_row = (player_row - BARRIER_LIFT).max(0.0);

    let barriers = (0..count)
        .map(|i| Barrier::new((spacing / 2 + i * spacing) as f32, barrier_row))
        .collect();

    // The horde starts at the first barrier's spacing and wraps before the last.
    let barrier_y = barrier_row as u32;
    let across = w.saturating_sub(spacing * 2) / 2;
    let down = barrier_y.saturating_sub(8);
    let right_limit = w.saturating_sub(spacing);

    let mut horde = Vec::new();
    let mut x = spacing;
    let mut y = HORDE_TOP;
    for _ in 0..across * down {
        if x > right_limit {
            x = spacing;
            y += HORDE_ROW_GAP;
        }
        if y + HORDE_CLEARANCE > barrier_y {
            break;
        }
        horde.push(Invader {
            x: x as f32,
            y: y as f32,
            kind: InvaderKind::for_row(y),
        });
        x += HORDE_COL_GAP;
    }

    Layout { barriers, horde, barrier_row }
}
