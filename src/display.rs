//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a pen over the output writer and an immutable view
//! of the game state. No game logic is performed; this module only translates
//! state into cursor-addressed writes.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use shell_invaders::entities::{
    cell, Barrier, Bullet, GameState, Mode, PLAYER_GLYPH, UFO_GLYPH,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::Green;
const C_BULLET: Color = Color::Yellow;
const C_UFO: Color = Color::Red;
const C_HORDE: Color = Color::White;
const C_BARRIER_STRONG: Color = Color::Green;
const C_BARRIER_WORN: Color = Color::Yellow;
const C_BARRIER_WEAK: Color = Color::Red;
const C_FLASH: Color = Color::Red;
const C_HUD: Color = Color::White;
const C_GAME_OVER: Color = Color::Yellow;
const C_WIN: Color = Color::Green;

const INTRO_TITLE: &str = "Welcome to Shell Invaders!";
const INTRO_LINES: &[(i32, &str)] = &[
    (-4, INTRO_TITLE),
    (-2, "Controls:"),
    (-1, "    A/Left     -   Move left"),
    (0, "    D/Right    -   Move right"),
    (1, "    W/Space    -   Shoot"),
    (2, "    ESC        -   Quit/Return to menu"),
    (4, "Press ENTER to begin!"),
];

/// Writes text at a cell, wrapping it in a colour on/off pair when the
/// terminal supports colour.
struct Pen<'a, W: Write> {
    out: &'a mut W,
    colors: bool,
}

impl<W: Write> Pen<'_, W> {
    fn text(&mut self, col: f32, row: f32, text: &str, color: Color) -> std::io::Result<()> {
        let col = col.floor().max(0.0) as u16;
        let row = row.floor().max(0.0) as u16;
        self.out.queue(cursor::MoveTo(col, row))?;
        if self.colors {
            self.out.queue(style::SetForegroundColor(color))?;
            self.out.queue(Print(text))?;
            self.out.queue(style::ResetColor)?;
        } else {
            self.out.queue(Print(text))?;
        }
        Ok(())
    }

    /// Centre `text` horizontally on `row`.
    fn centred(&mut self, width: u16, row: f32, text: &str, color: Color) -> std::io::Result<()> {
        let col = (width / 2).saturating_sub(text.chars().count() as u16 / 2);
        self.text(col as f32, row, text, color)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, colors: bool) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen { out: &mut *out, colors };
    match state.mode {
        Mode::Intro => draw_intro(&mut pen, state)?,
        Mode::Playing => {
            draw_board(&mut pen, state)?;
            pen.text(state.player.x - 1.0, state.player.y, PLAYER_GLYPH, C_PLAYER)?;
            draw_hud(&mut pen, state)?;
        }
        Mode::GameOver => {
            pen.centred(state.width, (state.height / 2) as f32, "Game Over!", C_GAME_OVER)?;
            draw_hud(&mut pen, state)?;
        }
        Mode::Win => {
            pen.centred(state.width, (state.height / 2) as f32, "You Win!", C_WIN)?;
            draw_hud(&mut pen, state)?;
        }
    }

    // Park the cursor in a harmless spot and flush
    out.queue(cursor::MoveTo(0, state.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn draw_intro<W: Write>(pen: &mut Pen<W>, state: &GameState) -> std::io::Result<()> {
    let mid_col = (state.width / 2) as i32 - INTRO_TITLE.len() as i32 / 2;
    let mid_row = (state.height / 2) as i32;
    for (offset, line) in INTRO_LINES {
        pen.text(mid_col as f32, (mid_row + offset) as f32, line, C_HUD)?;
    }
    Ok(())
}

fn draw_board<W: Write>(pen: &mut Pen<W>, state: &GameState) -> std::io::Result<()> {
    if state.ufo.active {
        pen.text(state.ufo.x - 2.0, state.ufo.y, UFO_GLYPH, C_UFO)?;
    }
    for bullet in &state.bullets {
        draw_bullet(pen, bullet)?;
    }
    for barrier in &state.barriers {
        draw_barrier(pen, barrier)?;
    }
    for flash in &state.flashes {
        pen.text(flash.x, flash.y, &flash.text, C_FLASH)?;
    }
    for invader in &state.horde {
        pen.text(invader.x, invader.y, invader.kind.glyph(), C_HORDE)?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_bullet<W: Write>(pen: &mut Pen<W>, bullet: &Bullet) -> std::io::Result<()> {
    pen.text(
        cell(bullet.x) as f32,
        cell(bullet.y) as f32,
        bullet.owner.glyph(),
        C_BULLET,
    )
}

fn draw_barrier<W: Write>(pen: &mut Pen<W>, barrier: &Barrier) -> std::io::Result<()> {
    let color = match barrier.strength {
        7.. => C_BARRIER_STRONG,
        4..=6 => C_BARRIER_WORN,
        _ => C_BARRIER_WEAK,
    };
    pen.text(barrier.left(), barrier.y, &barrier.label(), color)
}

// ── HUD (last row) ────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(pen: &mut Pen<W>, state: &GameState) -> std::io::Result<()> {
    let hud = format!(
        "Score: {}    Hi-Score: {}    Lives: {}",
        state.score, state.high_score, state.player.lives
    );
    pen.centred(state.width, state.height.saturating_sub(1) as f32, &hud, C_HUD)
}
