//! All game entity types, plus the entity-store operations on `GameState`.
//!
//! Positions are real-valued so sub-cell speeds work (enemy bullets fall
//! 0.2 rows per tick); every comparison goes through [`cell`] first.

pub const PLAYER_GLYPH: &str = "<^>";
pub const PLAYER_LIVES: u32 = 3;

pub const BARRIER_STRENGTH: i32 = 9;
/// Rendered width of `[###9###]`.
pub const BARRIER_WIDTH: i32 = 9;
pub const BARRIER_CLEARED: &str = "[!!!0!!!]";

pub const UFO_GLYPH: &str = "<~~~>";
pub const UFO_POINTS: u32 = 200;
pub const UFO_ROW: f32 = 1.0;

/// Horde movement timer reload, in ticks, at the start of a round.
pub const MARCH_RESET_START: f32 = 30.0;
/// The reload never drops below this.
pub const MARCH_RESET_FLOOR: f32 = 5.0;

/// Floor a real coordinate to the terminal cell it occupies.
pub fn cell(v: f32) -> i32 {
    v.floor() as i32
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Intro,
    Playing,
    GameOver,
    Win,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

impl BulletOwner {
    /// Rows travelled per tick (negative = upward).
    pub fn speed(&self) -> f32 {
        match self {
            BulletOwner::Player => -1.0,
            BulletOwner::Enemy => 0.2,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            BulletOwner::Player => "*",
            BulletOwner::Enemy => ".",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub owner: BulletOwner,
}

impl Bullet {
    pub fn player(x: f32, y: f32) -> Self {
        Bullet { x, y, owner: BulletOwner::Player }
    }

    pub fn enemy(x: f32, y: f32) -> Self {
        Bullet { x, y, owner: BulletOwner::Enemy }
    }
}

// ── Barriers ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Barrier {
    /// Centre column.
    pub x: f32,
    pub y: f32,
    pub strength: i32,
}

impl Barrier {
    pub fn new(x: f32, y: f32) -> Self {
        Barrier { x, y, strength: BARRIER_STRENGTH }
    }

    /// Cells either side of the centre that the barrier covers.
    pub fn half_span() -> i32 {
        (BARRIER_WIDTH - 1) / 2
    }

    pub fn spans(&self, col: i32) -> bool {
        (col - cell(self.x)).abs() <= Self::half_span()
    }

    /// Leftmost column of the rendered label.
    pub fn left(&self) -> f32 {
        self.x - Self::half_span() as f32
    }

    pub fn label(&self) -> String {
        format!("[###{}###]", self.strength.max(0))
    }
}

// ── Player & horde ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    /// Centre column; the ship covers x-1..=x+1.
    pub x: f32,
    pub y: f32,
    pub lives: u32,
}

impl Player {
    /// The spawn point: horizontal centre, 87.5% of the way down.
    pub fn home(width: u16, height: u16, lives: u32) -> Self {
        Player {
            x: (width / 2) as f32 - 1.0,
            y: (height as f32 * 0.875).floor(),
            lives,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvaderKind {
    /// Bottom band, `@`.
    Trooper,
    /// Middle band, `$`.
    Raider,
    /// Top band, `&`.
    Captain,
}

impl InvaderKind {
    pub fn points(&self) -> u32 {
        match self {
            InvaderKind::Trooper => 5,
            InvaderKind::Raider => 10,
            InvaderKind::Captain => 15,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            InvaderKind::Trooper => "@",
            InvaderKind::Raider => "$",
            InvaderKind::Captain => "&",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Invader {
    pub x: f32,
    pub y: f32,
    pub kind: InvaderKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    pub fn dx(&self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Lateral,
    Descending,
}

/// Shared movement state of the whole horde.
#[derive(Clone, Debug, PartialEq)]
pub struct March {
    pub heading: Heading,
    pub phase: Phase,
    /// Ticks left before the next step.
    pub timer: u32,
    /// Value the timer is reloaded with after a step (truncated).
    pub reset: f32,
}

impl Default for March {
    fn default() -> Self {
        March {
            heading: Heading::Left,
            phase: Phase::Lateral,
            timer: 0,
            reset: MARCH_RESET_START,
        }
    }
}

// ── UFO ───────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ufo {
    /// Centre column; the saucer covers x-2..=x+2.
    pub x: f32,
    pub y: f32,
    pub active: bool,
    pub move_timer: u32,
}

impl Ufo {
    pub fn parked(width: u16) -> Self {
        Ufo {
            x: width as f32 - 2.0,
            y: UFO_ROW,
            active: false,
            move_timer: 0,
        }
    }

    /// Back to the spawn side, inactive. The move timer is left alone.
    pub fn park(&mut self, width: u16) {
        self.x = width as f32 - 2.0;
        self.y = UFO_ROW;
        self.active = false;
    }
}

/// Text drawn for a single frame only, e.g. a barrier's cleared glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so `compute::tick` can hand back a new
/// copy without touching the caller's.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub barriers: Vec<Barrier>,
    pub horde: Vec<Invader>,
    pub ufo: Ufo,
    pub march: March,
    /// Row of the barrier line; the horde reaching it ends the round.
    pub barrier_row: f32,
    pub score: u32,
    /// Best score seen so far, loaded from disk at startup.
    pub high_score: u32,
    pub mode: Mode,
    pub fire_cooldown: u32,
    pub flashes: Vec<Flash>,
    /// Set once when a round ends; the caller takes it and writes the file.
    pub pending_save: Option<u32>,
    /// A round was started and has not been won or lost yet.
    pub round_in_progress: bool,
    pub running: bool,
    pub frame: u64,
    pub width: u16,
    pub height: u16,
}

impl GameState {
    pub fn spawn_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    pub fn remove_barrier(&mut self, idx: usize) -> Barrier {
        self.barriers.remove(idx)
    }

    pub fn remove_invader(&mut self, idx: usize) -> Invader {
        self.horde.remove(idx)
    }

    pub fn flash(&mut self, x: f32, y: f32, text: &str) {
        self.flashes.push(Flash { x, y, text: text.to_string() });
    }
}
