mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    style, terminal, ExecutableCommand,
};
use log::{error, info, warn};
use rand::thread_rng;

use shell_invaders::compute::{init_state, tick};
use shell_invaders::entities::GameState;
use shell_invaders::input::command_for;
use shell_invaders::scores::{high_score_path, load_high_score, save_high_score};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

const LOG_FILE: &str = "shell_invaders.log";

// ── Terminal setup / teardown ─────────────────────────────────────────────────

/// Puts the terminal into game mode; dropping it restores the previous
/// settings on every exit path, panics included.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        let guard = TerminalGuard;
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut out = stdout();
        out.execute(terminal::EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        out.execute(cursor::Hide)?;
        out.execute(terminal::Clear(terminal::ClearType::All))?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        let _ = out.execute(style::ResetColor);
        let _ = out.execute(cursor::Show);
        let _ = out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Log to a file in the temp directory so nothing lands on the game screen.
/// `RUST_LOG` overrides the default `info` filter.
fn init_logging() {
    let path = std::env::temp_dir().join(LOG_FILE);
    if let Ok(file) = File::create(path) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
}

/// Dedicate a thread exclusively to blocking event reads, sending key presses
/// through a channel so the game loop never has to block on I/O.
fn spawn_input_reader() -> mpsc::Receiver<KeyEvent> {
    let (tx, rx) = mpsc::channel::<KeyEvent>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if tx.send(key).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });
    rx
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_logging();

    let (width, height) = terminal::size().context("Was unable to get terminal size")?;
    if width == 0 || height == 0 {
        bail!("Was unable to get terminal size (got {}x{})", width, height);
    }

    let score_path = high_score_path();
    let high_score = load_high_score(&score_path);
    info!("starting on a {}x{} terminal, high score {}", width, height, high_score);

    let result = {
        let _guard = TerminalGuard::enter()?;
        let colors = style::available_color_count() >= 8;
        let rx = spawn_input_reader();
        let mut out = BufWriter::new(stdout());
        run(&mut out, &rx, init_state(width, height, high_score), &score_path, colors)
    };

    match &result {
        Ok(()) => info!("shut down cleanly"),
        Err(err) => error!("aborting: {:#}", err),
    }
    result
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One input event per tick, then sleep out the rest of the frame.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<KeyEvent>,
    mut state: GameState,
    score_path: &Path,
    colors: bool,
) -> anyhow::Result<()> {
    let mut rng = thread_rng();

    while state.running {
        let frame_start = Instant::now();

        let input = rx.try_recv().ok().and_then(|key| command_for(&key));
        state = tick(&state, input, &mut rng);

        if let Some(score) = state.pending_save.take() {
            match save_high_score(score_path, score) {
                Ok(()) => info!("high score {} saved to {}", score, score_path.display()),
                Err(err) => warn!("could not save high score to {}: {}", score_path.display(), err),
            }
        }

        display::render(out, &state, colors).context("An error occurred while drawing")?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
    Ok(())
}
