mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use env_logger::{Env, Target};
use log::{info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use resource_rush::config::TICKS_PER_SECOND;
use resource_rush::display_mode::DisplayMode;
use resource_rush::error::{GameError, Result};
use resource_rush::input::KeyTracker;
use resource_rush::session::GameSession;

#[derive(Parser)]
#[command(name = "resource_rush")]
#[command(about = "Two-player resource collecting arcade game for the terminal")]
struct Cli {
    /// Seed for the session RNG (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the arena sized to the whole terminal
    #[arg(long)]
    fullscreen: bool,

    /// Where log output goes; RUST_LOG controls the filter
    #[arg(long, default_value = "resource_rush.log")]
    log_file: PathBuf,
}

/// Send logs to a file: stderr would scribble over the alternate screen.
/// A log file that cannot be created leaves logging disabled rather than
/// stopping the game.
fn init_logging(path: &Path) -> Result<()> {
    let file = match File::create(path) {
        Ok(file) => file,
        Err(_) => return Ok(()),
    };
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| GameError::Logger(e.to_string()))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: key events update a `KeyTracker` with the frame each key was
/// last seen; every frame both players' intents are read from it, so both
/// players can hold keys at the same time.  One-shot keys (quit, reset,
/// display toggle) act on their press event.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut GameSession,
    mode: &mut DisplayMode,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let frame_time = Duration::from_secs(1) / TICKS_PER_SECOND;
    let mut keys = KeyTracker::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            keys.record(code, kind, frame);
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    session.reset(rng);
                }
                KeyCode::F(11) | KeyCode::Char('f') | KeyCode::Char('F') => {
                    *mode = mode.toggled();
                    let (cols, rows) = terminal::size()?;
                    let arena = mode.arena(cols, rows);
                    session.resize_arena(arena.width, arena.height);
                }
                _ => {}
            }
        }

        for happened in session.update(keys.intents(frame), rng) {
            trace!("frame {}: {:?}", session.frame, happened);
        }

        display::render(out, session, *mode)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("starting session with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        warn!("terminal has no key-release events, using hold-window expiry");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, cli.fullscreen, &mut rng, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting");
    result
}

fn run<W: Write>(
    out: &mut W,
    fullscreen: bool,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let mut mode = if fullscreen {
        DisplayMode::Fullscreen
    } else {
        DisplayMode::Windowed
    };
    let (cols, rows) = terminal::size()?;
    let mut session = GameSession::new(mode.arena(cols, rows), rng);

    game_loop(out, &mut session, &mut mode, rng, rx)?;

    info!("final score {} at level {}", session.score, session.level);
    Ok(())
}
