mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    style, terminal, ExecutableCommand, QueueableCommand,
};
use log::{info, warn};
use rand::rngs::ThreadRng;
use rand::thread_rng;

use flappy_block::config::GameConfig;
use flappy_block::error::GameResult;
use flappy_block::game::{Game, Input, TickOutcome};

use display::{TerminalSurface, Viewport};

const DEFAULT_CONFIG: &str = "flappy.toml";

// ── Logging ───────────────────────────────────────────────────────────────────

/// Logging goes to the file named by `FLAPPY_LOG`, never to the terminal the
/// game is drawn on.  Without it, log records are discarded.
fn init_logging() -> GameResult<()> {
    let Some(path) = std::env::var_os("FLAPPY_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)?;
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
    Ok(())
}

fn config_path() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG))
}

// ── Input ─────────────────────────────────────────────────────────────────────

enum Action {
    Quit,
    Play(Input),
    Ignore,
}

/// Space or a mouse press on the playfield flaps; R / Enter restarts once the
/// game is over.
fn classify(ev: &Event, game_over: bool, viewport: &Viewport) -> Action {
    match ev {
        Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char(' ') => Action::Play(Input::Flap),
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter if game_over => {
                Action::Play(Input::Reset)
            }
            _ => Action::Ignore,
        },
        Event::Mouse(MouseEvent { kind: MouseEventKind::Down(_), column, row, .. })
            if viewport.contains(*column, *row) =>
        {
            Action::Play(Input::Flap)
        }
        _ => Action::Ignore,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drives `game` at the configured frame rate until the player quits.
///
/// Events gathered since the previous frame are applied in arrival order
/// before the tick, so input never lands in the middle of an update.  Once a
/// tick reports game over, ticking stops and the last frame stays on screen
/// with the overlay until a restart.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game<ThreadRng>,
    rx: &mpsc::Receiver<Event>,
) -> GameResult<()> {
    let frame_time = Duration::from_millis(game.config().frame_ms);
    let mut pending: Vec<Input> = Vec::new();

    loop {
        let frame_start = Instant::now();
        let (width, height) = terminal::size()?;
        let viewport = Viewport::fit(width, height, game.config());

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match classify(&ev, game.is_game_over(), &viewport) {
                Action::Quit => return Ok(()),
                Action::Play(input) => pending.push(input),
                Action::Ignore => {}
            }
        }
        for input in pending.drain(..) {
            game.apply(input);
        }

        // ── Tick ──────────────────────────────────────────────────────────────
        if !game.is_game_over() {
            out.queue(terminal::Clear(terminal::ClearType::All))?;
            let outcome = game.tick(&mut TerminalSurface::new(out, viewport))?;
            display::draw_hud(out, game.score())?;
            display::draw_controls_hint(out, height)?;
            if let TickOutcome::GameOver { score } = outcome {
                display::draw_game_over(out, score, width, height)?;
            }

            out.queue(style::ResetColor)?;
            out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
            out.flush()?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> GameResult<()> {
    init_logging()?;

    let path = config_path();
    let config = GameConfig::load_or_default(&path)?;
    info!("config loaded from {}", path.display());
    let mut game = Game::new(config, thread_rng())?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    let mouse = out.execute(EnableMouseCapture).is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                warn!("input reader stopped: {}", e);
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut game, &rx);

    // Always restore the terminal
    if mouse {
        let _ = out.execute(DisableMouseCapture);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting with score {}", game.score());
    result
}
