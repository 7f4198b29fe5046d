//! Dot Dodge entry point
//!
//! Terminal driver: collects input, steps the simulation at a fixed rate,
//! and presents each frame through the terminal surface.

use std::collections::HashMap;
use std::io::{self, BufWriter, Write, stdout};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    ExecutableCommand, cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use dot_dodge::Game;
use dot_dodge::persistence::JsonFileStore;
use dot_dodge::render::{draw_frame, terminal::TerminalSurface};
use dot_dodge::sim::TickInput;

const FRAME: Duration = Duration::from_millis(16); // ~60 FPS

/// A direction key counts as held if its last press/repeat event arrived
/// within this many frames. Covers terminals that never emit key-release
/// events: OS key repeat refreshes the window before it expires.
const HOLD_WINDOW: u64 = 4;

fn is_held(last_seen: &HashMap<KeyCode, u64>, key: KeyCode, frame: u64) -> bool {
    last_seen
        .get(&key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("session seed: {seed}");

    let store = JsonFileStore::new(JsonFileStore::default_path());
    let mut game = Game::new(seed, store);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let result = run(&mut game, &mut out);

    out.execute(cursor::Show)?;
    out.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

/// Fixed-rate frame loop: one simulation step and one draw pass per frame
fn run<W: Write>(game: &mut Game<JsonFileStore>, out: &mut W) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut surface = TerminalSurface::new(cols, rows);
    let mut last_seen: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let deadline = Instant::now() + FRAME;
        frame += 1;

        let mut input = TickInput::default();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Left | KeyCode::Char('a') => {
                        last_seen.insert(KeyCode::Left, frame);
                    }
                    KeyCode::Right | KeyCode::Char('d') => {
                        last_seen.insert(KeyCode::Right, frame);
                    }
                    KeyCode::Char(' ') => input.dash = true,
                    KeyCode::Char('p') => input.pause = true,
                    KeyCode::Char('r') => input.restart = true,
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    _ => {}
                },
                Event::Resize(c, r) => surface = TerminalSurface::new(c, r),
                _ => {}
            }
        }
        input.left = is_held(&last_seen, KeyCode::Left, frame);
        input.right = is_held(&last_seen, KeyCode::Right, frame);

        game.step(&input);
        draw_frame(game.state(), game.leaderboard(), &mut surface);
        surface.present(out)?;

        if let Some(wait) = deadline.checked_duration_since(Instant::now()) {
            std::thread::sleep(wait);
        }
    }
}
