//! Terminal shim and entry point.
//!
//! This module is the thin integration layer between the statewise library
//! and the terminal: raw mode, the alternate screen, keyboard mapping, and
//! the cooperative event loop that drives both of the search pipeline's
//! timers.
//!
//! # Event loop
//!
//! The loop blocks on [`crossterm::event::poll`] with a timeout derived from
//! the application's earliest pending deadline, so debounce and simulated
//! latency fire promptly without busy-waiting:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ loop:                                        │
//! │   timeout = next_deadline - now (or idle)    │
//! │   poll(timeout) ──▶ key event │ timeout      │
//! │   map to app Event ──▶ handle_event          │
//! │   execute actions, redraw if requested       │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Store transitions, persistence, and timers all run on this single thread;
//! the only suspension points are the poll timeouts.
//!
//! # Keybindings
//!
//! Normal mode:
//! - `1` / `2`: switch to the Local / Store page (`Tab` toggles)
//! - `+` / `-`: increment / decrement the active page's counter
//! - `0`: reset the counter
//! - `t`: toggle the active page's theme
//! - `/`: focus the search box
//! - `q` / `Esc` / `Ctrl+c`: quit
//!
//! In the search box:
//! - printable keys / `Backspace`: edit the query
//! - `Esc` / `Enter`: leave the box (the query stays)

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};

use statewise::ui::{self, PaletteSet};
use statewise::{handle_event, initialize, Action, AppState, Config, Event, InputFocus, Page};

/// Poll timeout when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(500);

fn main() -> statewise::Result<()> {
    let config = Config::from_env();
    statewise::observability::init_tracing(&config);

    tracing::debug!("starting statewise");

    let mut app = initialize(&config);
    let palettes = load_palettes(&config);

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run_event_loop(&mut app, &palettes);

    // Restore the terminal even when the loop errored.
    let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    tracing::debug!("statewise exited");
    result
}

/// Loads the palette pair, falling back to the built-ins on any failure.
fn load_palettes(config: &Config) -> PaletteSet {
    config.palette_file.as_ref().map_or_else(PaletteSet::default, |path| {
        PaletteSet::from_file(path).unwrap_or_else(|e| {
            tracing::debug!(palette_file = %path, error = %e, "failed to load palette file, using built-ins");
            PaletteSet::default()
        })
    })
}

/// Runs the cooperative event loop until a `Quit` action arrives.
fn run_event_loop(app: &mut AppState, palettes: &PaletteSet) -> statewise::Result<()> {
    draw(app, palettes)?;

    loop {
        let timeout = poll_timeout(app);

        let input = if event::poll(timeout)? {
            Some(event::read()?)
        } else {
            None
        };

        let now = Instant::now();
        let app_event = match input {
            None => Some(Event::TimerElapsed),
            Some(TermEvent::Key(key)) if key.kind != KeyEventKind::Release => {
                map_key_event(app, &key)
            }
            Some(TermEvent::Resize(_, _)) => {
                draw(app, palettes)?;
                None
            }
            Some(_) => None,
        };

        let Some(app_event) = app_event else {
            continue;
        };

        match handle_event(app, &app_event, now) {
            Ok((redraw, actions)) => {
                for action in actions {
                    match action {
                        Action::Quit => return Ok(()),
                    }
                }
                if redraw {
                    draw(app, palettes)?;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
            }
        }
    }
}

/// Timeout until the next pipeline deadline, or the idle heartbeat.
fn poll_timeout(app: &AppState) -> Duration {
    app.next_deadline().map_or(IDLE_POLL, |deadline| {
        deadline.saturating_duration_since(Instant::now())
    })
}

/// Maps a terminal key event to an application event.
fn map_key_event(app: &AppState, key: &KeyEvent) -> Option<Event> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Event::Quit);
    }

    if app.focus == InputFocus::Search {
        return Some(match key.code {
            KeyCode::Esc | KeyCode::Enter => Event::LeaveSearch,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Char(c) => Event::Char(c),
            _ => return None,
        });
    }

    Some(match key.code {
        KeyCode::Char('1') => Event::SwitchPage(Page::Local),
        KeyCode::Char('2') => Event::SwitchPage(Page::Store),
        KeyCode::Tab => Event::SwitchPage(match app.page {
            Page::Local => Page::Store,
            Page::Store => Page::Local,
        }),
        KeyCode::Char('+' | '=') => Event::Increment,
        KeyCode::Char('-') => Event::Decrement,
        KeyCode::Char('0') => Event::ResetCounter,
        KeyCode::Char('t') => Event::ToggleTheme,
        KeyCode::Char('/') => Event::FocusSearch,
        KeyCode::Char('q') | KeyCode::Esc => Event::Quit,
        _ => return None,
    })
}

/// Renders one frame at the current terminal size and flushes it.
fn draw(app: &AppState, palettes: &PaletteSet) -> statewise::Result<()> {
    let (cols, rows) = terminal::size()?;
    ui::render(app, palettes, rows as usize, cols as usize);
    io::stdout().flush()?;
    Ok(())
}
