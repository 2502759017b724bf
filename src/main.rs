//! Terminal runtime for eventfinder.
//!
//! Owns the terminal (raw mode, alternate screen) and the main loop: it maps
//! key presses to application events, drains worker responses, dispatches
//! everything through the event handler, and repaints when the handler
//! reports a visible change. All I/O beyond the terminal itself lives on the
//! worker thread.

use crossterm::event::{self as term_event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use eventfinder::api::CatalogClient;
use eventfinder::app::modes::{InputMode, SortKey};
use eventfinder::storage::JsonStore;
use eventfinder::worker::{EventWorker, WorkerMessage, WorkerResponse};
use eventfinder::{handle_event, initialize, Action, AppState, Config, Error, Event, Result};
use std::io::stdout;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

/// Terminal poll interval; also the tick granularity for toast expiry.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() {
    if let Err(e) = run() {
        // The terminal is already restored here; plain stderr is fine.
        eprintln!("eventfinder: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::load()?;
    eventfinder::observability::init_tracing(&config);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting eventfinder");

    let client = match &config.api_key {
        Some(key) => Some(CatalogClient::new(
            &config.base_url,
            key,
            &config.country_code,
            config.page_size,
        )?),
        None => None,
    };
    let store = JsonStore::new(eventfinder::infrastructure::paths::saved_events_file())?;

    let (message_tx, message_rx) = std::sync::mpsc::channel::<WorkerMessage>();
    let (response_tx, response_rx) = std::sync::mpsc::channel::<WorkerResponse>();

    let worker = EventWorker::new(client, Box::new(store));
    let worker_handle = std::thread::spawn(move || worker.run(message_rx, response_tx));

    let mut state = initialize(&config);

    terminal::enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;

    let result = run_loop(&mut state, &message_tx, &response_rx);

    execute!(stdout(), cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    // Hanging up the channel ends the worker loop.
    drop(message_tx);
    if worker_handle.join().is_err() {
        tracing::error!("worker thread panicked");
    }

    tracing::info!("eventfinder exiting");
    result
}

/// The main event loop. Returns when a `Quit` action is executed.
fn run_loop(
    state: &mut AppState,
    message_tx: &Sender<WorkerMessage>,
    response_rx: &Receiver<WorkerResponse>,
) -> Result<()> {
    let mut dirty = true;
    if dispatch(state, &Event::Initialize, message_tx)?.1 {
        return Ok(());
    }

    loop {
        if dirty {
            let (cols, rows) = terminal::size()?;
            eventfinder::ui::render(state, rows as usize, cols as usize);
            dirty = false;
        }

        if term_event::poll(POLL_INTERVAL)? {
            match term_event::read()? {
                term_event::Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(event) = map_key_event(state, &key) {
                        let (render, quit) = dispatch(state, &event, message_tx)?;
                        dirty |= render;
                        if quit {
                            return Ok(());
                        }
                    }
                }
                term_event::Event::Resize(..) => dirty = true,
                _ => {}
            }
        }

        while let Ok(response) = response_rx.try_recv() {
            let (render, _) = dispatch(state, &Event::WorkerResponse(response), message_tx)?;
            dirty |= render;
        }

        let (render, _) = dispatch(state, &Event::Tick, message_tx)?;
        dirty |= render;
    }
}

/// Runs one event through the handler and executes the resulting actions.
///
/// Returns `(should_render, should_quit)`.
fn dispatch(
    state: &mut AppState,
    event: &Event,
    message_tx: &Sender<WorkerMessage>,
) -> Result<(bool, bool)> {
    let (render, actions) = handle_event(state, event)?;

    for action in actions {
        match action {
            Action::PostToWorker(message) => {
                message_tx
                    .send(message)
                    .map_err(|_| Error::Worker("worker thread is gone".to_string()))?;
            }
            Action::Quit => return Ok((render, true)),
        }
    }

    Ok((render, false))
}

/// Maps a terminal key event to an application event for the current mode.
///
/// Returns `None` for keys that have no meaning in the current mode; those
/// never reach the handler.
fn map_key_event(state: &AppState, key: &KeyEvent) -> Option<Event> {
    // Ctrl+C quits from any mode.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Event::Quit);
    }

    if state.overlay.is_some() {
        return match key.code {
            KeyCode::Esc => Some(Event::CloseOverlay),
            KeyCode::Char('s') => Some(Event::SaveSelected),
            KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        };
    }

    match state.input_mode {
        InputMode::Keyword | InputMode::Date => match key.code {
            KeyCode::Enter => Some(Event::SubmitInput),
            KeyCode::Esc => Some(Event::CancelInput),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Event::Char(c))
            }
            _ => None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Event::KeyDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Event::KeyUp),
            KeyCode::Tab => Some(Event::SwitchPane),
            KeyCode::Enter => Some(Event::ShowDetails),
            KeyCode::Char('s') => Some(Event::SaveSelected),
            KeyCode::Char('d') => Some(Event::RemoveSelected),
            KeyCode::Char('/') => Some(Event::KeywordMode),
            KeyCode::Char('f') => Some(Event::DateMode),
            KeyCode::Char('c') => Some(Event::CycleCategory),
            KeyCode::Char('v') => Some(Event::ToggleView),
            KeyCode::Char('r') => Some(Event::Refresh),
            KeyCode::Char('1') => Some(Event::SortBy(SortKey::Date)),
            KeyCode::Char('2') => Some(Event::SortBy(SortKey::Name)),
            KeyCode::Char('3') => Some(Event::SortBy(SortKey::Popularity)),
            _ => None,
        },
    }
}
