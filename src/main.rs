//! Terminal runtime and entry point.
//!
//! This module provides the thin integration layer between the bookgrid
//! library and the terminal. It owns the raw-mode session, the tokio
//! runtime, and the select loop joining keyboard input with worker
//! responses.
//!
//! # Architecture
//!
//! Background work runs on tokio tasks and reports over a channel:
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Foreground loop       │
//! │  ┌──────────────────┐   │
//! │  │ AppState         │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ mpsc         │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ fetch task       │   │  ← One search at startup
//! │  │ image load tasks │   │  ← One per cover URL
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Runtime Lifecycle
//!
//! 1. **Startup**: Parse config, initialize tracing, create `AppState`
//! 2. **Fetch**: Advance the generation, spawn the single search task
//! 3. **Loop**: Select over keyboard events and worker responses
//! 4. **Render**: Clear and redraw whenever the handler asks for it
//! 5. **Teardown**: Abort in-flight tasks, restore the terminal
//!
//! # Event Mapping
//!
//! Terminal key events are translated to library events:
//!
//! - `j`/`Down` → `Event::KeyDown`
//! - `k`/`Up` → `Event::KeyUp`
//! - `Enter`/`Space` → `Event::ToggleSelected`
//! - `q`/`Esc` → `Event::Quit`

use std::io::{stdout, Write};

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use bookgrid::api::BooksClient;
use bookgrid::observability::init_tracing;
use bookgrid::worker::{spawn_image_loads, spawn_search, WorkerResponse};
use bookgrid::{handle_event, initialize, ui, Action, Config, Event};

fn main() -> std::io::Result<()> {
    let config = Config::from_env();
    init_tracing(&config);

    let runtime = tokio::runtime::Runtime::new()?;

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;

    let result = runtime.block_on(run(&config));

    execute!(stdout(), cursor::Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}

/// The foreground event loop.
///
/// Spawns the startup fetch, then selects over keyboard input and worker
/// responses until a quit action arrives. Every in-flight task handle is
/// retained so teardown can abort work that no longer has a consumer.
async fn run(config: &Config) -> std::io::Result<()> {
    let mut state = initialize(config);
    let (tx, mut rx) = mpsc::unbounded_channel::<WorkerResponse>();

    let mut handles: Vec<JoinHandle<()>> = Vec::new();

    let generation = state.next_generation();
    handles.push(spawn_search(
        BooksClient::default(),
        state.query.clone(),
        config.max_results,
        generation,
        tx.clone(),
    ));

    let image_http = reqwest::Client::new();
    let mut term_events = EventStream::new();

    draw(&state)?;

    loop {
        let event = tokio::select! {
            term_event = term_events.next() => {
                match term_event {
                    Some(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        match map_key(key.code) {
                            Some(event) => event,
                            None => continue,
                        }
                    }
                    Some(Ok(TermEvent::Resize(_, _))) => {
                        draw(&state)?;
                        continue;
                    }
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event stream error");
                        continue;
                    }
                    None => break,
                }
            }
            response = rx.recv() => {
                match response {
                    Some(response) => Event::WorkerResponse(response),
                    None => break,
                }
            }
        };

        let (should_render, actions) = match handle_event(&mut state, &event) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "event handling failed");
                continue;
            }
        };

        let mut quit = false;
        for action in actions {
            match action {
                Action::Quit => quit = true,
                Action::LoadImages { requests } => {
                    handles.extend(spawn_image_loads(
                        image_http.clone(),
                        requests,
                        state.fetch_generation,
                        tx.clone(),
                    ));
                }
            }
        }
        if quit {
            break;
        }

        if should_render {
            draw(&state)?;
        }
    }

    for handle in &handles {
        handle.abort();
    }

    Ok(())
}

/// Clears the screen and renders the current state.
fn draw(state: &bookgrid::AppState) -> std::io::Result<()> {
    let (cols, rows) = size()?;
    execute!(stdout(), Clear(ClearType::All))?;
    ui::render(state, rows as usize, cols as usize);
    stdout().flush()
}

/// Maps a pressed key to a library event, if it is bound.
fn map_key(code: KeyCode) -> Option<Event> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(Event::KeyDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Event::KeyUp),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Event::ToggleSelected),
        KeyCode::Char('q') | KeyCode::Esc => Some(Event::Quit),
        _ => None,
    }
}
