//! Interactive browse screen.
//!
//! The directory fetch is spawned when the screen mounts. The event loop
//! selects over terminal input, a redraw tick and the fetch, so none of them
//! blocks the single runtime thread. Leaving the loop drops the handle, which
//! aborts a fetch that is still in flight.

mod panels;
mod state;
mod theme;

use std::{
    io::{self, Stdout},
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use products_hr::{DirectoryLoader, Employee, FilterCriteria, LoadHandle, RetrievalResult};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::info;

use self::state::BrowseState;

const TICK_RATE: Duration = Duration::from_millis(100);

pub async fn run(loader: DirectoryLoader, criteria: FilterCriteria) -> Result<()> {
    let original_panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_panic_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;
    let mut state = BrowseState::new(criteria);
    let result = run_event_loop(&mut terminal, &mut state, loader.spawn()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!(
        visible = state.view.visible_len(),
        total = state.view.directory().len(),
        "directory browser closed"
    );
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

async fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut BrowseState,
    handle: LoadHandle,
) -> Result<()> {
    let mut pending = Some(handle);
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_RATE);

    loop {
        terminal.draw(|f| panels::render(f, state))?;

        tokio::select! {
            result = wait_pending(&mut pending) => state.view.apply_load(result),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => state.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => return Ok(()),
            },
            _ = ticker.tick() => state.tick(),
        }

        if state.should_quit {
            return Ok(());
        }
    }
}

/// Resolves once the fetch finishes, then never again.
async fn wait_pending(pending: &mut Option<LoadHandle>) -> RetrievalResult<Vec<Employee>> {
    let Some(handle) = pending.as_mut() else {
        return std::future::pending().await;
    };
    let result = handle.wait().await;
    *pending = None;
    result
}
