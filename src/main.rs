use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenv::dotenv;
use futures_util::FutureExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    panic::AssertUnwindSafe,
    sync::Arc,
    time::{Duration, Instant},
};
use cli_log::*;
use clap::Parser;

use trader_console::{render_ui, App, Cli, HttpTraderApi};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    init_cli_log!();
    info!("Starting trader console...");

    let cli = Cli::parse();

    // Gracefully handle panics and restore the terminal
    let result = AssertUnwindSafe(run_tui_app(cli)).catch_unwind().await;

    // Restore terminal state
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).ok();

    match result {
        Ok(res) => res,
        Err(panic) => {
            eprintln!("\n\nApplication panicked: {panic:?}\n\n");
            Err(anyhow::anyhow!("Application panicked"))
        }
    }
}

async fn run_tui_app(cli: Cli) -> Result<()> {
    let api = HttpTraderApi::new(&cli.api_url)?;
    info!("Submitting traders to {}", api.endpoint());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Arc::new(api), cli.lang);

    // Main loop
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal before returning
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        info!("App error: {err:?}");
    }

    res
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(trader_console::config::TICK_RATE_MS);
    let mut last_ui_update = Instant::now();
    let ui_update_rate = Duration::from_millis(trader_console::config::UI_UPDATE_RATE_MS);

    loop {
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key_input(key)? {
                    return Ok(()); // Exit requested
                }
            }
        }

        // Pick up a finished submission
        app.update();

        let force_redraw = last_ui_update.elapsed() >= ui_update_rate;
        if app.needs_redraw || force_redraw {
            terminal.draw(|f| render_ui(f, app))?;
            app.needs_redraw = false;
            if force_redraw {
                last_ui_update = Instant::now();
            }
        }

        // Let the submission task make progress between polls
        tokio::task::yield_now().await;
    }
}
