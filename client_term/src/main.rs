use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use client_term::input::{disable_release_events, enable_release_events};
use client_term::{logging, ui, App, Cli, FrameClock};
use crossterm::event::{self, Event};
use game_core::{Params, Session};
use ratatui::DefaultTerminal;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_file)?;

    let config = cli.load_config()?;
    let seed = cli.seed();
    tracing::info!(seed, free_play = cli.free_play, "starting love pong");

    let session = Session::new(config, seed).context("failed to build game session")?;

    // Key releases give exact paddle control where the terminal supports them
    let supported = matches!(crossterm::terminal::supports_keyboard_enhancement(), Ok(true));

    let mut terminal = ratatui::init();
    let release_events = supported && enable_release_events(&mut stdout());

    let mut app = App::new(session, cli.free_play, release_events);
    let result = run(&mut terminal, &mut app);

    if release_events {
        disable_release_events(&mut stdout());
    }
    ratatui::restore();

    let score = serde_json::to_string(&app.session().score())?;
    tracing::info!(%score, "final score");
    result
}

/// Poll input, step, draw; once per frame at the target rate
fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    let mut clock = FrameClock::new(Params::TARGET_FPS, Instant::now());

    while !app.should_quit() {
        let frame_start = Instant::now();
        let dt = clock.tick(frame_start);

        // Input
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key, Instant::now());
            }
        }

        // Update
        app.tick(dt, Instant::now());

        // Render
        terminal.draw(|frame| ui::render(frame, app))?;

        // Frame pacing
        let remaining = clock.remaining(frame_start, Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
    Ok(())
}
