//! # termsweeper
//!
//! Minesweeper played on a box-drawing board in the terminal.
//!
//! The game rules live in `termsweeper-core`; this binary only owns the terminal. It
//! follows a strict setup-run-teardown pattern so the terminal is restored even when the
//! game loop fails, and reads one key at a time, applying each to the game before the
//! next is read.

mod cli;
mod input;
mod render;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor, event,
    event::Event,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use termsweeper_core::Game;

use crate::{cli::Args, input::Action};

fn main() -> Result<()> {
    let args = Args::parse();
    cli::init_logging(&args)?;

    let config = args.game_config().context("Invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "Starting {}x{} game with {} bombs, seed {}",
        config.size.rows,
        config.size.cols,
        config.bombs,
        seed
    );

    let mut game = Game::new(&config, seed);

    let mut stdout = setup_terminal()?;
    let res = run(&mut stdout, &mut game);
    restore_terminal(&mut stdout);
    res.context("Game loop failed")?;

    if game.is_finished() {
        render::print_final(&mut stdout, &game.snapshot()).context("Failed to print board")?;
    }
    Ok(())
}

/// Enables raw mode and switches to the alternate screen with the cursor hidden.
fn setup_terminal() -> Result<Stdout> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)
        .context("Failed to enter alternate screen")?;
    Ok(stdout)
}

/// Best-effort reversal of [`setup_terminal`].
fn restore_terminal(stdout: &mut Stdout) {
    disable_raw_mode().ok();
    execute!(stdout, LeaveAlternateScreen, cursor::Show).ok();
}

/// Draws the board, then applies key presses until the game ends or the player quits.
fn run(stdout: &mut Stdout, game: &mut Game) -> Result<()> {
    render::draw(stdout, &game.snapshot()).context("Failed to draw board")?;

    while !game.is_finished() {
        let redraw = match event::read().context("Failed to read terminal event")? {
            Event::Key(key) => match input::map_key(key) {
                Some(Action::Quit) => {
                    log::info!("Quit requested");
                    return Ok(());
                }
                Some(Action::Play(command)) => game.apply(command).has_update(),
                None => false,
            },
            Event::Resize(..) => true,
            _ => false,
        };

        if redraw {
            render::draw(stdout, &game.snapshot()).context("Failed to draw board")?;
        }
    }

    log::info!("Game over: {:?}", game.status());
    Ok(())
}
