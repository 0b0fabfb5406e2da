//! Terminal Tetris runner (default binary).
//!
//! Feeds key presses and gravity ticks into the engine and redraws after every
//! update. Usage: `term-tetris [SEED]`.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use term_tetris::core::{tick_interval_ms, Game};
use term_tetris::input::{map_key, Command};
use term_tetris::term::{GameView, TerminalRenderer, Viewport};
use term_tetris::types::GameUpdate;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = parse_seed(std::env::args().nth(1))?;
    let mut game = match seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    info!("starting game (seed {:?})", seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Some(cond) = game.game_over() {
        println!("{} Score {} Lines {}", cond.description(), game.score(), game.lines());
    }
    result
}

fn parse_seed(arg: Option<String>) -> Result<Option<u64>> {
    arg.map(|s| {
        s.parse::<u64>()
            .with_context(|| format!("invalid seed {:?}", s))
    })
    .transpose()
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let tick_duration = Duration::from_millis(u64::from(tick_interval_ms(game.level())));
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Terminal auto-repeat and releases are ignored.
                if key.kind == KeyEventKind::Press {
                    match map_key(key) {
                        Some(Command::Quit) => return Ok(()),
                        Some(Command::Restart) => {
                            game.restart();
                            last_tick = Instant::now();
                        }
                        Some(command) => {
                            if let Some(update) = command.update() {
                                game.apply(update);
                            }
                        }
                        None => {}
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.apply(GameUpdate::Tick);
        }

        if let Some(event) = game.take_last_event() {
            debug!("lock event: {:?}", event);
        }
    }
}
