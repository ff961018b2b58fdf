//! Terminal 2048 runner (default binary).
//!
//! Full-screen mode uses crossterm for input and the framebuffer renderer from
//! `tui_2048::term`. `--plain` switches to a line-oriented mode that prints the
//! board after every command and reads one word per turn from stdin.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::config::parse_values;
use tui_2048::core::{EngineError, Session};
use tui_2048::input::{handle_key_event, parse_line, should_quit, LineCommand};
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, TICK_MS};
use tui_2048::GameConfig;

const NO_MOVE_MSG: &str = "Cannot do that move.";

/// Slide-and-merge number puzzle for the terminal.
#[derive(Parser, Debug)]
#[command(name = "tui-2048")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board height (overrides TUI_2048_ROWS).
    #[arg(long)]
    rows: Option<usize>,

    /// Board width (overrides TUI_2048_COLS).
    #[arg(long)]
    cols: Option<usize>,

    /// Comma-separated spawn values, e.g. "2,4" (overrides TUI_2048_STARTING_VALUES).
    #[arg(long, value_parser = parse_values_arg)]
    values: Option<ValueList>,

    /// Seed for a reproducible game (overrides TUI_2048_SEED).
    #[arg(long)]
    seed: Option<u64>,

    /// Write tracing output to this file (overrides TUI_2048_LOG_PATH).
    #[arg(long)]
    log_path: Option<PathBuf>,

    /// Line mode: print the board and read u/d/l/r/q from stdin.
    #[arg(long)]
    plain: bool,
}

/// A parsed `--values` list, kept as one argument rather than a repeated flag.
#[derive(Debug, Clone)]
struct ValueList(Vec<u32>);

fn parse_values_arg(s: &str) -> Result<ValueList, String> {
    parse_values(s)
        .map(ValueList)
        .ok_or_else(|| format!("invalid value list: {s}"))
}

impl Cli {
    fn apply(self, mut config: GameConfig) -> GameConfig {
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(ValueList(values)) = self.values {
            config.starting_values = values;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.log_path.is_some() {
            config.log_path = self.log_path;
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let plain = cli.plain;
    let config = cli.apply(GameConfig::from_env());
    config.validate()?;
    init_logging(&config)?;

    let mut session = match config.seed {
        Some(seed) => Session::with_seed(config.shape(), &config.starting_values, seed)?,
        None => Session::new(config.shape(), &config.starting_values)?,
    };

    if plain {
        run_plain(&mut session)?;
    } else {
        let mut term = TerminalRenderer::new();
        term.enter()?;
        let result = run(&mut term, &mut session);
        // Always try to restore terminal state.
        let _ = term.exit();
        result?;
    }

    tracing::info!(score = session.score(), moves = session.moves(), "game finished");
    println!("Game Over. Score = {}", session.score());
    Ok(())
}

/// Install a file-backed subscriber; the terminal itself is busy drawing.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let poll = Duration::from_millis(TICK_MS as u64);
    let mut status: Option<&str> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session.snapshot(), status, Viewport::new(w, h));
        term.draw(&fb)?;

        if !event::poll(poll)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    status = apply_action(session, action)?;
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

fn run_plain(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    while !session.is_over() {
        writeln!(stdout, "{}\nScore: {}", session.grid(), session.score())?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match parse_line(&line?) {
            LineCommand::Quit => break,
            LineCommand::Empty => {}
            LineCommand::Unknown(word) => writeln!(stdout, "Unknown command: {word}")?,
            LineCommand::Action(action) => {
                if let Some(msg) = apply_action(session, action)? {
                    writeln!(stdout, "{msg}")?;
                }
            }
        }
    }

    writeln!(stdout, "{}", session.grid())?;
    Ok(())
}

/// Feed one action to the session, returning a message worth showing.
fn apply_action(session: &mut Session, action: GameAction) -> Result<Option<&'static str>> {
    match action {
        GameAction::Move(direction) => match session.apply_move(direction) {
            Ok(_) => {
                if session.is_over() {
                    tracing::info!(score = session.score(), "no moves left");
                }
                Ok(None)
            }
            Err(EngineError::NoMove) => Ok(Some(NO_MOVE_MSG)),
            Err(e) => Err(e.into()),
        },
        GameAction::Restart => {
            session.restart()?;
            Ok(None)
        }
    }
}
