//! Terminal front-end for the `termo_rs` engine.
//!
//! Owns everything the engine deliberately does not: key handling, tile
//! rendering, reveal timing, and message display.

mod messages;
mod ui;

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use termo_rs::{GameConfig, GameError, GameSession, GameStatus};

#[derive(Parser)]
#[command(name = "termo", about = "A word-guessing game played in the terminal", version)]
struct Cli {
    /// Hidden word to guess
    #[arg(short, long, default_value = "VINHO")]
    target: String,

    /// Number of attempts before the game is lost
    #[arg(short, long, default_value_t = 6)]
    attempts: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::new(&cli.target, cli.attempts)?;
    let mut session = GameSession::new(config);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let outcome = run(&mut session, &mut stdout);
    execute!(stdout, LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;
    outcome
}

fn run(session: &mut GameSession, out: &mut impl io::Write) -> Result<()> {
    let mut message = String::new();
    ui::draw(out, session, &message, None)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => break,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Enter if session.status().is_terminal() => {
                session.reset();
                message.clear();
                ui::draw(out, session, &message, None)?;
            }
            KeyCode::Enter => match session.submit() {
                Ok(submission) => {
                    message = match submission.status {
                        GameStatus::Won => messages::WIN.to_string(),
                        GameStatus::Lost => {
                            messages::loss(submission.answer.as_deref().unwrap_or_default())
                        }
                        GameStatus::InProgress => String::new(),
                    };
                    ui::reveal(out, session, &message)?;
                }
                Err(GameError::IncompleteGuess { .. }) => {
                    message = messages::INCOMPLETE.to_string();
                    ui::draw(out, session, &message, None)?;
                }
                Err(_) => {}
            },
            KeyCode::Backspace => {
                if session.delete_letter().is_ok() {
                    message.clear();
                    ui::draw(out, session, &message, None)?;
                }
            }
            KeyCode::Char(c) => {
                // Non-letters are discarded without comment, like the
                // physical-keyboard filter on the original board.
                if session.push_letter(c).is_ok() {
                    message.clear();
                    ui::draw(out, session, &message, None)?;
                }
            }
            _ => {}
        }
    }

    Ok(())
}
