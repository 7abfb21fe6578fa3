//! Board and keyboard rendering.

use std::{io, io::Write, thread, time::Duration};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use termo_rs::{GameSession, KeyboardHints, LetterStatus};

use crate::messages;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

const REVEAL_DELAY: Duration = Duration::from_millis(200);

/// Redraws the whole screen from the session state.
///
/// `revealed` limits how many tiles of the latest scored row show their
/// status; the rest render as plain filled tiles. `None` shows everything.
pub fn draw(
    out: &mut impl Write,
    session: &GameSession,
    message: &str,
    revealed: Option<usize>,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(out, "T E R M O\r\n\r\n")?;

    let word_length = session.config().word_length();

    for (row, result) in session.history().iter().enumerate() {
        let shown = match revealed {
            Some(k) if row + 1 == session.history().len() => k,
            _ => word_length,
        };
        for (i, (letter, &status)) in result
            .guess
            .chars()
            .zip(result.statuses.iter())
            .enumerate()
        {
            let status = (i < shown).then_some(status);
            write!(out, "{} ", tile(letter, status))?;
        }
        write!(out, "\r\n")?;
    }

    if !session.status().is_terminal() {
        let entry = session.entry();
        for letter in entry.chars() {
            write!(out, "{} ", tile(letter, None))?;
        }
        for _ in entry.len()..word_length {
            write!(out, "{} ", " · ".dimmed())?;
        }
        write!(out, "\r\n")?;
    }

    let used = session.history().len() + usize::from(!session.status().is_terminal());
    for _ in used..session.config().max_attempts() {
        for _ in 0..word_length {
            write!(out, "{} ", " · ".dimmed())?;
        }
        write!(out, "\r\n")?;
    }

    write!(out, "\r\n")?;
    draw_keyboard(out, session.keyboard())?;

    if !message.is_empty() {
        write!(out, "\r\n{message}\r\n")?;
        if session.status().is_terminal() {
            write!(out, "{}\r\n", messages::RESTART.dimmed())?;
        }
    }

    out.flush()
}

/// Redraws the latest scored row one tile at a time.
///
/// The engine has no notion of delay; this is purely display cadence,
/// iterating the ordered statuses the session returned.
pub fn reveal(out: &mut impl Write, session: &GameSession, message: &str) -> io::Result<()> {
    let tiles = session
        .history()
        .last()
        .map_or(0, |result| result.statuses.len());

    for shown in 0..=tiles {
        let last = shown == tiles;
        draw(out, session, if last { message } else { "" }, Some(shown))?;
        if !last {
            thread::sleep(REVEAL_DELAY);
        }
    }

    Ok(())
}

fn draw_keyboard(out: &mut impl Write, hints: &KeyboardHints) -> io::Result<()> {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        write!(out, "{:indent$}", "")?;
        for letter in row.chars() {
            write!(out, "{} ", key(letter, hints.get(letter)))?;
        }
        write!(out, "\r\n")?;
    }
    Ok(())
}

fn tile(letter: char, status: Option<LetterStatus>) -> String {
    let text = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().to_string(),
        Some(LetterStatus::Present) => text.black().on_yellow().to_string(),
        Some(LetterStatus::Absent) => text.white().on_bright_black().to_string(),
        None => text.bold().to_string(),
    }
}

fn key(letter: char, status: Option<LetterStatus>) -> String {
    match status {
        Some(LetterStatus::Correct) => letter.black().on_green().to_string(),
        Some(LetterStatus::Present) => letter.black().on_yellow().to_string(),
        Some(LetterStatus::Absent) => letter.dimmed().to_string(),
        None => letter.to_string(),
    }
}
