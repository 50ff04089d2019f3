//! Single-key mode. The terminal is put in raw mode and every key press is
//! one calculator button.

use crate::engine::Event;
use crate::error::Result;
use crate::keys::char_event;
use crate::session::{Command, Reply, Session};
use crate::view::{self, Line};
use std::io::{self, Read, Write};
use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;
use termion::{clear, cursor};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Event(Event),
    Command(Command),
}

pub fn key_action(key: Key) -> Option<Action> {
    match key {
        Key::Esc => Some(Action::Event(Event::AllClear)),
        Key::Backspace => Some(Action::Event(Event::Backspace)),
        Key::Ctrl('c') | Key::Ctrl('d') => Some(Action::Command(Command::Quit)),
        Key::Char(c) => char_action(c),
        _ => None,
    }
}

fn char_action(c: char) -> Option<Action> {
    let event = match c {
        'n' => Event::ToggleSign,
        'r' => Event::SquareRoot,
        's' => Event::Square,
        'c' => Event::ClearEntry,
        'm' => Event::MemoryRecall,
        'M' => Event::MemoryClear,
        'p' => Event::MemoryAdd,
        'P' => Event::MemorySubtract,
        'H' => Event::ClearHistory,
        'h' => return Some(Action::Command(Command::History)),
        't' => return Some(Action::Command(Command::Theme(None))),
        '?' => return Some(Action::Command(Command::Help)),
        'q' => return Some(Action::Command(Command::Quit)),
        _ => return char_event(c).map(Action::Event),
    };
    Some(Action::Event(event))
}

pub fn run(session: &mut Session) -> Result<()> {
    let mut stdout = io::stdout().into_raw_mode()?;
    run_on(io::stdin(), &mut stdout, session)
}

/// Reads keys from `input` until quit or end of input. The cursor is shown
/// again whether the loop ends normally or on an error.
fn run_on(input: impl Read, out: &mut impl Write, session: &mut Session) -> Result<()> {
    write!(out, "{}", cursor::Hide)?;
    let result = key_loop(input, out, session);
    write!(out, "{}\r\n", cursor::Show)?;
    out.flush()?;
    result
}

fn key_loop(input: impl Read, out: &mut impl Write, session: &mut Session) -> Result<()> {
    write_lines(
        out,
        &[view::message("Keypad mode, ? for keys, q to quit.", session.palette())],
    )?;
    draw(out, &session.display_line())?;

    for key in input.keys() {
        let Some(action) = key_action(key?) else {
            continue;
        };
        let reply = match action {
            Action::Event(event) => {
                session.handle(event);
                Reply::Display
            }
            Action::Command(command) => session.run_command(command),
        };
        match reply {
            Reply::Quit => break,
            Reply::Display => {}
            Reply::Output(lines) => {
                write!(out, "\r{}", clear::CurrentLine)?;
                write_lines(out, &lines)?;
            }
        }
        draw(out, &session.display_line())?;
    }
    Ok(())
}

fn draw(out: &mut impl Write, line: &Line) -> io::Result<()> {
    write!(out, "\r{}", clear::CurrentLine)?;
    for segment in line {
        write!(out, "{}", segment)?;
    }
    out.flush()
}

// Raw mode does not translate \n
fn write_lines(out: &mut impl Write, lines: &[Line]) -> io::Result<()> {
    for line in lines {
        for segment in line {
            write!(out, "{}", segment)?;
        }
        write!(out, "\r\n")?;
    }
    Ok(())
}
