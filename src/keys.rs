//! Mapping from typed text to calculator events.
//!
//! A line such as `12 + 7 =` or `9 sqrt` is read left to right; each key
//! character or word becomes one [`Event`], in the order typed.

use crate::engine::{Event, Operator};
use crate::error::{Error, Result};

// Checked in order, so a longer word must come before any word it starts with
const WORDS: [(&str, Event); 10] = [
    ("sqrt", Event::SquareRoot),
    ("sq", Event::Square),
    ("neg", Event::ToggleSign),
    ("ce", Event::ClearEntry),
    ("ac", Event::AllClear),
    ("bs", Event::Backspace),
    ("mc", Event::MemoryClear),
    ("mr", Event::MemoryRecall),
    ("m+", Event::MemoryAdd),
    ("m-", Event::MemorySubtract),
];

/// The event for a single key shared by every input mode.
pub fn char_event(c: char) -> Option<Event> {
    if let Some(digit) = c.to_digit(10) {
        return Some(Event::Digit(digit as u8));
    }
    if let Some(operator) = Operator::from_symbol(c) {
        return Some(Event::Operator(operator));
    }
    match c {
        '.' => Some(Event::DecimalPoint),
        '=' | '\n' | '\r' => Some(Event::Equals),
        '%' => Some(Event::Percent),
        '√' => Some(Event::SquareRoot),
        '²' => Some(Event::Square),
        _ => None,
    }
}

/// Splits `line` into events. Fails on the first token that is neither a key
/// nor a word, reporting where it starts.
pub fn parse_line(line: &str) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    let mut index = 0;

    while index < line.len() {
        let rest = &line[index..];
        let Some(c) = rest.chars().next() else {
            break;
        };
        if c.is_whitespace() {
            index += c.len_utf8();
            continue;
        }

        if let Some((name, event)) = WORDS.iter().find(|(name, _)| {
            rest.get(..name.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(name))
        }) {
            events.push(*event);
            index += name.len();
            continue;
        }

        if let Some(event) = char_event(c) {
            events.push(event);
            index += c.len_utf8();
            continue;
        }

        let token: String = rest.chars().take_while(|c| !c.is_whitespace()).collect();
        return Err(Error::UnknownToken {
            token,
            position: index,
        });
    }

    Ok(events)
}
