//! Painting calculator state as coloured terminal segments.

use crate::engine::Calculator;
use crate::format::format_number;
use crate::theme::Palette;
use colored::{ColoredString, Colorize};

// How `format_number` writes values that are not finite
const NON_FINITE: [&str; 3] = ["Infinity", "-Infinity", "NaN"];

/// One output line, built from differently coloured pieces.
pub type Line = Vec<ColoredString>;

/// `M 12 + 7`: memory flag, pending operation, then the display.
pub fn display_line(calc: &Calculator, palette: &Palette) -> Line {
    let state = calc.snapshot();
    let mut line = Vec::new();

    if state.memory != 0.0 {
        line.push(palette.paint("M ", palette.memory));
    } else {
        line.push("  ".normal());
    }
    if let Some(pending) = state.pending {
        line.push(palette.paint(&format!("{} ", pending), palette.pending));
    }

    let colour = if NON_FINITE.iter().any(|&text| text == state.display) {
        palette.non_finite
    } else {
        palette.value
    };
    line.push(palette.paint(state.display, colour));
    line
}

/// History newest first, optionally stamped with the time of each entry.
pub fn history_lines(calc: &Calculator, palette: &Palette, show_timestamps: bool) -> Vec<Line> {
    if calc.history().len() == 0 {
        return vec![message("No calculations yet.", palette)];
    }
    calc.history()
        .map(|entry| {
            let mut line = Vec::new();
            if show_timestamps {
                let stamp = entry.recorded_at().format("%H:%M:%S ").to_string();
                line.push(palette.paint(&stamp, palette.timestamp));
            }
            line.push(palette.paint(entry.text(), palette.history));
            line
        })
        .collect()
}

pub fn memory_line(calc: &Calculator, palette: &Palette) -> Line {
    vec![
        palette.paint("Memory: ", palette.message),
        palette.paint(&format_number(calc.memory()), palette.value),
    ]
}

pub fn message(text: &str, palette: &Palette) -> Line {
    vec![palette.paint(text, palette.message)]
}

pub fn error(text: &str, palette: &Palette) -> Line {
    vec![palette.paint(text, palette.error)]
}

/// Marks column `column` under a `> ` prompt.
pub fn carat(column: usize, palette: &Palette) -> Line {
    vec![
        " ".repeat(column + 2).normal(),
        palette.paint("^", palette.carat),
    ]
}

/// The text of a line without colour codes.
pub fn plain(line: &Line) -> String {
    let mut result = String::new();
    for segment in line {
        result.push_str(segment);
    }
    result.trim_end().to_owned()
}

pub fn print(lines: &[Line]) {
    for line in lines {
        for segment in line {
            print!("{}", segment);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Event, Operator};
    use crate::theme::Theme;

    fn calc_after(events: &[Event]) -> Calculator {
        let mut calc = Calculator::new();
        for &event in events {
            calc.handle(event);
        }
        calc
    }

    #[test]
    fn test_display_line() {
        let palette = Theme::Dark.palette();
        let tests = vec![
            (vec![], "0"),
            (vec![Event::Digit(4), Event::Digit(2)], "42"),
            (
                vec![
                    Event::Digit(1),
                    Event::Digit(2),
                    Event::Operator(Operator::Add),
                    Event::Digit(7),
                ],
                "12 + 7",
            ),
            (vec![Event::Digit(3), Event::MemoryAdd], "M 3"),
        ];
        for (events, expected) in tests {
            let calc = calc_after(&events);
            assert_eq!(plain(&display_line(&calc, palette)).trim_start(), expected);
        }
    }

    #[test]
    fn test_non_finite_display_uses_its_own_colour() {
        let palette = Theme::Light.palette();
        let calc = calc_after(&[
            Event::Digit(1),
            Event::Operator(Operator::Divide),
            Event::Digit(0),
            Event::Equals,
        ]);
        let line = display_line(&calc, palette);
        let value = line.last().unwrap();
        assert_eq!(&**value, "Infinity");
        assert_eq!(*value, palette.paint("Infinity", palette.non_finite));
    }

    #[test]
    fn test_pending_operator_uses_pending_colour() {
        let palette = Theme::Light.palette();
        let calc = calc_after(&[Event::Digit(1), Event::Digit(2), Event::Operator(Operator::Add)]);
        let line = display_line(&calc, palette);
        assert_eq!(line[1], palette.paint("12 + ", palette.pending));
        assert_eq!(line[2], palette.paint("12", palette.value));
    }

    #[test]
    fn test_partial_entry_uses_value_colour() {
        let palette = Theme::Dark.palette();
        let calc = calc_after(&[Event::Digit(5), Event::ToggleSign, Event::Backspace]);
        let line = display_line(&calc, palette);
        let value = line.last().unwrap();
        assert_eq!(&**value, "-");
        assert_eq!(*value, palette.paint("-", palette.value));
    }

    #[test]
    fn test_history_lines() {
        let palette = Theme::Dark.palette();
        let calc = calc_after(&[Event::Digit(9), Event::SquareRoot, Event::Square]);

        let lines = history_lines(&calc, palette, false);
        let texts: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(texts, vec!["(3)² = 9", "√(9) = 3"]);

        let stamped = history_lines(&calc, palette, true);
        assert_eq!(stamped[0].len(), 2);
        assert!(plain(&stamped[0]).ends_with("(3)² = 9"));
    }

    #[test]
    fn test_empty_history() {
        let lines = history_lines(&Calculator::new(), Theme::Dark.palette(), true);
        assert_eq!(lines.len(), 1);
        assert_eq!(plain(&lines[0]), "No calculations yet.");
    }

    #[test]
    fn test_carat_column() {
        assert_eq!(plain(&carat(3, Theme::Dark.palette())), "     ^");
    }
}
