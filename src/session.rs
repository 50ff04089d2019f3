//! One interactive calculator session: the engine plus the front-end state
//! around it (theme, history layout, log level).

use crate::config::Config;
use crate::engine::{Calculator, Event};
use crate::error::{Error, Result};
use crate::keys;
use crate::logging::LogControl;
use crate::theme::{Palette, Theme};
use crate::view::{self, Line};
use std::str::FromStr;
use tracing::info;

/// Front-end commands, typed as `:name` in line mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    History,
    ClearHistory,
    Memory,
    /// Switch to the given theme, or toggle when none is given.
    Theme(Option<Theme>),
    Debug,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let name = words.next().unwrap_or_default();
        let command = match name.to_ascii_lowercase().as_str() {
            "history" | "h" => Command::History,
            "clear-history" => Command::ClearHistory,
            "memory" | "m" => Command::Memory,
            "theme" | "t" => Command::Theme(words.next().map(str::parse::<Theme>).transpose()?),
            "debug" => Command::Debug,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Err(Error::UnknownCommand(s.trim().to_owned())),
        };
        Ok(command)
    }
}

/// What the front end should show after an input.
#[derive(Debug, PartialEq)]
pub enum Reply {
    /// Repaint the display line.
    Display,
    /// Print these lines, then repaint the display line.
    Output(Vec<Line>),
    Quit,
}

const HELP: &[&str] = &[
    "Keys:     0-9 .  + - * /  = (or Enter)  %  √ ²",
    "Words:    sqrt sq neg ce ac bs mc mr m+ m-",
    "Commands: :history :clear-history :memory :theme [light|dark] :debug :help :quit",
    "Keypad:   Esc all clear, Backspace, n sign, r root, s square, c clear entry,",
    "          m recall, M clear memory, p add to memory, P subtract from memory,",
    "          h history, H clear history, t theme, q quit",
];

pub struct Session {
    calc: Calculator,
    theme: Theme,
    show_timestamps: bool,
    log: Option<LogControl>,
}

impl Session {
    pub fn new(config: &Config, log: Option<LogControl>) -> Self {
        Self {
            calc: Calculator::new(),
            theme: config.theme,
            show_timestamps: config.show_timestamps,
            log,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn handle(&mut self, event: Event) {
        self.calc.handle(event);
    }

    /// Runs one typed line: a `:command`, or keys fed to the calculator.
    /// A line with a bad token changes nothing.
    pub fn execute(&mut self, line: &str) -> Result<Reply> {
        if let Some(command) = line.trim_start().strip_prefix(':') {
            let command = command.parse()?;
            return Ok(self.run_command(command));
        }
        for event in keys::parse_line(line)? {
            self.calc.handle(event);
        }
        Ok(Reply::Display)
    }

    pub fn run_command(&mut self, command: Command) -> Reply {
        let palette = self.palette();
        match command {
            Command::History => Reply::Output(view::history_lines(
                &self.calc,
                palette,
                self.show_timestamps,
            )),
            Command::ClearHistory => {
                self.calc.clear_history();
                Reply::Output(vec![view::message("History cleared.", palette)])
            }
            Command::Memory => Reply::Output(vec![view::memory_line(&self.calc, palette)]),
            Command::Theme(theme) => {
                self.theme = theme.unwrap_or(self.theme.toggled());
                info!(theme = %self.theme, "Theme changed");
                let text = format!("Theme set to {}.", self.theme);
                Reply::Output(vec![view::message(&text, self.palette())])
            }
            Command::Debug => {
                let text = match self.log.as_mut().map(LogControl::toggle) {
                    Some(true) => "Debug enabled",
                    Some(false) => "Debug disabled",
                    None => "Debug logging unavailable",
                };
                Reply::Output(vec![view::message(text, palette)])
            }
            Command::Help => Reply::Output(
                HELP.iter()
                    .map(|text| view::message(text, palette))
                    .collect(),
            ),
            Command::Quit => Reply::Quit,
        }
    }

    pub fn display_line(&self) -> Line {
        view::display_line(&self.calc, self.palette())
    }

    /// Lines for a failed input, with a carat under the bad token when the
    /// error points into `line`.
    pub fn error_lines(&self, line: &str, err: &Error) -> Vec<Line> {
        let palette = self.palette();
        let mut lines = Vec::new();
        if let Error::UnknownToken { position, .. } = err {
            let column = line.get(..*position).map_or(0, |head| head.chars().count());
            lines.push(view::carat(column, palette));
        }
        lines.push(view::error(&err.to_string(), palette));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::plain;

    fn session() -> Session {
        Session::new(&Config::default(), None)
    }

    fn output(reply: Reply) -> Vec<String> {
        match reply {
            Reply::Output(lines) => lines.iter().map(plain).collect(),
            other => panic!("expected output, got {:?}", other),
        }
    }

    #[test]
    fn test_lines_drive_calculator() {
        let tests = vec![
            ("5+3=", "8"),
            ("9 sqrt", "3"),
            ("4 sq", "16"),
            ("5/0=", "Infinity"),
            ("1 + 2 + 3 =", "6"),
            ("ac 7 m+ ac mr", "7"),
            ("12 bs", "1"),
        ];
        for (input, expected) in tests {
            let mut session = session();
            assert_eq!(session.execute(input).unwrap(), Reply::Display);
            assert_eq!(session.calculator().display(), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_state_carries_across_lines() {
        let mut session = session();
        session.execute("12 *").unwrap();
        session.execute("3").unwrap();
        session.execute("=").unwrap();
        assert_eq!(session.calculator().display(), "36");
        assert_eq!(output(session.execute(":history").unwrap()).len(), 1);
    }

    #[test]
    fn test_bad_line_changes_nothing() {
        let mut session = session();
        session.execute("42").unwrap();
        let err = session.execute("+ 1 oops").unwrap_err();
        assert!(matches!(err, Error::UnknownToken { position: 4, .. }));
        assert_eq!(session.calculator().display(), "42");
        assert!(session.calculator().pending().is_none());

        let lines: Vec<String> = session.error_lines("+ 1 oops", &err).iter().map(plain).collect();
        assert_eq!(lines, vec!["      ^", "Unrecognised input `oops`"]);
    }

    #[test]
    fn test_history_commands() {
        let mut session = session();
        session.show_timestamps = false;
        session.execute("5+3=").unwrap();
        assert_eq!(output(session.execute(":history").unwrap()), vec!["5 + 3 = 8"]);
        assert_eq!(output(session.execute(":clear-history").unwrap()), vec!["History cleared."]);
        assert_eq!(output(session.execute(":h").unwrap()), vec!["No calculations yet."]);
    }

    #[test]
    fn test_memory_command() {
        let mut session = session();
        session.execute("6 m+ m+").unwrap();
        assert_eq!(output(session.execute(":memory").unwrap()), vec!["Memory: 12"]);
    }

    #[test]
    fn test_theme_command() {
        let mut session = session();
        assert_eq!(session.theme(), Theme::Dark);
        assert_eq!(output(session.execute(":theme").unwrap()), vec!["Theme set to light."]);
        assert_eq!(session.theme(), Theme::Light);
        session.execute(":theme light").unwrap();
        assert_eq!(session.theme(), Theme::Light);
        assert!(matches!(session.execute(":theme sepia"), Err(Error::UnknownTheme(_))));
    }

    #[test]
    fn test_debug_without_logging() {
        let mut session = session();
        assert_eq!(output(session.execute(":debug").unwrap()), vec!["Debug logging unavailable"]);
    }

    #[test]
    fn test_unknown_and_quit_commands() {
        let mut session = session();
        assert!(matches!(
            session.execute(":frobnicate"),
            Err(Error::UnknownCommand(name)) if name == "frobnicate"
        ));
        assert_eq!(session.execute(" :quit").unwrap(), Reply::Quit);
        assert_eq!(session.execute(":q").unwrap(), Reply::Quit);
        assert_eq!(output(session.execute(":help").unwrap()).len(), HELP.len());
    }
}
