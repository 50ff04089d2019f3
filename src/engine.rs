//! The calculator state machine.
//!
//! [`Calculator`] owns everything a pocket calculator remembers: the display,
//! the operand being typed, a pending binary operation, the memory register
//! and the history log. It is driven by [`Event`]s (or the matching methods)
//! and evaluates strictly left to right, two operands at a time.

use crate::format::{format_number, parse_number};
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace};

/// Binary operators, in keypad order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The key that selects this operator, also used in history entries.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Plain IEEE arithmetic; dividing by zero yields an infinity or NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A left-hand operand together with the operator waiting for its right side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pending {
    pub stored: f64,
    pub operator: Operator,
}

impl fmt::Display for Pending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_number(self.stored), self.operator)
    }
}

/// Where the calculator is in entering a calculation.
///
/// A stored operand only exists together with its operator, and "waiting"
/// (the next digit starts a new number) is encoded by the variant, so the
/// combinations a set of loose flags would allow cannot be represented.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Next digit starts a number; nothing pending.
    WaitingForFirstOperand,
    /// Digits extend the display.
    EnteringOperand { pending: Option<Pending> },
    /// An operator was pressed; next digit starts its right-hand operand.
    OperatorPending { pending: Pending },
}

impl Phase {
    pub fn waiting_for_operand(self) -> bool {
        !matches!(self, Phase::EnteringOperand { .. })
    }

    pub fn pending(self) -> Option<Pending> {
        match self {
            Phase::WaitingForFirstOperand => None,
            Phase::EnteringOperand { pending } => pending,
            Phase::OperatorPending { pending } => Some(pending),
        }
    }

    fn waiting(pending: Option<Pending>) -> Self {
        match pending {
            Some(pending) => Phase::OperatorPending { pending },
            None => Phase::WaitingForFirstOperand,
        }
    }

    /// Same pending operation, but the next digit starts a new number.
    fn to_waiting(self) -> Self {
        Self::waiting(self.pending())
    }

    /// Same pending operation, but digits now extend the display.
    fn to_entering(self) -> Self {
        Phase::EnteringOperand {
            pending: self.pending(),
        }
    }
}

/// One input to the calculator, whether it came from a button or a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    AllClear,
    ClearEntry,
    Backspace,
    ToggleSign,
    Percent,
    SquareRoot,
    Square,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    ClearHistory,
}

/// A completed calculation as it appears in the history log.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    text: String,
    recorded_at: DateTime<Local>,
}

impl HistoryEntry {
    fn new(text: String) -> Self {
        Self {
            text,
            recorded_at: Local::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn recorded_at(&self) -> DateTime<Local> {
        self.recorded_at
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Read-only view of the state a front end needs to paint after an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot<'a> {
    pub display: &'a str,
    pub pending: Option<Pending>,
    pub waiting_for_operand: bool,
    pub memory: f64,
    pub history_len: usize,
}

#[derive(Clone, Debug)]
pub struct Calculator {
    display: String,
    /// Operand being typed; the right-hand side when an operation completes.
    current: Option<String>,
    phase: Phase,
    memory: f64,
    /// Newest first.
    history: VecDeque<HistoryEntry>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: "0".to_owned(),
            current: None,
            phase: Phase::WaitingForFirstOperand,
            memory: 0.0,
            history: VecDeque::new(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending(&self) -> Option<Pending> {
        self.phase.pending()
    }

    pub fn waiting_for_operand(&self) -> bool {
        self.phase.waiting_for_operand()
    }

    pub fn current_operand(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// History entries, newest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.history.iter()
    }

    /// History entry texts, newest first.
    pub fn history_texts(&self) -> Vec<&str> {
        self.history.iter().map(HistoryEntry::text).collect()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            display: &self.display,
            pending: self.pending(),
            waiting_for_operand: self.waiting_for_operand(),
            memory: self.memory,
            history_len: self.history.len(),
        }
    }

    /// Runs one transition. Every event completes before this returns.
    pub fn handle(&mut self, event: Event) {
        trace!(?event, display = %self.display, phase = ?self.phase, "Handling event");
        match event {
            Event::Digit(digit) => self.digit(digit),
            Event::DecimalPoint => self.decimal_point(),
            Event::Operator(operator) => self.operator(operator),
            Event::Equals => self.equals(),
            Event::AllClear => self.all_clear(),
            Event::ClearEntry => self.clear_entry(),
            Event::Backspace => self.backspace(),
            Event::ToggleSign => self.toggle_sign(),
            Event::Percent => self.percent(),
            Event::SquareRoot => self.square_root(),
            Event::Square => self.square(),
            Event::MemoryClear => self.memory_clear(),
            Event::MemoryRecall => self.memory_recall(),
            Event::MemoryAdd => self.memory_add(),
            Event::MemorySubtract => self.memory_subtract(),
            Event::ClearHistory => self.clear_history(),
        }
    }

    /// Types a digit. Values above 9 are ignored.
    pub fn digit(&mut self, digit: u8) {
        let Some(digit) = char::from_digit(u32::from(digit), 10) else {
            debug!(digit, "Ignoring out-of-range digit");
            return;
        };
        if self.phase.waiting_for_operand() {
            self.display = digit.to_string();
            self.phase = self.phase.to_entering();
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
        self.sync_current();
    }

    pub fn decimal_point(&mut self) {
        if self.phase.waiting_for_operand() {
            self.display = "0.".to_owned();
            self.phase = self.phase.to_entering();
        } else if !self.display.contains('.') {
            self.display.push('.');
        } else {
            return;
        }
        self.sync_current();
    }

    pub fn toggle_sign(&mut self) {
        let value = -parse_number(&self.display);
        self.show(value);
    }

    pub fn percent(&mut self) {
        let value = parse_number(&self.display) / 100.0;
        self.show(value);
    }

    pub fn square_root(&mut self) {
        let value = parse_number(&self.display).sqrt();
        let entry = format!("√({}) = {}", self.display, format_number(value));
        self.show(value);
        self.record(entry);
    }

    pub fn square(&mut self) {
        let value = parse_number(&self.display).powi(2);
        let entry = format!("({})² = {}", self.display, format_number(value));
        self.show(value);
        self.record(entry);
    }

    /// Selects the next operator. With an operation already pending, that
    /// operation is evaluated first and its result becomes the new left-hand
    /// operand, giving running left-to-right evaluation.
    pub fn operator(&mut self, operator: Operator) {
        let stored = match self.phase.pending() {
            None => parse_number(&self.display),
            Some(pending) => {
                let result = self.complete(pending);
                self.display = format_number(result);
                result
            }
        };
        debug!(stored, %operator, "Operator pending");
        self.phase = Phase::OperatorPending {
            pending: Pending { stored, operator },
        };
    }

    /// Evaluates the pending operation, if any.
    pub fn equals(&mut self) {
        let Some(pending) = self.phase.pending() else {
            trace!("Equals with nothing pending");
            return;
        };
        let result = self.complete(pending);
        self.display = format_number(result);
        self.sync_current();
        self.phase = Phase::WaitingForFirstOperand;
    }

    pub fn backspace(&mut self) {
        if self.phase.waiting_for_operand() {
            return;
        }
        if self.display.len() > 1 {
            self.display.pop();
            self.sync_current();
        } else {
            self.display = "0".to_owned();
            self.phase = self.phase.to_waiting();
        }
    }

    /// Zeroes the display, keeping any pending operation.
    pub fn clear_entry(&mut self) {
        self.display = "0".to_owned();
        self.phase = self.phase.to_waiting();
    }

    /// Back to the initial state. Memory and history are kept.
    pub fn all_clear(&mut self) {
        debug!("All clear");
        self.display = "0".to_owned();
        self.current = None;
        self.phase = Phase::WaitingForFirstOperand;
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    pub fn memory_recall(&mut self) {
        self.display = format_number(self.memory);
        self.sync_current();
        self.phase = self.phase.to_waiting();
    }

    pub fn memory_add(&mut self) {
        self.memory += parse_number(&self.display);
        debug!(memory = self.memory, "Memory updated");
    }

    pub fn memory_subtract(&mut self) {
        self.memory -= parse_number(&self.display);
        debug!(memory = self.memory, "Memory updated");
    }

    pub fn clear_history(&mut self) {
        debug!(entries = self.history.len(), "Clearing history");
        self.history.clear();
    }

    /// Applies `pending` to the current operand and logs the calculation.
    fn complete(&mut self, pending: Pending) -> f64 {
        let right = parse_number(self.current.as_deref().unwrap_or("0"));
        let result = pending.operator.apply(pending.stored, right);
        self.record(format!(
            "{} {} {} = {}",
            format_number(pending.stored),
            pending.operator,
            format_number(right),
            format_number(result)
        ));
        result
    }

    fn show(&mut self, value: f64) {
        self.display = format_number(value);
        self.sync_current();
    }

    fn sync_current(&mut self) {
        self.current = Some(self.display.clone());
    }

    fn record(&mut self, text: String) {
        debug!(entry = %text, "History entry");
        self.history.push_front(HistoryEntry::new(text));
    }
}
