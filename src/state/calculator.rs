//! Scientific calculator keypad state.

#[cfg(test)]
#[path = "calculator_test.rs"]
mod calculator_test;

use std::collections::VecDeque;

use crate::util::calc::{AngleMode, evaluate, format_result};

pub const HISTORY_LIMIT: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalculatorState {
    pub input: String,
    /// Last result or error message.
    pub display: String,
    pub mode: AngleMode,
    pub ans: f64,
    pub is_error: bool,
    /// Newest first.
    history: VecDeque<HistoryEntry>,
}

impl CalculatorState {
    #[must_use]
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    /// Append keypad text. A key pressed right after `=` starts a new
    /// expression, except operators which continue from `ans`.
    pub fn press(&mut self, key: &str) {
        if self.is_error {
            self.is_error = false;
            self.display.clear();
        }
        if self.input.is_empty() && !self.display.is_empty() && starts_with_operator(key) {
            self.input.push_str("ans");
        }
        self.input.push_str(key);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.display.clear();
        self.is_error = false;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn evaluate(&mut self) {
        let expression = self.input.trim().to_owned();
        if expression.is_empty() {
            return;
        }
        match evaluate(&expression, self.mode, self.ans) {
            Ok(value) => {
                let result = format_result(value);
                self.ans = value;
                self.display.clone_from(&result);
                self.is_error = false;
                self.input.clear();
                self.history.push_front(HistoryEntry { expression, result });
                self.history.truncate(HISTORY_LIMIT);
            }
            Err(err) => {
                self.display = err.to_string();
                self.is_error = true;
            }
        }
    }

    /// Put a past expression back into the input.
    pub fn recall(&mut self, index: usize) {
        if let Some(entry) = self.history.get(index) {
            self.input.clone_from(&entry.expression);
        }
    }
}

fn starts_with_operator(key: &str) -> bool {
    key.starts_with(['+', '-', '*', '/', '%', '^', '!', '×', '÷'])
}
