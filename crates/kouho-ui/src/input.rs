use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Single-line query editor fed from raw key events.
#[derive(Default)]
pub struct LineInput {
    value: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum InputResult {
    Changed,
    Unchanged,
}

impl LineInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn handle(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.push(c);
                InputResult::Changed
            }
            KeyCode::Backspace => {
                if self.value.pop().is_some() {
                    InputResult::Changed
                } else {
                    InputResult::Unchanged
                }
            }
            _ => InputResult::Unchanged,
        }
    }
}
