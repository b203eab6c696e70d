//! Prompt State
//!
//! Transient state for the "select first N rows" prompt: a visibility flag
//! plus the raw count input. Hidden -> Visible on user request, back to
//! Hidden on cancel or on a successful confirm.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct PromptState {
    visible: bool,
    input: String,
}

impl PromptState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Raw input buffer as typed by the user
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Show the prompt (column-title affordance)
    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Hide the prompt and discard the candidate count
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.input.clear();
    }

    /// Parse the input buffer as a non-negative row count. Non-numeric or
    /// negative input is rejected; the caller keeps the prompt open in
    /// that case rather than surfacing a hard error.
    pub fn parse_count(&self) -> Result<usize> {
        let trimmed = self.input.trim();
        let value: i64 = trimmed.parse().map_err(|_| Error::Invalid {
            message: format!("not a number: {trimmed:?}"),
        })?;
        if value < 0 {
            return Err(Error::Invalid {
                message: format!("row count must be non-negative, got {value}"),
            });
        }
        usize::try_from(value).map_err(|_| Error::Invalid {
            message: format!("row count too large: {value}"),
        })
    }
}
