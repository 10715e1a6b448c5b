//! The form state machine.
//!
//! One submission cycle moves Idle -> Validating -> (Error | Pending) ->
//! Success -> Idle. Validation is synchronous; Pending covers the window while
//! a scheduled generation task is in flight. All observable state lives in
//! [`FormState`] as plain display text, so the machine is fully testable
//! without a terminal. Scheduling and cancellation of the delayed task belong
//! to the host (the TUI layer); the machine only records that it is pending
//! and ignores completions that arrive when it is not.

use crate::core::token::GeneratedToken;
use crate::core::validate;

/// Placeholder shown in the token display before any generation and after Clear.
pub const TOKEN_PLACEHOLDER: &str = "Your generated token will appear here.";

/// Status-bar notices for each phase of the cycle.
pub const STATUS_READY: &str = "Ready.";
/// Status after a Clear action.
pub const STATUS_CLEARED: &str = "Cleared";
/// Status while a generation is in flight.
pub const STATUS_GENERATING: &str = "Generating token...";
/// Status after a validation failure.
pub const STATUS_ERROR: &str = "Error: Invalid input";
/// Status after a completed generation.
pub const STATUS_SUCCESS: &str = "Success!";

/// Which input box has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// The meter number text field
    #[default]
    MeterNo,
    /// The amount numeric field
    Amount,
}

impl Field {
    /// The other field - Tab and BackTab both flip between the two.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::MeterNo => Self::Amount,
            Self::Amount => Self::MeterNo,
        }
    }
}

/// Color category of the message area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageTone {
    /// Informational, default color
    #[default]
    Neutral,
    /// A completed generation
    Success,
    /// A validation failure
    Error,
}

/// Submission-cycle phase. Error is not a resting state - a failed validation
/// reports and returns to Idle immediately, so only these two persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Awaiting user action
    #[default]
    Idle,
    /// A generation task is scheduled and has not completed
    Pending,
}

/// All observable widget state: raw field text, token display, message area,
/// and status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Raw meter-number field text
    pub meter_no: String,
    /// Raw amount field text (kept as entered, parsed only on submit)
    pub amount: String,
    /// Which field receives keystrokes
    pub focus: Field,
    /// Token display region text
    pub token_display: String,
    /// Message area text
    pub message: String,
    /// Message area color category
    pub message_tone: MessageTone,
    /// Status bar text
    pub status: String,
    /// Current submission-cycle phase
    pub phase: Phase,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Initial state: empty fields, placeholder token display, ready status.
    #[must_use]
    pub fn new() -> Self {
        Self {
            meter_no: String::new(),
            amount: String::new(),
            focus: Field::default(),
            token_display: TOKEN_PLACEHOLDER.to_string(),
            message: String::new(),
            message_tone: MessageTone::Neutral,
            status: STATUS_READY.to_string(),
            phase: Phase::Idle,
        }
    }

    /// Moves focus to the other input field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Appends a character to the focused field. The amount field only accepts
    /// characters that can appear in a number; the meter field is free text.
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            Field::MeterNo => {
                if !c.is_control() {
                    self.meter_no.push(c);
                }
            }
            Field::Amount => {
                if c.is_ascii_digit() || c == '.' || c == '-' {
                    self.amount.push(c);
                }
            }
        }
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.focus {
            Field::MeterNo => {
                self.meter_no.pop();
            }
            Field::Amount => {
                self.amount.pop();
            }
        }
    }

    /// Submit intent: validates the current field text.
    ///
    /// On failure the fixed corrective notice and error status are shown, the
    /// fields keep their entered values, the token display is untouched, and
    /// `None` is returned. On success the machine enters Pending (message
    /// cleared, in-progress status) and returns the trimmed meter number for
    /// the host to schedule a generation with.
    pub fn submit(&mut self) -> Option<String> {
        match validate::submission(&self.meter_no, &self.amount) {
            Ok((meter, amount)) => {
                tracing::info!("Input validated: meter '{}', amount {}", meter, amount);
                self.message.clear();
                self.message_tone = MessageTone::Neutral;
                self.status = STATUS_GENERATING.to_string();
                self.phase = Phase::Pending;
                Some(meter)
            }
            Err(e) => {
                tracing::warn!("Validation failed: {}", e);
                self.message = validate::INVALID_INPUT_NOTICE.to_string();
                self.message_tone = MessageTone::Error;
                self.status = STATUS_ERROR.to_string();
                self.phase = Phase::Idle;
                None
            }
        }
    }

    /// Applies a completed generation. Completions are only honored while
    /// Pending; a stale one that raced a Clear is dropped on the floor.
    pub fn complete(&mut self, token: &GeneratedToken) {
        if self.phase != Phase::Pending {
            tracing::debug!("Dropping stale completion for meter '{}'", token.meter_no);
            return;
        }
        self.token_display = token.text.clone();
        self.message = format!("Token for {} successfully created.", token.meter_no);
        self.message_tone = MessageTone::Success;
        self.status = STATUS_SUCCESS.to_string();
        self.phase = Phase::Idle;
    }

    /// Clear action: resets both fields, restores the token placeholder,
    /// empties the message, and reports a cleared status. Also leaves Pending,
    /// so any completion that still arrives is ignored; the host is expected
    /// to abort the scheduled task as well.
    pub fn clear(&mut self) {
        self.meter_no.clear();
        self.amount.clear();
        self.token_display = TOKEN_PLACEHOLDER.to_string();
        self.message.clear();
        self.message_tone = MessageTone::Neutral;
        self.status = STATUS_CLEARED.to_string();
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::token::compose_token;
    use crate::core::validate::INVALID_INPUT_NOTICE;

    fn filled(meter: &str, amount: &str) -> FormState {
        let mut form = FormState::new();
        form.meter_no = meter.to_string();
        form.amount = amount.to_string();
        form
    }

    fn completion_for(meter: &str) -> GeneratedToken {
        GeneratedToken {
            meter_no: meter.to_string(),
            text: compose_token(meter),
        }
    }

    #[test]
    fn test_initial_state() {
        let form = FormState::new();
        assert_eq!(form.token_display, TOKEN_PLACEHOLDER);
        assert_eq!(form.status, STATUS_READY);
        assert!(form.message.is_empty());
        assert_eq!(form.phase, Phase::Idle);
    }

    #[test]
    fn test_empty_meter_number_is_rejected() {
        let mut form = filled("", "25.5");
        assert!(form.submit().is_none());

        assert_eq!(form.message, INVALID_INPUT_NOTICE);
        assert_eq!(form.message_tone, MessageTone::Error);
        assert_eq!(form.status, STATUS_ERROR);
        // Token display is never updated on a failed submission
        assert_eq!(form.token_display, TOKEN_PLACEHOLDER);
        // Fields keep their entered values for correction
        assert_eq!(form.amount, "25.5");
    }

    #[test]
    fn test_zero_and_negative_amounts_are_rejected() {
        for bad in ["0", "-5"] {
            let mut form = filled("MTR-1", bad);
            assert!(form.submit().is_none(), "amount {bad:?} must be rejected");
            assert_eq!(form.status, STATUS_ERROR);
            assert_eq!(form.phase, Phase::Idle);
        }
    }

    #[test]
    fn test_valid_submission_enters_pending() {
        let mut form = filled("MTR-1", "25.5");
        let meter = form.submit().unwrap();

        assert_eq!(meter, "MTR-1");
        assert_eq!(form.phase, Phase::Pending);
        assert_eq!(form.status, STATUS_GENERATING);
        assert!(form.message.is_empty());
        // Controls stay live during Pending; the display is untouched until completion
        assert_eq!(form.token_display, TOKEN_PLACEHOLDER);
    }

    #[test]
    fn test_completion_shows_token_and_success_message() {
        let mut form = filled("MTR-1", "25.5");
        form.submit().unwrap();
        form.complete(&completion_for("MTR-1"));

        assert!(form.token_display.starts_with("MTR-1-"));
        assert_eq!(form.message, "Token for MTR-1 successfully created.");
        assert_eq!(form.message_tone, MessageTone::Success);
        assert_eq!(form.status, STATUS_SUCCESS);
        assert_eq!(form.phase, Phase::Idle);
    }

    #[test]
    fn test_stale_completion_after_clear_is_ignored() {
        let mut form = filled("MTR-1", "25.5");
        form.submit().unwrap();
        form.clear();

        // The completion raced the clear and arrives late
        form.complete(&completion_for("MTR-1"));

        assert_eq!(form.token_display, TOKEN_PLACEHOLDER);
        assert!(form.message.is_empty());
        assert_eq!(form.status, STATUS_CLEARED);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = filled("MTR-1", "25.5");
        form.submit().unwrap();
        form.complete(&completion_for("MTR-1"));

        form.clear();
        assert!(form.meter_no.is_empty());
        assert!(form.amount.is_empty());
        assert_eq!(form.token_display, TOKEN_PLACEHOLDER);
        assert!(form.message.is_empty());
        assert_eq!(form.status, STATUS_CLEARED);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut form = filled("MTR-1", "25.5");
        form.clear();
        let once = form.clone();
        form.clear();
        assert_eq!(form, once, "clearing twice equals clearing once");
    }

    #[test]
    fn test_focus_and_editing() {
        let mut form = FormState::new();
        for c in "MTR-1".chars() {
            form.input_char(c);
        }
        form.focus_next();
        for c in "2x5.5".chars() {
            form.input_char(c);
        }

        assert_eq!(form.meter_no, "MTR-1");
        // The amount field silently drops non-numeric characters
        assert_eq!(form.amount, "25.5");

        form.backspace();
        assert_eq!(form.amount, "25.");
        form.focus_next();
        form.backspace();
        assert_eq!(form.meter_no, "MTR-");
    }
}
