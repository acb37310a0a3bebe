//! PIN-gated visibility control for private notes.
//!
//! # Responsibility
//! - Hold the locked/unlocked session state for the private view.
//! - Run the 4-digit attempt-then-reset entry state machine.
//!
//! # Invariants
//! - Partial entry (1-3 digits) never triggers a transition.
//! - A full wrong entry resets the buffer and stays locked.
//! - `Unlocked` lasts for the session; only constructing a fresh gate
//!   relocks.
//! - This is a visibility control, not a security boundary; stored note
//!   content is not encrypted.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Required secret length in digits.
pub const PIN_LENGTH: usize = 4;

/// Validated 4-digit vault secret.
///
/// Supplied by configuration; the gate itself carries no built-in secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultPin([u8; PIN_LENGTH]);

impl VaultPin {
    /// Parses a secret from its textual configuration form.
    ///
    /// # Errors
    /// - [`VaultPinError::WrongLength`] unless exactly four characters.
    /// - [`VaultPinError::NonDigit`] on any non-ASCII-digit character.
    pub fn parse(value: &str) -> Result<Self, VaultPinError> {
        let chars: Vec<char> = value.chars().collect();
        if chars.len() != PIN_LENGTH {
            return Err(VaultPinError::WrongLength(chars.len()));
        }

        let mut digits = [0u8; PIN_LENGTH];
        for (index, ch) in chars.iter().enumerate() {
            let digit = ch
                .to_digit(10)
                .ok_or(VaultPinError::NonDigit(*ch))? as u8;
            digits[index] = digit;
        }
        Ok(Self(digits))
    }

    fn matches(&self, buffer: &[u8]) -> bool {
        self.0.as_slice() == buffer
    }
}

/// Rejected vault secret configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultPinError {
    WrongLength(usize),
    NonDigit(char),
}

impl Display for VaultPinError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "vault pin must be exactly {PIN_LENGTH} digits, got {len}")
            }
            Self::NonDigit(ch) => write!(f, "vault pin contains a non-digit character `{ch}`"),
        }
    }
}

impl Error for VaultPinError {}

/// Result of feeding one digit into the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutcome {
    /// Fewer than four digits buffered; no transition.
    Pending,
    /// Fourth digit matched the secret; the gate is now unlocked.
    Unlocked,
    /// Fourth digit completed a wrong entry; buffer reset, still locked.
    Rejected,
}

/// Session-scoped PIN entry state machine.
#[derive(Debug)]
pub struct VaultGate {
    secret: VaultPin,
    buffer: Vec<u8>,
    unlocked: bool,
}

impl VaultGate {
    /// Creates a locked gate with an empty entry buffer.
    pub fn new(secret: VaultPin) -> Self {
        Self {
            secret,
            buffer: Vec::with_capacity(PIN_LENGTH),
            unlocked: false,
        }
    }

    /// Feeds one keypad digit (0-9) into the entry buffer.
    ///
    /// Values above 9 are ignored, as is any input once unlocked. The
    /// comparison runs exactly when the buffer reaches four digits.
    pub fn press_digit(&mut self, digit: u8) -> PinOutcome {
        if self.unlocked || digit > 9 {
            return PinOutcome::Pending;
        }

        self.buffer.push(digit);
        if self.buffer.len() < PIN_LENGTH {
            return PinOutcome::Pending;
        }

        let matched = self.secret.matches(&self.buffer);
        self.buffer.clear();
        if matched {
            self.unlocked = true;
            PinOutcome::Unlocked
        } else {
            PinOutcome::Rejected
        }
    }

    /// Drops the whole pending entry (the keypad's ✕ action).
    pub fn clear_entry(&mut self) {
        self.buffer.clear();
    }

    /// Drops the most recent pending digit (the keypad's ← action).
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Number of digits currently buffered. Drives the entry-dot display.
    pub fn entered_digits(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::{PinOutcome, VaultGate, VaultPin, VaultPinError};

    fn gate() -> VaultGate {
        VaultGate::new(VaultPin::parse("1234").expect("valid test pin"))
    }

    #[test]
    fn parse_rejects_bad_secrets() {
        assert_eq!(VaultPin::parse("123"), Err(VaultPinError::WrongLength(3)));
        assert_eq!(VaultPin::parse("12345"), Err(VaultPinError::WrongLength(5)));
        assert_eq!(VaultPin::parse("12a4"), Err(VaultPinError::NonDigit('a')));
        assert!(VaultPin::parse("0000").is_ok());
    }

    #[test]
    fn correct_entry_unlocks_on_fourth_digit() {
        let mut gate = gate();
        assert_eq!(gate.press_digit(1), PinOutcome::Pending);
        assert_eq!(gate.press_digit(2), PinOutcome::Pending);
        assert_eq!(gate.press_digit(3), PinOutcome::Pending);
        assert_eq!(gate.press_digit(4), PinOutcome::Unlocked);
        assert!(gate.is_unlocked());
        assert_eq!(gate.entered_digits(), 0);
    }

    #[test]
    fn wrong_entry_resets_and_stays_locked() {
        let mut gate = gate();
        for digit in [9, 9, 9] {
            assert_eq!(gate.press_digit(digit), PinOutcome::Pending);
        }
        assert_eq!(gate.press_digit(9), PinOutcome::Rejected);
        assert!(!gate.is_unlocked());
        assert_eq!(gate.entered_digits(), 0);

        // The machine is fresh for the next attempt.
        for digit in [1, 2, 3] {
            gate.press_digit(digit);
        }
        assert_eq!(gate.press_digit(4), PinOutcome::Unlocked);
    }

    #[test]
    fn backspace_and_clear_edit_the_pending_entry() {
        let mut first = gate();
        first.press_digit(1);
        first.press_digit(9);
        first.backspace();
        assert_eq!(first.entered_digits(), 1);

        first.press_digit(2);
        first.press_digit(3);
        assert_eq!(first.press_digit(4), PinOutcome::Unlocked);

        let mut second = gate();
        second.press_digit(1);
        second.clear_entry();
        assert_eq!(second.entered_digits(), 0);
    }

    #[test]
    fn input_after_unlock_is_ignored() {
        let mut gate = gate();
        for digit in [1, 2, 3, 4] {
            gate.press_digit(digit);
        }
        assert_eq!(gate.press_digit(5), PinOutcome::Pending);
        assert_eq!(gate.entered_digits(), 0);
        assert!(gate.is_unlocked());
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let mut gate = gate();
        assert_eq!(gate.press_digit(10), PinOutcome::Pending);
        assert_eq!(gate.entered_digits(), 0);
    }
}
