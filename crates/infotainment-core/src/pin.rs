//! Lock screen PIN gatekeeper
//!
//! Digits arrive one key at a time from a 12-key pad (`0`-`9`, clear,
//! submit). The entry buffer never grows past [`PIN_LENGTH`] and is emptied
//! after every submit, whatever the outcome. There is no attempt counter.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::{CoreError, Result};
use crate::{DEFAULT_PIN, PIN_LENGTH};

/// Mask character shown for every entered digit
pub const MASK_CHAR: char = '•';

/// One logical key on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Clear,
    Submit,
}

impl Key {
    /// Keypad layout, row by row, as drawn on the lock screen
    pub const LAYOUT: [Key; 12] = [
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Clear,
        Key::Digit(0),
        Key::Submit,
    ];

    /// Map a keypad label to a key
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            '0'..='9' => Ok(Key::Digit(c as u8 - b'0')),
            'C' | 'c' => Ok(Key::Clear),
            'E' | 'e' => Ok(Key::Submit),
            other => Err(CoreError::InvalidKey(other)),
        }
    }

    /// Label printed on the key
    pub fn label(&self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Clear => "C".to_string(),
            Key::Submit => "E".to_string(),
        }
    }
}

/// Progress of the current entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinPhase {
    /// Nothing entered
    Idle,
    /// Between one digit and one short of full
    Entering,
    /// Buffer full, further digits are ignored
    Ready,
}

/// Result of a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutcome {
    InProgress,
    Accepted,
    Rejected,
}

impl PinOutcome {
    /// Treat a rejection as an error for callers that propagate with `?`
    pub fn into_result(self) -> Result<Self> {
        match self {
            PinOutcome::Rejected => Err(CoreError::SecretMismatch),
            other => Ok(other),
        }
    }
}

/// Text shown above the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinPrompt {
    EnterPin,
    Masked(usize),
    Granted,
    Rejected,
}

impl fmt::Display for PinPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinPrompt::EnterPin => write!(f, "Enter your pin"),
            PinPrompt::Masked(n) => {
                for _ in 0..*n {
                    write!(f, "{}", MASK_CHAR)?;
                }
                Ok(())
            }
            PinPrompt::Granted => write!(f, "Access Granted"),
            PinPrompt::Rejected => write!(f, "{}", CoreError::SecretMismatch),
        }
    }
}

/// PIN entry state for one lock screen lifetime
pub struct PinPad {
    entered: Zeroizing<String>,
    secret: Zeroizing<String>,
    prompt: PinPrompt,
}

impl fmt::Debug for PinPad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinPad")
            .field("entered_len", &self.entered.len())
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

impl Default for PinPad {
    fn default() -> Self {
        Self {
            entered: Zeroizing::new(String::with_capacity(PIN_LENGTH)),
            secret: Zeroizing::new(DEFAULT_PIN.to_string()),
            prompt: PinPrompt::EnterPin,
        }
    }
}

impl PinPad {
    /// Create a pad guarding `secret`
    ///
    /// The secret must be 1 to [`PIN_LENGTH`] ASCII digits; a longer secret
    /// could never be entered.
    pub fn new(secret: &str) -> Result<Self> {
        validate_secret(secret)?;
        Ok(Self {
            secret: Zeroizing::new(secret.to_string()),
            ..Self::default()
        })
    }

    /// Handle any keypad key
    pub fn press(&mut self, key: Key) -> PinOutcome {
        match key {
            Key::Digit(d) => {
                self.press_digit(d);
                PinOutcome::InProgress
            }
            Key::Clear => {
                self.press_clear();
                PinOutcome::InProgress
            }
            Key::Submit => self.press_submit(),
        }
    }

    /// Append a digit unless the buffer is full
    pub fn press_digit(&mut self, digit: u8) {
        if digit > 9 {
            tracing::debug!(digit, "ignoring non-digit keypad value");
            return;
        }
        if self.entered.len() < PIN_LENGTH {
            self.entered.push(char::from(b'0' + digit));
        }
        self.refresh_prompt();
    }

    /// Drop the last digit, if any
    pub fn press_clear(&mut self) {
        self.entered.pop();
        self.refresh_prompt();
    }

    /// Compare the entry with the secret and reset the buffer
    pub fn press_submit(&mut self) -> PinOutcome {
        let matched = !self.entered.is_empty() && self.entered.as_str() == self.secret.as_str();
        self.entered.clear();

        if matched {
            tracing::info!("PIN accepted");
            self.prompt = PinPrompt::Granted;
            PinOutcome::Accepted
        } else {
            tracing::info!("PIN rejected");
            self.prompt = PinPrompt::Rejected;
            PinOutcome::Rejected
        }
    }

    /// One mask character per entered digit
    pub fn mask(&self) -> String {
        PinPrompt::Masked(self.entered.len()).to_string()
    }

    /// Number of digits entered so far
    pub fn len(&self) -> usize {
        self.entered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entered.is_empty()
    }

    pub fn phase(&self) -> PinPhase {
        match self.entered.len() {
            0 => PinPhase::Idle,
            n if n < PIN_LENGTH => PinPhase::Entering,
            _ => PinPhase::Ready,
        }
    }

    /// Current prompt text state
    pub fn prompt(&self) -> PinPrompt {
        self.prompt
    }

    fn refresh_prompt(&mut self) {
        self.prompt = if self.entered.is_empty() {
            PinPrompt::EnterPin
        } else {
            PinPrompt::Masked(self.entered.len())
        };
    }
}

fn validate_secret(secret: &str) -> Result<()> {
    if secret.is_empty() || secret.len() > PIN_LENGTH {
        return Err(CoreError::InvalidSecret(format!(
            "PIN must be between 1 and {} digits",
            PIN_LENGTH
        )));
    }
    if !secret.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::InvalidSecret(
            "PIN must contain only digits".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(pad: &mut PinPad, digits: &str) {
        for c in digits.chars() {
            pad.press(Key::from_char(c).unwrap());
        }
    }

    #[test]
    fn test_correct_pin_accepted() {
        let mut pad = PinPad::new("1234").unwrap();
        enter(&mut pad, "1234");
        assert_eq!(pad.phase(), PinPhase::Ready);
        assert_eq!(pad.press(Key::Submit), PinOutcome::Accepted);
        assert!(pad.is_empty());
        assert_eq!(pad.prompt(), PinPrompt::Granted);
    }

    #[test]
    fn test_wrong_pin_rejected_and_reset() {
        let mut pad = PinPad::new("1234").unwrap();
        enter(&mut pad, "1235");
        assert_eq!(pad.press_submit(), PinOutcome::Rejected);
        assert_eq!(pad.len(), 0);
        assert_eq!(pad.prompt().to_string(), "Wrong PIN. Try again.");
    }

    #[test]
    fn test_empty_submit_rejected() {
        let mut pad = PinPad::default();
        assert_eq!(pad.press_submit(), PinOutcome::Rejected);
        assert_eq!(pad.phase(), PinPhase::Idle);
    }

    #[test]
    fn test_digits_beyond_limit_ignored() {
        let mut pad = PinPad::default();
        enter(&mut pad, "123456");
        assert_eq!(pad.len(), PIN_LENGTH);
        assert_eq!(pad.mask(), "••••");
        // Only the first four count
        assert_eq!(pad.press_submit(), PinOutcome::Accepted);
    }

    #[test]
    fn test_clear_on_empty_is_noop() {
        let mut pad = PinPad::default();
        pad.press(Key::Clear);
        assert!(pad.is_empty());
        assert_eq!(pad.prompt(), PinPrompt::EnterPin);
    }

    #[test]
    fn test_clear_removes_last_digit() {
        let mut pad = PinPad::default();
        enter(&mut pad, "129");
        pad.press_clear();
        enter(&mut pad, "34");
        assert_eq!(pad.press_submit(), PinOutcome::Accepted);
    }

    #[test]
    fn test_phases() {
        let mut pad = PinPad::default();
        assert_eq!(pad.phase(), PinPhase::Idle);
        pad.press_digit(1);
        assert_eq!(pad.phase(), PinPhase::Entering);
        assert_eq!(pad.prompt(), PinPrompt::Masked(1));
        enter(&mut pad, "234");
        assert_eq!(pad.phase(), PinPhase::Ready);
        pad.press_clear();
        assert_eq!(pad.phase(), PinPhase::Entering);
    }

    #[test]
    fn test_secret_validation() {
        assert!(PinPad::new("").is_err());
        assert!(PinPad::new("12345").is_err());
        assert!(PinPad::new("12a4").is_err());
        assert!(PinPad::new("0000").is_ok());
        assert!(PinPad::new("42").is_ok());
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!(Key::from_char('7').unwrap(), Key::Digit(7));
        assert_eq!(Key::from_char('c').unwrap(), Key::Clear);
        assert_eq!(Key::from_char('E').unwrap(), Key::Submit);
        assert!(matches!(
            Key::from_char('x'),
            Err(CoreError::InvalidKey('x'))
        ));
    }

    #[test]
    fn test_outcome_into_result() {
        assert!(PinOutcome::Accepted.into_result().is_ok());
        assert!(matches!(
            PinOutcome::Rejected.into_result(),
            Err(CoreError::SecretMismatch)
        ));
    }

    #[test]
    fn test_debug_hides_digits() {
        let mut pad = PinPad::default();
        enter(&mut pad, "12");
        let debug = format!("{:?}", pad);
        assert!(!debug.contains("12"));
        assert!(!debug.contains("1234"));
    }
}
