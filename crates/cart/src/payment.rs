//! Stateless checkout form validation.
//!
//! Pure functions, no state, no side effects, and no calls to any payment
//! network: "payment" succeeds purely on local format validation. Checks run
//! in a fixed order (card number, expiry, CVV) and the first failure wins,
//! so error messaging is deterministic.

use thiserror::Error;

/// The checkout form field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    /// The 16-digit card number field.
    CardNumber,
    /// The MM/YY expiry date field.
    Expiry,
    /// The 3-digit CVV field.
    Cvv,
}

/// A checkout form field failed validation.
///
/// Display strings are the user-facing inline messages.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaymentError {
    /// Card number is not exactly 16 decimal digits.
    #[error("Invalid Card Number")]
    CardNumber,
    /// Expiry is not MM/YY with MM in 01-12.
    #[error("Invalid Expiry Date (MM/YY)")]
    Expiry,
    /// CVV is not exactly 3 decimal digits.
    #[error("Invalid CVV")]
    Cvv,
}

impl PaymentError {
    /// The form field this error refers to.
    #[must_use]
    pub const fn field(&self) -> PaymentField {
        match self {
            Self::CardNumber => PaymentField::CardNumber,
            Self::Expiry => PaymentField::Expiry,
            Self::Cvv => PaymentField::Cvv,
        }
    }
}

/// Validate a card number: exactly 16 characters, all decimal digits.
///
/// # Errors
///
/// Returns [`PaymentError::CardNumber`] on any other input.
pub fn validate_card_number(s: &str) -> Result<(), PaymentError> {
    if s.len() == 16 && s.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(PaymentError::CardNumber)
    }
}

/// Validate an expiry date: `MM/YY` with `MM` in `01`-`12`.
///
/// # Errors
///
/// Returns [`PaymentError::Expiry`] on any other input.
pub fn validate_expiry(s: &str) -> Result<(), PaymentError> {
    let bytes = s.as_bytes();
    let [m1, m2, b'/', y1, y2] = bytes else {
        return Err(PaymentError::Expiry);
    };

    if !y1.is_ascii_digit() || !y2.is_ascii_digit() {
        return Err(PaymentError::Expiry);
    }

    // MM in 01-12: "0" followed by 1-9, or "1" followed by 0-2
    match (*m1, *m2) {
        (b'0', b'1'..=b'9') | (b'1', b'0'..=b'2') => Ok(()),
        _ => Err(PaymentError::Expiry),
    }
}

/// Validate a CVV: exactly 3 decimal digits.
///
/// # Errors
///
/// Returns [`PaymentError::Cvv`] on any other input.
pub fn validate_cvv(s: &str) -> Result<(), PaymentError> {
    if s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(PaymentError::Cvv)
    }
}

/// Validate a whole payment form: card number, then expiry, then CVV.
///
/// # Errors
///
/// Returns the first failing field's error; later fields are not examined.
pub fn validate_payment(card_number: &str, expiry: &str, cvv: &str) -> Result<(), PaymentError> {
    validate_card_number(card_number)?;
    validate_expiry(expiry)?;
    validate_cvv(cvv)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_payment() {
        assert_eq!(validate_payment("1234567890123456", "12/25", "123"), Ok(()));
    }

    #[test]
    fn test_card_number_rules() {
        assert!(validate_card_number("1234567890123456").is_ok());
        assert_eq!(validate_card_number("123"), Err(PaymentError::CardNumber));
        assert_eq!(
            validate_card_number("12345678901234567"),
            Err(PaymentError::CardNumber)
        );
        assert_eq!(
            validate_card_number("123456789012345a"),
            Err(PaymentError::CardNumber)
        );
    }

    #[test]
    fn test_expiry_rules() {
        assert!(validate_expiry("01/26").is_ok());
        assert!(validate_expiry("12/25").is_ok());
        assert_eq!(validate_expiry("13/25"), Err(PaymentError::Expiry));
        assert_eq!(validate_expiry("00/25"), Err(PaymentError::Expiry));
        assert_eq!(validate_expiry("1/25"), Err(PaymentError::Expiry));
        assert_eq!(validate_expiry("12-25"), Err(PaymentError::Expiry));
        assert_eq!(validate_expiry("12/2a"), Err(PaymentError::Expiry));
        assert_eq!(validate_expiry(""), Err(PaymentError::Expiry));
    }

    #[test]
    fn test_cvv_rules() {
        assert!(validate_cvv("123").is_ok());
        assert_eq!(validate_cvv("12"), Err(PaymentError::Cvv));
        assert_eq!(validate_cvv("1234"), Err(PaymentError::Cvv));
        assert_eq!(validate_cvv("12a"), Err(PaymentError::Cvv));
    }

    #[test]
    fn test_first_failure_wins() {
        // Card number is checked before expiry, expiry before CVV
        assert_eq!(
            validate_payment("123", "13/25", "1"),
            Err(PaymentError::CardNumber)
        );
        assert_eq!(
            validate_payment("1234567890123456", "13/25", "1"),
            Err(PaymentError::Expiry)
        );
        assert_eq!(
            validate_payment("1234567890123456", "12/25", "12"),
            Err(PaymentError::Cvv)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(PaymentError::CardNumber.to_string(), "Invalid Card Number");
        assert_eq!(
            PaymentError::Expiry.to_string(),
            "Invalid Expiry Date (MM/YY)"
        );
        assert_eq!(PaymentError::Cvv.to_string(), "Invalid CVV");
        assert_eq!(PaymentError::Expiry.field(), PaymentField::Expiry);
    }
}
