pub mod payment;

use crust_shared::Money;

pub use payment::{
    recorder_for, CardPayment, PaymentConfirmation, PaymentError, PaymentMethod, PaymentRecorder,
    PaymentStatus, WalletPayment,
};

/// Rejections raised where caller-supplied values enter the core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),
    #[error("{field} cannot be negative, got {cents} cents")]
    NegativeAmount { field: &'static str, cents: i64 },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trimmed, non-empty text or an `EmptyField` error naming `field`.
pub fn require_text(field: &'static str, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

pub fn require_non_negative(field: &'static str, cents: i64) -> ValidationResult<Money> {
    if cents < 0 {
        return Err(ValidationError::NegativeAmount { field, cents });
    }
    Ok(Money::from_cents(cents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("sauce", "  Tomato ").unwrap(), "Tomato");
    }

    #[test]
    fn test_require_text_rejects_blank() {
        let err = require_text("crust", "   ").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "crust" });
        assert_eq!(err.to_string(), "crust cannot be empty");
    }

    #[test]
    fn test_require_non_negative() {
        assert_eq!(require_non_negative("base price", 0).unwrap(), Money::ZERO);
        assert_eq!(
            require_non_negative("base price", -1),
            Err(ValidationError::NegativeAmount { field: "base price", cents: -1 })
        );
    }
}
