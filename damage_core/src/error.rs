//! Errors raised while building damage inputs

use thiserror::Error;

/// Invalid input to damage resolution
///
/// None of these are recoverable at runtime: each one means a caller handed
/// the calculator something it cannot interpret.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DamageError {
    #[error("armor divisor must be zero or greater, got {0}")]
    NegativeArmorDivisor(f64),
    #[error("unknown damage type key: {0:?}")]
    UnknownDamageType(String),
    #[error("hit location \"Random\" must be rolled before damage is resolved")]
    UnresolvedRandomLocation,
    #[error("invalid dice expression: {0:?}")]
    InvalidDice(String),
}

/// Validate an armor divisor (NaN is rejected along with negatives)
pub fn validate_armor_divisor(divisor: f64) -> Result<f64, DamageError> {
    if divisor.is_nan() || divisor < 0.0 {
        return Err(DamageError::NegativeArmorDivisor(divisor));
    }
    Ok(divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_armor_divisor() {
        assert_eq!(validate_armor_divisor(0.0), Ok(0.0));
        assert_eq!(validate_armor_divisor(0.5), Ok(0.5));
        assert_eq!(validate_armor_divisor(3.0), Ok(3.0));
        assert!(validate_armor_divisor(-1.0).is_err());
        assert!(validate_armor_divisor(f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = DamageError::UnknownDamageType("zap".to_string());
        assert!(err.to_string().contains("zap"));

        let err = DamageError::NegativeArmorDivisor(-2.0);
        assert!(err.to_string().contains("-2"));
    }
}
