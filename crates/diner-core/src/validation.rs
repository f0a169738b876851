//! # Validation Module
//!
//! Input checks for discount rates and tier labels.
//!
//! ## Usage
//! ```rust
//! use diner_core::validation::{validate_discount_bps, validate_tier_label};
//!
//! assert!(validate_discount_bps("loyalty.gold_bps", 2000).is_ok());
//! assert!(validate_discount_bps("loyalty.gold_bps", 12000).is_err());
//!
//! assert_eq!(validate_tier_label("  GOLD ").unwrap(), "GOLD");
//! ```

use crate::error::ValidationError;
use crate::money::BPS_SCALE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a discount rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100% off)
/// - A discount above 100% would price an order below zero
pub fn validate_discount_bps(field: &str, bps: u32) -> ValidationResult<()> {
    if bps > BPS_SCALE {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: BPS_SCALE as i64,
        });
    }

    Ok(())
}

/// Validates a tier label for strict parsing.
///
/// Returns the trimmed label. Empty or whitespace-only labels are rejected;
/// callers that treat "no label" as the standard tier handle that before
/// calling this.
pub fn validate_tier_label(label: &str) -> ValidationResult<&str> {
    let label = label.trim();

    if label.is_empty() {
        return Err(ValidationError::Required {
            field: "tier".to_string(),
        });
    }

    Ok(label)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_discount_bps() {
        assert!(validate_discount_bps("rate", 0).is_ok());
        assert!(validate_discount_bps("rate", 2000).is_ok());
        assert!(validate_discount_bps("rate", 10000).is_ok());
        assert!(validate_discount_bps("rate", 10001).is_err());
    }

    #[test]
    fn test_validate_discount_bps_names_field() {
        let err = validate_discount_bps("loyalty.silver_bps", 20000).unwrap_err();
        assert!(err.to_string().starts_with("loyalty.silver_bps"));
    }

    #[test]
    fn test_validate_tier_label() {
        assert_eq!(validate_tier_label("SILVER").unwrap(), "SILVER");
        assert_eq!(validate_tier_label(" GOLD\n").unwrap(), "GOLD");
        assert!(validate_tier_label("").is_err());
        assert!(validate_tier_label("   ").is_err());
    }
}
