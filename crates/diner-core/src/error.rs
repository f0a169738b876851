//! # Error Types
//!
//! Error types for diner-core.
//!
//! ## Where Errors Can Occur
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Pricing (menu, order, apply_discount)     → never fails               │
//! │                                                                         │
//! │  Strict tier parsing ("GOLD".parse())      → PricingError::UnknownTier │
//! │  PricingConfig::from_toml_str              → ConfigParse / Validation  │
//! │  PricingConfig::to_toml_string             → ConfigSerialize           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The permissive `apply_discount` path maps unknown tier labels to
//! "no discount" and does not produce errors.

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors from parsing tier labels and loading pricing configuration.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Tier label is not one of the known tiers.
    ///
    /// Only returned by strict parsing (`str::parse::<LoyaltyTier>()`).
    #[error("Unknown loyalty tier: '{0}'. Valid options: GOLD, SILVER, STANDARD")]
    UnknownTier(String),

    /// Configuration is structurally valid but semantically wrong.
    #[error("Invalid pricing configuration: {0}")]
    InvalidConfig(String),

    /// TOML could not be parsed into a `PricingConfig`.
    #[error("Failed to parse pricing config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize pricing config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
