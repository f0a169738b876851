//! # Pricing Configuration
//!
//! Loyalty discount rates, parsed from TOML.
//!
//! ## Configuration Format
//! ```toml
//! [loyalty]
//! gold_bps = 2000    # 20% off
//! silver_bps = 1000  # 10% off
//! ```
//!
//! Every field is optional; missing fields take the built-in rates. This
//! module only parses strings. Where the TOML comes from is up to the caller.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PricingError, PricingResult};
use crate::loyalty::{DiscountPolicy, GOLD_DISCOUNT_BPS, SILVER_DISCOUNT_BPS};
use crate::validation::validate_discount_bps;

// =============================================================================
// Loyalty Rates
// =============================================================================

/// Discount per loyalty tier, in basis points off the order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyRates {
    #[serde(default = "default_gold_bps")]
    pub gold_bps: u32,

    #[serde(default = "default_silver_bps")]
    pub silver_bps: u32,
}

fn default_gold_bps() -> u32 {
    GOLD_DISCOUNT_BPS
}

fn default_silver_bps() -> u32 {
    SILVER_DISCOUNT_BPS
}

impl Default for LoyaltyRates {
    fn default() -> Self {
        Self {
            gold_bps: default_gold_bps(),
            silver_bps: default_silver_bps(),
        }
    }
}

// =============================================================================
// Pricing Config
// =============================================================================

/// Top-level pricing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub loyalty: LoyaltyRates,
}

impl PricingConfig {
    /// Parses and validates a TOML document.
    ///
    /// ## Example
    /// ```rust
    /// use diner_core::config::PricingConfig;
    ///
    /// let config = PricingConfig::from_toml_str("[loyalty]\ngold_bps = 2500\n").unwrap();
    /// assert_eq!(config.loyalty.gold_bps, 2500);
    /// assert_eq!(config.loyalty.silver_bps, 1000); // default
    /// ```
    pub fn from_toml_str(contents: &str) -> PricingResult<Self> {
        let config: PricingConfig = toml::from_str(contents)?;
        config.validate()?;
        debug!(
            gold_bps = config.loyalty.gold_bps,
            silver_bps = config.loyalty.silver_bps,
            "Loaded pricing config"
        );
        Ok(config)
    }

    pub fn to_toml_string(&self) -> PricingResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that every rate is between 0% and 100%, and that GOLD is not
    /// a smaller discount than SILVER.
    pub fn validate(&self) -> PricingResult<()> {
        validate_discount_bps("loyalty.gold_bps", self.loyalty.gold_bps)?;
        validate_discount_bps("loyalty.silver_bps", self.loyalty.silver_bps)?;

        if self.loyalty.gold_bps < self.loyalty.silver_bps {
            return Err(PricingError::InvalidConfig(format!(
                "GOLD discount ({} bps) is smaller than SILVER discount ({} bps)",
                self.loyalty.gold_bps, self.loyalty.silver_bps
            )));
        }

        Ok(())
    }

    /// Builds the discount policy these rates describe, after validating them.
    pub fn discount_policy(&self) -> PricingResult<DiscountPolicy> {
        self.validate()?;
        DiscountPolicy::new(self.loyalty.gold_bps, self.loyalty.silver_bps)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
