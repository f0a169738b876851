//! # Loyalty Discounts
//!
//! Maps a customer's loyalty tier to a discounted order total.
//!
//! ## Rates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Label        Tier                 Discount      Total                  │
//! │  ───────────  ───────────────────  ────────────  ─────────────────────  │
//! │  "GOLD"       LoyaltyTier::Gold    2000 bps      total × 0.8            │
//! │  "SILVER"     LoyaltyTier::Silver  1000 bps      total × 0.9            │
//! │  anything     LoyaltyTier::Standard   0 bps      total (unchanged)      │
//! │  else                                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two ways in from a string label:
//! - [`apply_discount`] / [`LoyaltyTier::from_label`]: permissive. Empty,
//!   lower-case or misspelled labels get no discount.
//! - `label.parse::<LoyaltyTier>()`: strict. Unknown labels are an error.
//!
//! ## Example
//! ```rust
//! use diner_core::loyalty::apply_discount;
//! use diner_core::money::Money;
//!
//! let total = Money::from_cents(10_000);
//! assert_eq!(apply_discount(total, "GOLD").cents(), 8000);
//! assert_eq!(apply_discount(total, "SILVER").cents(), 9000);
//! assert_eq!(apply_discount(total, "").cents(), 10_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use ts_rs::TS;

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::validation::{validate_discount_bps, validate_tier_label};

/// Default GOLD discount: 20% off.
pub const GOLD_DISCOUNT_BPS: u32 = 2000;

/// Default SILVER discount: 10% off.
pub const SILVER_DISCOUNT_BPS: u32 = 1000;

// =============================================================================
// Loyalty Tier
// =============================================================================

/// A customer's loyalty tier. Passed per call; never stored on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoyaltyTier {
    Gold,
    Silver,
    /// No discount. Every unrecognised label lands here.
    Standard,
}

impl LoyaltyTier {
    /// Maps a label to a tier, treating anything unrecognised as `Standard`.
    ///
    /// Matching is exact and case-sensitive: `"gold"` is `Standard`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "GOLD" => LoyaltyTier::Gold,
            "SILVER" => LoyaltyTier::Silver,
            "STANDARD" | "" => LoyaltyTier::Standard,
            other => {
                debug!(label = %other, "Unrecognized loyalty tier, applying no discount");
                LoyaltyTier::Standard
            }
        }
    }

    /// Canonical label, as accepted by [`from_label`](Self::from_label).
    pub const fn label(&self) -> &'static str {
        match self {
            LoyaltyTier::Gold => "GOLD",
            LoyaltyTier::Silver => "SILVER",
            LoyaltyTier::Standard => "STANDARD",
        }
    }

    /// Built-in discount for this tier, in basis points.
    pub const fn default_discount_bps(&self) -> u32 {
        match self {
            LoyaltyTier::Gold => GOLD_DISCOUNT_BPS,
            LoyaltyTier::Silver => SILVER_DISCOUNT_BPS,
            LoyaltyTier::Standard => 0,
        }
    }

    /// Applies this tier's built-in discount to `total`.
    pub fn apply(&self, total: Money) -> Money {
        total.scale_down_bps(self.default_discount_bps())
    }
}

impl Default for LoyaltyTier {
    fn default() -> Self {
        LoyaltyTier::Standard
    }
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strict parsing: surrounding whitespace is ignored, anything other than a
/// canonical label is rejected.
impl FromStr for LoyaltyTier {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match validate_tier_label(s)? {
            "GOLD" => Ok(LoyaltyTier::Gold),
            "SILVER" => Ok(LoyaltyTier::Silver),
            "STANDARD" => Ok(LoyaltyTier::Standard),
            other => Err(PricingError::UnknownTier(other.to_string())),
        }
    }
}

// =============================================================================
// Discount Function
// =============================================================================

/// Applies the loyalty discount named by `tier` to `total`.
///
/// `"GOLD"` takes 20% off, `"SILVER"` 10%. Any other label, including the
/// empty string, returns `total` unchanged. Never fails.
pub fn apply_discount(total: Money, tier: &str) -> Money {
    LoyaltyTier::from_label(tier).apply(total)
}

// =============================================================================
// Discount Policy
// =============================================================================

/// Per-tier discount rates, for callers that don't use the built-in ones.
///
/// Usually built from [`PricingConfig`](crate::config::PricingConfig).
/// `Standard` is always 0 bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountPolicy {
    gold_bps: u32,
    silver_bps: u32,
}

impl DiscountPolicy {
    /// Creates a policy, rejecting rates above 100%.
    pub fn new(gold_bps: u32, silver_bps: u32) -> PricingResult<Self> {
        validate_discount_bps("gold_bps", gold_bps)?;
        validate_discount_bps("silver_bps", silver_bps)?;
        Ok(Self {
            gold_bps,
            silver_bps,
        })
    }

    pub fn rate_bps(&self, tier: LoyaltyTier) -> u32 {
        match tier {
            LoyaltyTier::Gold => self.gold_bps,
            LoyaltyTier::Silver => self.silver_bps,
            LoyaltyTier::Standard => 0,
        }
    }

    pub fn apply(&self, total: Money, tier: LoyaltyTier) -> Money {
        let discounted = total.scale_down_bps(self.rate_bps(tier));
        debug!(%tier, %total, %discounted, "Applied loyalty discount");
        discounted
    }

    /// Like [`apply_discount`], with this policy's rates.
    pub fn apply_label(&self, total: Money, label: &str) -> Money {
        self.apply(total, LoyaltyTier::from_label(label))
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self {
            gold_bps: GOLD_DISCOUNT_BPS,
            silver_bps: SILVER_DISCOUNT_BPS,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HUNDRED: Money = Money::from_cents(10_000);

    #[test]
    fn test_apply_discount_known_tiers() {
        assert_eq!(apply_discount(HUNDRED, "GOLD"), Money::from_cents(8000));
        assert_eq!(apply_discount(HUNDRED, "SILVER"), Money::from_cents(9000));
    }

    #[test]
    fn test_apply_discount_unknown_is_identity() {
        for label in ["", "BRONZE", "gold", "Silver", " GOLD", "G0LD", "STANDARD"] {
            assert_eq!(apply_discount(HUNDRED, label), HUNDRED, "label {:?}", label);
        }
    }

    #[test]
    fn test_apply_discount_scales_any_total() {
        // (total, gold, silver) in cents
        let cases = [
            (0, 0, 0),
            (1, 1, 1),
            (5, 4, 4),
            (99, 79, 89),
            (1450, 1160, 1305),
            (12_345, 9876, 11_110),
            (1_000_000, 800_000, 900_000),
        ];
        for (total, gold, silver) in cases {
            let total = Money::from_cents(total);
            assert_eq!(apply_discount(total, "GOLD").cents(), gold, "GOLD on {}", total);
            assert_eq!(apply_discount(total, "SILVER").cents(), silver, "SILVER on {}", total);
            assert_eq!(apply_discount(total, "NONE"), total);
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(LoyaltyTier::from_label("GOLD"), LoyaltyTier::Gold);
        assert_eq!(LoyaltyTier::from_label("SILVER"), LoyaltyTier::Silver);
        assert_eq!(LoyaltyTier::from_label(""), LoyaltyTier::Standard);
        assert_eq!(LoyaltyTier::from_label("platinum"), LoyaltyTier::Standard);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("GOLD".parse::<LoyaltyTier>().unwrap(), LoyaltyTier::Gold);
        assert_eq!(" SILVER ".parse::<LoyaltyTier>().unwrap(), LoyaltyTier::Silver);
        assert_eq!("STANDARD".parse::<LoyaltyTier>().unwrap(), LoyaltyTier::Standard);

        assert!(matches!(
            "gold".parse::<LoyaltyTier>(),
            Err(PricingError::UnknownTier(label)) if label == "gold"
        ));
        assert!(matches!(
            "".parse::<LoyaltyTier>(),
            Err(PricingError::Validation(_))
        ));
    }

    #[test]
    fn test_label_round_trips_through_both_parsers() {
        for tier in [LoyaltyTier::Gold, LoyaltyTier::Silver, LoyaltyTier::Standard] {
            assert_eq!(LoyaltyTier::from_label(tier.label()), tier);
            assert_eq!(tier.to_string().parse::<LoyaltyTier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&LoyaltyTier::Gold).unwrap(), "\"GOLD\"");
        let tier: LoyaltyTier = serde_json::from_str("\"SILVER\"").unwrap();
        assert_eq!(tier, LoyaltyTier::Silver);
        assert_eq!(LoyaltyTier::default(), LoyaltyTier::Standard);
    }

    #[test]
    fn test_default_policy_matches_apply_discount() {
        let policy = DiscountPolicy::default();
        for label in ["GOLD", "SILVER", "", "junk"] {
            assert_eq!(policy.apply_label(HUNDRED, label), apply_discount(HUNDRED, label));
        }
    }

    #[test]
    fn test_custom_policy() {
        let policy = DiscountPolicy::new(2500, 500).unwrap();
        assert_eq!(policy.apply(HUNDRED, LoyaltyTier::Gold).cents(), 7500);
        assert_eq!(policy.apply(HUNDRED, LoyaltyTier::Silver).cents(), 9500);
        assert_eq!(policy.apply(HUNDRED, LoyaltyTier::Standard), HUNDRED);
        assert_eq!(policy.rate_bps(LoyaltyTier::Standard), 0);
    }

    #[test]
    fn test_policy_rejects_rates_over_100_percent() {
        assert!(DiscountPolicy::new(10_001, 0).is_err());
        assert!(DiscountPolicy::new(0, 20_000).is_err());
        assert!(DiscountPolicy::new(10_000, 10_000).is_ok());
    }
}
