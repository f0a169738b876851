//! # diner-core: Order Pricing for Diner
//!
//! Pure pricing logic: menu items, add-ons, orders and loyalty discounts.
//! No I/O, no database, no async.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          diner-core                                     │
//! │                                                                         │
//! │   ┌───────────┐    ┌───────────┐    ┌───────────┐    ┌───────────┐      │
//! │   │   menu    │───►│   order   │───►│  loyalty  │◄───│  config   │      │
//! │   │ BaseItem  │    │   Order   │    │   Tier    │    │ Pricing-  │      │
//! │   │  AddOn    │    │ OrderLine │    │ Discount- │    │  Config   │      │
//! │   │ FoodItem  │    │  Summary  │    │  Policy   │    │           │      │
//! │   └─────┬─────┘    └─────┬─────┘    └─────┬─────┘    └───────────┘      │
//! │         └────────────────┴────────────────┘                             │
//! │                          │                                              │
//! │                    ┌─────▼─────┐                                        │
//! │                    │   money   │  i64 cents, no floating point          │
//! │                    └───────────┘                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - `Priced` trait, base items, add-ons, `FoodItem`
//! - [`order`] - `Order` and receipt types
//! - [`loyalty`] - Tier lookup and discount application
//! - [`money`] - Money type with integer arithmetic
//! - [`config`] - TOML-backed discount rates
//! - [`error`] - Error types
//! - [`validation`] - Rate and label checks
//!
//! ## Example Usage
//!
//! ```rust
//! use diner_core::{apply_discount, FoodItem, Order};
//!
//! let mut order = Order::new();
//! order.add_item(FoodItem::burger());
//! order.add_item(FoodItem::cheese(FoodItem::burger()));
//! order.add_item(FoodItem::extra_meat(FoodItem::hot_dog()));
//!
//! let total = order.total_cost();
//! assert_eq!(total.cents(), 1450);
//! assert_eq!(apply_discount(total, "GOLD").cents(), 1160);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod loyalty;
pub mod menu;
pub mod money;
pub mod order;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::PricingConfig;
pub use error::{PricingError, PricingResult, ValidationError};
pub use loyalty::{apply_discount, DiscountPolicy, LoyaltyTier};
pub use menu::{AddOn, BaseItem, FoodItem, Priced};
pub use money::Money;
pub use order::{Order, OrderLine, OrderSummary};
