//! # Orders
//!
//! An append-only list of menu items with an exact running total.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order::new()          empty, total $0.00                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add_item(..) ×N       appended in order, duplicates allowed            │
//! │       │                                                                 │
//! │       ├──► total_cost()        Σ item.cost()                            │
//! │       │                                                                 │
//! │       └──► summarize(tier)     lines + subtotal + discount + total      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no removal. An `Order` has no internal locking; wrap it in a
//! mutex if several threads append to the same one.
//!
//! ## Example
//! ```rust
//! use diner_core::menu::FoodItem;
//! use diner_core::order::Order;
//! use diner_core::LoyaltyTier;
//!
//! let mut order = Order::new();
//! order.add_item(FoodItem::burger());
//! order.add_item(FoodItem::cheese(FoodItem::burger()));
//! order.add_item(FoodItem::extra_meat(FoodItem::hot_dog()));
//!
//! assert_eq!(order.total_cost().to_string(), "$14.50");
//!
//! let summary = order.summarize(LoyaltyTier::Gold);
//! assert_eq!(summary.total.to_string(), "$11.60");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::loyalty::{DiscountPolicy, LoyaltyTier};
use crate::menu::{FoodItem, Priced};
use crate::money::Money;

// =============================================================================
// Order
// =============================================================================

/// A customer's order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    items: Vec<FoodItem>,
}

impl Order {
    /// Creates an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to the end of the order. Always succeeds.
    pub fn add_item(&mut self, item: impl Into<FoodItem>) {
        let item = item.into();
        debug!(
            item = %item,
            cost = %item.cost(),
            position = self.items.len(),
            "Adding item to order"
        );
        self.items.push(item);
    }

    /// Sum of every item's cost. `$0.00` for an empty order.
    pub fn total_cost(&self) -> Money {
        self.items.iter().map(Priced::cost).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// One line per item, in insertion order.
    pub fn lines(&self) -> Vec<OrderLine> {
        self.items
            .iter()
            .enumerate()
            .map(|(position, item)| OrderLine {
                position,
                name: item.name(),
                cost: item.cost(),
            })
            .collect()
    }

    /// Builds a receipt with the built-in loyalty rates.
    pub fn summarize(&self, tier: LoyaltyTier) -> OrderSummary {
        self.summarize_with(&DiscountPolicy::default(), tier)
    }

    /// Builds a receipt with the rates from `policy`.
    pub fn summarize_with(&self, policy: &DiscountPolicy, tier: LoyaltyTier) -> OrderSummary {
        let subtotal = self.total_cost();
        let total = policy.apply(subtotal, tier);

        OrderSummary {
            lines: self.lines(),
            subtotal,
            tier,
            discount: subtotal - total,
            total,
        }
    }
}

impl Priced for Order {
    fn cost(&self) -> Money {
        self.total_cost()
    }
}

impl Extend<FoodItem> for Order {
    fn extend<I: IntoIterator<Item = FoodItem>>(&mut self, iter: I) {
        for item in iter {
            self.add_item(item);
        }
    }
}

impl FromIterator<FoodItem> for Order {
    fn from_iter<I: IntoIterator<Item = FoodItem>>(iter: I) -> Self {
        let mut order = Order::new();
        order.extend(iter);
        order
    }
}

// =============================================================================
// Receipt Types
// =============================================================================

/// A single priced line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    /// Zero-based position in the order.
    pub position: usize,
    pub name: String,
    pub cost: Money,
}

/// Priced breakdown of an order for one loyalty tier.
///
/// `total = subtotal - discount`, and `subtotal` is the sum of line costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub subtotal: Money,
    pub tier: LoyaltyTier,
    pub discount: Money,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
