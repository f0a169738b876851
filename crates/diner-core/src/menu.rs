//! # Menu Items
//!
//! Priced menu entities: base items and the add-ons that wrap them.
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FoodItem::hot_dog()            base: HotDog              $3.00         │
//! │      .with(AddOn::ExtraMeat)    add_ons: [ExtraMeat]    + $1.00         │
//! │      .with(AddOn::Cheese)       add_ons: [ExtraMeat,    + $0.50         │
//! │                                           Cheese]       ───────         │
//! │                                                           $4.50         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each add-on takes ownership of the item it wraps. A chain is always
//! linear and ends in exactly one base item.
//!
//! ## Example
//! ```rust
//! use diner_core::menu::{AddOn, FoodItem, Priced};
//!
//! let dog = FoodItem::cheese(FoodItem::extra_meat(FoodItem::hot_dog()));
//! assert_eq!(dog.cost().cents(), 450);
//!
//! // Same thing, built outward with `with`
//! let dog = FoodItem::hot_dog().with(AddOn::ExtraMeat).with(AddOn::Cheese);
//! assert_eq!(dog.to_string(), "Hot Dog + Extra Meat + Cheese");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Priced Capability
// =============================================================================

/// Anything that can report what it costs.
///
/// `cost` is pure and never fails. For every menu item it is at least the
/// price of the underlying base item.
pub trait Priced {
    fn cost(&self) -> Money;
}

// =============================================================================
// Base Items
// =============================================================================

/// A plain menu item with a fixed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseItem {
    /// $5.00
    Burger,
    /// $2.50
    Fries,
    /// $3.00
    HotDog,
}

impl BaseItem {
    pub const ALL: [BaseItem; 3] = [BaseItem::Burger, BaseItem::Fries, BaseItem::HotDog];

    /// Fixed menu price.
    #[inline]
    pub const fn price(&self) -> Money {
        match self {
            BaseItem::Burger => Money::from_cents(500),
            BaseItem::Fries => Money::from_cents(250),
            BaseItem::HotDog => Money::from_cents(300),
        }
    }

    /// Display name as printed on a receipt.
    pub const fn name(&self) -> &'static str {
        match self {
            BaseItem::Burger => "Burger",
            BaseItem::Fries => "Fries",
            BaseItem::HotDog => "Hot Dog",
        }
    }
}

impl Priced for BaseItem {
    fn cost(&self) -> Money {
        self.price()
    }
}

impl fmt::Display for BaseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Add-ons
// =============================================================================

/// A decoration that adds a fixed surcharge to whatever it wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOn {
    /// +$0.50
    Cheese,
    /// +$1.00
    ExtraMeat,
}

impl AddOn {
    pub const ALL: [AddOn; 2] = [AddOn::Cheese, AddOn::ExtraMeat];

    /// Amount added on top of the wrapped item's cost.
    #[inline]
    pub const fn surcharge(&self) -> Money {
        match self {
            AddOn::Cheese => Money::from_cents(50),
            AddOn::ExtraMeat => Money::from_cents(100),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            AddOn::Cheese => "Cheese",
            AddOn::ExtraMeat => "Extra Meat",
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Food Item
// =============================================================================

/// A base item, possibly wrapped in one or more add-ons.
///
/// ## Ownership
/// Wrapping consumes the item being wrapped and returns the wrapped one.
/// There is no way to take the inner item back out or swap it for another,
/// so once built a chain never changes.
///
/// The chain is stored flat (base plus add-ons, innermost first) rather than
/// as nested boxes, so dropping, cloning, comparing or hashing an item with
/// any number of add-ons never recurses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodItem {
    base: BaseItem,
    /// Innermost first.
    #[serde(default)]
    add_ons: Vec<AddOn>,
}

impl FoodItem {
    #[inline]
    pub fn burger() -> Self {
        BaseItem::Burger.into()
    }

    #[inline]
    pub fn fries() -> Self {
        BaseItem::Fries.into()
    }

    #[inline]
    pub fn hot_dog() -> Self {
        BaseItem::HotDog.into()
    }

    /// Wraps `inner` in `add_on`, taking ownership of it.
    pub fn decorate(add_on: AddOn, inner: impl Into<FoodItem>) -> Self {
        let mut item = inner.into();
        item.add_ons.push(add_on);
        item
    }

    /// `Cheese(inner)`: inner cost + $0.50.
    pub fn cheese(inner: impl Into<FoodItem>) -> Self {
        Self::decorate(AddOn::Cheese, inner)
    }

    /// `ExtraMeat(inner)`: inner cost + $1.00.
    pub fn extra_meat(inner: impl Into<FoodItem>) -> Self {
        Self::decorate(AddOn::ExtraMeat, inner)
    }

    /// Wraps `self` in another add-on. `x.with(a)` is `decorate(a, x)`.
    pub fn with(self, add_on: AddOn) -> Self {
        Self::decorate(add_on, self)
    }

    /// The base item at the bottom of the chain.
    #[inline]
    pub fn base(&self) -> BaseItem {
        self.base
    }

    /// Add-ons from the outermost wrapper inward.
    pub fn add_ons(&self) -> AddOns<'_> {
        AddOns {
            inner: self.add_ons.iter().rev(),
        }
    }

    /// Sum of all add-on surcharges in the chain.
    pub fn surcharge(&self) -> Money {
        self.add_ons.iter().map(AddOn::surcharge).sum()
    }

    /// Receipt label, add-ons listed in the order they were applied.
    pub fn name(&self) -> String {
        let mut name = self.base.name().to_string();
        for add_on in &self.add_ons {
            name.push_str(" + ");
            name.push_str(add_on.name());
        }
        name
    }

    /// Number of add-ons wrapping the base item.
    #[inline]
    pub fn depth(&self) -> usize {
        self.add_ons.len()
    }
}

impl Priced for FoodItem {
    fn cost(&self) -> Money {
        self.base.price() + self.surcharge()
    }
}

impl From<BaseItem> for FoodItem {
    fn from(base: BaseItem) -> Self {
        FoodItem {
            base,
            add_ons: Vec::new(),
        }
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Iterator over the add-ons of a [`FoodItem`], outermost first.
pub struct AddOns<'a> {
    inner: std::iter::Rev<std::slice::Iter<'a, AddOn>>,
}

impl Iterator for AddOns<'_> {
    type Item = AddOn;

    fn next(&mut self) -> Option<AddOn> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for AddOns<'_> {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prices() {
        assert_eq!(FoodItem::burger().cost().cents(), 500);
        assert_eq!(FoodItem::fries().cost().cents(), 250);
        assert_eq!(FoodItem::hot_dog().cost().cents(), 300);
        assert_eq!(BaseItem::HotDog.cost(), BaseItem::HotDog.price());
    }

    #[test]
    fn test_single_add_on() {
        assert_eq!(FoodItem::cheese(BaseItem::Burger).cost().cents(), 550);
        assert_eq!(FoodItem::extra_meat(BaseItem::HotDog).cost().cents(), 400);
    }

    #[test]
    fn test_cheese_on_extra_meat_hot_dog() {
        let item = FoodItem::cheese(FoodItem::extra_meat(FoodItem::hot_dog()));
        assert_eq!(item.cost(), Money::from_cents(450));
        assert_eq!(item.base(), BaseItem::HotDog);
        assert_eq!(item.depth(), 2);
    }

    #[test]
    fn test_wrapping_order_does_not_change_cost() {
        for base in BaseItem::ALL {
            let a = FoodItem::from(base).with(AddOn::Cheese).with(AddOn::ExtraMeat);
            let b = FoodItem::from(base).with(AddOn::ExtraMeat).with(AddOn::Cheese);
            assert_eq!(a.cost(), b.cost());
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_cost_never_below_base_price() {
        let mut item = FoodItem::fries();
        for add_on in AddOn::ALL.iter().cycle().take(10) {
            item = item.with(*add_on);
            assert!(item.cost() >= item.base().price());
        }
        // 5 cheese + 5 extra meat on fries
        assert_eq!(item.cost().cents(), 250 + 5 * 50 + 5 * 100);
    }

    #[test]
    fn test_same_add_on_can_stack() {
        let item = FoodItem::burger().with(AddOn::Cheese).with(AddOn::Cheese);
        assert_eq!(item.cost().cents(), 600);
        assert_eq!(item.surcharge().cents(), 100);
    }

    #[test]
    fn test_add_ons_outermost_first() {
        let item = FoodItem::hot_dog().with(AddOn::ExtraMeat).with(AddOn::Cheese);
        let add_ons: Vec<AddOn> = item.add_ons().collect();
        assert_eq!(add_ons, vec![AddOn::Cheese, AddOn::ExtraMeat]);
        assert_eq!(FoodItem::fries().add_ons().count(), 0);
    }

    #[test]
    fn test_names() {
        assert_eq!(FoodItem::hot_dog().name(), "Hot Dog");
        assert_eq!(
            FoodItem::cheese(FoodItem::extra_meat(BaseItem::HotDog)).to_string(),
            "Hot Dog + Extra Meat + Cheese"
        );
    }

    #[test]
    fn test_serde_shape() {
        let item = FoodItem::hot_dog().with(AddOn::ExtraMeat).with(AddOn::Cheese);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "base": "hot_dog", "add_ons": ["extra_meat", "cheese"] })
        );
        let back: FoodItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);

        let plain: FoodItem = serde_json::from_value(serde_json::json!({ "base": "fries" })).unwrap();
        assert_eq!(plain, FoodItem::fries());
    }

    #[test]
    fn test_deep_chain_cost_clone_and_drop() {
        const DEPTH: usize = 1_000_000;

        let mut item = FoodItem::fries();
        for _ in 0..DEPTH {
            item = item.with(AddOn::Cheese);
        }

        assert_eq!(item.depth(), DEPTH);
        assert_eq!(item.cost().cents(), 250 + 50 * DEPTH as i64);
        assert_eq!(item.add_ons().len(), DEPTH);

        let copy = item.clone();
        assert_eq!(copy, item);

        drop(copy);
        drop(item);
    }
}
