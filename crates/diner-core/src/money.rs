//! # Money Module
//!
//! Fixed-point monetary values for menu pricing.
//!
//! ## Why Integer Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SUMMING PRICES IN FLOATING POINT                                       │
//! │                                                                         │
//! │    Cheese surcharge 0.50 + Fries 2.50 + ... (×1000 orders)             │
//! │    f64 accumulates representation error on every addition              │
//! │                                                                         │
//! │  INTEGER CENTS                                                          │
//! │    50 + 250 + ... is exact, always                                     │
//! │    Discounts are basis points, applied with one rounding step          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use diner_core::money::Money;
//!
//! let burger = Money::from_cents(500);       // $5.00
//! let cheese = Money::from_major_minor(0, 50); // $0.50
//!
//! assert_eq!((burger + cheese).to_string(), "$5.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

/// Basis points in a whole (100%).
pub const BPS_SCALE: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Where Money Flows
/// ```text
/// BaseItem::price ──┐
///                   ├──► FoodItem::cost ──► Order::total_cost ──► apply_discount
/// AddOn::surcharge ─┘
/// ```
///
/// Serializes as a bare integer (`1450`), never as a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use diner_core::money::Money;
    ///
    /// let fries = Money::from_cents(250);
    /// assert_eq!(fries.cents(), 250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// A negative `major` makes the whole amount negative:
    /// `from_major_minor(-2, 50)` is -$2.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the share of this amount given by `bps` basis points,
    /// rounded half up.
    ///
    /// ## Example
    /// ```rust
    /// use diner_core::money::Money;
    ///
    /// // 20% of $14.50
    /// assert_eq!(Money::from_cents(1450).portion_bps(2000).cents(), 290);
    /// ```
    pub fn portion_bps(&self, bps: u32) -> Money {
        // i128 so that large totals times 10_000 cannot overflow
        let share = (self.0 as i128 * bps as i128 + (BPS_SCALE / 2) as i128) / BPS_SCALE as i128;
        Money(share as i64)
    }

    /// Subtracts a basis-point share from this amount.
    ///
    /// ## Example
    /// ```rust
    /// use diner_core::money::Money;
    ///
    /// let total = Money::from_cents(10_000);      // $100.00
    /// assert_eq!(total.scale_down_bps(2000).cents(), 8000); // 20% off
    /// assert_eq!(total.scale_down_bps(0), total);
    /// ```
    pub fn scale_down_bps(&self, bps: u32) -> Money {
        *self - self.portion_bps(bps)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$14.50` / `-$2.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a count (e.g. three orders of fries).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
