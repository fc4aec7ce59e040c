//! # Watts Module
//!
//! Provides the `Watts` type for handling power values exactly.
//!
//! ## Why Integer Milliwatts?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    15.4 × 3 = 46.199999999999996  ❌ WRONG!                             │
//! │                                                                         │
//! │  A budget check at the boundary can flip the wrong way:                 │
//! │    sum of ports == 46.2 budget?  → false                               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Milliwatts                                       │
//! │    15_400 mW × 3 = 46_200 mW                                            │
//! │    Only the display layer rounds (one decimal place)                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use poe_core::watts::Watts;
//!
//! let class3 = Watts::from_tenths(154); // 15.4 W
//! let four_ports = class3 * 4;
//! assert_eq!(four_ports.milliwatts(), 61_600);
//! assert_eq!(four_ports.to_string(), "61.6 W");
//! ```

use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Largest number of decimals the formatter can show (milliwatt resolution).
pub const MAX_DISPLAY_DECIMALS: u8 = 3;

// =============================================================================
// Watts Type
// =============================================================================

/// A power value held in milliwatts.
///
/// ## Design Decisions
/// - **i64 (signed)**: headroom (`budget - required`) goes negative when a
///   load is over budget
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## Where Watts is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  PoeClass.wattage ──┬──► port assignment ──► total required power       │
/// │                     │                                                   │
/// │                     └──► × device count ──► device total power          │
/// │                                                                         │
/// │  SwitchModel.poe_budget ──► budget check / switch recommendation        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Watts(i64);

impl Watts {
    /// Creates a value from milliwatts.
    #[inline]
    pub const fn from_milliwatts(mw: i64) -> Self {
        Watts(mw)
    }

    /// Creates a value from whole watts.
    ///
    /// ## Example
    /// ```rust
    /// use poe_core::watts::Watts;
    ///
    /// assert_eq!(Watts::from_watts(55).milliwatts(), 55_000);
    /// ```
    #[inline]
    pub const fn from_watts(watts: i64) -> Self {
        Watts(watts * 1000)
    }

    /// Creates a value from tenths of a watt (`154` = 15.4 W).
    #[inline]
    pub const fn from_tenths(tenths: i64) -> Self {
        Watts(tenths * 100)
    }

    /// Returns the value in milliwatts.
    #[inline]
    pub const fn milliwatts(&self) -> i64 {
        self.0
    }

    /// Zero watts.
    #[inline]
    pub const fn zero() -> Self {
        Watts(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checks whether the value is a whole number of watts.
    #[inline]
    pub const fn is_whole(&self) -> bool {
        self.0 % 1000 == 0
    }

    /// Multiplies a per-device wattage by a device count.
    ///
    /// ## Example
    /// ```rust
    /// use poe_core::watts::Watts;
    ///
    /// let class2 = Watts::from_watts(7);
    /// assert_eq!(class2.multiply_count(10), Watts::from_watts(70));
    /// ```
    #[inline]
    pub const fn multiply_count(&self, count: u32) -> Self {
        Watts(self.0 * count as i64)
    }

    /// Formats with a fixed number of decimals, rounding half away from zero.
    ///
    /// `decimals` is capped at [`MAX_DISPLAY_DECIMALS`].
    ///
    /// ## Example
    /// ```rust
    /// use poe_core::watts::Watts;
    ///
    /// let w = Watts::from_milliwatts(61_650);
    /// assert_eq!(w.format_fixed(1), "61.7");
    /// assert_eq!(w.format_fixed(0), "62");
    /// assert_eq!(w.format_fixed(3), "61.650");
    /// ```
    pub fn format_fixed(&self, decimals: u8) -> String {
        let decimals = decimals.min(MAX_DISPLAY_DECIMALS) as u32;
        let step = 10_i64.pow(MAX_DISPLAY_DECIMALS as u32 - decimals);
        let abs = self.0.unsigned_abs() as i64;
        let rounded = (abs + step / 2) / step;

        let sign = if self.0 < 0 && rounded != 0 { "-" } else { "" };
        if decimals == 0 {
            return format!("{}{}", sign, rounded);
        }

        let divisor = 10_i64.pow(decimals);
        format!(
            "{}{}.{:0width$}",
            sign,
            rounded / divisor,
            rounded % divisor,
            width = decimals as usize
        )
    }

    /// Formats the way budgets are labelled: whole watts print without a
    /// decimal (`55`), anything else with one (`15.4`).
    pub fn format_compact(&self) -> String {
        if self.is_whole() {
            format!("{}", self.0 / 1000)
        } else {
            self.format_fixed(1)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the value with one decimal place and a unit, e.g. `61.6 W`.
impl fmt::Display for Watts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} W", self.format_fixed(1))
    }
}

impl Default for Watts {
    fn default() -> Self {
        Watts::zero()
    }
}

impl Add for Watts {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Watts(self.0 + other.0)
    }
}

impl AddAssign for Watts {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Watts {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Watts(self.0 - other.0)
    }
}

impl Mul<u32> for Watts {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        self.multiply_count(count)
    }
}

impl Sum for Watts {
    fn sum<I: Iterator<Item = Watts>>(iter: I) -> Self {
        iter.fold(Watts::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Watts> for Watts {
    fn sum<I: Iterator<Item = &'a Watts>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
