//! Fixed-point money type used for every balance and amount.
//!
//! Amounts are held at 4 decimal places so interest accrual does not lose
//! precision between calls, and rendered at 2 places with the `Rs.` prefix.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// A monetary amount with exactly 4 decimal places of internal precision.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bank_account_manager::Money;
///
/// let amount = Money::from_str("1567.5").unwrap();
/// assert_eq!(amount.to_string(), "Rs.1567.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places kept internally.
    pub const SCALE: u32 = 4;

    /// The number of decimal places shown to the user.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Currency prefix used when rendering.
    pub const CURRENCY: &'static str = "Rs.";

    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Largest representable amount.
    pub const MAX: Self = Money(Decimal::MAX);

    /// Smallest representable amount.
    pub const MIN: Self = Money(Decimal::MIN);

    /// Creates a new `Money` from a `Decimal`, normalizing to 4 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Money(normalized)
    }

    /// Returns the underlying decimal value.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns `self + rhs`, or `None` if the sum does not fit.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money::new)
    }

    /// Returns `self - rhs`, or `None` if the difference does not fit.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Money::new)
    }

    /// Returns `self + rhs`, clamped to [`Money::MIN`]..=[`Money::MAX`].
    pub fn saturating_add(self, rhs: Self) -> Self {
        Money::new(self.0.saturating_add(rhs.0))
    }

    /// Returns `rate` percent of this amount, or `None` if it does not fit.
    pub fn checked_percent(self, rate: Decimal) -> Option<Self> {
        let factor = rate.checked_div(Decimal::ONE_HUNDRED)?;
        self.0.checked_mul(factor).map(Money::new)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Money::new(Decimal::from(value))
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::DISPLAY_SCALE);
        // pad() so callers can align columns with width specifiers
        f.pad(&format!("{}{}", Self::CURRENCY, rounded))
    }
}
