//! `money`: fixed two-digit currency amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, Result};
use crate::scalar::{FromLiteral, PgType, ToLiteral};

/// Fractional digits PostgreSQL keeps for `money` under the usual locales.
const SCALE: u32 = 2;

const CURRENCY_SYMBOLS: [char; 3] = ['$', '£', '€'];

/// A `money` amount, held at two decimal places.
///
/// Output from PostgreSQL is locale formatted (`$1,234.50`, `-$3.00`,
/// `($3.00)`); parsing strips the currency symbol and group separators.
/// The literal written back is the plain amount, which PostgreSQL accepts
/// under any locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::from_parts(0, 0, 0, false, SCALE));

    /// Rounds `amount` half away from zero to whole cents.
    pub fn new(amount: Decimal) -> Self {
        let mut amount =
            amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(SCALE);
        Self(amount)
    }

    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, SCALE))
    }

    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Self::new)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Self::new)
    }

    /// Scales the amount, rounding the product to whole cents.
    pub fn checked_mul(self, factor: Decimal) -> Option<Money> {
        self.0.checked_mul(factor).map(Self::new)
    }

    pub fn decode(literal: &str) -> Result<Self> {
        let trimmed = literal.trim();
        let (negative, body) = match trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Some(inner) => (true, inner.trim()),
            None => (false, trimmed),
        };

        // the sign may sit on either side of the currency symbol
        let (sign, body) = match body.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, body),
        };
        let body = body.trim_start_matches(CURRENCY_SYMBOLS).trim_start();
        let (inner_sign, body) = match body.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, body),
        };

        let digits: String = body.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() {
            return Err(ParseError::literal(Self::KIND, literal, "missing amount"));
        }
        let amount = Decimal::from_str(&digits)
            .map_err(|e| ParseError::token(Self::KIND, literal, e))?;

        let amount = if negative ^ sign ^ inner_sign {
            -amount
        } else {
            amount
        };
        Ok(Self::new(amount))
    }

    pub fn encode(&self) -> String {
        self.0.to_string()
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Money {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl FromLiteral for Money {
    const KIND: &'static str = "money";

    fn from_literal(token: &str) -> Result<Self> {
        Self::decode(token)
    }
}

impl ToLiteral for Money {
    fn to_literal(&self) -> String {
        self.encode()
    }

    fn to_element(&self) -> String {
        self.encode()
    }
}

impl PgType for Money {
    const PG_TYPE: &'static str = "money";
    const ARRAY_TYPE: &'static str = "money[]";
}
