//! Discounts
//!
//! Discount values and the candidates that carry them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// The size of a single discount.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DiscountValue {
    /// Subtract a fixed amount (e.g. "5.00 off")
    FixedAmount {
        /// Amount in the cart's presentment currency.
        amount: Decimal,
    },

    /// Subtract a percentage (e.g. "10% off")
    Percentage {
        /// Percentage in the range 0-100.
        value: Decimal,
    },
}

impl DiscountValue {
    /// Choose between a fixed amount and a percentage.
    ///
    /// A fixed amount strictly greater than zero wins. Otherwise the
    /// percentage is used, even when it is zero.
    pub fn fixed_or_percentage(fixed_amount: Decimal, percentage: Decimal) -> Self {
        if fixed_amount > Decimal::ZERO {
            DiscountValue::FixedAmount {
                amount: fixed_amount,
            }
        } else {
            DiscountValue::Percentage { value: percentage }
        }
    }

    /// Returns `true` for [`DiscountValue::FixedAmount`].
    pub fn is_fixed_amount(&self) -> bool {
        matches!(self, DiscountValue::FixedAmount { .. })
    }
}

/// How the platform picks among several candidates in one operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionStrategy {
    /// Apply only the first candidate.
    First,

    /// Apply every candidate.
    All,
}

/// A single proposed discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountCandidate<T> {
    /// Message shown to the buyer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Where the discount applies.
    pub targets: SmallVec<[T; 1]>,

    /// Size of the discount.
    pub value: DiscountValue,
}

impl<T> DiscountCandidate<T> {
    /// Create a candidate with a single target.
    pub fn new(message: Option<&str>, target: T, value: DiscountValue) -> Self {
        Self {
            message: message.map(str::to_string),
            targets: smallvec![target],
            value,
        }
    }
}
