//! Cart

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque cart line handle, e.g. `gid://shopify/CartLine/1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartLineId(String);

/// Opaque delivery group handle, e.g. `gid://shopify/CartDeliveryGroup/0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryGroupId(String);

macro_rules! impl_handle {
    ($handle:ty) => {
        impl $handle {
            /// Returns the handle as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $handle {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $handle {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $handle {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

impl_handle!(CartLineId);
impl_handle!(DeliveryGroupId);

/// A monetary amount without currency.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Decimal amount in the cart's presentment currency.
    pub amount: Decimal,
}

/// Cost breakdown of a cart line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineCost {
    /// Line subtotal before discounts.
    pub subtotal_amount: Amount,
}

/// A line item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Line handle.
    pub id: CartLineId,

    /// Line cost.
    pub cost: CartLineCost,
}

impl CartLine {
    /// Creates a new cart line with the given subtotal.
    pub fn new(id: impl Into<CartLineId>, subtotal: Decimal) -> Self {
        Self {
            id: id.into(),
            cost: CartLineCost {
                subtotal_amount: Amount { amount: subtotal },
            },
        }
    }

    /// Returns the line subtotal.
    pub fn subtotal(&self) -> Decimal {
        self.cost.subtotal_amount.amount
    }
}

/// A group of delivery options, the target of shipping discounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryGroup {
    /// Delivery group handle.
    pub id: DeliveryGroupId,
}

impl DeliveryGroup {
    /// Creates a new delivery group.
    pub fn new(id: impl Into<DeliveryGroupId>) -> Self {
        Self { id: id.into() }
    }
}

/// Returns the line with the greatest subtotal.
///
/// Only a strictly greater subtotal replaces the current best, so ties go to
/// the line that appears first.
pub fn most_valuable_line(lines: &[CartLine]) -> Option<&CartLine> {
    let (first, rest) = lines.split_first()?;

    Some(rest.iter().fold(first, |best, line| {
        if line.subtotal() > best.subtotal() {
            line
        } else {
            best
        }
    }))
}
