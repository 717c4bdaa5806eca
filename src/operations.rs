//! Discount Operations
//!
//! The output of a discount function run: a list of operations, each adding
//! discount candidates for one kind of target.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::{
    cart::{CartLineId, DeliveryGroupId},
    discounts::{DiscountCandidate, SelectionStrategy},
};

/// Target of an order discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum OrderDiscountTarget {
    /// The order subtotal, minus the excluded lines.
    OrderSubtotal {
        /// Lines left out of the discounted subtotal.
        excluded_cart_line_ids: Vec<CartLineId>,
    },
}

/// Target of a product discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductDiscountTarget {
    /// A single cart line.
    CartLine {
        /// Line handle.
        id: CartLineId,
    },
}

/// Target of a delivery discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeliveryDiscountTarget {
    /// A delivery group.
    DeliveryGroup {
        /// Delivery group handle.
        id: DeliveryGroupId,
    },
}

/// Candidates for one kind of target, and how to choose among them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountsAdd<T> {
    /// Proposed discounts.
    pub candidates: SmallVec<[DiscountCandidate<T>; 1]>,

    /// Selection strategy for the candidates.
    pub selection_strategy: SelectionStrategy,
}

impl<T> DiscountsAdd<T> {
    /// Create an operation body holding a single candidate.
    pub fn single(candidate: DiscountCandidate<T>, selection_strategy: SelectionStrategy) -> Self {
        Self {
            candidates: smallvec![candidate],
            selection_strategy,
        }
    }
}

/// A discount operation emitted by a function run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscountOperation {
    /// Discount the order subtotal.
    OrderDiscountsAdd(DiscountsAdd<OrderDiscountTarget>),

    /// Discount cart lines.
    ProductDiscountsAdd(DiscountsAdd<ProductDiscountTarget>),

    /// Discount delivery groups.
    DeliveryDiscountsAdd(DiscountsAdd<DeliveryDiscountTarget>),
}

/// Result of a function run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRunResult {
    /// Operations to apply, in order.
    pub operations: SmallVec<[DiscountOperation; 2]>,
}

impl FunctionRunResult {
    /// A result with no operations.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the result has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl FromIterator<DiscountOperation> for FunctionRunResult {
    fn from_iter<I: IntoIterator<Item = DiscountOperation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}
