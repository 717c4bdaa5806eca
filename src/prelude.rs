//! Rebate prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartLine, CartLineId, DeliveryGroup, DeliveryGroupId, most_valuable_line},
    classes::{DiscountClass, DiscountClasses},
    configuration::{ConfigurationError, DiscountConfiguration},
    discounts::{DiscountCandidate, DiscountValue, SelectionStrategy},
    functions::{
        RunError, cart_delivery_options_discounts_generate_run, cart_lines_discounts_generate_run,
    },
    input::{Cart, CartInput, DeliveryCart, DeliveryInput, Discount, Metafield},
    operations::{
        DeliveryDiscountTarget, DiscountOperation, DiscountsAdd, FunctionRunResult,
        OrderDiscountTarget, ProductDiscountTarget,
    },
    status::DiscountStatus,
};
