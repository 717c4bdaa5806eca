//! Cart Lines Discounts
//!
//! Emits an order subtotal discount and/or a discount on the most valuable
//! cart line, depending on which discount classes are eligible.

use tracing::debug;

use crate::{
    cart::most_valuable_line,
    classes::DiscountClass,
    discounts::{DiscountCandidate, DiscountValue, SelectionStrategy},
    functions::RunError,
    input::CartInput,
    operations::{
        DiscountOperation, DiscountsAdd, FunctionRunResult, OrderDiscountTarget,
        ProductDiscountTarget,
    },
};

/// Generate order and product discount operations for a cart.
///
/// Eligibility comes only from the discount classes: with neither `Order` nor
/// `Product` present the result is empty whatever the configuration holds.
/// When both apply, the order operation comes first.
///
/// # Errors
///
/// - [`RunError::NoCartLinesFound`]: the cart has no lines. Checked before the
///   configuration is parsed.
/// - [`RunError::InvalidConfiguration`]: the metafield value is not a JSON
///   object.
#[tracing::instrument(
    name = "cart_lines_discounts_generate_run",
    skip_all,
    fields(lines = input.cart.lines.len(), classes = ?input.discount.discount_classes)
)]
pub fn cart_lines_discounts_generate_run(
    input: &CartInput,
) -> Result<FunctionRunResult, RunError> {
    let Some(target_line) = most_valuable_line(&input.cart.lines) else {
        return Err(RunError::NoCartLinesFound);
    };

    let config = input.discount.configuration()?;

    let classes = input.discount.discount_classes;
    let has_order = classes.contains(DiscountClass::Order);
    let has_product = classes.contains(DiscountClass::Product);

    if !has_order && !has_product {
        debug!("no order or product discount class, skipping");

        return Ok(FunctionRunResult::empty());
    }

    let mut result = FunctionRunResult::empty();

    if has_order {
        let value = DiscountValue::fixed_or_percentage(
            config.order_fixed_amount(),
            config.order_percentage(),
        );

        debug!(fixed_amount = value.is_fixed_amount(), ?value, "adding order discount");

        result
            .operations
            .push(DiscountOperation::OrderDiscountsAdd(DiscountsAdd::single(
                DiscountCandidate::new(
                    config.discount_message(),
                    OrderDiscountTarget::OrderSubtotal {
                        excluded_cart_line_ids: Vec::new(),
                    },
                    value,
                ),
                SelectionStrategy::First,
            )));
    }

    if has_product {
        let value = DiscountValue::fixed_or_percentage(
            config.cart_line_fixed_amount(),
            config.product_percentage(),
        );

        debug!(
            line = %target_line.id,
            fixed_amount = value.is_fixed_amount(),
            ?value,
            "adding product discount"
        );

        result
            .operations
            .push(DiscountOperation::ProductDiscountsAdd(DiscountsAdd::single(
                DiscountCandidate::new(
                    config.discount_message(),
                    ProductDiscountTarget::CartLine {
                        id: target_line.id.clone(),
                    },
                    value,
                ),
                SelectionStrategy::First,
            )));
    }

    Ok(result)
}
