//! Delivery Options Discounts
//!
//! Emits a single discount on the first delivery group.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    classes::DiscountClass,
    discounts::{DiscountCandidate, DiscountValue, SelectionStrategy},
    functions::RunError,
    input::DeliveryInput,
    operations::{DeliveryDiscountTarget, DiscountOperation, DiscountsAdd, FunctionRunResult},
};

/// Generate a delivery discount operation for the first delivery group.
///
/// The operation is emitted when the `Shipping` class is present *or* the
/// configuration carries a positive delivery amount or percentage. Unlike the
/// cart-lines function, configuration alone is enough to qualify.
///
/// # Errors
///
/// - [`RunError::NoDeliveryGroupsFound`]: the cart has no delivery groups.
/// - [`RunError::InvalidConfiguration`]: the metafield value is not a JSON
///   object. Unreadable fields inside an object read as unset instead.
#[tracing::instrument(
    name = "cart_delivery_options_discounts_generate_run",
    skip_all,
    fields(
        delivery_groups = input.cart.delivery_groups.len(),
        classes = ?input.discount.discount_classes
    )
)]
pub fn cart_delivery_options_discounts_generate_run(
    input: &DeliveryInput,
) -> Result<FunctionRunResult, RunError> {
    let first_group = input
        .cart
        .delivery_groups
        .first()
        .ok_or(RunError::NoDeliveryGroupsFound)?;

    let has_shipping = input
        .discount
        .discount_classes
        .contains(DiscountClass::Shipping);

    let config = input.discount.configuration()?;

    let fixed_amount = config.delivery_fixed_amount();
    let percentage = config.delivery_percentage();
    let has_valid_configuration = fixed_amount > Decimal::ZERO || percentage > Decimal::ZERO;

    if !has_shipping && !has_valid_configuration {
        debug!("no shipping discount class or delivery value, skipping");

        return Ok(FunctionRunResult::empty());
    }

    let value = DiscountValue::fixed_or_percentage(fixed_amount, percentage);

    debug!(
        delivery_group = %first_group.id,
        fixed_amount = value.is_fixed_amount(),
        ?value,
        "adding delivery discount"
    );

    let operation = DiscountOperation::DeliveryDiscountsAdd(DiscountsAdd::single(
        DiscountCandidate::new(
            config.discount_message(),
            DeliveryDiscountTarget::DeliveryGroup {
                id: first_group.id.clone(),
            },
            value,
        ),
        SelectionStrategy::All,
    ));

    Ok(std::iter::once(operation).collect())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{
        cart::DeliveryGroup,
        classes::DiscountClasses,
        configuration::ConfigurationError,
        input::{DeliveryCart, Discount},
    };

    fn input(classes: impl Into<DiscountClasses>, configuration: &str) -> DeliveryInput {
        DeliveryInput {
            cart: DeliveryCart {
                delivery_groups: vec![
                    DeliveryGroup::new("gid://shopify/CartDeliveryGroup/0"),
                    DeliveryGroup::new("gid://shopify/CartDeliveryGroup/1"),
                ],
            },
            discount: Discount::new(classes, configuration),
        }
    }

    fn delivery_operation(message: Option<&str>, value: DiscountValue) -> DiscountOperation {
        DiscountOperation::DeliveryDiscountsAdd(DiscountsAdd::single(
            DiscountCandidate::new(
                message,
                DeliveryDiscountTarget::DeliveryGroup {
                    id: "gid://shopify/CartDeliveryGroup/0".into(),
                },
                value,
            ),
            SelectionStrategy::All,
        ))
    }

    #[test]
    fn no_class_and_empty_configuration_yields_nothing() -> TestResult {
        let result = cart_delivery_options_discounts_generate_run(&input(
            DiscountClasses::empty(),
            "{}",
        ))?;

        assert!(result.is_empty());

        Ok(())
    }

    #[test]
    fn zero_valued_configuration_without_class_yields_nothing() -> TestResult {
        let result = cart_delivery_options_discounts_generate_run(&input(
            [DiscountClass::Order, DiscountClass::Product],
            r#"{"deliveryFixedAmount": 0, "deliveryPercentage": 0, "discountMessage": "Nothing"}"#,
        ))?;

        assert!(result.is_empty());

        Ok(())
    }

    #[test]
    fn positive_percentage_qualifies_without_class() -> TestResult {
        let result = cart_delivery_options_discounts_generate_run(&input(
            DiscountClasses::empty(),
            r#"{"deliveryFixedAmount": 0, "deliveryPercentage": 10, "discountMessage": "10% off delivery"}"#,
        ))?;

        assert_eq!(
            result.operations.as_slice(),
            &[delivery_operation(
                Some("10% off delivery"),
                DiscountValue::Percentage {
                    value: Decimal::from(10)
                },
            )]
        );

        Ok(())
    }

    #[test]
    fn positive_fixed_amount_wins() -> TestResult {
        let result = cart_delivery_options_discounts_generate_run(&input(
            DiscountClasses::empty(),
            r#"{"deliveryFixedAmount": 500, "deliveryPercentage": 10, "discountMessage": "$5 off delivery"}"#,
        ))?;

        assert_eq!(
            result.operations.as_slice(),
            &[delivery_operation(
                Some("$5 off delivery"),
                DiscountValue::FixedAmount {
                    amount: Decimal::from(500)
                },
            )]
        );

        Ok(())
    }

    #[test]
    fn shipping_class_with_empty_configuration_emits_zero_percentage() -> TestResult {
        let result = cart_delivery_options_discounts_generate_run(&input(
            [DiscountClass::Shipping],
            "{}",
        ))?;

        assert_eq!(
            result.operations.as_slice(),
            &[delivery_operation(
                None,
                DiscountValue::Percentage {
                    value: Decimal::ZERO
                },
            )]
        );

        Ok(())
    }

    #[test]
    fn unreadable_fields_do_not_fail_the_run() -> TestResult {
        let result = cart_delivery_options_discounts_generate_run(&input(
            [DiscountClass::Shipping],
            r#"{"deliveryPercentage": 10, "collectionIds": null, "discountMessage": 5}"#,
        ))?;

        assert_eq!(
            result.operations.as_slice(),
            &[delivery_operation(
                None,
                DiscountValue::Percentage {
                    value: Decimal::from(10)
                },
            )]
        );

        Ok(())
    }

    #[test]
    fn empty_delivery_groups_fail() {
        let input = DeliveryInput {
            cart: DeliveryCart::default(),
            discount: Discount::new([DiscountClass::Shipping], "{}"),
        };

        let result = cart_delivery_options_discounts_generate_run(&input);

        assert!(matches!(result, Err(RunError::NoDeliveryGroupsFound)));
    }

    #[test]
    fn invalid_configuration_fails_with_shipping_class() {
        let result = cart_delivery_options_discounts_generate_run(&input(
            [DiscountClass::Shipping],
            "invalid json",
        ));

        assert!(matches!(
            result,
            Err(RunError::InvalidConfiguration(ConfigurationError::Json(_)))
        ));
    }

    #[test]
    fn non_object_configuration_fails() {
        let result =
            cart_delivery_options_discounts_generate_run(&input(DiscountClasses::empty(), "null"));

        assert!(matches!(
            result,
            Err(RunError::InvalidConfiguration(ConfigurationError::NotAnObject))
        ));
    }
}
