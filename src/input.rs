//! Function Inputs

use serde::{Deserialize, Serialize};

use crate::{
    cart::{CartLine, DeliveryGroup},
    classes::DiscountClasses,
    configuration::{ConfigurationError, DiscountConfiguration},
};

/// Metafield holding the raw discount configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metafield {
    /// JSON-encoded configuration.
    pub value: String,
}

/// The discount being evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    /// Classes the discount may currently apply to.
    #[serde(default)]
    pub discount_classes: DiscountClasses,

    /// Stored configuration, if any.
    #[serde(default)]
    pub metafield: Option<Metafield>,
}

impl Discount {
    /// Create a discount with the given classes and raw configuration.
    pub fn new(discount_classes: impl Into<DiscountClasses>, configuration: &str) -> Self {
        Self {
            discount_classes: discount_classes.into(),
            metafield: Some(Metafield {
                value: configuration.to_string(),
            }),
        }
    }

    /// Raw configuration string; empty when there is no metafield.
    pub fn raw_configuration(&self) -> &str {
        self.metafield
            .as_ref()
            .map_or("", |metafield| metafield.value.as_str())
    }

    /// Parse the stored configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the metafield value is not a JSON object.
    pub fn configuration(&self) -> Result<DiscountConfiguration, ConfigurationError> {
        DiscountConfiguration::parse(self.raw_configuration())
    }
}

/// Cart contents visible to the cart-lines function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Line items, in cart order.
    pub lines: Vec<CartLine>,
}

/// Input of the cart-lines discount function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartInput {
    /// The cart.
    pub cart: Cart,

    /// The discount.
    pub discount: Discount,
}

/// Cart contents visible to the delivery-options function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCart {
    /// Delivery groups, in cart order.
    pub delivery_groups: Vec<DeliveryGroup>,
}

/// Input of the delivery-options discount function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryInput {
    /// The cart.
    pub cart: DeliveryCart,

    /// The discount.
    pub discount: Discount,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::classes::DiscountClass;

    #[test]
    fn missing_metafield_reads_as_empty() -> TestResult {
        let discount: Discount = serde_json::from_str(r#"{"discountClasses": [], "metafield": null}"#)?;

        assert_eq!(discount.raw_configuration(), "");
        assert_eq!(discount.configuration()?, DiscountConfiguration::default());

        Ok(())
    }

    #[test]
    fn cart_input_deserializes() -> TestResult {
        let input: CartInput = serde_json::from_str(
            r#"{
                "cart": {
                    "lines": [
                        {"id": "gid://shopify/CartLine/0", "cost": {"subtotalAmount": {"amount": 100}}}
                    ]
                },
                "discount": {
                    "discountClasses": ["ORDER"],
                    "metafield": {"value": "{\"orderPercentage\": 10}"}
                }
            }"#,
        )?;

        assert_eq!(input.cart.lines.len(), 1);
        assert!(input.discount.discount_classes.contains(DiscountClass::Order));
        assert_eq!(input.discount.raw_configuration(), r#"{"orderPercentage": 10}"#);

        Ok(())
    }

    #[test]
    fn delivery_input_deserializes() -> TestResult {
        let input: DeliveryInput = serde_json::from_str(
            r#"{
                "cart": {"deliveryGroups": [{"id": "gid://shopify/CartDeliveryGroup/0"}]},
                "discount": {"discountClasses": ["SHIPPING"]}
            }"#,
        )?;

        assert_eq!(input.cart.delivery_groups.len(), 1);
        assert!(input.discount.discount_classes.contains(DiscountClass::Shipping));
        assert_eq!(input.discount.metafield, None);

        Ok(())
    }
}
