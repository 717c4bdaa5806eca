//! Discount Configuration
//!
//! Merchant settings stored as a JSON string in the discount's metafield.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Errors raised while parsing a discount configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The string is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The string is valid JSON but not an object.
    #[error("discount configuration must be a JSON object")]
    NotAnObject,
}

/// Parsed discount configuration.
///
/// Every field is optional. A field that is absent, `null` or of the wrong
/// type reads as unset, and numeric fields that are unset read as zero
/// through the accessor methods. Numbers outside the [`Decimal`] range are
/// unset too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscountConfiguration {
    /// Fixed amount off the order subtotal.
    #[serde(deserialize_with = "lenient")]
    pub order_fixed_amount: Option<Decimal>,

    /// Percentage off the order subtotal.
    #[serde(deserialize_with = "lenient")]
    pub order_percentage: Option<Decimal>,

    /// Fixed amount off the selected cart line.
    #[serde(deserialize_with = "lenient")]
    pub cart_line_fixed_amount: Option<Decimal>,

    /// Percentage off the selected cart line.
    #[serde(deserialize_with = "lenient")]
    pub product_percentage: Option<Decimal>,

    /// Key the admin app writes the product percentage under. Only read when
    /// `productPercentage` is absent.
    #[serde(deserialize_with = "lenient")]
    pub cart_line_percentage: Option<Decimal>,

    /// Fixed amount off the first delivery group.
    #[serde(deserialize_with = "lenient")]
    pub delivery_fixed_amount: Option<Decimal>,

    /// Percentage off the first delivery group.
    #[serde(deserialize_with = "lenient")]
    pub delivery_percentage: Option<Decimal>,

    /// Message shown alongside every emitted discount.
    #[serde(deserialize_with = "lenient")]
    pub discount_message: Option<String>,

    /// Collections the discount is restricted to. Eligibility filtering
    /// happens upstream; the functions never read this.
    #[serde(deserialize_with = "lenient")]
    pub collection_ids: Option<Vec<String>>,
}

/// Read a field, treating a value of the wrong type as unset.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;

    if value.is_null() {
        return Ok(None);
    }

    match T::deserialize(&value) {
        Ok(field) => Ok(Some(field)),
        Err(error) => {
            warn!(%value, %error, "ignoring unreadable configuration value");

            Ok(None)
        }
    }
}

impl DiscountConfiguration {
    /// Parse a configuration from its raw metafield value.
    ///
    /// An empty string is treated as `{}`. Unrecognized fields are ignored,
    /// and so are recognized fields holding unreadable values.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::Json`]: the string is not valid JSON.
    /// - [`ConfigurationError::NotAnObject`]: the JSON value is not an object.
    pub fn parse(raw: &str) -> Result<Self, ConfigurationError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_str(raw)?;

        if !value.is_object() {
            return Err(ConfigurationError::NotAnObject);
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Fixed amount off the order, zero when unset.
    pub fn order_fixed_amount(&self) -> Decimal {
        self.order_fixed_amount.unwrap_or_default()
    }

    /// Percentage off the order, zero when unset.
    pub fn order_percentage(&self) -> Decimal {
        self.order_percentage.unwrap_or_default()
    }

    /// Fixed amount off a cart line, zero when unset.
    pub fn cart_line_fixed_amount(&self) -> Decimal {
        self.cart_line_fixed_amount.unwrap_or_default()
    }

    /// Percentage off a cart line, zero when unset.
    pub fn product_percentage(&self) -> Decimal {
        self.product_percentage
            .or(self.cart_line_percentage)
            .unwrap_or_default()
    }

    /// Fixed amount off delivery, zero when unset.
    pub fn delivery_fixed_amount(&self) -> Decimal {
        self.delivery_fixed_amount.unwrap_or_default()
    }

    /// Percentage off delivery, zero when unset.
    pub fn delivery_percentage(&self) -> Decimal {
        self.delivery_percentage.unwrap_or_default()
    }

    /// Message for emitted discounts, if one is configured.
    pub fn discount_message(&self) -> Option<&str> {
        self.discount_message.as_deref()
    }

    /// Collections the discount is restricted to, empty when unset.
    pub fn collection_ids(&self) -> &[String] {
        self.collection_ids.as_deref().unwrap_or_default()
    }
}
