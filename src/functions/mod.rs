//! Discount Functions
//!
//! Entry points invoked by the checkout runtime. Each run is a pure function
//! of its input document.

use thiserror::Error;

use crate::configuration::ConfigurationError;

pub mod cart_lines;
pub mod delivery_options;

pub use cart_lines::cart_lines_discounts_generate_run;
pub use delivery_options::cart_delivery_options_discounts_generate_run;

/// Errors that abort a function run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The cart-lines function was given a cart without lines.
    #[error("No cart lines found")]
    NoCartLinesFound,

    /// The delivery function was given a cart without delivery groups.
    #[error("No delivery groups found")]
    NoDeliveryGroupsFound,

    /// The stored configuration could not be parsed.
    #[error("Invalid discount configuration")]
    InvalidConfiguration(#[from] ConfigurationError),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::configuration::DiscountConfiguration;

    #[test]
    fn invalid_configuration_keeps_its_source() {
        let Err(source) = DiscountConfiguration::parse("[]") else {
            unreachable!("a JSON array is never a configuration")
        };

        let error = RunError::from(source);

        assert_eq!(error.to_string(), "Invalid discount configuration");
        assert!(error.source().is_some());
    }

    #[test]
    fn error_messages() {
        assert_eq!(RunError::NoCartLinesFound.to_string(), "No cart lines found");
        assert_eq!(
            RunError::NoDeliveryGroupsFound.to_string(),
            "No delivery groups found"
        );
    }
}
