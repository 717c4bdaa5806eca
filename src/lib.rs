//! Rebate
//!
//! Rebate is a merchant-configured discount engine. Given a cart snapshot and
//! the discount's stored configuration, it decides which order, product and
//! delivery discount operations the checkout should apply.

pub mod cart;
pub mod classes;
pub mod configuration;
pub mod discounts;
pub mod fixtures;
pub mod functions;
pub mod input;
pub mod operations;
pub mod prelude;
pub mod status;
