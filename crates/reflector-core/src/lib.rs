//! Reflector core: flattens a gateway request into case-insensitive attributes
//! and models the outcomes a handler reports back to the gateway wrapper.
//!
//! - [`attributes`] - request flattening and attribute lookup
//! - [`signal`] - success, redirect and structured-error outcomes
//! - [`exit_codes`] - exit codes shared with the wrapper

pub mod attributes;
pub mod exit_codes;
pub mod signal;

pub use attributes::{
    flatten, flatten_str, flatten_with_limits, fold_case, AttributeStore, DecodeError, FlattenLimits,
};
pub use signal::{ErrorResponse, Outcome};
