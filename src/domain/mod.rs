//! Domain layer for the Quoteboard plugin.
//!
//! Holds the quote payload and the error types, independent of Zellij APIs.
//!
//! - [`error`]: Error types and result aliases
//! - [`quote`]: Quote payload and emptiness rule

pub mod error;
pub mod quote;

pub use error::{FetchError, QuoteboardError, Result};
pub use quote::Quote;
