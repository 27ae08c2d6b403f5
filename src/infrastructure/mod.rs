//! Infrastructure layer for the Zellij sandbox.
//!
//! The host filesystem is mounted under `/host` inside the plugin sandbox;
//! these helpers map user-facing paths onto it.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
