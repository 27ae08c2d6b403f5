//! HTTP plumbing between the loader and Zellij's `web_request` API.
//!
//! The host performs the request asynchronously and reports back with a
//! `WebRequestResult` event. This module builds the outgoing request (tagging
//! it with the loader's ticket) and turns the raw result back into a quote or
//! a [`FetchError`](crate::domain::FetchError).
//!
//! - `request`: outgoing request description and context tagging
//! - `response`: status and body decoding

pub mod request;
pub mod response;

pub use request::{request_from_context, FetchRequest, CONTEXT_KEY};
pub use response::decode_response;
