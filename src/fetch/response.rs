//! Decoding of `WebRequestResult` payloads.

use crate::domain::{FetchError, Quote};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum QuotePayload {
    // Tried first: a derived struct also accepts the sequence form, so `[]`
    // would otherwise decode as an all-default quote.
    Many(Vec<Quote>),
    Single(Quote),
}

/// Turns an HTTP status and body into a quote.
///
/// Accepts a single quote object or an array of them (the first one wins).
///
/// # Errors
///
/// - [`FetchError::Status`] for any status outside `200..=299`
/// - [`FetchError::Decode`] when the body is not a quote payload
/// - [`FetchError::EmptyList`] for an empty array
///
/// # Example
///
/// ```rust
/// use quoteboard::fetch::decode_response;
///
/// let quote = decode_response(200, br#"{"title": "T", "body": "B"}"#).unwrap();
/// assert_eq!(quote.title, "T");
/// ```
pub fn decode_response(status: u16, body: &[u8]) -> Result<Quote, FetchError> {
    if !(200..=299).contains(&status) {
        return Err(FetchError::Status(status));
    }

    let payload: QuotePayload =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    match payload {
        QuotePayload::Single(quote) => Ok(quote),
        QuotePayload::Many(quotes) => quotes.into_iter().next().ok_or(FetchError::EmptyList),
    }
}
