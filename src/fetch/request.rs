//! Outgoing quote requests.

use crate::app::RequestId;
use std::collections::BTreeMap;

/// Context key that carries the loader ticket through the host round trip.
pub const CONTEXT_KEY: &str = "quoteboard_request";

/// A quote request ready to hand to `web_request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub request: RequestId,
}

impl FetchRequest {
    #[must_use]
    pub fn new(url: impl Into<String>, request: RequestId) -> Self {
        Self {
            url: url.into(),
            request,
        }
    }

    #[must_use]
    pub fn headers(&self) -> BTreeMap<String, String> {
        BTreeMap::from([("Accept".to_string(), "application/json".to_string())])
    }

    /// Context map echoed back by the host in `WebRequestResult`.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(CONTEXT_KEY.to_string(), self.request.0.to_string())])
    }
}

/// Recovers the loader ticket from a result's context map.
///
/// Returns `None` for results that did not originate from a [`FetchRequest`].
#[must_use]
pub fn request_from_context(context: &BTreeMap<String, String>) -> Option<RequestId> {
    context
        .get(CONTEXT_KEY)
        .and_then(|raw| raw.parse::<u64>().ok())
        .map(RequestId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_round_trips_ticket() {
        let request = FetchRequest::new("https://example.test/quote", RequestId(42));
        assert_eq!(request_from_context(&request.context()), Some(RequestId(42)));
    }

    #[test]
    fn foreign_or_garbled_context_is_rejected() {
        assert_eq!(request_from_context(&BTreeMap::new()), None);

        let garbled = BTreeMap::from([(CONTEXT_KEY.to_string(), "abc".to_string())]);
        assert_eq!(request_from_context(&garbled), None);
    }
}
