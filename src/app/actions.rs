//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It returns a
//! `Vec<Action>` and the plugin shim in `main.rs` maps each action onto a
//! host call, which keeps the handler testable without a running Zellij.
//!
//! # Example
//!
//! ```rust
//! use quoteboard::app::{Action, RequestId};
//! use quoteboard::fetch::FetchRequest;
//! use std::time::Duration;
//!
//! let actions = vec![
//!     Action::FetchQuote(FetchRequest::new("https://example.test/quote", RequestId(1))),
//!     Action::ArmTimer { delay: Duration::from_millis(1500) },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::fetch::FetchRequest;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issues an HTTP request through the host.
    ///
    /// The result comes back as a `WebRequestResult` event whose context
    /// carries the request ticket.
    FetchQuote(FetchRequest),

    /// Asks the host for a `Timer` event after `delay`.
    ///
    /// Host timers cannot be cancelled; the tick is checked against the
    /// timer queue when it arrives.
    ArmTimer {
        /// Delay before the host delivers the tick.
        delay: Duration,
    },

    /// Closes the plugin pane.
    CloseSelf,
}
