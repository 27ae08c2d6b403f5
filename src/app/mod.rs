//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! Host event → Event → handle_event → state transitions → Actions → host calls
//!                          ↑                                     ↓
//!                          └──── WebRequestResult / Timer ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`clock`]: Injected time source (`MonotonicClock`, `ManualClock`)
//! - [`handler`]: Event processing and state transitions
//! - [`loader`]: Fetch state machine (`ContentLoader`)
//! - [`notice`]: Edge-triggered success banner (`TransientNotice`)
//! - [`state`]: Central state container and view model computation
//! - [`timer`]: Cancellable deadlines

pub mod actions;
pub mod clock;
pub mod handler;
pub mod loader;
pub mod notice;
pub mod state;
pub mod timer;

pub use actions::Action;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use handler::{handle_event, Event};
pub use loader::{ContentLoader, LoadState, RequestId};
pub use notice::{TransientNotice, Visibility, DEFAULT_NOTICE_DURATION};
pub use state::AppState;
pub use timer::{TimerId, TimerQueue};
