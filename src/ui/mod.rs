//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`status`]: Priority-ordered choice of what the status area shows
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor, centering and word wrapping utilities
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod status;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use status::{status_view, StatusView};
pub use theme::Theme;
pub use viewmodel::{FooterInfo, HeaderInfo, NoticeInfo, UIViewModel};
