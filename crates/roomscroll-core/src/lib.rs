//! Navigation engine for a scrollytelling page: an arrival view, a sequence
//! of room panels scrolled horizontally (desktop) or vertically (mobile), a
//! HUD and a deep-linkable URL fragment, kept consistent with each other.
//!
//! Nothing in this crate touches browser APIs; the web frontend measures the
//! page through [`Viewport`] and applies the returned [`Effect`]s.

pub mod animator;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod panels;
pub mod visibility;

pub use animator::*;
pub use config::*;
pub use constants::*;
pub use coordinator::*;
pub use error::*;
pub use geometry::*;
pub use layout::*;
pub use panels::*;
pub use visibility::*;
