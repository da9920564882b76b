//! UI state machines.
//!
//! Components keep these inside signals and drive them from event handlers
//! and scoped tasks. Keeping the transitions here makes them testable
//! without a browser.
//!
//! - [`upload`] - Drop zone, progress simulation and result
//! - [`history`] - Loading/loaded history and its aggregates
//! - [`tabs`] - Page shell view selector

pub mod upload;
pub mod history;
pub mod tabs;

pub use upload::*;
pub use history::*;
pub use tabs::*;
