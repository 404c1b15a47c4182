//! This crate contains all shared UI for the workspace.

mod layout;
pub use layout::Layout;

mod session;
pub use session::*;

mod components;
pub use components::*;
