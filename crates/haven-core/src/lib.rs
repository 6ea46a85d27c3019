//! haven-core: in-memory domain state for the Haven safety companion.
//!
//! Every screen's state lives here as a plain struct with reducer-style
//! operations, so the shell and views in `haven-tui` stay thin and all
//! mutation logic is testable without a terminal.

pub mod error;
pub mod feed;
pub mod guides;
pub mod handles;
pub mod navigation;
pub mod safety;
pub mod settings;
pub mod vault;

pub use error::ParseError;
