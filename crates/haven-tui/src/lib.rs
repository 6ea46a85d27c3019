//! Haven terminal client.
//!
//! The shell in [`app`] owns navigation, alert mode and the status line;
//! each screen lives in [`views`] and is mounted fresh on navigation.
//! [`runtime`] drives the shell from a crossterm terminal.

pub mod app;
pub mod cards;
pub mod config;
pub mod logging;
pub mod runtime;
pub mod telephony;
pub mod views;
