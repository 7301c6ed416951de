//! Terminal catalog browser.
//!
//! The URL is kept in an in-memory history; the canonical query string is
//! shown in the status bar and can be passed back on the command line.

pub mod app;
pub mod events;
pub mod layout;
pub mod theme;
pub mod views;
