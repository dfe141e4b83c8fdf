//! Interactive terminal UI
//!
//! A ratatui front end: the ladder grid, an on-screen keyboard, counters and
//! a short message log.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
