//! Terminal output formatting
//!
//! Display utilities for the plain CLI modes plus the palette and keyboard
//! layout shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::{
    print_grid, print_keyboard, print_pack_list, print_simulation_result, print_status,
};
