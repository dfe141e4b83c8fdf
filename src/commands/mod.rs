//! Command implementations

pub mod show;
pub mod simple;
pub mod simulate;

pub use show::{find_pack, show_pack};
pub use simple::run_simple;
pub use simulate::{PackStatistics, SimulationConfig, SimulationResult, run_simulation};
