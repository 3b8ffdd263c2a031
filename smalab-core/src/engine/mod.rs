//! Trade simulation engine.

pub mod simulator;

pub use simulator::{simulate_trade, SimulatorConfig};
