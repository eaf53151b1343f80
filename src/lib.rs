pub mod error;
pub mod net;
pub mod queue;
pub mod report;
pub mod sim;
pub mod topo;

pub use error::{Error, Result};
pub use sim::{NetworkConfig, SimOutcome, Simulation, Termination, simulate};

#[cfg(test)]
mod test;
