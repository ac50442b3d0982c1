pub mod driver;

pub use driver::Command;
pub use driver::SimulationDriver;
