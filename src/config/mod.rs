pub mod params;
pub mod settings;

pub use params::{AtomicF64, FlowParameters, FlowSnapshot};
pub use settings::{DisplayRange, FlowSettings, SimulatorSettings};
