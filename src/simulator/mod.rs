pub mod acoustics;
pub mod flow;

pub use acoustics::Acoustics;
pub use flow::{FlowConditions, PulsatileFlowSimulator, MIN_MEAN_VELOCITY};
