pub mod frame;
pub mod spectrum;

pub use frame::{IqFrame, IqSample};
pub use spectrum::SpectrumSlice;
