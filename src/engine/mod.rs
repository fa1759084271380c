pub mod generator;
pub mod observer;
pub mod state;
pub mod streaming;

pub use generator::{GeneratedSlice, SpectrogramGenerator};
pub use observer::{ChannelObserver, TickObserver, TickReport};
pub use state::EngineState;
pub use streaming::{EngineHandle, StreamingEngine};
