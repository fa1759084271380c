pub mod display;
pub mod export;
pub mod ring_buffer;

pub use display::{AxisTick, SpectrogramDisplay};
pub use export::encode_png;
pub use ring_buffer::SpectrogramRingBuffer;
