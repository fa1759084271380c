pub mod reference;
pub mod slicer;
pub mod velocity;

pub use slicer::{SliceCursor, TimeSlice, TimeSlicer};
pub use velocity::VelocityTrace;
