pub mod analyzer;
pub mod config;
pub mod core;
pub mod dsp;
pub mod engine;
pub mod error;
pub mod observability;
pub mod simulator;
pub mod trace;
pub mod visualization;
