pub mod spectrum;

pub use spectrum::{DopplerSpectrumAnalyzer, BLANK_LEVEL, LOG_EPSILON, STABILIZING_POWER};
