pub mod metrics;
pub mod monitor;

pub use metrics::TickMetrics;
pub use monitor::EngineMonitor;
