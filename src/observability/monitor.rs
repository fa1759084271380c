use std::sync::Arc;

use super::TickMetrics;

pub struct EngineMonitor {
    metrics: Arc<TickMetrics>,
}

impl EngineMonitor {
    pub fn new(metrics: Arc<TickMetrics>) -> Self {
        Self { metrics }
    }

    pub fn generate_report(&self) -> String {
        let m = &self.metrics;

        if m.ticks_processed() == 0 && m.errors_count() == 0 {
            return "No ticks processed".to_string();
        }

        let errors = match m.errors_count() {
            0 => "0 errors".to_string(),
            1 => "1 error".to_string(),
            n => format!("{} errors", n),
        };

        format!(
            "=== Spectrogram Stream ===\n  Ticks: {}\n  Columns: {}\n  Errors: {}\n  Overruns: {}\n  Avg Latency: {}μs\n",
            m.ticks_processed(),
            m.columns_written(),
            errors,
            m.overruns(),
            m.avg_latency_us()
        )
    }

    pub fn metrics(&self) -> &TickMetrics {
        &self.metrics
    }
}
