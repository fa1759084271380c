use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Counters for the streaming loop, safe to read from any thread
pub struct TickMetrics {
    ticks_processed: AtomicU64,
    errors_count: AtomicU64,
    columns_written: AtomicU64,
    overruns: AtomicU64,
    total_latency_us: AtomicU64,
    latency_samples: AtomicU64,
}

impl TickMetrics {
    pub fn new() -> Self {
        Self {
            ticks_processed: AtomicU64::new(0),
            errors_count: AtomicU64::new(0),
            columns_written: AtomicU64::new(0),
            overruns: AtomicU64::new(0),
            total_latency_us: AtomicU64::new(0),
            latency_samples: AtomicU64::new(0),
        }
    }

    pub fn ticks_processed(&self) -> u64 {
        self.ticks_processed.load(Ordering::Relaxed)
    }

    pub fn errors_count(&self) -> u64 {
        self.errors_count.load(Ordering::Relaxed)
    }

    pub fn columns_written(&self) -> u64 {
        self.columns_written.load(Ordering::Relaxed)
    }

    /// Ticks whose generation took longer than the tick interval
    pub fn overruns(&self) -> u64 {
        self.overruns.load(Ordering::Relaxed)
    }

    pub fn record_tick(&self, columns: usize) {
        self.ticks_processed.fetch_add(1, Ordering::Relaxed);
        self.columns_written
            .fetch_add(columns as u64, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_overrun(&self) {
        self.overruns.fetch_add(1, Ordering::Relaxed);
    }

    pub fn start_processing(&self) -> Instant {
        Instant::now()
    }

    pub fn finish_processing(&self, start: Instant) -> Duration {
        let elapsed = start.elapsed();
        self.total_latency_us
            .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
        self.latency_samples.fetch_add(1, Ordering::Relaxed);
        elapsed
    }

    pub fn avg_latency_us(&self) -> u64 {
        let samples = self.latency_samples.load(Ordering::Relaxed);
        if samples == 0 {
            return 0;
        }
        self.total_latency_us.load(Ordering::Relaxed) / samples
    }
}

impl Default for TickMetrics {
    fn default() -> Self {
        Self::new()
    }
}
