use dopplersim::observability::{EngineMonitor, TickMetrics};
use std::sync::Arc;

#[test]
fn test_metrics_creation() {
    let metrics = TickMetrics::new();
    assert_eq!(metrics.ticks_processed(), 0);
    assert_eq!(metrics.errors_count(), 0);
    assert_eq!(metrics.columns_written(), 0);
    assert_eq!(metrics.avg_latency_us(), 0);
}

#[test]
fn test_metrics_increment() {
    let metrics = Arc::new(TickMetrics::new());

    metrics.record_tick(130);
    metrics.record_tick(90);
    assert_eq!(metrics.ticks_processed(), 2);
    assert_eq!(metrics.columns_written(), 220);

    metrics.record_error();
    metrics.record_overrun();
    assert_eq!(metrics.errors_count(), 1);
    assert_eq!(metrics.overruns(), 1);
}

#[tokio::test]
async fn test_metrics_latency_tracking() {
    let metrics = TickMetrics::new();

    let start = metrics.start_processing();
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    let elapsed = metrics.finish_processing(start);

    assert!(elapsed.as_millis() >= 10);
    assert!(metrics.avg_latency_us() >= 10_000); // At least 10ms in microseconds
}

#[test]
fn test_monitor_report() {
    let metrics = Arc::new(TickMetrics::new());
    let monitor = EngineMonitor::new(metrics.clone());
    assert_eq!(monitor.generate_report(), "No ticks processed");

    metrics.record_tick(130);
    metrics.record_tick(130);
    metrics.record_error();

    let report = monitor.generate_report();
    assert!(report.contains("Ticks: 2"));
    assert!(report.contains("Columns: 260"));
    assert!(report.contains("1 error"));
    assert_eq!(monitor.metrics().ticks_processed(), 2);
}
