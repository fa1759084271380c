use anyhow::{anyhow, Result};
use async_trait::async_trait;
use dopplersim::config::SimulatorSettings;
use dopplersim::engine::{
    ChannelObserver, EngineState, SpectrogramGenerator, StreamingEngine, TickObserver, TickReport,
};
use serde_json::json;
use std::sync::Arc;
use tokio::time::{sleep, Duration};

fn settings(display_seconds: f64, tick_interval_ms: u64) -> SimulatorSettings {
    SimulatorSettings::from_json(json!({
        "peak_systolic_velocity": 0.40,
        "end_diastolic_velocity": 0.15,
        "window_size": 300,
        "skip": 10,
        "display_seconds": display_seconds,
        "tick_interval_ms": tick_interval_ms,
        "seed": 7,
        "flow": { "prf": 9000.0 }
    }))
    .unwrap()
}

#[tokio::test]
async fn test_cursor_tracks_total_columns() {
    let mut engine = StreamingEngine::new(settings(4.0, 1000)).unwrap();
    let display = engine.display();
    assert_eq!(display.width(), 3600);
    assert_eq!(display.height(), 300);

    let mut total = 0;
    for _ in 0..50 {
        let report = engine.tick().await.unwrap();
        assert_eq!(report.columns, (report.iq_samples - 1) / 10 + 1);
        total += report.columns;
        assert_eq!(report.cursor, total % 3600);
        assert_eq!(display.cursor(), total % 3600);
    }

    // Wrapped at least once
    assert!(total > 3600);
    assert_eq!(display.columns_written(), total as u64);
    assert_eq!(engine.metrics().columns_written(), total as u64);
    assert_eq!(engine.metrics().ticks_processed(), 50);
}

#[tokio::test]
async fn test_slices_cycle_in_order() {
    let mut engine = StreamingEngine::new(settings(4.0, 1000)).unwrap();
    let slices = SpectrogramGenerator::from_settings(engine.settings())
        .unwrap()
        .slice_count();
    assert!(slices > 1);

    for i in 0..(2 * slices + 1) {
        let report = engine.tick().await.unwrap();
        assert_eq!(report.sequence_id, i as u64);
        assert_eq!(report.slice_index, i % slices);
    }
}

#[tokio::test]
async fn test_prf_change_resizes_columns_not_display() {
    let mut engine = StreamingEngine::new(settings(4.0, 1000)).unwrap();
    let params = engine.parameters();

    let before = engine.tick().await.unwrap();
    let slices = SpectrogramGenerator::from_settings(engine.settings())
        .unwrap()
        .slice_count();
    for _ in 1..slices {
        engine.tick().await.unwrap();
    }

    // Same slice again, at half the PRF
    params.set_prf(4500.0);
    let after = engine.tick().await.unwrap();
    assert_eq!(after.slice_index, before.slice_index);
    assert_eq!(after.parameters.prf, 4500.0);
    assert!(after.iq_samples < before.iq_samples);
    assert!((after.iq_samples as f64 - before.iq_samples as f64 / 2.0).abs() <= 1.0);
    assert_eq!(engine.display().width(), 3600);
}

#[tokio::test]
async fn test_invalid_parameters_skip_the_tick() {
    let mut engine = StreamingEngine::new(settings(4.0, 1000)).unwrap();
    let params = engine.parameters();

    engine.tick().await.unwrap();
    let cursor = engine.display().cursor();

    params.set_prf(0.0);
    assert!(engine.tick().await.is_err());
    assert_eq!(engine.metrics().errors_count(), 1);
    assert_eq!(engine.display().cursor(), cursor);

    // The failed tick did not consume a slice
    params.set_prf(9000.0);
    let report = engine.tick().await.unwrap();
    assert_eq!(report.slice_index, 1);
    assert_eq!(report.sequence_id, 1);
}

#[tokio::test]
async fn test_warm_up_fills_display() {
    let mut engine = StreamingEngine::new(settings(0.5, 1000)).unwrap();
    let display = engine.display();
    assert_eq!(display.width(), 450);

    let ticks = engine.warm_up().await.unwrap();
    assert!(ticks >= 1);
    assert!(display.columns_written() >= 450);
    assert_eq!(engine.metrics().ticks_processed(), ticks as u64);

    let intensities = display.intensities();
    assert_eq!(intensities.len(), 450 * 300);
    assert!(intensities.iter().all(|&v| (0.0..=1.0).contains(&v)));

    // Forward flow: brighter above the baseline than below it
    let row_mean = |row: usize| -> f32 {
        intensities[row * 450..(row + 1) * 450].iter().sum::<f32>() / 450.0
    };
    let below: f32 = (1..148).map(row_mean).sum();
    let above: f32 = (152..300).map(row_mean).sum();
    assert!(above > below, "above {} below {}", above, below);
}

#[tokio::test]
async fn test_reset_rewinds_stream() {
    let mut engine = StreamingEngine::new(settings(4.0, 1000)).unwrap();
    engine.tick().await.unwrap();
    engine.tick().await.unwrap();

    engine.reset().unwrap();
    assert_eq!(engine.display().cursor(), 0);
    assert_eq!(engine.display().columns_written(), 0);

    let report = engine.tick().await.unwrap();
    assert_eq!(report.slice_index, 0);
}

struct FailingObserver;

#[async_trait]
impl TickObserver for FailingObserver {
    async fn on_tick(&self, _report: &TickReport) -> Result<()> {
        Err(anyhow!("renderer went away"))
    }
}

#[tokio::test]
async fn test_failing_observer_does_not_fail_tick() {
    let mut engine = StreamingEngine::new(settings(4.0, 1000)).unwrap();
    let (observer, reports) = ChannelObserver::bounded(8);
    engine.add_observer(Arc::new(FailingObserver));
    engine.add_observer(Arc::new(observer));

    let report = engine.tick().await.unwrap();
    assert_eq!(reports.try_recv().unwrap().sequence_id, report.sequence_id);
    assert_eq!(engine.metrics().errors_count(), 0);
}

#[tokio::test]
async fn test_spawned_engine_streams_until_stopped() {
    let mut engine = StreamingEngine::new(settings(0.5, 10)).unwrap();
    let (observer, reports) = ChannelObserver::bounded(256);
    engine.add_observer(Arc::new(observer));
    assert_eq!(engine.state().name(), "Idle");

    let handle = engine.spawn();
    sleep(Duration::from_millis(200)).await;
    let engine = handle.stop().await.unwrap();

    match engine.state() {
        EngineState::Stopped { total_ticks, .. } => {
            assert!(*total_ticks >= 2);
            assert_eq!(*total_ticks, engine.metrics().ticks_processed());
        }
        other => panic!("expected Stopped, got {}", other.name()),
    }

    let received: Vec<TickReport> = reports.try_iter().collect();
    assert!(received.len() >= 2);
    for (i, report) in received.iter().enumerate() {
        assert_eq!(report.sequence_id, i as u64);
    }
}

#[tokio::test]
async fn test_invalid_transition_is_rejected() {
    let mut engine = StreamingEngine::new(settings(4.0, 1000)).unwrap();

    let result = engine.transition_to(EngineState::Stopped {
        duration: None,
        total_ticks: 0,
    });
    assert!(result.is_err());
    assert_eq!(engine.state().name(), "Idle");
}

#[test]
fn test_generator_frames_follow_prf() {
    let settings = settings(4.0, 1000);
    let mut generator = SpectrogramGenerator::from_settings(&settings).unwrap();
    let params = settings.flow.to_snapshot();

    let frame = generator.next_frame(&params).unwrap();
    assert_eq!(frame.sequence_id, 0);
    assert_eq!(frame.slice_index, 0);
    // ~0.1 s of trace at 9 kHz
    assert!(frame.len() > 800 && frame.len() <= 901, "{} samples", frame.len());
    assert_eq!(generator.next_slice_index(), 1);

    let slice = generator.generate_next(&params).unwrap();
    assert_eq!(slice.sequence_id, 1);
    assert_eq!(slice.spectrum.rows(), 300);
    assert_eq!(
        slice.spectrum.columns(),
        generator.analyzer().columns_for(slice.iq_samples)
    );
}
