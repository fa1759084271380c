use anyhow::Result;
use dopplersim::config::SimulatorSettings;
use dopplersim::engine::{ChannelObserver, StreamingEngine};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Doppler Spectrogram - Live Streaming Demo");
    println!("=========================================\n");

    let settings = SimulatorSettings::from_json(serde_json::json!({
        "tick_interval_ms": 100,
        "seed": 42
    }))?;

    let mut engine = StreamingEngine::new(settings)?;
    let (observer, reports) = ChannelObserver::bounded(64);
    engine.add_observer(Arc::new(observer));

    let handle = engine.spawn();
    let params = handle.parameters();

    // Stand-in for a UI thread: drains reports and moves the sliders.
    let ui = std::thread::spawn(move || {
        let mut received = 0u64;
        while let Ok(report) = reports.recv() {
            received += 1;
            println!(
                "tick {:>3}  slice {:>2}  {:>4} columns  scan line {:>5.1}%  {:>6.2?}{}",
                report.sequence_id,
                report.slice_index,
                report.columns,
                report.cursor_fraction * 100.0,
                report.elapsed,
                if report.velocity_over_max { "  [aliasing]" } else { "" }
            );

            match report.sequence_id {
                10 => {
                    println!("  -> arterial velocity 80 cm/s");
                    params.set_arterial_velocity(80.0);
                }
                20 => {
                    println!("  -> insonation angle 60 degrees");
                    params.set_angle_degrees(60.0);
                }
                30 => {
                    println!("  -> PRF 6 kHz");
                    params.set_prf(6000.0);
                }
                _ => {}
            }
        }
        received
    });

    tokio::time::sleep(Duration::from_secs(5)).await;

    println!("\n{}", handle.get_monitor().generate_report());
    let engine = handle.stop().await?;
    println!("Final state: {}", engine.state().name());

    // Dropping the engine drops the observer and closes the channel.
    drop(engine);
    let received = ui.join().map_err(|_| anyhow::anyhow!("UI thread panicked"))?;
    println!("UI thread received {} reports", received);

    Ok(())
}
