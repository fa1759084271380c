use anyhow::Result;
use dopplersim::config::SimulatorSettings;
use dopplersim::engine::StreamingEngine;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Doppler Spectrogram - Offline Render");
    println!("====================================\n");

    let settings = SimulatorSettings::from_json(serde_json::json!({
        "peak_systolic_velocity": 0.40,
        "end_diastolic_velocity": 0.15,
        "window_size": 300,
        "skip": 10,
        "seed": 7,
        "flow": {
            "arterial_velocity": 40.0,
            "angle_degrees": 45.0,
            "prf": 13000.0
        }
    }))?;

    let mut engine = StreamingEngine::new(settings)?;
    let display = engine.display();

    println!(
        "Filling a {}x{} display...",
        display.width(),
        display.height()
    );
    let ticks = engine.warm_up().await?;
    println!("Done after {} ticks\n", ticks);

    println!("{}", engine.get_monitor().generate_report());

    let params = engine.parameters().snapshot();
    let nyquist = params.nyquist_velocity(&engine.settings().acoustics);
    println!("Velocity axis (Nyquist {:.3} m/s):", nyquist);
    for tick in display.velocity_axis(nyquist, 2) {
        println!("  row {:>4}: {:+.3} m/s", tick.row, tick.velocity);
    }

    let path = std::env::temp_dir().join("dopplersim.png");
    std::fs::write(&path, display.encode_png()?)?;
    println!("\nSpectrogram written to {}", path.display());

    Ok(())
}
