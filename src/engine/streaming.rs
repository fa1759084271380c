use anyhow::{anyhow, Context, Result};
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::generator::SpectrogramGenerator;
use super::observer::{TickObserver, TickReport};
use super::state::EngineState;
use crate::config::{FlowParameters, SimulatorSettings};
use crate::observability::{EngineMonitor, TickMetrics};
use crate::visualization::{SpectrogramDisplay, SpectrogramRingBuffer};

/// Drives the simulate -> analyze -> display loop on a fixed tick.
///
/// Each tick snapshots the shared [`FlowParameters`], generates one slice on
/// the blocking pool and appends its columns to the display. The generator
/// is moved into the worker and handed back with the result, so a tick can
/// never start before the previous one has finished.
pub struct StreamingEngine {
    settings: SimulatorSettings,
    params: Arc<FlowParameters>,
    generator: Option<SpectrogramGenerator>,
    display: SpectrogramDisplay,
    observers: Vec<Arc<dyn TickObserver>>,
    metrics: Arc<TickMetrics>,
    state: EngineState,
}

impl StreamingEngine {
    pub fn new(settings: SimulatorSettings) -> Result<Self> {
        settings.validate()?;

        let generator = SpectrogramGenerator::from_settings(&settings)?;
        let buffer = SpectrogramRingBuffer::new(settings.display_width(), settings.window_size)?;
        let params = Arc::new(FlowParameters::new(settings.flow.to_snapshot()));

        info!(
            "Spectrogram {}x{} ({}s at {} Hz PRF), {} slices per cycle",
            buffer.width(),
            buffer.height(),
            settings.display_seconds,
            settings.flow.prf,
            generator.slice_count()
        );

        Ok(Self {
            settings,
            params,
            generator: Some(generator),
            display: SpectrogramDisplay::new(buffer),
            observers: Vec::new(),
            metrics: Arc::new(TickMetrics::new()),
            state: EngineState::Idle,
        })
    }

    pub fn settings(&self) -> &SimulatorSettings {
        &self.settings
    }

    /// Shared control surface; setters take effect on the next tick
    pub fn parameters(&self) -> Arc<FlowParameters> {
        self.params.clone()
    }

    pub fn display(&self) -> SpectrogramDisplay {
        self.display.clone()
    }

    pub fn metrics(&self) -> Arc<TickMetrics> {
        self.metrics.clone()
    }

    pub fn get_monitor(&self) -> EngineMonitor {
        EngineMonitor::new(self.metrics.clone())
    }

    pub fn add_observer(&mut self, observer: Arc<dyn TickObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Transition to a new state with validation
    pub fn transition_to(&mut self, new_state: EngineState) -> Result<()> {
        if !self.state.can_transition_to(&new_state) {
            return Err(anyhow!(
                "Invalid state transition: {} -> {}",
                self.state.name(),
                new_state.name()
            ));
        }
        debug!("Engine state {} -> {}", self.state.name(), new_state.name());
        self.state = new_state;
        Ok(())
    }

    /// Blank the display and start again from the beginning of the cycle
    pub fn reset(&mut self) -> Result<()> {
        if self.state.is_running() {
            return Err(anyhow!("Cannot reset a running engine"));
        }
        let generator = self
            .generator
            .as_mut()
            .ok_or_else(|| anyhow!("Spectrogram generator was lost by an earlier tick"))?;
        generator.reset();
        self.display.clear();
        if matches!(self.state, EngineState::Error { recoverable: true, .. }) {
            self.transition_to(EngineState::Idle)?;
        }
        Ok(())
    }

    /// Run one tick immediately, outside the timer
    pub async fn tick(&mut self) -> Result<TickReport> {
        match self.process_tick().await {
            Ok(report) => Ok(report),
            Err(e) => {
                self.metrics.record_error();
                Err(e)
            }
        }
    }

    async fn process_tick(&mut self) -> Result<TickReport> {
        let params = self.params.snapshot();
        let mut generator = self
            .generator
            .take()
            .ok_or_else(|| anyhow!("Spectrogram generator was lost by an earlier tick"))?;

        let start = self.metrics.start_processing();
        let (generator, generated) = tokio::task::spawn_blocking(move || {
            let generated = generator.generate_next(&params);
            (generator, generated)
        })
        .await
        .context("Slice generation worker panicked")?;
        self.generator = Some(generator);

        let mut generated = generated.context("Slice generation failed")?;

        let range = self.settings.display_range;
        generated.spectrum.map_in_place(|db| range.normalize(db));
        let columns = generated.spectrum.columns();
        let cursor = self.display.apply(&generated.spectrum)?;

        let elapsed = self.metrics.finish_processing(start);
        self.metrics.record_tick(columns);
        if elapsed > self.settings.tick_interval() {
            self.metrics.record_overrun();
            warn!(
                "Tick {} took {:?}, longer than the {:?} interval",
                generated.sequence_id,
                elapsed,
                self.settings.tick_interval()
            );
        }

        if let EngineState::Running { ticks_processed, .. } = &mut self.state {
            *ticks_processed += 1;
        }

        let report = TickReport {
            sequence_id: generated.sequence_id,
            slice_index: generated.slice_index,
            iq_samples: generated.iq_samples,
            columns,
            cursor,
            cursor_fraction: cursor as f64 / self.display.width() as f64,
            elapsed,
            parameters: params,
            velocity_over_max: params.is_velocity_over_max(&self.settings.acoustics),
        };

        for observer in &self.observers {
            if let Err(e) = observer.on_tick(&report).await {
                warn!("Tick observer failed: {:#}", e);
            }
        }

        Ok(report)
    }

    /// Tick back-to-back until the display has been filled once.
    ///
    /// Returns the number of ticks it took.
    pub async fn warm_up(&mut self) -> Result<usize> {
        let target = self.display.columns_written() + self.display.width() as u64;
        let mut ticks = 0;
        while self.display.columns_written() < target {
            self.tick().await?;
            ticks += 1;
        }
        info!("Display filled after {} ticks", ticks);
        Ok(ticks)
    }

    /// Tick on the configured interval until `shutdown` fires.
    ///
    /// A failed tick is logged and the loop carries on with the next one.
    /// Only losing the generator ends the loop with an error.
    pub async fn run(&mut self, mut shutdown: broadcast::Receiver<()>) -> Result<()> {
        self.transition_to(EngineState::Running {
            start_time: Some(Instant::now()),
            ticks_processed: 0,
        })?;
        info!("Streaming every {:?}", self.settings.tick_interval());

        let mut interval = tokio::time::interval(self.settings.tick_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    info!("Streaming engine received shutdown signal");
                    break;
                }
                _ = interval.tick() => {
                    if let Err(e) = self.tick().await {
                        error!("Tick failed: {:#}", e);
                        if self.generator.is_none() {
                            self.transition_to(EngineState::Error {
                                error_msg: format!("{:#}", e),
                                recoverable: false,
                            })?;
                            return Err(e);
                        }
                    }
                }
            }
        }

        if let EngineState::Running { start_time, ticks_processed } = self.state {
            self.transition_to(EngineState::Stopped {
                duration: start_time.map(|t| t.elapsed()),
                total_ticks: ticks_processed,
            })?;
        }
        Ok(())
    }

    /// Move the engine onto the runtime and return a handle to control it
    pub fn spawn(self) -> EngineHandle {
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let params = self.parameters();
        let display = self.display();
        let metrics = self.metrics();

        let join = tokio::spawn(async move {
            let mut engine = self;
            engine.run(shutdown_rx).await?;
            Ok(engine)
        });

        EngineHandle {
            shutdown_tx,
            join,
            params,
            display,
            metrics,
        }
    }
}

/// Control side of a spawned [`StreamingEngine`]
pub struct EngineHandle {
    shutdown_tx: broadcast::Sender<()>,
    join: JoinHandle<Result<StreamingEngine>>,
    params: Arc<FlowParameters>,
    display: SpectrogramDisplay,
    metrics: Arc<TickMetrics>,
}

impl EngineHandle {
    pub fn parameters(&self) -> Arc<FlowParameters> {
        self.params.clone()
    }

    pub fn display(&self) -> SpectrogramDisplay {
        self.display.clone()
    }

    pub fn get_monitor(&self) -> EngineMonitor {
        EngineMonitor::new(self.metrics.clone())
    }

    /// Signal shutdown and wait for the loop to exit, getting the engine back
    pub async fn stop(self) -> Result<StreamingEngine> {
        // The loop may already have exited on its own.
        let _ = self.shutdown_tx.send(());
        self.join.await.context("Streaming task panicked")?
    }
}
