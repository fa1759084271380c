use log::debug;

use crate::analyzer::DopplerSpectrumAnalyzer;
use crate::config::{FlowSnapshot, SimulatorSettings};
use crate::core::{IqFrame, SpectrumSlice};
use crate::error::ConfigError;
use crate::simulator::{Acoustics, FlowConditions, PulsatileFlowSimulator};
use crate::trace::{SliceCursor, TimeSlicer, VelocityTrace};

/// Output of one generation step
#[derive(Debug, Clone)]
pub struct GeneratedSlice {
    pub sequence_id: u64,
    pub slice_index: usize,
    pub iq_samples: usize,
    pub spectrum: SpectrumSlice,
}

/// Everything a tick's worker needs: trace, slice position, simulator and
/// the analyzer with its persisted tail.
///
/// Owned by exactly one tick at a time, which keeps ticks in order.
pub struct SpectrogramGenerator {
    trace: VelocityTrace,
    cursor: SliceCursor,
    simulator: PulsatileFlowSimulator,
    analyzer: DopplerSpectrumAnalyzer,
    acoustics: Acoustics,
    snr_db: f64,
    next_sequence: u64,
}

impl SpectrogramGenerator {
    pub fn from_settings(settings: &SimulatorSettings) -> Result<Self, ConfigError> {
        let trace = VelocityTrace::build(
            settings.peak_systolic_velocity,
            settings.end_diastolic_velocity,
        );
        let simulator = PulsatileFlowSimulator::new(settings.pulse_length, settings.seed);
        let analyzer = DopplerSpectrumAnalyzer::new(settings.window_size, settings.skip)?;
        Self::new(
            trace,
            settings.slice_duration,
            simulator,
            analyzer,
            settings.acoustics,
            settings.snr_db,
        )
    }

    pub fn new(
        trace: VelocityTrace,
        slice_duration: f64,
        simulator: PulsatileFlowSimulator,
        analyzer: DopplerSpectrumAnalyzer,
        acoustics: Acoustics,
        snr_db: f64,
    ) -> Result<Self, ConfigError> {
        let slices = TimeSlicer::partition(&trace, slice_duration)?;
        debug!(
            "cut {:.3}s trace into {} slices of ~{}s",
            trace.duration(),
            slices.len(),
            slice_duration
        );
        Ok(Self {
            trace,
            cursor: SliceCursor::new(slices),
            simulator,
            analyzer,
            acoustics,
            snr_db,
            next_sequence: 0,
        })
    }

    pub fn trace(&self) -> &VelocityTrace {
        &self.trace
    }

    /// Slices per cardiac cycle
    pub fn slice_count(&self) -> usize {
        self.cursor.len()
    }

    /// Index of the slice the next tick will use
    pub fn next_slice_index(&self) -> usize {
        self.cursor.position()
    }

    pub fn analyzer(&self) -> &DopplerSpectrumAnalyzer {
        &self.analyzer
    }

    /// Rewind to the first slice and forget the analyzer tail
    pub fn reset(&mut self) {
        self.cursor.rewind();
        self.analyzer.reset();
    }

    /// Simulate the echo for the next slice and advance the cursor.
    pub fn next_frame(&mut self, params: &FlowSnapshot) -> Result<IqFrame, ConfigError> {
        params.validate()?;

        let slice_index = self.cursor.position();
        let slice = self.cursor.current();
        let scale = params.velocity_scale(self.trace.peak_systolic());
        let velocity: Vec<f64> = slice
            .velocity(&self.trace)
            .iter()
            .map(|v| v * scale)
            .collect();

        let conditions = FlowConditions {
            prf: params.prf,
            nyquist_velocity: self.acoustics.nyquist_velocity(params.prf),
            snr_db: self.snr_db,
        };
        let samples = self
            .simulator
            .simulate(slice.time(&self.trace), &velocity, &conditions);

        let frame = IqFrame::new(self.next_sequence, slice_index, samples);
        self.next_sequence += 1;
        self.cursor.advance();
        Ok(frame)
    }

    /// One full generation step: simulate the next slice and analyze it.
    pub fn generate_next(&mut self, params: &FlowSnapshot) -> Result<GeneratedSlice, ConfigError> {
        let frame = self.next_frame(params)?;
        let spectrum = self.analyzer.analyze(&frame.samples);
        Ok(GeneratedSlice {
            sequence_id: frame.sequence_id,
            slice_index: frame.slice_index,
            iq_samples: frame.len(),
            spectrum,
        })
    }
}
