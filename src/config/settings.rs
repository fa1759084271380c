use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Duration;

use super::FlowSnapshot;
use crate::error::{ensure_positive, ConfigError};
use crate::simulator::Acoustics;

/// Linear map from spectrum dB to display intensity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayRange {
    pub min_db: f64,
    pub max_db: f64,
}

impl Default for DisplayRange {
    fn default() -> Self {
        Self {
            min_db: 10.0,
            max_db: 50.0,
        }
    }
}

impl DisplayRange {
    /// `min_db` maps to 0 and `max_db` to 1; values outside are not clamped
    pub fn normalize(&self, db: f64) -> f64 {
        (db - self.min_db) / (self.max_db - self.min_db)
    }
}

/// Initial slider positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowSettings {
    /// cm/s
    pub arterial_velocity: f64,
    pub angle_degrees: f64,
    pub sampling_depth: f64,
    /// Hz
    pub prf: f64,
    pub overlap: f64,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            arterial_velocity: 40.0,
            angle_degrees: 45.0,
            // Centre of the vessel for the reference phantom
            sampling_depth: 3.0 / 7.0 + 0.0125 + 0.05,
            prf: 13_000.0,
            overlap: 1.0,
        }
    }
}

impl FlowSettings {
    pub fn to_snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            arterial_velocity: self.arterial_velocity,
            angle: self.angle_degrees.to_radians(),
            sampling_depth: self.sampling_depth,
            prf: self.prf,
            overlap: self.overlap,
        }
    }
}

/// Static simulator configuration, fixed for the life of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorSettings {
    /// PSV of the synthesized trace, m/s
    pub peak_systolic_velocity: f64,
    /// EDV of the synthesized trace, m/s
    pub end_diastolic_velocity: f64,
    /// Analysis window length = number of velocity bins
    pub window_size: usize,
    /// Hop between analysis windows, samples
    pub skip: usize,
    /// Seconds of trace consumed per tick
    pub slice_duration: f64,
    pub tick_interval_ms: u64,
    /// Seconds of history visible across the display
    pub display_seconds: f64,
    pub snr_db: f64,
    /// Transmit pulse length, cycles
    pub pulse_length: usize,
    pub acoustics: Acoustics,
    pub display_range: DisplayRange,
    /// Fixed RNG seed for reproducible output
    pub seed: Option<u64>,
    pub flow: FlowSettings,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            peak_systolic_velocity: 0.40,
            end_diastolic_velocity: 0.15,
            window_size: 300,
            skip: 10,
            slice_duration: 0.1,
            tick_interval_ms: 100,
            display_seconds: 4.0,
            snr_db: 20.0,
            pulse_length: 20,
            acoustics: Acoustics::default(),
            display_range: DisplayRange::default(),
            seed: None,
            flow: FlowSettings::default(),
        }
    }
}

impl SimulatorSettings {
    /// Overlay a (possibly partial) JSON object on the defaults
    pub fn from_json(config: Value) -> Result<Self> {
        let settings: Self =
            serde_json::from_value(config).context("Failed to parse simulator settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .context(format!("Failed to read settings from {:?}", path))?;
        let settings: Self =
            serde_json::from_str(&json).context("Failed to deserialize simulator settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize simulator settings")?;
        fs::write(path, json).context(format!("Failed to write settings to {:?}", path))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("peak systolic velocity", self.peak_systolic_velocity)?;
        if !self.end_diastolic_velocity.is_finite()
            || self.end_diastolic_velocity > self.peak_systolic_velocity
        {
            return Err(ConfigError::invalid(
                "end diastolic velocity",
                format!(
                    "{} must not exceed the peak systolic velocity {}",
                    self.end_diastolic_velocity, self.peak_systolic_velocity
                ),
            ));
        }
        if self.window_size < 4 {
            return Err(ConfigError::invalid(
                "window size",
                format!("need at least 4 bins, got {}", self.window_size),
            ));
        }
        if self.skip == 0 {
            return Err(ConfigError::invalid("skip", "hop must be at least one sample"));
        }
        if self.pulse_length == 0 {
            return Err(ConfigError::invalid("pulse length", "must be at least one cycle"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::invalid("tick interval", "must be non-zero"));
        }
        ensure_positive("slice duration", self.slice_duration)?;
        ensure_positive("display seconds", self.display_seconds)?;
        ensure_positive("speed of sound", self.acoustics.speed_of_sound)?;
        ensure_positive("ultrasound frequency", self.acoustics.ultrasound_frequency)?;
        if !self.snr_db.is_finite() {
            return Err(ConfigError::invalid("snr", "must be finite"));
        }
        if !(self.display_range.max_db > self.display_range.min_db) {
            return Err(ConfigError::invalid(
                "display range",
                format!(
                    "max {} dB must exceed min {} dB",
                    self.display_range.max_db, self.display_range.min_db
                ),
            ));
        }
        self.flow.to_snapshot().validate()
    }

    /// Columns covering `display_seconds` at the initial PRF
    pub fn display_width(&self) -> usize {
        let columns_per_second = self.flow.prf / self.skip as f64;
        ((self.display_seconds * columns_per_second).round() as usize).max(1)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
