use serde::Serialize;

use super::reference::{REFERENCE_TIME, REFERENCE_VELOCITY};
use crate::error::ConfigError;

/// One cardiac cycle of flow velocity (m/s) sampled at increasing times (s).
///
/// The raw calibration shape is rescaled so that its swing equals
/// `peak_systolic - end_diastolic` and its minimum equals `end_diastolic`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VelocityTrace {
    time: Vec<f64>,
    velocity: Vec<f64>,
    peak_systolic: f64,
    end_diastolic: f64,
}

impl VelocityTrace {
    /// Rescale the built-in calibration waveform.
    pub fn build(peak_systolic: f64, end_diastolic: f64) -> Self {
        Self::rescaled(
            REFERENCE_TIME.to_vec(),
            &REFERENCE_VELOCITY,
            peak_systolic,
            end_diastolic,
        )
    }

    /// Rescale a caller-supplied waveform.
    ///
    /// The time axis is shifted to start at zero and must be strictly
    /// increasing.
    pub fn from_samples(
        time: &[f64],
        raw_velocity: &[f64],
        peak_systolic: f64,
        end_diastolic: f64,
    ) -> Result<Self, ConfigError> {
        if time.len() != raw_velocity.len() {
            return Err(ConfigError::MalformedTrace(format!(
                "{} time points but {} velocity samples",
                time.len(),
                raw_velocity.len()
            )));
        }
        if time.len() < 2 {
            return Err(ConfigError::MalformedTrace(
                "at least two samples are required".to_string(),
            ));
        }
        if time.iter().chain(raw_velocity).any(|v| !v.is_finite()) {
            return Err(ConfigError::MalformedTrace("non-finite sample".to_string()));
        }
        if let Some(i) = time.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ConfigError::MalformedTrace(format!(
                "time axis is not strictly increasing at index {}",
                i + 1
            )));
        }

        let origin = time[0];
        let time = time.iter().map(|t| t - origin).collect();
        Ok(Self::rescaled(time, raw_velocity, peak_systolic, end_diastolic))
    }

    fn rescaled(time: Vec<f64>, raw: &[f64], peak_systolic: f64, end_diastolic: f64) -> Self {
        let (raw_min, raw_max) = min_max(raw);
        let raw_swing = raw_max - raw_min;
        // A flat raw trace cannot be stretched; it collapses onto EDV.
        let gain = if raw_swing > 0.0 {
            (peak_systolic - end_diastolic) / raw_swing
        } else {
            0.0
        };

        let scaled: Vec<f64> = raw.iter().map(|v| gain * v).collect();
        let (scaled_min, _) = min_max(&scaled);
        let velocity = scaled
            .iter()
            .map(|v| v - scaled_min + end_diastolic)
            .collect();

        Self {
            time,
            velocity,
            peak_systolic,
            end_diastolic,
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn peak_systolic(&self) -> f64 {
        self.peak_systolic
    }

    pub fn end_diastolic(&self) -> f64 {
        self.end_diastolic
    }

    /// Time of the last sample
    pub fn duration(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }

    pub fn min_velocity(&self) -> f64 {
        min_max(&self.velocity).0
    }

    pub fn max_velocity(&self) -> f64 {
        min_max(&self.velocity).1
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
