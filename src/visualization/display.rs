use anyhow::Result;
use serde::Serialize;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{encode_png, SpectrogramRingBuffer};
use crate::core::SpectrumSlice;
use crate::error::ConfigError;

/// Point on the velocity axis: buffer row and the velocity (m/s) it shows
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisTick {
    pub row: usize,
    pub velocity: f64,
}

/// Read side of the spectrogram handed to the rendering collaborator.
///
/// Clones share the same buffer. The streaming engine writes through
/// [`apply`](Self::apply); renderers only read.
#[derive(Debug, Clone)]
pub struct SpectrogramDisplay {
    buffer: Arc<RwLock<SpectrogramRingBuffer>>,
}

impl SpectrogramDisplay {
    pub fn new(buffer: SpectrogramRingBuffer) -> Self {
        Self {
            buffer: Arc::new(RwLock::new(buffer)),
        }
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, SpectrogramRingBuffer> {
        self.buffer
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, SpectrogramRingBuffer> {
        self.buffer
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Write a normalized slice and return the new cursor
    pub(crate) fn apply(&self, slice: &SpectrumSlice) -> Result<usize, ConfigError> {
        let mut buffer = self.write_lock();
        buffer.write(slice)?;
        Ok(buffer.cursor())
    }

    pub(crate) fn clear(&self) {
        self.write_lock().clear();
    }

    pub fn width(&self) -> usize {
        self.read_lock().width()
    }

    pub fn height(&self) -> usize {
        self.read_lock().height()
    }

    pub fn cursor(&self) -> usize {
        self.read_lock().cursor()
    }

    pub fn cursor_fraction(&self) -> f64 {
        self.read_lock().cursor_fraction()
    }

    pub fn columns_written(&self) -> u64 {
        self.read_lock().columns_written()
    }

    /// Horizontal pixel of the scan line on a surface `pixel_width` wide
    pub fn scan_line_position(&self, pixel_width: f64) -> f64 {
        self.cursor_fraction() * pixel_width
    }

    /// Copy of the whole buffer
    pub fn snapshot(&self) -> SpectrogramRingBuffer {
        self.read_lock().clone()
    }

    pub fn read_into(&self, out: &mut [f64]) -> Result<(), ConfigError> {
        self.read_lock().read_into(out)
    }

    /// Row-major `[0, 1]` intensities for direct texture upload
    pub fn intensities(&self) -> Vec<f32> {
        self.read_lock().intensities()
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.read_lock())
    }

    /// Velocity shown by `row`: the centre row is zero flow and the rows
    /// span `[-nyquist, +nyquist)`.
    pub fn row_velocity(&self, row: usize, nyquist_velocity: f64) -> f64 {
        let half = self.height() as f64 / 2.0;
        (row as f64 - half) / half * nyquist_velocity
    }

    /// Evenly spaced ticks: the baseline plus `per_side` on each side of it.
    pub fn velocity_axis(&self, nyquist_velocity: f64, per_side: usize) -> Vec<AxisTick> {
        let height = self.height();
        let centre = height / 2;
        if per_side == 0 {
            return vec![AxisTick {
                row: centre,
                velocity: 0.0,
            }];
        }
        let step = centre as f64 / per_side as f64;
        (-(per_side as i64)..=per_side as i64)
            .map(|k| {
                let row = (centre as f64 + k as f64 * step).round() as usize;
                let row = row.min(height - 1);
                AxisTick {
                    row,
                    velocity: self.row_velocity(row, nyquist_velocity),
                }
            })
            .collect()
    }
}
