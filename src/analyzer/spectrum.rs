//! Sliding-window Doppler spectrum with continuity across calls.
//!
//! Every call prepends the last `window_size` samples of the previous call,
//! so windows straddling a tick boundary are analyzed exactly as if the
//! stream had never been split (as long as tick lengths are multiples of
//! the hop).

use log::debug;
use rayon::prelude::*;

use crate::core::{IqSample, SpectrumSlice};
use crate::dsp::{fft_shift_in_place, hamming, SpectralTransform};
use crate::error::ConfigError;

/// Power written into the DC and edge bins
pub const BLANK_LEVEL: f64 = 1e-3;

/// Exponent of the outlier-compressing power law
pub const STABILIZING_POWER: f64 = 2.0;

/// Added before the logarithm so silent bins stay finite
pub const LOG_EPSILON: f64 = 1e-6;

pub struct DopplerSpectrumAnalyzer {
    window_size: usize,
    skip: usize,
    window: Vec<f64>,
    transform: SpectralTransform,
    /// Most recent `window_size` samples of the concatenated stream
    tail: Vec<IqSample>,
    /// Reused `tail ++ iq` buffer
    scratch: Vec<IqSample>,
}

impl DopplerSpectrumAnalyzer {
    /// Analyzer with a Hamming analysis window.
    pub fn new(window_size: usize, skip: usize) -> Result<Self, ConfigError> {
        Self::with_window(hamming(window_size), skip)
    }

    /// Analyzer with a caller-supplied analysis window; its length sets the
    /// window size (and therefore the number of frequency bins).
    pub fn with_window(window: Vec<f64>, skip: usize) -> Result<Self, ConfigError> {
        let window_size = window.len();
        if window_size < 4 {
            return Err(ConfigError::invalid(
                "window size",
                format!("need at least 4 bins, got {}", window_size),
            ));
        }
        if skip == 0 {
            return Err(ConfigError::invalid("skip", "hop must be at least one sample"));
        }

        Ok(Self {
            window_size,
            skip,
            window,
            transform: SpectralTransform::new(window_size),
            tail: vec![IqSample::new(0.0, 0.0); window_size],
            scratch: Vec::new(),
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn tail(&self) -> &[IqSample] {
        &self.tail
    }

    /// Zero the persisted tail, as if the stream restarted.
    pub fn reset(&mut self) {
        self.tail.fill(IqSample::new(0.0, 0.0));
    }

    /// Replace the analysis window; it must keep the current length.
    pub fn set_window(&mut self, window: Vec<f64>) -> Result<(), ConfigError> {
        if window.len() != self.window_size {
            return Err(ConfigError::WindowLength {
                expected: self.window_size,
                actual: window.len(),
            });
        }
        self.window = window;
        Ok(())
    }

    /// Number of columns `analyze` yields for `iq_len` new samples.
    pub fn columns_for(&self, iq_len: usize) -> usize {
        // Starts are 1, 1 + skip, ... <= iq_len
        if iq_len == 0 {
            0
        } else {
            (iq_len - 1) / self.skip + 1
        }
    }

    /// Log-power spectrum of every window position in `tail ++ iq`.
    ///
    /// Returns `window_size` rows (fftshifted frequency bins, most negative
    /// first) by [`columns_for`](Self::columns_for)`(iq.len())` columns.
    pub fn analyze(&mut self, iq: &[IqSample]) -> SpectrumSlice {
        let h = self.window_size;

        self.scratch.clear();
        self.scratch.extend_from_slice(&self.tail);
        self.scratch.extend_from_slice(iq);
        let stream = &self.scratch;
        self.tail.copy_from_slice(&stream[stream.len() - h..]);

        let columns = self.columns_for(iq.len());
        let skip = self.skip;
        let window = &self.window;
        let transform = &self.transform;

        // One row of `h` bins per window position
        let mut frames = vec![0.0; columns * h];
        frames
            .par_chunks_mut(h)
            .enumerate()
            .for_each(|(i, frame)| {
                let start = 1 + i * skip;
                let mut buffer: Vec<IqSample> = stream[start..start + h]
                    .iter()
                    .zip(window.iter())
                    .map(|(&s, &w)| s * w)
                    .collect();
                transform.forward(&mut buffer);

                for (out, bin) in frame.iter_mut().zip(buffer.iter()) {
                    *out = bin.norm_sqr();
                }
                frame[0] = BLANK_LEVEL;
                frame[1] = BLANK_LEVEL;
                frame[h - 1] = BLANK_LEVEL;
                fft_shift_in_place(frame);

                let p = STABILIZING_POWER;
                for value in frame.iter_mut() {
                    *value = (value.abs().powf(p) / p).powf(1.0 / p);
                }
            });

        // Transpose to bins x positions and convert to dB
        let mut data = vec![0.0; h * columns];
        for (col, frame) in frames.chunks_exact(h).enumerate() {
            for (row, &value) in frame.iter().enumerate() {
                data[row * columns + col] = 10.0 * (value + LOG_EPSILON).log10();
            }
        }

        debug!(
            "analyzed {} samples into {} columns of {} bins",
            iq.len(),
            columns,
            h
        );

        SpectrumSlice::from_row_major(h, columns, data)
            .unwrap_or_else(|| SpectrumSlice::zeros(h, columns))
    }
}
