use rustfft::{num_complex::Complex64, Fft, FftPlanner};
use std::fmt;
use std::sync::Arc;

/// Planned forward/inverse transforms of one size.
///
/// Plans are `Send + Sync`, so a `SpectralTransform` can be shared with
/// rayon workers; each call allocates its own scratch.
#[derive(Clone)]
pub struct SpectralTransform {
    size: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl fmt::Debug for SpectralTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpectralTransform")
            .field("size", &self.size)
            .finish()
    }
}

impl SpectralTransform {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            size,
            forward: planner.plan_fft_forward(size),
            inverse: planner.plan_fft_inverse(size),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Unscaled forward transform, in place
    pub fn forward(&self, buffer: &mut [Complex64]) {
        assert_eq!(buffer.len(), self.size);
        self.forward.process(buffer);
    }

    /// Inverse transform scaled by `1/N`, in place
    pub fn inverse(&self, buffer: &mut [Complex64]) {
        assert_eq!(buffer.len(), self.size);
        if self.size == 0 {
            return;
        }
        self.inverse.process(buffer);
        let scale = 1.0 / self.size as f64;
        for sample in buffer.iter_mut() {
            *sample *= scale;
        }
    }
}

/// Swap the two halves so zero frequency lands in the middle.
///
/// For odd lengths the upper half is the longer one, matching
/// `[n/2..] ++ [..n/2]`.
pub fn fft_shift_in_place<T>(values: &mut [T]) {
    let mid = values.len() / 2;
    values.rotate_left(mid);
}

pub fn fft_shift<T: Clone>(values: &[T]) -> Vec<T> {
    let mut shifted = values.to_vec();
    fft_shift_in_place(&mut shifted);
    shifted
}
