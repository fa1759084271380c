use rustfft::num_complex::Complex64;

/// One demodulated echo sample (in-phase + quadrature).
pub type IqSample = Complex64;

/// Synthetic echo produced for a single streaming tick
#[derive(Debug, Clone)]
pub struct IqFrame {
    /// Sequential tick number for ordering
    pub sequence_id: u64,

    /// Which time slice of the cardiac cycle this frame was built from
    pub slice_index: usize,

    /// IQ samples at the pulse repetition frequency
    pub samples: Vec<IqSample>,
}

impl IqFrame {
    pub fn new(sequence_id: u64, slice_index: usize, samples: Vec<IqSample>) -> Self {
        Self {
            sequence_id,
            slice_index,
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
