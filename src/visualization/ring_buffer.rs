use crate::core::SpectrumSlice;
use crate::error::ConfigError;

#[cfg(test)]
mod tests {
    use super::*;

    fn constant_slice(height: usize, columns: usize, value: f64) -> SpectrumSlice {
        SpectrumSlice::from_row_major(height, columns, vec![value; height * columns]).unwrap()
    }

    #[test]
    fn test_create_ring_buffer() {
        let buffer = SpectrogramRingBuffer::new(8, 4).unwrap();

        assert_eq!(buffer.width(), 8);
        assert_eq!(buffer.height(), 4);
        assert_eq!(buffer.cursor(), 0);
        assert_eq!(buffer.cursor_fraction(), 0.0);
        assert!(buffer.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_write_advances_cursor() {
        let mut buffer = SpectrogramRingBuffer::new(8, 2).unwrap();
        buffer.write(&constant_slice(2, 3, 1.0)).unwrap();

        assert_eq!(buffer.cursor(), 3);
        assert_eq!(buffer.cursor_fraction(), 0.375);
        assert_eq!(buffer.get(1, 2), 1.0);
        assert_eq!(buffer.get(1, 3), 0.0);
    }

    #[test]
    fn test_zero_sized_buffer_is_rejected() {
        assert!(SpectrogramRingBuffer::new(0, 4).is_err());
        assert!(SpectrogramRingBuffer::new(4, 0).is_err());
    }
}

/// Scrolling spectrogram: `height` velocity bins by `width` time columns.
///
/// Columns are written at the cursor and wrap modulo `width`; a slice wider
/// than the buffer simply wraps more than once.
#[derive(Debug, Clone)]
pub struct SpectrogramRingBuffer {
    width: usize,
    height: usize,
    /// Row-major, `height * width`
    data: Vec<f64>,
    cursor: usize,
    columns_written: u64,
}

impl SpectrogramRingBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::invalid(
                "spectrogram size",
                format!("{}x{} has no cells", width, height),
            ));
        }
        Ok(Self {
            width,
            height,
            data: vec![0.0; width * height],
            cursor: 0,
            columns_written: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Column the next write starts at, always in `[0, width)`
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_fraction(&self) -> f64 {
        self.cursor as f64 / self.width as f64
    }

    /// Columns accepted since creation (not reduced modulo width)
    pub fn columns_written(&self) -> u64 {
        self.columns_written
    }

    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.data[row * self.width + column]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Append `slice` at the cursor. Its row count must equal the height.
    pub fn write(&mut self, slice: &SpectrumSlice) -> Result<(), ConfigError> {
        if slice.rows() != self.height {
            return Err(ConfigError::HeightMismatch {
                expected: self.height,
                actual: slice.rows(),
            });
        }

        let columns = slice.columns();
        for row in 0..self.height {
            let source = slice.row(row);
            let target = &mut self.data[row * self.width..(row + 1) * self.width];
            for (offset, &value) in source.iter().enumerate() {
                target[(self.cursor + offset) % self.width] = value;
            }
        }

        self.cursor = (self.cursor + columns % self.width) % self.width;
        self.columns_written += columns as u64;
        Ok(())
    }

    /// Copy of the full buffer as a `height x width` matrix
    pub fn read(&self) -> SpectrumSlice {
        SpectrumSlice::from_row_major(self.height, self.width, self.data.clone())
            .unwrap_or_else(|| SpectrumSlice::zeros(self.height, self.width))
    }

    /// Copy the buffer into a caller-owned row-major array of exactly
    /// `width * height` cells.
    pub fn read_into(&self, out: &mut [f64]) -> Result<(), ConfigError> {
        if out.len() != self.data.len() {
            return Err(ConfigError::BufferSizeMismatch {
                width: self.width,
                height: self.height,
                actual: out.len(),
            });
        }
        out.copy_from_slice(&self.data);
        Ok(())
    }

    /// Cells clamped to `[0, 1]`, row-major, ready for a grayscale texture
    pub fn intensities(&self) -> Vec<f32> {
        self.data
            .iter()
            .map(|&v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) as f32 })
            .collect()
    }

    pub fn clear(&mut self) {
        self.data.fill(0.0);
        self.cursor = 0;
        self.columns_written = 0;
    }
}
