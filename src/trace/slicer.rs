use serde::Serialize;

use super::VelocityTrace;
use crate::error::{ensure_positive, ConfigError};

/// Contiguous sub-range `[start, start + len)` of a velocity trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlice {
    pub start: usize,
    pub len: usize,
}

impl TimeSlice {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn time<'a>(&self, trace: &'a VelocityTrace) -> &'a [f64] {
        &trace.time()[self.start..self.end()]
    }

    pub fn velocity<'a>(&self, trace: &'a VelocityTrace) -> &'a [f64] {
        &trace.velocity()[self.start..self.end()]
    }

    /// Time spanned from the first to the last sample of the slice
    pub fn duration(&self, trace: &VelocityTrace) -> f64 {
        let time = self.time(trace);
        match (time.first(), time.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }
}

/// Cuts a trace into slices of roughly `slice_duration` seconds.
pub struct TimeSlicer;

impl TimeSlicer {
    /// A new slice starts whenever the time elapsed since the previous cut
    /// exceeds `slice_duration`; the remainder becomes the final slice.
    pub fn partition(
        trace: &VelocityTrace,
        slice_duration: f64,
    ) -> Result<Vec<TimeSlice>, ConfigError> {
        ensure_positive("slice duration", slice_duration)?;
        if trace.is_empty() {
            return Err(ConfigError::MalformedTrace("trace is empty".to_string()));
        }

        let time = trace.time();
        let mut slices = Vec::new();
        let mut last = 0;
        for (i, &t) in time.iter().enumerate() {
            if t - time[last] > slice_duration {
                slices.push(TimeSlice {
                    start: last,
                    len: i - last,
                });
                last = i;
            }
        }
        slices.push(TimeSlice {
            start: last,
            len: time.len() - last,
        });

        Ok(slices)
    }
}

/// Visits slices cyclically, one per streaming tick.
#[derive(Debug, Clone)]
pub struct SliceCursor {
    slices: Vec<TimeSlice>,
    position: usize,
}

impl SliceCursor {
    /// `slices` must not be empty; [`TimeSlicer::partition`] never returns
    /// an empty list.
    pub fn new(slices: Vec<TimeSlice>) -> Self {
        debug_assert!(!slices.is_empty());
        Self {
            slices,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> TimeSlice {
        self.slices[self.position]
    }

    pub fn advance(&mut self) {
        self.position = (self.position + 1) % self.slices.len();
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn slices(&self) -> &[TimeSlice] {
        &self.slices
    }
}
