//! Live acquisition parameters shared between the UI and the stream.
//!
//! Every scalar is independently atomic: a reader never sees a torn value,
//! but a snapshot taken while the UI is moving several sliders may mix old
//! and new values. Ticks accept that.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{ensure_positive, ConfigError};
use crate::simulator::Acoustics;

/// `f64` stored as its bit pattern in an `AtomicU64`
#[derive(Debug)]
pub struct AtomicF64(AtomicU64);

impl AtomicF64 {
    pub fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    pub fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Acquire))
    }

    pub fn store(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Release);
    }

    /// Store `value` and return the previous one
    pub fn swap(&self, value: f64) -> f64 {
        f64::from_bits(self.0.swap(value.to_bits(), Ordering::AcqRel))
    }
}

/// Parameter values as read at the top of one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    /// cm/s
    pub arterial_velocity: f64,
    /// Beam-to-flow angle, radians
    pub angle: f64,
    /// Normalized depth of the sample volume
    pub sampling_depth: f64,
    /// Pulse repetition frequency, Hz
    pub prf: f64,
    /// Fraction of the sample volume inside the vessel, 0..=1
    pub overlap: f64,
}

impl FlowSnapshot {
    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    /// Factor applied to the calibrated trace: slider velocity relative to
    /// the trace's systolic peak, projected onto the beam and weighted by the
    /// beam/vessel overlap.
    pub fn velocity_scale(&self, peak_systolic: f64) -> f64 {
        let relative = if peak_systolic > 0.0 {
            self.arterial_velocity / 100.0 / peak_systolic
        } else {
            0.0
        };
        relative * self.angle.cos() * self.overlap
    }

    pub fn nyquist_velocity(&self, acoustics: &Acoustics) -> f64 {
        acoustics.nyquist_velocity(self.prf)
    }

    /// Angle-corrected aliasing limit, m/s
    pub fn max_velocity(&self, acoustics: &Acoustics) -> f64 {
        acoustics.max_velocity(self.prf, self.angle)
    }

    pub fn is_velocity_over_max(&self, acoustics: &Acoustics) -> bool {
        self.arterial_velocity / 100.0 > self.max_velocity(acoustics)
    }

    /// Highest usable PRF (Hz) at the current sampling depth
    pub fn max_prf(&self, acoustics: &Acoustics) -> f64 {
        acoustics.max_prf(self.sampling_depth)
    }

    /// Values a tick cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("pulse repetition frequency", self.prf)?;
        for (name, value) in [
            ("arterial velocity", self.arterial_velocity),
            ("angle", self.angle),
            ("sampling depth", self.sampling_depth),
            ("overlap", self.overlap),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(name, format!("{} is not finite", value)));
            }
        }
        Ok(())
    }
}

/// Setter side used by the UI; the stream reads it once per tick.
#[derive(Debug)]
pub struct FlowParameters {
    arterial_velocity: AtomicF64,
    angle: AtomicF64,
    sampling_depth: AtomicF64,
    prf: AtomicF64,
    overlap: AtomicF64,
}

impl FlowParameters {
    pub fn new(initial: FlowSnapshot) -> Self {
        Self {
            arterial_velocity: AtomicF64::new(initial.arterial_velocity),
            angle: AtomicF64::new(initial.angle),
            sampling_depth: AtomicF64::new(initial.sampling_depth),
            prf: AtomicF64::new(initial.prf),
            overlap: AtomicF64::new(initial.overlap.clamp(0.0, 1.0)),
        }
    }

    /// cm/s; returns the previous value
    pub fn set_arterial_velocity(&self, cm_per_s: f64) -> f64 {
        self.arterial_velocity.swap(cm_per_s)
    }

    pub fn arterial_velocity(&self) -> f64 {
        self.arterial_velocity.load()
    }

    /// Degrees in, stored as radians; returns the previous angle in degrees
    pub fn set_angle_degrees(&self, degrees: f64) -> f64 {
        self.angle.swap(degrees.to_radians()).to_degrees()
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle.load().to_degrees()
    }

    pub fn angle_radians(&self) -> f64 {
        self.angle.load()
    }

    pub fn set_sampling_depth(&self, depth: f64) -> f64 {
        self.sampling_depth.swap(depth)
    }

    pub fn sampling_depth(&self) -> f64 {
        self.sampling_depth.load()
    }

    /// Hz; returns the previous value
    pub fn set_prf(&self, hz: f64) -> f64 {
        self.prf.swap(hz)
    }

    pub fn prf(&self) -> f64 {
        self.prf.load()
    }

    /// Clamped to `[0, 1]`; returns the previous value
    pub fn set_overlap(&self, fraction: f64) -> f64 {
        self.overlap.swap(fraction.clamp(0.0, 1.0))
    }

    pub fn overlap(&self) -> f64 {
        self.overlap.load()
    }

    /// Read each scalar once. Not a consistent set if setters race.
    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            arterial_velocity: self.arterial_velocity.load(),
            angle: self.angle.load(),
            sampling_depth: self.sampling_depth.load(),
            prf: self.prf.load(),
            overlap: self.overlap.load(),
        }
    }
}
