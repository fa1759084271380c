use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Metres represented by one unit of normalized sampling depth
pub const DEPTH_SCALE_M: f64 = 0.07;

/// Transducer and tissue constants behind the velocity/frequency mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Acoustics {
    /// m/s, soft tissue
    pub speed_of_sound: f64,
    /// Hz, transmitted carrier
    pub ultrasound_frequency: f64,
}

impl Default for Acoustics {
    fn default() -> Self {
        Self {
            speed_of_sound: 1540.0,
            ultrasound_frequency: 6.933e6,
        }
    }
}

impl Acoustics {
    /// Largest velocity (m/s) along the beam that does not alias at `prf`
    pub fn nyquist_velocity(&self, prf: f64) -> f64 {
        self.speed_of_sound * prf / self.ultrasound_frequency / 4.0
    }

    /// Angle-corrected aliasing limit for flow at `angle` (radians) to the
    /// beam. Infinite once the beam is perpendicular to the flow.
    pub fn max_velocity(&self, prf: f64, angle: f64) -> f64 {
        if angle.abs() < FRAC_PI_2 {
            self.nyquist_velocity(prf) / angle.cos()
        } else {
            f64::INFINITY
        }
    }

    /// Highest PRF (Hz) whose echoes return from `depth` before the next
    /// pulse leaves.
    pub fn max_prf(&self, depth: f64) -> f64 {
        let depth_m = depth * DEPTH_SCALE_M;
        if depth_m > 0.0 {
            self.speed_of_sound / (2.0 * depth_m)
        } else {
            f64::INFINITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nyquist_velocity_at_13khz() {
        let acoustics = Acoustics::default();
        let v = acoustics.nyquist_velocity(13_000.0);
        assert!((v - 0.7219).abs() < 1e-3);
    }

    #[test]
    fn test_max_velocity_is_angle_corrected() {
        let acoustics = Acoustics::default();
        let nyquist = acoustics.nyquist_velocity(9_000.0);
        assert!((acoustics.max_velocity(9_000.0, 0.0) - nyquist).abs() < 1e-12);
        assert!(acoustics.max_velocity(9_000.0, 1.0) > nyquist);
        assert!(acoustics.max_velocity(9_000.0, FRAC_PI_2).is_infinite());
    }

    #[test]
    fn test_max_prf_shrinks_with_depth() {
        let acoustics = Acoustics::default();
        assert!(acoustics.max_prf(0.2) > acoustics.max_prf(0.8));
        assert!(acoustics.max_prf(0.0).is_infinite());
    }
}
