//! Synthetic IQ echo for one slice of pulsatile flow.
//!
//! The echo is white thermal noise plus a narrowband Doppler component. The
//! Doppler component starts as band-limited noise whose bandwidth grows with
//! the mean slice velocity; it is then resampled on a time axis that runs
//! faster where the instantaneous velocity is higher, which sweeps its
//! spectrum along the velocity waveform.

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::core::IqSample;
use crate::dsp::interp::{interpolate, LinearSpline};
use crate::dsp::{tukey, SpectralTransform};

/// Floor for the magnitude of the mean slice velocity (m/s)
pub const MIN_MEAN_VELOCITY: f64 = 1e-6;

/// Acquisition settings a single slice is simulated under
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowConditions {
    /// Pulse repetition frequency, Hz (the IQ sample rate)
    pub prf: f64,
    /// Aliasing velocity at `prf`, m/s
    pub nyquist_velocity: f64,
    /// Doppler component power over the noise floor, dB
    pub snr_db: f64,
}

pub struct PulsatileFlowSimulator {
    rng: StdRng,
    bandwidth: f64,
}

impl PulsatileFlowSimulator {
    /// `pulse_length` is the transmitted pulse length in cycles; it sets the
    /// relative Doppler bandwidth `2 / pulse_length`.
    pub fn new(pulse_length: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            bandwidth: 2.0 / pulse_length.max(1) as f64,
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Produce the IQ echo for `velocity` sampled at `time`.
    ///
    /// Output has one sample per `1 / prf` over the slice's duration. Never
    /// fails: a stationary slice yields (almost) pure noise.
    pub fn simulate(
        &mut self,
        time: &[f64],
        velocity: &[f64],
        conditions: &FlowConditions,
    ) -> Vec<IqSample> {
        let prf = conditions.prf;
        let origin = time.first().copied().unwrap_or(0.0);
        let slice_time: Vec<f64> = time.iter().map(|t| t - origin).collect();
        let span = slice_time.last().copied().unwrap_or(0.0);

        let output_time = output_time_axis(span, prf);
        let mut velocities = interpolate(&slice_time, velocity, &output_time);

        // Work with a non-negative mean; the sign comes back by conjugation.
        let mean = velocities.iter().sum::<f64>() / velocities.len() as f64;
        let sign = if mean < 0.0 { -1.0 } else { 1.0 };
        for v in velocities.iter_mut() {
            *v *= sign;
        }
        let mean = (mean * sign).max(MIN_MEAN_VELOCITY);

        let warped_time = warp_time(&output_time, &velocities, prf, mean);

        let size = output_time.len();
        let noise: Vec<IqSample> = self
            .complex_gaussian(size)
            .into_iter()
            .map(|z| z * FRAC_1_SQRT_2)
            .collect();

        let relative_velocity = mean / (2.0 * conditions.nyquist_velocity);
        let burst = self.doppler_burst(relative_velocity, size);
        let real: Vec<f64> = burst.iter().map(|z| z.re).collect();
        let imag: Vec<f64> = burst.iter().map(|z| z.im).collect();
        let real = LinearSpline::new(&output_time, &real).evaluate_all(&warped_time);
        let imag = LinearSpline::new(&output_time, &imag).evaluate_all(&warped_time);

        let amplitude = 10f64.powf(conditions.snr_db / 20.0) * FRAC_1_SQRT_2;
        trace!(
            "simulated {} IQ samples, mean velocity {:.4} m/s, relative {:.4}",
            size,
            sign * mean,
            relative_velocity
        );

        noise
            .into_iter()
            .zip(real.into_iter().zip(imag))
            .map(|(n, (re, im))| {
                let flow = IqSample::new(re, im);
                let flow = if sign < 0.0 { flow.conj() } else { flow };
                n + flow * amplitude
            })
            .collect()
    }

    /// Band-limited complex noise occupying the lowest
    /// `relative_velocity * (1 + bandwidth)` fraction of the spectrum.
    fn doppler_burst(&mut self, relative_velocity: f64, size: usize) -> Vec<IqSample> {
        let support = (relative_velocity * size as f64 * (1.0 + self.bandwidth)).round();
        let support = if support.is_finite() && support > 0.0 {
            (support as usize).min(size)
        } else {
            0
        };

        let mut shape = tukey(support, 2.0 * self.bandwidth);
        shape.resize(size, 0.0);

        let mut spectrum: Vec<IqSample> = self
            .complex_gaussian(size)
            .into_iter()
            .zip(shape)
            .map(|(z, w)| z * w)
            .collect();

        SpectralTransform::new(size).inverse(&mut spectrum);
        let gain = (size as f64).sqrt();
        for z in spectrum.iter_mut() {
            *z *= gain;
        }
        spectrum
    }

    fn complex_gaussian(&mut self, size: usize) -> Vec<IqSample> {
        (0..size)
            .map(|_| {
                IqSample::new(
                    self.rng.sample(StandardNormal),
                    self.rng.sample(StandardNormal),
                )
            })
            .collect()
    }
}

/// Uniform axis `0, 1/prf, 2/prf, ...` up to and including `span`.
pub fn output_time_axis(span: f64, prf: f64) -> Vec<f64> {
    let steps = (span * prf + 1e-9).floor();
    let count = if steps.is_finite() && steps > 0.0 {
        steps as usize + 1
    } else {
        1
    };
    (0..count).map(|i| i as f64 / prf).collect()
}

/// Integrate velocity into a time axis that advances by
/// `velocity[i] / (prf * mean)` per sample.
pub fn warp_time(output_time: &[f64], velocity: &[f64], prf: f64, mean: f64) -> Vec<f64> {
    let mut warped = Vec::with_capacity(output_time.len());
    if let Some(&start) = output_time.first() {
        warped.push(start);
    }
    for &v in velocity.iter().skip(1) {
        let previous = warped[warped.len() - 1];
        warped.push(previous + v / (prf * mean));
    }
    warped
}
