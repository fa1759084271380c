//! Window functions used by the simulator and the analyzer.

use std::f64::consts::PI;

/// Symmetric Hamming window (bell shaped, tapers to ~0.08 at the edges).
pub fn hamming(size: usize) -> Vec<f64> {
    if size <= 1 {
        return vec![1.0; size];
    }
    let last = (size - 1) as f64;
    (0..size)
        .map(|i| 0.53836 - 0.46164 * (2.0 * PI * i as f64 / last).cos())
        .collect()
}

/// Tapered-cosine window.
///
/// `ratio` is the fraction of the window inside the cosine tapers:
/// 0 gives a rectangle, 1 gives a Hann window.
pub fn tukey(size: usize, ratio: f64) -> Vec<f64> {
    if size <= 1 {
        return vec![1.0; size];
    }
    if ratio <= 0.0 {
        return vec![1.0; size];
    }
    let ratio = ratio.min(1.0);
    let last = (size - 1) as f64;
    (0..size)
        .map(|i| {
            let x = i as f64 / last;
            if x < ratio / 2.0 {
                0.5 * (1.0 + (2.0 * PI / ratio * (x - ratio / 2.0)).cos())
            } else if x <= 1.0 - ratio / 2.0 {
                1.0
            } else {
                0.5 * (1.0 + (2.0 * PI / ratio * (x - 1.0 + ratio / 2.0)).cos())
            }
        })
        .collect()
}
