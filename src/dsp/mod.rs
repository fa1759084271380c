pub mod fft;
pub mod interp;
pub mod window;

pub use fft::{fft_shift, fft_shift_in_place, SpectralTransform};
pub use interp::LinearSpline;
pub use window::{hamming, tukey};
