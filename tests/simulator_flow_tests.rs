use dopplersim::analyzer::DopplerSpectrumAnalyzer;
use dopplersim::core::IqSample;
use dopplersim::simulator::{Acoustics, FlowConditions, PulsatileFlowSimulator};

const PRF: f64 = 10_000.0;

fn conditions(snr_db: f64) -> FlowConditions {
    FlowConditions {
        prf: PRF,
        nyquist_velocity: Acoustics::default().nyquist_velocity(PRF),
        snr_db,
    }
}

/// Constant flow at `velocity` m/s for `seconds`
fn simulate_constant(velocity: f64, seconds: f64, seed: u64) -> Vec<IqSample> {
    let time: Vec<f64> = (0..=10).map(|i| i as f64 * seconds / 10.0).collect();
    let speed = vec![velocity; time.len()];
    let mut simulator = PulsatileFlowSimulator::new(20, Some(seed));
    simulator.simulate(&time, &speed, &conditions(20.0))
}

/// Linear power summed over the positive and negative velocity rows,
/// leaving out the blanked rows around zero.
fn half_powers(iq: &[IqSample]) -> (f64, f64) {
    let mut analyzer = DopplerSpectrumAnalyzer::new(128, 8).unwrap();
    let spectrum = analyzer.analyze(iq);
    let means = spectrum.row_means();
    let centre = spectrum.rows() / 2;
    let power = |rows: std::ops::Range<usize>| -> f64 {
        rows.map(|r| 10f64.powf(means[r] / 10.0)).sum()
    };
    let negative = power(1..centre - 1);
    let positive = power(centre + 2..spectrum.rows());
    (negative, positive)
}

#[test]
fn test_output_length_follows_prf() {
    let iq = simulate_constant(0.2, 0.1, 1);
    assert_eq!(iq.len(), 1001);

    let time = [0.0];
    let mut simulator = PulsatileFlowSimulator::new(20, Some(1));
    assert_eq!(simulator.simulate(&time, &[0.2], &conditions(20.0)).len(), 1);
}

#[test]
fn test_same_seed_same_echo() {
    let a = simulate_constant(0.3, 0.05, 99);
    let b = simulate_constant(0.3, 0.05, 99);
    let c = simulate_constant(0.3, 0.05, 100);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_bandwidth_from_pulse_length() {
    assert_eq!(PulsatileFlowSimulator::new(20, None).bandwidth(), 0.1);
    assert_eq!(PulsatileFlowSimulator::new(4, None).bandwidth(), 0.5);
}

#[test]
fn test_forward_flow_shows_above_baseline() {
    let nyquist = conditions(20.0).nyquist_velocity;
    let iq = simulate_constant(0.5 * nyquist, 0.4, 3);

    let (negative, positive) = half_powers(&iq);
    assert!(positive > 10.0 * negative, "positive {} negative {}", positive, negative);
}

#[test]
fn test_reverse_flow_shows_below_baseline() {
    let nyquist = conditions(20.0).nyquist_velocity;
    let iq = simulate_constant(-0.5 * nyquist, 0.4, 3);

    let (negative, positive) = half_powers(&iq);
    assert!(negative > 10.0 * positive, "positive {} negative {}", positive, negative);
}

#[test]
fn test_stationary_flow_is_symmetric_noise() {
    let iq = simulate_constant(0.0, 0.4, 5);

    // Unit-power complex noise
    let mean_power = iq.iter().map(|z| z.norm_sqr()).sum::<f64>() / iq.len() as f64;
    assert!((0.8..1.2).contains(&mean_power), "mean power {}", mean_power);

    let mut analyzer = DopplerSpectrumAnalyzer::new(128, 8).unwrap();
    assert_eq!(analyzer.analyze(&iq).columns(), (iq.len() - 1) / 8 + 1);

    let (negative, positive) = half_powers(&iq);
    let ratio_db = 10.0 * (positive / negative).log10();
    assert!(ratio_db.abs() < 1.0, "halves differ by {} dB", ratio_db);
}

#[test]
fn test_faster_flow_reaches_higher_bins() {
    let nyquist = conditions(20.0).nyquist_velocity;
    let centroid = |iq: &[IqSample]| -> f64 {
        let mut analyzer = DopplerSpectrumAnalyzer::new(128, 8).unwrap();
        let means = analyzer.analyze(iq).row_means();
        let weights: Vec<f64> = means[66..].iter().map(|db| 10f64.powf(db / 10.0)).collect();
        let total: f64 = weights.iter().sum();
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| i as f64 * w)
            .sum::<f64>()
            / total
    };

    let slow = centroid(&simulate_constant(0.2 * nyquist, 0.4, 11));
    let fast = centroid(&simulate_constant(0.6 * nyquist, 0.4, 11));
    assert!(fast > slow + 5.0, "slow {} fast {}", slow, fast);
}
