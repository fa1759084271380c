use dopplersim::error::ConfigError;
use dopplersim::trace::VelocityTrace;

#[test]
fn test_reference_trace_spans_edv_to_psv() {
    let trace = VelocityTrace::build(0.40, 0.15);

    assert_eq!(trace.len(), 226);
    assert!((trace.min_velocity() - 0.15).abs() < 1e-12);
    assert!((trace.max_velocity() - 0.40).abs() < 1e-12);
    assert_eq!(trace.time()[0], 0.0);
}

#[test]
fn test_time_axis_is_strictly_increasing() {
    let trace = VelocityTrace::build(0.40, 0.15);

    assert!(trace.time().windows(2).all(|w| w[1] > w[0]));
    assert!(trace.duration() > 0.5);
}

#[test]
fn test_waveform_shape_is_preserved() {
    let narrow = VelocityTrace::build(0.40, 0.15);
    let wide = VelocityTrace::build(1.15, 0.15);

    // Same shape, swing scaled by 4
    for (a, b) in narrow.velocity().iter().zip(wide.velocity()) {
        assert!(((a - 0.15) * 4.0 - (b - 0.15)).abs() < 1e-9);
    }
}

#[test]
fn test_equal_psv_and_edv_gives_flat_trace() {
    let trace = VelocityTrace::build(0.2, 0.2);

    assert!(trace.velocity().iter().all(|&v| (v - 0.2).abs() < 1e-12));
}

#[test]
fn test_custom_samples_are_rebased_and_rescaled() {
    let trace =
        VelocityTrace::from_samples(&[1.0, 1.5, 2.0], &[-3.0, 5.0, 1.0], 0.6, 0.2).unwrap();

    assert_eq!(trace.time(), &[0.0, 0.5, 1.0]);
    assert!((trace.velocity()[0] - 0.2).abs() < 1e-12);
    assert!((trace.velocity()[1] - 0.6).abs() < 1e-12);
    assert!((trace.velocity()[2] - 0.4).abs() < 1e-12);
    assert_eq!(trace.peak_systolic(), 0.6);
    assert_eq!(trace.end_diastolic(), 0.2);
}

#[test]
fn test_flat_custom_samples_collapse_onto_edv() {
    let trace = VelocityTrace::from_samples(&[0.0, 1.0, 2.0], &[3.0, 3.0, 3.0], 0.5, 0.1).unwrap();

    assert!(trace.velocity().iter().all(|&v| (v - 0.1).abs() < 1e-12));
}

#[test]
fn test_malformed_samples_are_rejected() {
    let mismatched = VelocityTrace::from_samples(&[0.0, 1.0], &[0.0], 0.4, 0.1);
    assert!(matches!(mismatched, Err(ConfigError::MalformedTrace(_))));

    let too_short = VelocityTrace::from_samples(&[0.0], &[0.0], 0.4, 0.1);
    assert!(matches!(too_short, Err(ConfigError::MalformedTrace(_))));

    let unordered = VelocityTrace::from_samples(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0], 0.4, 0.1);
    assert!(matches!(unordered, Err(ConfigError::MalformedTrace(_))));

    let nan = VelocityTrace::from_samples(&[0.0, 1.0], &[f64::NAN, 1.0], 0.4, 0.1);
    assert!(matches!(nan, Err(ConfigError::MalformedTrace(_))));
}
