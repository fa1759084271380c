use dopplersim::error::ConfigError;
use dopplersim::trace::{SliceCursor, TimeSlicer, VelocityTrace};

fn uniform_trace(samples: usize, dt: f64) -> VelocityTrace {
    let time: Vec<f64> = (0..samples).map(|i| i as f64 * dt).collect();
    let velocity: Vec<f64> = (0..samples).map(|i| (i % 7) as f64).collect();
    VelocityTrace::from_samples(&time, &velocity, 0.4, 0.1).unwrap()
}

#[test]
fn test_slices_cover_trace_without_overlap() {
    let trace = VelocityTrace::build(0.40, 0.15);
    let slices = TimeSlicer::partition(&trace, 0.1).unwrap();

    assert!(!slices.is_empty());
    assert_eq!(slices[0].start, 0);
    for pair in slices.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start);
    }
    assert_eq!(slices.last().unwrap().end(), trace.len());
    assert_eq!(slices.iter().map(|s| s.len).sum::<usize>(), trace.len());
}

#[test]
fn test_slices_never_exceed_duration() {
    let trace = VelocityTrace::build(0.40, 0.15);
    let slices = TimeSlicer::partition(&trace, 0.1).unwrap();

    for slice in &slices {
        assert!(slice.len > 0);
        assert!(slice.duration(&trace) <= 0.1 + 1e-12);
    }
}

#[test]
fn test_cut_when_elapsed_exceeds_duration() {
    // Samples every 10 ms, slices of 25 ms: t = 0, 10, 20 | 30, 40, 50 | ...
    let trace = uniform_trace(10, 0.01);
    let slices = TimeSlicer::partition(&trace, 0.025).unwrap();

    let lengths: Vec<usize> = slices.iter().map(|s| s.len).collect();
    assert_eq!(lengths, vec![3, 3, 3, 1]);
}

#[test]
fn test_duration_longer_than_trace_gives_one_slice() {
    let trace = uniform_trace(10, 0.01);
    let slices = TimeSlicer::partition(&trace, 5.0).unwrap();

    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].len, 10);
}

#[test]
fn test_slice_views_match_trace() {
    let trace = uniform_trace(10, 0.01);
    let slices = TimeSlicer::partition(&trace, 0.025).unwrap();

    let second = slices[1];
    assert_eq!(second.time(&trace), &trace.time()[3..6]);
    assert_eq!(second.velocity(&trace), &trace.velocity()[3..6]);
}

#[test]
fn test_non_positive_duration_is_rejected() {
    let trace = uniform_trace(10, 0.01);

    assert!(matches!(
        TimeSlicer::partition(&trace, 0.0),
        Err(ConfigError::InvalidParameter { .. })
    ));
    assert!(TimeSlicer::partition(&trace, f64::NAN).is_err());
}

#[test]
fn test_cursor_cycles_through_slices() {
    let trace = uniform_trace(10, 0.01);
    let slices = TimeSlicer::partition(&trace, 0.025).unwrap();
    let mut cursor = SliceCursor::new(slices.clone());

    let visited: Vec<usize> = (0..9)
        .map(|_| {
            let index = cursor.position();
            cursor.advance();
            index
        })
        .collect();
    assert_eq!(visited, vec![0, 1, 2, 3, 0, 1, 2, 3, 0]);

    cursor.rewind();
    assert_eq!(cursor.current(), slices[0]);
}
