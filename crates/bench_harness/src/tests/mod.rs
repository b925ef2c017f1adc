// unit tests

use super::*;

#[test]
fn work_runs_exactly_times_times() {
    let mut calls = 0u32;
    let result = benchmark("counting stub", 7, || calls += 1);

    assert!(result.is_ok());
    assert_eq!(calls, 7);
}

#[test]
fn average_is_non_negative() {
    let msec = benchmark("noop", 3, || {}).unwrap();
    assert!(msec >= 0.0);
}

#[test]
fn zero_iterations_is_rejected_without_running_work() {
    let mut calls = 0u32;
    let result = benchmark("never runs", 0, || calls += 1);

    assert!(matches!(result, Err(BenchError::InvalidIterations(0))));
    assert_eq!(calls, 0);
}

#[test]
fn ratio_of_two_to_ten_is_twenty_percent() {
    assert_eq!(report_ratio("TEST", 10.0, 2.0), 20.0);
}

#[test]
fn zero_naive_sample_reports_infinite_ratio() {
    let ratio = report_ratio("TEST", 0.0, 2.0);
    assert!(ratio.is_infinite());
}

#[test]
fn alloc_array_fills_to_requested_length() {
    let array = alloc_array(16, 10.0f32).unwrap();
    assert_eq!(array.len(), 16);
    assert!(array.iter().all(|&x| x == 10.0));
}

#[test]
fn alloc_array_handles_empty_request() {
    let array = alloc_array(0, 0.0f64).unwrap();
    assert!(array.is_empty());
}
