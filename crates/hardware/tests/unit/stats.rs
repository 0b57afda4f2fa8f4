//! # Run Statistics Tests
//!
//! Verifies the summary report produced at the end of a run.

use clocktb_core::stats::RunStats;

fn report(stats: &RunStats) -> String {
    let mut out = Vec::new();
    stats.write_report(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_default_stats_are_zero() {
    let stats = RunStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.evaluations, 0);
    assert_eq!(stats.trace_samples, None);
    assert!(!stats.finished_early);
}

#[test]
fn test_report_lists_counters() {
    let mut stats = RunStats::default();
    stats.cycles = 100;
    stats.reset_cycles = 5;
    stats.evaluations = 200;
    stats.trace_samples = Some(200);
    stats.final_count = 95;
    stats.stop_clock();

    let text = report(&stats);
    assert!(text.contains("COUNTER TESTBENCH STATISTICS"));
    assert!(text.contains("sim_cycles               100"));
    assert!(text.contains("sim_reset_cycles         5"));
    assert!(text.contains("sim_evals                200"));
    assert!(text.contains("trace_samples            200"));
    assert!(text.contains("final_count              95"));
    assert!(!text.contains("finished_early"));
}

#[test]
fn test_report_marks_disabled_trace_and_early_finish() {
    let mut stats = RunStats::default();
    stats.finished_early = true;
    let text = report(&stats);
    assert!(text.contains("(disabled)"));
    assert!(text.contains("finished_early           yes"));
}

#[test]
fn test_stopped_clock_is_frozen() {
    let mut stats = RunStats::default();
    stats.stop_clock();
    let first = stats.elapsed();
    std::thread::sleep(std::time::Duration::from_millis(2));
    assert_eq!(stats.elapsed(), first);
}
