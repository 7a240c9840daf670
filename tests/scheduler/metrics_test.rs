/*!
 * Metrics Tests
 * Waiting/turnaround aggregation and the degenerate-input guards
 */

use pretty_assertions::assert_eq;
use schedsim::scheduler::metrics;
use schedsim::{run, ProcessSpec, ProcessTable, SchedulerError, SchedulingPolicy};

#[test]
fn test_turnaround_is_at_least_burst() {
    let mut table = ProcessTable::from_specs([
        ProcessSpec::new("a", 0, 6, 2).with_quantum(4),
        ProcessSpec::new("b", 1, 3, 1).with_quantum(4),
        ProcessSpec::new("c", 9, 2, 3).with_quantum(4),
    ])
    .unwrap();
    run(SchedulingPolicy::Fcai, &mut table, 1).unwrap();

    let m = metrics::compute(&table).unwrap();
    for (row, p) in m.per_process.iter().zip(table.iter()) {
        assert!(
            row.turnaround_time >= p.burst,
            "{} finished in less than its burst",
            p.name
        );
        assert!(row.waiting_time >= 0);
    }
}

#[test]
fn test_known_priority_metrics() {
    let mut table = ProcessTable::from_specs([
        ProcessSpec::new("fast", 0, 2, 1),
        ProcessSpec::new("slow", 0, 8, 2),
    ])
    .unwrap();
    run(SchedulingPolicy::Priority, &mut table, 0).unwrap();

    let m = metrics::compute(&table).unwrap();
    // fast: [0,2); slow: [2,10)
    assert_eq!(m.per_process[0].waiting_time, 0);
    assert_eq!(m.per_process[1].waiting_time, 2);
    assert_eq!(m.avg_waiting_time, 1.0);
    assert_eq!(m.avg_turnaround_time, 6.0);
}

#[test]
fn test_context_switch_inflates_waiting() {
    let build = || {
        ProcessTable::from_specs([
            ProcessSpec::new("a", 0, 3, 1),
            ProcessSpec::new("b", 0, 3, 2),
            ProcessSpec::new("c", 0, 3, 3),
        ])
        .unwrap()
    };

    let mut free = build();
    run(SchedulingPolicy::Priority, &mut free, 0).unwrap();
    let mut costly = build();
    run(SchedulingPolicy::Priority, &mut costly, 5).unwrap();

    let free_m = metrics::compute(&free).unwrap();
    let costly_m = metrics::compute(&costly).unwrap();
    assert!(costly_m.avg_waiting_time > free_m.avg_waiting_time);
}

#[test]
fn test_empty_set_is_degenerate() {
    let table = ProcessTable::new();
    assert_eq!(
        metrics::compute(&table).unwrap_err(),
        SchedulerError::EmptyProcessSet
    );
}

#[test]
fn test_unscheduled_table_is_degenerate() {
    let table = ProcessTable::from_specs([ProcessSpec::new("idle", 0, 4, 1)]).unwrap();
    assert_eq!(
        metrics::compute(&table).unwrap_err(),
        SchedulerError::Incomplete(1)
    );
}

#[test]
fn test_metrics_serialize() {
    let mut table = ProcessTable::from_specs([ProcessSpec::new("a", 0, 2, 1)]).unwrap();
    run(SchedulingPolicy::Sjf, &mut table, 0).unwrap();

    let m = metrics::compute(&table).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    let back: schedsim::ScheduleMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}
