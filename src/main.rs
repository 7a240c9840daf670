/*!
 * schedsim - Demo Runner
 *
 * Stand-in for the interactive console and Gantt renderer: builds a
 * sample workload, runs the selected policy, and prints the execution
 * order, per-process metrics, and a JSON dump of the trace.
 *
 * Usage: schedsim [policy] [context_switch]
 */

use log::info;
use schedsim::{scheduler, ProcessSpec, ProcessTable, SchedulingPolicy, SimResult, Time};
use std::env;
use std::error::Error;

fn sample_workload() -> SimResult<ProcessTable> {
    ProcessTable::from_specs([
        ProcessSpec::new("P1", 0, 17, 4).with_quantum(4),
        ProcessSpec::new("P2", 3, 6, 9).with_quantum(3),
        ProcessSpec::new("P3", 4, 10, 3).with_quantum(5),
        ProcessSpec::new("P4", 29, 4, 8).with_quantum(2),
    ])
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let policy = match env::args().nth(1) {
        Some(arg) => SchedulingPolicy::from_str(&arg)?,
        None => SchedulingPolicy::Fcai,
    };
    let context_switch: Time = match env::args().nth(2) {
        Some(arg) => arg.parse()?,
        None => 1,
    };

    info!("schedsim starting: policy={}", policy.as_str());

    let mut table = sample_workload()?;
    let schedule = scheduler::run(policy, &mut table, context_switch)?;
    let metrics = scheduler::metrics::compute(&table)?;

    println!(
        "Execution order: {} -> end",
        schedule.execution_order().join(" -> ")
    );
    println!();

    for m in &metrics.per_process {
        println!("Process: {}", m.name);
        println!("  Completion Time: {}", m.completion_time);
        println!("  Waiting Time:    {}", m.waiting_time);
        println!("  Turnaround Time: {}", m.turnaround_time);
    }
    println!();
    println!("Average Waiting Time:    {}", metrics.avg_waiting_time);
    println!("Average Turnaround Time: {}", metrics.avg_turnaround_time);
    println!();
    println!("{}", serde_json::to_string_pretty(&schedule)?);

    Ok(())
}
