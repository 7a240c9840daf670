/*!
 * FCAI Scheduler
 * Hybrid dynamic-quantum scheduling driven by a composite factor
 */

use super::types::Segment;
use crate::core::errors::SchedulerError;
use crate::core::types::{SimResult, Time};
use crate::process::table::Idx;
use crate::process::types::Process;
use crate::process::ProcessTable;
use log::{debug, info};
use std::collections::VecDeque;

/// How the next process is picked. Explicit engine state, carried from
/// one dispatch to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionMode {
    /// Head of the ready queue in admission order. Initial mode, and
    /// the mode after a completion or a fully spent quantum.
    Fcfs,
    /// Lowest factor wins (earliest arrival on ties). Mode after a
    /// mid-burst preemption.
    BestFactor,
}

/// Factor for a ready-queue member: static priority folded with scaled
/// arrival and scaled remaining burst. Lower runs sooner.
fn factor(process: &Process, v1: f64, v2: f64) -> f64 {
    (10 - process.priority) as f64
        + scaled_ceil(process.arrival, v1)
        + scaled_ceil(process.remaining, v2)
}

/// `ceil(value / scale)`, with `ceil(x / 0) = 0` by convention so the
/// degenerate single-process / all-zero-arrival sets stay finite.
fn scaled_ceil(value: Time, scale: f64) -> f64 {
    if scale == 0.0 {
        0.0
    } else {
        (value as f64 / scale).ceil()
    }
}

/// Move every arrived process from `pending` into the ready queue, then
/// refresh the factor of every queued process. The running process is
/// not in the queue and keeps the factor it had when last enqueued.
fn admit(
    table: &mut ProcessTable,
    pending: &mut Vec<Idx>,
    ready: &mut VecDeque<Idx>,
    now: Time,
    v1: f64,
    v2: f64,
) {
    pending.retain(|&idx| {
        if table.get(idx).arrival <= now {
            ready.push_back(idx);
            false
        } else {
            true
        }
    });

    for i in 0..ready.len() {
        let idx = ready[i];
        let f = factor(table.get(idx), v1, v2);
        table.get_mut(idx).fcai_factor = f;
    }
}

/// Queue position of the lowest-factor process, earliest arrival on
/// ties. First match in queue order wins.
fn best_pos(table: &ProcessTable, ready: &VecDeque<Idx>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (pos, &idx) in ready.iter().enumerate() {
        let candidate = table.get(idx);
        let better = match best {
            None => true,
            Some(b) => {
                let incumbent = table.get(ready[b]);
                candidate.fcai_factor < incumbent.fcai_factor
                    || (candidate.fcai_factor == incumbent.fcai_factor
                        && candidate.arrival < incumbent.arrival)
            }
        };
        if better {
            best = Some(pos);
        }
    }
    best
}

pub(super) fn schedule(table: &mut ProcessTable, context_switch: Time) -> SimResult<Vec<Segment>> {
    // A process admitted without a quantum cannot be dispatched here
    for p in table.iter() {
        if p.quantum == 0 {
            return Err(SchedulerError::InvalidQuantum(p.pid));
        }
    }

    // Scaling constants from the initial set
    let v1 = table.iter().map(|p| p.arrival).max().unwrap_or(0) as f64 / 10.0;
    let v2 = table.iter().map(|p| p.burst).max().unwrap_or(0) as f64 / 10.0;
    debug!("FCAI scaling: v1={}, v2={}", v1, v2);

    let mut pending: Vec<Idx> = table.indices().collect();
    let mut ready: VecDeque<Idx> = VecDeque::new();
    let mut segments: Vec<Segment> = Vec::new();
    let mut mode = SelectionMode::Fcfs;
    let mut now: Time = 0;

    while !pending.is_empty() || !ready.is_empty() {
        admit(table, &mut pending, &mut ready, now, v1, v2);
        while ready.is_empty() && !pending.is_empty() {
            now += 1;
            admit(table, &mut pending, &mut ready, now, v1, v2);
        }
        if ready.is_empty() {
            break;
        }

        let start = now;
        let idx = match mode {
            SelectionMode::BestFactor => {
                let pos = best_pos(table, &ready).ok_or_else(|| {
                    SchedulerError::InvariantViolation(
                        "best-factor selection over an empty ready queue".into(),
                    )
                })?;
                ready.remove(pos).ok_or_else(|| {
                    SchedulerError::InvariantViolation("ready queue position vanished".into())
                })?
            }
            SelectionMode::Fcfs => ready.pop_front().ok_or_else(|| {
                SchedulerError::InvariantViolation("fcfs selection over an empty ready queue".into())
            })?,
        };

        if table.get(idx).remaining == 0 {
            return Err(SchedulerError::InvariantViolation(format!(
                "completed process {} selected for dispatch",
                table.get(idx).pid
            )));
        }

        // Non-preemptive window: 40% of the quantum (rounded up), capped
        // by the remaining burst. Nothing can interrupt this portion.
        let quantum = table.get(idx).quantum;
        let window = ((quantum as f64) * 0.4).ceil() as Time;
        let slice = window.min(table.get(idx).remaining);
        now += slice;
        table.get_mut(idx).remaining -= slice;
        let mut remaining_quantum = quantum - slice;

        // Preemptible portion: unit steps until the burst or quantum is
        // spent, or a strictly lower-factor process shows up.
        while table.get(idx).remaining > 0 && remaining_quantum > 0 {
            if let Some(pos) = best_pos(table, &ready) {
                let challenger = table.get(ready[pos]);
                if challenger.fcai_factor < table.get(idx).fcai_factor {
                    break;
                }
            }
            now += 1;
            remaining_quantum -= 1;
            table.get_mut(idx).remaining -= 1;
            admit(table, &mut pending, &mut ready, now, v1, v2);
        }

        segments.push(Segment::emit(table.get(idx), start, now - start));

        let process = table.get_mut(idx);
        if process.remaining == 0 {
            process.finish(now)?;
            info!("Process {}: from {} to {} -> completed", process.name, start, now);
            mode = SelectionMode::Fcfs;
        } else if remaining_quantum == 0 {
            process.quantum = quantum + 2;
            info!(
                "Process {}: from {} to {}, quantum {} -> {}",
                process.name, start, now, quantum, process.quantum
            );
            ready.push_back(idx);
            mode = SelectionMode::Fcfs;
        } else {
            process.quantum = quantum + remaining_quantum;
            info!(
                "Process {}: from {} to {}, quantum {} -> {} (preempted)",
                process.name, start, now, quantum, process.quantum
            );
            ready.push_back(idx);
            mode = SelectionMode::BestFactor;
        }

        // Switch cost is charged after every dispatch, whatever the outcome
        now += context_switch;
    }

    Ok(segments)
}
