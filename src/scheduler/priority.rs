/*!
 * Priority Scheduler
 * Non-preemptive: one full-burst segment per process in priority order
 */

use super::types::Segment;
use crate::core::types::{SimResult, Time};
use crate::process::table::Idx;
use crate::process::ProcessTable;
use log::debug;

/// The total order is fixed up front: priority ascending, arrival
/// ascending on ties (stable sort keeps admission order beyond that).
/// No preemption, no starvation handling.
pub(super) fn schedule(table: &mut ProcessTable, context_switch: Time) -> SimResult<Vec<Segment>> {
    let mut order: Vec<Idx> = table.indices().collect();
    order.sort_by_key(|&idx| {
        let p = table.get(idx);
        (p.priority, p.arrival)
    });

    let mut now: Time = 0;
    let mut segments = Vec::with_capacity(order.len());

    for idx in order {
        // Idle gap: the next process in order has not arrived yet
        if table.get(idx).arrival > now {
            now = table.get(idx).arrival;
        }

        let process = table.get_mut(idx);
        segments.push(Segment::emit(process, now, process.burst));
        now += process.burst;
        process.finish(now)?;
        debug!(
            "Dispatched {} for [{}..{}), completion {}",
            process.name,
            now - process.burst,
            now,
            now
        );

        now += context_switch;
    }

    Ok(segments)
}
