/*!
 * Scheduler Types
 * Policy selection and the execution-trace output contract
 */

use crate::core::types::{Pid, Priority, Time};
use crate::process::types::Process;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Scheduling policy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulingPolicy {
    /// Non-preemptive priority scheduling
    Priority,
    /// Non-preemptive shortest job first with starvation avoidance
    Sjf,
    /// Preemptive shortest remaining time first with starvation avoidance
    Srtf,
    /// Hybrid dynamic-quantum scheduling (FCAI)
    Fcai,
}

impl SchedulingPolicy {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "priority" | "prio" => Ok(Self::Priority),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "srtf" | "shortest_remaining_time_first" => Ok(Self::Srtf),
            "fcai" => Ok(Self::Fcai),
            _ => Err(format!(
                "Invalid policy '{}'. Valid: priority, sjf, srtf, fcai",
                s
            )),
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::Fcai => "fcai",
        }
    }

    pub const fn all() -> [SchedulingPolicy; 4] {
        [Self::Priority, Self::Sjf, Self::Srtf, Self::Fcai]
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// One contiguous slice of CPU time given to one process.
/// Append-only and immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Segment {
    pub name: String,
    pub pid: Pid,
    pub priority: Priority,
    pub start: Time,
    pub duration: Time,
}

impl Segment {
    pub(crate) fn emit(process: &Process, start: Time, duration: Time) -> Self {
        Self {
            name: process.name.clone(),
            pid: process.pid,
            priority: process.priority,
            start,
            duration,
        }
    }
}

/// An engine's product: the policy that ran and the ordered trace it
/// produced. Completion times live on the processes themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Schedule {
    pub policy: SchedulingPolicy,
    pub segments: Vec<Segment>,
}

impl Schedule {
    /// Process names in dispatch order, consecutive repeats collapsed.
    pub fn execution_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if order.last().copied() != Some(segment.name.as_str()) {
                order.push(&segment.name);
            }
        }
        order
    }
}
