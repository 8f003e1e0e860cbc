//! Per-tool execution counters
//!
//! Counters live as long as the tool instance. They are best effort: two
//! calls finishing at the same instant may interleave their updates.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Running statistics of one tool
#[derive(Debug, Default)]
pub struct ToolStatistics {
    invocations: AtomicU64,
    total_execution_ms: AtomicU64,
    last_used: Mutex<Option<DateTime<Utc>>>,
}

/// Point-in-time copy of [`ToolStatistics`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolStatisticsSnapshot {
    pub invocations: u64,
    /// Mean wall-clock milliseconds per invocation
    pub average_execution_time: u64,
    pub last_used: Option<DateTime<Utc>>,
}

impl ToolStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished invocation
    pub fn record(&self, execution_time_ms: u64) {
        self.invocations.fetch_add(1, Ordering::Relaxed);
        self.total_execution_ms
            .fetch_add(execution_time_ms, Ordering::Relaxed);
        let mut last_used = self
            .last_used
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *last_used = Some(Utc::now());
    }

    pub fn snapshot(&self) -> ToolStatisticsSnapshot {
        let invocations = self.invocations.load(Ordering::Relaxed);
        let total = self.total_execution_ms.load(Ordering::Relaxed);
        let last_used = *self
            .last_used
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        ToolStatisticsSnapshot {
            invocations,
            average_execution_time: total.checked_div(invocations).unwrap_or(0),
            last_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = ToolStatistics::new().snapshot();
        assert_eq!(snapshot, ToolStatisticsSnapshot::default());
    }

    #[test]
    fn test_average_and_last_used() {
        let stats = ToolStatistics::new();
        let before = Utc::now();
        stats.record(100);
        stats.record(300);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.invocations, 2);
        assert_eq!(snapshot.average_execution_time, 200);
        assert!(snapshot.last_used.unwrap() >= before);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let json = serde_json::to_value(ToolStatistics::new().snapshot()).unwrap();
        assert_eq!(json["averageExecutionTime"], 0);
        assert!(json["lastUsed"].is_null());
    }
}
