use crate::stores::attendance_store::AttendanceStore;
use crate::stores::leave_store::LeaveStore;
use crate::stores::material_store::MaterialStore;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Intent counters for the lifetime of the process
pub struct Metrics {
    pub total_intents: AtomicU64,
    pub accepted_intents: AtomicU64,
    pub rejected_intents: AtomicU64,
    pub declined_confirmations: AtomicU64,
    started: Instant,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub total_intents: u64,
    pub accepted_intents: u64,
    pub rejected_intents: u64,
    pub declined_confirmations: u64,
    pub acceptance_rate: f64,
    pub attendance_sessions: usize,
    pub leave_requests: usize,
    pub materials: usize,
    pub uptime_seconds: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            total_intents: AtomicU64::new(0),
            accepted_intents: AtomicU64::new(0),
            rejected_intents: AtomicU64::new(0),
            declined_confirmations: AtomicU64::new(0),
            started: Instant::now(),
        }
    }

    pub fn increment_intents(&self) {
        self.total_intents.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_accepted(&self) {
        self.accepted_intents.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.rejected_intents.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_declined(&self) {
        self.declined_confirmations.fetch_add(1, Ordering::Relaxed);
    }

    /// Counters plus current store sizes
    pub fn get_snapshot(
        &self,
        attendance: &AttendanceStore,
        leaves: &LeaveStore,
        materials: &MaterialStore,
    ) -> MetricsSnapshot {
        let total_intents = self.total_intents.load(Ordering::Relaxed);
        let accepted_intents = self.accepted_intents.load(Ordering::Relaxed);

        let acceptance_rate = if total_intents > 0 {
            (accepted_intents as f64 / total_intents as f64) * 100.0
        } else {
            0.0
        };

        MetricsSnapshot {
            total_intents,
            accepted_intents,
            rejected_intents: self.rejected_intents.load(Ordering::Relaxed),
            declined_confirmations: self.declined_confirmations.load(Ordering::Relaxed),
            acceptance_rate,
            attendance_sessions: attendance.len(),
            leave_requests: leaves.len(),
            materials: materials.len(),
            uptime_seconds: self.started.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
