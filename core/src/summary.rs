//! Aggregate view of a generated dataset, printed at the end of a run.

use crate::{
    catalog::{Severity, Status},
    complaint::ComplaintRecord,
    types::Timestamp,
};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub closed: usize,
    pub open: usize,
    pub escalated: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub sla_breaches: usize,
    /// Open or escalated records with no close timestamp.
    pub awaiting_close: usize,
    pub mean_csat: f64,
    pub first_opened: Option<Timestamp>,
    pub last_opened: Option<Timestamp>,
}

impl DatasetSummary {
    pub fn from_records(records: &[ComplaintRecord]) -> Self {
        let mut s = Self { rows: records.len(), ..Self::default() };
        let mut csat_total = 0u64;

        for r in records {
            match r.status {
                Status::Closed => s.closed += 1,
                Status::Open => s.open += 1,
                Status::Escalated => s.escalated += 1,
            }
            match r.severity {
                Severity::Low => s.low += 1,
                Severity::Medium => s.medium += 1,
                Severity::High => s.high += 1,
            }
            if r.sla_breached() {
                s.sla_breaches += 1;
            }
            if r.status != Status::Closed && r.closed.is_none() {
                s.awaiting_close += 1;
            }
            csat_total += r.csat_score as u64;
            s.first_opened = Some(s.first_opened.map_or(r.opened, |t| t.min(r.opened)));
            s.last_opened = Some(s.last_opened.map_or(r.opened, |t| t.max(r.opened)));
        }

        if !records.is_empty() {
            s.mean_csat = csat_total as f64 / records.len() as f64;
        }
        s
    }

    pub fn sla_breach_rate(&self) -> f64 {
        if self.rows == 0 {
            return 0.0;
        }
        self.sla_breaches as f64 / self.rows as f64
    }
}
