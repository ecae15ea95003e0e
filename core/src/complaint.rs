//! The complaint record and the column layout it is written with.

use crate::{
    catalog::{Channel, Product, Region, Resolution, Segment, Severity, Status},
    types::{Hours, Minutes, Timestamp, TIMESTAMP_FORMAT},
};
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintRecord {
    pub complaint_id: String,
    pub customer_id: String,
    pub opened: Timestamp,
    pub closed: Option<Timestamp>,
    pub channel: Channel,
    pub product: Product,
    pub issue: &'static str,
    pub severity: Severity,
    pub status: Status,
    pub resolution: Resolution,
    pub sla_target_hours: Hours,
    pub ttr_hours: Hours,
    pub frt_minutes: Minutes,
    pub handle_time_minutes: Minutes,
    pub csat_score: u8,
    pub segment: Segment,
    pub region: Region,
}

/// Output columns, in file order.
pub const COLUMNS: [&str; 15] = [
    "ComplaintID",
    "CustomerID",
    "DateOpened",
    "DateClosed",
    "Channel",
    "Product",
    "IssueCategory",
    "Severity",
    "Status",
    "Resolution",
    "SLA_Target_Hours",
    "FRT_Minutes",
    "HandleTime_Minutes",
    "CustomerSegment",
    "Region",
];

/// Extra trailing columns written when metrics are enabled.
pub const METRIC_COLUMNS: [&str; 2] = ["TTR_Hours", "CSAT_Score"];

impl ComplaintRecord {
    /// Complaint identifier: `CX` + two-digit year + month opened + 5-digit sequence.
    pub fn make_id(opened: &Timestamp, index: usize) -> String {
        format!("CX{}{index:05}", opened.format("%y%m"))
    }

    pub fn sla_breached(&self) -> bool {
        self.ttr_hours > self.sla_target_hours
    }

    /// Field values in `COLUMNS` order, followed by `METRIC_COLUMNS`
    /// when `with_metrics` is set.
    pub fn fields(&self, with_metrics: bool) -> Vec<String> {
        let mut out = vec![
            self.complaint_id.clone(),
            self.customer_id.clone(),
            self.opened.format(TIMESTAMP_FORMAT).to_string(),
            self.closed
                .map(|c| c.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
            self.channel.label().to_string(),
            self.product.label().to_string(),
            self.issue.to_string(),
            self.severity.label().to_string(),
            self.status.label().to_string(),
            self.resolution.label().to_string(),
            self.sla_target_hours.to_string(),
            self.frt_minutes.to_string(),
            self.handle_time_minutes.to_string(),
            self.segment.label().to_string(),
            self.region.label().to_string(),
        ];
        if with_metrics {
            out.push(self.ttr_hours.to_string());
            out.push(self.csat_score.to_string());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn sample() -> ComplaintRecord {
        let opened = at(2025, 7, 3, 9, 5);
        ComplaintRecord {
            complaint_id: ComplaintRecord::make_id(&opened, 42),
            customer_id: "C12345".into(),
            opened,
            closed: None,
            channel: Channel::LiveChat,
            product: Product::Atm,
            issue: "Card retained",
            severity: Severity::High,
            status: Status::Escalated,
            resolution: Resolution::Unresolved,
            sla_target_hours: 36,
            ttr_hours: 40,
            frt_minutes: 3,
            handle_time_minutes: 19,
            csat_score: 2,
            segment: Segment::Sme,
            region: Region::RiftValley,
        }
    }

    #[test]
    fn id_encodes_year_month_and_sequence() {
        assert_eq!(ComplaintRecord::make_id(&at(2026, 1, 31, 8, 0), 7), "CX260100007");
        assert_eq!(sample().complaint_id, "CX250700042");
    }

    #[test]
    fn fields_follow_column_order() {
        let fields = sample().fields(false);
        assert_eq!(fields.len(), COLUMNS.len());
        assert_eq!(fields[2], "2025-07-03 09:05:00");
        assert_eq!(fields[3], "", "absent close timestamp is blank");
        assert_eq!(fields[5], "ATM");
        assert_eq!(fields[14], "Rift Valley");
    }

    #[test]
    fn metrics_are_appended() {
        let fields = sample().fields(true);
        assert_eq!(fields.len(), COLUMNS.len() + METRIC_COLUMNS.len());
        assert_eq!(&fields[15..], ["40", "2"]);
    }

    #[test]
    fn breach_is_strictly_greater() {
        let mut r = sample();
        assert!(r.sla_breached());
        r.ttr_hours = r.sla_target_hours;
        assert!(!r.sla_breached());
    }
}
