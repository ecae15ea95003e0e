//! Record generation.
//!
//! Every sampling step takes the caller's `SynthRng`; the draw order
//! inside `generate_record` is part of the output contract. Reordering
//! draws changes every dataset produced from a given seed.

use crate::{
    catalog::{
        base_resolution_hours, Channel, Product, Region, Resolution, Segment, Severity, Status,
        OPENING_HOURS,
    },
    complaint::ComplaintRecord,
    config::GeneratorConfig,
    rng::SynthRng,
    types::{Hours, Minutes, Timestamp},
};
use chrono::{Duration, NaiveDate, NaiveTime};

const TTR_NOISE_SIGMA: f64 = 0.45;
const FRT_NOISE_SIGMA: f64 = 0.55;
const HANDLE_LOG_MEAN: f64 = 3.0;
const HANDLE_LOG_SIGMA: f64 = 0.35;
const HANDLE_MIN_MINUTES: Minutes = 2;
const CSAT_BASE: f64 = 4.3;
const CSAT_NOISE_SIGMA: f64 = 0.35;
/// Share of open/escalated cases that have no close timestamp yet.
const UNCLOSED_SHARE: f64 = 0.6;
/// Provisional close point for open/escalated cases, as a share of TTR.
const PROVISIONAL_CLOSE_SHARE: f64 = 0.8;

/// A uniform day in `[start, start + window_days]`, an hour from the
/// opening-hour profile, a uniform minute.
pub fn sample_open_timestamp(
    start: NaiveDate,
    window_days: u64,
    rng: &mut SynthRng,
) -> Timestamp {
    let offset = rng.next_u64_below(window_days.saturating_add(1));
    let day = start + Duration::days(offset as i64);
    let hour = *rng.pick_weighted(&OPENING_HOURS);
    let minute = rng.next_u64_below(60) as u32;
    day.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default())
}

pub fn compute_sla_target(product: Product, severity: Severity) -> Hours {
    let base = product.base_sla_hours();
    match severity {
        Severity::High => base.saturating_sub(12).max(12),
        Severity::Low => base + 24,
        Severity::Medium => base,
    }
}

pub fn compute_resolution_hours(
    _product: Product,
    issue: &str,
    channel: Channel,
    severity: Severity,
    rng: &mut SynthRng,
) -> Hours {
    let base = base_resolution_hours(issue)
        * channel.resolution_factor()
        * severity.resolution_factor();
    let noise = rng.lognormal(0.0, TTR_NOISE_SIGMA);
    round_at_least(base * noise, 1)
}

pub fn compute_first_response_minutes(channel: Channel, rng: &mut SynthRng) -> Minutes {
    let noise = rng.lognormal(0.0, FRT_NOISE_SIGMA);
    round_at_least(channel.base_response_minutes() as f64 * noise, 1)
}

pub fn compute_handle_minutes(rng: &mut SynthRng) -> Minutes {
    round_at_least(rng.lognormal(HANDLE_LOG_MEAN, HANDLE_LOG_SIGMA), HANDLE_MIN_MINUTES)
}

/// Deterministic part of the satisfaction score, before noise.
pub fn satisfaction_baseline(status: Status, resolution: Resolution, ttr: Hours, sla: Hours) -> f64 {
    let mut score = CSAT_BASE;
    if status != Status::Closed {
        score -= 0.5;
    }
    score -= match resolution {
        Resolution::Unresolved => 1.4,
        Resolution::PartiallyResolved => 0.7,
        Resolution::Resolved => 0.0,
    };
    if ttr > sla {
        score -= 0.8;
    }
    score
}

pub fn compute_satisfaction(
    status: Status,
    resolution: Resolution,
    ttr: Hours,
    sla: Hours,
    rng: &mut SynthRng,
) -> u8 {
    let score = satisfaction_baseline(status, resolution, ttr, sla)
        + rng.normal(0.0, CSAT_NOISE_SIGMA);
    score.round().clamp(1.0, 5.0) as u8
}

/// Outcome of the status draw for one complaint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusOutcome {
    pub status: Status,
    pub resolution: Resolution,
    pub closed: Option<Timestamp>,
}

/// Draws status, then the close timestamp and resolution it implies.
///
/// Closed cases close exactly `ttr` hours after opening. Open and
/// escalated cases either have no close timestamp yet or a provisional
/// one at 80% of `ttr`, truncated to whole hours. Escalations are
/// always unresolved.
pub fn assign_status_and_resolution(
    opened: Timestamp,
    ttr: Hours,
    rng: &mut SynthRng,
) -> StatusOutcome {
    let status = *rng.pick_weighted(&Status::WEIGHTS);
    if status == Status::Closed {
        let closed = opened + Duration::hours(ttr as i64);
        let resolution = *rng.pick_weighted(&Resolution::CLOSED_WEIGHTS);
        return StatusOutcome { status, resolution, closed: Some(closed) };
    }

    let closed = if rng.chance(UNCLOSED_SHARE) {
        None
    } else {
        let provisional = (ttr as f64 * PROVISIONAL_CLOSE_SHARE) as i64;
        Some(opened + Duration::hours(provisional))
    };
    let resolution = if status == Status::Escalated {
        Resolution::Unresolved
    } else {
        *rng.pick_weighted(&Resolution::OPEN_WEIGHTS)
    };
    StatusOutcome { status, resolution, closed }
}

/// Build the record at sequence position `index`.
pub fn generate_record(index: usize, config: &GeneratorConfig, rng: &mut SynthRng) -> ComplaintRecord {
    let opened = sample_open_timestamp(config.start_date, config.window_days(), rng);
    let product = *rng.pick(&Product::ALL);
    let issue = *rng.pick(product.issues());
    let channel = *rng.pick(&Channel::ALL);
    let segment = *rng.pick(&Segment::ALL);
    let region = *rng.pick(&Region::ALL);
    let severity = *rng.pick_weighted(&Severity::WEIGHTS);

    let sla = compute_sla_target(product, severity);
    let ttr = compute_resolution_hours(product, issue, channel, severity, rng);
    let outcome = assign_status_and_resolution(opened, ttr, rng);

    let frt = compute_first_response_minutes(channel, rng);
    let csat = compute_satisfaction(outcome.status, outcome.resolution, ttr, sla, rng);
    let handle = compute_handle_minutes(rng);
    let customer_id = format!("C{}", rng.next_u64_between(10_000, 99_999));

    ComplaintRecord {
        complaint_id: ComplaintRecord::make_id(&opened, index),
        customer_id,
        opened,
        closed: outcome.closed,
        channel,
        product,
        issue,
        severity,
        status: outcome.status,
        resolution: outcome.resolution,
        sla_target_hours: sla,
        ttr_hours: ttr,
        frt_minutes: frt,
        handle_time_minutes: handle,
        csat_score: csat,
        segment,
        region,
    }
}

/// Generate `n` records in sequence order.
pub fn generate_all(n: usize, config: &GeneratorConfig, rng: &mut SynthRng) -> Vec<ComplaintRecord> {
    let records: Vec<ComplaintRecord> = (0..n).map(|i| generate_record(i, config, rng)).collect();
    log::debug!("{}: generated {} records", rng.name, records.len());
    records
}

fn round_at_least(value: f64, floor: u32) -> u32 {
    (value.round().max(floor as f64)) as u32
}
