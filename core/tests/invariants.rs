//! Per-record invariants over a full-size generated dataset.

use chrono::Duration;
use cx_synth_core::{
    catalog::{Resolution, Status},
    config::GeneratorConfig,
    engine::SynthEngine,
    generator::generate_all,
    rng::{RngBank, StreamSlot},
};

fn full_dataset() -> Vec<cx_synth_core::complaint::ComplaintRecord> {
    SynthEngine::build(GeneratorConfig::default()).unwrap().generate().records
}

#[test]
fn issue_category_belongs_to_product() {
    for r in full_dataset() {
        assert!(
            r.product.issues().contains(&r.issue),
            "{} has issue {:?} outside {}",
            r.complaint_id, r.issue, r.product
        );
    }
}

#[test]
fn satisfaction_stays_in_range() {
    for r in full_dataset() {
        assert!((1..=5).contains(&r.csat_score), "{}: csat {}", r.complaint_id, r.csat_score);
    }
}

#[test]
fn escalated_is_always_unresolved() {
    let records = full_dataset();
    let escalated: Vec<_> = records.iter().filter(|r| r.status == Status::Escalated).collect();
    assert!(!escalated.is_empty());
    assert!(escalated.iter().all(|r| r.resolution == Resolution::Unresolved));
}

#[test]
fn closed_records_close_after_ttr_even_after_spikes() {
    for r in full_dataset().iter().filter(|r| r.status == Status::Closed) {
        let closed = r.closed.expect("closed status must carry a close timestamp");
        assert_eq!(
            closed - r.opened,
            Duration::hours(r.ttr_hours as i64),
            "{}",
            r.complaint_id
        );
    }
}

#[test]
fn numeric_fields_are_positive() {
    for r in full_dataset() {
        assert!(r.sla_target_hours >= 12, "{}", r.complaint_id);
        assert!(r.ttr_hours >= 1, "{}", r.complaint_id);
        assert!(r.frt_minutes >= 1, "{}", r.complaint_id);
        assert!(r.handle_time_minutes >= 2, "{}", r.complaint_id);
    }
}

/// Pre-spike, a provisional close sits at trunc(0.8 × ttr) hours.
#[test]
fn provisional_close_is_eighty_percent_of_ttr() {
    let config = GeneratorConfig::default();
    let mut rng = RngBank::new(config.seed).for_stream(StreamSlot::Records);
    for r in generate_all(config.rows, &config, &mut rng) {
        if r.status == Status::Closed {
            continue;
        }
        if let Some(closed) = r.closed {
            let expected = (r.ttr_hours as f64 * 0.8) as i64;
            assert_eq!(closed - r.opened, Duration::hours(expected), "{}", r.complaint_id);
        }
    }
}

#[test]
fn roughly_sixty_percent_of_unfinished_cases_lack_close() {
    let records = full_dataset();
    let unfinished: Vec<_> = records.iter().filter(|r| r.status != Status::Closed).collect();
    let missing = unfinished.iter().filter(|r| r.closed.is_none()).count();
    let share = missing as f64 / unfinished.len() as f64;
    assert!(unfinished.len() > 2_000, "expected ~2640 unfinished, got {}", unfinished.len());
    assert!((share - 0.6).abs() < 0.05, "share without close was {share:.3}");
}

#[test]
fn status_mix_tracks_weights() {
    let records = full_dataset();
    let closed = records.iter().filter(|r| r.status == Status::Closed).count() as f64;
    let share = closed / records.len() as f64;
    assert!((share - 0.78).abs() < 0.02, "closed share was {share:.3}");
}
