//! Spike-day relocation.
//!
//! After generation, a fixed-size sample of records is moved onto each
//! configured spike date so that complaint volume visibly clusters there.
//! Each spike date draws from its own RNG stream (see `RngBank::for_spike_date`).

use crate::{complaint::ComplaintRecord, rng::RngBank};
use chrono::NaiveDate;

/// What one spike pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpikeReport {
    pub date: NaiveDate,
    pub relocated: usize,
    pub closed_shifted: usize,
}

/// Relocate `sample_size` records onto each spike date.
///
/// A record keeps its time of day; only the calendar date of `opened`
/// changes, and a present `closed` moves by the same delta. Records
/// already relocated by an earlier spike date are not drawn again, so
/// every spike date ends up with exactly `sample_size` relocated records
/// (fewer only if the pool runs dry).
pub fn apply_spike_adjustment(
    records: &mut [ComplaintRecord],
    spike_dates: &[NaiveDate],
    sample_size: usize,
    bank: &RngBank,
) -> Vec<SpikeReport> {
    let mut relocated = vec![false; records.len()];
    let mut reports = Vec::with_capacity(spike_dates.len());

    for &date in spike_dates {
        let pool: Vec<usize> = (0..records.len()).filter(|&i| !relocated[i]).collect();
        if pool.len() < sample_size {
            log::warn!(
                "spike {date}: only {} records available for a sample of {sample_size}",
                pool.len()
            );
        }

        let mut rng = bank.for_spike_date(date);
        let chosen = rng.sample_indices(pool.len(), sample_size);

        let mut closed_shifted = 0;
        for pick in &chosen {
            let idx = pool[*pick];
            if relocate(&mut records[idx], date) {
                closed_shifted += 1;
            }
            relocated[idx] = true;
        }

        log::debug!(
            "spike {date}: relocated {} records ({closed_shifted} with close timestamps)",
            chosen.len()
        );
        reports.push(SpikeReport { date, relocated: chosen.len(), closed_shifted });
    }
    reports
}

/// Move one record onto `date`. Returns whether a close timestamp was shifted.
fn relocate(record: &mut ComplaintRecord, date: NaiveDate) -> bool {
    let moved = date.and_time(record.opened.time());
    let delta = moved - record.opened;
    record.opened = moved;
    match record.closed.as_mut() {
        Some(closed) => {
            *closed += delta;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::GeneratorConfig, generator::generate_all, rng::StreamSlot};

    fn dataset(config: &GeneratorConfig) -> (RngBank, Vec<ComplaintRecord>) {
        let bank = RngBank::new(config.seed);
        let mut rng = bank.for_stream(StreamSlot::Records);
        let records = generate_all(config.rows, config, &mut rng);
        (bank, records)
    }

    #[test]
    fn relocation_keeps_time_of_day_and_duration() {
        let config = GeneratorConfig::default_test();
        let (_, mut records) = dataset(&config);
        let record = records
            .iter_mut()
            .find(|r| r.closed.is_some())
            .expect("some record has a close timestamp");
        let before = record.clone();
        let target = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();

        assert!(relocate(record, target));
        assert_eq!(record.opened.date(), target);
        assert_eq!(record.opened.time(), before.opened.time());
        assert_eq!(
            record.closed.unwrap() - record.opened,
            before.closed.unwrap() - before.opened
        );
    }

    #[test]
    fn each_spike_relocates_sample_size_distinct_records() {
        let config = GeneratorConfig::default_test();
        let (bank, mut records) = dataset(&config);
        let reports =
            apply_spike_adjustment(&mut records, &config.spike_dates, config.spike_sample_size, &bank);

        assert_eq!(reports.len(), config.spike_dates.len());
        for report in &reports {
            assert_eq!(report.relocated, config.spike_sample_size);
            let on_day = records.iter().filter(|r| r.opened.date() == report.date).count();
            assert!(on_day >= config.spike_sample_size, "{}: {on_day}", report.date);
        }
    }

    #[test]
    fn spike_selection_is_reproducible() {
        let config = GeneratorConfig::default_test();
        let (bank_a, mut a) = dataset(&config);
        let (bank_b, mut b) = dataset(&config);
        apply_spike_adjustment(&mut a, &config.spike_dates, 50, &bank_a);
        apply_spike_adjustment(&mut b, &config.spike_dates, 50, &bank_b);
        assert_eq!(a, b);
    }

    #[test]
    fn unselected_records_are_untouched() {
        let config = GeneratorConfig::default_test();
        let (bank, original) = dataset(&config);
        let mut adjusted = original.clone();
        apply_spike_adjustment(&mut adjusted, &config.spike_dates, 50, &bank);

        let changed = original.iter().zip(&adjusted).filter(|(a, b)| a != b).count();
        assert!(changed <= 50 * config.spike_dates.len());
        for (a, b) in original.iter().zip(&adjusted) {
            if a != b {
                assert!(config.spike_dates.contains(&b.opened.date()));
                assert_eq!(a.complaint_id, b.complaint_id);
                if let (Some(ca), Some(cb)) = (a.closed, b.closed) {
                    assert_eq!(cb - b.opened, ca - a.opened);
                }
            }
        }
    }

    #[test]
    fn small_pool_relocates_what_exists() {
        let config = GeneratorConfig::default_test();
        let (bank, records) = dataset(&config);
        let mut few = records[..30].to_vec();
        let dates = [NaiveDate::from_ymd_opt(2025, 10, 10).unwrap()];
        let reports = apply_spike_adjustment(&mut few, &dates, 50, &bank);
        assert_eq!(reports[0].relocated, 30);
        assert!(few.iter().all(|r| r.opened.date() == dates[0]));
    }
}
