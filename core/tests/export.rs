//! End-to-end: generate the reference dataset and read the file back.

use cx_synth_core::{
    complaint::COLUMNS,
    config::GeneratorConfig,
    engine::SynthEngine,
    types::TIMESTAMP_FORMAT,
};
use chrono::NaiveDateTime;
use std::collections::HashSet;

#[test]
fn reference_run_writes_sorted_unique_rows() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cx.csv");

    let engine = SynthEngine::build(GeneratorConfig::default()).unwrap();
    let outcome = engine.run_to(&path).unwrap();
    assert_eq!(outcome.rows_written, 12_000);
    assert_eq!(outcome.summary.rows, 12_000);

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), COLUMNS.join(","));

    let rows: Vec<Vec<&str>> = lines.map(|l| l.split(',').collect()).collect();
    assert_eq!(rows.len(), 12_000);

    let mut ids = HashSet::new();
    let mut previous: Option<NaiveDateTime> = None;
    for row in &rows {
        assert_eq!(row.len(), COLUMNS.len(), "{row:?}");
        assert!(ids.insert(row[0]), "duplicate complaint id {}", row[0]);

        let opened = NaiveDateTime::parse_from_str(row[2], TIMESTAMP_FORMAT).unwrap();
        if let Some(prev) = previous {
            assert!(opened >= prev, "rows out of order at {}", row[0]);
        }
        previous = Some(opened);

        if row[8] == "Closed" {
            assert!(!row[3].is_empty(), "closed row {} lacks DateClosed", row[0]);
        }
        if !row[3].is_empty() {
            NaiveDateTime::parse_from_str(row[3], TIMESTAMP_FORMAT).unwrap();
        }
    }
}

#[test]
fn metrics_columns_are_written_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cx_metrics.csv");
    let config = GeneratorConfig { include_metrics: true, ..GeneratorConfig::default_test() };

    SynthEngine::build(config).unwrap().run_to(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.ends_with(",TTR_Hours,CSAT_Score"), "{header}");
    for line in text.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), COLUMNS.len() + 2);
        let csat: u8 = fields[16].parse().unwrap();
        assert!((1..=5).contains(&csat));
    }
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("cx.csv");
    let engine = SynthEngine::build(GeneratorConfig::default_test()).unwrap();
    assert!(engine.run_to(&path).is_err());
}

#[test]
fn invalid_config_is_rejected_before_generation() {
    let config = GeneratorConfig { rows: 100, ..GeneratorConfig::default() };
    assert!(SynthEngine::build(config).is_err());
}
