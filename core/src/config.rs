use crate::error::{SynthError, SynthResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SEED: u64 = 7;
pub const DEFAULT_ROWS: usize = 12_000;
pub const DEFAULT_SPIKE_SAMPLE_SIZE: usize = 200;
pub const DEFAULT_OUTPUT_PATH: &str = "CX_Complaints_Synthetic_KenyaStyle.csv";

/// Every parameter of a generation run. `Default` reproduces the
/// reference dataset; a JSON file may override any subset of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub rows: usize,
    /// First calendar day a complaint may open on.
    pub start_date: NaiveDate,
    /// Last calendar day a complaint may open on (inclusive).
    pub end_date: NaiveDate,
    pub spike_dates: Vec<NaiveDate>,
    pub spike_sample_size: usize,
    pub output_path: String,
    /// Append TTR_Hours and CSAT_Score columns to the output.
    pub include_metrics: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            rows: DEFAULT_ROWS,
            start_date: ymd(2025, 7, 1),
            end_date: ymd(2026, 2, 23),
            spike_dates: vec![ymd(2025, 10, 10), ymd(2025, 12, 20), ymd(2026, 1, 15)],
            spike_sample_size: DEFAULT_SPIKE_SAMPLE_SIZE,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            include_metrics: false,
        }
    }
}

impl GeneratorConfig {
    /// Load overrides from a JSON file. Fields missing from the file
    /// keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> SynthResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Small config for unit tests: same tables, fewer rows, lighter spikes.
    pub fn default_test() -> Self {
        Self {
            rows: 2_000,
            spike_sample_size: 50,
            output_path: "cx_test.csv".to_string(),
            ..Self::default()
        }
    }

    /// Number of whole days between start and end (the window holds one more).
    /// An inverted window counts as zero days.
    pub fn window_days(&self) -> u64 {
        (self.end_date - self.start_date).num_days().max(0) as u64
    }

    pub fn validate(&self) -> SynthResult<()> {
        if self.rows == 0 {
            return Err(invalid("rows must be > 0"));
        }
        if self.end_date < self.start_date {
            return Err(invalid(format!(
                "end_date {} precedes start_date {}",
                self.end_date, self.start_date
            )));
        }
        let spike_demand = self.spike_dates.len().checked_mul(self.spike_sample_size);
        if spike_demand.map_or(true, |demand| demand > self.rows) {
            return Err(invalid(format!(
                "{} spike dates x {} records exceeds {} rows",
                self.spike_dates.len(),
                self.spike_sample_size,
                self.rows
            )));
        }
        Ok(())
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar constant")
}

fn invalid(reason: impl Into<String>) -> SynthError {
    SynthError::InvalidConfig { reason: reason.into() }
}
