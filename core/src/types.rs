//! Shared primitive types used across the generator.

use chrono::NaiveDateTime;

/// Whole hours (SLA targets, time-to-resolution).
pub type Hours = u32;

/// Whole minutes (first response, handle time).
pub type Minutes = u32;

/// Wall-clock timestamp of a complaint event. Seconds are always zero.
pub type Timestamp = NaiveDateTime;

/// Text form used in the output file, e.g. `2025-07-01 08:15:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
