//! Synthetic customer-experience complaint dataset generator.
//!
//! One seeded pass builds complaint records from fixed reference tables,
//! clusters a sample of them onto spike days, sorts them by opening time
//! and writes them as a delimited file.

pub mod catalog;
pub mod complaint;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod generator;
pub mod rng;
pub mod spike;
pub mod summary;
pub mod types;
