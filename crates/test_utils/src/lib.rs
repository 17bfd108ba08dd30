//! Test Utilities
//!
//! Shared builders and fixtures for the quote engine test suites.
//! Builders provide sensible valid defaults so tests only specify the
//! fields they care about.

pub mod builders;
pub mod fixtures;

pub use builders::{IntakeRecordBuilder, RateInputBuilder};
pub use fixtures::{MoneyFixtures, StringFixtures, TemporalFixtures};
