//! Common test fixtures
//!
//! Fixed values shared across test suites so assertions stay comparable
//! between crates.

use chrono::NaiveDate;
use core_kernel::Money;

/// Monetary fixtures
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The mid-market coverage used in worked examples
    pub fn standard_coverage() -> Money {
        Money::from_dollars(500_000)
    }

    /// The slider's lower bound
    pub fn minimum_coverage() -> Money {
        Money::from_dollars(100_000)
    }

    /// The slider's upper bound
    pub fn maximum_coverage() -> Money {
        Money::from_dollars(2_000_000)
    }
}

/// String fixtures
pub struct StringFixtures;

impl StringFixtures {
    pub fn email() -> &'static str {
        "pat.winslow@example.com"
    }

    pub fn phone() -> &'static str {
        "(555) 123-4567"
    }

    pub fn zip() -> &'static str {
        "62704"
    }
}

/// Temporal fixtures
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Birth date of the reference applicant (age 35 as of 2023)
    pub fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1988, 4, 12).expect("valid fixture date")
    }
}
