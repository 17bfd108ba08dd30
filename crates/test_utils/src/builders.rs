//! Test data builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Defaults describe the reference applicant: 35-year-old male
//! non-smoker in good health quoting $500k over 20 years.

use core_kernel::Money;
use domain_intake::{CoverageType, IntakeRecord};
use domain_rating::{Gender, HealthRating, RateInput};

use crate::fixtures::{MoneyFixtures, StringFixtures, TemporalFixtures};

/// Builder for rate calculator inputs
pub struct RateInputBuilder {
    coverage: Money,
    term_years: u32,
    age: u32,
    gender: Gender,
    smoker: bool,
    health_rating: HealthRating,
}

impl Default for RateInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RateInputBuilder {
    /// Creates a builder with the reference applicant's values
    pub fn new() -> Self {
        Self {
            coverage: MoneyFixtures::standard_coverage(),
            term_years: 20,
            age: 35,
            gender: Gender::Male,
            smoker: false,
            health_rating: HealthRating::Good,
        }
    }

    /// Sets the coverage in whole dollars
    pub fn with_coverage(mut self, dollars: i64) -> Self {
        self.coverage = Money::from_dollars(dollars);
        self
    }

    /// Sets the term length
    pub fn with_term_years(mut self, term_years: u32) -> Self {
        self.term_years = term_years;
        self
    }

    /// Sets the applicant age
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Sets the applicant gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Marks the applicant a smoker
    pub fn smoker(mut self) -> Self {
        self.smoker = true;
        self
    }

    /// Sets the health rating
    pub fn with_health_rating(mut self, health_rating: HealthRating) -> Self {
        self.health_rating = health_rating;
        self
    }

    /// Builds the rate input
    pub fn build(self) -> RateInput {
        RateInput {
            coverage: self.coverage,
            term_years: self.term_years,
            age: self.age,
            gender: self.gender,
            smoker: self.smoker,
            health_rating: self.health_rating,
        }
    }
}

/// Builder for complete, valid intake records
pub struct IntakeRecordBuilder {
    record: IntakeRecord,
}

impl Default for IntakeRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeRecordBuilder {
    /// Creates a builder whose record passes full validation
    pub fn new() -> Self {
        let mut record = IntakeRecord::default();

        record.coverage.coverage_type = Some(CoverageType::TermLife);
        record.coverage.coverage_amount = Some(MoneyFixtures::standard_coverage());

        record.contact.first_name = "Pat".to_string();
        record.contact.last_name = "Winslow".to_string();
        record.contact.email = StringFixtures::email().to_string();
        record.contact.phone = StringFixtures::phone().to_string();

        record.address.street_address = "12 Main St".to_string();
        record.address.city = "Springfield".to_string();
        record.address.state = "IL".to_string();
        record.address.zip_code = StringFixtures::zip().to_string();

        record.health.height_feet = Some(5);
        record.health.height_inches = Some(10);
        record.health.weight = Some(175);
        record.health.birth_date = Some(TemporalFixtures::birth_date());
        record.health.medical_background = "No known conditions".to_string();

        Self { record }
    }

    /// Sets the coverage type
    pub fn with_coverage_type(mut self, coverage_type: CoverageType) -> Self {
        self.record.coverage.coverage_type = Some(coverage_type);
        self
    }

    /// Sets the coverage amount in whole dollars
    pub fn with_coverage_amount(mut self, dollars: i64) -> Self {
        self.record.coverage.coverage_amount = Some(Money::from_dollars(dollars));
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.record.contact.email = email.into();
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.record.contact.phone = phone.into();
        self
    }

    /// Sets the zip code
    pub fn with_zip_code(mut self, zip: impl Into<String>) -> Self {
        self.record.address.zip_code = zip.into();
        self
    }

    /// Builds the intake record
    pub fn build(self) -> IntakeRecord {
        self.record
    }
}
