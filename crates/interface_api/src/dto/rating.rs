//! Rating DTOs

use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_rating::{Gender, HealthRating, QuoteOption, RateInput, RateOutput};

/// Rate calculation request body
///
/// Mirrors the inputs of the comparison grid controls. Unrecognized
/// health-rating strings and off-menu terms are priced at the neutral
/// factor, never rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
    pub coverage: i64,
    pub term_years: u32,
    pub age: u32,
    pub gender: Gender,
    pub smoker: bool,
    pub health_rating: HealthRating,
}

impl From<&RateRequest> for RateInput {
    fn from(request: &RateRequest) -> Self {
        RateInput::new(
            request.coverage,
            request.term_years,
            request.age,
            request.gender,
            request.smoker,
            request.health_rating,
        )
    }
}

/// Calculated premium response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResponse {
    pub monthly: Money,
    pub annual: Money,
}

impl From<RateOutput> for RateResponse {
    fn from(rate: RateOutput) -> Self {
        Self {
            monthly: rate.monthly,
            annual: rate.annual,
        }
    }
}

/// Quote option matrix response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub options: Vec<QuoteOption>,
    /// Option id the grid selects when nothing is chosen yet
    pub default_selection: String,
}
