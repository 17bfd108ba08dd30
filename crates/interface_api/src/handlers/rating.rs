//! Rating handlers

use axum::Json;

use domain_rating::{calculate_rate, generate_options, RateInput};

use crate::dto::rating::{OptionsResponse, RateRequest, RateResponse};
use crate::error::ApiError;

/// Calculates the premium for one rate input
pub async fn calculate(Json(request): Json<RateRequest>) -> Result<Json<RateResponse>, ApiError> {
    let input = RateInput::from(&request);
    let rate = calculate_rate(&input);

    tracing::debug!(
        coverage = %input.coverage,
        term_years = input.term_years,
        monthly = %rate.monthly,
        "rate calculated"
    );

    Ok(Json(rate.into()))
}

/// Generates the full term-option matrix for one rate input
pub async fn options(Json(request): Json<RateRequest>) -> Result<Json<OptionsResponse>, ApiError> {
    let input = RateInput::from(&request);
    let options = generate_options(&input);

    Ok(Json(OptionsResponse {
        options,
        default_selection: "term-20".to_string(),
    }))
}
