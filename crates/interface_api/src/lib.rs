//! HTTP API Layer
//!
//! This crate provides the REST API the marketing sites call: premium
//! rating for the quote comparison grid, and the lead-capture endpoints
//! (quote requests, contact requests, newsletter subscriptions).
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers per resource
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent JSON error responses
//!
//! Received leads are held in an in-memory ledger; this service owns no
//! persisted state.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, intake, rating};
use crate::state::AppState;

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState::new(config);

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Rating routes
    let rating_routes = Router::new()
        .route("/", post(rating::calculate))
        .route("/options", post(rating::options));

    // Lead-capture routes
    let intake_routes = Router::new()
        .route(
            "/quote-requests",
            post(intake::create_quote_request).get(intake::list_quote_requests),
        )
        .route("/contact-requests", post(intake::create_contact_request))
        .route(
            "/newsletter-subscriptions",
            post(intake::create_subscription),
        );

    let api_routes = Router::new()
        .nest("/rates", rating_routes)
        .merge(intake_routes);

    // The marketing sites call this API cross-origin.
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
