//! Request/Response data transfer objects

pub mod intake;
pub mod rating;
