//! Request handlers

pub mod health;
pub mod intake;
pub mod rating;
