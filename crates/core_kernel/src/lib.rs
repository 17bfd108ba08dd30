//! Core Kernel - Foundational types and utilities for the quote engine
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money with precise decimal arithmetic and half-up cent rounding
//! - Strongly-typed identifiers for lead-capture records

pub mod identifiers;
pub mod money;

pub use identifiers::{ContactRequestId, QuoteRequestId, SessionId, SubscriptionId};
pub use money::{Money, MoneyError};
