//! Common types for billing aggregates

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
