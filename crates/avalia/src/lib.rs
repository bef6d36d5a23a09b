//! Weighted 360° performance-review scoring.
//!
//! The crate computes a weighted final score per evaluation record, classifies
//! each collaborator into performance/potential tiers, and composes the
//! combined nine-box label. Records are tolerant JSON maps: missing or
//! malformed ratings never fail a batch, they surface through the
//! `dados_insuficientes` alert and classification fallback instead.

pub mod config;
pub mod error;
pub mod reviews;
pub mod telemetry;
