//! Salary Engine for government salary scales
//!
//! This crate computes total yearly compensation for a scale/step combination
//! of a collective labour agreement: yearly gross salary, the pension premium
//! split, the individual choice budget and part-time scaling.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
