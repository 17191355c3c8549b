//! Real-time KPI and calendar computation engine for workforce rostering.
//!
//! This crate turns raw schedule entries into scheduling statistics (hour
//! totals, expected-vs-actual reconciliation, utilization percentages,
//! weekly and monthly breakdowns) and Monday-aligned calendar grids. Every
//! computation is a pure function of its inputs: nothing is cached and no
//! state is shared between calls.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
