//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that formatters render.

pub mod inspection_report;

pub use inspection_report::InspectionReport;
