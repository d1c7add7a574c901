//! Weekly Pay Engine
//!
//! This crate computes weekly wages for hourly workers from a base hourly rate
//! and hours worked, applying per-employer overtime rules and flagging
//! out-of-range inputs with a status code.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
