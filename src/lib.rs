//! deal-agent - one-pass product availability monitor.
//!
//! Checks configured product pages for a desired size/color variant
//! and alerts the operator over Telegram when it shows up.

pub mod commands;
pub mod config;
pub mod error;
pub mod monitor;
pub mod notify;

pub use config::Config;
pub use error::{CheckError, ExtractError};
pub use monitor::models::{CheckResult, ProductSpec, RunReport, Target, TargetOutcome};
