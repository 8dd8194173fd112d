//! The availability-check pipeline: fetch, extract, evaluate.

pub mod client;
pub mod evaluate;
pub mod extract;
pub mod models;
pub mod runner;

pub use client::{FetchPage, PageFetcher};
pub use evaluate::{evaluate, MatchMode};
pub use extract::ProductPage;
pub use models::{CheckResult, ProductSpec, RunReport, SelectorSet, Target, TargetOutcome};
pub use runner::check_target;
