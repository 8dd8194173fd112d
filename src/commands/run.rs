//! The run command: one pass over every configured target.

use crate::config::Config;
use crate::error::CheckError;
use crate::monitor::client::{FetchPage, PageFetcher};
use crate::monitor::models::{CheckResult, ProductSpec, RunReport, Target, TargetOutcome};
use crate::monitor::runner::check_target;
use crate::notify::{Notifier, Notify};
use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

/// Checks all configured targets once, in order, and routes outcomes
/// to the notifier or the console.
pub struct RunCommand {
    config: Config,
    dry_run: bool,
}

impl RunCommand {
    /// Creates a new run command.
    pub fn new(config: Config) -> Self {
        Self { config, dry_run: false }
    }

    /// Print would-be notifications instead of sending them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs the pass with the production fetcher and notifier.
    pub async fn execute(&self) -> Result<RunReport> {
        let fetcher = PageFetcher::new().context("Failed to create HTTP client")?;
        let notifier = Notifier::from_config(self.config.telegram.clone())
            .context("Failed to create notifier")?;

        self.execute_with(&fetcher, &notifier).await
    }

    /// Runs the pass with provided collaborators (for testing).
    ///
    /// This is where per-target errors are caught - exactly once, and
    /// nowhere else. A failed target never stops the pass.
    pub async fn execute_with(
        &self,
        fetcher: &impl FetchPage,
        notifier: &impl Notify,
    ) -> Result<RunReport> {
        let product = &self.config.product;
        let mode = self.config.match_mode();
        let mut report = RunReport::default();

        for target in &self.config.targets {
            info!("Checking {} ({})", target.name, target.url);

            let outcome = match check_target(fetcher, target, product, mode).await {
                Ok(result) if result.in_stock => {
                    self.deliver(notifier, &in_stock_message(product, &result, target)).await;
                    TargetOutcome::InStock(result)
                }
                Ok(result) => {
                    println!(
                        "{} — Not in stock. Colors: {:?} | Sizes: {:?}",
                        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                        result.colors,
                        result.sizes
                    );
                    TargetOutcome::OutOfStock(result)
                }
                Err(error) => {
                    warn!("Check failed for {}: {}", target.name, error);
                    self.deliver(notifier, &error_message(&target.name, &error)).await;
                    TargetOutcome::Failed(error.to_string())
                }
            };

            report.outcomes.push((target.name.clone(), outcome));
        }

        Ok(report)
    }

    /// Best-effort delivery: a failed send is logged and otherwise
    /// ignored; there is no secondary channel to escalate to.
    async fn deliver(&self, notifier: &impl Notify, text: &str) {
        if self.dry_run {
            println!("--- would send ---\n{}", text);
            return;
        }

        if let Err(error) = notifier.notify(text).await {
            warn!("Failed to deliver notification: {:#}", error);
        }
    }
}

fn in_stock_message(product: &ProductSpec, result: &CheckResult, target: &Target) -> String {
    format!(
        "🟢 IN STOCK\n{}\nSize: {}\nColor: {}\nPrice: {}\n{}",
        product.name, product.size, product.preferred_color, result.price, target.url
    )
}

fn error_message(target_name: &str, error: &CheckError) -> String {
    format!("⚠️ Deal agent error on {}:\n{}", target_name, error)
}
