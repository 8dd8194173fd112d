//! Single-target check: fetch, extract, evaluate.

use crate::error::CheckError;
use crate::monitor::client::FetchPage;
use crate::monitor::evaluate::{evaluate, MatchMode};
use crate::monitor::extract::ProductPage;
use crate::monitor::models::{CheckResult, ProductSpec, Target};
use tracing::debug;

/// Runs the full availability check for one target.
///
/// Fetch must complete before extraction; the page is parsed once and
/// all three selectors query the same document. Fetch and extraction
/// errors propagate unchanged - recovery is the run controller's job.
pub async fn check_target(
    fetcher: &impl FetchPage,
    target: &Target,
    product: &ProductSpec,
    mode: MatchMode,
) -> Result<CheckResult, CheckError> {
    let html = fetcher.fetch(&target.url).await?;
    let page = ProductPage::parse(&html);

    let price = page.price(&target.selector.price)?;
    let colors = page.options(&target.selector.color)?;
    let sizes = page.options(&target.selector.size)?;

    let in_stock = evaluate(&colors, &sizes, product, mode);
    debug!(
        "{}: price={} colors={:?} sizes={:?} in_stock={}",
        target.name, price, colors, sizes, in_stock
    );

    Ok(CheckResult { price, colors, sizes, in_stock })
}
