//! Error taxonomy for per-target availability checks.
//!
//! Everything here is recoverable at the run-controller boundary: a
//! failed check is reported and the pass moves on to the next target.
//! Fatal startup problems (missing/malformed config) use `anyhow`
//! instead and terminate the process.

use thiserror::Error;

/// A failed availability check for a single target.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Transport-level failure: DNS, connect, TLS, or timeout.
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: wreq::Error,
    },

    /// The page answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Markup extraction failed (see [`ExtractError`]).
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// A failed extraction from parsed markup.
///
/// `SelectorNotFound` and `BrokenSelector` are deliberately separate
/// variants: a price selector that matches nothing usually means the
/// page layout changed, while a selector that does not even compile is
/// a config typo.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The selector is valid but matched no elements where at least
    /// one match is required (price).
    #[error("selector {selector:?} matched no elements")]
    SelectorNotFound { selector: String },

    /// The selector string is not valid CSS.
    #[error("selector {selector:?} is not a valid CSS selector")]
    BrokenSelector { selector: String },
}
