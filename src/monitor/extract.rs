//! Markup extraction: structured facts out of a parsed product page.

use crate::error::ExtractError;
use scraper::{ElementRef, Html, Selector};

/// A product page parsed once and queried as often as needed.
///
/// All selector-based extractions for one target run against the same
/// document; re-parsing per query would be wasted work on pages that
/// easily reach a few hundred kilobytes.
pub struct ProductPage {
    document: Html,
}

impl ProductPage {
    /// Parses raw markup into a queryable document.
    pub fn parse(html: &str) -> Self {
        Self { document: Html::parse_document(html) }
    }

    /// Extracts the trimmed text of the first element matching
    /// `selector`.
    ///
    /// A selector that matches nothing is a hard failure here: the
    /// price is presumed always present on a valid product page, so
    /// zero matches means the page is broken or the selector is stale.
    pub fn price(&self, selector: &str) -> Result<String, ExtractError> {
        let compiled = compile(selector)?;

        self.document
            .select(&compiled)
            .next()
            .map(element_text)
            .ok_or_else(|| ExtractError::SelectorNotFound { selector: selector.to_string() })
    }

    /// Extracts the trimmed text of every element matching `selector`,
    /// in document order.
    ///
    /// Zero matches is a valid outcome, not an error: a sold-out page
    /// simply lists no options, and the availability match downstream
    /// fails on the empty list.
    pub fn options(&self, selector: &str) -> Result<Vec<String>, ExtractError> {
        let compiled = compile(selector)?;

        Ok(self.document.select(&compiled).map(element_text).collect())
    }
}

fn compile(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector)
        .map_err(|_| ExtractError::BrokenSelector { selector: selector.to_string() })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
