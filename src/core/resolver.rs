use crate::core::error::ResolveError;
use crate::core::scheme::{MAX_SCHEMES, SchemeSearch, SchemeSummary};
use tracing::debug;

const HOUSE_SUFFIX: &str = " mutual fund";

/// Trims the query and strips a trailing "Mutual Fund" from a fund house name.
pub fn sanitize_query(raw: &str) -> String {
    let trimmed = raw.trim();
    let split = trimmed.len().saturating_sub(HOUSE_SUFFIX.len());
    if trimmed.len() > HOUSE_SUFFIX.len()
        && trimmed.is_char_boundary(split)
        && trimmed[split..].eq_ignore_ascii_case(HOUSE_SUFFIX)
    {
        trimmed[..split].trim_end().to_string()
    } else {
        trimmed.to_string()
    }
}

pub struct SchemeResolver<'a> {
    search: &'a dyn SchemeSearch,
}

impl<'a> SchemeResolver<'a> {
    pub fn new(search: &'a dyn SchemeSearch) -> Self {
        Self { search }
    }

    /// Resolves a query to at most [`MAX_SCHEMES`] schemes, in upstream order.
    ///
    /// Makes a single search attempt; retrying is left to the caller.
    pub async fn resolve(&self, query: &str) -> Result<Vec<SchemeSummary>, ResolveError> {
        let query = sanitize_query(query);
        if query.is_empty() {
            return Err(ResolveError::EmptyResult(query));
        }

        let mut schemes = self.search.search(&query).await?;
        debug!("Search for '{}' returned {} schemes", query, schemes.len());
        if schemes.is_empty() {
            return Err(ResolveError::EmptyResult(query));
        }

        schemes.truncate(MAX_SCHEMES);
        Ok(schemes)
    }
}
