//! Concurrent NAV history collection for a set of resolved schemes

use crate::core::error::ResolveError;
use crate::core::history::HistoryFetcher;
use crate::core::resolver::SchemeResolver;
use crate::core::scheme::{HistorySource, InstrumentRecord, SchemeSearch, SchemeSummary};
use futures::future::join_all;
use tracing::{debug, warn};

pub struct Aggregator<'a> {
    fetcher: HistoryFetcher<'a>,
}

impl<'a> Aggregator<'a> {
    pub fn new(source: &'a dyn HistorySource) -> Self {
        Self {
            fetcher: HistoryFetcher::new(source),
        }
    }

    /// Fetches every scheme concurrently and waits for all of them.
    ///
    /// Each fetch resolves into its own slot of the joined vector. Failed
    /// fetches are dropped and the survivors are ordered by display name, so
    /// the result does not depend on which fetch finished first.
    pub async fn aggregate(&self, schemes: &[SchemeSummary]) -> Vec<InstrumentRecord> {
        let futures = schemes.iter().map(|scheme| self.fetcher.fetch(scheme.id));
        let slots = join_all(futures).await;

        let mut records: Vec<InstrumentRecord> = slots.into_iter().flatten().collect();
        let failed = schemes.len() - records.len();
        if failed > 0 {
            warn!(
                resolved = schemes.len(),
                failed, "Some NAV history fetches failed, continuing without them"
            );
        }

        records.sort_by(|a, b| {
            a.meta
                .display_name
                .cmp(&b.meta.display_name)
                .then(a.meta.id.cmp(&b.meta.id))
        });
        records
    }
}

/// Resolves a fund house name and collects the NAV history of its schemes.
pub async fn load_fund_house(
    search: &dyn SchemeSearch,
    source: &dyn HistorySource,
    house_name: &str,
) -> Result<Vec<InstrumentRecord>, ResolveError> {
    let schemes = SchemeResolver::new(search).resolve(house_name).await?;
    debug!("Fetching NAV history for {} schemes", schemes.len());
    Ok(Aggregator::new(source).aggregate(&schemes).await)
}
