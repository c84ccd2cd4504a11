use std::time::Duration;

use bon::Builder;
use tracing::info;

use crate::error::Result;
use crate::models::types::{FetchOutcome, HarvestStats};
use crate::traits::lister::{ProductFetcher, ProductLister};
use crate::traits::report_sink::ReportSink;

/// Drives one list, fetch, filter, write pass. Products are handled strictly
/// one after another; the first error ends the run.
#[derive(Builder)]
pub struct Harvester<'a> {
    lister: &'a dyn ProductLister,
    fetcher: &'a dyn ProductFetcher,
    sink: &'a mut dyn ReportSink,
    #[builder(default = Duration::from_secs(1))]
    poll_delay: Duration,
}

impl Harvester<'_> {
    pub async fn run(mut self) -> Result<HarvestStats> {
        let products = self.lister.list_products().await?;
        // Previous output survives a failed listing.
        self.sink.prepare().await?;
        let mut stats = HarvestStats { listed: products.len(), ..HarvestStats::default() };
        info!(count = stats.listed, sink = self.sink.name(), "harvest: products listed");

        for (idx, entry) in products.iter().enumerate() {
            info!(
                idx,
                id = %entry.id,
                product_code = entry.product_code.as_deref().unwrap_or("-"),
                office = entry.issuing_office.as_deref().unwrap_or("-"),
                issued = entry.issuance_time.as_deref().unwrap_or("-"),
                "harvest: fetch product"
            );
            match self.fetcher.fetch_product(&entry.id).await? {
                FetchOutcome::Summary => {
                    info!(id = %entry.id, "harvest: summary report, skipping");
                    stats.skipped += 1;
                }
                FetchOutcome::Report(record) => {
                    self.sink.write_report(&record).await?;
                    stats.written += 1;
                }
            }
            // Unconditional, the last product included.
            tokio::time::sleep(self.poll_delay).await;
        }

        info!(listed = stats.listed, written = stats.written, skipped = stats.skipped, "harvest finished");
        Ok(stats)
    }
}
