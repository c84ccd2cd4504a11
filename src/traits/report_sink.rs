use async_trait::async_trait;

use crate::error::Result;
use crate::models::types::ReportRecord;

#[async_trait]
pub trait ReportSink: Send {
    fn name(&self) -> &str;

    /// Called once per run, after the listing succeeded and before the first write.
    async fn prepare(&mut self) -> Result<()> {
        Ok(())
    }

    async fn write_report(&mut self, record: &ReportRecord) -> Result<()>;
}
