use crate::core::pipeline::SheetPipeline;
use crate::core::schema::{MonthSchema, RunSchema, WeekSchema};
use crate::domain::ports::{ConfigProvider, SheetSource, Storage};
use crate::utils::error::Result;

/// Drives the three sheet jobs in a fixed order, one at a time. The
/// refresh date is captured once by the caller and shared by every
/// job. Outputs are best-effort, not atomic: a failure in a later
/// sheet leaves files written by earlier sheets in place.
pub struct SyncEngine<F: SheetSource, S: Storage, C: ConfigProvider> {
    pipeline: SheetPipeline<F, S>,
    config: C,
}

impl<F: SheetSource, S: Storage, C: ConfigProvider> SyncEngine<F, S, C> {
    pub fn new(source: F, storage: S, config: C) -> Self {
        Self {
            pipeline: SheetPipeline::new(source, storage),
            config,
        }
    }

    pub async fn run(&self, today: &str) -> Result<Vec<String>> {
        tracing::info!("Starting sheet sync, lastUpdated = {}", today);
        let mut written = Vec::with_capacity(3);

        tracing::info!("Syncing recent runs...");
        written.push(
            self.pipeline
                .sync::<RunSchema>(self.config.runs_sheet(), today)
                .await?,
        );

        tracing::info!("Syncing weekly overview...");
        written.push(
            self.pipeline
                .sync::<WeekSchema>(self.config.weeks_sheet(), today)
                .await?,
        );

        tracing::info!("Syncing monthly summary...");
        written.push(
            self.pipeline
                .sync::<MonthSchema>(self.config.months_sheet(), today)
                .await?,
        );

        tracing::info!(
            "Sync finished, {} files written to {}",
            written.len(),
            self.config.output_path()
        );
        Ok(written)
    }
}
