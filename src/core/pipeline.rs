use crate::core::schema::RowSchema;
use crate::domain::model::Envelope;
use crate::domain::ports::{SheetSource, Storage};
use crate::utils::error::{Result, SyncError};

/// Transform every row in source order, then flip the result so the
/// most recent record comes first. The workbook keeps rows ascending
/// by date; nothing here re-sorts, the reversal is unconditional.
pub fn aggregate<R: RowSchema>(sheet: &str, rows: &[Vec<String>]) -> Result<Vec<R::Record>> {
    let mut records = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            if row.len() < R::MIN_COLUMNS {
                return Err(SyncError::MalformedRowError {
                    sheet: sheet.to_string(),
                    row: index,
                    expected: R::MIN_COLUMNS,
                    actual: row.len(),
                });
            }
            Ok(R::transform(row))
        })
        .collect::<Result<Vec<_>>>()?;

    records.reverse();
    Ok(records)
}

/// One fetch → transform → write run for a single sheet tab. The same
/// pipeline serves all three schemas; only the type parameter differs.
pub struct SheetPipeline<F: SheetSource, S: Storage> {
    source: F,
    storage: S,
}

impl<F: SheetSource, S: Storage> SheetPipeline<F, S> {
    pub fn new(source: F, storage: S) -> Self {
        Self { source, storage }
    }

    pub async fn sync<R: RowSchema>(&self, sheet: &str, today: &str) -> Result<String> {
        let rows = self.source.rows(sheet).await?;
        tracing::info!("Fetched {} rows from sheet '{}'", rows.len(), sheet);

        let records = aggregate::<R>(sheet, &rows)?;
        let count = records.len();

        let envelope = Envelope {
            last_updated: today.to_string(),
            key: R::COLLECTION_KEY,
            records,
        };
        let json = serde_json::to_vec_pretty(&envelope)?;

        self.storage.write_file(R::OUTPUT_FILE, &json).await?;
        tracing::info!(
            "Wrote {} records ({} bytes) to {}",
            count,
            json.len(),
            R::OUTPUT_FILE
        );

        Ok(R::OUTPUT_FILE.to_string())
    }
}
