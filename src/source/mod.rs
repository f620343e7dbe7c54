use crate::domain::ports::SheetSource;
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

/// `values.get` response body from the Sheets v4 API. `values` is
/// absent entirely when the sheet is empty.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Reads sheet tabs over the Google Sheets v4 REST API with an API
/// key. The base URL is configurable so tests can point it at a local
/// mock server.
pub struct SheetsApiSource {
    client: Client,
    base_url: Url,
    spreadsheet_id: String,
    api_key: String,
}

impl SheetsApiSource {
    pub fn new(api_base: &str, spreadsheet_id: String, api_key: String) -> Result<Self> {
        let base_url = Url::parse(api_base)?;
        if base_url.cannot_be_a_base() {
            return Err(SyncError::InvalidConfigValueError {
                field: "api_base".to_string(),
                value: api_base.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            spreadsheet_id,
            api_key,
        })
    }

    fn values_url(&self, sheet: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SyncError::InvalidConfigValueError {
                field: "api_base".to_string(),
                value: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .extend(["v4", "spreadsheets", &self.spreadsheet_id, "values", sheet]);
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[async_trait]
impl SheetSource for SheetsApiSource {
    async fn rows(&self, sheet: &str) -> Result<Vec<Vec<String>>> {
        let url = self.values_url(sheet)?;
        tracing::debug!("Fetching sheet '{}' from {}", sheet, url.path());

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Sheet '{}' response status: {}", sheet, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::SourceUnavailableError {
                sheet: sheet.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let range: ValueRange = response.json().await?;
        let mut rows = range.values;
        if rows.is_empty() {
            tracing::warn!("Sheet '{}' has no rows at all, not even a header", sheet);
            return Ok(rows);
        }

        // Grid width counts the header row too: it spans every column
        // even when no data row reaches the last one.
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        // First row is the header.
        rows.remove(0);
        Ok(pad_rows(rows, width))
    }
}

/// The values API drops trailing empty cells. The schemas index by
/// position (the week layout in particular has empty day columns), so
/// every row is padded out to the full grid width.
fn pad_rows(mut rows: Vec<Vec<String>>, width: usize) -> Vec<Vec<String>> {
    for row in &mut rows {
        row.resize(width, String::new());
    }
    rows
}
