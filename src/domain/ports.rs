use crate::utils::error::Result;
use async_trait::async_trait;

/// Reads one sheet (tab) of the remote spreadsheet as text rows, with
/// the header row already excluded. Rows come back in source order,
/// which the workbook keeps ascending by date.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn rows(&self, sheet: &str) -> Result<Vec<Vec<String>>>;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn runs_sheet(&self) -> &str;
    fn weeks_sheet(&self) -> &str;
    fn months_sheet(&self) -> &str;
    fn output_path(&self) -> &str;
}
