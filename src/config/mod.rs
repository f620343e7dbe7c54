pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "runs-sync")]
#[command(about = "Sync running records from a Google Sheet into static site JSON")]
pub struct CliConfig {
    #[arg(long, default_value = "https://sheets.googleapis.com")]
    pub api_base: String,

    #[arg(long, env = "RUNS_SYNC_SPREADSHEET_ID")]
    pub spreadsheet_id: String,

    #[arg(long, env = "RUNS_SYNC_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, default_value = "跑步紀錄_raw")]
    pub runs_sheet: String,

    #[arg(long, default_value = "跑步紀錄_week")]
    pub weeks_sheet: String,

    #[arg(long, default_value = "跑步紀錄_month")]
    pub months_sheet: String,

    #[arg(long, default_value = "./assets/data")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn runs_sheet(&self) -> &str {
        &self.runs_sheet
    }

    fn weeks_sheet(&self) -> &str {
        &self.weeks_sheet
    }

    fn months_sheet(&self) -> &str {
        &self.months_sheet
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_non_empty_string("spreadsheet_id", &self.spreadsheet_id)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_non_empty_string("runs_sheet", &self.runs_sheet)?;
        validate_non_empty_string("weeks_sheet", &self.weeks_sheet)?;
        validate_non_empty_string("months_sheet", &self.months_sheet)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            api_base: "https://sheets.googleapis.com".to_string(),
            spreadsheet_id: "spreadsheet-id".to_string(),
            api_key: "key".to_string(),
            runs_sheet: "跑步紀錄_raw".to_string(),
            weeks_sheet: "跑步紀錄_week".to_string(),
            months_sheet: "跑步紀錄_month".to_string(),
            output_path: "./assets/data".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_empty_spreadsheet_id_rejected() {
        let mut config = base_config();
        config.spreadsheet_id = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_api_base_rejected() {
        let mut config = base_config();
        config.api_base = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
