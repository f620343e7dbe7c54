pub mod config;
pub mod core;
pub mod domain;
pub mod source;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::SyncEngine, pipeline::SheetPipeline};
pub use domain::model::{Envelope, MonthRecord, RunRecord, WeekRecord};
pub use source::SheetsApiSource;
pub use utils::error::{Result, SyncError};
