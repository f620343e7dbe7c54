pub mod etl;
pub mod pipeline;
pub mod schema;

pub use crate::domain::model::{Envelope, MonthRecord, RunRecord, WeekRecord};
pub use crate::domain::ports::{ConfigProvider, SheetSource, Storage};
pub use crate::utils::error::Result;
