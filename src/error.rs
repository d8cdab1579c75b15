use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by the allocation engine.
///
/// Data-quality problems in planting records (missing dates, unknown plants,
/// degenerate beds) are never reported here: they degrade to conservative
/// results instead. Only broken call contracts and configuration loading
/// failures surface as errors.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// A query window whose end precedes its start.
    #[error("invalid date range: {end} is before {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// An override table entry that cannot describe a real planting.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AllocationError>;
