use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid date: '{value}'")]
    InvalidDate { value: String },

    #[error("Unknown accounting entry type '{value}' (expected Debit or Credit)")]
    UnknownEntryType { value: String },

    #[error("Unknown time range '{value}'")]
    UnknownTimeRange { value: String },

    #[error("Firm '{firm_id}' not found")]
    FirmNotFound { firm_id: String },

    #[error("Ledger '{ledger}' unavailable: {reason}")]
    LedgerUnavailable { ledger: &'static str, reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StudioResult<T> = Result<T, StudioError>;
