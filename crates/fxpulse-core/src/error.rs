use thiserror::Error;

/// Validation and contract errors exposed by `fxpulse-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid currency '{value}', expected one of USD, EUR, GBP, JPY, CHF")]
    InvalidCurrency { value: String },
    #[error("invalid impact '{value}', expected one of Low, Medium, High")]
    InvalidImpact { value: String },

    #[error("date must be YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("time must be HH:MM (24-hour): '{value}'")]
    InvalidTime { value: String },
    #[error("timestamp must be YYYY-MM-DDTHH:MM:SS: '{value}'")]
    InvalidTimestamp { value: String },

    #[error("weight must be between {min} and {max}: {value}")]
    WeightOutOfRange { value: u8, min: u8, max: u8 },
    #[error("invalid score value {value}, expected one of -2, -1, 1, 2")]
    InvalidScoreValue { value: i8 },

    #[error("currency selection must contain at least one currency")]
    EmptyCurrencySelection,
    #[error("date range start '{start}' must not be after end '{end}'")]
    InvalidDateRange { start: String, end: String },
    #[error("invalid window preset '{value}', expected one of 7d, 30d, 90d")]
    InvalidWindowPreset { value: String },
}
