use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to fetch genesis document from {location}: {reason}")]
    Fetch { location: String, reason: String },

    #[error("Invalid genesis document: {reason}")]
    Parse { reason: String },

    #[error("Failed to create table {table}: {reason}")]
    Schema { table: &'static str, reason: String },

    #[error("Constraint violation while loading {table}: {message}")]
    ConstraintViolation { table: &'static str, message: String },

    #[error("Row for {table} has {actual} values, expected {expected}")]
    RowShape {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IngestError {
    pub fn fetch(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(reason: impl ToString) -> Self {
        Self::Parse {
            reason: reason.to_string(),
        }
    }

    /// Classify an error raised while writing rows into `table`.
    pub fn from_write(table: &'static str, err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
                return Self::ConstraintViolation {
                    table,
                    message: db_err.message().to_string(),
                };
            }
        }
        Self::Database(err)
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err)
    }
}
