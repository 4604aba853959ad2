use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayoutError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Network error: {0}")]
    NetworkError(String),
}

impl PayoutError {
    /// Message suitable for an inline error region.
    ///
    /// Remote failures carry the server's own wording, which is shown as-is;
    /// everything else falls back to the `Display` form.
    pub fn user_message(&self) -> String {
        match self {
            PayoutError::NetworkError(message) | PayoutError::ValidationError(message) => {
                message.clone()
            }
            PayoutError::NotFound(what) => format!("{what} could not be found"),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_keeps_remote_wording() {
        let err = PayoutError::NetworkError("You must be logged in".to_string());
        assert_eq!(err.user_message(), "You must be logged in");
    }

    #[test]
    fn test_user_message_for_missing_resource() {
        let err = PayoutError::NotFound("Payout method pm-1".to_string());
        assert_eq!(err.user_message(), "Payout method pm-1 could not be found");
    }
}
