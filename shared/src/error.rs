use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid value for flag {key}: {value:?}")]
    InvalidFlag { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_flag_message() {
        let err = SharedError::InvalidFlag {
            key: "PROD".to_string(),
            value: "maybe".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for flag PROD: \"maybe\"");
    }
}
