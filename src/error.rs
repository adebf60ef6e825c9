use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("check '{check}' mismatch: expected {expected}, got {actual}")]
    Mismatch {
        check: &'static str,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Name of the check that produced this error
    pub fn check_name(&self) -> &'static str {
        match self {
            Error::Mismatch { check, .. } => check,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_display() {
        let err = Error::Mismatch {
            check: "multiply",
            expected: "16".to_string(),
            actual: "17".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("multiply"), "Message should name the check");
        assert!(message.contains("16"), "Message should carry the expected value");
        assert!(message.contains("17"), "Message should carry the actual value");
    }

    #[test]
    fn test_check_name() {
        let err = Error::Mismatch {
            check: "divide",
            expected: "4".to_string(),
            actual: "3".to_string(),
        };
        assert_eq!(err.check_name(), "divide");
    }
}
