use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl GreeterError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GreeterError::Output(e) => format!("Could not write the greeting: {}", e),
            GreeterError::Logger { message } => format!("Could not start logging: {}", message),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            GreeterError::Output(_) => 1,
            GreeterError::Logger { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_output_error_from_io() {
        let err: GreeterError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, GreeterError::Output(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("pipe closed"));
        assert!(err.user_friendly_message().starts_with("Could not write the greeting"));
    }

    #[test]
    fn test_logger_error_message() {
        let err = GreeterError::Logger {
            message: "already set".to_string(),
        };
        assert_eq!(err.to_string(), "Logger error: already set");
        assert_eq!(err.exit_code(), 2);
    }
}
