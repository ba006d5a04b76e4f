/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    NetworkError(String),
    ParseError(String),
    ValidationError(String),
    /// A bar's open price of zero cannot be used as the percent-change divisor
    DivisionByZero(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::DivisionByZero(date) => {
                write!(f, "Division by zero: open price is 0 for bar {}", date)
            }
        }
    }
}

impl std::error::Error for AppError {}

// Simple convenience type alias
pub type NetworkResult<T> = Result<T, AppError>;
