/// Error types for rule loading and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The rule document is not valid JSON or has the wrong shape
    InvalidDocument(String),
    /// A fragment pattern failed to compile as a regular expression
    InvalidPattern { pattern: String, message: String },
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleError::InvalidDocument(msg) => write!(f, "Invalid rule document: {}", msg),
            RuleError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid fragment pattern '{}': {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// Result type for rule loading operations
pub type RuleResult<T> = Result<T, RuleError>;
