use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Connection to {device} failed: {reason}")]
    Connection { device: String, reason: String },

    #[error("Command rejected by {device}: {reason}")]
    Command { device: String, reason: String },

    #[error("Malformed device output: {0}")]
    MalformedOutput(String),

    #[error("Query to {device} timed out after {seconds}s")]
    Timeout { device: String, seconds: u64 },

    #[error("Invalid MAC address: {0}")]
    InvalidMacAddress(String),

    #[error("Invalid VLAN identifier: {0}")]
    InvalidVlan(String),

    #[error("Name resolution failed: {0}")]
    Resolution(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Whether this error must abort the run rather than degrade a single
    /// per-VLAN query to an empty contribution.
    pub fn is_fatal_for_run(&self) -> bool {
        matches!(
            self,
            DomainError::Connection { .. } | DomainError::IoError(_) | DomainError::ConfigError(_)
        )
    }
}
