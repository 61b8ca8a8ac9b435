use thiserror::Error;

/// Errors surfaced by domain services and economy rules.
///
/// Every variant is recoverable: a rejected operation leaves all state
/// unchanged, and the caller shows the message as a transient notice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Not enough points: need {required}, have {available}")]
    InsufficientPoints { required: u32, available: u32 },

    #[error("Not enough balance: need {required:.2}, have {available:.2}")]
    InsufficientBalance { required: f64, available: f64 },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl DomainError {
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        DomainError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        DomainError::InvalidConfiguration(message.into())
    }
}
