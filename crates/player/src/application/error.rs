//! Service layer error types
//!
//! Services surface one error type to the UI regardless of whether the
//! failure came from validation, the transport or the admin session.

use mucit_domain::DomainError;
use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Remote store could not be reached or answered with an error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Input rejected by a domain rule
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The requested record does not exist
    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Admin-only operation without an admin session
    #[error("Admin session required")]
    Unauthorized,
}

impl ServiceError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        match self {
            ServiceError::NotFound(_) => true,
            ServiceError::Api(e) => e.is_not_found(),
            ServiceError::Domain(DomainError::NotFound { .. }) => true,
            _ => false,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ServiceError::Unauthorized)
    }

    /// Short message suitable for showing to a child or parent
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Api(_) => "Sunucuya ulaşılamadı. Lütfen tekrar dene.".to_string(),
            ServiceError::NotFound(_) => "Kayıt bulunamadı.".to_string(),
            ServiceError::Unauthorized => "Bu işlem için yönetici girişi gerekli.".to_string(),
            ServiceError::Domain(e) => e.to_string(),
            ServiceError::Validation(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_covers_all_sources() {
        assert!(ServiceError::NotFound("Profile".into()).is_not_found());
        assert!(ServiceError::from(ApiError::Status {
            code: 404,
            body: String::new()
        })
        .is_not_found());
        assert!(ServiceError::from(DomainError::not_found("Note", "1")).is_not_found());
        assert!(!ServiceError::Unauthorized.is_not_found());
    }
}
