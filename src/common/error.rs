// Error handling types for remote calls and the account cache

use thiserror::Error;

use crate::http::TransportError;

/// Recoverable failures surfaced to the presentation layer.
///
/// Every kind carries a fixed, user-facing message; callers render
/// `to_string()` and only match on the variant when they need to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Esse e-mail já está em uso")]
    EmailInUse,

    #[error("Acesso negado")]
    AccessDenied,

    #[error("Algo de errado aconteceu. Tente novamente em breve.")]
    Unexpected,
}

impl DomainError {
    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidCredentials => "INVALID_CREDENTIALS",
            DomainError::EmailInUse => "EMAIL_IN_USE",
            DomainError::AccessDenied => "ACCESS_DENIED",
            DomainError::Unexpected => "UNEXPECTED",
        }
    }
}

/// Outcome of a remote usecase that did not produce a result.
///
/// `Domain` means the server answered and the answer maps to a known
/// failure kind. `Network` means no answer was received at all; it is not
/// translated into a domain kind and should be treated as fatal by whatever
/// orchestrates the call.
#[derive(Debug, Error)]
pub enum RemoteCallError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Network failure: {0}")]
    Network(#[from] TransportError),
}

impl RemoteCallError {
    /// The domain kind, if the server answered
    pub fn domain(&self) -> Option<DomainError> {
        match self {
            RemoteCallError::Domain(kind) => Some(*kind),
            RemoteCallError::Network(_) => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, RemoteCallError::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_messages_are_fixed() {
        assert_eq!(
            DomainError::InvalidCredentials.to_string(),
            "Credenciais inválidas"
        );
        assert_eq!(
            DomainError::EmailInUse.to_string(),
            "Esse e-mail já está em uso"
        );
        assert_eq!(DomainError::AccessDenied.to_string(), "Acesso negado");
        assert_eq!(
            DomainError::Unexpected.to_string(),
            "Algo de errado aconteceu. Tente novamente em breve."
        );
    }

    #[test]
    fn test_remote_call_error_exposes_domain_kind() {
        let error = RemoteCallError::from(DomainError::EmailInUse);
        assert_eq!(error.domain(), Some(DomainError::EmailInUse));
        assert!(!error.is_network());
        assert_eq!(error.to_string(), "Esse e-mail já está em uso");
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            DomainError::InvalidCredentials.code(),
            DomainError::EmailInUse.code(),
            DomainError::AccessDenied.code(),
            DomainError::Unexpected.code(),
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }
}
