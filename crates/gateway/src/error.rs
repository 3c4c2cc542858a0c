use thiserror::Error;

use strix_core::DomainError;

/// Failure shapes of one gateway call.
///
/// Per-call state machine: `Idle → Sent → {Succeeded | Transport | Remote}`,
/// terminal in one step.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network unreachable, connection reset, or a body that is not valid
    /// JSON. The request never produced a usable envelope.
    #[error("transport failure")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered with an explicit error list; the first message
    /// is the deterministic pick for display.
    #[error("{0}")]
    Remote(String),

    /// Well-formed envelope with neither `data` nor `errors`.
    #[error("response contained neither data nor errors")]
    MissingData,
}

impl GatewayError {
    /// True for failures the UI renders as the generic "something went
    /// wrong" banner (retry is manual, by re-triggering the action).
    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Transport(_) | GatewayError::MissingData)
    }
}

/// Failure of a typed operation: rejected locally before the wire, or
/// failed at the gateway.
#[derive(Debug, Error)]
pub enum OperationError {
    /// Input failed client-side validation or an invariant check; nothing
    /// was sent.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_displays_message_verbatim() {
        let err = GatewayError::Remote("Ugyldig email eller passord".to_string());
        assert_eq!(err.to_string(), "Ugyldig email eller passord");
        assert!(!err.is_transport());
    }

    #[test]
    fn missing_data_counts_as_transport_class() {
        assert!(GatewayError::MissingData.is_transport());
    }

    #[test]
    fn domain_error_converts_without_reaching_the_wire() {
        let err: OperationError = DomainError::validation("navn er påkrevd").into();
        assert!(matches!(err, OperationError::Domain(_)));
        assert_eq!(err.to_string(), "validation failed: navn er påkrevd");
    }
}
