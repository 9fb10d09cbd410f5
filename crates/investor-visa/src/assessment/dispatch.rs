use serde::Serialize;

use super::report::ReportEnvelope;

/// Outbound hook for rendered reports (e-mail relays, queues, log sinks).
pub trait ReportDispatcher: Send + Sync {
    fn dispatch(&self, envelope: ReportEnvelope) -> Result<DispatchReceipt, DispatchError>;
}

/// Acknowledgement returned by a dispatcher once it accepted an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchReceipt {
    pub id: String,
}

/// Report dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("report transport unavailable: {0}")]
    Transport(String),
    #[error("report rejected by transport: {0}")]
    Rejected(String),
}
