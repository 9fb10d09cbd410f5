use investor_visa::assessment::{
    AnswerMap, DispatchError, DispatchReceipt, ReportDispatcher, ReportEnvelope,
};
use investor_visa::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Stand-in transport for deployments without an e-mail relay: the envelope is
/// logged and acknowledged.
#[derive(Default)]
pub(crate) struct LoggingReportDispatcher {
    sequence: AtomicU64,
}

impl ReportDispatcher for LoggingReportDispatcher {
    fn dispatch(&self, envelope: ReportEnvelope) -> Result<DispatchReceipt, DispatchError> {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let id = format!("log-{sequence}");
        info!(
            receipt = %id,
            to = %envelope.to,
            from = %envelope.from,
            subject = %envelope.subject,
            html_bytes = envelope.html.len(),
            text_bytes = envelope.text.len(),
            "assessment report envelope logged"
        );
        Ok(DispatchReceipt { id })
    }
}

/// Keeps envelopes in memory so the CLI can preview what would be sent.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReportDispatcher {
    outbox: Arc<Mutex<Vec<ReportEnvelope>>>,
}

impl ReportDispatcher for InMemoryReportDispatcher {
    fn dispatch(&self, envelope: ReportEnvelope) -> Result<DispatchReceipt, DispatchError> {
        let mut guard = self
            .outbox
            .lock()
            .map_err(|_| DispatchError::Transport("outbox lock poisoned".to_string()))?;
        guard.push(envelope);
        Ok(DispatchReceipt {
            id: format!("outbox-{}", guard.len()),
        })
    }
}

impl InMemoryReportDispatcher {
    pub(crate) fn envelopes(&self) -> Vec<ReportEnvelope> {
        self.outbox
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

/// Answer files are plain JSON objects keyed by question id.
pub(crate) fn read_answers(path: &Path) -> Result<AnswerMap, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let answers = serde_json::from_str(&raw)?;
    Ok(answers)
}
