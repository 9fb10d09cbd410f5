use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::answers::AnswerMap;
use super::catalog::{self, AnswerIssue};
use super::dispatch::{DispatchError, DispatchReceipt, ReportDispatcher};
use super::gateway::{GatewayEvaluator, GatewayResult};
use super::report::AssessmentReport;
use super::scoring::{DetailedResult, DetailedScorer};
use crate::config::ReportConfig;

/// Request to render and deliver a finished assessment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub email: String,
    pub detailed_result: DetailedResult,
    #[serde(default)]
    pub gateway_result: Option<GatewayResult>,
    #[serde(default = "Utc::now")]
    pub completed_at: DateTime<Utc>,
}

/// What happened to a report request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportDelivery {
    Sent { id: String },
    Disabled,
}

impl From<DispatchReceipt> for ReportDelivery {
    fn from(receipt: DispatchReceipt) -> Self {
        ReportDelivery::Sent { id: receipt.id }
    }
}

/// Service composing the evaluators, the catalog, and report delivery.
pub struct AssessmentService<D> {
    dispatcher: Arc<D>,
    reports: ReportConfig,
    gateway: GatewayEvaluator,
    scorer: DetailedScorer,
}

impl<D> AssessmentService<D>
where
    D: ReportDispatcher + 'static,
{
    pub fn new(dispatcher: Arc<D>, reports: ReportConfig) -> Self {
        Self {
            dispatcher,
            reports,
            gateway: GatewayEvaluator::new(),
            scorer: DetailedScorer::new(),
        }
    }

    pub fn report_config(&self) -> &ReportConfig {
        &self.reports
    }

    pub fn evaluate_gateway(&self, answers: &AnswerMap) -> GatewayResult {
        let result = self.gateway.evaluate(answers);
        info!(
            status = result.status.label(),
            passed = result.passed_checks,
            total = result.total_checks,
            "gateway evaluated"
        );
        result
    }

    pub fn evaluate_detailed(&self, answers: &AnswerMap) -> DetailedResult {
        let result = self.scorer.evaluate(answers);
        info!(
            score = result.risk_score(),
            pathway = result.pathway.label(),
            concerns = result.concerns.len(),
            "detailed assessment scored"
        );
        result
    }

    pub fn validate_detailed(&self, answers: &AnswerMap) -> Vec<AnswerIssue> {
        catalog::validate(catalog::detailed_questions(), answers)
    }

    /// Render and hand the report to the dispatcher.
    ///
    /// The result inside `request` is only read; a failed delivery leaves it untouched.
    pub fn send_report(
        &self,
        request: ReportRequest,
    ) -> Result<ReportDelivery, AssessmentServiceError> {
        if !self.reports.emails_enabled {
            info!("report delivery disabled; skipping dispatch");
            return Ok(ReportDelivery::Disabled);
        }

        let recipient = request.email.trim();
        if !is_valid_email(recipient) {
            return Err(AssessmentServiceError::InvalidRecipient(
                request.email.clone(),
            ));
        }

        let report = AssessmentReport::new(
            request.detailed_result,
            request.gateway_result,
            request.completed_at,
        );
        let envelope = report.envelope(recipient, &self.reports);

        match self.dispatcher.dispatch(envelope) {
            Ok(receipt) => {
                info!(receipt = %receipt.id, "assessment report dispatched");
                Ok(receipt.into())
            }
            Err(err) => {
                warn!(error = %err, "assessment report dispatch failed");
                Err(err.into())
            }
        }
    }
}

/// `local@domain.tld` with no whitespace.
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("invalid recipient e-mail address '{0}'")]
    InvalidRecipient(String),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
