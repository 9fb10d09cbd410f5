//! Business Investor visa assessment: gateway screen, detailed risk scoring,
//! question catalog, and report delivery.
//!
//! The evaluators are pure functions over an [`AnswerMap`]; everything with side
//! effects (logging, report dispatch, HTTP) sits in [`service`] and [`router`].

pub mod answers;
pub mod band;
pub mod catalog;
pub mod dispatch;
pub mod gateway;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use answers::{AnswerMap, AnswerValue};
pub use band::{band_for, RiskBand, RiskLevel};
pub use catalog::{AnswerIssue, Question, QuestionKind, QuestionStage};
pub use dispatch::{DispatchError, DispatchReceipt, ReportDispatcher};
pub use gateway::{GatewayCriterion, GatewayEvaluator, GatewayResult, GatewayStatus};
pub use report::{AssessmentReport, ReportEnvelope};
pub use router::{assessment_router, DetailedAssessmentView};
pub use scoring::{DetailedResult, DetailedScorer, Pathway, ScoreSheet};
pub use service::{AssessmentService, AssessmentServiceError, ReportDelivery, ReportRequest};

pub fn evaluate_gateway(answers: &AnswerMap) -> GatewayResult {
    GatewayEvaluator::new().evaluate(answers)
}

pub fn evaluate_detailed(answers: &AnswerMap) -> DetailedResult {
    DetailedScorer::new().evaluate(answers)
}

pub fn risk_band(score: u8) -> RiskBand {
    band_for(score)
}
