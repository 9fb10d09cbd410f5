use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::answers::AnswerMap;
use crate::assessment::dispatch::{DispatchError, DispatchReceipt, ReportDispatcher};
use crate::assessment::gateway::GatewayCriterion;
use crate::assessment::report::ReportEnvelope;
use crate::assessment::service::{AssessmentService, ReportRequest};
use crate::assessment::{assessment_router, evaluate_detailed, evaluate_gateway};
use crate::config::ReportConfig;

pub(super) fn passing_gateway_answers() -> AnswerMap {
    GatewayCriterion::ordered()
        .into_iter()
        .map(|criterion| (criterion.key(), criterion != GatewayCriterion::Bankruptcy))
        .collect()
}

/// Applicant who clears every detailed rule without a penalty.
pub(super) fn strong_applicant() -> AnswerMap {
    AnswerMap::new()
        .with("age_exact", 42)
        .with("nationality", "Canadian")
        .with("capital_amount", 2_500_000)
        .with("reserve_amount", 750_000)
        .with("funds_source", "Sale of business")
        .with("funds_location", "In New Zealand")
        .with("funds_nz_duration_over_2_years", true)
        .with("experience_type", "Self-employed (business owner)")
        .with("experience_years", 12)
        .with("english_method", "Citizenship (Canada/Ireland/UK/USA)")
        .with("business_identified", true)
        .with("business_sector", "Manufacturing")
        .with("business_price", 1_800_000)
        .with("business_employees", 12)
        .with("business_years", 15)
        .with("business_franchise", "No")
        .with("bankruptcy_details", false)
        .with("criminal_record", false)
        .with("immigration_breaches", false)
        .with("timeline", "3-6 months")
        .with("visited_nz", true)
        .with("professional_advice", true)
}

/// Every penalty the scorer knows about, at once.
pub(super) fn adversarial_applicant() -> AnswerMap {
    AnswerMap::new()
        .with("age_exact", 55)
        .with("capital_amount", 0)
        .with("experience_type", "Senior management")
        .with("experience_years", 3)
        .with("english_method", "IELTS test (5.0 overall)")
        .with("business_identified", true)
        .with("business_sector", "Retail")
        .with("business_price", 0)
        .with("business_employees", 0)
        .with("business_years", 0)
        .with("business_franchise", "Yes - franchise")
        .with("bankruptcy_details", true)
        .with("criminal_record", true)
        .with("immigration_breaches", true)
        .with("timeline", "Within 1 month")
}

pub(super) fn completed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 4, 9, 5, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn report_config() -> ReportConfig {
    ReportConfig {
        firm_name: "Harbour & Co Immigration".to_string(),
        support_email: "advice@harbour.example".to_string(),
        ..ReportConfig::default()
    }
}

pub(super) fn disabled_report_config() -> ReportConfig {
    ReportConfig {
        emails_enabled: false,
        ..report_config()
    }
}

pub(super) fn report_request(email: &str) -> ReportRequest {
    let answers = strong_applicant();
    ReportRequest {
        email: email.to_string(),
        detailed_result: evaluate_detailed(&answers),
        gateway_result: Some(evaluate_gateway(&passing_gateway_answers())),
        completed_at: completed_at(),
    }
}

pub(super) fn build_service(
    config: ReportConfig,
) -> (AssessmentService<MemoryDispatcher>, Arc<MemoryDispatcher>) {
    let dispatcher = Arc::new(MemoryDispatcher::default());
    let service = AssessmentService::new(dispatcher.clone(), config);
    (service, dispatcher)
}

pub(super) fn failing_service() -> AssessmentService<FailingDispatcher> {
    AssessmentService::new(Arc::new(FailingDispatcher), report_config())
}

#[derive(Default, Clone)]
pub(super) struct MemoryDispatcher {
    envelopes: Arc<Mutex<Vec<ReportEnvelope>>>,
}

impl MemoryDispatcher {
    pub(super) fn envelopes(&self) -> Vec<ReportEnvelope> {
        self.envelopes
            .lock()
            .expect("dispatcher mutex poisoned")
            .clone()
    }
}

impl ReportDispatcher for MemoryDispatcher {
    fn dispatch(&self, envelope: ReportEnvelope) -> Result<DispatchReceipt, DispatchError> {
        let mut guard = self.envelopes.lock().expect("dispatcher mutex poisoned");
        guard.push(envelope);
        Ok(DispatchReceipt {
            id: format!("memory-{}", guard.len()),
        })
    }
}

pub(super) struct FailingDispatcher;

impl ReportDispatcher for FailingDispatcher {
    fn dispatch(&self, _envelope: ReportEnvelope) -> Result<DispatchReceipt, DispatchError> {
        Err(DispatchError::Transport("relay offline".to_string()))
    }
}

pub(super) fn router_with_service<D>(service: AssessmentService<D>) -> axum::Router
where
    D: ReportDispatcher + 'static,
{
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
