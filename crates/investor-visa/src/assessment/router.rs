use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::answers::AnswerMap;
use super::band::{band_for, RiskBand};
use super::catalog::{self, AnswerIssue, Question};
use super::dispatch::ReportDispatcher;
use super::scoring::DetailedResult;
use super::service::{AssessmentService, AssessmentServiceError, ReportDelivery, ReportRequest};

/// Response body for a scored detailed assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAssessmentView {
    pub result: DetailedResult,
    pub risk_band: RiskBand,
    pub pathway_description: &'static str,
    pub issues: Vec<AnswerIssue>,
}

/// Router builder exposing the catalog, both evaluators, and report delivery.
pub fn assessment_router<D>(service: Arc<AssessmentService<D>>) -> Router
where
    D: ReportDispatcher + 'static,
{
    Router::new()
        .route("/api/v1/questions/gateway", get(gateway_questions_handler))
        .route("/api/v1/questions/detailed", get(detailed_questions_handler))
        .route("/api/v1/assessments/gateway", post(gateway_handler::<D>))
        .route("/api/v1/assessments/detailed", post(detailed_handler::<D>))
        .route("/api/v1/reports", post(report_handler::<D>))
        .with_state(service)
}

pub(crate) async fn gateway_questions_handler() -> Json<&'static [Question]> {
    Json(catalog::gateway_questions())
}

pub(crate) async fn detailed_questions_handler() -> Json<&'static [Question]> {
    Json(catalog::detailed_questions())
}

pub(crate) async fn gateway_handler<D>(
    State(service): State<Arc<AssessmentService<D>>>,
    Json(answers): Json<AnswerMap>,
) -> Response
where
    D: ReportDispatcher + 'static,
{
    let result = service.evaluate_gateway(&answers);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn detailed_handler<D>(
    State(service): State<Arc<AssessmentService<D>>>,
    Json(answers): Json<AnswerMap>,
) -> Response
where
    D: ReportDispatcher + 'static,
{
    let result = service.evaluate_detailed(&answers);
    let view = DetailedAssessmentView {
        risk_band: band_for(result.risk_score()),
        pathway_description: result.pathway.description(),
        issues: service.validate_detailed(&answers),
        result,
    };
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn report_handler<D>(
    State(service): State<Arc<AssessmentService<D>>>,
    Json(request): Json<ReportRequest>,
) -> Response
where
    D: ReportDispatcher + 'static,
{
    match service.send_report(request) {
        Ok(delivery @ ReportDelivery::Sent { .. }) => {
            (StatusCode::ACCEPTED, Json(delivery)).into_response()
        }
        Ok(delivery) => (StatusCode::OK, Json(delivery)).into_response(),
        Err(AssessmentServiceError::InvalidRecipient(email)) => {
            let payload = json!({
                "error": "invalid recipient e-mail address",
                "email": email,
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
    }
}
