use crate::infra::{read_answers, LoggingReportDispatcher};
use chrono::Utc;
use clap::Args;
use investor_visa::assessment::catalog;
use investor_visa::assessment::{
    band_for, evaluate_detailed, evaluate_gateway, AnswerIssue, AssessmentService,
    DetailedAssessmentView, DetailedResult, GatewayResult, Question, QuestionStage,
    ReportDelivery, ReportRequest,
};
use investor_visa::config::AppConfig;
use investor_visa::error::AppError;
use investor_visa::telemetry;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct GatewayArgs {
    /// JSON file with the gateway answers keyed by question id
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the verdict as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file with the detailed answers keyed by question id
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Send the rendered report to this address through the logging dispatcher
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Print the scored assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Only list one stage (gateway or detailed)
    #[arg(long)]
    pub(crate) stage: Option<QuestionStage>,
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_gateway(args: GatewayArgs) -> Result<(), AppError> {
    let answers = read_answers(&args.answers)?;
    let result = evaluate_gateway(&answers);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", gateway_summary(&result));
    }
    Ok(())
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let answers = read_answers(&args.answers)?;
    let result = evaluate_detailed(&answers);
    let issues = catalog::validate(QuestionStage::Detailed.questions(), &answers);

    if args.json {
        let view = DetailedAssessmentView {
            risk_band: band_for(result.risk_score()),
            pathway_description: result.pathway.description(),
            issues,
            result: result.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", detailed_summary(&result));
        if !issues.is_empty() {
            println!("\n{}", issue_summary(&issues));
        }
    }

    if let Some(email) = args.email {
        let config = AppConfig::load()?;
        telemetry::init(&config.telemetry)?;

        let service = AssessmentService::new(
            Arc::new(LoggingReportDispatcher::default()),
            config.reports,
        );
        let delivery = service.send_report(ReportRequest {
            email,
            detailed_result: result,
            gateway_result: None,
            completed_at: Utc::now(),
        })?;
        println!("\n{}", delivery_summary(&delivery));
    }

    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let stages = match args.stage {
        Some(stage) => vec![stage],
        None => vec![QuestionStage::Gateway, QuestionStage::Detailed],
    };

    if args.json {
        let by_stage: serde_json::Map<String, serde_json::Value> = stages
            .iter()
            .map(|stage| {
                serde_json::to_value(stage.questions()).map(|value| (stage.to_string(), value))
            })
            .collect::<Result<_, _>>()?;
        println!("{}", serde_json::to_string_pretty(&by_stage)?);
    } else {
        let listings: Vec<String> = stages
            .iter()
            .map(|stage| question_listing(*stage, stage.questions()))
            .collect();
        println!("{}", listings.join("\n\n"));
    }
    Ok(())
}

pub(crate) fn gateway_summary(result: &GatewayResult) -> String {
    let mut lines = vec![
        format!(
            "Gateway verdict: {} ({})",
            result.status.headline(),
            result.status.label()
        ),
        format!(
            "Criteria met: {}/{}",
            result.passed_checks, result.total_checks
        ),
    ];

    if !result.failed_criteria.is_empty() {
        lines.push("Failed criteria:".to_string());
        lines.extend(
            result
                .failed_criteria
                .iter()
                .map(|criterion| format!("- {criterion}")),
        );
    }

    lines.join("\n")
}

pub(crate) fn detailed_summary(result: &DetailedResult) -> String {
    let band = band_for(result.risk_score());
    let mut lines = vec![
        format!(
            "Assessment score: {}/100 ({})",
            result.risk_score(),
            band.label
        ),
        band.description.to_string(),
        format!("Pathway: {}", result.pathway.description()),
    ];

    for (title, items) in [
        ("Strengths", &result.strengths),
        ("Concerns", &result.concerns),
        ("Recommendations", &result.recommendations),
    ] {
        if items.is_empty() {
            continue;
        }
        lines.push(format!("\n{title}"));
        lines.extend(items.iter().map(|item| format!("- {item}")));
    }

    lines.join("\n")
}

pub(crate) fn issue_summary(issues: &[AnswerIssue]) -> String {
    let mut lines = vec![format!("Answer issues ({})", issues.len())];
    lines.extend(issues.iter().map(|issue| format!("- {issue}")));
    lines.join("\n")
}

pub(crate) fn delivery_summary(delivery: &ReportDelivery) -> String {
    match delivery {
        ReportDelivery::Sent { id } => format!("Report dispatched (receipt {id})"),
        ReportDelivery::Disabled => "Report delivery disabled; nothing sent".to_string(),
    }
}

pub(crate) fn question_listing(stage: QuestionStage, questions: &[Question]) -> String {
    let mut lines = vec![format!("{stage} questions ({})", questions.len())];
    for question in questions {
        let marker = if question.required { "" } else { " (optional)" };
        lines.push(format!(
            "  [{}] {} <{}>{marker}",
            question.id,
            question.text,
            question.kind.label()
        ));
        if let Some(options) = question.options {
            lines.push(format!("      options: {}", options.join(" | ")));
        }
    }
    lines.join("\n")
}
