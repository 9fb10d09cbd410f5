use crate::commands::{delivery_summary, detailed_summary, gateway_summary, issue_summary};
use crate::infra::InMemoryReportDispatcher;
use chrono::Utc;
use clap::Args;
use investor_visa::assessment::{AnswerMap, AssessmentService, ReportRequest};
use investor_visa::config::ReportConfig;
use investor_visa::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Recipient used for the report preview
    #[arg(long, default_value = "applicant@example.com")]
    pub(crate) email: String,
    /// Print the HTML body instead of the plain-text body
    #[arg(long)]
    pub(crate) html: bool,
    /// Skip the report preview
    #[arg(long)]
    pub(crate) skip_report: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let dispatcher = Arc::new(InMemoryReportDispatcher::default());
    let service = AssessmentService::new(dispatcher.clone(), ReportConfig::default());

    println!("Business Investor visa assessment demo");
    println!("Applicant: 47-year-old manufacturing owner with NZ$1.6M to invest\n");

    let gateway = service.evaluate_gateway(&demo_gateway_answers());
    println!("{}\n", gateway_summary(&gateway));

    let answers = demo_detailed_answers();
    let detailed = service.evaluate_detailed(&answers);
    println!("{}", detailed_summary(&detailed));

    let issues = service.validate_detailed(&answers);
    if !issues.is_empty() {
        println!("\n{}", issue_summary(&issues));
    }

    if args.skip_report {
        return Ok(());
    }

    let delivery = service.send_report(ReportRequest {
        email: args.email,
        detailed_result: detailed,
        gateway_result: Some(gateway),
        completed_at: Utc::now(),
    })?;
    println!("\n{}", delivery_summary(&delivery));

    for envelope in dispatcher.envelopes() {
        println!("To: {}", envelope.to);
        println!("From: {}", envelope.from);
        println!("Subject: {}\n", envelope.subject);
        if args.html {
            println!("{}", envelope.html);
        } else {
            println!("{}", envelope.text);
        }
    }

    Ok(())
}

fn demo_gateway_answers() -> AnswerMap {
    AnswerMap::new()
        .with("age", "yes")
        .with("capital", "yes")
        .with("reserve", "yes")
        .with("experience", "yes")
        .with("english", "yes")
        .with("bankruptcy", "no")
        .with("clean_record", "yes")
}

fn demo_detailed_answers() -> AnswerMap {
    AnswerMap::new()
        .with("age_exact", 47)
        .with("nationality", "British")
        .with("capital_amount", 1_600_000)
        .with("reserve_amount", 650_000)
        .with("funds_source", "Sale of business")
        .with("funds_location", "Outside New Zealand (< 2 years)")
        .with("experience_type", "Self-employed (business owner)")
        .with("experience_years", 9)
        .with("business_size", "Both")
        .with("english_method", "Citizenship (Canada/Ireland/UK/USA)")
        .with("business_identified", true)
        .with("business_sector", "Manufacturing")
        .with("business_price", 1_350_000)
        .with("business_employees", 6)
        .with("business_years", 11)
        .with("business_franchise", "No")
        .with("bankruptcy_details", false)
        .with("criminal_record", false)
        .with("immigration_breaches", false)
        .with("timeline", "3-6 months")
        .with("visited_nz", true)
        .with("professional_advice", false)
}
