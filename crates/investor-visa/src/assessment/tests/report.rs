use super::common::*;

use crate::assessment::report::AssessmentReport;
use crate::assessment::scoring::{DetailedResult, Pathway};
use crate::assessment::{evaluate_detailed, evaluate_gateway, RiskLevel};

fn strong_report() -> AssessmentReport {
    AssessmentReport::new(
        evaluate_detailed(&strong_applicant()),
        Some(evaluate_gateway(&passing_gateway_answers())),
        completed_at(),
    )
}

#[test]
fn text_report_lists_score_band_and_pathway() {
    let text = strong_report().render_text(&report_config());

    assert!(text.starts_with("NZ BUSINESS INVESTOR VISA ASSESSMENT REPORT"));
    assert!(text.contains("Your Assessment Score: 100/100"));
    assert!(text.contains("Rating: Excellent"));
    assert!(text.contains("Recommended Pathway: Fast Track (12 months to residence)"));
    assert!(text.contains("Gateway check: 7/7 criteria met (ELIGIBLE)"));
    assert!(text.contains("STRENGTHS:\n• Young applicant (more time to operate business)"));
    assert!(text.contains("Harbour & Co Immigration"));
    assert!(text.contains("advice@harbour.example"));
    assert!(text.ends_with("Assessment completed: 4 March 2025, 09:05 UTC"));
}

#[test]
fn text_report_omits_empty_sections() {
    let text = strong_report().render_text(&report_config());

    assert!(!text.contains("CONCERNS:"));
    assert!(!text.contains("RECOMMENDATIONS:"));
    assert!(text.contains("DISCLAIMER:\nThis tool provides preliminary assessment only"));
}

#[test]
fn report_without_gateway_skips_the_gateway_line() {
    let report = AssessmentReport::new(
        DetailedResult::new(
            52,
            Pathway::Standard,
            Vec::new(),
            vec!["Purchase price close to minimum".to_string()],
            vec!["Find business that has operated for 5+ years continuously".to_string()],
        ),
        None,
        completed_at(),
    );

    let text = report.render_text(&report_config());
    assert!(!text.contains("Gateway check"));
    assert!(text.contains("Rating: Weak"));
    assert!(text.contains("Recommended Pathway: Standard (3 years to residence)"));
    assert!(text.contains("CONCERNS:\n• Purchase price close to minimum"));
    assert!(!text.contains("STRENGTHS:"));
    assert_eq!(report.risk_level(), RiskLevel::Weak);
}

#[test]
fn html_report_colours_score_by_band() {
    let html = strong_report().render_html(&report_config());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("color: #10b981;\">100/100</div>"));
    assert!(html.contains("Recommended: Fast Track (12 months to residence)"));
    assert!(html.contains("✓ Your Strengths"));
    assert!(!html.contains("⚠ Areas of Concern"));
    assert!(html.contains("mailto:advice@harbour.example"));
    assert!(html.contains("Harbour &amp; Co Immigration"));
    assert!(html.contains("© 2025"));
    assert!(html.ends_with("</html>"));

    let ineligible = AssessmentReport::new(
        DetailedResult::new(10, Pathway::Ineligible, vec![], vec![], vec![]),
        None,
        completed_at(),
    );
    let html = ineligible.render_html(&report_config());
    assert!(html.contains("color: #ef4444;\">10/100</div>"));
    assert!(html.contains("High Risk"));
    assert!(html.contains("Not currently eligible"));
}

#[test]
fn html_report_escapes_feedback() {
    let report = AssessmentReport::new(
        DetailedResult::new(
            70,
            Pathway::Standard,
            vec!["<script>alert('x')</script>".to_string()],
            Vec::new(),
            Vec::new(),
        ),
        None,
        completed_at(),
    );

    let html = report.render_html(&report_config());
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
}

#[test]
fn envelope_uses_configured_sender_and_subject() {
    let config = report_config();
    let envelope = strong_report().envelope("  applicant@example.com ", &config);

    assert_eq!(envelope.to, "applicant@example.com");
    assert_eq!(envelope.from, "NZ Visa Assessment <onboarding@resend.dev>");
    assert_eq!(
        envelope.subject,
        "Your NZ Business Investor Visa Assessment Results"
    );
    assert_eq!(envelope.text, strong_report().render_text(&config));
    assert_eq!(envelope.html, strong_report().render_html(&config));
}
