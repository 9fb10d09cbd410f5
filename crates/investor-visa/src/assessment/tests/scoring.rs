use super::common::*;

use crate::assessment::answers::AnswerMap;
use crate::assessment::scoring::{DetailedResult, DetailedScorer, Pathway};
use crate::assessment::{evaluate_detailed, risk_band};

#[test]
fn strong_applicant_keeps_a_perfect_score() {
    let result = evaluate_detailed(&strong_applicant());

    assert_eq!(result.eligibility_score(), 100);
    assert_eq!(result.risk_score(), 100);
    assert_eq!(result.pathway, Pathway::FastTrack);
    assert!(result.concerns.is_empty());
    assert!(result.recommendations.is_empty());
    assert_eq!(
        result.strengths,
        vec![
            "Young applicant (more time to operate business)".to_string(),
            "Qualifies for fast-track pathway (12 months to residence)".to_string(),
            "Self-employment experience (strong evidence profile)".to_string(),
            "12 years business experience (exceeds minimum)".to_string(),
            "Suitable business sector for visa category".to_string(),
            "Business has 12 employees (exceeds minimum)".to_string(),
            "15 years operating history (exceeds minimum)".to_string(),
            "Funds already in NZ (simplified verification)".to_string(),
        ]
    );
}

#[test]
fn empty_answers_fall_back_to_defaults() {
    let result = evaluate_detailed(&AnswerMap::new());

    assert_eq!(result.risk_score(), 80);
    assert_eq!(result.pathway, Pathway::Standard);
    assert_eq!(
        result.strengths,
        vec!["Young applicant (more time to operate business)".to_string()]
    );
    assert_eq!(
        result.concerns,
        vec![
            "Capital amount close to minimum requirement".to_string(),
            "English test not yet taken".to_string(),
            "No business identified yet".to_string(),
        ]
    );
    assert_eq!(result.recommendations.len(), 5);
    assert_eq!(
        result.recommendations.last().map(String::as_str),
        Some("Obtain professional immigration and legal advice before proceeding")
    );
}

#[test]
fn franchise_costs_fifty_points() {
    let scorer = DetailedScorer::new();
    let baseline = scorer.score_sheet(&strong_applicant());
    let franchised = strong_applicant().with("business_franchise", "Yes - franchise");
    let sheet = scorer.score_sheet(&franchised);

    assert_eq!(sheet.score, baseline.score - 50);
    assert!(sheet.concerns.contains(
        &"⚠️ CRITICAL: Business is a franchise (EXCLUDED - application will be declined)"
            .to_string()
    ));

    let result = scorer.evaluate(&franchised);
    assert_eq!(result.risk_score(), 50);
    assert_eq!(result.pathway, Pathway::FastTrack);
    assert_eq!(
        result.recommendations,
        vec!["Find non-franchise business immediately".to_string()]
    );
}

#[test]
fn bankruptcy_is_ineligible_despite_high_capital() {
    let answers = AnswerMap::new()
        .with("capital_amount", 3_000_000)
        .with("bankruptcy_details", true);

    let result = evaluate_detailed(&answers);
    assert_eq!(result.pathway, Pathway::Ineligible);
    assert_eq!(result.risk_score(), 0);
    assert!(result
        .concerns
        .iter()
        .any(|concern| concern.contains("Bankruptcy/business failure in last 5 years")));
}

#[test]
fn bankruptcy_overrides_an_otherwise_perfect_profile() {
    let answers = strong_applicant().with("bankruptcy_details", true);
    let result = evaluate_detailed(&answers);

    assert_eq!(result.pathway, Pathway::Ineligible);
    assert_eq!(result.risk_score(), 0);
}

#[test]
fn any_truthy_text_counts_as_a_declared_flag() {
    let answers = strong_applicant().with("bankruptcy_details", "no");
    assert_eq!(evaluate_detailed(&answers).pathway, Pathway::Ineligible);

    let answers = strong_applicant().with("bankruptcy_details", "");
    assert_eq!(evaluate_detailed(&answers).pathway, Pathway::FastTrack);
}

#[test]
fn adversarial_answers_clamp_to_zero() {
    let scorer = DetailedScorer::new();
    let answers = adversarial_applicant();

    let sheet = scorer.score_sheet(&answers);
    assert!(sheet.score < 0, "running score should go negative");

    let result = scorer.evaluate(&answers);
    assert_eq!(result.risk_score(), 0);
    assert_eq!(result.eligibility_score(), result.risk_score());
    assert_eq!(result.pathway, Pathway::Ineligible);
    assert_eq!(risk_band(result.risk_score()).label, "High Risk");
}

#[test]
fn constructor_clamps_out_of_range_scores() {
    let high = DetailedResult::new(250, Pathway::Standard, vec![], vec![], vec![]);
    assert_eq!(high.risk_score(), 100);
    assert_eq!(high.eligibility_score(), 100);

    let low = DetailedResult::new(-40, Pathway::Ineligible, vec![], vec![], vec![]);
    assert_eq!(low.risk_score(), 0);
}

#[test]
fn fast_track_needs_capital_and_a_viable_score() {
    let answers = strong_applicant().with("capital_amount", 1_999_999);
    assert_eq!(evaluate_detailed(&answers).pathway, Pathway::Standard);

    let answers = strong_applicant().with("capital_amount", 2_000_000);
    assert_eq!(evaluate_detailed(&answers).pathway, Pathway::FastTrack);

    let answers = strong_applicant()
        .with("criminal_record", true)
        .with("immigration_breaches", true);
    let result = evaluate_detailed(&answers);
    assert_eq!(result.risk_score(), 20);
    assert_eq!(result.pathway, Pathway::Ineligible);
}

#[test]
fn scoring_is_deterministic() {
    let answers = adversarial_applicant().with("bankruptcy_details", false);

    let first = serde_json::to_string(&evaluate_detailed(&answers)).expect("serializes");
    let second = serde_json::to_string(&evaluate_detailed(&answers)).expect("serializes");
    assert_eq!(first, second);
}

#[test]
fn result_publishes_both_score_names() {
    let value = serde_json::to_value(evaluate_detailed(&AnswerMap::new())).expect("serializes");

    assert_eq!(value["eligibilityScore"], 80);
    assert_eq!(value["riskScore"], 80);
    assert_eq!(value["pathway"], "standard");
}

#[test]
fn mismatched_wire_scores_are_rejected() {
    let payload = serde_json::json!({
        "eligibilityScore": 70,
        "riskScore": 65,
        "pathway": "standard",
    });
    assert!(serde_json::from_value::<DetailedResult>(payload).is_err());

    let payload = serde_json::json!({
        "eligibilityScore": 120,
        "riskScore": 120,
        "pathway": "standard",
    });
    assert!(serde_json::from_value::<DetailedResult>(payload).is_err());

    let payload = serde_json::json!({
        "eligibilityScore": 65,
        "riskScore": 65,
        "pathway": "standard",
        "concerns": ["Purchase price close to minimum"],
    });
    let result = serde_json::from_value::<DetailedResult>(payload).expect("valid wire result");
    assert_eq!(result.risk_score(), 65);
    assert!(result.strengths.is_empty());
}
