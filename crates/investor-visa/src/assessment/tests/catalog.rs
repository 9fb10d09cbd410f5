use super::common::*;

use crate::assessment::answers::AnswerMap;
use crate::assessment::catalog::{
    detailed_questions, gateway_questions, validate, AnswerIssue, QuestionKind, QuestionStage,
};
use crate::assessment::gateway::GatewayCriterion;

#[test]
fn gateway_questions_follow_the_checklist() {
    let ids: Vec<&str> = gateway_questions().iter().map(|q| q.id).collect();
    let keys: Vec<&str> = GatewayCriterion::ordered()
        .into_iter()
        .map(GatewayCriterion::key)
        .collect();

    assert_eq!(ids, keys);
    assert!(gateway_questions()
        .iter()
        .all(|q| q.kind == QuestionKind::YesNo && q.required));
}

#[test]
fn detailed_catalog_lists_twenty_five_questions() {
    let questions = detailed_questions();
    assert_eq!(questions.len(), 25);
    assert_eq!(questions.first().map(|q| q.id), Some("age_exact"));
    assert_eq!(questions.last().map(|q| q.id), Some("professional_advice"));

    let optional: Vec<&str> = questions
        .iter()
        .filter(|q| !q.required)
        .map(|q| q.id)
        .collect();
    assert!(optional.contains(&"business_franchise"));
    assert!(optional.contains(&"english_test_date"));
    assert!(!optional.contains(&"timeline"));
}

#[test]
fn complete_answers_raise_no_issues() {
    assert!(validate(detailed_questions(), &strong_applicant()).is_empty());
    assert!(validate(gateway_questions(), &passing_gateway_answers()).is_empty());
}

#[test]
fn missing_and_blank_required_answers_are_reported() {
    let mut answers = strong_applicant().with("nationality", "   ");
    answers.remove("timeline");

    let issues = validate(detailed_questions(), &answers);
    assert_eq!(
        issues,
        vec![
            AnswerIssue::Missing {
                question_id: "nationality".to_string()
            },
            AnswerIssue::Missing {
                question_id: "timeline".to_string()
            },
        ]
    );
}

#[test]
fn numeric_bounds_are_enforced() {
    let answers = strong_applicant()
        .with("age_exact", 17)
        .with("experience_years", 51);

    let issues = validate(detailed_questions(), &answers);
    assert_eq!(issues.len(), 2);
    assert!(matches!(
        &issues[0],
        AnswerIssue::BelowMinimum { question_id, min, found }
            if question_id == "age_exact" && *min == 18.0 && *found == 17.0
    ));
    assert!(matches!(
        &issues[1],
        AnswerIssue::AboveMaximum { question_id, max, .. }
            if question_id == "experience_years" && *max == 50.0
    ));
}

#[test]
fn kinds_and_options_are_checked() {
    let answers = strong_applicant()
        .with("capital_amount", "plenty")
        .with("visited_nz", "maybe")
        .with("timeline", "Next decade");

    let issues = validate(detailed_questions(), &answers);
    let ids: Vec<&str> = issues.iter().map(AnswerIssue::question_id).collect();
    assert_eq!(ids, vec!["capital_amount", "timeline", "visited_nz"]);
    assert!(matches!(
        issues[0],
        AnswerIssue::WrongType {
            expected: QuestionKind::Number,
            ..
        }
    ));
    assert_eq!(
        issues[1].to_string(),
        "timeline: 'Next decade' is not one of the listed options"
    );
    assert_eq!(issues[2].to_string(), "visited_nz: expected a yes-no answer");
}

#[test]
fn optional_questions_may_be_skipped() {
    let mut answers = strong_applicant();
    for id in ["business_sector", "business_price", "business_franchise"] {
        answers.remove(id);
    }

    assert!(validate(detailed_questions(), &answers).is_empty());
}

#[test]
fn empty_answers_report_every_required_question() {
    let issues = validate(gateway_questions(), &AnswerMap::new());
    assert_eq!(issues.len(), 7);
}

#[test]
fn questions_serialize_for_front_ends() {
    let value = serde_json::to_value(detailed_questions()).expect("catalog serializes");

    let age = &value[0];
    assert_eq!(age["id"], "age_exact");
    assert_eq!(age["type"], "number");
    assert_eq!(age["validation"]["min"], 18.0);
    assert_eq!(age["validation"]["max"], 55.0);

    let capital = &value[2];
    assert!(capital["validation"].get("max").is_none());
    assert_eq!(
        capital["helpText"],
        "Enter amount in NZ dollars, excluding real estate and GST"
    );

    let issue = serde_json::to_value(AnswerIssue::Missing {
        question_id: "timeline".to_string(),
    })
    .expect("issue serializes");
    assert_eq!(issue["issue"], "missing");
    assert_eq!(issue["questionId"], "timeline");
}

#[test]
fn stage_parses_case_insensitively() {
    assert_eq!("Gateway".parse::<QuestionStage>(), Ok(QuestionStage::Gateway));
    assert_eq!(" detailed ".parse::<QuestionStage>(), Ok(QuestionStage::Detailed));
    assert!("final".parse::<QuestionStage>().is_err());
    assert_eq!(QuestionStage::Detailed.questions().len(), 25);
    assert_eq!(QuestionStage::Gateway.to_string(), "gateway");
}
