//! Static question catalog for the Business Investor assessment.
//!
//! The evaluators only rely on question ids; prompts, options and bounds exist for
//! presentation layers and for the advisory [`validate`] pass.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::answers::{AnswerMap, AnswerValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    YesNo,
    Number,
    Select,
    Text,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionKind::YesNo => "yes-no",
            QuestionKind::Number => "number",
            QuestionKind::Select => "select",
            QuestionKind::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericBounds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<&'static str>,
    #[serde(rename = "validation", skip_serializing_if = "Option::is_none")]
    pub bounds: Option<NumericBounds>,
}

impl Question {
    const fn yes_no(id: &'static str, text: &'static str) -> Self {
        Self {
            id,
            text,
            kind: QuestionKind::YesNo,
            required: true,
            options: None,
            help_text: None,
            bounds: None,
        }
    }

    const fn number(
        id: &'static str,
        text: &'static str,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        Self {
            id,
            text,
            kind: QuestionKind::Number,
            required: true,
            options: None,
            help_text: None,
            bounds: Some(NumericBounds { min, max }),
        }
    }

    const fn select(
        id: &'static str,
        text: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            text,
            kind: QuestionKind::Select,
            required: true,
            options: Some(options),
            help_text: None,
            bounds: None,
        }
    }

    const fn text(id: &'static str, text: &'static str) -> Self {
        Self {
            id,
            text,
            kind: QuestionKind::Text,
            required: true,
            options: None,
            help_text: None,
            bounds: None,
        }
    }

    const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    const fn help(mut self, help_text: &'static str) -> Self {
        self.help_text = Some(help_text);
        self
    }

    /// Advisory check of a single answer against this question.
    pub fn check(&self, answers: &AnswerMap) -> Option<AnswerIssue> {
        let question_id = self.id.to_string();
        let value = match answers.get(self.id) {
            Some(value) if !is_blank(value) => value,
            _ if self.required => return Some(AnswerIssue::Missing { question_id }),
            _ => return None,
        };

        match self.kind {
            QuestionKind::YesNo => {
                if value.is_affirmative() || value.is_negative() {
                    None
                } else {
                    Some(AnswerIssue::WrongType {
                        question_id,
                        expected: self.kind,
                    })
                }
            }
            QuestionKind::Number => {
                let Some(number) = value.as_number() else {
                    return Some(AnswerIssue::WrongType {
                        question_id,
                        expected: self.kind,
                    });
                };
                let bounds = self.bounds?;
                match (bounds.min, bounds.max) {
                    (Some(min), _) if number < min => Some(AnswerIssue::BelowMinimum {
                        question_id,
                        min,
                        found: number,
                    }),
                    (_, Some(max)) if number > max => Some(AnswerIssue::AboveMaximum {
                        question_id,
                        max,
                        found: number,
                    }),
                    _ => None,
                }
            }
            QuestionKind::Select => match value.as_text() {
                Some(choice) if self.options.unwrap_or_default().contains(&choice) => None,
                Some(choice) => Some(AnswerIssue::UnknownOption {
                    question_id,
                    found: choice.to_string(),
                }),
                None => Some(AnswerIssue::WrongType {
                    question_id,
                    expected: self.kind,
                }),
            },
            QuestionKind::Text => match value {
                AnswerValue::Text(_) => None,
                _ => Some(AnswerIssue::WrongType {
                    question_id,
                    expected: self.kind,
                }),
            },
        }
    }
}

fn is_blank(value: &AnswerValue) -> bool {
    match value {
        AnswerValue::Text(text) => text.trim().is_empty(),
        other => other.is_null(),
    }
}

/// Problems found while checking answers against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "issue", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum AnswerIssue {
    #[error("{question_id}: answer is required")]
    Missing { question_id: String },
    #[error("{question_id}: expected a {} answer", .expected.label())]
    WrongType {
        question_id: String,
        expected: QuestionKind,
    },
    #[error("{question_id}: {found} is below the minimum of {min}")]
    BelowMinimum {
        question_id: String,
        min: f64,
        found: f64,
    },
    #[error("{question_id}: {found} is above the maximum of {max}")]
    AboveMaximum {
        question_id: String,
        max: f64,
        found: f64,
    },
    #[error("{question_id}: '{found}' is not one of the listed options")]
    UnknownOption { question_id: String, found: String },
}

impl AnswerIssue {
    pub fn question_id(&self) -> &str {
        match self {
            AnswerIssue::Missing { question_id }
            | AnswerIssue::WrongType { question_id, .. }
            | AnswerIssue::BelowMinimum { question_id, .. }
            | AnswerIssue::AboveMaximum { question_id, .. }
            | AnswerIssue::UnknownOption { question_id, .. } => question_id,
        }
    }
}

/// Checks every question in catalog order; an empty result means the answers are complete.
pub fn validate(questions: &[Question], answers: &AnswerMap) -> Vec<AnswerIssue> {
    questions
        .iter()
        .filter_map(|question| question.check(answers))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStage {
    Gateway,
    Detailed,
}

impl QuestionStage {
    pub fn questions(self) -> &'static [Question] {
        match self {
            QuestionStage::Gateway => gateway_questions(),
            QuestionStage::Detailed => detailed_questions(),
        }
    }
}

impl fmt::Display for QuestionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionStage::Gateway => f.write_str("gateway"),
            QuestionStage::Detailed => f.write_str("detailed"),
        }
    }
}

impl FromStr for QuestionStage {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "gateway" => Ok(QuestionStage::Gateway),
            "detailed" => Ok(QuestionStage::Detailed),
            other => Err(format!(
                "unknown question stage '{other}' (expected gateway or detailed)"
            )),
        }
    }
}

pub fn gateway_questions() -> &'static [Question] {
    &GATEWAY_QUESTIONS
}

pub fn detailed_questions() -> &'static [Question] {
    &DETAILED_QUESTIONS
}

static GATEWAY_QUESTIONS: [Question; 7] = [
    Question::yes_no("age", "Are you 55 years old or younger?")
        .help("You must be 55 or younger at the time of application"),
    Question::yes_no(
        "capital",
        "Do you have at least NZ$1 million available for business purchase (excluding real estate and GST)?",
    )
    .help("Funds must be legally earned, unencumbered, and verifiable"),
    Question::yes_no(
        "reserve",
        "Do you have an additional NZ$500,000 in reserve funds or assets?",
    )
    .help("Reserve funds must be separate from your investment capital"),
    Question::yes_no(
        "experience",
        "Do you have at least 3 years of business experience?",
    )
    .help("Either as business owner (5+ employees OR $1M+ revenue) OR senior manager (5+ direct reports in $5M+ business)"),
    Question::yes_no(
        "english",
        "Can you meet the English language requirement (IELTS 5.0 or equivalent)?",
    )
    .help("Test must be taken in-person within last 2 years, or citizenship/qualification from approved countries"),
    Question::yes_no(
        "bankruptcy",
        "Have you been involved in bankruptcy or business failure in the last 5 years?",
    )
    .help("Select YES if you have been bankrupt or had business failure. This is a disqualifying factor."),
    Question::yes_no(
        "clean_record",
        "Do you have a clean criminal and immigration record?",
    )
    .help("No criminal convictions, no immigration breaches"),
];

static DETAILED_QUESTIONS: [Question; 25] = [
    Question::number("age_exact", "What is your current age?", Some(18.0), Some(55.0)),
    Question::text("nationality", "What is your nationality?"),
    Question::number(
        "capital_amount",
        "Exact amount of capital available for investment (NZD)",
        Some(1_000_000.0),
        None,
    )
    .help("Enter amount in NZ dollars, excluding real estate and GST"),
    Question::number(
        "reserve_amount",
        "Amount of reserve funds available (NZD)",
        Some(500_000.0),
        None,
    ),
    Question::select(
        "funds_source",
        "Primary source of investment funds",
        &[
            "Business profits",
            "Sale of property",
            "Sale of business",
            "Investment returns",
            "Inheritance",
            "Employment savings",
            "Other",
        ],
    ),
    Question::select(
        "funds_location",
        "Where are your funds currently held?",
        &[
            "In New Zealand",
            "Outside New Zealand (< 2 years)",
            "Outside New Zealand (> 2 years)",
        ],
    )
    .help("Funds in NZ for 2+ years have simplified verification requirements"),
    Question::select(
        "experience_type",
        "Type of business experience",
        &["Self-employed (business owner)", "Senior management", "Both"],
    ),
    Question::number(
        "experience_years",
        "Total years of relevant business experience",
        Some(3.0),
        Some(50.0),
    ),
    Question::select(
        "business_size",
        "If self-employed: Business size",
        &[
            "5+ full-time employees",
            "Annual revenue $1M+",
            "Both",
            "N/A - I was senior manager",
        ],
    )
    .optional(),
    Question::number(
        "management_details",
        "If senior manager: Number of direct reports",
        Some(0.0),
        Some(1000.0),
    )
    .optional(),
    Question::number(
        "company_turnover",
        "If senior manager: Company annual turnover (NZD)",
        Some(0.0),
        None,
    )
    .optional(),
    Question::select(
        "english_method",
        "How will you meet English language requirement?",
        &[
            "IELTS test (5.0 overall)",
            "Other approved test",
            "Citizenship (Canada/Ireland/UK/USA)",
            "Qualification from approved country",
        ],
    ),
    Question::text(
        "english_test_date",
        "If test taken: When? (within last 2 years required)",
    )
    .optional()
    .help("Format: MM/YYYY"),
    Question::yes_no(
        "business_identified",
        "Have you identified a specific business to purchase?",
    ),
    Question::select(
        "business_sector",
        "If yes: Business sector",
        &[
            "Manufacturing",
            "Technology/IT Services",
            "Professional Services",
            "Healthcare",
            "Construction",
            "Retail",
            "Hospitality/Food Service",
            "Agriculture",
            "Other",
        ],
    )
    .optional(),
    Question::number(
        "business_price",
        "If yes: Purchase price (NZD)",
        Some(0.0),
        None,
    )
    .optional(),
    Question::number(
        "business_employees",
        "If yes: Current number of full-time employees",
        Some(0.0),
        Some(1000.0),
    )
    .optional(),
    Question::number(
        "business_years",
        "If yes: How many years has business been operating?",
        Some(0.0),
        Some(100.0),
    )
    .optional(),
    Question::select(
        "business_franchise",
        "Is the business a franchise or has franchise-like arrangements?",
        &[
            "No",
            "Yes - franchise",
            "Unsure - has some licensing/brand agreements",
            "N/A - business not identified yet",
        ],
    )
    .optional()
    .help("CRITICAL: Franchises are excluded. Includes any ongoing brand licensing or operational control by third party."),
    Question::yes_no(
        "bankruptcy_details",
        "Any bankruptcy, business failure, or insolvency in last 5 years?",
    ),
    Question::yes_no(
        "criminal_record",
        "Any criminal convictions anywhere in the world?",
    ),
    Question::yes_no(
        "immigration_breaches",
        "Any immigration breaches or visa refusals (any country)?",
    ),
    Question::select(
        "timeline",
        "When are you planning to apply?",
        &[
            "Within 1 month",
            "1-3 months",
            "3-6 months",
            "6-12 months",
            "Just researching (12+ months)",
        ],
    ),
    Question::yes_no("visited_nz", "Have you visited New Zealand before?"),
    Question::yes_no(
        "professional_advice",
        "Have you received professional immigration advice on this pathway?",
    ),
];
