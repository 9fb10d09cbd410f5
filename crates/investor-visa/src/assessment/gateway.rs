use serde::{Deserialize, Serialize};

use super::answers::AnswerMap;

/// One pass/fail check in the gateway checklist, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayCriterion {
    Age,
    Capital,
    Reserve,
    Experience,
    English,
    Bankruptcy,
    CleanRecord,
}

impl GatewayCriterion {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Age,
            Self::Capital,
            Self::Reserve,
            Self::Experience,
            Self::English,
            Self::Bankruptcy,
            Self::CleanRecord,
        ]
    }

    /// Answer key the criterion reads.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Capital => "capital",
            Self::Reserve => "reserve",
            Self::Experience => "experience",
            Self::English => "english",
            Self::Bankruptcy => "bankruptcy",
            Self::CleanRecord => "clean_record",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age requirement (≤55)",
            Self::Capital => "Capital requirement ($1M+)",
            Self::Reserve => "Reserve funds ($500K+)",
            Self::Experience => "Business experience (3+ years)",
            Self::English => "English language",
            Self::Bankruptcy => "No bankruptcy/business failure",
            Self::CleanRecord => "Clean criminal/immigration record",
        }
    }

    /// Bankruptcy is asked as "have you been bankrupt", so a "no" passes it.
    pub fn passes(self, answers: &AnswerMap) -> bool {
        match self {
            Self::Bankruptcy => answers.is_no(self.key()),
            _ => answers.is_yes(self.key()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayStatus {
    Eligible,
    Marginal,
    Ineligible,
}

impl GatewayStatus {
    pub fn from_counts(passed: usize, total: usize) -> Self {
        if passed == total {
            Self::Eligible
        } else if passed + 1 == total {
            Self::Marginal
        } else {
            Self::Ineligible
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Eligible => "ELIGIBLE",
            Self::Marginal => "MARGINAL",
            Self::Ineligible => "INELIGIBLE",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::Eligible => "You may be eligible",
            Self::Marginal => "Marginal eligibility",
            Self::Ineligible => "Not eligible",
        }
    }
}

/// Verdict of the gateway checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResult {
    pub eligible: bool,
    pub status: GatewayStatus,
    pub passed_checks: usize,
    pub total_checks: usize,
    pub failed_criteria: Vec<String>,
}

/// Stateless evaluator for the seven-criterion gateway screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct GatewayEvaluator;

impl GatewayEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, answers: &AnswerMap) -> GatewayResult {
        let criteria = GatewayCriterion::ordered();
        let failed_criteria: Vec<String> = criteria
            .iter()
            .filter(|criterion| !criterion.passes(answers))
            .map(|criterion| criterion.label().to_string())
            .collect();

        let total_checks = criteria.len();
        let passed_checks = total_checks - failed_criteria.len();
        let status = GatewayStatus::from_counts(passed_checks, total_checks);

        GatewayResult {
            eligible: status == GatewayStatus::Eligible,
            status,
            passed_checks,
            total_checks,
            failed_criteria,
        }
    }
}
