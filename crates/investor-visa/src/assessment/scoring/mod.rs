mod policy;
pub(crate) mod rules;

pub use policy::Pathway;

use super::answers::AnswerMap;
use policy::decide_pathway;
use serde::{Deserialize, Serialize};

/// Score every applicant starts from before penalties are applied.
pub const STARTING_SCORE: i32 = 100;

/// Running accumulator threaded through the scoring rules.
///
/// Rules take the sheet by value and hand back the next one, so each rule can be
/// exercised on its own and the evaluation order stays explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSheet {
    pub score: i32,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ScoreSheet {
    pub fn opening() -> Self {
        Self {
            score: STARTING_SCORE,
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn adjust(mut self, delta: i32) -> Self {
        self.score = self.score.saturating_add(delta);
        self
    }

    pub fn strength(mut self, note: impl Into<String>) -> Self {
        self.strengths.push(note.into());
        self
    }

    pub fn concern(mut self, note: impl Into<String>) -> Self {
        self.concerns.push(note.into());
        self
    }

    pub fn recommend(mut self, note: impl Into<String>) -> Self {
        self.recommendations.push(note.into());
        self
    }

    pub fn clamped_score(&self) -> u8 {
        self.score.clamp(0, 100) as u8
    }
}

impl Default for ScoreSheet {
    fn default() -> Self {
        Self::opening()
    }
}

/// Outcome of the detailed assessment.
///
/// The score is published under two names (`eligibilityScore` and `riskScore`)
/// that consumers read interchangeably; both are backed by the same stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DetailedResultWire", try_from = "DetailedResultWire")]
pub struct DetailedResult {
    score: u8,
    pub pathway: Pathway,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

impl DetailedResult {
    /// Builds a result, clamping `score` into `0..=100`.
    pub fn new(
        score: i32,
        pathway: Pathway,
        strengths: Vec<String>,
        concerns: Vec<String>,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            score: score.clamp(0, 100) as u8,
            pathway,
            strengths,
            concerns,
            recommendations,
        }
    }

    pub fn eligibility_score(&self) -> u8 {
        self.score
    }

    pub fn risk_score(&self) -> u8 {
        self.score
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailedResultWire {
    eligibility_score: u8,
    risk_score: u8,
    pathway: Pathway,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    concerns: Vec<String>,
    #[serde(default)]
    recommendations: Vec<String>,
}

impl From<DetailedResult> for DetailedResultWire {
    fn from(value: DetailedResult) -> Self {
        Self {
            eligibility_score: value.score,
            risk_score: value.score,
            pathway: value.pathway,
            strengths: value.strengths,
            concerns: value.concerns,
            recommendations: value.recommendations,
        }
    }
}

impl TryFrom<DetailedResultWire> for DetailedResult {
    type Error = String;

    fn try_from(value: DetailedResultWire) -> Result<Self, Self::Error> {
        if value.eligibility_score != value.risk_score {
            return Err(format!(
                "eligibilityScore {} does not match riskScore {}",
                value.eligibility_score, value.risk_score
            ));
        }
        if value.risk_score > 100 {
            return Err(format!("score {} exceeds 100", value.risk_score));
        }

        Ok(Self {
            score: value.risk_score,
            pathway: value.pathway,
            strengths: value.strengths,
            concerns: value.concerns,
            recommendations: value.recommendations,
        })
    }
}

/// Stateless scorer folding the ordered rule list over the answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailedScorer;

impl DetailedScorer {
    pub fn new() -> Self {
        Self
    }

    /// Running sheet after every rule, before clamping.
    pub fn score_sheet(&self, answers: &AnswerMap) -> ScoreSheet {
        rules::RULES
            .iter()
            .fold(ScoreSheet::opening(), |sheet, rule| rule(answers, sheet))
    }

    pub fn evaluate(&self, answers: &AnswerMap) -> DetailedResult {
        let sheet = self.score_sheet(answers);
        let score = sheet.clamped_score();
        let pathway = decide_pathway(answers, score);

        let ScoreSheet {
            strengths,
            concerns,
            recommendations,
            ..
        } = sheet;

        DetailedResult::new(
            i32::from(score),
            pathway,
            strengths,
            concerns,
            recommendations,
        )
    }
}
