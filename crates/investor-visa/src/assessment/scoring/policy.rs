use serde::{Deserialize, Serialize};

use super::super::answers::AnswerMap;
use super::rules::{BANKRUPTCY_DETAILS, CAPITAL_AMOUNT, FAST_TRACK_CAPITAL};

/// Lowest clamped score that still leads to a viable pathway.
pub const VIABLE_SCORE: u8 = 40;

/// Recommended visa processing track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pathway {
    FastTrack,
    Standard,
    Ineligible,
}

impl Pathway {
    pub const fn label(self) -> &'static str {
        match self {
            Pathway::FastTrack => "fast_track",
            Pathway::Standard => "standard",
            Pathway::Ineligible => "ineligible",
        }
    }

    /// Track name with its time to residence.
    pub const fn track(self) -> &'static str {
        match self {
            Pathway::FastTrack => "Fast Track (12 months to residence)",
            Pathway::Standard => "Standard (3 years to residence)",
            Pathway::Ineligible => "Not currently eligible",
        }
    }

    /// Short recommendation line used in reports.
    pub const fn summary(self) -> &'static str {
        match self {
            Pathway::FastTrack => "Recommended: Fast Track (12 months to residence)",
            Pathway::Standard => "Recommended: Standard (3 years to residence)",
            Pathway::Ineligible => "Not currently eligible",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Pathway::FastTrack => {
                "Fast Track: 12-month pathway to residence (investment $2M+)"
            }
            Pathway::Standard => "Standard: 3-year pathway to residence (investment $1M-$2M)",
            Pathway::Ineligible => "Not eligible for this visa category at this time",
        }
    }
}

pub(crate) fn decide_pathway(answers: &AnswerMap, clamped_score: u8) -> Pathway {
    if clamped_score < VIABLE_SCORE || answers.flag(BANKRUPTCY_DETAILS) {
        return Pathway::Ineligible;
    }

    if answers.number_or(CAPITAL_AMOUNT, 0.0) >= FAST_TRACK_CAPITAL {
        return Pathway::FastTrack;
    }

    Pathway::Standard
}
