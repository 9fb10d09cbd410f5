use serde::Serialize;

/// Display bucket for a detailed assessment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Excellent,
    Strong,
    Moderate,
    Weak,
    HighRisk,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            75..=89 => Self::Strong,
            60..=74 => Self::Moderate,
            40..=59 => Self::Weak,
            _ => Self::HighRisk,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
            Self::HighRisk => "High Risk",
        }
    }

    pub const fn color_token(self) -> &'static str {
        match self {
            Self::Excellent => "text-green-600",
            Self::Strong => "text-green-500",
            Self::Moderate => "text-yellow-600",
            Self::Weak => "text-orange-600",
            Self::HighRisk => "text-red-600",
        }
    }

    /// Hex accent used where utility classes are unavailable (e-mail clients).
    pub const fn accent_hex(self) -> &'static str {
        match self {
            Self::Excellent => "#10b981",
            Self::Strong => "#22c55e",
            Self::Moderate => "#eab308",
            Self::Weak => "#f97316",
            Self::HighRisk => "#ef4444",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Strong application with minimal risk factors",
            Self::Strong => "Good application with minor considerations",
            Self::Moderate => "Viable application but requires attention to risk factors",
            Self::Weak => "Significant challenges - professional advice essential",
            Self::HighRisk => "Application likely to be declined - reconsider pathway",
        }
    }

    pub const fn band(self) -> RiskBand {
        RiskBand {
            label: self.label(),
            color_token: self.color_token(),
            description: self.description(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBand {
    pub label: &'static str,
    pub color_token: &'static str,
    pub description: &'static str,
}

pub fn band_for(score: u8) -> RiskBand {
    RiskLevel::from_score(score).band()
}
