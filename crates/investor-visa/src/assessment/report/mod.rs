mod html;
mod text;

pub use html::HtmlReport;
pub use text::TextReport;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::band::RiskLevel;
use super::gateway::GatewayResult;
use super::scoring::DetailedResult;
use crate::config::ReportConfig;

/// Everything a rendered report is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentReport {
    pub detailed: DetailedResult,
    pub gateway: Option<GatewayResult>,
    pub completed_at: DateTime<Utc>,
}

impl AssessmentReport {
    pub fn new(
        detailed: DetailedResult,
        gateway: Option<GatewayResult>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            detailed,
            gateway,
            completed_at,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.detailed.risk_score())
    }

    pub(crate) fn completed_label(&self) -> String {
        self.completed_at
            .format("%-d %B %Y, %H:%M UTC")
            .to_string()
    }

    pub(crate) fn gateway_line(&self) -> Option<String> {
        self.gateway.as_ref().map(|gateway| {
            format!(
                "Gateway check: {}/{} criteria met ({})",
                gateway.passed_checks,
                gateway.total_checks,
                gateway.status.label()
            )
        })
    }

    pub fn render_text(&self, config: &ReportConfig) -> String {
        TextReport::new(self, config).to_string()
    }

    pub fn render_html(&self, config: &ReportConfig) -> String {
        HtmlReport::new(self, config).to_string()
    }

    pub fn envelope(&self, to: &str, config: &ReportConfig) -> ReportEnvelope {
        ReportEnvelope {
            to: to.trim().to_string(),
            from: config.sender(),
            subject: config.subject.clone(),
            html: self.render_html(config),
            text: self.render_text(config),
        }
    }
}

/// Rendered report ready for a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEnvelope {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}
