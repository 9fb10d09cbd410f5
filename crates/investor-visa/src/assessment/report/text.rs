use std::fmt;

use super::AssessmentReport;
use crate::config::ReportConfig;

/// Plain-text rendition used as the e-mail fallback body.
pub struct TextReport<'a> {
    report: &'a AssessmentReport,
    config: &'a ReportConfig,
}

impl<'a> TextReport<'a> {
    pub fn new(report: &'a AssessmentReport, config: &'a ReportConfig) -> Self {
        Self { report, config }
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }

    writeln!(f)?;
    writeln!(f, "{title}:")?;
    for item in items {
        writeln!(f, "• {item}")?;
    }
    Ok(())
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detailed = &self.report.detailed;

        writeln!(f, "NZ BUSINESS INVESTOR VISA ASSESSMENT REPORT")?;
        writeln!(f)?;
        writeln!(f, "Your Assessment Score: {}/100", detailed.risk_score())?;
        writeln!(f, "Rating: {}", self.report.risk_level().label())?;
        writeln!(f)?;
        writeln!(f, "Recommended Pathway: {}", detailed.pathway.track())?;
        if let Some(line) = self.report.gateway_line() {
            writeln!(f, "{line}")?;
        }

        write_section(f, "STRENGTHS", &detailed.strengths)?;
        write_section(f, "CONCERNS", &detailed.concerns)?;
        write_section(f, "RECOMMENDATIONS", &detailed.recommendations)?;

        writeln!(f)?;
        writeln!(f, "DISCLAIMER:")?;
        writeln!(f, "{}", self.config.disclaimer_full)?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f, "{}", self.config.firm_name)?;
        writeln!(f, "{}", self.config.support_email)?;
        write!(f, "Assessment completed: {}", self.report.completed_label())
    }
}
