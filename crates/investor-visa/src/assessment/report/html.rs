use std::fmt;

use super::AssessmentReport;
use crate::config::ReportConfig;

const STYLES: &str = r#"    body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px; }
    .header { background: #0369a1; color: white; padding: 20px; text-align: center; border-radius: 8px 8px 0 0; }
    .content { background: #ffffff; padding: 30px; border: 1px solid #e5e7eb; }
    .score-box { background: #f9fafb; padding: 20px; text-align: center; border-radius: 8px; margin: 20px 0; }
    .score { font-size: 48px; font-weight: bold; }
    .section { margin: 25px 0; }
    .section-title { font-size: 18px; font-weight: bold; margin-bottom: 10px; color: #111827; }
    .item { margin: 8px 0; padding-left: 20px; }
    .strength { color: #10b981; }
    .concern { color: #f97316; }
    .recommendation { color: #3b82f6; }
    .footer { background: #f9fafb; padding: 20px; text-align: center; font-size: 12px; color: #6b7280; border-radius: 0 0 8px 8px; }
    .disclaimer { background: #fef3c7; border-left: 4px solid #f59e0b; padding: 15px; margin: 20px 0; font-size: 13px; }
"#;

/// HTML rendition of the assessment report for e-mail clients.
pub struct HtmlReport<'a> {
    report: &'a AssessmentReport,
    config: &'a ReportConfig,
}

impl<'a> HtmlReport<'a> {
    pub fn new(report: &'a AssessmentReport, config: &'a ReportConfig) -> Self {
        Self { report, config }
    }
}

/// Escapes text for element content and double-quoted attributes.
pub(crate) struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    class: &str,
    items: &[String],
) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }

    writeln!(f, "    <div class=\"section\">")?;
    writeln!(f, "      <div class=\"section-title\">{title}</div>")?;
    for item in items {
        writeln!(
            f,
            "      <div class=\"item {class}\">• {}</div>",
            Escaped(item)
        )?;
    }
    writeln!(f, "    </div>")
}

impl fmt::Display for HtmlReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detailed = &self.report.detailed;
        let level = self.report.risk_level();
        let support = Escaped(&self.config.support_email);
        let firm = Escaped(&self.config.firm_name);

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html>")?;
        writeln!(f, "<head>")?;
        writeln!(f, "  <meta charset=\"utf-8\">")?;
        writeln!(
            f,
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(
            f,
            "  <title>Your NZ Business Investor Visa Assessment</title>"
        )?;
        writeln!(f, "  <style>")?;
        f.write_str(STYLES)?;
        writeln!(f, "  </style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "  <div class=\"header\">")?;
        writeln!(f, "    <h1>NZ Business Investor Visa Assessment</h1>")?;
        writeln!(f, "    <p>Your Personalized Assessment Report</p>")?;
        writeln!(f, "  </div>")?;

        writeln!(f, "  <div class=\"content\">")?;
        writeln!(f, "    <p>Dear Applicant,</p>")?;
        writeln!(
            f,
            "    <p>Thank you for completing the Business Investor Visa assessment. Here are your results:</p>"
        )?;
        writeln!(f, "    <div class=\"score-box\">")?;
        writeln!(
            f,
            "      <div class=\"score\" style=\"color: {};\">{}/100</div>",
            level.accent_hex(),
            detailed.risk_score()
        )?;
        writeln!(
            f,
            "      <p style=\"font-size: 18px; margin: 10px 0;\">{}</p>",
            level.label()
        )?;
        writeln!(
            f,
            "      <p style=\"color: #6b7280;\">{}</p>",
            detailed.pathway.summary()
        )?;
        if let Some(line) = self.report.gateway_line() {
            writeln!(f, "      <p style=\"color: #6b7280;\">{}</p>", Escaped(&line))?;
        }
        writeln!(f, "    </div>")?;

        write_section(f, "✓ Your Strengths", "strength", &detailed.strengths)?;
        write_section(f, "⚠ Areas of Concern", "concern", &detailed.concerns)?;
        write_section(
            f,
            "→ Our Recommendations",
            "recommendation",
            &detailed.recommendations,
        )?;

        writeln!(
            f,
            "    <div class=\"disclaimer\"><strong>Important Disclaimer:</strong> {}</div>",
            Escaped(&self.config.disclaimer_full)
        )?;
        writeln!(
            f,
            "    <p style=\"margin-top: 30px;\"><strong>Next Steps:</strong><br>\
             • Review this assessment carefully<br>\
             • Prepare documentation based on recommendations<br>\
             • Contact us for professional consultation</p>"
        )?;
        writeln!(
            f,
            "    <p style=\"text-align: center; margin-top: 30px;\"><a href=\"mailto:{support}\" \
             style=\"background: #0369a1; color: white; padding: 12px 30px; text-decoration: none; \
             border-radius: 6px; display: inline-block;\">Contact Us for Consultation</a></p>"
        )?;
        writeln!(f, "  </div>")?;

        writeln!(f, "  <div class=\"footer\">")?;
        writeln!(f, "    <p><strong>{firm}</strong></p>")?;
        writeln!(f, "    <p>{support}</p>")?;
        writeln!(
            f,
            "    <p style=\"margin-top: 15px;\">Assessment completed: {}</p>",
            self.report.completed_label()
        )?;
        writeln!(
            f,
            "    <p style=\"margin-top: 15px; font-size: 11px;\">© {} {firm}. All rights reserved.</p>",
            self.report.completed_at.format("%Y")
        )?;
        writeln!(f, "  </div>")?;
        writeln!(f, "</body>")?;
        write!(f, "</html>")
    }
}
