//! Weekly exec brief email composition.
//!
//! The selection (which KPIs, alerts and decisions appear) is computed once
//! in [`BriefSelection`] and rendered twice, as HTML and as plain text, so
//! both bodies always list the same items in the same order.

use super::format::{
    change_colour, escape_html, format_change, format_kpi_value, format_revenue_range,
};
use crate::domain::decision::{Decision, DecisionStatus};
use crate::domain::reporting::{Anomaly, Kpi, Severity, Summary};

pub const MAX_KPIS: usize = 4;
pub const MAX_ALERTS: usize = 3;
pub const MAX_DECISIONS: usize = 3;

/// Period label used when there is no summary.
pub const DEFAULT_PERIOD: &str = "This Week";

/// Entities the brief is composed from.
#[derive(Debug, Clone, Default)]
pub struct BriefSnapshot {
    pub summary: Option<Summary>,
    pub kpis: Vec<Kpi>,
    pub anomalies: Vec<Anomaly>,
    pub decisions: Vec<Decision>,
}

/// Items chosen for the brief, in display order.
#[derive(Debug)]
pub struct BriefSelection<'a> {
    pub period: &'a str,
    pub ai_insight: Option<&'a str>,
    pub kpis: Vec<&'a Kpi>,
    pub alerts: Vec<&'a Anomaly>,
    pub decisions: Vec<&'a Decision>,
}

impl<'a> BriefSelection<'a> {
    /// Top KPIs in list order, unresolved anomalies, accepted or done decisions.
    pub fn select(snapshot: &'a BriefSnapshot) -> Self {
        Self {
            period: snapshot
                .summary
                .as_ref()
                .map(|s| s.period.as_str())
                .unwrap_or(DEFAULT_PERIOD),
            ai_insight: snapshot
                .summary
                .as_ref()
                .map(|s| s.ai_insight.as_str())
                .filter(|s| !s.trim().is_empty()),
            kpis: snapshot.kpis.iter().take(MAX_KPIS).collect(),
            alerts: snapshot
                .anomalies
                .iter()
                .filter(|a| !a.is_resolved())
                .take(MAX_ALERTS)
                .collect(),
            decisions: snapshot
                .decisions
                .iter()
                .filter(|d| d.status().is_acted_upon())
                .take(MAX_DECISIONS)
                .collect(),
        }
    }
}

/// Composed email content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyBrief {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Renders weekly briefs that link back to the dashboard.
#[derive(Debug, Clone)]
pub struct WeeklyBriefComposer {
    app_url: String,
}

impl WeeklyBriefComposer {
    pub fn new(app_url: impl Into<String>) -> Self {
        Self {
            app_url: app_url.into(),
        }
    }

    pub fn compose(&self, snapshot: &BriefSnapshot) -> WeeklyBrief {
        let selection = BriefSelection::select(snapshot);
        WeeklyBrief {
            subject: format!("Weekly Exec Brief - {}", selection.period),
            html: self.render_html(&selection),
            text: self.render_text(&selection),
        }
    }

    fn render_html(&self, sel: &BriefSelection<'_>) -> String {
        let mut html = String::with_capacity(4096);
        html.push_str(concat!(
            "<!DOCTYPE html>\n<html>\n<head>\n",
            "  <meta charset=\"utf-8\">\n",
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            "</head>\n",
            "<body style=\"margin: 0; padding: 0; background: #0f172a; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;\">\n",
            "  <div style=\"max-width: 600px; margin: 0 auto; padding: 24px;\">\n",
        ));

        html.push_str(&format!(
            concat!(
                "    <div style=\"text-align: center; margin-bottom: 32px;\">\n",
                "      <h1 style=\"color: #e0f2fe; margin: 0; font-size: 24px;\">Weekly Exec Brief</h1>\n",
                "      <p style=\"color: #64748b; margin: 8px 0 0 0;\">{}</p>\n",
                "    </div>\n",
            ),
            escape_html(sel.period)
        ));

        if let Some(insight) = sel.ai_insight {
            html.push_str(&format!(
                concat!(
                    "    <div style=\"background: #1e3a5f; border: 1px solid #334155; border-radius: 12px; padding: 16px; margin-bottom: 24px;\">\n",
                    "      <p style=\"color: #94a3b8; margin: 0 0 8px 0; font-size: 12px; text-transform: uppercase;\">AI Insight</p>\n",
                    "      <p style=\"color: #e0f2fe; margin: 0; line-height: 1.5;\">{}</p>\n",
                    "    </div>\n",
                ),
                escape_html(insight)
            ));
        }

        html.push_str(concat!(
            "    <div style=\"background: #1e293b; border-radius: 12px; padding: 16px; margin-bottom: 24px;\">\n",
            "      <h2 style=\"color: #e0f2fe; margin: 0 0 16px 0; font-size: 16px;\">Key Metrics</h2>\n",
            "      <table style=\"width: 100%; border-collapse: collapse; color: #e0f2fe;\">\n",
        ));
        for kpi in &sel.kpis {
            html.push_str(&format!(
                concat!(
                    "        <tr>\n",
                    "          <td style=\"padding: 12px; border-bottom: 1px solid #333;\"><strong>{short}</strong><br/>",
                    "<span style=\"color: #888; font-size: 12px;\">{name}</span></td>\n",
                    "          <td style=\"padding: 12px; border-bottom: 1px solid #333; text-align: right;\">",
                    "<span style=\"font-size: 18px; font-weight: bold;\">{value}</span><br/>",
                    "<span style=\"color: {colour}; font-size: 12px;\">{change}</span></td>\n",
                    "        </tr>\n",
                ),
                short = escape_html(&kpi.short_name),
                name = escape_html(&kpi.name),
                value = escape_html(&format_kpi_value(kpi)),
                colour = change_colour(kpi.direction()),
                change = format_change(kpi.change),
            ));
        }
        html.push_str("      </table>\n    </div>\n");

        if !sel.alerts.is_empty() {
            html.push_str(concat!(
                "    <div style=\"margin-bottom: 24px;\">\n",
                "      <h2 style=\"color: #e0f2fe; margin: 0 0 12px 0; font-size: 16px;\">⚠️ Active Alerts</h2>\n",
            ));
            for alert in &sel.alerts {
                let (background, accent) = severity_palette(alert.severity);
                let at_risk = alert
                    .impact
                    .as_ref()
                    .map(|impact| {
                        format!(
                            "<br/><span style=\"color: #888; font-size: 12px;\">{} at risk</span>",
                            format_revenue_range(&impact.revenue_at_risk)
                        )
                    })
                    .unwrap_or_default();
                html.push_str(&format!(
                    concat!(
                        "      <div style=\"background: {}; padding: 12px; border-radius: 8px; margin-bottom: 8px;\">",
                        "<strong style=\"color: {};\">{}</strong>{}</div>\n",
                    ),
                    background,
                    accent,
                    escape_html(&alert.title),
                    at_risk
                ));
            }
            html.push_str("    </div>\n");
        }

        if !sel.decisions.is_empty() {
            html.push_str(concat!(
                "    <div style=\"margin-bottom: 24px;\">\n",
                "      <h2 style=\"color: #e0f2fe; margin: 0 0 12px 0; font-size: 16px;\">📋 Decisions This Week</h2>\n",
            ));
            for decision in &sel.decisions {
                let colour = if decision.status() == DecisionStatus::Done {
                    "#10b981"
                } else {
                    "#3b82f6"
                };
                html.push_str(&format!(
                    concat!(
                        "      <div style=\"background: #1e3a5f; padding: 12px; border-radius: 8px; margin-bottom: 8px;\">",
                        "<span style=\"color: {};\">{}</span><strong style=\"color: #e0f2fe;\"> {}</strong>",
                        "<br/><span style=\"color: #888; font-size: 12px;\">Owner: {}</span></div>\n",
                    ),
                    colour,
                    decision_glyph(decision.status()),
                    escape_html(decision.title()),
                    escape_html(decision.owner())
                ));
            }
            html.push_str("    </div>\n");
        }

        html.push_str(&format!(
            concat!(
                "    <div style=\"text-align: center; border-top: 1px solid #334155; padding-top: 24px; margin-top: 32px;\">\n",
                "      <a href=\"{}\" style=\"display: inline-block; background: #3b82f6; color: white; text-decoration: none; padding: 12px 24px; border-radius: 8px;\">View Dashboard</a>\n",
                "      <p style=\"color: #64748b; margin: 16px 0 0 0; font-size: 12px;\">OpsRep • Your AI Operations Assistant</p>\n",
                "    </div>\n",
                "  </div>\n</body>\n</html>\n",
            ),
            escape_html(&self.app_url)
        ));
        html
    }

    fn render_text(&self, sel: &BriefSelection<'_>) -> String {
        let mut sections = vec![format!("Weekly Exec Brief - {}", sel.period)];

        if let Some(insight) = sel.ai_insight {
            sections.push(format!("AI INSIGHT: {}", insight));
        }

        let metrics: Vec<String> = sel
            .kpis
            .iter()
            .map(|k| {
                format!(
                    "• {}: {} ({})",
                    k.short_name,
                    format_kpi_value(k),
                    format_change(k.change)
                )
            })
            .collect();
        sections.push(format!("KEY METRICS:\n{}", metrics.join("\n")));

        if !sel.alerts.is_empty() {
            let alerts: Vec<String> = sel
                .alerts
                .iter()
                .map(|a| match &a.impact {
                    Some(impact) => format!(
                        "• {} ({} at risk)",
                        a.title,
                        format_revenue_range(&impact.revenue_at_risk)
                    ),
                    None => format!("• {}", a.title),
                })
                .collect();
            sections.push(format!("ACTIVE ALERTS:\n{}", alerts.join("\n")));
        }

        if !sel.decisions.is_empty() {
            let decisions: Vec<String> = sel
                .decisions
                .iter()
                .map(|d| {
                    format!(
                        "• {} {} ({}) - Owner: {}",
                        decision_glyph(d.status()),
                        d.title(),
                        d.status(),
                        d.owner()
                    )
                })
                .collect();
            sections.push(format!("DECISIONS:\n{}", decisions.join("\n")));
        }

        sections.push(format!("View dashboard: {}", self.app_url));
        sections.join("\n\n")
    }
}

fn severity_palette(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::High => ("#7f1d1d", "#fca5a5"),
        Severity::Medium => ("#78350f", "#fcd34d"),
        Severity::Low => ("#1e3a5f", "#93c5fd"),
    }
}

fn decision_glyph(status: DecisionStatus) -> &'static str {
    if status == DecisionStatus::Done {
        "✓"
    } else {
        "→"
    }
}
