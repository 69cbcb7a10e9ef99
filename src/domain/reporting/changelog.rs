//! Weekly changelog: what moved this week, newest first.

use serde::Serialize;

use super::{Anomaly, Kpi, Summary};
use crate::domain::decision::{Decision, DecisionStatus};
use crate::domain::foundation::Timestamp;

/// KPIs whose absolute change is at least this many percent are reported.
pub const KPI_CHANGE_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangelogEventKind {
    Decision,
    Anomaly,
    Kpi,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogEvent {
    pub id: String,
    pub date: Timestamp,
    #[serde(rename = "type")]
    pub kind: ChangelogEventKind,
    pub title: String,
    pub description: String,
    pub status: String,
    pub related_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyChangelog {
    pub period: String,
    pub date_range: String,
    pub generated_at: Timestamp,
    pub events: Vec<ChangelogEvent>,
    pub summary: String,
}

impl WeeklyChangelog {
    /// Builds the changelog from the latest summary and the current entities.
    pub fn build(
        summary: Option<&Summary>,
        decisions: &[Decision],
        anomalies: &[Anomaly],
        kpis: &[Kpi],
        now: Timestamp,
    ) -> Self {
        let mut events = Vec::new();

        let decision_events: Vec<_> = decisions.iter().filter_map(decision_event).collect();
        let decision_count = decision_events.len();
        events.extend(decision_events);

        for anomaly in anomalies {
            events.extend(anomaly_events(anomaly));
        }

        let kpi_date = summary.map(|s| s.created_at).unwrap_or(now);
        let kpi_events: Vec<_> = kpis
            .iter()
            .filter(|k| k.change.abs() >= KPI_CHANGE_THRESHOLD)
            .map(|k| kpi_event(k, kpi_date))
            .collect();
        let kpi_count = kpi_events.len();
        events.extend(kpi_events);

        // Stable sort keeps insertion order for equal dates.
        events.sort_by(|a, b| b.date.cmp(&a.date));

        let summary_line = format!(
            "{} decision update{}, {} anomal{}, {} significant KPI move{}",
            decision_count,
            plural(decision_count, "", "s"),
            anomalies.len(),
            plural(anomalies.len(), "y", "ies"),
            kpi_count,
            plural(kpi_count, "", "s"),
        );

        Self {
            period: summary
                .map(|s| s.period.clone())
                .unwrap_or_else(|| "This Week".to_string()),
            date_range: summary.map(|s| s.date_range.clone()).unwrap_or_default(),
            generated_at: now,
            events,
            summary: summary_line,
        }
    }
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

fn decision_event(decision: &Decision) -> Option<ChangelogEvent> {
    let (date, verb) = match decision.status() {
        DecisionStatus::Suggested => (decision.suggested_at(), "suggested"),
        DecisionStatus::Accepted => (decision.accepted_at()?, "accepted"),
        DecisionStatus::Done => (decision.completed_at()?, "completed"),
        DecisionStatus::Dismissed => return None,
    };
    Some(ChangelogEvent {
        id: format!("evt_{}", decision.id()),
        date,
        kind: ChangelogEventKind::Decision,
        title: decision.title().to_string(),
        description: format!("Decision {} (owner: {})", verb, decision.owner()),
        status: decision.status().to_string(),
        related_id: decision.id().to_string(),
    })
}

fn anomaly_events(anomaly: &Anomaly) -> Vec<ChangelogEvent> {
    let mut events = vec![ChangelogEvent {
        id: format!("evt_{}_detected", anomaly.id),
        date: anomaly.detected_at,
        kind: ChangelogEventKind::Anomaly,
        title: anomaly.title.clone(),
        description: anomaly.description.clone(),
        status: "detected".to_string(),
        related_id: anomaly.id.to_string(),
    }];
    if let (true, Some(resolved_at)) = (anomaly.is_resolved(), anomaly.resolved_at) {
        events.push(ChangelogEvent {
            id: format!("evt_{}_resolved", anomaly.id),
            date: resolved_at,
            kind: ChangelogEventKind::Anomaly,
            title: format!("Resolved: {}", anomaly.title),
            description: anomaly.resolution.clone().unwrap_or_default(),
            status: "resolved".to_string(),
            related_id: anomaly.id.to_string(),
        });
    }
    events
}

fn kpi_event(kpi: &Kpi, date: Timestamp) -> ChangelogEvent {
    let direction = if kpi.change > 0.0 { "up" } else { "down" };
    ChangelogEvent {
        id: format!("evt_{}", kpi.id),
        date,
        kind: ChangelogEventKind::Kpi,
        title: format!("{} {} {:.1}%", kpi.short_name, direction, kpi.change.abs()),
        description: kpi.explanation.clone(),
        status: direction.to_string(),
        related_id: kpi.id.to_string(),
    }
}
