//! Demo data for the in-memory stores.

use serde::Deserialize;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::reporting::{Anomaly, Integration, Kpi, QaExchange, Summary, UserProfile};

const SEED_JSON: &str = include_str!("seed.json");

/// Everything the dashboard shows on a fresh start.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub user: UserProfile,
    pub integrations: Vec<Integration>,
    pub summaries: Vec<Summary>,
    pub kpis: Vec<Kpi>,
    pub anomalies: Vec<Anomaly>,
    pub questions: Vec<QaExchange>,
    pub decisions: Vec<Decision>,
}

impl SeedData {
    /// Parses the bundled fixtures and checks the invariants serde cannot.
    pub fn load() -> Result<Self, DomainError> {
        let seed: SeedData = serde_json::from_str(SEED_JSON).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Invalid seed data: {}", e))
        })?;

        for decision in &seed.decisions {
            decision.check_lifecycle()?;
            decision.impact().validate()?;
        }
        for impact in seed.anomalies.iter().filter_map(|a| a.impact.as_ref()) {
            impact.validate()?;
        }

        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::DecisionStatus;
    use crate::domain::delivery::is_critical;
    use crate::domain::reporting::{ChangeType, KpiFormat};

    #[test]
    fn bundled_seed_loads() {
        let seed = SeedData::load().unwrap();
        assert_eq!(seed.user.name, "Sarah Chen");
        assert_eq!(seed.integrations.len(), 6);
        assert_eq!(seed.summaries.len(), 2);
        assert_eq!(seed.kpis.len(), 8);
        assert_eq!(seed.anomalies.len(), 3);
        assert_eq!(seed.questions.len(), 3);
        assert_eq!(seed.decisions.len(), 4);
    }

    #[test]
    fn exactly_one_seeded_anomaly_is_critical() {
        let seed = SeedData::load().unwrap();
        let critical: Vec<_> = seed
            .anomalies
            .iter()
            .filter(|a| is_critical(a))
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(critical, vec!["anom_001"]);
    }

    #[test]
    fn legacy_format_names_are_accepted() {
        let seed = SeedData::load().unwrap();
        let churn = seed.kpis.iter().find(|k| k.id.as_str() == "kpi_churn").unwrap();
        assert_eq!(churn.format, KpiFormat::Percent);
        let tickets = seed.kpis.iter().find(|k| k.id.as_str() == "kpi_tickets").unwrap();
        assert_eq!(tickets.change_type, ChangeType::Negative);
        assert!(tickets.change > 0.0);
    }

    #[test]
    fn seeded_decisions_cover_every_status() {
        let seed = SeedData::load().unwrap();
        let statuses: Vec<_> = seed.decisions.iter().map(|d| d.status()).collect();
        assert_eq!(
            statuses,
            vec![
                DecisionStatus::Accepted,
                DecisionStatus::Suggested,
                DecisionStatus::Done,
                DecisionStatus::Dismissed
            ]
        );
    }

    #[test]
    fn integration_counters_are_flattened() {
        let seed = SeedData::load().unwrap();
        let slack = &seed.integrations[0];
        assert_eq!(slack.metrics.get("messagesIndexed"), Some(&4523));
        assert_eq!(slack.metrics.get("channelsConnected"), Some(&12));
    }
}
