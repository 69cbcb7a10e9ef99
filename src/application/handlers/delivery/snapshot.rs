//! Loads the entities a weekly brief is composed from.

use std::sync::Arc;

use crate::domain::decision::Decision;
use crate::domain::delivery::BriefSnapshot;
use crate::domain::foundation::DomainError;
use crate::domain::reporting::{Anomaly, Kpi, Summary};
use crate::ports::EntityStore;

/// Reads summaries, KPIs, anomalies and decisions concurrently.
#[derive(Clone)]
pub struct BriefSnapshotLoader {
    summaries: Arc<dyn EntityStore<Summary>>,
    kpis: Arc<dyn EntityStore<Kpi>>,
    anomalies: Arc<dyn EntityStore<Anomaly>>,
    decisions: Arc<dyn EntityStore<Decision>>,
}

impl BriefSnapshotLoader {
    pub fn new(
        summaries: Arc<dyn EntityStore<Summary>>,
        kpis: Arc<dyn EntityStore<Kpi>>,
        anomalies: Arc<dyn EntityStore<Anomaly>>,
        decisions: Arc<dyn EntityStore<Decision>>,
    ) -> Self {
        Self {
            summaries,
            kpis,
            anomalies,
            decisions,
        }
    }

    /// Snapshot built around the most recently created summary.
    pub async fn load(&self) -> Result<BriefSnapshot, DomainError> {
        let (summaries, kpis, anomalies, decisions) = tokio::try_join!(
            self.summaries.list(),
            self.kpis.list(),
            self.anomalies.list(),
            self.decisions.list(),
        )?;

        Ok(BriefSnapshot {
            summary: Summary::latest(&summaries).cloned(),
            kpis,
            anomalies,
            decisions,
        })
    }
}
