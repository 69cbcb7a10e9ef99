use crate::domain::reporting::{Anomaly, AnomalyStatus, Confidence, Severity};

/// True iff the anomaly is high severity, carries a high-confidence impact
/// estimate, and is not resolved. A missing impact is never critical.
pub fn is_critical(anomaly: &Anomaly) -> bool {
    anomaly.severity == Severity::High
        && anomaly
            .impact
            .as_ref()
            .is_some_and(|impact| impact.confidence == Confidence::High)
        && anomaly.status != AnomalyStatus::Resolved
}
