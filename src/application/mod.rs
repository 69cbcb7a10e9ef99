//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (create/update/send) and queries (list/get/preview) each get
//! their own handler.

pub mod handlers;

pub use handlers::decision::{
    CreateDecisionCommand, CreateDecisionHandler, ListAnomalyDecisionsHandler,
    ListAnomalyDecisionsQuery, ListDecisionsHandler, ListDecisionsQuery, UpdateDecisionCommand,
    UpdateDecisionHandler,
};
pub use handlers::delivery::{
    BriefSnapshotLoader, ListCriticalAlertsHandler, PreviewWeeklyBriefHandler,
    SendSlackAlertCommand, SendSlackAlertHandler, SendWeeklyBriefCommand, SendWeeklyBriefHandler,
};
pub use handlers::questions::{AskQuestionCommand, AskQuestionHandler, ListQuestionsHandler};
pub use handlers::reporting::{
    GetAnomalyHandler, GetAnomalyQuery, GetSummaryHandler, GetSummaryQuery, GetUserHandler,
    ListAnomaliesHandler, ListAnomaliesQuery, ListIntegrationsHandler, ListKpisHandler,
    ListKpisQuery, ListSummariesHandler, ListSummariesQuery, UpdateIntegrationCommand,
    UpdateIntegrationHandler, WeeklyChangelogHandler,
};
