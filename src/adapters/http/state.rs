//! Shared application state for the HTTP surface.

use std::sync::Arc;

use crate::application::{
    AskQuestionHandler, BriefSnapshotLoader, CreateDecisionHandler, GetAnomalyHandler,
    GetSummaryHandler, GetUserHandler, ListAnomaliesHandler, ListAnomalyDecisionsHandler,
    ListCriticalAlertsHandler, ListDecisionsHandler, ListIntegrationsHandler, ListKpisHandler,
    ListQuestionsHandler, ListSummariesHandler, PreviewWeeklyBriefHandler, SendSlackAlertHandler,
    SendWeeklyBriefHandler, UpdateDecisionHandler, UpdateIntegrationHandler,
    WeeklyChangelogHandler,
};
use crate::adapters::delivery::{LoggingEmailSender, LoggingSlackNotifier};
use crate::adapters::fixtures::SeedData;
use crate::adapters::memory::InMemoryStore;
use crate::adapters::qa::CannedAnswerer;
use crate::config::{AppConfig, DeliveryConfig, FeatureFlags};
use crate::domain::decision::Decision;
use crate::domain::foundation::DomainError;
use crate::domain::reporting::{Anomaly, Integration, Kpi, QaExchange, Summary, UserProfile};
use crate::ports::{EmailSender, EntityStore, QuestionAnswerer, SlackNotifier};

use super::error::ApiError;

/// Entity stores backing every endpoint.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn EntityStore<UserProfile>>,
    pub integrations: Arc<dyn EntityStore<Integration>>,
    pub summaries: Arc<dyn EntityStore<Summary>>,
    pub kpis: Arc<dyn EntityStore<Kpi>>,
    pub anomalies: Arc<dyn EntityStore<Anomaly>>,
    pub questions: Arc<dyn EntityStore<QaExchange>>,
    pub decisions: Arc<dyn EntityStore<Decision>>,
}

/// Outbound collaborators.
#[derive(Clone)]
pub struct Services {
    pub answerer: Arc<dyn QuestionAnswerer>,
    pub email_sender: Arc<dyn EmailSender>,
    pub slack_notifier: Arc<dyn SlackNotifier>,
}

/// Shared application state. Handlers are built per request from the ports.
#[derive(Clone)]
pub struct AppState {
    pub stores: Stores,
    pub services: Services,
    pub delivery: Arc<DeliveryConfig>,
    pub features: FeatureFlags,
}

impl AppState {
    pub fn new(stores: Stores, services: Services, delivery: DeliveryConfig, features: FeatureFlags) -> Self {
        Self {
            stores,
            services,
            delivery: Arc::new(delivery),
            features,
        }
    }

    /// State backed by in-memory stores and the logging transports.
    ///
    /// Stores are seeded from the bundled fixtures when
    /// `features.use_mock_data` is on and start empty otherwise.
    pub fn in_memory(config: &AppConfig) -> Result<Self, DomainError> {
        let stores = if config.features.use_mock_data {
            let seed = SeedData::load()?;
            Stores {
                users: Arc::new(InMemoryStore::with_entities(vec![seed.user])),
                integrations: Arc::new(InMemoryStore::with_entities(seed.integrations)),
                summaries: Arc::new(InMemoryStore::with_entities(seed.summaries)),
                kpis: Arc::new(InMemoryStore::with_entities(seed.kpis)),
                anomalies: Arc::new(InMemoryStore::with_entities(seed.anomalies)),
                questions: Arc::new(InMemoryStore::with_entities(seed.questions)),
                decisions: Arc::new(InMemoryStore::with_entities(seed.decisions)),
            }
        } else {
            Stores {
                users: Arc::new(InMemoryStore::new()),
                integrations: Arc::new(InMemoryStore::new()),
                summaries: Arc::new(InMemoryStore::new()),
                kpis: Arc::new(InMemoryStore::new()),
                anomalies: Arc::new(InMemoryStore::new()),
                questions: Arc::new(InMemoryStore::new()),
                decisions: Arc::new(InMemoryStore::new()),
            }
        };

        let services = Services {
            answerer: Arc::new(CannedAnswerer::new()),
            email_sender: Arc::new(LoggingEmailSender::new(&config.email)),
            slack_notifier: Arc::new(LoggingSlackNotifier::new(&config.slack)),
        };

        Ok(Self::new(
            stores,
            services,
            config.delivery.clone(),
            config.features.clone(),
        ))
    }

    /// Converts a module error, applying the verbose-errors policy.
    pub fn fail(&self, error: impl Into<ApiError>) -> ApiError {
        error.into().redact(self.features.verbose_errors)
    }

    // Decisions

    pub fn create_decision_handler(&self) -> CreateDecisionHandler {
        CreateDecisionHandler::new(self.stores.decisions.clone())
    }

    pub fn update_decision_handler(&self) -> UpdateDecisionHandler {
        UpdateDecisionHandler::new(self.stores.decisions.clone())
    }

    pub fn list_decisions_handler(&self) -> ListDecisionsHandler {
        ListDecisionsHandler::new(self.stores.decisions.clone())
    }

    pub fn list_anomaly_decisions_handler(&self) -> ListAnomalyDecisionsHandler {
        ListAnomalyDecisionsHandler::new(self.stores.decisions.clone())
    }

    // Reporting

    pub fn get_user_handler(&self) -> GetUserHandler {
        GetUserHandler::new(self.stores.users.clone())
    }

    pub fn list_integrations_handler(&self) -> ListIntegrationsHandler {
        ListIntegrationsHandler::new(self.stores.integrations.clone())
    }

    pub fn update_integration_handler(&self) -> UpdateIntegrationHandler {
        UpdateIntegrationHandler::new(self.stores.integrations.clone())
    }

    pub fn list_summaries_handler(&self) -> ListSummariesHandler {
        ListSummariesHandler::new(self.stores.summaries.clone())
    }

    pub fn get_summary_handler(&self) -> GetSummaryHandler {
        GetSummaryHandler::new(self.stores.summaries.clone())
    }

    pub fn list_kpis_handler(&self) -> ListKpisHandler {
        ListKpisHandler::new(self.stores.kpis.clone())
    }

    pub fn list_anomalies_handler(&self) -> ListAnomaliesHandler {
        ListAnomaliesHandler::new(self.stores.anomalies.clone())
    }

    pub fn get_anomaly_handler(&self) -> GetAnomalyHandler {
        GetAnomalyHandler::new(self.stores.anomalies.clone())
    }

    pub fn weekly_changelog_handler(&self) -> WeeklyChangelogHandler {
        WeeklyChangelogHandler::new(
            self.stores.summaries.clone(),
            self.stores.decisions.clone(),
            self.stores.anomalies.clone(),
            self.stores.kpis.clone(),
        )
    }

    // Q&A

    pub fn ask_question_handler(&self) -> AskQuestionHandler {
        AskQuestionHandler::new(self.stores.questions.clone(), self.services.answerer.clone())
    }

    pub fn list_questions_handler(&self) -> ListQuestionsHandler {
        ListQuestionsHandler::new(self.stores.questions.clone())
    }

    // Delivery

    fn snapshot_loader(&self) -> BriefSnapshotLoader {
        BriefSnapshotLoader::new(
            self.stores.summaries.clone(),
            self.stores.kpis.clone(),
            self.stores.anomalies.clone(),
            self.stores.decisions.clone(),
        )
    }

    pub fn send_weekly_brief_handler(&self) -> SendWeeklyBriefHandler {
        SendWeeklyBriefHandler::new(
            self.snapshot_loader(),
            self.services.email_sender.clone(),
            &self.delivery,
        )
    }

    pub fn preview_weekly_brief_handler(&self) -> PreviewWeeklyBriefHandler {
        PreviewWeeklyBriefHandler::new(self.snapshot_loader(), &self.delivery)
    }

    pub fn send_slack_alert_handler(&self) -> SendSlackAlertHandler {
        SendSlackAlertHandler::new(
            self.stores.anomalies.clone(),
            self.services.slack_notifier.clone(),
            &self.delivery,
        )
    }

    pub fn list_critical_alerts_handler(&self) -> ListCriticalAlertsHandler {
        ListCriticalAlertsHandler::new(self.stores.anomalies.clone())
    }
}
