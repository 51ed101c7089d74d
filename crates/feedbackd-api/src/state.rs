//! Application state wiring the services together.
//!
//! The core service is generic over the repository trait; AppState pins
//! it to the SQLite implementation. Initialized once at startup, before
//! the router accepts traffic.

use std::sync::Arc;

use feedbackd_core::auth::{AdminAuth, AdminCredentials};
use feedbackd_core::service::FeedbackService;
use feedbackd_infra::sqlite::feedback::SqliteFeedbackRepository;
use feedbackd_infra::sqlite::pool::DatabasePool;

use crate::config::ServerConfig;

/// Concrete type alias for the service generic pinned to the SQLite
/// repository.
pub type ConcreteFeedbackService = FeedbackService<SqliteFeedbackRepository>;

/// Shared application state used by all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub feedback_service: Arc<ConcreteFeedbackService>,
    pub auth: Arc<AdminAuth>,
}

impl AppState {
    /// Initialize the application state: connect to the database (which
    /// runs migrations), wire the service and auth gate.
    pub async fn init(config: &ServerConfig) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&config.data_dir).await?;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            config.data_dir.join("feedback.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let feedback_service = FeedbackService::new(SqliteFeedbackRepository::new(db_pool));
        let auth = AdminAuth::new(AdminCredentials {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
        });

        Ok(Self {
            feedback_service: Arc::new(feedback_service),
            auth: Arc::new(auth),
        })
    }
}
