use crate::observability::ObservabilityState;
use crate::security::auth::Authenticator;
use crate::services::chat::ChatService;
use std::sync::Arc;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Chat service: reply selection and history persistence
    pub chat_service: Arc<dyn ChatService>,
    /// Authenticator resolving bearer tokens to a user id
    pub authenticator: Arc<dyn Authenticator>,
    /// Metrics and health state
    pub observability: Arc<ObservabilityState>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("chat_service", &"Arc<dyn ChatService>")
            .field("authenticator", &self.authenticator.authenticator_type())
            .field("observability", &"Arc<ObservabilityState>")
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        chat_service: Box<dyn ChatService>,
        authenticator: Box<dyn Authenticator>,
        observability: Arc<ObservabilityState>,
    ) -> Self {
        Self {
            chat_service: Arc::from(chat_service),
            authenticator: Arc::from(authenticator),
            observability,
        }
    }
}
