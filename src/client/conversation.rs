//! Conversation client.

use crate::auth::{AuthManager, BasicAuthManager};
use crate::config::ConversationConfig;
use crate::errors::{WatsonError, WatsonResult};
use crate::observability::{MetricsCollector, Tracer};
use crate::services::conversation::{MessageService, MessageServiceImpl};
use crate::services::dispatcher::{Dispatcher, CONVERSATION_SERVICE};
use crate::transport::{HttpTransport, ReqwestTransport};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use url::Url;

/// Trait defining the Conversation client interface
pub trait ConversationClient: Send + Sync {
    /// Get the message service
    fn messages(&self) -> Arc<dyn MessageService>;
}

/// Implementation of the Conversation client
pub struct ConversationClientImpl {
    config: Arc<ConversationConfig>,
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    dispatcher: Arc<Dispatcher>,
    message_service: OnceCell<Arc<dyn MessageService>>,
}

impl ConversationClientImpl {
    /// Create a new client from configuration
    pub fn new(config: ConversationConfig) -> WatsonResult<Self> {
        let transport =
            Arc::new(ReqwestTransport::new(config.timeout)?) as Arc<dyn HttpTransport>;

        let auth_manager = Arc::new(BasicAuthManager::with_client_name(
            config.username.clone(),
            config.password().clone(),
            config.client_name.clone(),
        )) as Arc<dyn AuthManager>;

        auth_manager
            .validate_credentials()
            .map_err(|e| WatsonError::Configuration {
                message: format!("Invalid credentials: {}", e),
            })?;

        Self::with_dependencies(config, transport, auth_manager)
    }

    /// Create a new client with custom transport and auth manager
    pub fn with_dependencies(
        config: ConversationConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> WatsonResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let dispatcher = Arc::new(Dispatcher::new(
            transport.clone(),
            auth_manager.clone(),
            base_url,
            CONVERSATION_SERVICE,
        ));

        Ok(Self {
            config: Arc::new(config),
            transport,
            auth_manager,
            dispatcher,
            message_service: OnceCell::new(),
        })
    }

    /// Replace the tracer and metrics collector used for every call
    pub fn with_observability(
        mut self,
        tracer: Arc<dyn Tracer>,
        metrics: Arc<dyn MetricsCollector>,
    ) -> Self {
        self.dispatcher = Arc::new(
            Dispatcher::new(
                self.transport.clone(),
                self.auth_manager.clone(),
                self.dispatcher.base_url().clone(),
                CONVERSATION_SERVICE,
            )
            .with_tracer(tracer)
            .with_metrics(metrics),
        );
        self.message_service = OnceCell::new();
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &ConversationConfig {
        &self.config
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        self.dispatcher.base_url()
    }
}

impl ConversationClient for ConversationClientImpl {
    fn messages(&self) -> Arc<dyn MessageService> {
        self.message_service
            .get_or_init(|| {
                Arc::new(MessageServiceImpl::with_dispatcher(self.dispatcher.clone()))
                    as Arc<dyn MessageService>
            })
            .clone()
    }
}
