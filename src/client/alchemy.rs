//! AlchemyLanguage client.

use crate::auth::{ApiKeyAuthManager, AuthManager};
use crate::config::AlchemyConfig;
use crate::errors::{WatsonError, WatsonResult};
use crate::observability::{MetricsCollector, Tracer};
use crate::services::concepts::{ConceptsService, ConceptsServiceImpl};
use crate::services::dispatcher::{Dispatcher, ALCHEMY_SERVICE};
use crate::services::documents::{DocumentsService, DocumentsServiceImpl};
use crate::services::entities::{EntitiesService, EntitiesServiceImpl};
use crate::services::keywords::{KeywordsService, KeywordsServiceImpl};
use crate::services::relations::{RelationsService, RelationsServiceImpl};
use crate::services::sentiment::{SentimentService, SentimentServiceImpl};
use crate::services::taxonomy::{TaxonomyService, TaxonomyServiceImpl};
use crate::transport::{HttpTransport, ReqwestTransport};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use url::Url;

/// Trait defining the AlchemyLanguage client interface
pub trait AlchemyLanguageClient: Send + Sync {
    /// Get the entities service
    fn entities(&self) -> Arc<dyn EntitiesService>;

    /// Get the keywords service
    fn keywords(&self) -> Arc<dyn KeywordsService>;

    /// Get the concepts service
    fn concepts(&self) -> Arc<dyn ConceptsService>;

    /// Get the sentiment service
    fn sentiment(&self) -> Arc<dyn SentimentService>;

    /// Get the taxonomy service
    fn taxonomy(&self) -> Arc<dyn TaxonomyService>;

    /// Get the relations service
    fn relations(&self) -> Arc<dyn RelationsService>;

    /// Get the documents service
    fn documents(&self) -> Arc<dyn DocumentsService>;
}

/// Implementation of the AlchemyLanguage client
pub struct AlchemyLanguageClientImpl {
    config: Arc<AlchemyConfig>,
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    dispatcher: Arc<Dispatcher>,

    // Lazily initialized services
    entities_service: OnceCell<Arc<dyn EntitiesService>>,
    keywords_service: OnceCell<Arc<dyn KeywordsService>>,
    concepts_service: OnceCell<Arc<dyn ConceptsService>>,
    sentiment_service: OnceCell<Arc<dyn SentimentService>>,
    taxonomy_service: OnceCell<Arc<dyn TaxonomyService>>,
    relations_service: OnceCell<Arc<dyn RelationsService>>,
    documents_service: OnceCell<Arc<dyn DocumentsService>>,
}

impl AlchemyLanguageClientImpl {
    /// Create a new client from configuration
    pub fn new(config: AlchemyConfig) -> WatsonResult<Self> {
        let transport =
            Arc::new(ReqwestTransport::new(config.timeout)?) as Arc<dyn HttpTransport>;

        let auth_manager = Arc::new(ApiKeyAuthManager::with_client_name(
            config.api_key().clone(),
            config.client_name.clone(),
        )) as Arc<dyn AuthManager>;

        auth_manager
            .validate_credentials()
            .map_err(|e| WatsonError::Configuration {
                message: format!("Invalid API key: {}", e),
            })?;

        Self::with_dependencies(config, transport, auth_manager)
    }

    /// Create a new client with custom transport and auth manager
    pub fn with_dependencies(
        config: AlchemyConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> WatsonResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let dispatcher = Arc::new(Dispatcher::new(
            transport.clone(),
            auth_manager.clone(),
            base_url,
            ALCHEMY_SERVICE,
        ));

        Ok(Self {
            config: Arc::new(config),
            transport,
            auth_manager,
            dispatcher,
            entities_service: OnceCell::new(),
            keywords_service: OnceCell::new(),
            concepts_service: OnceCell::new(),
            sentiment_service: OnceCell::new(),
            taxonomy_service: OnceCell::new(),
            relations_service: OnceCell::new(),
            documents_service: OnceCell::new(),
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
                ALCHEMY_SERVICE,
            )
            .with_tracer(tracer)
            .with_metrics(metrics),
        );
        self.reset_services();
        self
    }

    fn reset_services(&mut self) {
        self.entities_service = OnceCell::new();
        self.keywords_service = OnceCell::new();
        self.concepts_service = OnceCell::new();
        self.sentiment_service = OnceCell::new();
        self.taxonomy_service = OnceCell::new();
        self.relations_service = OnceCell::new();
        self.documents_service = OnceCell::new();
    }

    /// Get the configuration
    pub fn config(&self) -> &AlchemyConfig {
        &self.config
    }

    /// Get the transport
    pub fn transport(&self) -> Arc<dyn HttpTransport> {
        self.transport.clone()
    }

    /// Get the auth manager
    pub fn auth_manager(&self) -> Arc<dyn AuthManager> {
        self.auth_manager.clone()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        self.dispatcher.base_url()
    }
}

impl AlchemyLanguageClient for AlchemyLanguageClientImpl {
    fn entities(&self) -> Arc<dyn EntitiesService> {
        self.entities_service
            .get_or_init(|| {
                Arc::new(EntitiesServiceImpl::with_dispatcher(self.dispatcher.clone()))
                    as Arc<dyn EntitiesService>
            })
            .clone()
    }

    fn keywords(&self) -> Arc<dyn KeywordsService> {
        self.keywords_service
            .get_or_init(|| {
                Arc::new(KeywordsServiceImpl::with_dispatcher(self.dispatcher.clone()))
                    as Arc<dyn KeywordsService>
            })
            .clone()
    }

    fn concepts(&self) -> Arc<dyn ConceptsService> {
        self.concepts_service
            .get_or_init(|| {
                Arc::new(ConceptsServiceImpl::with_dispatcher(self.dispatcher.clone()))
                    as Arc<dyn ConceptsService>
            })
            .clone()
    }

    fn sentiment(&self) -> Arc<dyn SentimentService> {
        self.sentiment_service
            .get_or_init(|| {
                Arc::new(SentimentServiceImpl::with_dispatcher(self.dispatcher.clone()))
                    as Arc<dyn SentimentService>
            })
            .clone()
    }

    fn taxonomy(&self) -> Arc<dyn TaxonomyService> {
        self.taxonomy_service
            .get_or_init(|| {
                Arc::new(TaxonomyServiceImpl::with_dispatcher(self.dispatcher.clone()))
                    as Arc<dyn TaxonomyService>
            })
            .clone()
    }

    fn relations(&self) -> Arc<dyn RelationsService> {
        self.relations_service
            .get_or_init(|| {
                Arc::new(RelationsServiceImpl::with_dispatcher(self.dispatcher.clone()))
                    as Arc<dyn RelationsService>
            })
            .clone()
    }

    fn documents(&self) -> Arc<dyn DocumentsService> {
        self.documents_service
            .get_or_init(|| {
                Arc::new(DocumentsServiceImpl::with_dispatcher(self.dispatcher.clone()))
                    as Arc<dyn DocumentsService>
            })
            .clone()
    }
}
