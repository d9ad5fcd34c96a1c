//! Concepts service implementation.

use super::types::{ConceptOptions, ConceptResponse};
use crate::auth::AuthManager;
use crate::errors::WatsonResult;
use crate::services::dispatcher::{Dispatcher, ALCHEMY_SERVICE};
use crate::transport::{HttpTransport, RequestBuilder};
use crate::types::{AlchemyOperation, Input};
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Concepts service trait for testability
#[async_trait]
pub trait ConceptsService: Send + Sync {
    /// Tag the concepts a document is about, ranked by relevance
    async fn ranked_concepts(
        &self,
        input: Input,
        options: ConceptOptions,
    ) -> WatsonResult<ConceptResponse>;
}

/// Implementation of the concepts service
pub struct ConceptsServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl ConceptsServiceImpl {
    /// Create a new concepts service
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        base_url: Url,
    ) -> Self {
        Self::with_dispatcher(Arc::new(Dispatcher::new(
            transport,
            auth_manager,
            base_url,
            ALCHEMY_SERVICE,
        )))
    }

    /// Create a service sharing an existing dispatcher
    pub fn with_dispatcher(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl ConceptsService for ConceptsServiceImpl {
    async fn ranked_concepts(
        &self,
        input: Input,
        options: ConceptOptions,
    ) -> WatsonResult<ConceptResponse> {
        let operation = AlchemyOperation::RankedConcepts;
        let request = RequestBuilder::new(operation)
            .input(&input)
            .options(&options)
            .build();
        self.dispatcher.dispatch(operation.name(), request).await
    }
}
