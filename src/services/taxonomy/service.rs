//! Taxonomy service implementation.

use super::types::Taxonomies;
use crate::auth::AuthManager;
use crate::errors::WatsonResult;
use crate::services::dispatcher::{Dispatcher, ALCHEMY_SERVICE};
use crate::transport::{HttpTransport, RequestBuilder};
use crate::types::{AlchemyOperation, Input};
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Taxonomy service trait for testability
#[async_trait]
pub trait TaxonomyService: Send + Sync {
    /// Classify a document into a ranked list of categories
    async fn ranked_taxonomy(&self, input: Input) -> WatsonResult<Taxonomies>;
}

/// Implementation of the taxonomy service
pub struct TaxonomyServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl TaxonomyServiceImpl {
    /// Create a new taxonomy service
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
impl TaxonomyService for TaxonomyServiceImpl {
    async fn ranked_taxonomy(&self, input: Input) -> WatsonResult<Taxonomies> {
        let operation = AlchemyOperation::RankedTaxonomy;
        let request = RequestBuilder::new(operation).input(&input).build();
        self.dispatcher.dispatch(operation.name(), request).await
    }
}
