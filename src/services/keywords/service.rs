//! Keywords service implementation.

use super::types::{KeywordOptions, Keywords};
use crate::auth::AuthManager;
use crate::errors::WatsonResult;
use crate::services::dispatcher::{Dispatcher, ALCHEMY_SERVICE};
use crate::transport::{HttpTransport, RequestBuilder};
use crate::types::{AlchemyOperation, Input};
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Keywords service trait for testability
#[async_trait]
pub trait KeywordsService: Send + Sync {
    /// Extract keywords ranked by relevance
    async fn ranked_keywords(&self, input: Input, options: KeywordOptions)
        -> WatsonResult<Keywords>;
}

/// Implementation of the keywords service
pub struct KeywordsServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl KeywordsServiceImpl {
    /// Create a new keywords service
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
impl KeywordsService for KeywordsServiceImpl {
    async fn ranked_keywords(
        &self,
        input: Input,
        options: KeywordOptions,
    ) -> WatsonResult<Keywords> {
        let operation = AlchemyOperation::RankedKeywords;
        let request = RequestBuilder::new(operation)
            .input(&input)
            .options(&options)
            .build();
        self.dispatcher.dispatch(operation.name(), request).await
    }
}
