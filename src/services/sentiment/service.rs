//! Sentiment service implementation.

use super::types::SentimentResponse;
use crate::auth::AuthManager;
use crate::errors::{WatsonError, WatsonResult};
use crate::services::dispatcher::{Dispatcher, ALCHEMY_SERVICE};
use crate::transport::{HttpTransport, RequestBuilder, RequestDescriptor};
use crate::types::{AlchemyOperation, Input};
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Sentiment service trait for testability
#[async_trait]
pub trait SentimentService: Send + Sync {
    /// Overall sentiment of a document
    async fn text_sentiment(&self, input: Input) -> WatsonResult<SentimentResponse>;

    /// Sentiment towards a target phrase within a document
    async fn targeted_sentiment(
        &self,
        input: Input,
        target: String,
    ) -> WatsonResult<SentimentResponse>;
}

/// Implementation of the sentiment service
pub struct SentimentServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl SentimentServiceImpl {
    /// Create a new sentiment service
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

    fn targeted_request(input: &Input, target: &str) -> WatsonResult<RequestDescriptor> {
        if target.trim().is_empty() {
            return Err(WatsonError::validation("target", "Target cannot be empty"));
        }
        RequestBuilder::new(AlchemyOperation::TargetedSentiment)
            .input(input)
            .param("target", target)
            .build()
    }
}

#[async_trait]
impl SentimentService for SentimentServiceImpl {
    async fn text_sentiment(&self, input: Input) -> WatsonResult<SentimentResponse> {
        let operation = AlchemyOperation::TextSentiment;
        let request = RequestBuilder::new(operation).input(&input).build();
        self.dispatcher.dispatch(operation.name(), request).await
    }

    async fn targeted_sentiment(
        &self,
        input: Input,
        target: String,
    ) -> WatsonResult<SentimentResponse> {
        let request = Self::targeted_request(&input, &target);
        self.dispatcher
            .dispatch(AlchemyOperation::TargetedSentiment.name(), request)
            .await
    }
}
