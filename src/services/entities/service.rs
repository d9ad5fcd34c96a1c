//! Entities service implementation.

use super::types::{Entities, EntityOptions};
use crate::auth::AuthManager;
use crate::errors::WatsonResult;
use crate::services::dispatcher::{Dispatcher, ALCHEMY_SERVICE};
use crate::transport::{HttpTransport, RequestBuilder};
use crate::types::{AlchemyOperation, Input};
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Entities service trait for testability
#[async_trait]
pub trait EntitiesService: Send + Sync {
    /// Extract named entities ranked by relevance
    async fn ranked_named_entities(
        &self,
        input: Input,
        options: EntityOptions,
    ) -> WatsonResult<Entities>;
}

/// Implementation of the entities service
pub struct EntitiesServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl EntitiesServiceImpl {
    /// Create a new entities service
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
impl EntitiesService for EntitiesServiceImpl {
    async fn ranked_named_entities(
        &self,
        input: Input,
        options: EntityOptions,
    ) -> WatsonResult<Entities> {
        let operation = AlchemyOperation::RankedNamedEntities;
        let request = RequestBuilder::new(operation)
            .input(&input)
            .options(&options)
            .build();
        self.dispatcher.dispatch(operation.name(), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::mocks::{MockClientBuilder, MockResponse};

    #[tokio::test]
    async fn test_ranked_named_entities() {
        let (service, transport) = MockClientBuilder::new()
            .with_response(MockResponse::json(&fixtures::entities_response()))
            .build(|t, a, u| EntitiesServiceImpl::new(t, a, u));

        let result = service
            .ranked_named_entities(
                Input::url("http://www.ibm.com"),
                EntityOptions::new().sentiment(true),
            )
            .await
            .unwrap();

        let entities = result.entities.unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].text.as_deref(), Some("IBM"));
        assert_eq!(result.total_transactions, Some(2));

        let request = transport.last_request().unwrap();
        assert!(request.url.contains("/url/URLGetRankedNamedEntities?"));
        assert!(request.url.contains("sentiment=1"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_ranked_named_entities_text_body() {
        let (service, transport) = MockClientBuilder::new()
            .with_response(MockResponse::json(&fixtures::entities_response()))
            .build(|t, a, u| EntitiesServiceImpl::new(t, a, u));

        service
            .ranked_named_entities(Input::text("IBM built Watson."), EntityOptions::new())
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert!(request.url.contains("/text/TextGetRankedNamedEntities?"));
        assert_eq!(
            request.body.as_deref(),
            Some(&b"text=IBM%20built%20Watson."[..])
        );
    }
}
