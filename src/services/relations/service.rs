//! Relations service implementation.

use super::types::{RelationOptions, SaoRelations};
use crate::auth::AuthManager;
use crate::errors::WatsonResult;
use crate::services::dispatcher::{Dispatcher, ALCHEMY_SERVICE};
use crate::transport::{HttpTransport, RequestBuilder};
use crate::types::{AlchemyOperation, Input};
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Relations service trait for testability
#[async_trait]
pub trait RelationsService: Send + Sync {
    /// Extract subject-action-object relations
    async fn relations(&self, input: Input, options: RelationOptions)
        -> WatsonResult<SaoRelations>;
}

/// Implementation of the relations service
pub struct RelationsServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl RelationsServiceImpl {
    /// Create a new relations service
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
impl RelationsService for RelationsServiceImpl {
    async fn relations(
        &self,
        input: Input,
        options: RelationOptions,
    ) -> WatsonResult<SaoRelations> {
        let operation = AlchemyOperation::Relations;
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
    async fn test_relations() {
        let (service, transport) = MockClientBuilder::new()
            .with_response(MockResponse::json(&fixtures::relations_response()))
            .build(|t, a, u| RelationsServiceImpl::new(t, a, u));

        let result = service
            .relations(
                Input::html("<p>IBM built Watson.</p>"),
                RelationOptions::new().entities(true),
            )
            .await
            .unwrap();

        let relations = result.relations.unwrap();
        assert_eq!(relations.len(), 1);
        assert_eq!(
            relations[0].action.as_ref().unwrap().lemmatized.as_deref(),
            Some("build")
        );

        let request = transport.last_request().unwrap();
        assert!(request.url.contains("/html/HTMLGetRelations?"));
        assert!(request.url.contains("entities=1"));
    }
}
