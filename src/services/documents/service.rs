//! Documents service implementation.

use super::types::{
    DocumentAuthors, DocumentText, DocumentTitle, Feeds, Language, Microformats,
    PublicationResponse, TextOptions, TitleOptions,
};
use crate::auth::AuthManager;
use crate::errors::WatsonResult;
use crate::services::dispatcher::{Dispatcher, ALCHEMY_SERVICE};
use crate::transport::{HttpTransport, QueryParams, RequestBuilder, RequestOptions};
use crate::types::{AlchemyOperation, Input};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Documents service trait for testability
#[async_trait]
pub trait DocumentsService: Send + Sync {
    /// Detect the authors of a document
    async fn authors(&self, input: Input) -> WatsonResult<DocumentAuthors>;

    /// Detect the language of a document
    async fn language(&self, input: Input) -> WatsonResult<Language>;

    /// Extract microformat data
    async fn microformats(&self, input: Input) -> WatsonResult<Microformats>;

    /// Detect the publication date
    async fn publication_date(&self, input: Input) -> WatsonResult<PublicationResponse>;

    /// Extract all text, without cleaning
    async fn raw_text(&self, input: Input) -> WatsonResult<DocumentText>;

    /// Extract the main text, without navigation and ads
    async fn text(&self, input: Input, options: TextOptions) -> WatsonResult<DocumentText>;

    /// Extract the title
    async fn title(&self, input: Input, options: TitleOptions) -> WatsonResult<DocumentTitle>;

    /// Extract RSS and ATOM feed links
    async fn feed_links(&self, input: Input) -> WatsonResult<Feeds>;
}

/// Implementation of the documents service
pub struct DocumentsServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

/// Options value for operations without flags.
struct NoOptions;

impl RequestOptions for NoOptions {
    fn apply(&self, _query: &mut QueryParams) {}
}

impl DocumentsServiceImpl {
    /// Create a new documents service
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

    async fn call<T, O>(
        &self,
        operation: AlchemyOperation,
        input: &Input,
        options: &O,
    ) -> WatsonResult<T>
    where
        T: DeserializeOwned + Send,
        O: RequestOptions + Sync,
    {
        let request = RequestBuilder::new(operation)
            .input(input)
            .options(options)
            .build();
        self.dispatcher.dispatch(operation.name(), request).await
    }
}

#[async_trait]
impl DocumentsService for DocumentsServiceImpl {
    async fn authors(&self, input: Input) -> WatsonResult<DocumentAuthors> {
        self.call(AlchemyOperation::Authors, &input, &NoOptions).await
    }

    async fn language(&self, input: Input) -> WatsonResult<Language> {
        self.call(AlchemyOperation::Language, &input, &NoOptions).await
    }

    async fn microformats(&self, input: Input) -> WatsonResult<Microformats> {
        self.call(AlchemyOperation::MicroformatData, &input, &NoOptions)
            .await
    }

    async fn publication_date(&self, input: Input) -> WatsonResult<PublicationResponse> {
        self.call(AlchemyOperation::PubDate, &input, &NoOptions).await
    }

    async fn raw_text(&self, input: Input) -> WatsonResult<DocumentText> {
        self.call(AlchemyOperation::RawText, &input, &NoOptions).await
    }

    async fn text(&self, input: Input, options: TextOptions) -> WatsonResult<DocumentText> {
        self.call(AlchemyOperation::Text, &input, &options).await
    }

    async fn title(&self, input: Input, options: TitleOptions) -> WatsonResult<DocumentTitle> {
        self.call(AlchemyOperation::Title, &input, &options).await
    }

    async fn feed_links(&self, input: Input) -> WatsonResult<Feeds> {
        self.call(AlchemyOperation::FeedLinks, &input, &NoOptions)
            .await
    }
}
