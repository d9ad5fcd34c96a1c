//! # Watson API Client
//!
//! Rust client for the Watson AlchemyLanguage text analysis API and the
//! Conversation message API.
//!
//! ## Features
//!
//! - AlchemyLanguage: entities, keywords, concepts, sentiment, taxonomy,
//!   relations and document metadata, by URL, HTML or plain text input
//! - Conversation: workspace message exchange with carried context
//! - Detection of in-band error envelopes before decoding
//! - Lenient decoding of string-encoded numbers and booleans
//! - Observability through `tracing` spans, structured logs and metrics
//! - Secure credential handling with `SecretString`
//! - Mock transport and fixtures for tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_watson::{
//!     create_alchemy_client, AlchemyConfig, AlchemyLanguageClient, Input, KeywordOptions,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AlchemyConfig::builder().api_key("your-api-key").build()?;
//!     let client = create_alchemy_client(config)?;
//!
//!     let keywords = client
//!         .keywords()
//!         .ranked_keywords(
//!             Input::url("http://www.ibm.com/watson"),
//!             KeywordOptions::new().sentiment(true),
//!         )
//!         .await?;
//!
//!     for keyword in keywords.keywords.unwrap_or_default() {
//!         println!("{:?} {:?}", keyword.text, keyword.relevance);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Client interfaces and factory functions
//! - `config` - Configuration types and builders
//! - `auth` - API key and Basic authentication
//! - `transport` - HTTP transport, request construction and form encoding
//! - `response` - Error envelope detection and lenient decoding
//! - `errors` - Error types and taxonomy
//! - `types` - Operations, inputs and shared result records
//! - `observability` - Tracing, logging, metrics
//! - `services` - Service implementations and the request dispatcher

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod response;
pub mod services;
pub mod transport;
pub mod types;

// Testing support
pub mod fixtures;
pub mod mocks;

// Re-exports for convenience
pub use auth::{ApiKeyAuthManager, AuthManager, BasicAuthManager};
pub use client::{
    create_alchemy_client, create_alchemy_client_from_env, create_conversation_client,
    create_conversation_client_from_env, AlchemyLanguageClient, AlchemyLanguageClientImpl,
    ConversationClient, ConversationClientImpl,
};
pub use config::{
    AlchemyConfig, AlchemyConfigBuilder, ConversationConfig, ConversationConfigBuilder,
    DEFAULT_ALCHEMY_BASE_URL, DEFAULT_CONVERSATION_BASE_URL, DEFAULT_TIMEOUT,
};
pub use errors::{ErrorCategory, ValidationDetail, WatsonError, WatsonResult};
pub use observability::{
    DefaultTracer, InMemoryMetricsCollector, LogFormat, LogLevel, LoggingConfig, MetricsCollector,
    MetricsSnapshot, NoopMetricsCollector, NoopTracer, RequestSpan, SpanStatus,
    StructuredLogger, Tracer,
};
pub use response::ErrorEnvelope;
pub use services::dispatcher::{complete, Dispatcher};
pub use transport::{
    HttpTransport, QueryParams, RequestBuilder, RequestDescriptor, RequestOptions,
    ReqwestTransport, TransportResponse,
};
pub use types::{
    AlchemyOperation, DisambiguatedLinks, Document, Input, InputMode, KnowledgeGraph, Quotation,
    Sentiment,
};

// Service re-exports
pub use services::concepts::{
    Concept, ConceptOptions, ConceptResponse, ConceptsService, ConceptsServiceImpl,
};
pub use services::conversation::{
    EntityMention, Intent, MessageInput, MessageOutput, MessageRequest, MessageResponse,
    MessageService, MessageServiceImpl,
};
pub use services::documents::{
    Authors, DocumentAuthors, DocumentText, DocumentTitle, DocumentsService, DocumentsServiceImpl,
    Feed, Feeds, Language, Microformat, Microformats, PublicationDate, PublicationResponse,
    TextOptions, TitleOptions,
};
pub use services::entities::{
    Entities, EntitiesService, EntitiesServiceImpl, Entity, EntityOptions,
};
pub use services::keywords::{
    Keyword, KeywordOptions, Keywords, KeywordsService, KeywordsServiceImpl,
};
pub use services::relations::{
    RelationAction, RelationEntity, RelationKeyword, RelationObject, RelationOptions,
    RelationSubject, RelationsService, RelationsServiceImpl, SaoRelation, SaoRelations, Verb,
};
pub use services::sentiment::{SentimentResponse, SentimentService, SentimentServiceImpl};
pub use services::taxonomy::{Taxonomies, Taxonomy, TaxonomyService, TaxonomyServiceImpl};
