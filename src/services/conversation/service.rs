//! Conversation message service implementation.

use super::types::{MessageRequest, MessageResponse};
use crate::auth::AuthManager;
use crate::errors::{WatsonError, WatsonResult};
use crate::services::dispatcher::{Dispatcher, CONVERSATION_SERVICE};
use crate::transport::{encode_unreserved, HttpTransport, RequestDescriptor};
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Message service trait for testability
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Send a message to a workspace and get the reply
    async fn message(
        &self,
        workspace_id: &str,
        request: MessageRequest,
    ) -> WatsonResult<MessageResponse>;
}

/// Implementation of the message service
pub struct MessageServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl MessageServiceImpl {
    /// Create a new message service
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        base_url: Url,
    ) -> Self {
        Self::with_dispatcher(Arc::new(Dispatcher::new(
            transport,
            auth_manager,
            base_url,
            CONVERSATION_SERVICE,
        )))
    }

    /// Create a service sharing an existing dispatcher
    pub fn with_dispatcher(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    fn message_request(
        workspace_id: &str,
        request: &MessageRequest,
    ) -> WatsonResult<RequestDescriptor> {
        let workspace_id = workspace_id.trim();
        if workspace_id.is_empty() {
            return Err(WatsonError::validation(
                "workspace_id",
                "Workspace ID cannot be empty",
            ));
        }

        let path = format!("/v1/workspaces/{}/message", encode_unreserved(workspace_id));
        RequestDescriptor::json(path, request)
    }
}

#[async_trait]
impl MessageService for MessageServiceImpl {
    async fn message(
        &self,
        workspace_id: &str,
        request: MessageRequest,
    ) -> WatsonResult<MessageResponse> {
        let prepared = Self::message_request(workspace_id, &request);
        self.dispatcher.dispatch("message", prepared).await
    }
}
