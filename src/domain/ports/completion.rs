use crate::domain::entities::Message;
use crate::domain::errors::DomainError;
use async_trait::async_trait;

/// The external chat-completion endpoint. Receives the full ordered
/// transcript and returns the top completion's text.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, DomainError>;
}
