use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::domain::{ports::CompletionService, DomainError, Message, Transcript};

/// Owns the process-wide transcript and drives the question/answer loop.
///
/// The transcript lock is held across the completion call, so concurrent
/// requests serialize into whole turns and appends can never interleave.
pub struct ChatService {
    gateway: Arc<dyn CompletionService>,
    transcript: Mutex<Transcript>,
}

impl ChatService {
    /// Seeds the transcript with the system prompt and the corpus-bearing
    /// user message. Called exactly once, at process start.
    pub fn new(gateway: Arc<dyn CompletionService>, system_prompt: &str, corpus: &str) -> Self {
        Self {
            gateway,
            transcript: Mutex::new(Transcript::seed(system_prompt, corpus)),
        }
    }

    /// Appends the question, replays the full transcript to the gateway,
    /// and appends the reply.
    ///
    /// An empty question is rejected before any mutation. A gateway
    /// failure leaves the question appended without an answer; that
    /// asymmetry is intentional and matches what the model saw.
    #[instrument(skip(self, question))]
    pub async fn ask(&self, question: &str) -> Result<String, DomainError> {
        if question.trim().is_empty() {
            return Err(DomainError::validation("No question provided."));
        }

        let mut transcript = self.transcript.lock().await;
        transcript.push_user(question);

        let answer = self.gateway.complete(transcript.messages()).await?;
        transcript.push_assistant(&answer);
        Ok(answer)
    }

    /// Snapshot of the transcript, in order.
    pub async fn history(&self) -> Vec<Message> {
        self.transcript.lock().await.messages.clone()
    }
}
