use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The full ordered conversation replayed to the completion service on
/// every request. Seeded once with the document corpus, then grown by one
/// question/answer pair per successful turn. Never pruned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub id: Uuid,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transcript {
    /// Seeds a new transcript with the system persona instruction and a
    /// user message carrying the (already budgeted) corpus text.
    pub fn seed(system_prompt: impl Into<String>, corpus: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            messages: vec![
                Message::new(MessageRole::System, system_prompt),
                Message::new(
                    MessageRole::User,
                    format!("Here is the data:\n{corpus}\nnow user will ask questions from the data"),
                ),
            ],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(MessageRole::User, content);
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(MessageRole::Assistant, content);
    }

    fn push(&mut self, role: MessageRole, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
        self.updated_at = Utc::now();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last_assistant_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| matches!(m.role, MessageRole::Assistant))
            .map(|m| m.content.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_produces_exactly_two_messages() {
        let t = Transcript::seed("You are a helpful assistant.", "doc text");
        assert_eq!(t.len(), 2);
        assert_eq!(t.messages[0].role, MessageRole::System);
        assert_eq!(t.messages[1].role, MessageRole::User);
        assert!(t.messages[1].content.contains("doc text"));
        assert!(t.messages[1]
            .content
            .ends_with("now user will ask questions from the data"));
    }

    #[test]
    fn turns_append_in_call_order() {
        let mut t = Transcript::seed("sys", "corpus");
        t.push_user("What is X?");
        t.push_assistant("Y");
        t.push_user("And Z?");
        t.push_assistant("W");

        assert_eq!(t.len(), 6);
        let roles: Vec<_> = t.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            [
                MessageRole::System,
                MessageRole::User,
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::User,
                MessageRole::Assistant,
            ]
        );
        assert_eq!(t.last_assistant_message(), Some("W"));
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::new(MessageRole::Assistant, "hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }
}
