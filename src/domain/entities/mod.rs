mod document;
mod transcript;

pub use document::{Corpus, DocumentFormat, SkippedFile};
pub use transcript::{Message, MessageRole, Transcript};
