mod budget;
mod chat;
mod corpus;

pub use budget::{ContextBudgeter, WordCountEstimator};
pub use chat::ChatService;
pub use corpus::CorpusBuilder;
