//! Application layer - the ingestion pipeline and the question loop.
//!
//! Services here orchestrate domain logic and infrastructure, depending
//! on domain ports (traits) rather than concrete implementations.

pub mod services;

pub use services::{ChatService, ContextBudgeter, CorpusBuilder, WordCountEstimator};
