//! Retrieval-free document Q&A service.
//!
//! At startup the ingestion pipeline extracts text from a folder of
//! documents (PDF, DOCX, CSV, XLSX), concatenates it into one grounding
//! corpus, trims it to a token budget, and seeds a process-wide
//! conversation transcript. Each `/ask` request replays the full
//! transcript to an external chat-completion service and appends the
//! reply.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
