mod completion;
mod extractor;
mod token_estimator;

pub use completion::CompletionService;
pub use extractor::TextExtractor;
pub use token_estimator::TokenEstimator;
