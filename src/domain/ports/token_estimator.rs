/// Strategy for approximating how many tokens a piece of text costs.
///
/// The default implementation is a whitespace word count, which is a
/// deliberately cheap proxy rather than a real tokenizer. Keeping it
/// behind a trait lets an exact tokenizer be swapped in without touching
/// the budgeter's trim logic.
pub trait TokenEstimator: Send + Sync {
    fn estimate(&self, text: &str) -> usize;
}
