// ABOUTME: Concrete tool implementations exposed by this crate.
// ABOUTME: Currently a single tool: Perplexity web search.

mod perplexity_search;

pub use perplexity_search::*;
