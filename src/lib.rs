// ABOUTME: Root module for perplexity-search - a Perplexity web search tool.
// ABOUTME: Re-exports all public types from submodules.

pub mod config;
pub mod error;
pub mod perplexity;
pub mod prelude;
pub mod tool;
pub mod tools;

pub use config::Config;
pub use error::SearchError;
