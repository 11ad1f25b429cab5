// ABOUTME: Perplexity module - wire types, request builder, and API client.
// ABOUTME: Builder normalizes a JSON argument bag; client performs the single upstream call.

mod builder;
mod client;
mod types;

pub use builder::*;
pub use client::*;
pub use types::*;


#[cfg(test)]
mod client_test;

#[cfg(test)]
mod types_test;
