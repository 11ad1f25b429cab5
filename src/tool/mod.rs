// ABOUTME: Tool module - the seam consumed by a hosting agent runtime.
// ABOUTME: Defines the Tool trait, results, definitions, and a registry.

mod registry;
mod result;
mod traits;

pub use registry::*;
pub use result::*;
pub use traits::*;
