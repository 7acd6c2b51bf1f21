//! Domain Entities
//!
//! Transient value types that live for a single request/response cycle.
//! - PromptSpec: structured student input for the prompt builder
//! - Completion: request, decoded choices and extracted result
//! - Attempt: a prompt paired with the answer it produced

mod attempt;
mod completion;
mod prompt_spec;

pub use attempt::*;
pub use completion::*;
pub use prompt_spec::*;
