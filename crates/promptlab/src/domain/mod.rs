//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, value objects, prompt templates, and errors.

pub mod entities;
pub mod errors;
pub mod templates;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use templates::*;
pub use value_objects::*;
