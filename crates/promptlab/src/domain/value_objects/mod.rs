//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod quest;

pub use quest::*;
