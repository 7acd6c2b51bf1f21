//! Service adapters
//!
//! Concrete implementations of the ports in `ports/services`.

pub mod hf_inference;

pub use hf_inference::HfInferenceClient;
