//! Entity generators for persona data.
//!
//! - [`PersonaGenerator`]: draw records and full datasets from the fixed sets

pub mod persona;

pub use persona::{PersonaGenerator, generate_dataset};
