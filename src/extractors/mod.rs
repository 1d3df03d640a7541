// src/extractors/mod.rs
pub mod assembler;
pub mod damage;
pub mod document;
pub mod evolution;
pub mod identity;
pub mod locations;
pub mod moves;
pub mod names;
pub mod profile;
pub mod progression;
pub mod rules;
pub mod stats;
pub mod taxonomy;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export key extraction types for convenience
pub use assembler::RecordAssembler;
pub use damage::PairingPolicy;
pub use document::Document;
