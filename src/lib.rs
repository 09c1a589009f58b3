//! Phrasal - rule-based surface realiser
//!
//! This crate re-exports all layers of the Phrasal system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: phrasal_realiser    — pipeline driver, sentence finishing
//! Layer 3: phrasal_syntax      — per-language clause & verb-phrase realisers
//! Layer 2: phrasal_morphology  — per-language inflection + morphophonology
//! Layer 1: phrasal_elements    — phrase-tree arena, element model, factory
//!          phrasal_lexicon     — word entries, lookup, built-in lexicons
//! Layer 0: phrasal_foundation  — feature model, element ids, errors
//! ```

pub use phrasal_elements as elements;
pub use phrasal_foundation as foundation;
pub use phrasal_lexicon as lexicon;
pub use phrasal_morphology as morphology;
pub use phrasal_realiser as realiser;
pub use phrasal_syntax as syntax;
