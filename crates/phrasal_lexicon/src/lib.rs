//! Word storage and lookup for Phrasal.
//!
//! This crate provides:
//! - [`WordEntry`] - a base form, its lexical category, and its lexical features
//! - [`Lexicon`] - keyed storage with forward, any-category, and reverse
//!   feature-constrained lookup
//! - Built-in lexicons for [`english`], [`french`], and [`dutch`] covering the
//!   closed grammatical classes each language module depends on
//!
//! The realiser core treats the lexicon as a pre-loaded, in-memory, pure
//! lookup service; a missing closed-class entry is a fatal configuration
//! error surfaced through [`Lexicon::require`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod entry;
mod lexicon;

pub mod dutch;
pub mod english;
pub mod french;

pub use entry::WordEntry;
pub use lexicon::Lexicon;
