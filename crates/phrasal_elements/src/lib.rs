//! Phrase-tree storage and construction for Phrasal.
//!
//! This crate provides:
//! - [`PhraseTree`] - a generational arena owning every syntactic element
//! - [`Element`] / [`ElementKind`] - the word / inflected / phrase / list /
//!   text element model
//! - [`NlgFactory`] - the construction surface that builds feature-annotated
//!   phrase trees from base strings and pre-built elements
//!
//! Realisation walks and annotates these trees; it never parses text.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arena;
mod element;
mod factory;

pub use arena::PhraseTree;
pub use element::{Element, ElementKind, PhraseData, TextData, WordData};
pub use factory::NlgFactory;
