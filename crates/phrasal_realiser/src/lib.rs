//! The realisation pipeline for Phrasal.
//!
//! [`Realiser`] drives the three stages over a phrase tree: syntax produces
//! the ordered token sequence, morphology inflects each token to a surface
//! string, and morphophonology adjusts adjacent tokens. Sentence finishing
//! (capitalisation, spacing, terminal punctuation) is layered on top for
//! callers that want whole sentences.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod realiser;

pub use realiser::Realiser;
