//! Integration tests for Layer 4: Realiser
//!
//! End-to-end realisation: phrase trees in, finished sentences out, across
//! the three languages and the full interrogative inventory.

mod consumption;
mod dutch_declaratives;
mod dutch_questions;
mod english_questions;
mod multilingual;
