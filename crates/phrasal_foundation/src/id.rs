//! Generational identifiers for phrase-tree elements.

use std::fmt;

/// Identifier of an element stored in a phrase tree.
///
/// Ids are generational: a cleared slot bumps its generation, so a stale id
/// held across a clear can be detected instead of silently aliasing a new
/// element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId {
    /// Slot index in the arena.
    pub index: u32,
    /// Generation of the slot at the time the id was issued.
    pub generation: u32,
}

impl ElementId {
    /// Creates a new element id.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}v{}", self.index, self.generation)
    }
}
