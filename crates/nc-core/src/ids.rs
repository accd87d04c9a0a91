//! Handles for taxonomy entries.
//!
//! Map features are classified by paths in a tag tree (`highway`,
//! `highway|primary`, `highway|primary|bridge`).  The taxonomy registry
//! numbers the nodes of that tree in registration order, and a [`TypeId`] is
//! that number.  Routing and search code only compares, hashes and stores
//! handles; turning a path into a handle and walking to a parent are the
//! registry's job.

use std::fmt;

/// Number of one node in the tag tree.
///
/// The registry keeps its nodes in a `Vec` and mints handle `n` for the
/// node at position `n`, so [`index`](TypeId::index) is a direct lookup.
/// Handles from one registry mean nothing to another.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeId(pub u32);

impl TypeId {
    /// Never minted by a registry; marks "no type" in default-initialised
    /// slots.
    pub const INVALID: TypeId = TypeId(u32::MAX);

    /// Position of the node in the registry's table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// Inline slots of a `HybridSequence<TypeId, N>` are filled with this, so an
/// unused slot never aliases a real type.
impl Default for TypeId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "TypeId({})", self.0)
        } else {
            f.write_str("TypeId(invalid)")
        }
    }
}

/// Registry position → handle.  Fails past `u32::MAX`; the registry also
/// refuses the [`TypeId::INVALID`] position itself.
impl TryFrom<usize> for TypeId {
    type Error = std::num::TryFromIntError;

    fn try_from(position: usize) -> Result<TypeId, Self::Error> {
        u32::try_from(position).map(TypeId)
    }
}
