//! Per-feature type list.

use nc_core::{HybridSequence, TypeId};

/// Inline slots in a [`TypesHolder`].  Real features almost never carry more
/// types than this, so classification runs without touching the heap.
pub const INLINE_TYPES: usize = 8;

/// The types attached to one map feature, in the order the feature reader
/// produced them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TypesHolder {
    types: HybridSequence<TypeId, INLINE_TYPES>,
}

impl TypesHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, t: TypeId) {
        self.types.push_back(t);
    }

    pub fn has(&self, t: TypeId) -> bool {
        self.types.contains(&t)
    }

    /// Remove the first occurrence of `t`.  Returns `false` if absent.
    pub fn remove(&mut self, t: TypeId) -> bool {
        match self.types.iter().position(|&x| x == t) {
            Some(pos) => {
                self.types[pos..].rotate_left(1);
                self.types.pop_back();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeId> {
        self.types.iter()
    }

    pub fn as_slice(&self) -> &[TypeId] {
        self.types.as_slice()
    }
}

impl FromIterator<TypeId> for TypesHolder {
    fn from_iter<I: IntoIterator<Item = TypeId>>(iter: I) -> Self {
        Self { types: iter.into_iter().collect() }
    }
}

impl From<&[TypeId]> for TypesHolder {
    fn from(types: &[TypeId]) -> Self {
        types.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a TypesHolder {
    type Item = &'a TypeId;
    type IntoIter = std::slice::Iter<'a, TypeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
