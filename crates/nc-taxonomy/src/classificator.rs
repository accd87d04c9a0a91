//! The type-tag registry.
//!
//! Every map feature is classified by one or more *types*: paths in a tag
//! tree such as `highway|primary` or `route|ferry|motorcar`.  The
//! [`Classificator`] assigns each node of that tree a [`TypeId`] the first
//! time it is registered and resolves paths back to handles afterwards.
//! Registering a path also registers all of its prefixes, so `highway` and
//! `highway|primary` both exist once `highway|primary|bridge` does.
//!
//! The registry is filled once at start-up (from literals or a CSV file, see
//! [`crate::loader`]) and is read-only afterwards.

use rustc_hash::FxHashMap;

use nc_core::TypeId;

use crate::{TaxonomyError, TaxonomyResult};

/// Deepest path the registry accepts.
pub const MAX_DEPTH: usize = 5;

/// Separator used in the canonical string form of a path.
pub const PATH_SEPARATOR: &str = "|";

#[derive(Debug, Clone)]
struct Entry {
    name:   String,
    parent: Option<TypeId>,
    /// 1 for top-level categories.
    level:  usize,
}

/// Path ↔ [`TypeId`] registry for the hierarchical tag taxonomy.
///
/// # Example
///
/// ```
/// use nc_taxonomy::Classificator;
///
/// let mut c = Classificator::new();
/// let bridge = c.add_path(&["highway", "primary", "bridge"]).unwrap();
/// let primary = c.type_by_path(&["highway", "primary"]).unwrap();
/// assert_eq!(c.truncate(bridge, 2), primary);
/// assert_eq!(c.readable_name(bridge), "highway-primary-bridge");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Classificator {
    entries: Vec<Entry>,
    by_path: FxHashMap<String, TypeId>,
}

impl Classificator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of paths.
    pub fn from_paths<'a, I>(paths: I) -> TaxonomyResult<Self>
    where
        I: IntoIterator<Item = &'a [&'a str]>,
    {
        let mut c = Self::new();
        for path in paths {
            c.add_path(path)?;
        }
        Ok(c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register `path` (and its prefixes) and return the handle of the full
    /// path.  Registering an existing path returns the existing handle.
    pub fn add_path(&mut self, path: &[&str]) -> TaxonomyResult<TypeId> {
        validate(path)?;

        let mut parent: Option<TypeId> = None;
        for depth in 1..=path.len() {
            let key = join(&path[..depth]);
            let id = match self.by_path.get(&key) {
                Some(&id) => id,
                None => {
                    let id = next_id(self.entries.len())?;
                    self.entries.push(Entry {
                        name: path[depth - 1].to_owned(),
                        parent,
                        level: depth,
                    });
                    self.by_path.insert(key, id);
                    id
                }
            };
            parent = Some(id);
        }

        // `validate` rejected empty paths, so the loop ran at least once.
        parent.ok_or(TaxonomyError::EmptyPath)
    }

    /// Handle of `path`, or `None` if it was never registered.
    pub fn type_by_path(&self, path: &[&str]) -> Option<TypeId> {
        self.by_path.get(&join(path)).copied()
    }

    /// Like [`type_by_path`](Self::type_by_path) but reports a missing path
    /// as [`TaxonomyError::UnknownPath`].
    pub fn require(&self, path: &[&str]) -> TaxonomyResult<TypeId> {
        self.type_by_path(path)
            .ok_or_else(|| TaxonomyError::UnknownPath(join(path)))
    }

    /// `true` if `t` was minted by this registry.
    pub fn contains(&self, t: TypeId) -> bool {
        t.index() < self.entries.len()
    }

    /// Depth of `t` in the tree (1 = top-level), or 0 for foreign handles.
    pub fn level(&self, t: TypeId) -> usize {
        self.entries.get(t.index()).map_or(0, |e| e.level)
    }

    pub fn parent(&self, t: TypeId) -> Option<TypeId> {
        self.entries.get(t.index()).and_then(|e| e.parent)
    }

    /// Ancestor of `t` at depth `level`, or `t` itself if it is already no
    /// deeper than that.  Foreign handles are returned unchanged.
    pub fn truncate(&self, t: TypeId, level: usize) -> TypeId {
        let mut current = t;
        while let Some(entry) = self.entries.get(current.index()) {
            if entry.level <= level {
                break;
            }
            match entry.parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current
    }

    /// Path segments of `t`, root first.  Empty for foreign handles.
    pub fn path_of(&self, t: TypeId) -> Vec<&str> {
        let mut segments = Vec::new();
        let mut current = Some(t);
        while let Some(entry) = current.and_then(|id| self.entries.get(id.index())) {
            segments.push(entry.name.as_str());
            current = entry.parent;
        }
        segments.reverse();
        segments
    }

    /// Dash-joined name used in logs and debug output, e.g.
    /// `"highway-primary"`.
    pub fn readable_name(&self, t: TypeId) -> String {
        if !self.contains(t) {
            return format!("<unknown {t}>");
        }
        self.path_of(t).join("-")
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Handle for the entry about to be pushed at index `len`.  `u32::MAX` is
/// reserved for [`TypeId::INVALID`].
pub(crate) fn next_id(len: usize) -> TaxonomyResult<TypeId> {
    TypeId::try_from(len)
        .ok()
        .filter(|id| id.is_valid())
        .ok_or(TaxonomyError::Full { max: TypeId::INVALID.index() })
}

pub(crate) fn join(path: &[&str]) -> String {
    path.join(PATH_SEPARATOR)
}

fn validate(path: &[&str]) -> TaxonomyResult<()> {
    if path.is_empty() {
        return Err(TaxonomyError::EmptyPath);
    }
    if path.len() > MAX_DEPTH {
        return Err(TaxonomyError::TooDeep { path: join(path), max: MAX_DEPTH });
    }
    let malformed = path
        .iter()
        .any(|s| s.is_empty() || s.trim() != *s || s.contains(PATH_SEPARATOR));
    if malformed {
        return Err(TaxonomyError::BadSegment { path: join(path) });
    }
    Ok(())
}
