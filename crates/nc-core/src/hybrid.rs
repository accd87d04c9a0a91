//! `HybridSequence<T, N>`: a vector that keeps up to `N` elements inline.
//!
//! # Storage modes
//!
//! ```text
//! Inline { buf: [T; N], len }   ── first growth past N ──▶   Heap(Vec<T>)
//! ```
//!
//! While the element count has never exceeded `N`, nothing is allocated.
//! The first operation that needs room for more than `N` elements *promotes*
//! the sequence to a heap `Vec`.  Promotion is one-way: a promoted sequence
//! stays heap-backed for the rest of its life, even after [`clear`].
//! [`is_promoted`] exposes the mode for callers that care; everything else
//! behaves identically in both modes.
//!
//! # Growth policy
//!
//! | Path                                  | Heap reservation on promotion |
//! |---------------------------------------|-------------------------------|
//! | [`push_back`]                         | `2 * N`                       |
//! | [`append`], [`assign`], [`insert`], [`resize`], [`reserve`] | exactly what is needed |
//!
//! # Contract violations
//!
//! Out-of-range indexing, [`front`]/[`back`]/[`pop_back`] on an empty
//! sequence, and inserting past the end are caller bugs and panic.
//!
//! An empty promoted sequence yields an ordinary empty slice from
//! [`as_slice`]; it is *not* a contract violation.
//!
//! [`clear`]: HybridSequence::clear
//! [`is_promoted`]: HybridSequence::is_promoted
//! [`push_back`]: HybridSequence::push_back
//! [`append`]: HybridSequence::append
//! [`assign`]: HybridSequence::assign
//! [`insert`]: HybridSequence::insert
//! [`resize`]: HybridSequence::resize
//! [`reserve`]: HybridSequence::reserve
//! [`front`]: HybridSequence::front
//! [`back`]: HybridSequence::back
//! [`pop_back`]: HybridSequence::pop_back
//! [`as_slice`]: HybridSequence::as_slice

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::SliceIndex;

// ── Storage ───────────────────────────────────────────────────────────────────

// Inline slots at or beyond `len` always hold `T::default()`: every shrinking
// path takes the value out rather than leaving it behind.
#[derive(Clone)]
enum Storage<T, const N: usize> {
    Inline { buf: [T; N], len: usize },
    Heap(Vec<T>),
}

/// Ordered, indexable, resizable sequence with `N` inline slots.
///
/// # Example
///
/// ```
/// use nc_core::HybridSequence;
///
/// let mut seq: HybridSequence<u32, 2> = HybridSequence::new();
/// seq.push_back(1);
/// seq.push_back(2);
/// assert!(seq.is_inline());
///
/// seq.push_back(3); // third element does not fit → promote
/// assert!(seq.is_promoted());
///
/// seq.clear();
/// assert!(seq.is_empty());
/// assert!(seq.is_promoted()); // never demotes
/// ```
#[derive(Clone)]
pub struct HybridSequence<T, const N: usize> {
    storage: Storage<T, N>,
}

// ── Read-only API (no bounds on T) ────────────────────────────────────────────

impl<T, const N: usize> HybridSequence<T, N> {
    /// Number of inline slots.
    pub const INLINE_CAPACITY: usize = N;

    #[inline]
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Inline { len, .. } => *len,
            Storage::Heap(heap) => heap.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` while no heap storage has ever been needed.
    #[inline]
    pub fn is_inline(&self) -> bool {
        matches!(self.storage, Storage::Inline { .. })
    }

    /// `true` once the sequence has moved to heap storage.  Never reverts.
    #[inline]
    pub fn is_promoted(&self) -> bool {
        !self.is_inline()
    }

    /// `N` while inline, otherwise the heap vector's capacity.
    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Inline { .. } => N,
            Storage::Heap(heap) => heap.capacity(),
        }
    }

    /// The logical contents as one contiguous slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.storage {
            Storage::Inline { buf, len } => &buf[..*len],
            Storage::Heap(heap) => heap,
        }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.storage {
            Storage::Inline { buf, len } => &mut buf[..*len],
            Storage::Heap(heap) => heap,
        }
    }

    /// First element.
    ///
    /// # Panics
    ///
    /// If the sequence is empty.
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(value) => value,
            None => panic!("front() on an empty HybridSequence"),
        }
    }

    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(value) => value,
            None => panic!("front_mut() on an empty HybridSequence"),
        }
    }

    /// Last element.
    ///
    /// # Panics
    ///
    /// If the sequence is empty.
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(value) => value,
            None => panic!("back() on an empty HybridSequence"),
        }
    }

    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(value) => value,
            None => panic!("back_mut() on an empty HybridSequence"),
        }
    }

    /// Exchange the full state of two sequences, inline buffers included.
    ///
    /// Cost is proportional to `N` plus the larger logical size, not O(1):
    /// the inline buffer is part of the value.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.storage, &mut other.storage);
    }

    /// Consume the sequence and return its elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        match self.storage {
            Storage::Inline { buf, len } => buf.into_iter().take(len).collect(),
            Storage::Heap(heap) => heap,
        }
    }
}

// ── Mutating API ──────────────────────────────────────────────────────────────

impl<T: Default, const N: usize> HybridSequence<T, N> {
    pub fn new() -> Self {
        Self {
            storage: Storage::Inline {
                buf: std::array::from_fn(|_| T::default()),
                len: 0,
            },
        }
    }

    /// A sequence holding `len` copies of `fill`.
    pub fn with_len(len: usize, fill: T) -> Self
    where
        T: Clone,
    {
        let mut seq = Self::new();
        seq.resize(len, fill);
        seq
    }

    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        let mut seq = Self::new();
        seq.append(items.iter().cloned());
        seq
    }

    /// Append one element.  Promotes (reserving `2 * N`) when the inline
    /// buffer is already full.
    pub fn push_back(&mut self, value: T) {
        if let Storage::Inline { buf, len } = &mut self.storage {
            if *len < N {
                buf[*len] = value;
                *len += 1;
                return;
            }
        }
        self.promote(2 * N).push(value);
    }

    /// Remove and return the last element.
    ///
    /// # Panics
    ///
    /// If the sequence is empty.
    pub fn pop_back(&mut self) -> T {
        let popped = match &mut self.storage {
            Storage::Inline { buf, len } => {
                if *len == 0 {
                    None
                } else {
                    *len -= 1;
                    Some(mem::take(&mut buf[*len]))
                }
            }
            Storage::Heap(heap) => heap.pop(),
        };
        popped.unwrap_or_else(|| panic!("pop_back() on an empty HybridSequence"))
    }

    /// Append every element of `items` at the end.
    ///
    /// If the inline buffer overflows part-way, the sequence promotes once,
    /// reserving room for what is already stored plus the iterator's lower
    /// size bound (exact for slices and ranges).
    pub fn append<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter();
        let overflow = match &mut self.storage {
            Storage::Heap(heap) => {
                heap.extend(items);
                return;
            }
            Storage::Inline { buf, len } => loop {
                match items.next() {
                    None => return,
                    Some(value) if *len < N => {
                        buf[*len] = value;
                        *len += 1;
                    }
                    Some(value) => break value,
                }
            },
        };
        let needed = N + 1 + items.size_hint().0;
        let heap = self.promote(needed);
        heap.push(overflow);
        heap.extend(items);
    }

    /// Replace the contents with `items`.  A promoted sequence stays promoted.
    pub fn assign<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.append(items);
    }

    /// Insert `items` so that the first of them lands at `position`.
    ///
    /// While the result still fits inline, the tail is shifted right by
    /// pairwise exchange; otherwise the sequence promotes (reserving exactly
    /// `len + items.len()`) and inserts on the heap.
    ///
    /// # Panics
    ///
    /// If `position > len()`.
    pub fn insert<I>(&mut self, position: usize, items: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let current = self.len();
        assert!(
            position <= current,
            "insert position {position} out of range for HybridSequence of length {current}"
        );

        let items = items.into_iter();
        let count = items.len();

        match &mut self.storage {
            Storage::Heap(heap) => {
                heap.splice(position..position, items);
                return;
            }
            Storage::Inline { buf, len } if *len + count <= N => {
                for i in (position..*len).rev() {
                    buf.swap(i, i + count);
                }
                for (slot, value) in buf[position..position + count].iter_mut().zip(items) {
                    *slot = value;
                }
                *len += count;
                return;
            }
            Storage::Inline { .. } => {}
        }

        self.promote(current + count).splice(position..position, items);
    }

    /// Grow with copies of `fill`, or truncate.
    pub fn resize(&mut self, new_len: usize, fill: T)
    where
        T: Clone,
    {
        if new_len <= self.len() {
            self.truncate(new_len);
            return;
        }
        if let Storage::Inline { buf, len } = &mut self.storage {
            if new_len <= N {
                buf[*len..new_len].fill(fill);
                *len = new_len;
                return;
            }
        }
        self.promote(new_len).resize(new_len, fill);
    }

    /// Same shape change as [`resize`](Self::resize) without a fill value.
    ///
    /// New slots hold `T::default()`; callers are expected to overwrite them.
    pub fn resize_no_init(&mut self, new_len: usize) {
        if new_len <= self.len() {
            self.truncate(new_len);
            return;
        }
        if let Storage::Inline { len, .. } = &mut self.storage {
            if new_len <= N {
                *len = new_len;
                return;
            }
        }
        self.promote(new_len).resize_with(new_len, T::default);
    }

    /// Keep the first `new_len` elements.  No-op if already shorter.
    pub fn truncate(&mut self, new_len: usize) {
        match &mut self.storage {
            Storage::Inline { buf, len } => {
                if new_len < *len {
                    for slot in &mut buf[new_len..*len] {
                        *slot = T::default();
                    }
                    *len = new_len;
                }
            }
            Storage::Heap(heap) => heap.truncate(new_len),
        }
    }

    /// Ensure room for `capacity` elements in total.
    ///
    /// Promotes if `capacity > N`; an inline sequence asked for `≤ N` is
    /// left untouched since the inline buffer cannot grow.
    pub fn reserve(&mut self, capacity: usize) {
        if self.is_inline() && capacity <= N {
            return;
        }
        let heap = self.promote(capacity);
        heap.reserve(capacity.saturating_sub(heap.len()));
    }

    /// Drop every element.  Does **not** demote a promoted sequence.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Move inline contents to a heap `Vec` with at least `capacity` slots.
    /// Returns the heap vector; a no-op when already promoted.
    fn promote(&mut self, capacity: usize) -> &mut Vec<T> {
        if let Storage::Inline { buf, len } = &mut self.storage {
            debug_assert!(*len <= N);
            let mut heap = Vec::with_capacity(capacity.max(*len));
            heap.extend(buf[..*len].iter_mut().map(mem::take));
            self.storage = Storage::Heap(heap);
        }
        match &mut self.storage {
            Storage::Heap(heap) => heap,
            Storage::Inline { .. } => unreachable!("storage promoted above"),
        }
    }
}

impl<T: Default, const N: usize> Default for HybridSequence<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

// ── Slice access ──────────────────────────────────────────────────────────────

impl<T, const N: usize> Deref for HybridSequence<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for HybridSequence<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for HybridSequence<T, N> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for HybridSequence<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a HybridSequence<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut HybridSequence<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for HybridSequence<T, N> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T: Default, const N: usize> FromIterator<T> for HybridSequence<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.append(iter);
        seq
    }
}

impl<T: Default, const N: usize> Extend<T> for HybridSequence<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<T: Default + Clone, const N: usize> From<&[T]> for HybridSequence<T, N> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

// ── Comparison ────────────────────────────────────────────────────────────────
//
// Only the logical contents take part; the inline capacity and storage mode
// do not.

impl<T, const N1: usize, const N2: usize> PartialEq<HybridSequence<T, N2>> for HybridSequence<T, N1>
where
    T: PartialEq,
{
    fn eq(&self, other: &HybridSequence<T, N2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for HybridSequence<T, N> {}

impl<T, const N1: usize, const N2: usize> PartialOrd<HybridSequence<T, N2>> for HybridSequence<T, N1>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &HybridSequence<T, N2>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, const N: usize> Ord for HybridSequence<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, const N: usize> Hash for HybridSequence<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for HybridSequence<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
