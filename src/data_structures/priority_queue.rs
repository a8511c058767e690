use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::ops::Index;

use crate::{Error, Result};

/// A queue that always hands out its greatest element first
pub trait PriorityQueue<T> {
    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element
    fn push(&mut self, item: T);

    /// Removes and returns the greatest element, failing with
    /// [`Error::EmptyCollection`] if there is none
    fn pop(&mut self) -> Result<T>;

    /// Returns the greatest element without removing it
    fn peek(&self) -> Result<&T>;
}

/// Comparer used by [`BinaryHeap::new`]: the element type's own total order
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// Array-backed binary max-heap ordered by a caller supplied comparer.
///
/// The root sits at index 0 and the children of index `i` at `2i + 1` and
/// `2i + 2`. Inverting the comparer turns it into a min-heap.
pub struct BinaryHeap<T, F = NaturalOrder<T>> {
    /// Heap-ordered storage
    items: Vec<T>,

    /// Total order over the elements
    compare: F,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty max-heap using the natural order of `T`
    pub fn new() -> Self {
        BinaryHeap::with_comparer(<T as Ord>::cmp as NaturalOrder<T>)
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> BinaryHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by `compare`
    pub fn with_comparer(compare: F) -> Self {
        BinaryHeap {
            items: Vec::new(),
            compare,
        }
    }

    /// Builds a heap out of arbitrary elements in O(n)
    pub fn from_vec(mut items: Vec<T>, compare: F) -> Self {
        heapify_down(&mut items, &compare);
        BinaryHeap { items, compare }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index` in heap layout
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Elements in heap layout, root first
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Consumes the heap, returning its storage in heap layout
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Appends `item` and sifts it up toward the root
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        let last = self.items.len() - 1;
        sift_up(&mut self.items, 0, last, &self.compare);
    }

    /// Removes the root, moves the last element into its place and sifts it down
    pub fn pop(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let root = self.items.swap_remove(0);
        let len = self.items.len();
        sift_down(&mut self.items, 0, len, &self.compare);
        Ok(root)
    }

    /// Returns the root without removing it
    pub fn peek(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyCollection)
    }
}

impl<T, F> PriorityQueue<T> for BinaryHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, item: T) {
        BinaryHeap::push(self, item)
    }

    fn pop(&mut self) -> Result<T> {
        BinaryHeap::pop(self)
    }

    fn peek(&self) -> Result<&T> {
        BinaryHeap::peek(self)
    }
}

impl<T, F> Index<usize> for BinaryHeap<T, F> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T, F> IntoIterator for &'a BinaryHeap<T, F> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Debug, F> Debug for BinaryHeap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap").field("items", &self.items).finish()
    }
}

/// Index of the parent of `index`. `index` must be greater than zero.
#[inline]
pub fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

#[inline]
pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Repairs the heap rooted at `start` within `items[..end]`, assuming the
/// heaps rooted at its children are already valid.
///
/// At every level the larger child is chosen, with ties going to the left one.
pub fn sift_down<T, F>(items: &mut [T], start: usize, end: usize, compare: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut root = start;
    loop {
        let left = left_child(root);
        if left >= end {
            return;
        }

        let mut largest = root;
        if compare(&items[largest], &items[left]) == Ordering::Less {
            largest = left;
        }
        let right = right_child(root);
        if right < end && compare(&items[largest], &items[right]) == Ordering::Less {
            largest = right;
        }

        if largest == root {
            return;
        }
        items.swap(root, largest);
        root = largest;
    }
}

/// Moves the element at `index` up toward `start` while it compares greater
/// than its parent.
pub fn sift_up<T, F>(items: &mut [T], start: usize, index: usize, compare: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut child = index;
    while child > start {
        let up = parent(child);
        if up < start || compare(&items[up], &items[child]) != Ordering::Less {
            return;
        }
        items.swap(up, child);
        child = up;
    }
}

/// Puts `items` in heap order in place, sifting every parent down from the
/// last one to the root. O(n).
pub fn heapify_down<T, F>(items: &mut [T], compare: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }
    for start in (0..=parent(len - 1)).rev() {
        sift_down(items, start, len, compare);
    }
}

/// Puts `items` in heap order in place, sifting each element up as if it had
/// just been pushed. O(n log n).
pub fn heapify_up<T, F>(items: &mut [T], compare: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    for end in 1..items.len() {
        sift_up(items, 0, end, compare);
    }
}

/// Returns true if no element compares greater than its parent
pub fn is_heap<T, F>(items: &[T], compare: &F) -> bool
where
    F: Fn(&T, &T) -> Ordering,
{
    (1..items.len()).all(|i| compare(&items[parent(i)], &items[i]) != Ordering::Less)
}
