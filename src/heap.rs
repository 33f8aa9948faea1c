//! Fixed-capacity binary min-heap used during tree construction.

/// A `Vec`-backed binary min-heap whose capacity is fixed at construction.
///
/// Tree construction pushes at most one leaf per distinct byte value and
/// replaces two popped nodes with one merged node per step, so the live size
/// never exceeds the 256-symbol alphabet. A push beyond the fixed capacity is
/// ignored rather than reallocating.
#[derive(Debug)]
pub(crate) struct BoundedMinHeap<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Ord> BoundedMinHeap<T> {
    /// Create an empty heap holding at most `capacity` items.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of items currently in the heap.
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Insert an item, sifting up to restore the heap invariant.
    ///
    /// Ignored when the heap is already at capacity.
    pub(crate) fn push(&mut self, item: T) {
        if self.items.len() >= self.capacity {
            return;
        }
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the minimum item, or `None` when empty.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        min
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.items[parent] <= self.items[idx] {
                break;
            }
            self.items.swap(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < self.items.len() && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < self.items.len() && self.items[right] < self.items[smallest] {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.items.swap(idx, smallest);
            idx = smallest;
        }
    }
}
