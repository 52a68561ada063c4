use std::fmt::Debug;
use std::vec::Vec;

use crate::mediator::MediatorIndex;
use crate::priority::Priority;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct HeapIndex(usize);

impl HeapIndex {
    pub(crate) const ROOT: HeapIndex = HeapIndex(0);

    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn new(v: usize) -> Self {
        Self(v)
    }
}

pub(crate) struct HeapEntry<TPriority> {
    outer_pos: MediatorIndex,
    priority: TPriority,
}

/// Min-heap: smaller priority is closer to the root.
///
/// Every slot keeps the position of its item in the outer storage.
/// Methods that move slots report each new position through `change_handler`,
/// so the outer storage can stay in lockstep with the heap.
pub(crate) struct BinaryHeap<TPriority> {
    data: Vec<HeapEntry<TPriority>>,
}

impl<TPriority: Priority> BinaryHeap<TPriority> {
    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Puts outer position and priority at the tail and lets it swim to its place.
    /// Time complexity - O(log n) swaps and change_handler calls
    #[inline(always)]
    pub(crate) fn push<TChangeHandler: std::ops::FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        outer_pos: MediatorIndex,
        priority: TPriority,
        change_handler: TChangeHandler,
    ) {
        self.data.push(HeapEntry {
            outer_pos,
            priority,
        });
        self.sift(HeapIndex(self.data.len() - 1), change_handler);
    }

    /// Removes the root and returns it.
    /// Time complexity - O(log n) swaps and change_handler calls
    pub(crate) fn pop<TChangeHandler: std::ops::FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        mut change_handler: TChangeHandler,
    ) -> Option<(MediatorIndex, TPriority)> {
        let last = self.data.len().checked_sub(1)?;
        if last > 0 {
            self.swap_items(0, last, &mut change_handler);
        }
        let result = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift(HeapIndex(0), change_handler);
        }
        Some((result.outer_pos, result.priority))
    }

    #[inline(always)]
    pub(crate) fn look_into(&self, position: HeapIndex) -> Option<(MediatorIndex, &TPriority)> {
        let entry = self.data.get(position.0)?;
        Some((entry.outer_pos, &entry.priority))
    }

    /// Overwrites priority in place and moves the slot
    /// towards the root or towards the leaves, whichever restores the heap.
    pub(crate) fn change_priority<TChangeHandler: std::ops::FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        updated: TPriority,
        change_handler: TChangeHandler,
    ) {
        if position >= self.len() {
            panic!("Out of index during changing priority");
        }

        self.data[position.0].priority = updated;
        self.sift(position, change_handler);
    }

    // Points slot to new outer position after the outer storage moved its entry
    pub(crate) fn change_outer_pos(&mut self, outer_pos: MediatorIndex, position: HeapIndex) {
        if position >= self.len() {
            panic!("Out of index during changing outer position");
        }

        self.data[position.0].outer_pos = outer_pos;
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> HeapIndex {
        HeapIndex(self.data.len())
    }

    #[inline(always)]
    pub(crate) fn usize_len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.data.clear()
    }

    #[inline(always)]
    pub(crate) fn iter(&self) -> BinaryHeapIterator<'_, TPriority> {
        BinaryHeapIterator {
            inner: self.data.iter(),
        }
    }

    // Only one direction can be violated after a single slot changed,
    // so follow the parent while it is bigger, otherwise the smaller child.
    // Missing relatives compare as +infinity.
    fn sift<TChangeHandler: std::ops::FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) {
        debug_assert!(position.0 < self.data.len(), "Out of index in sift");
        let mut position = position.0;
        loop {
            if position > 0 {
                let parent_pos = (position - 1) / 2;
                if self.data[position].priority < self.data[parent_pos].priority {
                    self.swap_items(position, parent_pos, &mut change_handler);
                    position = parent_pos;
                    continue;
                }
            }

            let min_child_idx = {
                let left = position * 2 + 1;
                let right = left + 1;
                if left >= self.data.len() {
                    break;
                }
                if right < self.data.len()
                    && self.data[right].priority < self.data[left].priority
                {
                    right
                } else {
                    left
                }
            };

            if self.data[min_child_idx].priority < self.data[position].priority {
                self.swap_items(position, min_child_idx, &mut change_handler);
                position = min_child_idx;
            } else {
                break;
            }
        }
    }

    #[inline(always)]
    fn swap_items<TChangeHandler: std::ops::FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        pos1: usize,
        pos2: usize,
        change_handler: &mut TChangeHandler,
    ) {
        debug_assert!(pos1 < self.data.len(), "Out of index in first pos in swap");
        debug_assert!(pos2 < self.data.len(), "Out of index in second pos in swap");
        self.data.swap(pos1, pos2);
        change_handler(self.data[pos1].outer_pos, HeapIndex(pos1));
        change_handler(self.data[pos2].outer_pos, HeapIndex(pos2));
    }
}

/// Walks slots in array order
pub(crate) struct BinaryHeapIterator<'a, TPriority> {
    inner: std::slice::Iter<'a, HeapEntry<TPriority>>,
}

impl<'a, TPriority> Iterator for BinaryHeapIterator<'a, TPriority> {
    type Item = (MediatorIndex, &'a TPriority);

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|x| (x.outer_pos, &x.priority))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline(always)]
    fn count(self) -> usize {
        self.inner.count()
    }
}

// Default implementations

impl<TPriority: Clone> Clone for HeapEntry<TPriority> {
    fn clone(&self) -> Self {
        Self {
            outer_pos: self.outer_pos,
            priority: self.priority.clone(),
        }
    }
}

impl<TPriority: Copy> Copy for HeapEntry<TPriority> {}

impl<TPriority: Debug> Debug for HeapEntry<TPriority> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "{{outer_pos: {:?}, priority: {:?}}}",
            &self.outer_pos, &self.priority
        )
    }
}

impl<TPriority: Clone> Clone for BinaryHeap<TPriority> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<TPriority: Debug> Debug for BinaryHeap<TPriority> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.data.fmt(f)
    }
}
