use crate::editable_binary_heap::HeapIndex;
use indexmap::map::{Entry as IMEntry, IndexMap};
use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

/// Wrapper around possible outer vec index
/// Used to avoid mux up with heap index
/// And to make sure that `Mediator` indexed only with MediatorIndex
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct MediatorIndex(pub(crate) usize);

/// This is wrapper over indexmap that uses `MediatorIndex` as index.
/// It maps every item to its current slot in the heap.
/// Also it centralized checking for panics
#[derive(Clone, Debug)]
pub(crate) struct Mediator<TItem: Hash + Eq, S: BuildHasher> {
    map: IndexMap<TItem, HeapIndex, S>,
}

#[inline(always)]
fn with_copied_heap_index<'a, T>((k, &i): (&'a T, &HeapIndex)) -> (&'a T, HeapIndex) {
    (k, i)
}

impl<TItem, S> Mediator<TItem, S>
where
    TItem: Hash + Eq,
    S: BuildHasher,
{
    #[inline(always)]
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            map: IndexMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.map.clear()
    }

    /// Registers new item at heap position.
    /// Returns `None` and leaves map untouched if item already present.
    #[inline(always)]
    pub(crate) fn insert_new(&mut self, item: TItem, heap_idx: HeapIndex) -> Option<MediatorIndex> {
        match self.map.entry(item) {
            IMEntry::Occupied(_) => None,
            IMEntry::Vacant(entry) => {
                let index = MediatorIndex(entry.index());
                entry.insert(heap_idx);
                Some(index)
            }
        }
    }

    #[inline(always)]
    pub(crate) fn get_index(&self, MediatorIndex(position): MediatorIndex) -> (&TItem, HeapIndex) {
        self.map
            .get_index(position)
            .map(with_copied_heap_index)
            .expect("All mediator indexes must be valid")
    }

    #[inline(always)]
    pub(crate) fn contains_key<Q>(&self, item: &Q) -> bool
    where
        TItem: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(item)
    }

    #[inline(always)]
    pub(crate) fn get_full<'a, Q>(
        &'a self,
        item: &Q,
    ) -> Option<(MediatorIndex, &'a TItem, HeapIndex)>
    where
        TItem: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map
            .get_full(item)
            .map(|(idx, item, &val)| (MediatorIndex(idx), item, val))
    }

    #[inline(always)]
    pub(crate) fn swap_remove_index(
        &mut self,
        MediatorIndex(index): MediatorIndex,
    ) -> (TItem, HeapIndex) {
        self.map
            .swap_remove_index(index)
            .expect("All mediator indexes must be valid")
    }

    #[inline(always)]
    pub(crate) fn get_index_mut(&mut self, MediatorIndex(index): MediatorIndex) -> &mut HeapIndex {
        self.map
            .get_index_mut(index)
            .expect("All mediator indexes must be valid")
            .1
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (MediatorIndex, &TItem, HeapIndex)> {
        self.map
            .iter()
            .map(with_copied_heap_index)
            .enumerate()
            .map(|(idx, (item, heap_idx))| (MediatorIndex(idx), item, heap_idx))
    }
}
