use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use crate::editable_binary_heap::{BinaryHeap, HeapIndex};
use crate::mediator::{Mediator, MediatorIndex};
use crate::priority::Priority;
use crate::priority_queue::{PriorityQueue, PriorityQueueError};

/// A priority queue over unique items with externally supplied priorities.
///
/// The queue is a min-queue or a max-queue, chosen once in constructor.
/// Min-queue returns item with the smallest priority first, max-queue the biggest.
///
/// It is logic error if item values change somehow while in queue.
/// This changes normally possible only through `Cell`, `RefCell`, global state, IO, or unsafe code.
///
/// Priorities are compared with `<` only. `NaN` priorities are accepted
/// but the order of extraction is unspecified after any of them was added.
///
/// # Examples
///
/// ## Main example
/// ```
/// use indexed_priority_queue::{IndexedBinaryHeap, PriorityQueueError};
///
/// let mut queue = IndexedBinaryHeap::new(false);
///
/// // Currently queue is empty
/// assert_eq!(queue.get(), Err(PriorityQueueError::EmptyQueue));
///
/// queue.add("Second", 2.0).unwrap();
/// queue.add("Fourth", 4.0).unwrap();
/// queue.add("First", 1.0).unwrap();
/// queue.add("Third", 3.0).unwrap();
///
/// // Items are unique
/// assert_eq!(queue.add("First", 0.5), Err(PriorityQueueError::DuplicateItem));
///
/// // Get returns reference to the most important item
/// assert_eq!(queue.get(), Ok(&"First"));
/// assert_eq!(queue.size(), 4);
///
/// assert_eq!(queue.remove(), Ok("First"));
/// // We can make item more important
/// queue.change_priority(&"Fourth", 0.0).unwrap();
/// assert_eq!(queue.remove(), Ok("Fourth"));
/// // Or less important
/// queue.change_priority(&"Second", 10.0).unwrap();
/// assert_eq!(queue.remove(), Ok("Third"));
/// assert_eq!(queue.remove(), Ok("Second"));
/// assert_eq!(queue.remove(), Err(PriorityQueueError::EmptyQueue));
/// ```
///
/// ## Max queue
/// ```
/// use indexed_priority_queue::IndexedBinaryHeap;
///
/// let mut queue = IndexedBinaryHeap::new(true);
/// queue.add('a', 1.0).unwrap();
/// queue.add('b', 5.0).unwrap();
/// queue.add('c', 3.0).unwrap();
/// assert_eq!(queue.remove(), Ok('b'));
/// assert_eq!(queue.remove(), Ok('c'));
/// assert_eq!(queue.remove(), Ok('a'));
/// ```
#[derive(Clone)]
pub struct IndexedBinaryHeap<TItem, TPriority, S = RandomState>
where
    TItem: Hash + Eq,
    TPriority: Priority,
    S: BuildHasher,
{
    heap: BinaryHeap<TPriority>,
    key_to_pos: Mediator<TItem, S>,
    is_max: bool,
}

impl<TItem: Hash + Eq, TPriority: Priority> IndexedBinaryHeap<TItem, TPriority, RandomState> {
    /// Creates an empty queue.
    /// If `is_max` is true, the queue returns item with the biggest priority first.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedBinaryHeap;
    /// let mut queue = IndexedBinaryHeap::new(false);
    /// queue.add("Item", 4.0).unwrap();
    /// ```
    #[inline]
    pub fn new(is_max: bool) -> Self {
        Self::with_capacity_and_hasher(is_max, 0, RandomState::default())
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedBinaryHeap;
    /// let mut queue = IndexedBinaryHeap::with_capacity(false, 10);
    /// queue.add("Item", 4.0).unwrap();
    /// ```
    #[inline]
    pub fn with_capacity(is_max: bool, capacity: usize) -> Self {
        Self::with_capacity_and_hasher(is_max, capacity, RandomState::default())
    }
}

impl<TItem: Hash + Eq, TPriority: Priority, S: BuildHasher> IndexedBinaryHeap<TItem, TPriority, S> {
    /// Creates an empty queue with specific Hasher
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedBinaryHeap;
    /// use std::collections::hash_map::RandomState;
    /// let mut queue = IndexedBinaryHeap::with_hasher(false, RandomState::default());
    /// queue.add("Item", 4.0).unwrap();
    /// ```
    #[inline]
    pub fn with_hasher(is_max: bool, hasher: S) -> Self {
        Self::with_capacity_and_hasher(is_max, 0, hasher)
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    /// Also useful when Hasher cannot be defaulted.
    #[inline]
    pub fn with_capacity_and_hasher(is_max: bool, capacity: usize, hasher: S) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            key_to_pos: Mediator::with_capacity_and_hasher(capacity, hasher),
            is_max,
        }
    }

    /// Reserves space for at least `additional` new elements.
    ///
    /// ### Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.key_to_pos.reserve(additional);
    }

    /// Returns true if the queue returns the biggest priority first.
    #[inline]
    pub fn is_max(&self) -> bool {
        self.is_max
    }

    /// Adds new item to queue.
    /// Returns [`PriorityQueueError::DuplicateItem`] and keeps queue unchanged
    /// if item is already present.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::{IndexedBinaryHeap, PriorityQueueError};
    /// let mut queue = IndexedBinaryHeap::new(false);
    /// assert_eq!(queue.add("First", 5.0), Ok(()));
    /// assert_eq!(queue.add("First", 1.0), Err(PriorityQueueError::DuplicateItem));
    /// assert_eq!(queue.size(), 1);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Average complexity is ***O(log n)***
    ///
    /// The worst case is when reallocation appears.
    /// In this case complexity of single call is ***O(n)***.
    ///
    /// [`PriorityQueueError::DuplicateItem`]: enum.PriorityQueueError.html#variant.DuplicateItem
    pub fn add(&mut self, item: TItem, priority: TPriority) -> Result<(), PriorityQueueError> {
        let priority = self.signed(priority);

        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        let mediator_index = key_to_pos
            .insert_new(item, heap.len())
            .ok_or(PriorityQueueError::DuplicateItem)?;
        heap.push(mediator_index, priority, |index, heap_idx| {
            *key_to_pos.get_index_mut(index) = heap_idx
        });
        Ok(())
    }

    /// Returns true if queue holds the item.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedBinaryHeap;
    /// let mut queue = IndexedBinaryHeap::new(false);
    /// queue.add(String::from("Present"), 1.0).unwrap();
    /// assert!(queue.contains("Present"));
    /// assert!(!queue.contains("Missing"));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map key lookup).
    #[inline]
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        TItem: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_pos.contains_key(item)
    }

    /// Get reference to the most prioritized item.
    /// Returns [`PriorityQueueError::EmptyQueue`] if there are no items.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    ///
    /// [`PriorityQueueError::EmptyQueue`]: enum.PriorityQueueError.html#variant.EmptyQueue
    pub fn get(&self) -> Result<&TItem, PriorityQueueError> {
        let (first_idx, _) = self
            .heap
            .look_into(HeapIndex::ROOT)
            .ok_or(PriorityQueueError::EmptyQueue)?;
        let (item, _) = self.key_to_pos.get_index(first_idx);
        Ok(item)
    }

    /// Remove and return the most prioritized item.
    /// Returns [`PriorityQueueError::EmptyQueue`] if there are no items.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::{IndexedBinaryHeap, PriorityQueueError};
    /// let mut queue: IndexedBinaryHeap<i32, f64> = (0..3).map(|x| (x, x as f64)).collect();
    /// assert_eq!(queue.remove(), Ok(0));
    /// assert_eq!(queue.remove(), Ok(1));
    /// assert_eq!(queue.remove(), Ok(2));
    /// assert_eq!(queue.remove(), Err(PriorityQueueError::EmptyQueue));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Cost of remove is always ***O(log n)***
    ///
    /// [`PriorityQueueError::EmptyQueue`]: enum.PriorityQueueError.html#variant.EmptyQueue
    pub fn remove(&mut self) -> Result<TItem, PriorityQueueError> {
        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        let (removed_idx, _) = heap
            .pop(|index, heap_idx| *key_to_pos.get_index_mut(index) = heap_idx)
            .ok_or(PriorityQueueError::EmptyQueue)?;

        // Last map entry takes place of removed one, so its slot must learn new position.
        let (removed_item, _) = key_to_pos.swap_remove_index(removed_idx);
        if MediatorIndex(key_to_pos.len()) != removed_idx {
            let (_, heap_idx_of_moved) = key_to_pos.get_index(removed_idx);
            heap.change_outer_pos(removed_idx, heap_idx_of_moved);
        }

        Ok(removed_item)
    }

    /// Get the number of items in queue.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn size(&self) -> usize {
        debug_assert_eq!(self.key_to_pos.len(), self.heap.usize_len());
        self.key_to_pos.len()
    }

    /// Returns true if queue is empty.
    ///
    /// ```
    /// let mut queue = indexed_priority_queue::IndexedBinaryHeap::new(false);
    /// assert!(queue.is_empty());
    /// queue.add(0, 5.0).unwrap();
    /// assert!(!queue.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.heap.is_empty(), self.key_to_pos.is_empty());
        self.key_to_pos.is_empty()
    }

    /// Set new priority for existing item and reorder the queue.
    /// New priority may be both bigger and smaller than the old one.
    /// Returns [`PriorityQueueError::UnknownItem`] if queue doesn't hold the item.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::{IndexedBinaryHeap, PriorityQueueError};
    /// let mut queue: IndexedBinaryHeap<&str, f64> = [("first", 0.0), ("second", 1.0), ("third", 2.0)]
    ///                             .iter().cloned().collect();
    /// assert_eq!(queue.change_priority(&"third", -1.0), Ok(()));
    /// assert_eq!(queue.get(), Ok(&"third"));
    /// assert_eq!(queue.change_priority(&"Missing", 5.0), Err(PriorityQueueError::UnknownItem));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// In best case ***O(1)***, in average costs ***O(log n)***.
    ///
    /// [`PriorityQueueError::UnknownItem`]: enum.PriorityQueueError.html#variant.UnknownItem
    pub fn change_priority<Q>(
        &mut self,
        item: &Q,
        priority: TPriority,
    ) -> Result<(), PriorityQueueError>
    where
        TItem: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let priority = self.signed(priority);
        let heap_idx = match self.key_to_pos.get_full(item) {
            None => return Err(PriorityQueueError::UnknownItem),
            Some((_, _, heap_idx)) => heap_idx,
        };

        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;
        heap.change_priority(heap_idx, priority, |index, heap_idx| {
            *key_to_pos.get_index_mut(index) = heap_idx
        });
        Ok(())
    }

    /// Make the queue empty. Polarity is kept.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(n)***
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
        self.key_to_pos.clear();
    }

    // Max-queue is stored as min-queue of negated priorities.
    #[inline(always)]
    fn signed(&self, priority: TPriority) -> TPriority {
        if self.is_max {
            -priority
        } else {
            priority
        }
    }
}

impl<TItem, TPriority, S> PriorityQueue<TItem, TPriority> for IndexedBinaryHeap<TItem, TPriority, S>
where
    TItem: Hash + Eq,
    TPriority: Priority,
    S: BuildHasher,
{
    #[inline]
    fn add(&mut self, item: TItem, priority: TPriority) -> Result<(), PriorityQueueError> {
        IndexedBinaryHeap::add(self, item, priority)
    }

    #[inline]
    fn contains(&self, item: &TItem) -> bool {
        IndexedBinaryHeap::contains(self, item)
    }

    #[inline]
    fn get(&self) -> Result<&TItem, PriorityQueueError> {
        IndexedBinaryHeap::get(self)
    }

    #[inline]
    fn remove(&mut self) -> Result<TItem, PriorityQueueError> {
        IndexedBinaryHeap::remove(self)
    }

    #[inline]
    fn size(&self) -> usize {
        IndexedBinaryHeap::size(self)
    }

    #[inline]
    fn change_priority(
        &mut self,
        item: &TItem,
        priority: TPriority,
    ) -> Result<(), PriorityQueueError> {
        IndexedBinaryHeap::change_priority(self, item, priority)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        IndexedBinaryHeap::is_empty(self)
    }
}

impl<TItem: Hash + Eq + Debug, TPriority: Priority, S: BuildHasher> Debug
    for IndexedBinaryHeap<TItem, TPriority, S>
{
    /// Lists items in heap array order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.debug_list()
            .entries(
                self.heap
                    .iter()
                    .map(|(index, _)| self.key_to_pos.get_index(index).0),
            )
            .finish()
    }
}

impl<TItem: Hash + Eq, TPriority: Priority, S: BuildHasher + Default> Default
    for IndexedBinaryHeap<TItem, TPriority, S>
{
    /// Creates an empty min-queue.
    #[inline]
    fn default() -> Self {
        Self::with_capacity_and_hasher(false, 0, S::default())
    }
}

impl<TItem: Hash + Eq, TPriority: Priority, S: BuildHasher> Extend<(TItem, TPriority)>
    for IndexedBinaryHeap<TItem, TPriority, S>
{
    /// Adds all pairs to queue.
    /// Pairs with items that are already present are skipped.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedBinaryHeap;
    /// let mut queue = IndexedBinaryHeap::new(true);
    /// queue.extend(vec![("a", 1.0), ("b", 2.0), ("a", 3.0)]);
    /// assert_eq!(queue.size(), 2);
    /// assert_eq!(queue.remove(), Ok("b"));
    /// ```
    fn extend<T: IntoIterator<Item = (TItem, TPriority)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (item, priority) in iter {
            let _ = self.add(item, priority);
        }
    }
}

impl<TItem: Hash + Eq, TPriority: Priority, S: BuildHasher + Default> FromIterator<(TItem, TPriority)>
    for IndexedBinaryHeap<TItem, TPriority, S>
{
    /// Allows building min-queue from iterator using `collect()`.
    /// First occurrence of every item wins, later duplicates are skipped.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedBinaryHeap;
    /// let mut queue: IndexedBinaryHeap<&str, f64> =
    /// [("first", 0.0), ("second", 1.0), ("third", 2.0), ("first", 5.0)]
    ///                             .iter().cloned().collect();
    /// assert_eq!(queue.remove(), Ok("first"));
    /// assert_eq!(queue.remove(), Ok("second"));
    /// assert_eq!(queue.remove(), Ok("third"));
    /// assert!(queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** in average.
    fn from_iter<T: IntoIterator<Item = (TItem, TPriority)>>(iter: T) -> Self {
        let mut queue = Self::default();
        queue.extend(iter);
        queue
    }
}

impl<TItem: Hash + Eq, TPriority: Priority, S: BuildHasher> IntoIterator
    for IndexedBinaryHeap<TItem, TPriority, S>
{
    type Item = TItem;
    type IntoIter = IndexedBinaryHeapIterator<TItem, TPriority, S>;

    /// Make iterator that return items in the same order as repeated [`remove`] calls.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedBinaryHeap;
    /// let mut queue = IndexedBinaryHeap::new(true);
    /// queue.extend([("first", 0.0), ("second", 1.0), ("third", 2.0)].iter().cloned());
    /// let mut iterator = queue.into_iter();
    /// assert_eq!(iterator.next(), Some("third"));
    /// assert_eq!(iterator.next(), Some("second"));
    /// assert_eq!(iterator.next(), Some("first"));
    /// assert_eq!(iterator.next(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** for iteration.
    ///
    /// [`remove`]: struct.IndexedBinaryHeap.html#method.remove
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

/// This is consuming iterator that returns items in priority order
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct IndexedBinaryHeapIterator<TItem, TPriority, S = RandomState>
where
    TItem: Hash + Eq,
    TPriority: Priority,
    S: BuildHasher,
{
    queue: IndexedBinaryHeap<TItem, TPriority, S>,
}

impl<TItem: Hash + Eq, TPriority: Priority, S: BuildHasher> Iterator
    for IndexedBinaryHeapIterator<TItem, TPriority, S>
{
    type Item = TItem;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.remove().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.size(), Some(self.queue.size()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.queue.size()
    }
}

#[cfg(test)]
mod tests {
    use super::IndexedBinaryHeap;
    use crate::priority_queue::{PriorityQueue, PriorityQueueError};
    use std::collections::HashSet;
    use std::hash::{BuildHasher, Hash};

    // Checks lockstep of map and heap and the heap order
    fn assert_consistent<TItem: Hash + Eq, S: BuildHasher>(queue: &IndexedBinaryHeap<TItem, f64, S>) {
        assert_eq!(queue.key_to_pos.len(), queue.heap.usize_len());
        for (mediator_idx, _, heap_idx) in queue.key_to_pos.iter() {
            let (outer_pos, _) = queue.heap.look_into(heap_idx).expect("Slot must exist");
            assert_eq!(outer_pos, mediator_idx);
        }
        let priorities: Vec<f64> = queue.heap.iter().map(|(_, &p)| p).collect();
        for i in 1..priorities.len() {
            let (parent, child) = (priorities[(i - 1) / 2], priorities[i]);
            // NaN compares false both ways, so it has no place in heap order
            if parent.is_nan() || child.is_nan() {
                continue;
            }
            assert!(
                parent <= child,
                "Heap order violated at {}",
                i
            );
        }
    }

    #[test]
    fn test_priority() {
        let mut items = [1, 4, 5, 2, 3];
        let mut queue = IndexedBinaryHeap::<i32, f64>::with_capacity(false, items.len());
        for (i, &x) in items.iter().enumerate() {
            queue.add(x, x as f64).unwrap();
            assert_eq!(queue.size(), i + 1);
            assert_consistent(&queue);
        }
        items.sort_unstable();
        for &x in items.iter() {
            assert_eq!(queue.remove(), Ok(x));
            assert_consistent(&queue);
        }
        assert_eq!(queue.remove(), Err(PriorityQueueError::EmptyQueue));
    }

    #[test]
    fn test_max_priority() {
        let mut items = [1, 4, 5, 2, 3];
        let mut queue = IndexedBinaryHeap::<i32, f64>::new(true);
        assert!(queue.is_max());
        for &x in items.iter() {
            queue.add(x, x as f64).unwrap();
        }
        items.sort_unstable_by_key(|&x| -x);
        for &x in items.iter() {
            assert_eq!(queue.get(), Ok(&x));
            assert_eq!(queue.remove(), Ok(x));
        }
        assert_eq!(queue.get(), Err(PriorityQueueError::EmptyQueue));
    }

    #[test]
    fn test_get_does_not_remove() {
        let mut queue = IndexedBinaryHeap::new(false);
        queue.add("only", 1.0).unwrap();
        assert_eq!(queue.get(), Ok(&"only"));
        assert_eq!(queue.get(), Ok(&"only"));
        assert_eq!(queue.size(), 1);
    }

    #[test]
    fn test_duplicate_keeps_queue() {
        let mut queue = IndexedBinaryHeap::new(false);
        queue.add(1, 5.0).unwrap();
        queue.add(2, 1.0).unwrap();
        assert_eq!(queue.add(1, 0.0), Err(PriorityQueueError::DuplicateItem));
        assert_eq!(queue.size(), 2);
        assert_consistent(&queue);
        assert_eq!(queue.remove(), Ok(2));
        assert_eq!(queue.remove(), Ok(1));
    }

    #[test]
    fn test_contains_round_trip() {
        let mut queue = IndexedBinaryHeap::new(false);
        assert!(!queue.contains(&7));
        queue.add(7, 1.0).unwrap();
        assert!(queue.contains(&7));
        assert_eq!(queue.remove(), Ok(7));
        assert!(!queue.contains(&7));
    }

    #[test]
    fn test_change_priority_scenario() {
        let mut queue = IndexedBinaryHeap::new(false);
        queue.add(1, 5.0).unwrap();
        queue.add(2, 1.0).unwrap();
        queue.add(3, 9.0).unwrap();
        queue.change_priority(&1, 0.0).unwrap();
        assert_consistent(&queue);
        assert_eq!(queue.remove(), Ok(1));
        assert_eq!(queue.remove(), Ok(2));
        assert_eq!(queue.remove(), Ok(3));
        assert_eq!(queue.remove(), Err(PriorityQueueError::EmptyQueue));
    }

    #[test]
    fn test_change_priority() {
        let items = [
            ("first", 1.0),
            ("second", 2.0),
            ("third", 3.0),
            ("fourth", 4.0),
            ("fifth", 5.0),
        ];

        let mut queue: IndexedBinaryHeap<&str, f64> = items.iter().cloned().collect();
        assert_eq!(
            queue.change_priority(&"HELLO", 64.0),
            Err(PriorityQueueError::UnknownItem)
        );
        assert_eq!(queue.size(), items.len());

        queue.change_priority(&"fifth", -10.0).unwrap();
        assert_consistent(&queue);
        assert_eq!(queue.get(), Ok(&"fifth"));

        queue.change_priority(&"fifth", 10.0).unwrap();
        queue.change_priority(&"first", 3.5).unwrap();
        assert_consistent(&queue);
        let order: Vec<_> = queue.into_iter().collect();
        assert_eq!(order, ["second", "third", "first", "fourth", "fifth"]);
    }

    #[test]
    fn test_change_priority_max_queue() {
        let mut queue = IndexedBinaryHeap::new(true);
        queue.add("low", 1.0).unwrap();
        queue.add("high", 10.0).unwrap();
        queue.change_priority(&"low", 100.0).unwrap();
        assert_eq!(queue.remove(), Ok("low"));
        queue.add("lower", -1.0).unwrap();
        queue.change_priority(&"high", -5.0).unwrap();
        assert_eq!(queue.remove(), Ok("lower"));
        assert_eq!(queue.remove(), Ok("high"));
    }

    #[test]
    fn test_change_and_remove_tree() {
        let mut queue = IndexedBinaryHeap::new(false);

        queue.add(0, 300.0).unwrap();
        queue.add(1, 500.0).unwrap();
        queue.add(2, 400.0).unwrap();
        queue.add(3, 400.0).unwrap();
        queue.add(4, 600.0).unwrap();
        queue.add(5, 100.0).unwrap();
        queue.add(6, 200.0).unwrap();
        queue.change_priority(&1, 700.0).unwrap();
        queue.change_priority(&4, 50.0).unwrap();

        let mut list = Vec::new();
        while let Ok(item) = queue.remove() {
            assert_consistent(&queue);
            list.push(item);
        }

        assert_eq!(list[..3], [4, 5, 6]);
        assert_eq!(list[list.len() - 1], 1);
    }

    #[test]
    fn test_borrow_items() {
        let mut queue: IndexedBinaryHeap<String, f64> = IndexedBinaryHeap::new(false);
        queue.add("Hello".to_string(), 5.0).unwrap();
        let string = "Hello".to_string();
        let string_ref: &String = &string;
        let str_ref: &str = &string;
        assert!(queue.contains(string_ref));
        assert!(queue.contains(str_ref));
        assert_eq!(queue.change_priority(str_ref, 1.0), Ok(()));
    }

    #[test]
    fn test_not_clone_works() {
        #[derive(Hash, PartialEq, Eq, Debug)]
        struct Item(u32);

        let vals = [0u32, 1, 2, 4, 5];
        let mut queue: IndexedBinaryHeap<Item, f32> =
            vals.iter().copied().map(|v| (Item(v), v as f32)).collect();
        queue.change_priority(&Item(4), -1.0).unwrap();
        let mut res = Vec::with_capacity(5);
        while let Ok(Item(v)) = queue.remove() {
            res.push(v);
        }
        assert_eq!(&res, &[4, 0, 1, 2, 5]);
    }

    #[test]
    fn test_clear_keeps_polarity() {
        let mut queue: IndexedBinaryHeap<i32, f64> = IndexedBinaryHeap::new(true);
        queue.extend((0..5).map(|x| (x, x as f64)));
        assert!(!queue.is_empty());
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.size(), 0);
        assert_eq!(queue.remove(), Err(PriorityQueueError::EmptyQueue));
        queue.add(1, 1.0).unwrap();
        queue.add(2, 2.0).unwrap();
        assert_eq!(queue.remove(), Ok(2));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut queue: IndexedBinaryHeap<i32, f64> = (0..4).map(|x| (x, x as f64)).collect();
        let copy = queue.clone();
        assert_eq!(queue.remove(), Ok(0));
        assert_eq!(copy.size(), 4);
        assert_eq!(copy.get(), Ok(&0));
        assert_consistent(&copy);
    }

    #[test]
    fn test_infinite_priorities() {
        let mut queue = IndexedBinaryHeap::new(false);
        queue.add("pos", f64::INFINITY).unwrap();
        queue.add("neg", f64::NEG_INFINITY).unwrap();
        queue.add("zero", 0.0).unwrap();
        assert_eq!(queue.remove(), Ok("neg"));
        assert_eq!(queue.remove(), Ok("zero"));
        assert_eq!(queue.remove(), Ok("pos"));
    }

    #[test]
    fn test_nan_priorities_accepted() {
        let mut queue = IndexedBinaryHeap::new(false);
        for i in 0..50u32 {
            let priority = if i % 5 == 0 { f64::NAN } else { ((i * 37) % 23) as f64 };
            queue.add(i, priority).unwrap();
            assert_consistent(&queue);
        }
        for i in (0..50u32).step_by(3) {
            let priority = if i % 2 == 0 { f64::NAN } else { -(i as f64) };
            queue.change_priority(&i, priority).unwrap();
            assert_consistent(&queue);
        }
        // Back from NaN to ordinary numbers
        for i in (0..50u32).step_by(10) {
            queue.change_priority(&i, i as f64).unwrap();
            assert_consistent(&queue);
        }
        assert_eq!(queue.size(), 50);

        let mut seen = HashSet::new();
        while let Ok(item) = queue.remove() {
            assert!(seen.insert(item), "{} came out twice", item);
            assert!(!queue.contains(&item));
            assert_eq!(queue.size(), 50 - seen.len());
            assert_consistent(&queue);
        }
        assert_eq!(seen.len(), 50);
        assert_eq!(queue.remove(), Err(PriorityQueueError::EmptyQueue));
    }

    #[test]
    fn test_many_operations_stay_consistent() {
        let mut queue = IndexedBinaryHeap::new(false);
        for i in 0..200u32 {
            queue.add(i, ((i * 7919) % 211) as f64).unwrap();
        }
        assert_consistent(&queue);
        for i in (0..200u32).step_by(3) {
            queue.change_priority(&i, ((i * 31) % 97) as f64 - 50.0).unwrap();
            assert_consistent(&queue);
        }
        let mut last = f64::NEG_INFINITY;
        while let Ok(&item) = queue.get() {
            let position = queue.key_to_pos.get_full(&item).unwrap().2;
            let priority = *queue.heap.look_into(position).unwrap().1;
            assert!(last <= priority);
            last = priority;
            assert_eq!(queue.remove(), Ok(item));
            assert_consistent(&queue);
        }
    }

    #[test]
    fn test_trait_object() {
        let mut queue: IndexedBinaryHeap<i32, f64> = IndexedBinaryHeap::new(false);
        {
            let dynamic: &mut dyn PriorityQueue<i32, f64> = &mut queue;
            assert!(dynamic.is_empty());
            dynamic.add(3, 3.0).unwrap();
            dynamic.add(1, 1.0).unwrap();
            assert!(dynamic.contains(&3));
            assert_eq!(dynamic.change_priority(&2, 0.0), Err(PriorityQueueError::UnknownItem));
            assert_eq!(dynamic.get(), Ok(&1));
            assert_eq!(dynamic.size(), 2);
        }
        assert_eq!(queue.remove(), Ok(1));
    }

    #[test]
    fn test_iterator_size_hint() {
        let queue: IndexedBinaryHeap<i32, f64> = (0..5).map(|x| (x, x as f64)).collect();
        let mut iter = queue.into_iter();
        assert_eq!(iter.size_hint(), (5, Some(5)));
        iter.next();
        assert_eq!(iter.count(), 4);
    }

    #[test]
    fn test_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<IndexedBinaryHeap<i32, f64>>();
    }

    #[test]
    fn test_send() {
        fn assert_send<T: Send>() {}
        assert_send::<IndexedBinaryHeap<i32, f64>>();
    }

    #[test]
    fn test_fmt() {
        let items = [
            ("first", 1.0),
            ("second", 2.0),
            ("third", 3.0),
            ("fourth", 4.0),
            ("fifth", 5.0),
        ];

        let queue: IndexedBinaryHeap<&str, f64> = items.iter().cloned().collect();

        assert_eq!(
            format!("{:?}", queue),
            "[\"first\", \"second\", \"third\", \"fourth\", \"fifth\"]"
        );
    }
}
