use std::fmt::Display;

/// Common interface of extrinsic priority queues.
///
/// Items are unique and their priorities are supplied separately.
/// A queue is either a min-queue or a max-queue for its whole life;
/// [`get`] and [`remove`] return the item with the smallest or the biggest priority accordingly.
///
/// The trait is object safe, so different implementations can be driven
/// by the same code through `&mut dyn PriorityQueue<_, _>`.
///
/// ```
/// use indexed_priority_queue::{IndexedBinaryHeap, PriorityQueue, ReferencePriorityQueue};
///
/// fn drain(queue: &mut dyn PriorityQueue<&'static str, f64>) -> Vec<&'static str> {
///     let mut res = Vec::new();
///     while let Ok(item) = queue.remove() {
///         res.push(item);
///     }
///     res
/// }
///
/// fn fill(queue: &mut dyn PriorityQueue<&'static str, f64>) {
///     queue.add("late", 3.0).unwrap();
///     queue.add("early", 1.0).unwrap();
///     queue.add("middle", 2.0).unwrap();
/// }
///
/// let mut heap: IndexedBinaryHeap<&str, f64> = IndexedBinaryHeap::new(false);
/// let mut reference: ReferencePriorityQueue<&str, f64> = ReferencePriorityQueue::new(false);
/// fill(&mut heap);
/// fill(&mut reference);
/// assert_eq!(drain(&mut heap), ["early", "middle", "late"]);
/// assert_eq!(drain(&mut reference), ["early", "middle", "late"]);
/// ```
///
/// [`get`]: trait.PriorityQueue.html#tymethod.get
/// [`remove`]: trait.PriorityQueue.html#tymethod.remove
pub trait PriorityQueue<TItem, TPriority> {
    /// Adds item with given priority.
    ///
    /// Fails with [`PriorityQueueError::DuplicateItem`] if item is already present;
    /// queue is not modified in this case.
    fn add(&mut self, item: TItem, priority: TPriority) -> Result<(), PriorityQueueError>;

    /// Returns true if queue holds the item.
    fn contains(&self, item: &TItem) -> bool;

    /// Returns reference to the most prioritized item without removing it.
    ///
    /// Fails with [`PriorityQueueError::EmptyQueue`] if queue has no items.
    fn get(&self) -> Result<&TItem, PriorityQueueError>;

    /// Removes and returns the most prioritized item.
    ///
    /// Fails with [`PriorityQueueError::EmptyQueue`] if queue has no items.
    fn remove(&mut self) -> Result<TItem, PriorityQueueError>;

    /// Number of items in queue.
    fn size(&self) -> usize;

    /// Replaces priority of present item.
    ///
    /// Fails with [`PriorityQueueError::UnknownItem`] if queue doesn't hold the item.
    fn change_priority(&mut self, item: &TItem, priority: TPriority)
        -> Result<(), PriorityQueueError>;

    /// Returns true if queue has no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Precondition violations reported by [`PriorityQueue`] operations.
///
/// Operation that returns an error leaves the queue unchanged.
///
/// [`PriorityQueue`]: trait.PriorityQueue.html
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum PriorityQueueError {
    /// `add` was called with an item that is already in the queue.
    DuplicateItem,
    /// `get` or `remove` was called on an empty queue.
    EmptyQueue,
    /// `change_priority` was called with an item that is not in the queue.
    UnknownItem,
}

impl Display for PriorityQueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            PriorityQueueError::DuplicateItem => write!(f, "Item is already present in queue"),
            PriorityQueueError::EmptyQueue => write!(f, "Queue is empty"),
            PriorityQueueError::UnknownItem => write!(f, "Item not found in queue"),
        }
    }
}

impl std::error::Error for PriorityQueueError {}
