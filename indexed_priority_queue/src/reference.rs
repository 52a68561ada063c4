use crate::priority::Priority;
use crate::priority_queue::{PriorityQueue, PriorityQueueError};

/// Slow but obviously correct implementation of [`PriorityQueue`].
///
/// Keeps items in insertion order and scans all of them on every query,
/// so most operations cost ***O(n)***.
/// Items need only equality, not hashing.
///
/// Exists to cross-check faster queues: feed both the same operations
/// and compare every result. Among items with equal priorities
/// the earliest added one is returned first.
///
/// ```
/// use indexed_priority_queue::{PriorityQueue, ReferencePriorityQueue};
///
/// let mut queue: ReferencePriorityQueue<&str, f64> = ReferencePriorityQueue::new(false);
/// queue.add("b", 2.0).unwrap();
/// queue.add("a", 1.0).unwrap();
/// assert_eq!(queue.get(), Ok(&"a"));
/// ```
///
/// [`PriorityQueue`]: trait.PriorityQueue.html
#[derive(Clone, Debug)]
pub struct ReferencePriorityQueue<TItem, TPriority> {
    entries: Vec<(TItem, TPriority)>,
    is_max: bool,
}

impl<TItem: Eq, TPriority: Priority> ReferencePriorityQueue<TItem, TPriority> {
    /// Creates an empty queue.
    /// If `is_max` is true, the queue returns item with the biggest priority first.
    #[inline]
    pub fn new(is_max: bool) -> Self {
        Self {
            entries: Vec::new(),
            is_max,
        }
    }

    /// Returns true if the queue returns the biggest priority first.
    #[inline]
    pub fn is_max(&self) -> bool {
        self.is_max
    }

    fn position(&self, item: &TItem) -> Option<usize> {
        self.entries.iter().position(|(x, _)| x == item)
    }

    // First entry with the smallest stored priority
    fn most_prioritized(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, (_, priority)) in self.entries.iter().enumerate() {
            match best {
                Some(b) if *priority < self.entries[b].1 => best = Some(i),
                None => best = Some(i),
                _ => {}
            }
        }
        best
    }

    #[inline(always)]
    fn signed(&self, priority: TPriority) -> TPriority {
        if self.is_max {
            -priority
        } else {
            priority
        }
    }
}

impl<TItem: Eq, TPriority: Priority> PriorityQueue<TItem, TPriority>
    for ReferencePriorityQueue<TItem, TPriority>
{
    fn add(&mut self, item: TItem, priority: TPriority) -> Result<(), PriorityQueueError> {
        if self.position(&item).is_some() {
            return Err(PriorityQueueError::DuplicateItem);
        }
        let priority = self.signed(priority);
        self.entries.push((item, priority));
        Ok(())
    }

    fn contains(&self, item: &TItem) -> bool {
        self.position(item).is_some()
    }

    fn get(&self) -> Result<&TItem, PriorityQueueError> {
        let index = self
            .most_prioritized()
            .ok_or(PriorityQueueError::EmptyQueue)?;
        Ok(&self.entries[index].0)
    }

    fn remove(&mut self) -> Result<TItem, PriorityQueueError> {
        let index = self
            .most_prioritized()
            .ok_or(PriorityQueueError::EmptyQueue)?;
        Ok(self.entries.remove(index).0)
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn change_priority(
        &mut self,
        item: &TItem,
        priority: TPriority,
    ) -> Result<(), PriorityQueueError> {
        let index = self
            .position(item)
            .ok_or(PriorityQueueError::UnknownItem)?;
        self.entries[index].1 = self.signed(priority);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ReferencePriorityQueue;
    use crate::priority_queue::{PriorityQueue, PriorityQueueError};

    #[test]
    fn test_min_order() {
        let mut queue: ReferencePriorityQueue<i32, f64> = ReferencePriorityQueue::new(false);
        for &(item, priority) in [(1, 3.0), (2, 1.0), (3, 2.0)].iter() {
            queue.add(item, priority).unwrap();
        }
        assert_eq!(queue.remove(), Ok(2));
        assert_eq!(queue.remove(), Ok(3));
        assert_eq!(queue.remove(), Ok(1));
        assert_eq!(queue.remove(), Err(PriorityQueueError::EmptyQueue));
    }

    #[test]
    fn test_max_order() {
        let mut queue: ReferencePriorityQueue<i32, f64> = ReferencePriorityQueue::new(true);
        assert!(queue.is_max());
        for &(item, priority) in [(1, 3.0), (2, 1.0), (3, 2.0)].iter() {
            queue.add(item, priority).unwrap();
        }
        assert_eq!(queue.get(), Ok(&1));
        queue.change_priority(&2, 10.0).unwrap();
        assert_eq!(queue.remove(), Ok(2));
        assert_eq!(queue.remove(), Ok(1));
    }

    #[test]
    fn test_ties_return_earliest() {
        let mut queue: ReferencePriorityQueue<&str, f32> = ReferencePriorityQueue::new(false);
        queue.add("first", 1.0).unwrap();
        queue.add("second", 1.0).unwrap();
        assert_eq!(queue.remove(), Ok("first"));
        assert_eq!(queue.remove(), Ok("second"));
    }

    #[test]
    fn test_errors() {
        let mut queue: ReferencePriorityQueue<i32, f64> = ReferencePriorityQueue::new(false);
        assert_eq!(queue.get(), Err(PriorityQueueError::EmptyQueue));
        assert_eq!(
            queue.change_priority(&1, 1.0),
            Err(PriorityQueueError::UnknownItem)
        );
        queue.add(1, 1.0).unwrap();
        assert_eq!(queue.add(1, 2.0), Err(PriorityQueueError::DuplicateItem));
        assert_eq!(queue.size(), 1);
        assert!(queue.contains(&1));
        assert!(!queue.is_empty());
    }
}
