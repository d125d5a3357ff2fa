//! Bounded deque with FIFO eviction
//!
//! Backs every capped, ordered collection in the library (visible toasts
//! first of all). Evicted items are handed back to the caller so it can
//! log them or cancel whatever they own.

use std::collections::VecDeque;

/// A bounded deque with FIFO eviction policy
#[derive(Clone, Debug)]
pub struct BoundedDeque<T> {
    cap: usize,
    buf: VecDeque<T>,
}

impl<T> BoundedDeque<T> {
    /// Create a new bounded deque. A capacity of 0 is raised to 1.
    pub fn new(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            cap,
            buf: VecDeque::with_capacity(cap.min(64)),
        }
    }

    /// Push a new value, returning the oldest item if it had to be evicted
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.buf.len() == self.cap {
            self.buf.pop_front()
        } else {
            None
        };
        self.buf.push_back(value);
        evicted
    }

    /// Change the capacity, evicting oldest items until the new cap holds
    pub fn set_capacity(&mut self, cap: usize) -> Vec<T> {
        self.cap = cap.max(1);
        let overflow = self.buf.len().saturating_sub(self.cap);
        self.buf.drain(..overflow).collect()
    }

    /// Remove and return the first item matching the predicate
    pub fn remove_first(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        let index = self.buf.iter().position(|item| pred(item))?;
        self.buf.remove(index)
    }

    /// Remove every item for which the predicate returns false, returning them
    pub fn drain_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
        let mut kept = VecDeque::with_capacity(self.buf.len());
        let mut removed = Vec::new();
        for item in self.buf.drain(..) {
            if pred(&item) {
                removed.push(item);
            } else {
                kept.push_back(item);
            }
        }
        self.buf = kept;
        removed
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) -> Vec<T> {
        self.buf.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(deque: &BoundedDeque<i32>) -> Vec<i32> {
        deque.iter().copied().collect()
    }

    #[test]
    fn test_bounded_deque_eviction() {
        let mut deque = BoundedDeque::new(3);
        assert_eq!(deque.push(1), None);
        deque.push(2);
        deque.push(3);
        assert_eq!(deque.push(4), Some(1));
        assert_eq!(items(&deque), vec![2, 3, 4]);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let mut deque = BoundedDeque::new(0);
        deque.push(1);
        assert_eq!(deque.push(2), Some(1));
        assert_eq!(items(&deque), vec![2]);
    }

    #[test]
    fn test_shrink_evicts_oldest() {
        let mut deque = BoundedDeque::new(5);
        for i in 1..=5 {
            deque.push(i);
        }
        assert_eq!(deque.set_capacity(2), vec![1, 2, 3]);
        assert_eq!(items(&deque), vec![4, 5]);
    }

    #[test]
    fn test_remove_first_and_drain_where() {
        let mut deque = BoundedDeque::new(5);
        for i in 1..=5 {
            deque.push(i);
        }
        assert_eq!(deque.remove_first(|v| *v == 3), Some(3));
        assert_eq!(deque.remove_first(|v| *v == 3), None);
        assert_eq!(deque.drain_where(|v| v % 2 == 0), vec![2, 4]);
        assert_eq!(items(&deque), vec![1, 5]);
    }
}
