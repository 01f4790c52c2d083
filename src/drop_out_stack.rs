use std::fmt;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::error::StackError;

/// A bounded LIFO stack over a ring buffer. Once full, every push overwrites
/// (and drops) the oldest element still held.
pub struct DropOutStack<T> {
    head: usize,
    count: usize,
    data: Box<[Option<T>]>,
}

impl<T> DropOutStack<T> {
    pub fn new(capacity: usize) -> Result<Self, StackError> {
        let capacity =
            NonZeroUsize::new(capacity).ok_or(StackError::InvalidCapacity { capacity })?;
        Ok(Self::with_capacity(capacity))
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        debug!(capacity = capacity.get(), "allocating drop-out stack");
        Self {
            head: 0,
            count: 0,
            data: std::iter::repeat_with(|| None)
                .take(capacity.get())
                .collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    // slot of the most recent push; only meaningful when count > 0
    fn top(&self) -> usize {
        (self.head + self.capacity() - 1) % self.capacity()
    }

    /// Pushes `item`, discarding the oldest element if the stack is full.
    pub fn push(&mut self, item: T) {
        let full = self.is_full();
        let slot = self.head;
        let previous = self.data[slot].replace(item);
        self.head = (self.head + 1) % self.capacity();

        if full {
            trace!(slot, "overwriting oldest element");
            drop(previous);
        } else {
            debug_assert!(previous.is_none());
            self.count += 1;
        }
    }

    /// Pushes `item` only if that would not overwrite anything.
    pub fn push_if_not_full(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.push(item);
        true
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.try_pop().ok_or(StackError::EmptyContainer)
    }

    pub fn try_pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.count -= 1;
        self.head = self.top();
        self.data[self.head].take()
    }

    pub fn peek(&self) -> Result<&T, StackError> {
        self.try_peek().ok_or(StackError::EmptyContainer)
    }

    pub fn try_peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.data[self.top()].as_ref()
    }

    pub fn clear(&mut self) {
        trace!(count = self.count, "clearing drop-out stack");
        for slot in self.data.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.count = 0;
    }

    /// Pops every element, newest first.
    ///
    /// The iterator is destructive: each element it yields has been removed
    /// from the stack, so draining twice yields nothing the second time.
    /// Elements not pulled before the `Drain` is dropped stay in the stack.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { stack: self }
    }
}

impl<T> Extend<T> for DropOutStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> IntoIterator for DropOutStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

impl<T: fmt::Debug> fmt::Debug for DropOutStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DropOutStack")
            .field("capacity", &self.capacity())
            .field("count", &self.count)
            .field("elements", &Live(self))
            .finish()
    }
}

// newest-first view of the live slots, for Debug only
struct Live<'a, T>(&'a DropOutStack<T>);

impl<'a, T: fmt::Debug> fmt::Debug for Live<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let stack = self.0;
        let capacity = stack.capacity();
        f.debug_list()
            .entries(
                (1..=stack.count)
                    .map(|back| (stack.head + capacity - back) % capacity)
                    .filter_map(|slot| stack.data[slot].as_ref()),
            )
            .finish()
    }
}

pub struct Drain<'a, T> {
    stack: &'a mut DropOutStack<T>,
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.try_pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.count, Some(self.stack.count))
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}

impl<'a, T> FusedIterator for Drain<'a, T> {}

pub struct IntoIter<T> {
    stack: DropOutStack<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.try_pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.count, Some(self.stack.count))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
