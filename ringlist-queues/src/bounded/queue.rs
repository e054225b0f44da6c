/*
   Bounded Queue: A fixed capacity FIFO queue backed by a circular
   buffer. Enqueue, dequeue and peeking at either end complete in
   constant time and the queue never grows.

   Copyright 2021 "Rahul Singh <rsingh@arrsingh.com>"

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use crate::bounded::{
    error::{FullError, QueueError},
    iter::Iter,
};
use tracing::{debug, trace, warn};

/// A FIFO queue backed by a circular buffer whose capacity is fixed
/// when the queue is created.
///
/// The live items occupy `size` consecutive slots starting at
/// `front` and wrapping around the end of the buffer. Every other
/// slot is `None`, so the slot at `front` is occupied exactly when
/// the queue is not empty. The most recently enqueued item sits at
/// `rear`. A new queue starts with `rear` on the last slot so the
/// first item lands in slot 0.
///
/// Enqueueing into a full queue is refused with a [`FullError`]
/// that hands the item back and leaves the queue unchanged. Reading from
/// an empty queue returns [`QueueError::Empty`]. Both conditions are
/// also logged at `warn` level.
///
/// # Examples
///
/// ```
/// use ringlist::queues::BoundedQueue;
///
/// let mut queue = BoundedQueue::<i32>::new(5).unwrap();
/// for item in [10, 20, 30, 40].iter() {
///     queue.enqueue(*item).unwrap();
/// }
///
/// assert_eq!(queue.dequeue(), Ok(10));
/// assert_eq!(queue.peek(), Ok(&20));
/// assert_eq!(queue.rear_item(), Ok(&40));
/// ```
#[derive(Debug)]
pub struct BoundedQueue<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    rear: usize,
    size: usize,
}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue that holds at most `capacity` items.
    /// Returns [`QueueError::InvalidCapacity`] if `capacity` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::queues::BoundedQueue;
    /// use ringlist::queues::bounded::QueueError;
    ///
    /// let queue = BoundedQueue::<u8>::new(3).unwrap();
    /// assert_eq!(queue.capacity(), 3);
    ///
    /// assert_eq!(
    ///     BoundedQueue::<u8>::new(0).unwrap_err(),
    ///     QueueError::InvalidCapacity(0)
    /// );
    /// ```
    pub fn new(capacity: usize) -> Result<BoundedQueue<T>, QueueError> {
        if capacity == 0 {
            debug!(capacity, "rejected bounded queue capacity");
            return Err(QueueError::InvalidCapacity(capacity));
        }

        let slots: Vec<Option<T>> = (0..capacity).map(|_| None).collect();
        Ok(BoundedQueue {
            slots: slots.into_boxed_slice(),
            front: 0,
            rear: capacity - 1,
            size: 0,
        })
    }

    /// Returns the maximum number of items the queue can hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::queues::BoundedQueue;
    ///
    /// let mut queue = BoundedQueue::<u8>::new(4).unwrap();
    /// assert_eq!(queue.capacity(), 4);
    /// queue.enqueue(1).unwrap();
    /// assert_eq!(queue.capacity(), 4);
    /// ```
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of items in the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::queues::BoundedQueue;
    ///
    /// let mut queue = BoundedQueue::<u8>::new(4).unwrap();
    /// assert_eq!(queue.size(), 0);
    /// queue.enqueue(1).unwrap();
    /// queue.enqueue(2).unwrap();
    /// assert_eq!(queue.size(), 2);
    /// queue.dequeue().unwrap();
    /// assert_eq!(queue.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the queue holds `capacity` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::queues::BoundedQueue;
    ///
    /// let mut queue = BoundedQueue::<u8>::new(1).unwrap();
    /// assert!(!queue.is_full());
    /// queue.enqueue(1).unwrap();
    /// assert!(queue.is_full());
    /// ```
    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Returns true if the queue holds no items.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::queues::BoundedQueue;
    ///
    /// let mut queue = BoundedQueue::<u8>::new(2).unwrap();
    /// assert!(queue.is_empty());
    /// queue.enqueue(1).unwrap();
    /// assert!(!queue.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Adds an item at the rear of the queue. If the queue is full
    /// the queue is left unchanged and the item is handed back inside
    /// a [`FullError`]. A `FullError` converts into
    /// [`QueueError::Full`] so `?` works in functions that return
    /// `QueueError`.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::queues::BoundedQueue;
    ///
    /// let mut queue = BoundedQueue::<String>::new(2).unwrap();
    /// assert!(queue.enqueue(String::from("a")).is_ok());
    /// assert!(queue.enqueue(String::from("b")).is_ok());
    ///
    /// let err = queue.enqueue(String::from("c")).unwrap_err();
    /// assert_eq!(err.capacity(), 2);
    /// assert_eq!(err.into_inner(), "c");
    /// assert_eq!(queue.size(), 2);
    /// assert_eq!(queue.rear_item().map(String::as_str), Ok("b"));
    /// ```
    pub fn enqueue(&mut self, item: T) -> Result<(), FullError<T>> {
        let capacity = self.capacity();
        if self.is_full() {
            warn!(capacity, "bounded queue is full, item rejected");
            return Err(FullError::new(item, capacity));
        }

        self.rear = (self.rear + 1) % capacity;
        self.slots[self.rear] = Some(item);
        self.size += 1;
        trace!(size = self.size, slot = self.rear, "item enqueued");
        Ok(())
    }

    /// Removes and returns the item at the front of the queue or
    /// [`QueueError::Empty`] if the queue is empty.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::queues::BoundedQueue;
    /// use ringlist::queues::bounded::QueueError;
    ///
    /// let mut queue = BoundedQueue::<u8>::new(2).unwrap();
    /// assert_eq!(queue.dequeue(), Err(QueueError::Empty));
    ///
    /// queue.enqueue(1).unwrap();
    /// queue.enqueue(2).unwrap();
    /// assert_eq!(queue.dequeue(), Ok(1));
    /// assert_eq!(queue.dequeue(), Ok(2));
    /// ```
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        let item = self.slots[self.front]
            .take()
            .ok_or_else(|| empty("dequeue"))?;
        self.front = (self.front + 1) % self.capacity();
        self.size -= 1;
        Ok(item)
    }

    /// Returns a reference to the item at the front of the queue
    /// without removing it, or [`QueueError::Empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::queues::BoundedQueue;
    /// use ringlist::queues::bounded::QueueError;
    ///
    /// let mut queue = BoundedQueue::<u8>::new(2).unwrap();
    /// assert_eq!(queue.peek(), Err(QueueError::Empty));
    /// queue.enqueue(1).unwrap();
    /// queue.enqueue(2).unwrap();
    /// assert_eq!(queue.peek(), Ok(&1));
    /// ```
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.slots[self.front]
            .as_ref()
            .ok_or_else(|| empty("peek"))
    }

    /// Returns a reference to the most recently enqueued item without
    /// removing it, or [`QueueError::Empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::queues::BoundedQueue;
    /// use ringlist::queues::bounded::QueueError;
    ///
    /// let mut queue = BoundedQueue::<u8>::new(2).unwrap();
    /// assert_eq!(queue.rear_item(), Err(QueueError::Empty));
    /// queue.enqueue(1).unwrap();
    /// queue.enqueue(2).unwrap();
    /// assert_eq!(queue.rear_item(), Ok(&2));
    /// ```
    pub fn rear_item(&self) -> Result<&T, QueueError> {
        self.slots[self.rear]
            .as_ref()
            .ok_or_else(|| empty("rear_item"))
    }

    /// Removes and drops all the items and returns the queue to its
    /// initial layout. The capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.front = 0;
        self.rear = self.capacity() - 1;
        self.size = 0;
    }

    /// Returns an iterator over the items from front to rear.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::queues::BoundedQueue;
    ///
    /// let mut queue = BoundedQueue::<u8>::new(3).unwrap();
    /// queue.enqueue(1).unwrap();
    /// queue.enqueue(2).unwrap();
    /// queue.enqueue(3).unwrap();
    /// queue.dequeue().unwrap();
    /// queue.enqueue(4).unwrap();
    ///
    /// let items: Vec<u8> = queue.iter().copied().collect();
    /// assert_eq!(items, vec![2, 3, 4]);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self)
    }

    /// Returns the item `offset` places behind the front, if there is
    /// one.
    pub(super) fn get(&self, offset: usize) -> Option<&T> {
        if offset >= self.size {
            return None;
        }
        let idx = (self.front + offset) % self.capacity();
        self.slots[idx].as_ref()
    }
}

fn empty(op: &'static str) -> QueueError {
    warn!(op, "bounded queue is empty");
    QueueError::Empty
}
