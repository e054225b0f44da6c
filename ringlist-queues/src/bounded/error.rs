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
use thiserror::Error;

/// Errors returned by the fallible operations of
/// [`BoundedQueue`](crate::bounded::queue::BoundedQueue).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue already holds `capacity` items.
    #[error("queue is full (capacity {capacity})")]
    Full { capacity: usize },
    /// The queue holds no items.
    #[error("queue is empty")]
    Empty,
    /// A queue cannot be created with this capacity.
    #[error("invalid queue capacity: {0}")]
    InvalidCapacity(usize),
}

/// An item refused by a full
/// [`BoundedQueue`](crate::bounded::queue::BoundedQueue). The item is
/// handed back unchanged and can be recovered with
/// [`into_inner`](#method.into_inner).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("queue is full (capacity {capacity})")]
pub struct FullError<T> {
    item: T,
    capacity: usize,
}

impl<T> FullError<T> {
    pub(crate) fn new(item: T, capacity: usize) -> FullError<T> {
        FullError { item, capacity }
    }

    /// Returns the capacity of the queue that refused the item.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a reference to the refused item.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Consumes the error and returns the refused item.
    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> From<FullError<T>> for QueueError {
    fn from(err: FullError<T>) -> Self {
        QueueError::Full {
            capacity: err.capacity,
        }
    }
}
