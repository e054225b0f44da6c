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
use crate::bounded::queue::BoundedQueue;
use core::iter::FusedIterator;

/// An iterator over the items of a [`BoundedQueue`](BoundedQueue)
/// from front to rear.
///
/// This struct is created by the
/// [`.iter()`](BoundedQueue#method.iter) method of the
/// [`BoundedQueue`](BoundedQueue). It can also be consumed from the
/// rear with `next_back`.
#[derive(Debug)]
pub struct Iter<'a, T> {
    queue: &'a BoundedQueue<T>,
    head: usize,
    tail: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(queue: &'a BoundedQueue<T>) -> Iter<'a, T> {
        Iter {
            queue,
            head: 0,
            tail: queue.size(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.head == self.tail {
            return None;
        }
        let item = self.queue.get(self.head);
        self.head += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tail - self.head;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        self.queue.get(self.tail)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
