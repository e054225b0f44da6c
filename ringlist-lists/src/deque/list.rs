/*
   Deque: A double ended queue backed by a doubly linked list whose
   nodes live in an arena owned by the deque. Pushing and popping at
   either end completes in constant time.

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

use crate::deque::{error::DequeError, fl, iter::Iter};
use core::iter::FromIterator;
use tracing::debug;

const DEFAULT_CAPACITY: usize = 8;

/// A double ended queue backed by a doubly linked list. Elements can
/// be added and removed at either end in constant time.
///
/// The nodes of the list are owned by an arena inside the deque and
/// link to each other by slot index. Slots released by a removal are
/// reused by later inserts, so a deque that is filled and drained
/// repeatedly does not allocate once it has reached its high water
/// mark. Node handles never leave the deque: iteration yields
/// references to the element values.
///
/// Adding an absent item is rejected. Both
/// [`add_first`](#method.add_first) and
/// [`add_last`](#method.add_last) accept anything that converts into
/// an `Option<T>` so a `None` can be passed and is refused with
/// [`DequeError::InvalidArgument`].
///
/// # Examples
///
/// ```
/// use ringlist::lists::Deque;
///
/// let mut deque = Deque::<u8>::new();
/// deque.add_first(1).unwrap();
/// deque.add_last(2).unwrap();
/// deque.add_first(0).unwrap();
/// deque.add_last(3).unwrap();
///
/// let items: Vec<u8> = deque.iter().copied().collect();
/// assert_eq!(items, vec![0, 1, 2, 3]);
///
/// assert_eq!(deque.remove_first(), Ok(0));
/// assert_eq!(deque.remove_last(), Ok(3));
/// assert_eq!(deque.size(), 2);
/// ```
#[derive(Debug)]
pub struct Deque<T> {
    pub(super) head: Option<usize>,
    pub(super) tail: Option<usize>,
    len: usize,
    pub(super) fl: fl::FreeList<T>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Deque::new()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_tail(elem);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Deque<T> {
    /// Creates an empty deque with a default capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::lists::Deque;
    /// let deque = Deque::<u8>::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Deque<T> {
        Deque::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty deque whose arena holds `capacity` nodes
    /// before it has to grow. The arena doubles its capacity every
    /// time it is exhausted and never shrinks when elements are
    /// removed.
    ///
    /// A deque with a capacity of 0 grows by one node at a time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::lists::Deque;
    /// let mut deque = Deque::<u8>::with_capacity(2);
    /// deque.add_last(1).unwrap();
    /// deque.add_last(2).unwrap();
    /// assert_eq!(deque.capacity(), 2);
    ///
    /// deque.add_last(3).unwrap();
    /// assert_eq!(deque.capacity(), 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> Deque<T> {
        Deque {
            head: None,
            tail: None,
            len: 0,
            fl: fl::FreeList::new(capacity),
        }
    }

    /// Returns an iterator over the elements from front to back. The
    /// direction can be flipped at any point with
    /// [`Iter::reverse`](crate::deque::iter::Iter::reverse).
    ///
    /// Every call starts a fresh traversal at the current front.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::lists::Deque;
    /// let deque: Deque<u8> = (1..=3).collect();
    ///
    /// let mut iter = deque.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    ///
    /// let back_to_front: Vec<u8> = deque.iter().reverse().copied().collect();
    /// assert_eq!(back_to_front, vec![3, 2, 1]);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self)
    }

    /// Returns true if the deque holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::lists::Deque;
    /// let mut deque = Deque::<u8>::new();
    /// assert!(deque.is_empty());
    /// deque.add_first(1).unwrap();
    /// assert!(!deque.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::lists::Deque;
    /// let mut deque = Deque::<u8>::new();
    /// assert_eq!(deque.size(), 0);
    /// deque.add_last(1).unwrap();
    /// assert_eq!(deque.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns the number of nodes the deque can hold before the
    /// arena has to grow.
    pub fn capacity(&self) -> usize {
        self.len + self.fl.len()
    }

    /// Returns a reference to the element at the front or `None` if
    /// the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::lists::Deque;
    /// let mut deque = Deque::<u8>::new();
    /// assert_eq!(deque.peek_first(), None);
    /// deque.add_first(1).unwrap();
    /// deque.add_first(2).unwrap();
    /// assert_eq!(deque.peek_first(), Some(&2));
    /// ```
    pub fn peek_first(&self) -> Option<&T> {
        self.head.map(|idx| &self.fl.node(idx).val)
    }

    /// Returns a reference to the element at the back or `None` if
    /// the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::lists::Deque;
    /// let mut deque = Deque::<u8>::new();
    /// assert_eq!(deque.peek_last(), None);
    /// deque.add_last(1).unwrap();
    /// deque.add_last(2).unwrap();
    /// assert_eq!(deque.peek_last(), Some(&2));
    /// ```
    pub fn peek_last(&self) -> Option<&T> {
        self.tail.map(|idx| &self.fl.node(idx).val)
    }

    /// Adds an element to the front of the deque. A `None` item is
    /// rejected with [`DequeError::InvalidArgument`] and the deque is
    /// left unchanged.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::lists::Deque;
    /// use ringlist::lists::deque::DequeError;
    ///
    /// let mut deque = Deque::<u8>::new();
    /// assert_eq!(deque.add_first(1), Ok(()));
    /// assert_eq!(deque.add_first(Some(2u8)), Ok(()));
    /// assert_eq!(deque.add_first(None::<u8>), Err(DequeError::InvalidArgument));
    /// assert_eq!(deque.size(), 2);
    /// assert_eq!(deque.peek_first(), Some(&2));
    /// ```
    pub fn add_first<I: Into<Option<T>>>(&mut self, item: I) -> Result<(), DequeError> {
        let elem = item.into().ok_or_else(|| {
            debug!("rejected absent item at front of deque");
            DequeError::InvalidArgument
        })?;
        self.push_head(elem);
        Ok(())
    }

    /// Adds an element to the back of the deque. A `None` item is
    /// rejected with [`DequeError::InvalidArgument`] and the deque is
    /// left unchanged.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::lists::Deque;
    /// use ringlist::lists::deque::DequeError;
    ///
    /// let mut deque = Deque::<u8>::new();
    /// assert_eq!(deque.add_last(1), Ok(()));
    /// assert_eq!(deque.add_last(None::<u8>), Err(DequeError::InvalidArgument));
    /// assert_eq!(deque.peek_last(), Some(&1));
    /// ```
    pub fn add_last<I: Into<Option<T>>>(&mut self, item: I) -> Result<(), DequeError> {
        let elem = item.into().ok_or_else(|| {
            debug!("rejected absent item at back of deque");
            DequeError::InvalidArgument
        })?;
        self.push_tail(elem);
        Ok(())
    }

    /// Removes and returns the element at the front of the deque or
    /// [`DequeError::Empty`] if there is none.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::lists::Deque;
    /// use ringlist::lists::deque::DequeError;
    ///
    /// let mut deque = Deque::<u8>::new();
    /// assert_eq!(deque.remove_first(), Err(DequeError::Empty));
    ///
    /// deque.add_last(1).unwrap();
    /// deque.add_last(2).unwrap();
    /// assert_eq!(deque.remove_first(), Ok(1));
    /// assert_eq!(deque.remove_first(), Ok(2));
    /// assert!(deque.is_empty());
    /// ```
    pub fn remove_first(&mut self) -> Result<T, DequeError> {
        let head = self.head.ok_or_else(|| {
            debug!("remove_first on empty deque");
            DequeError::Empty
        })?;

        let next = self.fl.node(head).next;
        self.head = next;
        match next {
            None => self.tail = None,
            Some(n_idx) => self.fl.node_mut(n_idx).prev = None,
        }
        self.len -= 1;
        Ok(self.fl.release(head))
    }

    /// Removes and returns the element at the back of the deque or
    /// [`DequeError::Empty`] if there is none.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::lists::Deque;
    /// use ringlist::lists::deque::DequeError;
    ///
    /// let mut deque = Deque::<u8>::new();
    /// assert_eq!(deque.remove_last(), Err(DequeError::Empty));
    ///
    /// deque.add_last(1).unwrap();
    /// deque.add_last(2).unwrap();
    /// assert_eq!(deque.remove_last(), Ok(2));
    /// assert_eq!(deque.remove_last(), Ok(1));
    /// assert!(deque.is_empty());
    /// ```
    pub fn remove_last(&mut self) -> Result<T, DequeError> {
        let tail = self.tail.ok_or_else(|| {
            debug!("remove_last on empty deque");
            DequeError::Empty
        })?;

        let prev = self.fl.node(tail).prev;
        self.tail = prev;
        match prev {
            None => self.head = None,
            Some(p_idx) => self.fl.node_mut(p_idx).next = None,
        }
        self.len -= 1;
        Ok(self.fl.release(tail))
    }

    /// Removes and drops all the elements. The capacity of the deque
    /// is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::lists::Deque;
    /// let mut deque = Deque::<u8>::with_capacity(4);
    /// deque.extend(vec![1, 2, 3]);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 4);
    /// ```
    pub fn clear(&mut self) {
        while let Some(head) = self.head {
            self.head = self.fl.node(head).next;
            drop(self.fl.release(head));
        }
        self.tail = None;
        self.len = 0;
    }

    pub(super) fn next_idx(&self, idx: usize) -> Option<usize> {
        self.fl.node(idx).next
    }

    pub(super) fn prev_idx(&self, idx: usize) -> Option<usize> {
        self.fl.node(idx).prev
    }

    pub(super) fn val(&self, idx: usize) -> &T {
        &self.fl.node(idx).val
    }

    fn push_head(&mut self, elem: T) {
        let idx = self.fl.acquire(elem);
        self.fl.node_mut(idx).next = self.head;
        match self.head {
            None => self.tail = Some(idx),
            Some(h_idx) => self.fl.node_mut(h_idx).prev = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    fn push_tail(&mut self, elem: T) {
        let idx = self.fl.acquire(elem);
        self.fl.node_mut(idx).prev = self.tail;
        match self.tail {
            None => self.head = Some(idx),
            Some(t_idx) => self.fl.node_mut(t_idx).next = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! assert_empty {
        ($dq:ident) => {
            assert!($dq.head.is_none());
            assert!($dq.tail.is_none());
            assert_eq!($dq.size(), 0);
            assert!($dq.is_empty());
        };
    }

    // Walks the links in both directions and checks they agree with
    // the size and with each other.
    macro_rules! assert_links {
        ($dq:ident, [$($val:expr),*]) => {
            let expected: Vec<u8> = vec![$($val),*];
            assert_eq!($dq.size(), expected.len());
            assert_eq!($dq.is_empty(), expected.is_empty());

            let mut forward = Vec::new();
            let mut cur = $dq.head;
            let mut prev = None;
            while let Some(idx) = cur {
                assert_eq!($dq.prev_idx(idx), prev);
                forward.push(*$dq.val(idx));
                prev = cur;
                cur = $dq.next_idx(idx);
            }
            assert_eq!(prev, $dq.tail);
            assert_eq!(forward, expected);

            let mut backward = Vec::new();
            let mut cur = $dq.tail;
            while let Some(idx) = cur {
                backward.push(*$dq.val(idx));
                cur = $dq.prev_idx(idx);
            }
            backward.reverse();
            assert_eq!(backward, expected);

            if let Some(h_idx) = $dq.head {
                assert_eq!($dq.prev_idx(h_idx), None);
            }
            if let Some(t_idx) = $dq.tail {
                assert_eq!($dq.next_idx(t_idx), None);
            }
        };
    }

    #[test]
    fn test_new() {
        let dq = Deque::<u8>::new();
        assert_empty!(dq);
        assert_eq!(dq.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_add_first() {
        let mut dq = Deque::<u8>::new();
        dq.add_first(11).unwrap();
        assert_links!(dq, [11]);
        assert_eq!(dq.head, dq.tail);

        dq.add_first(12).unwrap();
        assert_links!(dq, [12, 11]);

        dq.add_first(13).unwrap();
        assert_links!(dq, [13, 12, 11]);

        dq.clear();
        assert_empty!(dq);
    }

    #[test]
    fn test_add_last() {
        let mut dq = Deque::<u8>::new();
        dq.add_last(33).unwrap();
        assert_links!(dq, [33]);
        assert_eq!(dq.head, dq.tail);

        dq.add_last(44).unwrap();
        assert_links!(dq, [33, 44]);

        dq.add_last(55).unwrap();
        assert_links!(dq, [33, 44, 55]);

        dq.clear();
        assert_empty!(dq);
    }

    #[test]
    fn test_add_none_is_rejected() {
        let mut dq = Deque::<u8>::new();
        assert_eq!(dq.add_first(None::<u8>), Err(DequeError::InvalidArgument));
        assert_eq!(dq.add_last(None::<u8>), Err(DequeError::InvalidArgument));
        assert_empty!(dq);

        dq.add_last(1).unwrap();
        assert_eq!(dq.add_first(None::<u8>), Err(DequeError::InvalidArgument));
        assert_eq!(dq.add_last(None::<u8>), Err(DequeError::InvalidArgument));
        assert_links!(dq, [1]);
    }

    #[test]
    fn test_remove_first() {
        let mut dq = Deque::<u8>::new();
        assert_eq!(dq.remove_first(), Err(DequeError::Empty));

        dq.add_first(11).unwrap();
        assert_eq!(dq.remove_first(), Ok(11));
        assert_empty!(dq);

        dq.add_first(11).unwrap();
        dq.add_first(12).unwrap();
        dq.add_first(13).unwrap();
        assert_eq!(dq.remove_first(), Ok(13));
        assert_links!(dq, [12, 11]);
        assert_eq!(dq.remove_first(), Ok(12));
        assert_links!(dq, [11]);
        assert_eq!(dq.remove_first(), Ok(11));
        assert_empty!(dq);
        assert_eq!(dq.remove_first(), Err(DequeError::Empty));
    }

    #[test]
    fn test_remove_last() {
        let mut dq = Deque::<u8>::new();
        assert_eq!(dq.remove_last(), Err(DequeError::Empty));

        dq.add_last(11).unwrap();
        assert_eq!(dq.remove_last(), Ok(11));
        assert_empty!(dq);

        dq.add_first(11).unwrap();
        dq.add_first(12).unwrap();
        dq.add_first(13).unwrap();
        assert_eq!(dq.remove_last(), Ok(11));
        assert_links!(dq, [13, 12]);
        assert_eq!(dq.remove_last(), Ok(12));
        assert_links!(dq, [13]);
        assert_eq!(dq.remove_last(), Ok(13));
        assert_empty!(dq);
        assert_eq!(dq.remove_last(), Err(DequeError::Empty));
    }

    #[test]
    fn test_single_element_either_end() {
        let mut dq = Deque::<u8>::new();
        dq.add_last(5).unwrap();
        assert_eq!(dq.remove_first(), Ok(5));
        assert_empty!(dq);

        dq.add_first(6).unwrap();
        assert_eq!(dq.remove_last(), Ok(6));
        assert_empty!(dq);
    }

    #[test]
    fn test_mixed_order() {
        let mut dq = Deque::<u8>::new();
        dq.add_first(1).unwrap();
        dq.add_last(2).unwrap();
        dq.add_first(0).unwrap();
        dq.add_last(3).unwrap();
        assert_links!(dq, [0, 1, 2, 3]);

        assert_eq!(dq.remove_first(), Ok(0));
        assert_eq!(dq.remove_last(), Ok(3));
        assert_eq!(dq.size(), 2);
        assert_links!(dq, [1, 2]);
    }

    #[test]
    fn test_add_last_remove_last_restores_state() {
        let mut dq = Deque::<u8>::new();
        dq.add_first(1).unwrap();
        dq.add_last(2).unwrap();
        let (head, tail) = (dq.head, dq.tail);

        dq.add_last(9).unwrap();
        assert_eq!(dq.remove_last(), Ok(9));
        assert_eq!((dq.head, dq.tail), (head, tail));
        assert_links!(dq, [1, 2]);
    }

    #[test]
    fn test_size_tracks_adds_and_removes() {
        let mut dq = Deque::<u8>::with_capacity(0);
        let mut expected = 0;
        for i in 0..20u8 {
            if i % 3 == 0 {
                dq.add_first(i).unwrap();
            } else {
                dq.add_last(i).unwrap();
            }
            expected += 1;
            if i % 4 == 0 {
                assert!(dq.remove_first().is_ok());
                expected -= 1;
            }
            if i % 7 == 0 && !dq.is_empty() {
                assert!(dq.remove_last().is_ok());
                expected -= 1;
            }
            assert_eq!(dq.size(), expected);
            assert_eq!(dq.is_empty(), dq.size() == 0);
        }
    }

    #[test]
    fn test_slots_are_reused() {
        let mut dq = Deque::<u8>::with_capacity(2);
        for _ in 0..10 {
            dq.add_last(1).unwrap();
            dq.add_first(2).unwrap();
            assert_eq!(dq.remove_last(), Ok(1));
            assert_eq!(dq.remove_first(), Ok(2));
        }
        assert_eq!(dq.capacity(), 2);
        assert_eq!(dq.fl.slots(), 2);
    }

    #[test]
    fn test_capacity_grows() {
        let mut dq = Deque::<u8>::with_capacity(2);
        assert_eq!(dq.capacity(), 2);
        dq.extend(vec![1, 2, 3]);
        assert_eq!(dq.capacity(), 4);
        dq.extend(vec![4, 5]);
        assert_eq!(dq.capacity(), 8);
        assert_links!(dq, [1, 2, 3, 4, 5]);

        for _ in 0..5 {
            dq.remove_first().unwrap();
        }
        assert_eq!(dq.capacity(), 8);
    }

    #[test]
    fn test_peek() {
        let mut dq = Deque::<u8>::new();
        assert_eq!(dq.peek_first(), None);
        assert_eq!(dq.peek_last(), None);
        dq.add_last(1).unwrap();
        assert_eq!(dq.peek_first(), Some(&1));
        assert_eq!(dq.peek_last(), Some(&1));
        dq.add_last(2).unwrap();
        assert_eq!(dq.peek_first(), Some(&1));
        assert_eq!(dq.peek_last(), Some(&2));
        assert_links!(dq, [1, 2]);
    }

    #[test]
    fn test_non_copy_values() {
        let mut dq = Deque::<String>::new();
        dq.add_last(String::from("b")).unwrap();
        dq.add_first(Some(String::from("a"))).unwrap();
        assert_eq!(dq.add_last(None::<String>), Err(DequeError::InvalidArgument));
        assert_eq!(dq.remove_first().as_deref(), Ok("a"));
        assert_eq!(dq.remove_first().as_deref(), Ok("b"));
    }
}
