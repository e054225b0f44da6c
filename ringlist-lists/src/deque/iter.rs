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

use crate::deque::list::Deque;
use core::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IterDirection {
    FrontToBack,
    BackToFront,
}

/// A bidirectional iterator over the elements of a
/// [`Deque`](Deque).
///
/// This struct is created by the [`.iter()`](Deque#method.iter)
/// method of the [`Deque`](Deque). Each call to `.iter()` starts a
/// new traversal from the current front and reads the links as they
/// are when each step runs.
///
/// # Examples
/// ```
/// use ringlist::lists::Deque;
/// use ringlist::lists::deque::Iter;
///
/// let mut deque = Deque::<u8>::new();
/// for i in 1..=5 {
///     deque.add_first(i).unwrap();
/// }
///
/// let mut iter: Iter<u8> = deque.iter();
/// assert_eq!(iter.next(), Some(&5));
/// assert_eq!(iter.next(), Some(&4));
/// assert_eq!(iter.next(), Some(&3));
/// iter = iter.reverse();
/// assert_eq!(iter.next(), Some(&4));
/// assert_eq!(iter.next(), Some(&5));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    cursor: Option<usize>,
    dir: IterDirection,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(deque: &'a Deque<T>) -> Iter<'a, T> {
        Iter {
            deque,
            cursor: deque.head,
            dir: IterDirection::FrontToBack,
        }
    }

    /// Reverses the direction of the iterator. The next element
    /// returned is the one before the last element returned, in the
    /// new direction. Reversing an iterator that has not returned
    /// anything yet, or that is exhausted, restarts it from the
    /// opposite end.
    pub fn reverse(mut self) -> Self {
        match self.cursor {
            None => match self.dir {
                IterDirection::FrontToBack => {
                    self.dir = IterDirection::BackToFront;
                    self.cursor = self.deque.tail;
                }
                IterDirection::BackToFront => {
                    self.dir = IterDirection::FrontToBack;
                    self.cursor = self.deque.head;
                }
            },
            Some(idx) => match self.dir {
                IterDirection::FrontToBack => {
                    if Some(idx) == self.deque.head {
                        self.cursor = self.deque.tail;
                    } else {
                        self.cursor = self
                            .deque
                            .prev_idx(idx)
                            .and_then(|p_idx| self.deque.prev_idx(p_idx));
                    }
                    self.dir = IterDirection::BackToFront;
                }
                IterDirection::BackToFront => {
                    if Some(idx) == self.deque.tail {
                        self.cursor = self.deque.head;
                    } else {
                        self.cursor = self
                            .deque
                            .next_idx(idx)
                            .and_then(|n_idx| self.deque.next_idx(n_idx));
                    }
                    self.dir = IterDirection::FrontToBack;
                }
            },
        }
        self
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let idx = self.cursor?;
        self.cursor = match self.dir {
            IterDirection::FrontToBack => self.deque.next_idx(idx),
            IterDirection::BackToFront => self.deque.prev_idx(idx),
        };
        Some(self.deque.val(idx))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty() {
        let dq = Deque::<u8>::new();
        assert_eq!(dq.iter().next(), None);
        assert_eq!(dq.iter().reverse().next(), None);
    }

    #[test]
    fn test_front_to_back() {
        let mut dq = Deque::<u8>::new();
        dq.add_first(1).unwrap();
        dq.add_last(2).unwrap();
        dq.add_first(0).unwrap();
        dq.add_last(3).unwrap();

        let items: Vec<u8> = dq.iter().copied().collect();
        assert_eq!(items, vec![0, 1, 2, 3]);

        // a second traversal starts again at the front
        let again: Vec<&u8> = (&dq).into_iter().collect();
        assert_eq!(again, vec![&0, &1, &2, &3]);
    }

    #[test]
    fn test_reflects_current_front() {
        let mut dq: Deque<u8> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(dq.iter().next(), Some(&1));
        dq.remove_first().unwrap();
        assert_eq!(dq.iter().next(), Some(&2));
        dq.add_first(9).unwrap();
        assert_eq!(dq.iter().copied().collect::<Vec<u8>>(), vec![9, 2, 3]);
    }

    #[test]
    fn test_reverse_fresh() {
        let dq: Deque<u8> = vec![1, 2, 3].into_iter().collect();
        let items: Vec<u8> = dq.iter().reverse().copied().collect();
        assert_eq!(items, vec![3, 2, 1]);
    }

    #[test]
    fn test_reverse_exhausted() {
        let dq: Deque<u8> = vec![1, 2, 3].into_iter().collect();
        let mut iter = dq.iter();
        assert_eq!(iter.by_ref().count(), 3);
        assert_eq!(iter.next(), None);
        let mut iter = iter.reverse();
        assert_eq!(iter.next(), Some(&3));

        // nothing follows 3 going front to back
        let mut iter = iter.reverse();
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_reverse_twice_mid_way() {
        let dq: Deque<u8> = (1..=5).collect();
        let mut iter = dq.iter().reverse();
        assert_eq!(iter.next(), Some(&5));
        assert_eq!(iter.next(), Some(&4));
        assert_eq!(iter.next(), Some(&3));
        let mut iter = iter.reverse();
        assert_eq!(iter.next(), Some(&4));
        assert_eq!(iter.next(), Some(&5));
        assert_eq!(iter.next(), None);
    }
}
