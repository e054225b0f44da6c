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

use crate::deque::node::InternalNode;
use core::mem;
use tracing::debug;

#[derive(Debug)]
enum Slot<T> {
    Occupied(InternalNode<T>),
    Vacant { next_free: Option<usize> },
}

/// The arena that owns every node of a deque. Vacant slots are
/// chained through `next_free` starting at `head`.
#[derive(Debug)]
pub(crate) struct FreeList<T> {
    capacity: usize,
    len: usize,
    head: Option<usize>,
    slots: Vec<Slot<T>>,
}

impl<T> FreeList<T> {
    pub(crate) fn new(capacity: usize) -> FreeList<T> {
        let mut fl = FreeList {
            capacity,
            len: 0,
            head: None,
            slots: Vec::with_capacity(capacity),
        };
        fl.alloc(capacity);
        fl
    }

    /// Number of vacant slots.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Total number of slots, vacant or occupied.
    pub(crate) fn slots(&self) -> usize {
        self.slots.len()
    }

    fn alloc(&mut self, size: usize) {
        let start = self.slots.len();
        self.slots.reserve(size);
        for _ in 0..size {
            self.slots.push(Slot::Vacant { next_free: None });
        }
        // chain in reverse so the lowest new index is acquired first
        for idx in (start..start + size).rev() {
            self.push_head(idx);
        }
    }

    fn push_head(&mut self, idx: usize) {
        self.slots[idx] = Slot::Vacant {
            next_free: self.head,
        };
        self.head = Some(idx);
        self.len += 1;
    }

    fn pop_head(&mut self) -> Option<usize> {
        let idx = self.head?;
        if let Slot::Vacant { next_free } = self.slots[idx] {
            self.head = next_free;
        }
        self.len -= 1;
        Some(idx)
    }

    pub(crate) fn release(&mut self, idx: usize) -> T {
        let slot = mem::replace(
            &mut self.slots[idx],
            Slot::Vacant {
                next_free: self.head,
            },
        );
        match slot {
            Slot::Occupied(node) => {
                self.head = Some(idx);
                self.len += 1;
                node.val
            }
            Slot::Vacant { .. } => panic!("release of vacant slot {}", idx),
        }
    }

    pub(crate) fn acquire(&mut self, val: T) -> usize {
        let idx = match self.pop_head() {
            Some(idx) => idx,
            None => {
                self.grow();
                match self.pop_head() {
                    Some(idx) => idx,
                    None => panic!("alloc failed on acquire"),
                }
            }
        };

        self.slots[idx] = Slot::Occupied(InternalNode::new(val));
        idx
    }

    pub(crate) fn node(&self, idx: usize) -> &InternalNode<T> {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("slot {} is vacant", idx),
        }
    }

    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut InternalNode<T> {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("slot {} is vacant", idx),
        }
    }

    fn grow(&mut self) {
        if self.capacity == 0 {
            self.alloc(1);
        } else {
            self.alloc(self.capacity);
            self.capacity *= 2;
        }
        debug!(slots = self.slots(), "deque freelist grown");
    }
}
