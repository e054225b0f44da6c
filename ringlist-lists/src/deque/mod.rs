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

//! A double ended queue backed by a doubly linked list. The nodes
//! are owned by an arena inside the deque and are linked by slot
//! index rather than by pointer, so the list never forms ownership
//! cycles and never hands out node handles.
//!
//! Slots freed by a removal are kept on a freelist and reused by the
//! next insert.
pub mod error;
pub(crate) mod fl;
pub mod iter;
pub mod list;
pub(crate) mod node;
