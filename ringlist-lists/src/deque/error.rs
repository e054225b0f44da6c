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

use thiserror::Error;

/// Errors returned by the fallible operations of
/// [`Deque`](crate::deque::list::Deque).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// An absent (`None`) item was passed to `add_first` or
    /// `add_last`.
    #[error("cannot add an absent item to the deque")]
    InvalidArgument,
    /// A removal was attempted on an empty deque.
    #[error("deque is empty")]
    Empty,
}
