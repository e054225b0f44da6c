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

//! A FIFO queue with a capacity fixed at construction. A full queue
//! refuses new items with a [`FullError`](error::FullError) that
//! hands the item back instead of growing, and reads from an empty queue return
//! [`QueueError::Empty`](error::QueueError).
pub mod error;
pub mod iter;
pub mod queue;
