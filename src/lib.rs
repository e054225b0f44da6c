//! A double ended queue backed by a doubly linked list and a fixed
//! capacity queue backed by a circular buffer. Both containers report
//! failures through explicit errors rather than sentinel values.

/// List based data structures
pub mod lists {
    pub use ringlist_lists::deque::list::Deque;
    /// This module contains structs specific to the [`Deque`]
    pub mod deque {
        pub use ringlist_lists::deque::error::DequeError;
        pub use ringlist_lists::deque::iter::Iter;
    }
}

/// Queues with a fixed capacity
pub mod queues {
    pub use ringlist_queues::bounded::queue::BoundedQueue;
    /// This module contains structs specific to the
    /// [`BoundedQueue`](BoundedQueue)
    pub mod bounded {
        /// Errors returned by a [`BoundedQueue`](../struct.BoundedQueue.html).
        pub use ringlist_queues::bounded::error::QueueError;
        /// An item refused by a full
        /// [`BoundedQueue`](../struct.BoundedQueue.html), handed back to
        /// the caller.
        pub use ringlist_queues::bounded::error::FullError;
        /// An iterator over the items of a
        /// [`BoundedQueue`](../struct.BoundedQueue.html) from front to rear.
        pub use ringlist_queues::bounded::iter::Iter;
    }
}
