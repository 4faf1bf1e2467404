use crate::Sequence;
use std::collections::VecDeque;

/// A first-in, first-out queue.
///
/// [`CompleteTree`](crate::CompleteTree) computes breadth-first order through
/// this trait.
///
/// # Examples
///
/// ```
/// use linked_collections::{Queue, Sequence};
///
/// let mut queue = Sequence::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert!(Queue::is_empty(&queue));
/// ```
pub trait Queue<T> {
    /// Adds an element at the back of the queue.
    fn enqueue(&mut self, element: T);

    /// Removes the element at the front of the queue, or returns `None` if
    /// the queue is empty.
    fn dequeue(&mut self) -> Option<T>;

    fn is_empty(&self) -> bool;
}

impl<T> Queue<T> for VecDeque<T> {
    fn enqueue(&mut self, element: T) {
        self.push_back(element);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<T> Queue<T> for Sequence<T> {
    fn enqueue(&mut self, element: T) {
        self.push_back_element(element);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop_front().ok()
    }

    fn is_empty(&self) -> bool {
        Sequence::is_empty(self)
    }
}
