use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{CollectionError, Result};
use crate::sequence::cursor::Cursor;
use crate::{IntoIter, Iter};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `Sequence` is a doubly-linked list with owned nodes.
/// It allows inserting and removing elements at both ends in constant time.
/// In compromise, accessing or inserting elements at any other position
/// takes *O*(*n*) time.
///
/// The `Sequence` contains:
/// - a pointer `head` to the first node, and a pointer `tail` to the last node.
///   Both are `None` exactly when the sequence is empty;
/// - a length field `len`, always equal to the number of nodes reachable
///   from `head`.
///
/// Absent elements are rejected at the boundary: every inserting method takes
/// an `impl Into<Option<T>>` and refuses `None` with
/// [`CollectionError::InvalidArgument`], so a stored element is never absent.
///
/// # Naming Conventions
///
/// - `front`/`back`: the first and the last element;
/// - `at`: a 0-based position, where `at == len` denotes the slot after the
///   last element.
pub struct Sequence<T> {
    head: Link<T>,
    tail: Link<T>,
    /// the length of the sequence
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) prev: Link<T>,
    pub(crate) next: Link<T>,
    pub(crate) element: T,
}

// private methods
impl<T> Sequence<T> {
    pub(crate) fn head_node(&self) -> Link<T> {
        self.head
    }

    pub(crate) fn tail_node(&self) -> Link<T> {
        self.tail
    }

    /// Walk to the node at position `at`, starting from whichever end is nearer.
    ///
    /// Returns `None` when `at >= len`.
    pub(crate) fn node_at(&self, at: usize) -> Link<T> {
        if at >= self.len {
            return None;
        }
        // SAFETY: `at < len`, so every step below stays inside the chain.
        unsafe {
            if at <= self.len / 2 {
                let mut node = self.head?;
                for _ in 0..at {
                    node = node.as_ref().next?;
                }
                Some(node)
            } else {
                let mut node = self.tail?;
                for _ in at + 1..self.len {
                    node = node.as_ref().prev?;
                }
                Some(node)
            }
        }
    }

    /// Attach a single boxed node between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belong
    /// to the sequence, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`). `None` on either side means the node
    /// becomes the new head or tail.
    ///
    /// If `prev` and `next` are not adjacent nodes of this sequence, this
    /// function call will make the sequence ill-formed.
    pub(crate) unsafe fn attach_node(&mut self, prev: Link<T>, next: Link<T>, node: Box<Node<T>>) {
        #[cfg(debug_assertions)]
        assert_adjacent(self, prev, next);
        let mut node = NonNull::from(Box::leak(node));
        node.as_mut().prev = prev;
        node.as_mut().next = next;
        match prev {
            Some(mut prev) => prev.as_mut().next = Some(node),
            None => self.head = Some(node),
        }
        match next {
            Some(mut next) => next.as_mut().prev = Some(node),
            None => self.tail = Some(node),
        }
        self.len += 1;
    }

    /// Detach a single node `node` from the sequence, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// sequence.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        let mut node = Box::from_raw(node.as_ptr());
        match node.prev {
            Some(mut prev) => prev.as_mut().next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(mut next) => next.as_mut().prev = node.prev,
            None => self.tail = node.prev,
        }
        node.prev = None;
        node.next = None;
        self.len -= 1;
        node
    }

    pub(crate) fn push_back_node(&mut self, node: Box<Node<T>>) {
        // SAFETY: `tail` and the slot after it are adjacent.
        unsafe { self.attach_node(self.tail, None, node) }
    }

    pub(crate) fn push_front_node(&mut self, node: Box<Node<T>>) {
        // SAFETY: the slot before `head` and `head` are adjacent.
        unsafe { self.attach_node(None, self.head, node) }
    }

    pub(crate) fn pop_front_node(&mut self) -> Option<Box<Node<T>>> {
        let head = self.head?;
        // SAFETY: `head` belongs to the sequence.
        Some(unsafe { self.detach_node(head) })
    }

    pub(crate) fn pop_back_node(&mut self) -> Option<Box<Node<T>>> {
        let tail = self.tail?;
        // SAFETY: `tail` belongs to the sequence.
        Some(unsafe { self.detach_node(tail) })
    }

    /// Append a present element. Used where the element is known to exist,
    /// e.g. when collecting from an iterator.
    pub(crate) fn push_back_element(&mut self, element: T) {
        self.push_back_node(Node::new_detached(element));
    }

    pub(crate) fn push_front_element(&mut self, element: T) {
        self.push_front_node(Node::new_detached(element));
    }

    /// Cut the sequence in two before position `at`, keeping `0..at` and
    /// returning `at..len`. Requires `at <= len`.
    pub(crate) fn split_nodes(&mut self, at: usize) -> Sequence<T> {
        debug_assert!(at <= self.len);
        let mut back = Sequence::new();
        let Some(mut first) = self.node_at(at) else {
            return back;
        };
        // SAFETY: `first` is a node of the sequence, and everything from it to
        // `tail` is moved over as a whole chain.
        unsafe {
            back.head = Some(first);
            back.tail = self.tail;
            back.len = self.len - at;
            match first.as_mut().prev.take() {
                Some(mut last_kept) => {
                    last_kept.as_mut().next = None;
                    self.tail = Some(last_kept);
                }
                None => {
                    self.head = None;
                    self.tail = None;
                }
            }
        }
        self.len = at;
        back
    }
}

fn present<T>(element: impl Into<Option<T>>) -> Result<T> {
    element.into().ok_or(CollectionError::InvalidArgument)
}

impl<T> Sequence<T> {
    /// Create an empty `Sequence`
    ///
    /// # Examples
    /// ```
    /// use linked_collections::Sequence;
    /// let sequence: Sequence<u32> = Sequence::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `Sequence` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Sequence;
    ///
    /// let mut sequence = Sequence::new();
    /// assert!(sequence.is_empty());
    ///
    /// sequence.push_front("foo").unwrap();
    /// assert!(!sequence.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// Returns the length of the `Sequence`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `Sequence`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        while self.pop_front_node().is_some() {}
    }

    /// Provides a reference to the first element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::{CollectionError, Sequence};
    ///
    /// let mut sequence = Sequence::new();
    /// assert_eq!(sequence.front(), Err(CollectionError::EmptyCollection));
    ///
    /// sequence.push_front(1).unwrap();
    /// assert_eq!(sequence.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&T> {
        // SAFETY: `head` is a live node owned by `self`.
        self.head
            .map(|head| unsafe { &(*head.as_ptr()).element })
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Provides a reference to the last element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] if the sequence is empty.
    pub fn back(&self) -> Result<&T> {
        // SAFETY: `tail` is a live node owned by `self`.
        self.tail
            .map(|tail| unsafe { &(*tail.as_ptr()).element })
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Adds an element first in the sequence.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `element` is `None`; the
    /// sequence is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::{CollectionError, Sequence};
    ///
    /// let mut sequence = Sequence::new();
    ///
    /// sequence.push_front(2).unwrap();
    /// assert_eq!(sequence.front(), Ok(&2));
    ///
    /// sequence.push_front(1).unwrap();
    /// assert_eq!(sequence.front(), Ok(&1));
    ///
    /// assert_eq!(sequence.push_front(None), Err(CollectionError::InvalidArgument));
    /// assert_eq!(sequence.len(), 2);
    /// ```
    pub fn push_front(&mut self, element: impl Into<Option<T>>) -> Result<()> {
        self.push_front_element(present(element)?);
        Ok(())
    }

    /// Appends an element to the back of a sequence.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `element` is `None`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Sequence;
    ///
    /// let mut sequence = Sequence::new();
    /// sequence.push_back(1).unwrap();
    /// sequence.push_back(3).unwrap();
    /// assert_eq!(sequence.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, element: impl Into<Option<T>>) -> Result<()> {
        self.push_back_element(present(element)?);
        Ok(())
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] if the sequence is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::{CollectionError, Sequence};
    ///
    /// let mut sequence = Sequence::new();
    /// assert_eq!(sequence.pop_front(), Err(CollectionError::EmptyCollection));
    ///
    /// sequence.push_front(1).unwrap();
    /// sequence.push_front(3).unwrap();
    /// assert_eq!(sequence.pop_front(), Ok(3));
    /// assert_eq!(sequence.pop_front(), Ok(1));
    /// assert!(sequence.is_empty());
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        self.pop_front_node()
            .map(Node::into_element)
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Removes the last element from a sequence and returns it.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] if the sequence is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Result<T> {
        self.pop_back_node()
            .map(Node::into_element)
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Inserts an element so that it ends up at position `at`.
    ///
    /// `at == 0` behaves as [`push_front`](Sequence::push_front) and
    /// `at >= len` behaves as [`push_back`](Sequence::push_back); any
    /// other position splices the element right before the current
    /// `at`-th element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `element` is `None`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Sequence;
    ///
    /// let mut sequence = Sequence::from_iter([1, 2, 3]);
    ///
    /// sequence.insert_at(2, 4).unwrap();
    /// sequence.insert_at(100, 5).unwrap();
    ///
    /// assert_eq!(Vec::from_iter(sequence), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert_at(&mut self, at: usize, element: impl Into<Option<T>>) -> Result<()> {
        let element = present(element)?;
        match self.node_at(at) {
            Some(next) if at > 0 => {
                // SAFETY: `next.prev` and `next` are adjacent nodes of the sequence.
                unsafe {
                    let prev = next.as_ref().prev;
                    self.attach_node(prev, Some(next), Node::new_detached(element));
                }
            }
            Some(_) => self.push_front_element(element),
            None => self.push_back_element(element),
        }
        Ok(())
    }

    /// Provides a reference to the element at position `at`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] if `at >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::{CollectionError, Sequence};
    ///
    /// let sequence = Sequence::from_iter(['a', 'b', 'c']);
    /// assert_eq!(sequence.get(1), Ok(&'b'));
    /// assert_eq!(
    ///     sequence.get(3),
    ///     Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
    /// );
    /// ```
    pub fn get(&self, at: usize) -> Result<&T> {
        // SAFETY: the node is a live node owned by `self`.
        self.node_at(at)
            .map(|node| unsafe { &(*node.as_ptr()).element })
            .ok_or(CollectionError::IndexOutOfRange {
                index: at,
                len: self.len,
            })
    }

    /// Provides a bidirectional cursor placed before the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Sequence;
    ///
    /// let sequence = Sequence::from_iter([1, 2, 3]);
    /// let mut cursor = sequence.cursor();
    /// assert_eq!(cursor.try_next(), Ok(&1));
    /// assert_eq!(cursor.try_previous(), Ok(&1));
    /// ```
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Sequence;
    ///
    /// let sequence = Sequence::from_iter([0, 1, 2]);
    ///
    /// let mut iter = sequence.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Moves all elements from `other` to the end of the sequence.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Sequence;
    ///
    /// let mut first = Sequence::from_iter(['a']);
    /// let mut second = Sequence::from_iter(['b', 'c']);
    ///
    /// first.append(&mut second);
    ///
    /// assert_eq!(Vec::from_iter(first), vec!['a', 'b', 'c']);
    /// assert!(second.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        let (Some(mut other_head), Some(other_tail)) = (other.head.take(), other.tail.take()) else {
            return;
        };
        // SAFETY: the whole chain of `other` is moved over; `other` no longer
        // reaches any of its former nodes.
        unsafe {
            match self.tail {
                Some(mut tail) => {
                    tail.as_mut().next = Some(other_head);
                    other_head.as_mut().prev = Some(tail);
                }
                None => self.head = Some(other_head),
            }
        }
        self.tail = Some(other_tail);
        self.len += std::mem::take(&mut other.len);
    }

    /// Splits the sequence into two at the given index. Returns everything
    /// from the given index (inclusive) on.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] if `at > len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Sequence;
    ///
    /// let mut sequence = Sequence::from_iter([1, 2, 3]);
    /// let split = sequence.split_off(1).unwrap();
    ///
    /// assert_eq!(Vec::from_iter(sequence), vec![1]);
    /// assert_eq!(Vec::from_iter(split), vec![2, 3]);
    /// ```
    pub fn split_off(&mut self, at: usize) -> Result<Sequence<T>> {
        if at > self.len {
            return Err(CollectionError::IndexOutOfRange {
                index: at,
                len: self.len,
            });
        }
        Ok(self.split_nodes(at))
    }
}

impl<T: Debug> Debug for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the sequence as `[a, b, c]`.
impl<T: Display> Display for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new_detached(element: T) -> Box<Node<T>> {
        Box::new(Node {
            prev: None,
            next: None,
            element,
        })
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(sequence: &Sequence<T>, prev: Link<T>, next: Link<T>) {
    unsafe {
        match prev {
            Some(prev) => assert_eq!(prev.as_ref().next, next),
            None => assert_eq!(sequence.head, next),
        }
        match next {
            Some(next) => assert_eq!(next.as_ref().prev, prev),
            None => assert_eq!(sequence.tail, prev),
        }
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for Sequence<T> {}

unsafe impl<T: Sync> Sync for Sequence<T> {}

// Ensure that `Sequence` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: Sequence<&'static str>) -> Sequence<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::error::CollectionError;
    use crate::sequence::Sequence;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::fmt::Debug;

    fn assert_linked<T: Debug + PartialEq>(sequence: &Sequence<T>) {
        assert_eq!(sequence.head_node().is_none(), sequence.is_empty());
        assert_eq!(sequence.tail_node().is_none(), sequence.is_empty());
        assert_eq!(sequence.iter().count(), sequence.len());
        assert_eq!(sequence.iter().rev().count(), sequence.len());
    }

    #[test]
    fn sequence_create() {
        let mut sequence = Sequence::<i32>::new();
        assert!(sequence.is_empty());
        sequence.push_back(1).unwrap();
        assert!(!sequence.is_empty());
        assert_eq!(sequence.pop_back(), Ok(1));
        assert!(sequence.is_empty());
        assert_linked(&sequence);
    }

    #[test]
    fn sequence_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut sequence = Sequence::new();
        sequence.push_back(DropChecker::new(1, &dropped)).unwrap();
        sequence.push_back(DropChecker::new(2, &dropped)).unwrap();
        sequence.push_back(DropChecker::new(3, &dropped)).unwrap();
        drop(sequence);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn sequence_push_and_pop() {
        let mut sequence = Sequence::<i32>::new();
        assert_eq!(sequence.len(), 0);
        assert_eq!(sequence.front(), Err(CollectionError::EmptyCollection));
        assert_eq!(sequence.back(), Err(CollectionError::EmptyCollection));
        assert_eq!(sequence.pop_front(), Err(CollectionError::EmptyCollection));
        assert_eq!(sequence.pop_back(), Err(CollectionError::EmptyCollection));

        sequence.push_back(1).unwrap();
        assert_eq!(sequence.back(), Ok(&1));
        assert_eq!(sequence.pop_front(), Ok(1));
        assert_eq!(sequence.pop_back(), Err(CollectionError::EmptyCollection));
        assert_linked(&sequence);

        sequence.push_front(1).unwrap();
        sequence.push_front(2).unwrap();
        sequence.push_back(3).unwrap();
        assert_eq!(sequence.back(), Ok(&3));
        assert_eq!(sequence.front(), Ok(&2));
        assert_eq!(sequence.pop_front(), Ok(2));
        assert_eq!(sequence.pop_back(), Ok(3));

        assert_eq!(sequence.front(), Ok(&1));
        assert_eq!(sequence.back(), Ok(&1));
        assert_eq!(sequence.pop_back(), Ok(1));
        assert_linked(&sequence);
    }

    #[test]
    fn sequence_rejects_absent_elements() {
        let mut sequence = Sequence::from_iter([1, 2]);
        assert_eq!(sequence.push_back(None), Err(CollectionError::InvalidArgument));
        assert_eq!(sequence.push_front(None), Err(CollectionError::InvalidArgument));
        assert_eq!(sequence.insert_at(1, None), Err(CollectionError::InvalidArgument));
        assert_eq!(Vec::from_iter(sequence.iter().copied()), vec![1, 2]);
        assert_eq!(sequence.push_back(Some(3)), Ok(()));
        assert_eq!(sequence.back(), Ok(&3));
    }

    #[test]
    fn sequence_insert_at() {
        let mut sequence = Sequence::from_iter(0..10);
        sequence.insert_at(5, 10).unwrap();
        assert_eq!(
            Vec::from_iter(sequence.iter().copied()),
            Vec::from_iter((0..5).chain(Some(10)).chain(5..10))
        );

        sequence.insert_at(0, 11).unwrap();
        assert_eq!(sequence.front(), Ok(&11));

        sequence.insert_at(sequence.len(), 12).unwrap();
        assert_eq!(sequence.back(), Ok(&12));

        sequence.insert_at(usize::MAX, 13).unwrap();
        assert_eq!(sequence.back(), Ok(&13));
        assert_eq!(sequence.len(), 14);
        assert_linked(&sequence);
    }

    #[test]
    fn sequence_get() {
        let sequence = Sequence::from_iter(0..7);
        for i in 0..7 {
            assert_eq!(sequence.get(i), Ok(&i));
        }
        assert_eq!(
            sequence.get(7),
            Err(CollectionError::IndexOutOfRange { index: 7, len: 7 })
        );
        assert_eq!(
            Sequence::<u8>::new().get(0),
            Err(CollectionError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn sequence_append_and_split() {
        fn check(left: std::ops::Range<i32>, right: std::ops::Range<i32>) {
            let mut sequence = Sequence::from_iter(left.clone());
            let mut other = Sequence::from_iter(right.clone());
            sequence.append(&mut other);
            assert!(other.is_empty());
            assert_linked(&other);
            assert_linked(&sequence);
            assert_eq!(
                Vec::from_iter(sequence.iter().copied()),
                Vec::from_iter(left.clone().chain(right.clone()))
            );

            let split = sequence.split_off(left.len()).unwrap();
            assert_linked(&sequence);
            assert_linked(&split);
            assert_eq!(Vec::from_iter(sequence), Vec::from_iter(left));
            assert_eq!(Vec::from_iter(split), Vec::from_iter(right));
        }
        check(0..5, 5..7);
        check(0..5, 0..0);
        check(0..0, 0..2);
        check(0..0, 0..0);
        check(0..1, 1..2);

        let mut sequence = Sequence::from_iter(0..3);
        assert_eq!(
            sequence.split_off(4).unwrap_err(),
            CollectionError::IndexOutOfRange { index: 4, len: 3 }
        );
    }

    #[test]
    fn sequence_display() {
        assert_eq!(Sequence::<i32>::new().to_string(), "[]");
        assert_eq!(Sequence::from_iter([1]).to_string(), "[1]");
        assert_eq!(Sequence::from_iter([1, 2, 3]).to_string(), "[1, 2, 3]");
    }

    #[derive(Debug, Clone)]
    enum Op {
        PushFront(i32),
        PushBack(i32),
        InsertAt(usize, i32),
        PopFront,
        PopBack,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i32>().prop_map(Op::PushFront),
            any::<i32>().prop_map(Op::PushBack),
            (0usize..40, any::<i32>()).prop_map(|(at, x)| Op::InsertAt(at, x)),
            Just(Op::PopFront),
            Just(Op::PopBack),
        ]
    }

    proptest! {
        #[test]
        fn sequence_tracks_a_vec_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
            let mut sequence = Sequence::<i32>::new();
            let mut model = Vec::new();
            for op in ops {
                match op {
                    Op::PushFront(x) => {
                        sequence.push_front(x).unwrap();
                        model.insert(0, x);
                    }
                    Op::PushBack(x) => {
                        sequence.push_back(x).unwrap();
                        model.push(x);
                    }
                    Op::InsertAt(at, x) => {
                        sequence.insert_at(at, x).unwrap();
                        let clamped = at.min(model.len());
                        model.insert(clamped, x);
                        prop_assert_eq!(sequence.get(clamped), Ok(&x));
                    }
                    Op::PopFront => {
                        let expected = if model.is_empty() {
                            Err(CollectionError::EmptyCollection)
                        } else {
                            Ok(model.remove(0))
                        };
                        prop_assert_eq!(sequence.pop_front(), expected);
                    }
                    Op::PopBack => {
                        prop_assert_eq!(
                            sequence.pop_back(),
                            model.pop().ok_or(CollectionError::EmptyCollection)
                        );
                    }
                }
                prop_assert_eq!(sequence.len(), model.len());
            }
            assert_linked(&sequence);
            prop_assert_eq!(Vec::from_iter(sequence), model);
        }
    }
}
