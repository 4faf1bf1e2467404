use crate::error::{CollectionError, Result};
use crate::sequence::{Link, Node, Sequence};
use std::fmt;
use std::ptr::NonNull;

/// A bidirectional cursor over a `Sequence`.
///
/// The cursor always sits *between* two elements. It keeps the node right
/// before it (`previous`) and the node right after it (`next`); either is
/// `None` at the matching end of the sequence. In a sequence with length *n*
/// there are *n* + 1 positions, indexed by 0, 1, ..., *n*.
///
/// Moving forward returns the element crossed over, and so does moving
/// backward, so [`try_previous`](Cursor::try_previous) right after
/// [`try_next`](Cursor::try_next) yields the same element again.
///
/// # Examples
///
/// Here is a simple example showing how the cursor works. (The cursor
/// position is denoted by `|`).
/// ```
/// use linked_collections::{CollectionError, Sequence};
///
/// // Create a sequence: [A B C]
/// let sequence = Sequence::from_iter(['A', 'B', 'C']);
///
/// // Create a cursor at start: [|A B C] (index = 0)
/// let mut cursor = sequence.cursor();
/// assert!(!cursor.has_previous());
/// assert_eq!(cursor.try_previous(), Err(CollectionError::NoSuchElement));
///
/// // Move cursor forward: [A|B C] (index = 1)
/// assert_eq!(cursor.try_next(), Ok(&'A'));
/// assert_eq!(cursor.index(), 1);
///
/// // Jump to the end: [A B C|] (index = 3)
/// cursor.move_to_end();
/// assert!(!cursor.has_next());
/// assert_eq!(cursor.try_next(), Err(CollectionError::NoSuchElement));
///
/// // Move cursor backward: [A B|C] (index = 2)
/// assert_eq!(cursor.try_previous(), Ok(&'C'));
/// ```
///
/// The cursor borrows the sequence, so the sequence cannot be restructured
/// while the cursor is alive:
///
/// ```compile_fail
/// use linked_collections::Sequence;
///
/// let mut sequence = Sequence::from_iter([1, 2, 3]);
/// let mut cursor = sequence.cursor();
/// sequence.pop_front().unwrap();
/// println!("{:?}", cursor.try_next());
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    previous: Link<T>,
    next: Link<T>,
    sequence: &'a Sequence<T>,
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(sequence: &'a Sequence<T>) -> Self {
        Self {
            index: 0,
            previous: None,
            next: sequence.head_node(),
            sequence,
        }
    }

    fn element_of(node: NonNull<Node<T>>) -> &'a T {
        // SAFETY: every node a cursor points to belongs to the borrowed
        // sequence, which cannot be mutated while the cursor is alive.
        unsafe { &(*node.as_ptr()).element }
    }

    fn same_sequence_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.sequence, other.sequence)
    }

    /// Return the index of the cursor, i.e. the number of elements before it.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if there is an element after the cursor.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if there is an element before the cursor.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Provides the element after the cursor, without moving it.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.next.map(Self::element_of)
    }

    /// Provides the element before the cursor, without moving it.
    pub fn peek_previous(&self) -> Option<&'a T> {
        self.previous.map(Self::element_of)
    }

    /// Move the cursor over the next element and return that element.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] if the cursor is at the end; the
    /// cursor stays where it is.
    pub fn try_next(&mut self) -> Result<&'a T> {
        let node = self.next.ok_or(CollectionError::NoSuchElement)?;
        self.previous = Some(node);
        // SAFETY: `node` belongs to the borrowed sequence.
        self.next = unsafe { node.as_ref().next };
        self.index += 1;
        Ok(Self::element_of(node))
    }

    /// Move the cursor back over the previous element and return that
    /// element.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] if the cursor is at the start; the
    /// cursor stays where it is.
    pub fn try_previous(&mut self) -> Result<&'a T> {
        let node = self.previous.ok_or(CollectionError::NoSuchElement)?;
        self.next = Some(node);
        // SAFETY: `node` belongs to the borrowed sequence.
        self.previous = unsafe { node.as_ref().prev };
        self.index -= 1;
        Ok(Self::element_of(node))
    }

    /// Move the cursor before the first element.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn move_to_start(&mut self) {
        self.index = 0;
        self.previous = None;
        self.next = self.sequence.head_node();
    }

    /// Move the cursor after the last element.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Sequence;
    ///
    /// let sequence = Sequence::from_iter([1, 2, 3]);
    /// let mut cursor = sequence.cursor();
    /// cursor.move_to_end();
    ///
    /// let mut seen = Vec::new();
    /// while cursor.has_previous() {
    ///     seen.push(*cursor.try_previous().unwrap());
    /// }
    /// assert_eq!(seen, vec![3, 2, 1]);
    /// ```
    pub fn move_to_end(&mut self) {
        self.index = self.sequence.len();
        self.previous = self.sequence.tail_node();
        self.next = None;
    }

    /// Provides a reference to the sequence the cursor walks over.
    pub fn view(&self) -> &'a Sequence<T> {
        self.sequence
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// Compare cursors by their position.
///
/// Only cursors over the same sequence at the same position are considered
/// equal.
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_sequence_with(other) && self.index == other.index
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("previous", &self.peek_previous())
            .field("next", &self.peek_next())
            .finish()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}
