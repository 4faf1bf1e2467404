use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};

use generational_arena::{Arena, Index};

use crate::error::{CollectionError, Result};
use crate::queue::Queue;

pub use self::iterator::{IntoIter, Iter};
use self::iterator::LevelOrder;

pub mod iterator;

/// A binary tree that stays *complete* at all times: every level except
/// possibly the last is full, and the last level is filled from the left
/// without gaps.
///
/// Elements are placed in breadth-first order. A new element takes the first
/// open slot of the shallowest level; removing an element fills its slot
/// with the element of the last vertex in breadth-first order, and vacates
/// that last slot instead.
///
/// The vertices live in an arena owned by the tree. A vertex refers to its
/// children and to its parent by arena index; the parent index is only a
/// back-reference used to unlink a vertex, never a second owner.
///
/// # Examples
///
/// ```
/// use linked_collections::CompleteTree;
///
/// let mut tree = CompleteTree::new();
/// for i in 1..=5 {
///     tree.insert(i).unwrap();
/// }
/// assert_eq!(tree.height(), Some(2));
/// assert_eq!(Vec::from_iter(tree.iter().copied()), vec![1, 2, 3, 4, 5]);
///
/// assert_eq!(tree.remove(&3), Some(3));
/// assert_eq!(Vec::from_iter(tree.iter().copied()), vec![1, 2, 5, 4]);
/// ```
pub struct CompleteTree<T> {
    vertices: Arena<Vertex<T>>,
    root: Option<Index>,
    len: usize,
}

struct Vertex<T> {
    element: T,
    parent: Option<Index>,
    left: Option<Index>,
    right: Option<Index>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl<T> Vertex<T> {
    fn new(element: T, parent: Option<Index>) -> Self {
        Self {
            element,
            parent,
            left: None,
            right: None,
        }
    }

    fn children(&self) -> impl Iterator<Item = Index> {
        self.left.into_iter().chain(self.right)
    }
}

// private methods
impl<T> CompleteTree<T> {
    fn vertex(&self, index: Index) -> &Vertex<T> {
        &self.vertices[index]
    }

    fn child_mut(&mut self, parent: Index, side: Side) -> &mut Option<Index> {
        let vertex = &mut self.vertices[parent];
        match side {
            Side::Left => &mut vertex.left,
            Side::Right => &mut vertex.right,
        }
    }

    pub(crate) fn level_order(&self) -> LevelOrder<'_, T, VecDeque<Index>> {
        LevelOrder::new(self, VecDeque::new())
    }

    /// Finds the first vertex, in breadth-first order, that misses a child,
    /// and which side is missing.
    fn first_open_slot(&self, root: Index) -> (Index, Side) {
        let mut queue = VecDeque::new();
        queue.enqueue(root);
        while let Some(index) = queue.dequeue() {
            let vertex = self.vertex(index);
            match vertex.left {
                None => return (index, Side::Left),
                Some(left) => queue.enqueue(left),
            }
            match vertex.right {
                None => return (index, Side::Right),
                Some(right) => queue.enqueue(right),
            }
        }
        unreachable!("a finite tree always has a vertex with an open slot")
    }

    /// Adds a present element at the first open slot.
    pub(crate) fn insert_element(&mut self, element: T) {
        match self.root {
            None => {
                let index = self.vertices.insert(Vertex::new(element, None));
                self.root = Some(index);
            }
            Some(root) => {
                let (parent, side) = self.first_open_slot(root);
                let index = self.vertices.insert(Vertex::new(element, Some(parent)));
                *self.child_mut(parent, side) = Some(index);
                tracing::trace!(?side, len = self.len + 1, "vertex attached");
            }
        }
        self.len += 1;
    }

    /// Unlinks the vertex `index` from its parent and frees it. The vertex
    /// must have no children.
    fn detach_leaf(&mut self, index: Index) -> Option<Vertex<T>> {
        let vertex = self.vertices.remove(index)?;
        debug_assert!(vertex.left.is_none() && vertex.right.is_none());
        match vertex.parent {
            None => self.root = None,
            Some(parent) => {
                let side = if self.vertex(parent).left == Some(index) {
                    Side::Left
                } else {
                    Side::Right
                };
                *self.child_mut(parent, side) = None;
            }
        }
        self.len -= 1;
        Some(vertex)
    }
}

impl<T> CompleteTree<T> {
    /// Create an empty `CompleteTree`.
    pub fn new() -> Self {
        Self {
            vertices: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Builds a tree holding clones of the elements of another collection, in
    /// the order that collection iterates them.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::{CompleteTree, Sequence};
    ///
    /// let sequence = Sequence::from_iter(['a', 'b', 'c']);
    /// let tree = CompleteTree::from_collection(&sequence);
    /// assert_eq!(Vec::from_iter(tree), vec!['a', 'b', 'c']);
    /// ```
    pub fn from_collection<'a, I>(collection: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: Clone + 'a,
    {
        collection.into_iter().cloned().collect()
    }

    /// Returns the number of elements in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.root = None;
        self.len = 0;
    }

    /// Adds an element at the leftmost open slot of the shallowest level.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `element` is `None`; the tree
    /// is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::{CollectionError, CompleteTree};
    ///
    /// let mut tree = CompleteTree::new();
    /// tree.insert("root").unwrap();
    /// assert_eq!(tree.insert(None), Err(CollectionError::InvalidArgument));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, element: impl Into<Option<T>>) -> Result<()> {
        let element = element.into().ok_or(CollectionError::InvalidArgument)?;
        self.insert_element(element);
        Ok(())
    }

    /// Removes the first element equal to `x` in breadth-first order, and
    /// returns it.
    ///
    /// The freed slot is refilled with the element of the last vertex in
    /// breadth-first order, and that last vertex is unlinked, so the tree
    /// stays complete. Returns `None`, leaving the tree untouched, if `x` is
    /// absent or not found.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn remove<'q>(&mut self, x: impl Into<Option<&'q T>>) -> Option<T>
    where
        T: PartialEq + 'q,
    {
        let x = x.into()?;
        let mut found = None;
        let mut last = None;
        for index in self.level_order() {
            if found.is_none() && self.vertex(index).element == *x {
                found = Some(index);
            }
            last = Some(index);
        }
        let (found, last) = (found?, last?);
        let last_vertex = self.detach_leaf(last)?;
        tracing::trace!(len = self.len, "last vertex vacated");
        if found == last {
            return Some(last_vertex.element);
        }
        Some(std::mem::replace(
            &mut self.vertices[found].element,
            last_vertex.element,
        ))
    }

    /// Returns `true` if the tree contains an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the height of the tree, or `None` if it is empty.
    ///
    /// Since the tree is always complete, the height is ⌊log₂ *n*⌋ and is
    /// derived from the element count alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::CompleteTree;
    ///
    /// let mut tree = CompleteTree::new();
    /// assert_eq!(tree.height(), None);
    /// tree.extend(0..7);
    /// assert_eq!(tree.height(), Some(2));
    /// tree.insert(7).unwrap();
    /// assert_eq!(tree.height(), Some(3));
    /// ```
    pub fn height(&self) -> Option<u32> {
        (self.len > 0).then(|| self.len.ilog2())
    }

    /// Provides the root vertex, or `None` if the tree is empty.
    pub fn root(&self) -> Option<VertexRef<'_, T>> {
        self.root.map(|index| VertexRef::new(self, index))
    }

    /// Visits every vertex in breadth-first order: the root first, then each
    /// level from left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::CompleteTree;
    ///
    /// let tree = CompleteTree::from_iter(1..=4);
    /// let mut parents = Vec::new();
    /// tree.bfs(|vertex| parents.push(vertex.parent().map(|p| *p.element())));
    /// assert_eq!(parents, vec![None, Some(1), Some(1), Some(2)]);
    /// ```
    pub fn bfs<F>(&self, mut visit: F)
    where
        F: FnMut(VertexRef<'_, T>),
    {
        for index in self.level_order() {
            visit(VertexRef::new(self, index));
        }
    }

    /// Provides an iterator over the elements in breadth-first order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

/// A read-only view of one vertex of a [`CompleteTree`].
pub struct VertexRef<'a, T> {
    tree: &'a CompleteTree<T>,
    index: Index,
}

impl<'a, T> VertexRef<'a, T> {
    fn new(tree: &'a CompleteTree<T>, index: Index) -> Self {
        Self { tree, index }
    }

    fn step(&self, link: impl Fn(&Vertex<T>) -> Option<Index>) -> Option<VertexRef<'a, T>> {
        link(self.tree.vertex(self.index)).map(|index| VertexRef::new(self.tree, index))
    }

    pub fn element(&self) -> &'a T {
        &self.tree.vertex(self.index).element
    }

    pub fn parent(&self) -> Option<VertexRef<'a, T>> {
        self.step(|vertex| vertex.parent)
    }

    pub fn left(&self) -> Option<VertexRef<'a, T>> {
        self.step(|vertex| vertex.left)
    }

    pub fn right(&self) -> Option<VertexRef<'a, T>> {
        self.step(|vertex| vertex.right)
    }

    /// Number of edges between this vertex and the root.
    pub fn depth(&self) -> usize {
        std::iter::successors(self.parent(), VertexRef::parent).count()
    }

    pub fn is_leaf(&self) -> bool {
        self.tree.vertex(self.index).children().next().is_none()
    }
}

impl<T> Clone for VertexRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VertexRef<'_, T> {}

impl<T: Debug> Debug for VertexRef<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VertexRef").field(self.element()).finish()
    }
}

impl<T: Debug> Debug for CompleteTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for CompleteTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CompleteTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = CompleteTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for CompleteTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter()
            .for_each(|element| self.insert_element(element));
    }
}

#[cfg(test)]
mod tests {
    use super::CompleteTree;
    use crate::error::CollectionError;
    use proptest::prelude::*;
    use std::fmt::Debug;
    use tracing_subscriber::EnvFilter;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn bfs_order<T: Clone>(tree: &CompleteTree<T>) -> Vec<T> {
        let mut order = Vec::new();
        tree.bfs(|vertex| order.push(vertex.element().clone()));
        order
    }

    /// Checks the shape: in breadth-first order, once a vertex misses a
    /// child, no later vertex may have any child; and the height derived
    /// from the count equals the depth of the last vertex.
    fn assert_complete<T: Debug>(tree: &CompleteTree<T>) {
        let mut visited = 0;
        let mut gap_seen = false;
        let mut last_depth = None;
        tree.bfs(|vertex| {
            visited += 1;
            match (vertex.left(), vertex.right()) {
                (Some(_), Some(_)) => assert!(!gap_seen, "children after a gap"),
                (Some(_), None) => {
                    assert!(!gap_seen, "children after a gap");
                    gap_seen = true;
                }
                (None, Some(_)) => panic!("right child without a left one"),
                (None, None) => gap_seen = true,
            }
            for child in [vertex.left(), vertex.right()].into_iter().flatten() {
                let parent = child.parent().map(|p| p.element() as *const T);
                assert_eq!(parent, Some(vertex.element() as *const T));
            }
            last_depth = Some(vertex.depth() as u32);
        });
        assert_eq!(visited, tree.len());
        assert_eq!(tree.height(), last_depth);
        assert_eq!(tree.is_empty(), tree.len() == 0);
    }

    #[test]
    fn insert_fills_levels_left_to_right() {
        init_tracing();
        let mut tree = CompleteTree::new();
        for i in 1..=5 {
            tree.insert(i).unwrap();
            assert_complete(&tree);
        }
        assert_eq!(tree.height(), Some(2));
        assert_eq!(bfs_order(&tree), vec![1, 2, 3, 4, 5]);

        let root = tree.root().unwrap();
        assert_eq!(root.element(), &1);
        assert_eq!(root.left().unwrap().left().unwrap().element(), &4);
        assert_eq!(root.left().unwrap().right().unwrap().element(), &5);
        assert!(root.right().unwrap().is_leaf());
    }

    #[test]
    fn remove_moves_the_last_vertex_up() {
        init_tracing();
        let mut tree = CompleteTree::from_iter(1..=5);
        assert_eq!(tree.remove(&3), Some(3));
        assert_eq!(bfs_order(&tree), vec![1, 2, 5, 4]);
        assert_eq!(tree.height(), Some(2));
        assert_complete(&tree);

        assert_eq!(tree.remove(&4), Some(4));
        assert_eq!(bfs_order(&tree), vec![1, 2, 5]);
        assert_eq!(tree.height(), Some(1));

        assert_eq!(tree.remove(&1), Some(1));
        assert_eq!(bfs_order(&tree), vec![5, 2]);
        assert_complete(&tree);
    }

    #[test]
    fn remove_missing_or_absent_is_a_no_op() {
        let mut tree = CompleteTree::from_iter([1, 2, 3]);
        assert_eq!(tree.remove(&9), None);
        assert_eq!(tree.remove(None), None);
        assert_eq!(bfs_order(&tree), vec![1, 2, 3]);

        let mut empty = CompleteTree::<i32>::new();
        assert_eq!(empty.remove(&1), None);
        assert_eq!(empty.height(), None);
    }

    #[test]
    fn remove_root_of_single_vertex_tree() {
        let mut tree = CompleteTree::from_iter(["only"]);
        assert_eq!(tree.remove(&"only"), Some("only"));
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.height(), None);
        tree.insert("again").unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn insert_rejects_absent_elements() {
        let mut tree = CompleteTree::from_iter([1]);
        assert_eq!(tree.insert(None), Err(CollectionError::InvalidArgument));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.insert(Some(2)), Ok(()));
        assert!(tree.contains(&2));
    }

    #[test]
    fn clear_and_reuse() {
        let mut tree = CompleteTree::from_iter(0..10);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        tree.extend(0..3);
        assert_eq!(bfs_order(&tree), vec![0, 1, 2]);
        assert_complete(&tree);
    }

    #[test]
    fn debug_lists_breadth_first() {
        let tree = CompleteTree::from_iter([3, 1, 2]);
        assert_eq!(format!("{:?}", tree), "[3, 1, 2]");
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8),
        Remove(u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0u8..32).prop_map(Op::Insert),
            2 => (0u8..32).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn tree_stays_complete(ops in prop::collection::vec(op_strategy(), 0..300)) {
            let mut tree = CompleteTree::new();
            let mut inserted = 0usize;
            let mut removed = 0usize;
            for op in ops {
                match op {
                    Op::Insert(x) => {
                        tree.insert(x).unwrap();
                        inserted += 1;
                    }
                    Op::Remove(x) => {
                        let present = tree.contains(&x);
                        prop_assert_eq!(tree.remove(&x), present.then_some(x));
                        removed += usize::from(present);
                    }
                }
                prop_assert_eq!(tree.len(), inserted - removed);
                assert_complete(&tree);
            }
        }
    }
}
