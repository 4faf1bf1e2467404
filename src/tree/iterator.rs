use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use generational_arena::{Arena, Index};

use super::{CompleteTree, Vertex};
use crate::queue::Queue;

/// Walks the vertex indices of a tree in breadth-first order, holding the
/// frontier in any [`Queue`].
pub(crate) struct LevelOrder<'a, T, Q> {
    tree: &'a CompleteTree<T>,
    queue: Q,
}

impl<'a, T, Q: Queue<Index>> LevelOrder<'a, T, Q> {
    pub(crate) fn new(tree: &'a CompleteTree<T>, mut queue: Q) -> Self {
        if let Some(root) = tree.root {
            queue.enqueue(root);
        }
        Self { tree, queue }
    }
}

impl<T, Q: Queue<Index>> Iterator for LevelOrder<'_, T, Q> {
    type Item = Index;

    fn next(&mut self) -> Option<Index> {
        let index = self.queue.dequeue()?;
        for child in self.tree.vertex(index).children() {
            self.queue.enqueue(child);
        }
        Some(index)
    }
}

/// An iterator over the elements of a [`CompleteTree`] in breadth-first
/// order.
///
/// This `struct` is created by [`CompleteTree::iter`].
pub struct Iter<'a, T> {
    order: LevelOrder<'a, T, VecDeque<Index>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(tree: &'a CompleteTree<T>) -> Self {
        Self {
            order: tree.level_order(),
            remaining: tree.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let tree = self.order.tree;
        let index = self.order.next()?;
        self.remaining -= 1;
        Some(&tree.vertex(index).element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.remaining).finish()
    }
}

impl<'a, T> IntoIterator for &'a CompleteTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An owning iterator over the elements of a [`CompleteTree`] in
/// breadth-first order.
///
/// This `struct` is created by the [`into_iter`](IntoIterator::into_iter)
/// method on [`CompleteTree`].
pub struct IntoIter<T> {
    vertices: Arena<Vertex<T>>,
    order: std::vec::IntoIter<Index>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let index = self.order.next()?;
        self.vertices.remove(index).map(|vertex| vertex.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for CompleteTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let order = Vec::from_iter(self.level_order());
        IntoIter {
            vertices: self.vertices,
            order: order.into_iter(),
        }
    }
}
