use crate::error::Result;
use crate::{tree, CompleteTree, Sequence};

/// The operations shared by every collection of this crate.
///
/// Code written against this trait works with a [`Sequence`] and with a
/// [`CompleteTree`] alike; only the order of [`iter`](Collection::iter)
/// differs (insertion order for the sequence, breadth-first order for the
/// tree).
///
/// # Examples
///
/// ```
/// use linked_collections::{Collection, CompleteTree, Sequence};
///
/// fn fill<C: Collection<u32>>(collection: &mut C) {
///     for i in 0..4 {
///         collection.add(i).unwrap();
///     }
///     assert!(collection.remove(&2));
/// }
///
/// let mut sequence = Sequence::new();
/// fill(&mut sequence);
/// assert_eq!(Vec::from_iter(Collection::iter(&sequence).copied()), vec![0, 1, 3]);
///
/// let mut tree = CompleteTree::new();
/// fill(&mut tree);
/// assert_eq!(Vec::from_iter(Collection::iter(&tree).copied()), vec![0, 1, 3]);
/// ```
pub trait Collection<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds an element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument)
    /// if `element` is `None`.
    fn add(&mut self, element: impl Into<Option<T>>) -> Result<()>;

    /// Removes one element equal to `x`, returning whether one was found.
    fn remove(&mut self, x: &T) -> bool
    where
        T: PartialEq;

    fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }

    fn iter(&self) -> Self::Iter<'_>;
}

impl<T> Collection<T> for Sequence<T> {
    type Iter<'a> = crate::Iter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        Sequence::len(self)
    }

    fn add(&mut self, element: impl Into<Option<T>>) -> Result<()> {
        self.push_back(element)
    }

    fn remove(&mut self, x: &T) -> bool
    where
        T: PartialEq,
    {
        Sequence::remove(self, x)
    }

    fn iter(&self) -> crate::Iter<'_, T> {
        Sequence::iter(self)
    }
}

impl<T> Collection<T> for CompleteTree<T> {
    type Iter<'a> = tree::Iter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        CompleteTree::len(self)
    }

    fn add(&mut self, element: impl Into<Option<T>>) -> Result<()> {
        self.insert(element)
    }

    fn remove(&mut self, x: &T) -> bool
    where
        T: PartialEq,
    {
        CompleteTree::remove(self, x).is_some()
    }

    fn iter(&self) -> tree::Iter<'_, T> {
        CompleteTree::iter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;
    use crate::{CollectionError, CompleteTree, Sequence};

    fn exercise<C: Collection<i32> + Default>() {
        let mut collection = C::default();
        assert!(collection.is_empty());
        assert_eq!(collection.add(None), Err(CollectionError::InvalidArgument));
        assert!(collection.is_empty());

        for i in [5, 7, 5, 9] {
            collection.add(i).unwrap();
        }
        assert_eq!(collection.len(), 4);
        assert!(collection.contains(&9));
        assert!(!collection.contains(&1));

        assert!(collection.remove(&5));
        assert!(collection.contains(&5));
        assert!(collection.remove(&5));
        assert!(!collection.contains(&5));
        assert!(!collection.remove(&5));
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.iter().count(), 2);
    }

    #[test]
    fn sequence_is_a_collection() {
        exercise::<Sequence<i32>>();
    }

    #[test]
    fn tree_is_a_collection() {
        exercise::<CompleteTree<i32>>();
    }
}
