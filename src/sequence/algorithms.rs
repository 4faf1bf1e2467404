use crate::sequence::Sequence;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod sort;

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> Sequence<T> {
    /// Returns `true` if the `Sequence` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Sequence;
    ///
    /// let sequence = Sequence::from_iter([0, 1, 2]);
    ///
    /// assert_eq!(sequence.contains(&0), true);
    /// assert_eq!(sequence.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the position of the first element equal to the given value, or
    /// `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Sequence;
    ///
    /// let sequence = Sequence::from_iter(['a', 'b', 'a']);
    /// assert_eq!(sequence.index_of(&'a'), Some(0));
    /// assert_eq!(sequence.index_of(&'b'), Some(1));
    /// assert_eq!(sequence.index_of(&'z'), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.iter().position(|e| e == x)
    }

    /// Removes the first element equal to the given value. Returns `false`,
    /// leaving the sequence untouched, if there is none.
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
    /// let mut sequence = Sequence::from_iter([1, 2, 3, 2]);
    /// assert!(sequence.remove(&2));
    /// assert!(!sequence.remove(&5));
    /// assert_eq!(Vec::from_iter(sequence), vec![1, 3, 2]);
    /// ```
    pub fn remove(&mut self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        let mut link = self.head_node();
        while let Some(node) = link {
            // SAFETY: `node` is reached from `head`, so it belongs to the sequence.
            unsafe {
                if node.as_ref().element == *x {
                    drop(self.detach_node(node));
                    return true;
                }
                link = node.as_ref().next;
            }
        }
        false
    }

    /// Returns a new sequence holding the elements in reverse order. The
    /// receiver is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Sequence;
    ///
    /// let sequence = Sequence::from_iter([1, 2, 3]);
    /// assert_eq!(Vec::from_iter(sequence.reverse()), vec![3, 2, 1]);
    /// assert_eq!(Vec::from_iter(sequence), vec![1, 2, 3]);
    /// ```
    pub fn reverse(&self) -> Sequence<T>
    where
        T: Clone,
    {
        let mut reversed = Sequence::new();
        for element in self {
            reversed.push_front_element(element.clone());
        }
        reversed
    }

    /// Returns a new sequence with the same elements in the same order. The
    /// copy owns its own nodes. Same as [`Clone::clone`].
    pub fn copy(&self) -> Sequence<T>
    where
        T: Clone,
    {
        self.clone()
    }

    /// Searches an element in a sequence that is sorted ascending by
    /// `compare`.
    ///
    /// The scan stops with `false` at the first element greater than `x`,
    /// since nothing after it can be equal in a sorted sequence. An absent
    /// query (`None`) returns `false` without scanning.
    ///
    /// Calling it on a sequence that is not sorted by `compare` gives an
    /// unspecified (but memory safe) answer; it is never checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Sequence;
    ///
    /// let sequence = Sequence::from_iter([1, 3, 5, 7]);
    /// assert!(sequence.linear_search_sorted(&5, |a, b| a.cmp(b)));
    /// assert!(!sequence.linear_search_sorted(&4, |a, b| a.cmp(b)));
    /// assert!(!sequence.linear_search_sorted(None, |a, b| a.cmp(b)));
    /// ```
    pub fn linear_search_sorted<'q, F>(&self, x: impl Into<Option<&'q T>>, mut compare: F) -> bool
    where
        T: PartialEq + 'q,
        F: FnMut(&T, &T) -> Ordering,
    {
        let Some(x) = x.into() else {
            return false;
        };
        for element in self {
            if element == x {
                return true;
            }
            if compare(element, x) == Ordering::Greater {
                return false;
            }
        }
        false
    }

    /// Like [`linear_search_sorted`](Sequence::linear_search_sorted), with the
    /// natural order of `T`.
    pub fn linear_search_sorted_ord<'q>(&self, x: impl Into<Option<&'q T>>) -> bool
    where
        T: Ord + 'q,
    {
        self.linear_search_sorted(x, T::cmp)
    }

    /// Moves the first node of `source` to the back of `self`, reusing the
    /// node allocation.
    pub(crate) fn transfer_front_from(&mut self, source: &mut Self) {
        if let Some(node) = source.pop_front_node() {
            self.push_back_node(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Sequence;
    use std::cell::RefCell;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    #[test]
    fn remove_first_match_only() {
        let mut sequence = Sequence::from_iter([4, 1, 4, 2]);
        assert!(sequence.remove(&4));
        assert_eq!(Vec::from_iter(sequence.iter().copied()), vec![1, 4, 2]);
        assert!(sequence.remove(&2));
        assert_eq!(sequence.back(), Ok(&4));
        assert!(sequence.remove(&1));
        assert_eq!(sequence.front(), Ok(&4));
        assert!(sequence.remove(&4));
        assert!(sequence.is_empty());
        assert!(!sequence.remove(&4));
    }

    #[test]
    fn reverse_keeps_receiver() {
        let sequence = Sequence::from_iter(0..6);
        let reversed = sequence.reverse();
        assert_eq!(reversed.len(), sequence.len());
        for i in 0..sequence.len() {
            assert_eq!(reversed.get(i), sequence.get(sequence.len() - 1 - i));
        }
        assert_eq!(Vec::from_iter(sequence), Vec::from_iter(0..6));
        assert!(Sequence::<u8>::new().reverse().is_empty());
    }

    #[test]
    fn copy_is_independent() {
        let mut sequence = Sequence::from_iter([1, 2, 3]);
        let copy = sequence.copy();
        sequence.pop_back().unwrap();
        sequence.push_front(0).unwrap();
        assert_eq!(Vec::from_iter(copy), vec![1, 2, 3]);
        assert_eq!(Vec::from_iter(sequence), vec![0, 1, 2]);
    }

    #[test]
    fn equality_and_hash() {
        fn hash_of(sequence: &Sequence<i32>) -> u64 {
            let mut hasher = DefaultHasher::new();
            sequence.hash(&mut hasher);
            hasher.finish()
        }
        let a = Sequence::from_iter([1, 2, 3]);
        let b = Sequence::from_iter([1, 2, 3]);
        let c = Sequence::from_iter([1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn linear_search_stops_at_first_greater() {
        let sequence = Sequence::from_iter([1, 3, 5, 7]);
        let visited = RefCell::new(Vec::new());
        let found = sequence.linear_search_sorted(&4, |a: &i32, b: &i32| {
            visited.borrow_mut().push(*a);
            a.cmp(b)
        });
        assert!(!found);
        assert_eq!(visited.into_inner(), vec![1, 3, 5]);

        assert!(sequence.linear_search_sorted_ord(&7));
        assert!(!sequence.linear_search_sorted_ord(&8));
        assert!(!Sequence::<i32>::new().linear_search_sorted_ord(&1));
    }

    #[test]
    fn index_of_and_contains() {
        let sequence = Sequence::from_iter(["x", "y", "z"]);
        assert_eq!(sequence.index_of(&"z"), Some(2));
        assert_eq!(sequence.index_of(&"w"), None);
        assert!(sequence.contains(&"y"));
        assert!(!sequence.contains(&"w"));
    }
}
