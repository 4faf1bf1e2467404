use crate::Sequence;
use std::cmp::Ordering;
use tracing::instrument;

impl<T> Sequence<T> {
    /// Returns a sorted copy of the sequence. The receiver is left untouched.
    ///
    /// This sort is stable (i.e., does not reorder equal elements): when the
    /// comparator reports two fronts as equal, the one from the left half is
    /// taken first.
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the sequence. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time.
    ///
    /// # Current Implementation
    ///
    /// A top-down merge sort over the nodes of the copy: split at `len / 2`,
    /// sort both halves, then merge by relinking nodes; the leftover tail of
    /// either half is spliced on in *O*(1). With the `explicit-stack` feature
    /// (on by default) the splitting is driven by a work stack instead of
    /// recursion, with the same split points.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Sequence;
    /// let sequence = Sequence::from_iter([5, 3, 4, 1, 2]);
    ///
    /// let sorted = sequence.merge_sort(|a, b| a.cmp(b));
    /// assert_eq!(Vec::from_iter(sorted), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// let sorted = sequence.merge_sort(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(sorted), vec![5, 4, 3, 2, 1]);
    /// ```
    #[instrument(level = "trace", skip_all, fields(len = self.len()))]
    pub fn merge_sort<F>(&self, mut compare: F) -> Sequence<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort(self.copy(), &mut compare)
    }

    /// Like [`merge_sort`](Sequence::merge_sort), with the natural order of `T`.
    pub fn merge_sort_ord(&self) -> Sequence<T>
    where
        T: Clone + Ord,
    {
        self.merge_sort(T::cmp)
    }
}

#[cfg(not(feature = "explicit-stack"))]
fn merge_sort<T, F>(mut sequence: Sequence<T>, compare: &mut F) -> Sequence<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if sequence.len() <= 1 {
        return sequence;
    }
    let right = sequence.split_nodes(sequence.len() / 2);
    let left = merge_sort(sequence, compare);
    let right = merge_sort(right, compare);
    merge(left, right, compare)
}

#[cfg(feature = "explicit-stack")]
fn merge_sort<T, F>(sequence: Sequence<T>, compare: &mut F) -> Sequence<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    enum Task<T> {
        Sort(Sequence<T>),
        Merge,
    }

    // `Merge` is pushed below its two `Sort` tasks, so by the time it runs both
    // halves sit sorted on top of `sorted`, right above left.
    let mut tasks = vec![Task::Sort(sequence)];
    let mut sorted: Vec<Sequence<T>> = Vec::new();
    while let Some(task) = tasks.pop() {
        match task {
            Task::Sort(sequence) if sequence.len() <= 1 => sorted.push(sequence),
            Task::Sort(mut left) => {
                let right = left.split_nodes(left.len() / 2);
                tasks.push(Task::Merge);
                tasks.push(Task::Sort(right));
                tasks.push(Task::Sort(left));
            }
            Task::Merge => {
                let right = sorted.pop().unwrap_or_default();
                let left = sorted.pop().unwrap_or_default();
                sorted.push(merge(left, right, compare));
            }
        }
    }
    sorted.pop().unwrap_or_default()
}

/// Merge two sorted sequences by relinking their nodes.
fn merge<T, F>(mut left: Sequence<T>, mut right: Sequence<T>, compare: &mut F) -> Sequence<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Sequence::new();
    loop {
        let take_right = match (left.front(), right.front()) {
            (Ok(l), Ok(r)) => compare(l, r) == Ordering::Greater,
            _ => break,
        };
        if take_right {
            merged.transfer_front_from(&mut right);
        } else {
            merged.transfer_front_from(&mut left);
        }
    }
    merged.append(&mut left);
    merged.append(&mut right);
    merged
}
