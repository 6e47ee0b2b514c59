use crate::error::Error;
use crate::sequence::Sequence;
use std::hash::{Hash, Hasher};

/// Sequences are equal iff they have the same length and pairwise-equal
/// elements in forward order. The length is compared first, so a sequence
/// is never equal to a longer one it merely prefixes.
impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

/// The hash is structural: the elements in forward order, then the length.
/// Equal sequences therefore hash equally, consistent with [`PartialEq`].
impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for element in self {
            element.hash(state);
        }
        self.len().hash(state);
    }
}

impl<T> Sequence<T> {
    /// Returns the position of the first element equal to `value`,
    /// searching forward from the front, or `None` if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_sequence::Sequence;
    ///
    /// let seq: Sequence<char> = "aba".chars().collect();
    ///
    /// assert_eq!(seq.position_of(&'a'), Some(0));
    /// assert_eq!(seq.position_of(&'b'), Some(1));
    /// assert_eq!(seq.position_of(&'z'), None);
    /// ```
    pub fn position_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == value)
    }

    /// Returns the position of the last element equal to `value`,
    /// searching backward from the back, or `None` if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_sequence::Sequence;
    ///
    /// let seq: Sequence<char> = "aba".chars().collect();
    ///
    /// assert_eq!(seq.rposition_of(&'a'), Some(2));
    /// assert_eq!(seq.rposition_of(&'b'), Some(1));
    /// assert_eq!(seq.rposition_of(&'z'), None);
    /// ```
    pub fn rposition_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut at = self.len();
        let mut node = self.back_node();
        while node != self.sentinel_node() {
            at -= 1;
            // SAFETY: `node` is a real node until it reaches the sentinel,
            // and real nodes hold a valid element.
            unsafe {
                if node.as_ref().element == *value {
                    return Some(at);
                }
                node = node.as_ref().prev;
            }
        }
        None
    }

    /// Returns `true` if the sequence contains an element equal to
    /// `value`, i.e. iff [`position_of`](Sequence::position_of) finds a
    /// match.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_sequence::Sequence;
    ///
    /// let seq: Sequence<i32> = (0..3).collect();
    ///
    /// assert!(seq.contains(&0));
    /// assert!(!seq.contains(&10));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.position_of(value).is_some()
    }

    /// Returns `true` if every element of `values` is contained in the
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_sequence::Sequence;
    ///
    /// let seq: Sequence<i32> = (0..3).collect();
    ///
    /// assert!(seq.contains_all(&[2, 0]));
    /// assert!(!seq.contains_all(&[0, 5]));
    /// ```
    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        T: PartialEq + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Produces an ordered snapshot of the current elements, front to
    /// back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_sequence::Sequence;
    ///
    /// let seq: Sequence<i32> = (0..3).collect();
    /// assert_eq!(seq.to_vec(), vec![0, 1, 2]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Produces a new independent sequence containing copies of the
    /// elements at positions `[from, to)`, in order. Later mutation of
    /// either sequence leaves the other untouched.
    ///
    /// Fails with [`Error::OutOfRange`] when `to > len` or `from > to`,
    /// before any copying happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_sequence::Sequence;
    ///
    /// let seq: Sequence<i32> = (0..5).collect();
    ///
    /// let sub = seq.sublist(1, 4)?;
    /// assert_eq!(sub.to_vec(), vec![1, 2, 3]);
    ///
    /// assert!(seq.sublist(2, 6).is_err());
    /// assert!(seq.sublist(4, 2).is_err());
    /// # Ok::<(), ring_sequence::Error>(())
    /// ```
    pub fn sublist(&self, from: usize, to: usize) -> Result<Sequence<T>, Error>
    where
        T: Clone,
    {
        if to > self.len() {
            return Err(Error::OutOfRange {
                index: to,
                len: self.len(),
            });
        }
        if from > to {
            return Err(Error::OutOfRange {
                index: from,
                len: self.len(),
            });
        }
        Ok(self.iter().skip(from).take(to - from).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::Sequence;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn eq_same_elements() {
        let a: Sequence<i32> = (0..4).collect();
        let b: Sequence<i32> = (0..4).collect();
        assert_eq!(a, b);

        let c: Sequence<i32> = (1..5).collect();
        assert_ne!(a, c);

        let empty_a: Sequence<i32> = Sequence::new();
        let empty_b: Sequence<i32> = Sequence::new();
        assert_eq!(empty_a, empty_b);
    }

    #[test]
    fn eq_rejects_prefix() {
        // A sequence must not compare equal to a longer one it prefixes,
        // in either direction.
        let short = Sequence::from_iter(["a", "b"]);
        let long = Sequence::from_iter(["a", "b", "c"]);
        assert_ne!(short, long);
        assert_ne!(long, short);
    }

    #[test]
    fn hash_consistent_with_eq() {
        let a: Sequence<i32> = (0..4).collect();
        let b: Sequence<i32> = (0..4).collect();
        assert_eq!(hash_of(&a), hash_of(&b));

        // The length suffix keeps prefixes apart.
        let prefix: Sequence<i32> = (0..3).collect();
        assert_ne!(hash_of(&a), hash_of(&prefix));
    }

    #[test]
    fn clone_is_independent() {
        let mut a: Sequence<i32> = (0..3).collect();
        let b = a.clone();
        assert_eq!(a, b);

        a.push_back(3);
        assert_ne!(a, b);
        assert_eq!(b.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn search_positions() {
        let seq: Sequence<&str> = Sequence::from_iter(["a", "b", "a"]);

        assert_eq!(seq.position_of(&"a"), Some(0));
        assert_eq!(seq.rposition_of(&"a"), Some(2));
        assert_eq!(seq.position_of(&"b"), Some(1));
        assert_eq!(seq.rposition_of(&"b"), Some(1));
        assert_eq!(seq.position_of(&"z"), None);
        assert_eq!(seq.rposition_of(&"z"), None);

        assert!(seq.contains(&"b"));
        assert!(!seq.contains(&"z"));
        assert!(seq.contains_all(&["a", "b"]));
        assert!(!seq.contains_all(&["a", "z"]));

        let empty: Sequence<&str> = Sequence::new();
        assert_eq!(empty.position_of(&"a"), None);
        assert_eq!(empty.rposition_of(&"a"), None);
        // Vacuously true, matching the per-element contract.
        assert!(empty.contains_all(&[]));
    }

    #[test]
    fn sublist_copies_slice() {
        let seq: Sequence<i32> = (0..5).collect();

        let sub = seq.sublist(1, 4).unwrap();
        assert_eq!(sub.to_vec(), vec![1, 2, 3]);

        // Degenerate but valid ranges.
        assert!(seq.sublist(2, 2).unwrap().is_empty());
        assert_eq!(seq.sublist(0, 5).unwrap(), seq);

        assert_eq!(
            seq.sublist(2, 6),
            Err(Error::OutOfRange { index: 6, len: 5 })
        );
        assert_eq!(
            seq.sublist(4, 2),
            Err(Error::OutOfRange { index: 4, len: 5 })
        );
    }

    #[test]
    fn sublist_is_independent() {
        let mut seq: Sequence<i32> = (0..5).collect();
        let sub = seq.sublist(1, 3).unwrap();

        seq.set(1, 99).unwrap();
        seq.pop_back().unwrap();

        assert_eq!(sub.to_vec(), vec![1, 2]);
    }

    #[test]
    fn to_vec_snapshot() {
        let seq: Sequence<i32> = (0..3).collect();
        let snapshot = seq.to_vec();
        assert_eq!(snapshot, vec![0, 1, 2]);

        let empty: Sequence<i32> = Sequence::new();
        assert!(empty.to_vec().is_empty());
    }
}
