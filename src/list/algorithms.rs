use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given
    /// value.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time; the walk stops at
    /// the first match.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(!list.contains(&5));
    ///
    /// list.push_back(0);
    /// list.push_back(5);
    ///
    /// assert!(list.contains(&5));
    /// assert!(!list.contains(&10));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    #[test]
    fn membership_tracks_current_values() {
        let mut list = List::new();
        assert!(!list.contains(&5));

        list.push_back(1);
        list.push_back(5);
        assert!(list.contains(&5));

        list.remove(-1).unwrap();
        assert!(!list.contains(&5));

        list.set(0, 5).unwrap();
        assert!(list.contains(&5));
    }

    #[test]
    fn equality_is_elementwise() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        let c = List::from_iter([1, 2]);
        let d = List::from_iter([1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(List::<i32>::new(), List::new());
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(List::from_iter([1, 2]) < List::from_iter([1, 3]));
        assert!(List::from_iter([1]) < List::from_iter([1, 1]));
        assert!(List::<i32>::new() < List::from_iter([0]));
    }

    #[test]
    fn clone_detaches_from_the_original() {
        let mut original = List::from_iter([1, 2, 3]);
        let cloned = original.clone();
        assert_eq!(original, cloned);

        original.set(0, 9).unwrap();
        original.push_back(4);
        assert_eq!(Vec::from_iter(&cloned), vec![&1, &2, &3]);
    }

    #[test]
    fn equal_lists_hash_alike() {
        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
