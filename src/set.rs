use std::borrow::Borrow;
use std::collections::{HashSet, TryReserveError};
use std::collections::hash_set::{IntoIter, Iter};
use std::fmt;
use std::hash::Hash;

/// Operations shared by every set flavour: the bare [`UnorderedSet`], the lock-guarded
/// [`SyncSet`](crate::sync::SyncSet) and whatever the [`factory`](crate::factory) hands out.
pub trait Set<T: Eq + Hash> {
    /// Insert each item unless already present. Passing nothing is a no-op.
    fn add<I: IntoIterator<Item = T>>(&mut self, items: I);

    /// Delete each item if present. Passing nothing is a no-op.
    fn remove<'a, Q, I>(&mut self, items: I)
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq + 'a,
        I: IntoIterator<Item = &'a Q>;

    fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Call `visitor` once per element, in unspecified order, until it returns `false`.
    ///
    /// Every call is a fresh traversal. The visitor must not modify the set being traversed.
    fn each<F: FnMut(&T) -> bool>(&self, visitor: F);

    /// Same length and every element of `other` is present in `self`.
    ///
    /// Sets of different length are rejected without visiting any element. Otherwise `other` is
    /// traversed and the traversal stops at the first element missing from `self`.
    fn is_equal<S: Set<T> + ?Sized>(&self, other: &S) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut equal = true;
        other.each(|item| {
            equal = self.contains(item);
            equal // stop traversal on first mismatch
        });
        equal
    }
}

/// Collection of unique elements without any ordering.
///
/// Not synchronized: wrap it in a [`SyncSet`](crate::sync::SyncSet) to share between threads.
#[derive(Clone)]
pub struct UnorderedSet<T>(HashSet<T>);

impl<T> UnorderedSet<T> {
    pub fn new() -> Self {
        Self(HashSet::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashSet::with_capacity(capacity))
    }

    /// Make room for at least `additional` more elements without panicking on overflow.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError>
    where
        T: Eq + Hash,
    {
        self.0.try_reserve(additional)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.0.iter().cloned().collect()
    }
}

impl<T: Eq + Hash> Set<T> for UnorderedSet<T> {
    fn add<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.0.extend(items);
    }

    fn remove<'a, Q, I>(&mut self, items: I)
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        for item in items {
            self.0.remove(item);
        }
    }

    fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.0.contains(item)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn clear(&mut self) {
        self.0.clear()
    }

    fn each<F: FnMut(&T) -> bool>(&self, mut visitor: F) {
        for item in &self.0 {
            if !visitor(item) {
                break;
            }
        }
    }
}

impl<T> Default for UnorderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for UnorderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Eq + Hash> Eq for UnorderedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for UnorderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<T> for UnorderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Eq + Hash> Extend<T> for UnorderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<T> IntoIterator for UnorderedSet<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UnorderedSet<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
