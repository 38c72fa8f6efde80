use crate::set::{Set, UnorderedSet};
use std::borrow::Borrow;
use std::cell::Cell;
use std::hash::Hash;

/// Set that counts how many elements have been handed to visitors of [`Set::each`].
pub(crate) struct CountingSet<'a> {
    pub(crate) inner: UnorderedSet<u32>,
    pub(crate) visits: &'a Cell<usize>,
}

impl Set<u32> for CountingSet<'_> {
    fn add<I: IntoIterator<Item = u32>>(&mut self, items: I) {
        self.inner.add(items)
    }

    fn remove<'a, Q, I>(&mut self, items: I)
    where
        u32: Borrow<Q>,
        Q: ?Sized + Hash + Eq + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        self.inner.remove(items)
    }

    fn contains<Q>(&self, item: &Q) -> bool
    where
        u32: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.contains(item)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn clear(&mut self) {
        self.inner.clear()
    }

    fn each<F: FnMut(&u32) -> bool>(&self, mut visitor: F) {
        self.inner.each(|item| {
            self.visits.set(self.visits.get() + 1);
            visitor(item)
        })
    }
}
