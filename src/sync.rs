use crate::set::{Set, UnorderedSet};
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};
use std::{fmt, ptr};

/// [`UnorderedSet`] behind a mutex. Every operation takes the lock for its whole duration.
///
/// All methods take `&self`, so the set can be shared between threads via `Arc`.
/// Two preconditions come with the lock:
/// - a visitor passed to [`each`](SyncSet::each) must not call back into the same set;
/// - two threads must not compare the same pair of `SyncSet`s in opposite directions at the
///   same time, because [`is_equal`](SyncSet::is_equal) holds the receiver's lock while
///   traversing `other`.
pub struct SyncSet<T> {
    inner: Mutex<UnorderedSet<T>>,
}

impl<T> SyncSet<T> {
    pub fn new() -> Self {
        Self::from(UnorderedSet::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(UnorderedSet::with_capacity(capacity))
    }

    pub fn into_inner(self) -> UnorderedSet<T> {
        self.inner.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.lock().to_vec()
    }

    fn lock(&self) -> MutexGuard<'_, UnorderedSet<T>> {
        // Visitors only ever see shared references, so a panic while the lock is held
        // cannot leave the set half-modified.
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("Recovering set lock poisoned by a panic");
            self.inner.clear_poison();
            poisoned.into_inner()
        })
    }
}

impl<T: Eq + Hash> SyncSet<T> {
    pub fn add<I: IntoIterator<Item = T>>(&self, items: I) {
        self.lock().add(items)
    }

    pub fn remove<'a, Q, I>(&self, items: I)
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        self.lock().remove(items)
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.lock().contains(item)
    }

    pub fn each<F: FnMut(&T) -> bool>(&self, visitor: F) {
        self.lock().each(visitor)
    }

    /// Identity means equality: an `other` located at the same address as `self` is treated as
    /// the same set without taking the lock or inspecting its contents.
    pub fn is_equal<S: Set<T> + ?Sized>(&self, other: &S) -> bool {
        if ptr::addr_eq(self as *const Self, other as *const S) {
            return true;
        }
        self.lock().is_equal(other)
    }
}

impl<T: Eq + Hash> Set<T> for SyncSet<T> {
    fn add<I: IntoIterator<Item = T>>(&mut self, items: I) {
        SyncSet::add(self, items)
    }

    fn remove<'a, Q, I>(&mut self, items: I)
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        SyncSet::remove(self, items)
    }

    fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        SyncSet::contains(self, item)
    }

    fn len(&self) -> usize {
        SyncSet::len(self)
    }

    fn clear(&mut self) {
        SyncSet::clear(self)
    }

    fn each<F: FnMut(&T) -> bool>(&self, visitor: F) {
        SyncSet::each(self, visitor)
    }

    fn is_equal<S: Set<T> + ?Sized>(&self, other: &S) -> bool {
        SyncSet::is_equal(self, other)
    }
}

impl<T> Default for SyncSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<UnorderedSet<T>> for SyncSet<T> {
    fn from(set: UnorderedSet<T>) -> Self {
        Self {
            inner: Mutex::new(set),
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for SyncSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(UnorderedSet::from_iter(iter))
    }
}

impl<T: fmt::Debug> fmt::Debug for SyncSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SyncSet").field(&*self.lock()).finish()
    }
}
