use crate::config::{Config, SetKind};
use crate::set::{Set, UnorderedSet};
use crate::sync::SyncSet;
use derive_more::From;
use std::borrow::Borrow;
use std::hash::Hash;
use std::ptr;

/// Set returned by the factory. Callers use it through [`Set`] and never need to know
/// which flavour they got.
#[derive(Debug, From)]
pub enum AnySet<T> {
    Plain(UnorderedSet<T>),
    Synced(SyncSet<T>),
}

impl<T> AnySet<T> {
    pub fn kind(&self) -> SetKind {
        match self {
            AnySet::Plain(_) => SetKind::NonThreadSafe,
            AnySet::Synced(_) => SetKind::ThreadSafe,
        }
    }
}

/// Create a set of the requested `kind` holding `items`.
pub fn new_set<T, I>(kind: SetKind, items: I) -> AnySet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    from_config(
        &Config {
            kind,
            capacity: None,
        },
        items,
    )
}

/// Create a set as described by `config` holding `items`.
pub fn from_config<T, I>(config: &Config, items: I) -> AnySet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut set = UnorderedSet::new();
    if let Some(capacity) = config.capacity {
        if let Err(e) = set.try_reserve(capacity) {
            log::warn!("Ignoring capacity hint {capacity}: {e}");
        }
    }
    set.add(items);
    log::debug!("Created {} set with {} initial item(s)", config.kind, set.len());
    match config.kind {
        SetKind::NonThreadSafe => AnySet::Plain(set),
        SetKind::ThreadSafe => AnySet::Synced(SyncSet::from(set)),
    }
}

impl<T: Eq + Hash> Set<T> for AnySet<T> {
    fn add<I: IntoIterator<Item = T>>(&mut self, items: I) {
        match self {
            AnySet::Plain(set) => set.add(items),
            AnySet::Synced(set) => set.add(items),
        }
    }

    fn remove<'a, Q, I>(&mut self, items: I)
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        match self {
            AnySet::Plain(set) => set.remove(items),
            AnySet::Synced(set) => set.remove(items),
        }
    }

    fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self {
            AnySet::Plain(set) => set.contains(item),
            AnySet::Synced(set) => set.contains(item),
        }
    }

    fn len(&self) -> usize {
        match self {
            AnySet::Plain(set) => set.len(),
            AnySet::Synced(set) => set.len(),
        }
    }

    fn clear(&mut self) {
        match self {
            AnySet::Plain(set) => set.clear(),
            AnySet::Synced(set) => set.clear(),
        }
    }

    fn each<F: FnMut(&T) -> bool>(&self, visitor: F) {
        match self {
            AnySet::Plain(set) => set.each(visitor),
            AnySet::Synced(set) => set.each(visitor),
        }
    }

    /// Identity means equality: an `other` located at the same address as `self` is treated as
    /// the same set without inspecting its contents.
    fn is_equal<S: Set<T> + ?Sized>(&self, other: &S) -> bool {
        // the synced variant would otherwise lock itself twice
        if ptr::addr_eq(self as *const Self, other as *const S) {
            return true;
        }
        match self {
            AnySet::Plain(set) => set.is_equal(other),
            AnySet::Synced(set) => set.is_equal(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::CountingSet;
    use std::cell::Cell;
    use std::sync::Arc;
    use std::thread;

    const KINDS: [SetKind; 2] = [SetKind::NonThreadSafe, SetKind::ThreadSafe];

    #[test]
    fn test_factory_picks_requested_variant() {
        let set = new_set(SetKind::NonThreadSafe, [1, 2]);
        assert!(matches!(set, AnySet::Plain(_)));
        assert_eq!(set.kind(), SetKind::NonThreadSafe);

        let set = new_set(SetKind::ThreadSafe, [1, 2]);
        assert!(matches!(set, AnySet::Synced(_)));
        assert_eq!(set.kind(), SetKind::ThreadSafe);
    }

    #[test]
    fn test_initial_batch_is_deduplicated() {
        for kind in KINDS {
            let set = new_set(kind, ["a", "b", "a", "c", "b"]);
            assert_eq!(set.len(), 3, "{kind}");
            assert!(set.contains("a"));
            assert!(set.contains("b"));
            assert!(set.contains("c"));
        }
    }

    #[test]
    fn test_from_config_with_capacity() {
        let config = Config {
            kind: SetKind::ThreadSafe,
            capacity: Some(128),
        };
        let mut set = from_config(&config, Vec::<u64>::new());
        assert!(set.is_empty());
        assert_eq!(set.kind(), SetKind::ThreadSafe);

        set.add(0..200);
        assert_eq!(set.len(), 200);
    }

    #[test]
    fn test_oversized_capacity_hint_is_ignored() {
        let config: Config =
            serde_json::from_str(r#"{"kind":"thread-safe","capacity":18446744073709551615}"#)
                .unwrap();
        assert_eq!(config.capacity, Some(usize::MAX));

        let mut set = from_config(&config, [1u8]);
        assert_eq!(set.kind(), SetKind::ThreadSafe);
        assert_eq!(set.len(), 1);
        set.add([2, 3]);
        assert_eq!(set.len(), 3);

        let config = Config {
            kind: SetKind::NonThreadSafe,
            capacity: Some(usize::MAX),
        };
        let set = from_config(&config, ["a", "b"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_equality_rejects_size_mismatch_without_traversal_for_every_kind() {
        for kind in KINDS {
            let visits = Cell::new(0);
            let other = CountingSet {
                inner: (0..100).collect(),
                visits: &visits,
            };
            let receiver = new_set(kind, 0u32..99);
            assert!(!receiver.is_equal(&other), "{kind}");
            assert_eq!(visits.get(), 0, "{kind}");
        }
    }

    #[test]
    fn test_equality_stops_at_first_missing_element_for_every_kind() {
        for kind in KINDS {
            let visits = Cell::new(0);
            let other = CountingSet {
                inner: (100..200).collect(),
                visits: &visits,
            };
            let receiver = new_set(kind, 0u32..100);
            assert!(!receiver.is_equal(&other), "{kind}");
            assert_eq!(visits.get(), 1, "{kind}");

            visits.set(0);
            let receiver = new_set(kind, 100u32..200);
            assert!(receiver.is_equal(&other), "{kind}");
            assert_eq!(visits.get(), 100, "{kind}");
        }
    }

    #[test]
    fn test_scenarios_for_every_kind() {
        for kind in KINDS {
            let mut s = new_set(kind, Vec::<i32>::new());
            s.add([]);
            assert_eq!(s.len(), 0);
            assert!(s.is_empty());

            s.add([1, 2, 3]);
            assert_eq!(s.len(), 3);
            assert!(!s.is_empty());

            s.remove([&2]);
            assert_eq!(s.len(), 2);
            assert!(s.is_equal(&new_set(kind, [1, 3])));

            let a = new_set(kind, [1, 2]);
            let b = new_set(kind, [2, 1]);
            assert!(a.is_equal(&b));
            assert!(b.is_equal(&a));

            s.clear();
            assert!(s.is_empty());
        }
    }

    #[test]
    fn test_compare_across_kinds() {
        let plain = new_set(SetKind::NonThreadSafe, 0..32);
        let synced = new_set(SetKind::ThreadSafe, (0..32).rev());
        assert!(plain.is_equal(&synced));
        assert!(synced.is_equal(&plain));
        assert!(synced.is_equal(&synced));

        let shorter = new_set(SetKind::ThreadSafe, 0..31);
        assert!(!plain.is_equal(&shorter));
        assert!(!shorter.is_equal(&plain));
    }

    #[test]
    fn test_each_with_early_exit_for_every_kind() {
        for kind in KINDS {
            let s = new_set(kind, 0..10);
            let mut visited = 0;
            s.each(|_| {
                visited += 1;
                visited < 4
            });
            assert_eq!(visited, 4, "{kind}");
        }
    }

    #[test]
    fn test_synced_set_shared_between_threads() {
        let AnySet::Synced(set) = new_set(SetKind::ThreadSafe, [0usize]) else {
            panic!("expected synced set");
        };
        let set = Arc::new(set);
        let writer = {
            let set = set.clone();
            thread::spawn(move || set.add(1..100))
        };
        let remover = {
            let set = set.clone();
            thread::spawn(move || set.remove([&0]))
        };
        writer.join().unwrap();
        remover.join().unwrap();
        assert_eq!(set.len(), 99);
        assert!(!set.contains(&0));
    }
}
