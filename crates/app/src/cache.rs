//! Tab-scoped view-state caching.
//!
//! Each dashboard owns its caches in component signals, so their lifetime is
//! the component mount: navigating away (or logging out) drops everything.
//! Nothing here fetches — the caller performs the request and stores the
//! result, which keeps the last-write-wins behavior of overlapping requests
//! explicit at the call site.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A mapping from parent id to the last-fetched snapshot for that id.
///
/// `store` overwrites unconditionally: when two requests for the same key
/// are in flight, the last response to resolve wins. An empty fetched list
/// is a present (empty) snapshot, distinct from a key never fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyedCache<K, V> {
    slots: HashMap<K, V>,
}

impl<K: Eq + Hash, V> KeyedCache<K, V> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// The cached snapshot, if this key was ever fetched. Never fetches.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.slots.get(key)
    }

    /// Store a fetched snapshot, replacing any prior value for the key.
    pub fn store(&mut self, key: K, value: V) {
        self.slots.insert(key, value);
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over cached snapshots in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.slots.values()
    }
}

/// Tracks the single open disclosure within one list level.
///
/// Expanding a new key implicitly collapses the previously open sibling;
/// expanding the open key collapses it. Course and lesson levels each get
/// their own instance, so one course panel and one lesson panel may be open
/// at the same time, but never two of either.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionState<K> {
    open: Option<K>,
}

impl<K: PartialEq> ExpansionState<K> {
    pub fn new() -> Self {
        Self { open: None }
    }

    /// Toggle a key; returns whether it is open afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.open.as_ref() == Some(&key) {
            self.open = None;
            false
        } else {
            self.open = Some(key);
            true
        }
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open.as_ref() == Some(key)
    }
}

/// Once-per-mount gate for tab-triggered fetches.
///
/// The first activation of a tab reports true and triggers its fetch; later
/// activations render from cache. Dies with the component, so a remount
/// fetches fresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchGate<T> {
    seen: HashSet<T>,
}

impl<T: Eq + Hash> FetchGate<T> {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    pub fn first_visit(&mut self, tag: T) -> bool {
        self.seen.insert(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{CourseProgress, Lesson};

    #[test]
    fn get_never_fabricates_a_slot() {
        let cache: KeyedCache<i64, Vec<Lesson>> = KeyedCache::new();
        assert!(cache.get(&42).is_none());
    }

    #[test]
    fn second_store_fully_replaces_the_first() {
        let mut cache = KeyedCache::new();
        cache.store(9, vec![1, 2, 3]);
        cache.store(9, vec![4]);
        assert_eq!(cache.get(&9), Some(&vec![4]));
    }

    #[test]
    fn empty_fetch_result_is_cached_as_empty_not_absent() {
        let mut cache: KeyedCache<i64, Vec<Lesson>> = KeyedCache::new();
        cache.store(42, Vec::new());
        assert_eq!(cache.get(&42).map(Vec::len), Some(0));
    }

    #[test]
    fn refetched_progress_snapshot_includes_new_completion() {
        let mut progress: KeyedCache<i64, CourseProgress> = KeyedCache::new();
        progress.store(
            9,
            CourseProgress {
                course_id: 9,
                total_lessons: 3,
                completed_lessons: vec![4],
            },
        );

        // Lesson 5 marked complete; the refetched snapshot replaces the slot.
        progress.store(
            9,
            CourseProgress {
                course_id: 9,
                total_lessons: 3,
                completed_lessons: vec![4, 5],
            },
        );

        let snapshot = progress.get(&9).unwrap();
        assert!(snapshot.completed_lessons.contains(&5));
        assert_eq!(snapshot.completion_percent(), 67);
    }

    #[test]
    fn expanding_a_sibling_collapses_the_open_one() {
        let mut open = ExpansionState::new();
        assert!(open.toggle("a"));
        assert!(open.is_open(&"a"));

        assert!(open.toggle("b"));
        assert!(open.is_open(&"b"));
        assert!(!open.is_open(&"a"));
    }

    #[test]
    fn toggling_the_open_key_collapses_it() {
        let mut open = ExpansionState::new();
        open.toggle(3);
        assert!(!open.toggle(3));
        assert!(!open.is_open(&3));
    }

    #[test]
    fn levels_are_independent() {
        let mut courses = ExpansionState::new();
        let mut lessons = ExpansionState::new();
        courses.toggle(1);
        lessons.toggle(10);
        assert!(courses.is_open(&1));
        assert!(lessons.is_open(&10));
    }

    #[test]
    fn fetch_gate_fires_once_per_tag() {
        let mut gate = FetchGate::new();
        assert!(gate.first_visit("progress"));
        assert!(!gate.first_visit("progress"));
        assert!(gate.first_visit("available"));
    }
}
