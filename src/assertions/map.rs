//! Assertions for key/value maps.

use crate::diff::diff;
use crate::meta::{chain_methods, TestMeta};
use crate::reporter::Reporter;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash};

/// Read access to an associative container.
pub trait AssocMap {
    type Key;
    type Value;

    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn entries(&self) -> Box<dyn Iterator<Item = (&Self::Key, &Self::Value)> + '_>;

    fn entry_count(&self) -> usize;
}

impl<K: Eq + Hash, V, S: BuildHasher> AssocMap for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K: Ord, V> AssocMap for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

/// Key/value checks on a borrowed map.
#[derive(Debug, Clone)]
pub struct MapTest<'a, M> {
    meta: TestMeta<'a>,
    actual: &'a M,
}

/// Start a chain of map checks.
///
/// ```
/// use std::collections::HashMap;
///
/// let t = gt::Recorder::new();
/// let mut m = HashMap::new();
/// m.insert("blue", 5);
/// gt::map(&t, &m).has_key("blue").has_value(5).equal_at("blue", 5);
/// assert_eq!(t.errors(), 0);
/// ```
pub fn map<'a, M: AssocMap>(t: &'a dyn Reporter, actual: &'a M) -> MapTest<'a, M> {
    MapTest {
        meta: TestMeta::new(t),
        actual,
    }
}

/// Short form of [`map`].
pub fn m<'a, M: AssocMap>(t: &'a dyn Reporter, actual: &'a M) -> MapTest<'a, M> {
    map(t, actual)
}

impl<'a, M> MapTest<'a, M> {
    chain_methods!();
}

impl<'a, M> MapTest<'a, M>
where
    M: AssocMap,
    M::Key: Debug,
    M::Value: PartialEq + Debug,
{
    fn missing_key(key: &M::Key) -> String {
        format!("key '{:?}' is not found in the map", key)
    }

    fn holds(&self, key: &M::Key, value: &M::Value) -> bool {
        self.actual.lookup(key) == Some(value)
    }

    fn has_any_value(&self, value: &M::Value) -> bool {
        self.actual.entries().any(|(_, v)| v == value)
    }

    /// Fail unless `actual[key]` equals `expect`. A missing key fails too.
    #[track_caller]
    pub fn equal_at(self, key: M::Key, expect: M::Value) -> Self {
        match self.actual.lookup(&key) {
            None => self.meta.report(Self::missing_key(&key)),
            Some(v) if *v != expect => self.meta.report(format!(
                "map[{:?}] is expected {:?}, but actual is {:?}",
                key, expect, v
            )),
            Some(_) => {}
        }
        self
    }

    /// Fail if `actual[key]` equals `expect`. A missing key fails too.
    #[track_caller]
    pub fn not_equal_at(self, key: M::Key, expect: M::Value) -> Self {
        match self.actual.lookup(&key) {
            None => self.meta.report(Self::missing_key(&key)),
            Some(v) if *v == expect => self.meta.report(format!(
                "map[{:?}] is not expected {:?}, but actual is {:?}",
                key, expect, v
            )),
            Some(_) => {}
        }
        self
    }

    /// Fail unless `expect` is a key.
    #[track_caller]
    pub fn has_key(self, expect: M::Key) -> Self {
        if self.actual.lookup(&expect).is_none() {
            self.meta.report(format!(
                "expected to contain the key '{:?}', but not got",
                expect
            ));
        }
        self
    }

    /// Fail if `expect` is a key.
    #[track_caller]
    pub fn not_has_key(self, expect: M::Key) -> Self {
        if self.actual.lookup(&expect).is_some() {
            self.meta.report(format!(
                "expected not to contain the key '{:?}', but got",
                expect
            ));
        }
        self
    }

    /// Fail unless some entry holds `expect`.
    #[track_caller]
    pub fn has_value(self, expect: M::Value) -> Self {
        if !self.has_any_value(&expect) {
            self.meta.report(format!(
                "expected to contain the value '{:?}', but not got",
                expect
            ));
        }
        self
    }

    /// Fail if some entry holds `expect`.
    #[track_caller]
    pub fn not_has_value(self, expect: M::Value) -> Self {
        if self.has_any_value(&expect) {
            self.meta.report(format!(
                "expected not to contain the value '{:?}', but got",
                expect
            ));
        }
        self
    }

    /// Fail unless `key` maps to `value`.
    #[track_caller]
    pub fn has_key_value(self, key: M::Key, value: M::Value) -> Self {
        if !self.holds(&key, &value) {
            self.meta.report(format!(
                "expected to contain ({:?}, {:?}), but not contain",
                key, value
            ));
        }
        self
    }

    /// Fail if `key` maps to `value`.
    #[track_caller]
    pub fn not_has_key_value(self, key: M::Key, value: M::Value) -> Self {
        if self.holds(&key, &value) {
            self.meta.report(format!(
                "expected not to contain ({:?}, {:?}), but contained",
                key, value
            ));
        }
        self
    }

    /// Fail unless the map holds exactly `expect` entries.
    #[track_caller]
    pub fn length(self, expect: usize) -> Self {
        let len = self.actual.entry_count();
        if len != expect {
            self.meta.report(format!(
                "got non expected length, expected {}, but actual is {}",
                expect, len
            ));
        }
        self
    }

    /// Call `f` with `actual[key]`. A missing key fails without calling `f`.
    #[track_caller]
    pub fn at(self, key: M::Key, f: impl FnOnce(&dyn Reporter, &M::Value)) -> Self {
        match self.actual.lookup(&key) {
            Some(v) => self.meta.with_reporter(|t| f(t, v)),
            None => self.meta.report(Self::missing_key(&key)),
        }
        self
    }
}

/// Entries of a map ordered by the `Debug` form of their keys, so that two
/// hash maps render in the same order.
struct SortedEntries<'m, K, V>(Vec<(&'m K, &'m V)>);

impl<'m, K: Debug, V> SortedEntries<'m, K, V> {
    fn of<M>(map: &'m M) -> Self
    where
        M: AssocMap<Key = K, Value = V>,
    {
        let mut entries: Vec<_> = map.entries().collect();
        entries.sort_by_cached_key(|(k, _)| format!("{:?}", k));
        Self(entries)
    }
}

impl<K: Debug, V: Debug> Debug for SortedEntries<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter().copied()).finish()
    }
}

impl<'a, M> MapTest<'a, M>
where
    M: AssocMap + PartialEq,
    M::Key: Debug,
    M::Value: Debug,
{
    /// Fail unless the map equals `expect` entry for entry.
    #[track_caller]
    pub fn equal(self, expect: &M) -> Self {
        if self.actual != expect {
            self.meta.report(format!(
                "maps are not matched\n{}",
                diff(&SortedEntries::of(expect), &SortedEntries::of(self.actual))
            ));
        }
        self
    }

    /// Fail if the map equals `expect`.
    #[track_caller]
    pub fn not_equal(self, expect: &M) -> Self {
        if self.actual == expect {
            self.meta.report(format!(
                "maps should not be matched, {:?}",
                SortedEntries::of(self.actual)
            ));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::Recorder;

    fn colors() -> HashMap<&'static str, i32> {
        let mut m = HashMap::new();
        m.insert("blue", 5);
        m
    }

    #[test]
    fn test_equal() {
        let r = Recorder::new();
        let m = colors();
        map(&r, &m).equal(&colors());
        assert_eq!(r.errors(), 0);

        let mut other = colors();
        other.insert("blue", 0);
        map(&r, &m).equal(&other);
        assert_eq!(r.errors(), 1);
        assert!(r.messages()[0].starts_with("maps are not matched\ndiff:"));

        other.insert("orange", 9);
        map(&r, &m).not_equal(&other);
        assert_eq!(r.errors(), 1);

        map(&r, &m).not_equal(&colors());
        assert_eq!(r.errors(), 2);
    }

    #[test]
    fn test_equal_diff_ignores_hash_order() {
        let r = Recorder::new();
        let expect: HashMap<u32, u32> = (0..8).map(|k| (k, k)).collect();
        let mut actual = expect.clone();
        actual.insert(3, 30);

        map(&r, &actual).equal(&expect);
        assert_eq!(r.errors(), 1);
        let message = &r.messages()[0];
        let removed: Vec<&str> = message
            .lines()
            .filter(|l| l.starts_with('-') && !l.starts_with("---"))
            .collect();
        let added: Vec<&str> = message
            .lines()
            .filter(|l| l.starts_with('+') && !l.starts_with("+++"))
            .collect();
        assert_eq!(removed, vec!["-    3: 3,"]);
        assert_eq!(added, vec!["+    3: 30,"]);
    }

    #[test]
    fn test_equal_at() {
        let r = Recorder::new();
        let m = colors();
        map(&r, &m).equal_at("blue", 5).not_equal_at("blue", 1);
        assert_eq!(r.errors(), 0);

        map(&r, &m).equal_at("blue", 1);
        map(&r, &m).not_equal_at("blue", 5);
        map(&r, &m).equal_at("orange", 5);
        map(&r, &m).not_equal_at("orange", 5);
        assert_eq!(r.errors(), 4);
        assert!(r.messages()[2].starts_with("key '\"orange\"' is not found in the map"));
    }

    #[test]
    fn test_keys_and_values() {
        let r = Recorder::new();
        let m = colors();
        map(&r, &m)
            .has_key("blue")
            .not_has_key("orange")
            .has_value(5)
            .not_has_value(7)
            .has_key_value("blue", 5)
            .not_has_key_value("blue", 0)
            .not_has_key_value("orange", 5);
        assert_eq!(r.errors(), 0);

        map(&r, &m).has_key("orange");
        map(&r, &m).not_has_key("blue");
        map(&r, &m).has_value(7);
        map(&r, &m).not_has_value(5);
        map(&r, &m).has_key_value("orange", 5);
        map(&r, &m).not_has_key_value("blue", 5);
        assert_eq!(r.errors(), 6);
    }

    #[test]
    fn test_length() {
        let r = Recorder::new();
        let mut m = colors();
        m.insert("orange", 0);
        map(&r, &m).length(2);
        assert_eq!(r.errors(), 0);

        map(&r, &m).length(0);
        assert_eq!(r.errors(), 1);
        assert!(r.messages()[0].starts_with("got non expected length, expected 0, but actual is 2"));
    }

    #[test]
    fn test_at() {
        let r = Recorder::new();
        let m = colors();
        map(&r, &m).at("blue", |t, v| {
            crate::value(t, *v).equal(5);
        });
        assert_eq!(r.errors(), 0);

        let mut called = false;
        map(&r, &m).at("orange", |_, _| called = true);
        assert!(!called);
        assert_eq!(r.errors(), 1);
    }

    #[test]
    fn test_must_stops_following_checks() {
        let r = Recorder::new();
        let m = colors();
        map(&r, &m).must().has_key_value("blue", 0).has_key("blue");
        assert_eq!(r.errors(), 1);
        assert_eq!(r.fails(), 1);
    }

    #[test]
    fn test_btree_map() {
        let r = Recorder::new();
        let mut m = BTreeMap::new();
        m.insert(1u8, "one".to_string());
        m.insert(2u8, "two".to_string());
        check_numbers(&r, &m);
        assert_eq!(r.errors(), 0);
    }

    fn check_numbers(r: &Recorder, numbers: &BTreeMap<u8, String>) {
        super::m(r, numbers)
            .length(2)
            .has_key(2)
            .equal_at(1, "one".to_string())
            .has_value("two".to_string());
    }
}
