use std::collections::{BTreeMap, HashMap};
use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::errors::DictError;
use crate::key::DictKey;
use crate::namespace::{make_key, revoke_key};

/// Insertion-ordered string dictionary.
///
/// Keys are namespaced before storage (see [`crate::namespace`]) and falsy keys
/// are rejected by [`Dict::set`]. Iteration visits entries in insertion order;
/// replacing a key with `set` moves it to the end.
#[derive(Clone)]
pub struct Dict<V> {
    items: IndexMap<String, V>,
    count: usize,
}

impl<V> Default for Dict<V> {
    fn default() -> Self { Self::new() }
}

impl<V> Dict<V> {
    pub fn new() -> Self {
        Self { items: IndexMap::new(), count: 0 }
    }

    /// Build a dictionary from `(key, value)` pairs, in order.
    ///
    /// Fails on the first falsy key; no partially filled dictionary is returned.
    pub fn from_entries<K, I>(entries: I) -> Result<Self, DictError>
    where
        K: DictKey,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut dict = Self::new();
        for (key, value) in entries {
            dict.set(key, value)?;
        }
        Ok(dict)
    }

    pub fn clear(&mut self) -> &mut Self {
        trace!(dropped = self.count, "dict clear");
        self.items = IndexMap::new();
        self.count = 0;
        self
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.count, self.items.len());
        self.count
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Insert or replace `key`. Replacing moves the entry to the end of the
    /// iteration order.
    pub fn set<K: DictKey>(&mut self, key: K, value: V) -> Result<&mut Self, DictError> {
        if !key.is_truthy() {
            debug!(key = %key.to_key(), "rejected falsy dict key");
            return Err(DictError::InvalidKey(key.to_key().into_owned()));
        }
        let key = key.to_key();
        self.insert_external(&key, value);
        trace!(key = %key, count = self.count, "dict set");
        Ok(self)
    }

    /// Value for `key`, or `None` when the key is absent.
    pub fn get<K: DictKey>(&self, key: K) -> Option<&V> {
        self.items.get(&make_key(&key.to_key()))
    }

    /// Like [`Dict::get`], but a missing key is an error. Handy when the
    /// dictionary is used as a registry.
    pub fn require<K: DictKey>(&self, key: K) -> Result<&V, DictError> {
        let key = key.to_key();
        match self.get(&*key) {
            Some(value) => Ok(value),
            None => {
                debug!(key = %key, "required dict key missing");
                Err(DictError::missing(&key))
            }
        }
    }

    pub fn has<K: DictKey>(&self, key: K) -> bool {
        self.items.contains_key(&make_key(&key.to_key()))
    }

    /// Delete `key` if present.
    pub fn remove<K: DictKey>(&mut self, key: K) -> &mut Self {
        let key = key.to_key();
        if self.items.shift_remove(&make_key(&key)).is_some() {
            self.count -= 1;
            trace!(key = %key, count = self.count, "dict remove");
        }
        self
    }

    /// `(external key, value)` pairs in iteration order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { inner: self.items.iter() }
    }

    /// Call `f(value, key, dict)` for every entry.
    pub fn for_each<'a, F>(&'a self, mut f: F) -> &'a Self
    where
        F: FnMut(&'a V, &'a str, &'a Self),
    {
        for (key, value) in self.iter() {
            f(value, key, self);
        }
        self
    }

    /// [`Dict::for_each`] for callers holding an optional callback.
    pub fn try_for_each<'a, F>(&'a self, f: Option<F>) -> Result<&'a Self, DictError>
    where
        F: FnMut(&'a V, &'a str, &'a Self),
    {
        match f {
            Some(f) => Ok(self.for_each(f)),
            None => Err(DictError::InvalidArgument),
        }
    }

    /// True as soon as one entry matches.
    pub fn some<'a, F>(&'a self, mut f: F) -> bool
    where
        F: FnMut(&'a V, &'a str, &'a Self) -> bool,
    {
        self.iter().any(|(key, value)| f(value, key, self))
    }

    /// True unless some entry fails `f`. Every entry is visited, but `f` is no
    /// longer called once one has failed.
    pub fn every<'a, F>(&'a self, mut f: F) -> bool
    where
        F: FnMut(&'a V, &'a str, &'a Self) -> bool,
    {
        self.reduce(|last, value, key, all| last && f(value, key, all), true)
    }

    /// First value matching `f`.
    pub fn find<'a, F>(&'a self, mut f: F) -> Option<&'a V>
    where
        F: FnMut(&'a V, &'a str, &'a Self) -> bool,
    {
        let mut found = None;
        self.some(|value, key, all| {
            if f(value, key, all) {
                found = Some(value);
                return true;
            }
            false
        });
        found
    }

    pub fn filter<'a, F>(&'a self, mut f: F) -> Dict<V>
    where
        V: Clone,
        F: FnMut(&'a V, &'a str, &'a Self) -> bool,
    {
        let mut matches = Dict::new();
        self.for_each(|value, key, all| {
            if f(value, key, all) {
                matches.insert_external(key, value.clone());
            }
        });
        matches
    }

    pub fn map<'a, U, F>(&'a self, mut f: F) -> Dict<U>
    where
        F: FnMut(&'a V, &'a str, &'a Self) -> U,
    {
        let mut mapped = Dict::new();
        self.for_each(|value, key, all| mapped.insert_external(key, f(value, key, all)));
        mapped
    }

    /// Fold `f(acc, value, key, dict)` over the entries, seeded with `initial`.
    pub fn reduce<'a, A, F>(&'a self, mut f: F, initial: A) -> A
    where
        F: FnMut(A, &'a V, &'a str, &'a Self) -> A,
    {
        self.iter().fold(initial, |acc, (key, value)| f(acc, value, key, self))
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.len());
        self.for_each(|_, key, _| keys.push(key.to_string()));
        keys
    }

    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        let mut values = Vec::with_capacity(self.len());
        self.for_each(|value, _, _| values.push(value.clone()));
        values
    }

    /// Snapshot as a plain map from external key to value.
    pub fn to_object(&self) -> IndexMap<String, V>
    where
        V: Clone,
    {
        let mut object = IndexMap::with_capacity(self.len());
        self.for_each(|value, key, _| {
            object.insert(key.to_string(), value.clone());
        });
        object
    }

    /// Copy every entry of `other` into `self`; `other` wins on conflicts.
    pub fn add_map(&mut self, other: &Dict<V>) -> &mut Self
    where
        V: Clone,
    {
        other.for_each(|value, key, _| self.insert_external(key, value.clone()));
        trace!(added = other.len(), count = self.count, "dict add_map");
        self
    }

    /// New dictionary with the entries of `self` and then `other`. Neither
    /// input changes.
    pub fn join(&self, other: &Dict<V>) -> Dict<V>
    where
        V: Clone,
    {
        let mut joined = self.clone();
        joined.add_map(other);
        joined
    }

    // Callers guarantee `key` is truthy.
    fn insert_external(&mut self, key: &str, value: V) {
        let stored = make_key(key);
        if self.items.shift_remove(&stored).is_some() {
            self.count -= 1;
        }
        self.items.insert(stored, value);
        self.count += 1;
    }
}

pub struct Iter<'a, V> {
    inner: indexmap::map::Iter<'a, String, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (revoke_key(key), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a Dict<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<V: fmt::Debug> fmt::Debug for Dict<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: PartialEq> PartialEq for Dict<V> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.items == other.items
    }
}

impl<V: Eq> Eq for Dict<V> {}

impl<K: DictKey, V> TryFrom<HashMap<K, V>> for Dict<V> {
    type Error = DictError;

    fn try_from(map: HashMap<K, V>) -> Result<Self, Self::Error> { Self::from_entries(map) }
}

impl<K: DictKey, V> TryFrom<BTreeMap<K, V>> for Dict<V> {
    type Error = DictError;

    fn try_from(map: BTreeMap<K, V>) -> Result<Self, Self::Error> { Self::from_entries(map) }
}
