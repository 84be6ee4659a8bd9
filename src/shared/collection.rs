//! Ordered, key-preserving sequence container.
//!
//! `Collection<T>` is the data-flow medium of the inspection pipeline: listings
//! from the package manager, lock-file entries and advisories all travel through
//! it. Every transformation returns a new collection and leaves the receiver
//! untouched; only [`Collection::each`] and [`Collection::when_not_empty`]
//! hand back the receiver itself so calls can be chained.

use std::fmt;

/// Key of an item inside a [`Collection`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Index(_) => None,
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Key::Name(name.clone())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Values that can be "falsy", used by [`Collection::filter_truthy`].
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty() && self != "0"
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        self.as_str().is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Collection<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

macro_rules! truthy_numbers {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0 as $ty
            }
        })*
    };
}

truthy_numbers!(i32, i64, u32, u64, usize, f64);

/// Items that [`Collection::flatten`] can merge: nested collections and vectors.
pub trait IntoCollection {
    type Item;

    fn into_collection(self) -> Collection<Self::Item>;
}

impl<T> IntoCollection for Collection<T> {
    type Item = T;

    fn into_collection(self) -> Collection<T> {
        self
    }
}

impl<T> IntoCollection for Vec<T> {
    type Item = T;

    fn into_collection(self) -> Collection<T> {
        collect(self)
    }
}

/// Creates a collection keyed `0..n` from the given items.
pub fn collect<T, I: IntoIterator<Item = T>>(items: I) -> Collection<T> {
    Collection {
        items: items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (Key::Index(index), item))
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<(Key, T)>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a collection from key/item pairs. A repeated key overwrites the
    /// earlier item but keeps its position.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut collection = Self::new();
        for (key, item) in pairs {
            collection.put(key.into(), item);
        }
        collection
    }

    fn put(&mut self, key: Key, item: T) {
        match self.items.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = item,
            None => self.items.push((key, item)),
        }
    }

    fn next_index(&self) -> usize {
        self.items
            .iter()
            .filter_map(|(key, _)| match key {
                Key::Index(index) => Some(index + 1),
                Key::Name(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &T)> {
        self.items.iter().map(|(key, item)| (key, item))
    }

    /// Applies `callable` to every item, keeping the original keys.
    pub fn map<U, F>(&self, mut callable: F) -> Collection<U>
    where
        F: FnMut(&T, &Key) -> U,
    {
        Collection {
            items: self
                .items
                .iter()
                .map(|(key, item)| (key.clone(), callable(item, key)))
                .collect(),
        }
    }

    /// Keeps the items accepted by `predicate`.
    ///
    /// Name keys survive as-is; index keys are renumbered into a dense `0..n`
    /// sequence.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &Key) -> bool,
    {
        let mut next = 0;
        let items = self
            .items
            .iter()
            .filter(|(key, item)| predicate(item, key))
            .map(|(key, item)| {
                let key = match key {
                    Key::Index(_) => {
                        next += 1;
                        Key::Index(next - 1)
                    }
                    Key::Name(name) => Key::Name(name.clone()),
                };
                (key, item.clone())
            })
            .collect();

        Self { items }
    }

    /// Removes every falsy item (`None`, `""`, `"0"`, `false`, zero, empty containers).
    pub fn filter_truthy(&self) -> Self
    where
        T: Truthy + Clone,
    {
        self.filter(|item, _| item.is_truthy())
    }

    /// Splits the collection into consecutive chunks of at most `size` items.
    /// Each chunk keeps the keys its items had. A zero `size` yields no chunks.
    pub fn chunk(&self, size: usize) -> Collection<Collection<T>>
    where
        T: Clone,
    {
        if size == 0 {
            return Collection::new();
        }

        collect(self.items.chunks(size).map(|chunk| Collection {
            items: chunk.to_vec(),
        }))
    }

    /// Re-keys the collection by a value extracted from each item. On collision
    /// the last item wins.
    pub fn key_by<F>(&self, mut key: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> String,
    {
        Self::from_pairs(self.items.iter().map(|(_, item)| (key(item), item.clone())))
    }

    pub fn keys(&self) -> Collection<Key> {
        collect(self.items.iter().map(|(key, _)| key.clone()))
    }

    /// Drops the keys, re-indexing the items `0..n`.
    pub fn values(&self) -> Self
    where
        T: Clone,
    {
        collect(self.items.iter().map(|(_, item)| item.clone()))
    }

    /// Removes duplicated items, keeping the first occurrence and its key.
    pub fn unique(&self) -> Self
    where
        T: Clone + PartialEq,
    {
        let mut items: Vec<(Key, T)> = Vec::with_capacity(self.items.len());
        for (key, item) in &self.items {
            if !items.iter().any(|(_, seen)| seen == item) {
                items.push((key.clone(), item.clone()));
            }
        }
        Self { items }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().map(|(_, item)| item.clone()).collect()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items.into_iter().map(|(_, item)| item).collect()
    }

    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&T> {
        let key = key.into();
        self.items
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, item)| item)
    }

    /// Returns the item at `key`, or `default` when absent.
    pub fn get_or<K: Into<Key>>(&self, key: K, default: T) -> T
    where
        T: Clone,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Returns the first item whose `field` equals `value`.
    pub fn find_where<V, F>(&self, field: F, value: &V) -> Option<&T>
    where
        V: PartialEq + ?Sized,
        F: Fn(&T) -> &V,
    {
        self.items
            .iter()
            .map(|(_, item)| item)
            .find(|item| field(item) == value)
    }

    pub fn each<F>(&self, mut callable: F) -> &Self
    where
        F: FnMut(&T, &Key),
    {
        for (key, item) in &self.items {
            callable(item, key);
        }
        self
    }

    /// Invokes `callable` with the item count, only when there are items.
    pub fn when_not_empty<F>(&self, callable: F) -> &Self
    where
        F: FnOnce(usize),
    {
        if !self.is_empty() {
            callable(self.count());
        }
        self
    }

    pub fn implode(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        self.items
            .iter()
            .map(|(_, item)| item.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Merges the nested collections one level deep. Index keys are appended in
    /// order; a name key seen again overwrites the earlier item.
    pub fn flatten(self) -> Collection<T::Item>
    where
        T: IntoCollection,
    {
        let mut flattened = Collection::new();
        for (_, inner) in self.items {
            for (key, item) in inner.into_collection().items {
                match key {
                    Key::Index(_) => {
                        let index = flattened.next_index();
                        flattened.items.push((Key::Index(index), item));
                    }
                    Key::Name(_) => flattened.put(key, item),
                }
            }
        }
        flattened
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        collect(iter)
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = (Key, T);
    type IntoIter = std::vec::IntoIter<(Key, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
