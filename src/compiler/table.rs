use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

/// Append-only list of unique entries, where each entry's position is its
/// permanent index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T: Hash + Eq> {
    vec: Vec<T>,
    ids: HashMap<T, usize>,
}
impl<T: Hash + Eq> Default for Table<T> {
    fn default() -> Self {
        Self {
            vec: vec![],
            ids: HashMap::new(),
        }
    }
}
impl<T: Hash + Eq> Index<usize> for Table<T> {
    type Output = T;
    fn index(&self, id: usize) -> &T {
        &self.vec[id]
    }
}
impl<T: Hash + Eq + Clone> Table<T> {
    /// Constructs an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of the given entry, adding it to the end of the table
    /// if it is not already present.
    pub fn register(&mut self, entry: T) -> usize {
        if let Some(&id) = self.ids.get(&entry) {
            return id;
        }
        let id = self.vec.len();
        self.ids.insert(entry.clone(), id);
        self.vec.push(entry);
        id
    }
    /// Returns the index of the given entry, if it is present.
    pub fn id_of<Q>(&self, entry: &Q) -> Option<usize>
    where
        T: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ids.get(entry).copied()
    }
    /// Returns the entry at the given index, if there is one.
    pub fn get(&self, id: usize) -> Option<&T> {
        self.vec.get(id)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    /// Returns whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    /// Iterates over entries in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
}
impl<T: Hash + Eq + fmt::Display> fmt::Display for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.vec.iter().join(", "))
    }
}
