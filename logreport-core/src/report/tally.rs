use ahash::AHashMap;

/// Key → value accumulator that remembers first-insertion order.
///
/// The hash index only maps a key to its slot; iteration always walks
/// `entries`, so output order never depends on hashing.
#[derive(Debug, Clone)]
pub struct OrderedTally<V> {
    index: AHashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V: Default> OrderedTally<V> {
    pub fn new() -> Self {
        Self {
            index: AHashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Value for `key`, inserted as `V::default()` on first sighting.
    pub fn entry(&mut self, key: &str) -> &mut V {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.to_owned(), slot);
                self.entries.push((key.to_owned(), V::default()));
                slot
            }
        };

        &mut self.entries[slot].1
    }
}

impl<V> OrderedTally<V> {
    /// Entries in first-insertion order.
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl<V: Default> Default for OrderedTally<V> {
    fn default() -> Self {
        Self::new()
    }
}
