use fnv::FnvHashMap;
use std::sync::Arc;

/// Handle of an interned station name. Indexes the arena of an
/// [`AggregationTable`](crate::table::AggregationTable).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(usize);

impl StationId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Interns station names. Byte-identical keys always map to the same
/// [`StationId`] and share one allocation.
///
/// A registry belongs to a single scanning thread. Registries of different
/// workers are reconciled through [`StationRegistry::intern_shared`] when
/// their tables are merged.
#[derive(Debug, Default)]
pub struct StationRegistry {
    ids: FnvHashMap<Arc<[u8]>, StationId>,
    names: Vec<Arc<[u8]>>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Returns the id of `key`, allocating the name only on first sight.
    #[inline]
    pub fn intern(&mut self, key: &[u8]) -> StationId {
        if let Some(&id) = self.ids.get(key) {
            return id;
        }
        self.insert(Arc::from(key))
    }

    /// Like [`Self::intern`], but reuses the allocation of a name that
    /// another registry already owns.
    pub fn intern_shared(&mut self, name: &Arc<[u8]>) -> StationId {
        if let Some(&id) = self.ids.get(&**name) {
            return id;
        }
        self.insert(Arc::clone(name))
    }

    fn insert(&mut self, name: Arc<[u8]>) -> StationId {
        let id = StationId(self.names.len());
        self.names.push(Arc::clone(&name));
        self.ids.insert(name, id);
        id
    }

    pub fn get(&self, key: &[u8]) -> Option<StationId> {
        self.ids.get(key).copied()
    }

    pub fn name(&self, id: StationId) -> &Arc<[u8]> {
        &self.names[id.index()]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in id order.
    pub fn names(&self) -> impl Iterator<Item = &Arc<[u8]>> {
        self.names.iter()
    }
}
