//! The merged, immutable resource id space.

use std::collections::BTreeMap;
use std::hash::BuildHasherDefault;
use std::sync::Arc;

use hashbrown::HashMap as FastHashMap;
use rustc_hash::FxHasher;

use crate::record::RawRecord;
use crate::types::{GlobalId, LocalId, ResourceType};

type FxHashMap<K, V> = FastHashMap<K, V, BuildHasherDefault<FxHasher>>;

/// One per-type record table.
///
/// `BTreeMap` keeps iteration in ascending local id order, which is the
/// stable per-type iteration order every first-wins derivation relies on.
pub type RecordTable = BTreeMap<LocalId, RawRecord>;

/// The merged space: one table per resource type plus a global index.
///
/// Built exactly once by [`build_id_space`](crate::build_id_space) and
/// read-only afterwards, so it is safe to share behind an `Arc` and read
/// concurrently without locking.
#[derive(Debug, Default)]
pub struct ResourceIdSpace {
    tables: [RecordTable; ResourceType::COUNT],
    global_index: FxHashMap<GlobalId, (ResourceType, LocalId)>,
}

impl ResourceIdSpace {
    pub(crate) fn new(
        tables: [RecordTable; ResourceType::COUNT],
        global_index: FxHashMap<GlobalId, (ResourceType, LocalId)>,
    ) -> Self {
        ResourceIdSpace { tables, global_index }
    }

    /// The table for one resource type.
    #[inline]
    pub fn table(&self, kind: ResourceType) -> &RecordTable {
        &self.tables[kind.index()]
    }

    /// Look up a record by type and local id.
    #[inline]
    pub fn record(&self, kind: ResourceType, local: LocalId) -> Option<&RawRecord> {
        self.table(kind).get(&local)
    }

    /// Look up a record by its global id.
    pub fn by_global(&self, id: GlobalId) -> Option<&RawRecord> {
        let (kind, local) = *self.global_index.get(&id)?;
        self.record(kind, local)
    }

    /// Total number of records across all tables.
    pub fn len(&self) -> usize {
        self.tables.iter().map(BTreeMap::len).sum()
    }

    /// Whether the space holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(BTreeMap::is_empty)
    }
}

/// Owned handle to one record inside a shared space.
///
/// This is the cross-reference mechanism: a `(space, type, local id)` triple
/// resolved on demand, never a pointer stored inside a record. Cloning is
/// cheap and the handle is `'static`, so transformers can carry it across
/// await points.
#[derive(Clone)]
pub struct RecordHandle {
    space: Arc<ResourceIdSpace>,
    kind: ResourceType,
    local: LocalId,
}

impl RecordHandle {
    /// Build a handle, checking the record exists.
    pub fn new(space: Arc<ResourceIdSpace>, kind: ResourceType, local: LocalId) -> Option<Self> {
        space.record(kind, local)?;
        Some(RecordHandle { space, kind, local })
    }

    /// The record this handle points at.
    pub fn record(&self) -> &RawRecord {
        // Presence was checked at construction and the space is immutable.
        self.space
            .record(self.kind, self.local)
            .unwrap_or_else(|| unreachable!("record vanished from immutable space"))
    }

    /// The enclosing space.
    pub fn space(&self) -> &Arc<ResourceIdSpace> {
        &self.space
    }

    /// Cross-type lookup by local id through the enclosing space.
    ///
    /// This is how a ship record finds its description or animation: the
    /// related table is consulted with a local id carried in the ship's own
    /// fields (or, for `shän`, the ship's own local id).
    pub fn related(&self, kind: ResourceType, local: LocalId) -> Option<&RawRecord> {
        self.space.record(kind, local)
    }

    pub fn kind(&self) -> ResourceType {
        self.kind
    }

    pub fn local_id(&self) -> LocalId {
        self.local
    }

    pub fn global_id(&self) -> GlobalId {
        self.record().global_id
    }
}

impl std::fmt::Debug for RecordHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordHandle")
            .field("kind", &self.kind)
            .field("local", &self.local)
            .finish()
    }
}
