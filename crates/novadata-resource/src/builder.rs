//! Merging archive sources into one resource id space.

use std::hash::BuildHasherDefault;

use hashbrown::HashMap as FastHashMap;
use hashbrown::HashSet as FastHashSet;
use rustc_hash::FxHasher;

use crate::record::{RawRecord, SeedRecord};
use crate::space::{RecordTable, ResourceIdSpace};
use crate::types::{GlobalId, LocalId, ResourceType};
use crate::{Error, Result};

type FxHashMap<K, V> = FastHashMap<K, V, BuildHasherDefault<FxHasher>>;
type FxHashSet<T> = FastHashSet<T, BuildHasherDefault<FxHasher>>;

/// One archive's worth of decoded records, in the order the provider
/// decoded them.
#[derive(Debug, Clone, Default)]
pub struct ArchiveSource {
    name: String,
    seeds: Vec<SeedRecord>,
}

impl ArchiveSource {
    pub fn new(name: impl Into<String>) -> Self {
        ArchiveSource { name: name.into(), seeds: Vec::new() }
    }

    /// Add one record to this source.
    pub fn push(&mut self, seed: SeedRecord) {
        self.seeds.push(seed);
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with(mut self, seed: SeedRecord) -> Self {
        self.push(seed);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[SeedRecord] {
        &self.seeds
    }
}

/// Merge archive sources, in load order, into one [`ResourceIdSpace`].
///
/// Global ids are assigned by the documented ordinal scheme
/// ([`GlobalId::from_parts`]), so two builds from the same inputs produce
/// identical ids. When two sources carry the same (type, local id), the
/// later-loaded source overrides the earlier one: the earlier record and
/// its global id are dropped from the space entirely.
///
/// This function never panics on malformed input; every failure mode is an
/// [`Error`] value. Callers that want the "failure captured inside a future"
/// behavior wrap the call themselves.
pub fn build_id_space(sources: &[ArchiveSource]) -> Result<ResourceIdSpace> {
    if sources.is_empty() {
        return Err(Error::NoSources);
    }
    if sources.len() > u16::MAX as usize {
        return Err(Error::TooManySources(sources.len()));
    }

    let mut seen_names: FxHashSet<&str> = FxHashSet::default();
    for source in sources {
        if !seen_names.insert(source.name()) {
            return Err(Error::DuplicateSource(source.name().to_owned()));
        }
    }

    let mut tables: [RecordTable; ResourceType::COUNT] = Default::default();
    let mut global_index: FxHashMap<GlobalId, (ResourceType, LocalId)> = FxHashMap::default();

    for (ordinal, source) in sources.iter().enumerate() {
        for seed in source.records() {
            let kind = seed.kind();
            let global_id = GlobalId::from_parts(ordinal as u16, seed.local_id);
            let record = RawRecord {
                kind,
                local_id: seed.local_id,
                global_id,
                name: seed.name.clone(),
                fields: seed.fields.clone(),
            };
            // Later source wins; the overridden record's global id leaves
            // the index with it.
            if let Some(previous) = tables[kind.index()].insert(seed.local_id, record) {
                global_index.remove(&previous.global_id);
            }
            global_index.insert(global_id, (kind, seed.local_id));
        }
    }

    Ok(ResourceIdSpace::new(tables, global_index))
}
