//! The raw record provider contract.
//!
//! The on-disk archive reader lives outside this workspace; whatever reads
//! resource forks hands the engine its output through [`RecordProvider`].
//! Sources must be yielded in load order because load order decides both
//! override precedence and global id assignment.

use async_trait::async_trait;

use crate::builder::ArchiveSource;
use crate::Result;

/// Supplies decoded archive sources, in load order.
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Load every source archive. Called once per space build.
    async fn load(&self) -> Result<Vec<ArchiveSource>>;
}

/// A provider over sources already held in memory.
///
/// This is what test fixtures use, and what a caller builds after running
/// its own archive reader.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    sources: Vec<ArchiveSource>,
}

impl MemoryProvider {
    pub fn new(sources: Vec<ArchiveSource>) -> Self {
        MemoryProvider { sources }
    }
}

#[async_trait]
impl RecordProvider for MemoryProvider {
    async fn load(&self) -> Result<Vec<ArchiveSource>> {
        Ok(self.sources.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_provider_preserves_load_order() {
        let provider = MemoryProvider::new(vec![
            ArchiveSource::new("base"),
            ArchiveSource::new("plugin a"),
            ArchiveSource::new("plugin b"),
        ]);
        let sources = provider.load().await.unwrap();
        let names: Vec<_> = sources.iter().map(|s| s.name().to_owned()).collect();
        assert_eq!(names, ["base", "plugin a", "plugin b"]);
    }
}
