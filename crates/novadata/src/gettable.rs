//! Memoizing asynchronous accessor.

use std::hash::BuildHasherDefault;
use std::sync::Arc;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use hashbrown::HashMap as FastHashMap;
use parking_lot::Mutex;
use rustc_hash::FxHasher;

use novadata_resource::GlobalId;

use crate::Result;

type FxHashMap<K, V> = FastHashMap<K, V, BuildHasherDefault<FxHasher>>;

/// A memoized future, cloneable and awaitable by any number of callers.
pub(crate) type SharedResult<T> = Shared<BoxFuture<'static, Result<Arc<T>>>>;

type Resolver<T> = Arc<dyn Fn(GlobalId) -> BoxFuture<'static, Result<Arc<T>>> + Send + Sync>;

/// Memoizing accessor over an id-to-future resolver.
///
/// Guarantees at most one resolver invocation per id: concurrent first
/// requests for the same id coalesce onto a single shared computation, and
/// every later request gets the cached outcome. Failures are cached the
/// same way successes are — a failed resolution is expected to fail
/// identically on retry, so repeating the work would only repeat the cost
/// (the policy is uniform across every accessor in the crate).
///
/// Cloning is cheap; clones share the resolver and the cache.
pub struct Gettable<T> {
    resolver: Resolver<T>,
    cache: Arc<Mutex<FxHashMap<GlobalId, SharedResult<T>>>>,
}

impl<T> Clone for Gettable<T> {
    fn clone(&self) -> Self {
        Gettable {
            resolver: Arc::clone(&self.resolver),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<T: Send + Sync + 'static> Gettable<T> {
    /// Build an accessor from a resolver.
    ///
    /// The resolver is only called to *create* the future for a fresh id;
    /// the future itself runs when the first caller awaits it.
    pub fn new<F>(resolver: F) -> Self
    where
        F: Fn(GlobalId) -> BoxFuture<'static, Result<Arc<T>>> + Send + Sync + 'static,
    {
        Gettable {
            resolver: Arc::new(resolver),
            cache: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }

    /// Resolve `id`, reusing any in-flight or completed computation.
    pub async fn get(&self, id: GlobalId) -> Result<Arc<T>> {
        let shared = {
            let mut cache = self.cache.lock();
            cache
                .entry(id)
                .or_insert_with(|| (self.resolver)(id).shared())
                .clone()
        };
        shared.await
    }
}

impl<T> std::fmt::Debug for Gettable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gettable")
            .field("cached", &self.cache.lock().len())
            .finish()
    }
}
