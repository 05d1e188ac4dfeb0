use std::{
    hash::{DefaultHasher, Hash, Hasher},
    num::NonZeroUsize,
    sync::Arc,
};

use explorer_api_types_object::system_state::ValidatorSetState;
use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;

use crate::{
    error::TableError,
    table::{TableModel, build_table},
};

pub const DEFAULT_TABLE_CACHE_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(15);

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
struct TableKey {
    state_hash: u64,
    limit: Option<usize>,
}

#[derive(Debug)]
struct CachedTable {
    state: ValidatorSetState,
    table: Arc<TableModel>,
}

/// Memoizes built tables per `(validator set, limit)`. Entries are checked
/// against the full state on hit, so a hash collision only costs a rebuild.
#[derive(Debug)]
pub struct TableCache {
    tables: Mutex<LruCache<TableKey, CachedTable>>,
}

impl TableCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            tables: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get_or_build(
        &self,
        state: &ValidatorSetState,
        limit: Option<usize>,
    ) -> Result<Arc<TableModel>, TableError> {
        let key = TableKey {
            state_hash: hash_state(state),
            limit,
        };

        if let Some(cached) = self.tables.lock().get(&key)
            && cached.state == *state
        {
            debug!("Validator table cache hit for limit {limit:?}");
            return Ok(cached.table.clone());
        }

        let table = Arc::new(build_table(state, limit)?);
        self.tables.lock().put(
            key,
            CachedTable {
                state: state.clone(),
                table: table.clone(),
            },
        );

        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.tables.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.lock().is_empty()
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_CACHE_SIZE)
    }
}

fn hash_state(state: &ValidatorSetState) -> u64 {
    let mut hasher = DefaultHasher::new();
    state.hash(&mut hasher);
    hasher.finish()
}
