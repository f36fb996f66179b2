use std::hash::BuildHasherDefault;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;


/// Road tables keyed by location, iterated in the order the map lists them
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Expanded nodes of the frontier searches
pub(crate) type FxIndexSet<K> = IndexSet<K, BuildHasherDefault<FxHasher>>;
