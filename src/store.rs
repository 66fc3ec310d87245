//! Sparse container access
//!
//! The kernel combinators in [`crate::kernel`] never touch a container
//! directly; they go through [`SparseStore`], a minimal mapping contract
//! (optional get, set, snapshot enumeration) plus two provided traversal
//! methods.
//!
//! # Fast path vs generic path
//!
//! Two access strategies exist:
//!
//! - **Fast path**: the impl for [`std::collections::HashMap`] overrides
//!   the traversal methods with direct `iter`/`iter_mut` iteration — no
//!   temporary materialization. `HashMap` is also the container family
//!   every copying operation allocates its result in.
//! - **Generic path**: any other conforming container (the shipped
//!   [`std::collections::BTreeMap`] impl, or a caller's own type) inherits
//!   the provided traversals, which **snapshot** the full entry list before
//!   any mutation begins.
//!
//! Snapshot-then-mutate on the generic path is a correctness invariant, not
//! an optimization: a container only guaranteed to satisfy the minimal
//! contract has no defined behavior when enumerated while being mutated.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::error::Result;

/// Minimal mapping contract over a sparse keyed container
///
/// Required methods are the primitive container accesses; the provided
/// `try_visit`/`try_update` traversals implement the generic
/// snapshot-then-mutate discipline and may be overridden when a container
/// supports safe direct iteration (see the `HashMap` impl).
///
/// Keys within one store are unique; entry order carries no meaning.
/// Explicit zero values are ordinary entries — nothing here prunes them.
pub trait SparseStore<K: Clone, V: Clone> {
    /// Stored value for `key`, or `None` when absent
    ///
    /// A merely-missing key is not an error.
    fn get(&self, key: &K) -> Option<V>;

    /// Insert or overwrite the entry for `key`
    fn set(&mut self, key: K, value: V);

    /// Stable list of all entries at call time
    fn snapshot(&self) -> Vec<(K, V)>;

    /// Number of stored entries
    fn len(&self) -> usize;

    /// Whether the store holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visit every entry read-only
    ///
    /// Aborts at the first `Err` from `visit`.
    fn try_visit<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&K, &V) -> Result<()>,
    {
        for (k, v) in self.snapshot() {
            visit(&k, &v)?;
        }
        Ok(())
    }

    /// Rewrite every value in place
    ///
    /// The generic implementation snapshots all entries before writing any
    /// of them back, so the container is never enumerated mid-mutation.
    /// Aborts at the first `Err` from `update`; entries already written
    /// stay written.
    fn try_update<F>(&mut self, mut update: F) -> Result<()>
    where
        F: FnMut(&K, V) -> Result<V>,
    {
        for (k, v) in self.snapshot() {
            let updated = update(&k, v)?;
            self.set(k, updated);
        }
        Ok(())
    }
}

impl<K, V> SparseStore<K, V> for HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    fn get(&self, key: &K) -> Option<V> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn snapshot(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    // fast path: iterate the map directly, no snapshot
    fn try_visit<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&K, &V) -> Result<()>,
    {
        for (k, v) in self.iter() {
            visit(k, v)?;
        }
        Ok(())
    }

    // fast path: in-place value rewrite through iter_mut
    fn try_update<F>(&mut self, mut update: F) -> Result<()>
    where
        F: FnMut(&K, V) -> Result<V>,
    {
        for (k, v) in self.iter_mut() {
            *v = update(k, v.clone())?;
        }
        Ok(())
    }
}

impl<K, V> SparseStore<K, V> for BTreeMap<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    fn get(&self, key: &K) -> Option<V> {
        BTreeMap::get(self, key).cloned()
    }

    fn set(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn snapshot(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}
