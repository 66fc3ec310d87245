//! Hilbert space operations: conjugation
//!
//! Conjugation is resolved once per coefficient type through
//! [`Coefficient::conjugate`], whose default body returns the value
//! unchanged. Real-valued and otherwise self-conjugate types therefore
//! work without declaring anything; only genuinely complex types override
//! the method.

use std::collections::HashMap;
use std::hash::Hash;

use crate::coeff::Coefficient;
use crate::error::Result;
use crate::kernel;
use crate::store::SparseStore;

/// Return the complex conjugate of a scalar, `x*`
///
/// Falls through to identity for coefficient types without conjugation
/// semantics.
pub fn try_conjugate<V: Coefficient>(x: V) -> V {
    x.conjugate()
}

/// Return the complex conjugate, `t*`
pub fn tensconj<K, V, S>(t: &S) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::map_unary(t, |v| Ok(v.conjugate()))
}

/// Complex conjugate in place, `t = t*`
pub fn tensiconj<K, V, S>(t: &mut S) -> Result<()>
where
    K: Clone,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::imap_unary(t, |v| Ok(v.conjugate()))
}
