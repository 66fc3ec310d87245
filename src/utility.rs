//! Structural inspection and pruning
//!
//! Arithmetic operations never prune explicit zero entries — sparsity is a
//! storage property chosen by the caller. Near-zero elimination is
//! therefore an explicit, separate operation here ([`tenstrim`]), and
//! equality that treats missing entries as zero is likewise explicit
//! ([`tenseq`]).

use std::collections::HashMap;
use std::hash::Hash;

use crate::coeff::Coefficient;
use crate::error::Result;
use crate::index::Idx;
use crate::kernel;
use crate::store::SparseStore;

/// Return the rank of a tensor: the longest multi-index
///
/// The empty tensor has rank 0.
pub fn tensrank<V, S>(t: &S) -> usize
where
    V: Clone,
    S: SparseStore<Idx, V>,
{
    t.snapshot().iter().map(|(i, _)| i.len()).max().unwrap_or(0)
}

/// Return the dimensionalities of a tensor: per axis, the largest
/// occupied position plus one
pub fn tensdim<V, S>(t: &S) -> Idx
where
    V: Clone,
    S: SparseStore<Idx, V>,
{
    let mut dim = Idx::new();
    for (i, _) in t.snapshot() {
        if i.len() > dim.len() {
            dim.resize(i.len(), 0);
        }
        for (axis, &pos) in i.iter().enumerate() {
            dim[axis] = dim[axis].max(pos + 1);
        }
    }
    dim
}

/// Remove all near-zero coefficients
///
/// Keeps entries whose [`Coefficient::magnitude`] exceeds `tol`; with
/// `tol = None`, only exactly-zero coefficients are dropped.
pub fn tenstrim<K, V, S>(t: &S, tol: Option<f64>) -> HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    t.snapshot()
        .into_iter()
        .filter(|(_, v)| match tol {
            Some(tol) => v.magnitude() > tol,
            None => v.magnitude() != 0.0,
        })
        .collect()
}

/// Round every coefficient to `ndigits` decimal digits
///
/// Delegates to [`Coefficient::round`]; coefficient types without
/// sub-unit precision report
/// [`UnsupportedOperation`](crate::error::Error::UnsupportedOperation).
pub fn tensround<K, V, S>(t: &S, ndigits: i32) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::map_unary(t, |v| v.round(ndigits))
}

/// Return whether two tensors are equal, treating missing entries as zero
///
/// An entry present on one side only counts as equal when its magnitude
/// is exactly zero.
pub fn tenseq<K, V, S, T>(s: &S, t: &T) -> bool
where
    K: Clone,
    V: Coefficient + PartialEq,
    S: SparseStore<K, V>,
    T: SparseStore<K, V>,
{
    for (k, sv) in s.snapshot() {
        match t.get(&k) {
            Some(tv) => {
                if sv != tv {
                    return false;
                }
            }
            None => {
                if sv.magnitude() != 0.0 {
                    return false;
                }
            }
        }
    }
    for (k, tv) in t.snapshot() {
        if s.get(&k).is_none() && tv.magnitude() != 0.0 {
            return false;
        }
    }
    true
}
