//! Elementwise combinator kernel
//!
//! The arithmetic core of the crate: generic single-pass transformations
//! over [`SparseStore`] containers, parametrized by caller-supplied
//! fallible operation closures. Every combinator is stateless and runs to
//! completion within the calling thread — no state persists between calls.
//!
//! Copying combinators allocate a fresh [`HashMap`] (the fast-path
//! container family) sized to the observed key set and never alias input
//! storage; they expose their result only on success, so a mid-pass error
//! discards the partial result. In-place combinators mutate the left
//! operand directly and make no atomicity guarantee: entries applied
//! before an error stay applied.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::store::SparseStore;

/// Shallow copy of any store into a fresh fast-path container
pub fn copy<K, V, S>(t: &S) -> HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: SparseStore<K, V>,
{
    let mut result = HashMap::with_capacity(t.len());
    for (k, v) in t.snapshot() {
        result.insert(k, v);
    }
    result
}

/// Unary map: `result[k] = op(t[k])` for every entry
///
/// `t` is not mutated.
pub fn map_unary<K, V, S, F>(t: &S, mut op: F) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: SparseStore<K, V>,
    F: FnMut(V) -> Result<V>,
{
    let mut result = HashMap::with_capacity(t.len());
    t.try_visit(|k, v| {
        let updated = op(v.clone())?;
        result.insert(k.clone(), updated);
        Ok(())
    })?;
    Ok(result)
}

/// In-place unary map: `t[k] = op(t[k])` for every entry
pub fn imap_unary<K, V, S, F>(t: &mut S, mut op: F) -> Result<()>
where
    K: Clone,
    V: Clone,
    S: SparseStore<K, V>,
    F: FnMut(V) -> Result<V>,
{
    t.try_update(|_, v| op(v))
}

/// Sparse additive merge of `src` into `dest`
///
/// For every `(k, v)` in `src`:
///
/// - `k` present in `dest`: `dest[k] = both(dest[k], v)`
/// - `k` absent from `dest`: `dest[k] = only(v)`
///
/// This is the semantic core of addition and subtraction. The unary
/// fallback (identity for addition, negation for subtraction) absorbs
/// entries missing from `dest` as if they combined with the additive
/// identity — without the zero element ever being materialized or known.
pub fn merge<K, V, D, S, B, U>(dest: &mut D, src: &S, mut both: B, mut only: U) -> Result<()>
where
    K: Clone,
    V: Clone,
    D: SparseStore<K, V>,
    S: SparseStore<K, V>,
    B: FnMut(V, V) -> Result<V>,
    U: FnMut(V) -> Result<V>,
{
    src.try_visit(|k, v| {
        let updated = match dest.get(k) {
            Some(existing) => both(existing, v.clone())?,
            None => only(v.clone())?,
        };
        dest.set(k.clone(), updated);
        Ok(())
    })
}

/// Combine one coordinate of `t` with a single coefficient, in place
///
/// Conceptually `t += c·e_index`: if `index` is present,
/// `t[index] = both(t[index], c)`, otherwise `t[index] = only(c)`.
/// The copying form is `combine_at(&mut copy(t), ..)` at the call site.
pub fn combine_at<K, V, S, B, U>(t: &mut S, c: V, index: K, mut both: B, mut only: U) -> Result<()>
where
    K: Clone,
    V: Clone,
    S: SparseStore<K, V>,
    B: FnMut(V, V) -> Result<V>,
    U: FnMut(V) -> Result<V>,
{
    let updated = match t.get(&index) {
        Some(existing) => both(existing, c)?,
        None => only(c)?,
    };
    t.set(index, updated);
    Ok(())
}

/// Scalar-broadcast binary map: `result[k] = op(t[k], a)` for every entry
pub fn map_binary<K, V, S, F>(t: &S, a: V, mut op: F) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: SparseStore<K, V>,
    F: FnMut(V, V) -> Result<V>,
{
    let mut result = HashMap::with_capacity(t.len());
    t.try_visit(|k, v| {
        let updated = op(v.clone(), a.clone())?;
        result.insert(k.clone(), updated);
        Ok(())
    })?;
    Ok(result)
}

/// Right-operand scalar broadcast: `result[k] = op(a, t[k])`
///
/// The reflected form used by scalar-on-the-left multiplication.
pub fn map_rbinary<K, V, S, F>(t: &S, a: V, mut op: F) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: SparseStore<K, V>,
    F: FnMut(V, V) -> Result<V>,
{
    map_binary(t, a, move |v, a| op(a, v))
}

/// In-place scalar-broadcast binary map: `t[k] = op(t[k], a)`
pub fn imap_binary<K, V, S, F>(t: &mut S, a: V, mut op: F) -> Result<()>
where
    K: Clone,
    V: Clone,
    S: SparseStore<K, V>,
    F: FnMut(V, V) -> Result<V>,
{
    t.try_update(|_, v| op(v, a.clone()))
}

/// Intersection merge: fold `combine` over the keys present in every operand
///
/// For each key held by all of `ts`, the result entry is
/// `combine(combine(ts[0][k], ts[1][k]), ts[2][k])…` in operand order. A
/// key absent from any operand is skipped; no operands yields the empty
/// tensor.
pub fn merge_intersect<K, V, S, F>(ts: &[&S], mut combine: F) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: SparseStore<K, V>,
    F: FnMut(V, V) -> Result<V>,
{
    let Some((first, rest)) = ts.split_first() else {
        return Ok(HashMap::new());
    };
    let mut result = HashMap::with_capacity(first.len());
    first.try_visit(|k, v| {
        let mut acc = v.clone();
        for t in rest {
            match t.get(k) {
                Some(other) => acc = combine(acc, other)?,
                None => return Ok(()),
            }
        }
        result.insert(k.clone(), acc);
        Ok(())
    })?;
    Ok(result)
}

/// Strict pairwise map: `result[k] = op(s[k], t[k])` over the keys of `s`
///
/// Unlike [`merge`], the right operand is not optional: a key of `s`
/// missing from `t` is an [`Error::MissingEntry`] named after `op_name`.
pub fn zip_with<K, V, S, T, F>(s: &S, t: &T, op_name: &'static str, mut op: F) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: SparseStore<K, V>,
    T: SparseStore<K, V>,
    F: FnMut(V, V) -> Result<V>,
{
    let mut result = HashMap::with_capacity(s.len());
    s.try_visit(|k, v| {
        let other = t.get(k).ok_or(Error::missing_entry(op_name))?;
        result.insert(k.clone(), op(v.clone(), other)?);
        Ok(())
    })?;
    Ok(result)
}

/// Strict pairwise divmod split over the keys of `s`
///
/// The pairwise sibling of [`divmod_split`]: for every key of `s`,
/// `op(s[k], t[k])` yields a quotient/remainder pair split across the two
/// result tensors. A key of `s` missing from `t` is an
/// [`Error::MissingEntry`].
pub fn zip_split<K, V, S, T, F>(
    s: &S,
    t: &T,
    op_name: &'static str,
    mut op: F,
) -> Result<(HashMap<K, V>, HashMap<K, V>)>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: SparseStore<K, V>,
    T: SparseStore<K, V>,
    F: FnMut(V, V) -> Result<(V, V)>,
{
    let mut quotient = HashMap::with_capacity(s.len());
    let mut remainder = HashMap::with_capacity(s.len());
    s.try_visit(|k, v| {
        let other = t.get(k).ok_or(Error::missing_entry(op_name))?;
        let (q, r) = op(v.clone(), other)?;
        quotient.insert(k.clone(), q);
        remainder.insert(k.clone(), r);
        Ok(())
    })?;
    Ok((quotient, remainder))
}

/// Combined divmod split
///
/// For every `(k, v)` in `t`, `op(v, a)` yields a quotient/remainder pair;
/// the first element lands in the quotient tensor at `k`, the second in
/// the remainder tensor at `k`.
pub fn divmod_split<K, V, S, F>(t: &S, a: V, mut op: F) -> Result<(HashMap<K, V>, HashMap<K, V>)>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: SparseStore<K, V>,
    F: FnMut(V, V) -> Result<(V, V)>,
{
    let mut quotient = HashMap::with_capacity(t.len());
    let mut remainder = HashMap::with_capacity(t.len());
    t.try_visit(|k, v| {
        let (q, r) = op(v.clone(), a.clone())?;
        quotient.insert(k.clone(), q);
        remainder.insert(k.clone(), r);
        Ok(())
    })?;
    Ok((quotient, remainder))
}
