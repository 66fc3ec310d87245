//! Hadamard (elementwise) operations on sparse tensors
//!
//! Where [`vector_space`](crate::vector_space) broadcasts a scalar over one
//! tensor, the operations here pair entries of tensors with each other,
//! coordinate by coordinate. Sparsity makes the pairing rule per family
//! explicit:
//!
//! - [`tenshadamard`]: product over the **intersection** of key sets — a
//!   factor missing anywhere makes the product an implicit zero, so the
//!   entry is simply absent from the result.
//! - the division family ([`tenshadamardtruediv`] and siblings): the left
//!   operand's key set, **strict** on the right — a denominator cannot be
//!   an implicit zero, so a key of `s` missing from `t` is an
//!   [`Error::MissingEntry`](crate::error::Error::MissingEntry).
//! - [`tenshadamardmin`]/[`tenshadamardmax`]: the **union** of key sets,
//!   extremum over the operands that hold the key.
//!
//! All copying, all returning fresh [`HashMap`]-backed tensors.

use std::collections::HashMap;
use std::hash::Hash;

use crate::coeff::Coefficient;
use crate::error::Result;
use crate::kernel;
use crate::store::SparseStore;

/// Return the elementwise product, `(t_0)_i · (t_1)_i · …`
///
/// Only keys present in every operand survive; zero operands give the
/// empty tensor.
pub fn tenshadamard<K, V, S>(ts: &[&S]) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::merge_intersect(ts, V::mul)
}

/// Return the elementwise true division, `s_i / t_i` over the keys of `s`
pub fn tenshadamardtruediv<K, V, S, T>(s: &S, t: &T) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
    T: SparseStore<K, V>,
{
    kernel::zip_with(s, t, "true_div", V::true_div)
}

/// Return the elementwise floor division, `⌊s_i / t_i⌋` over the keys of `s`
pub fn tenshadamardfloordiv<K, V, S, T>(s: &S, t: &T) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
    T: SparseStore<K, V>,
{
    kernel::zip_with(s, t, "floor_div", V::floor_div)
}

/// Return the elementwise remainder, `s_i mod t_i` over the keys of `s`
pub fn tenshadamardmod<K, V, S, T>(s: &S, t: &T) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
    T: SparseStore<K, V>,
{
    kernel::zip_with(s, t, "rem", V::rem)
}

/// Return the elementwise floor quotient and remainder as two tensors
///
/// Per key of `s`, the coefficient [`div_rem`](Coefficient::div_rem) pair
/// is split across the quotient and remainder results.
pub fn tenshadamarddivmod<K, V, S, T>(s: &S, t: &T) -> Result<(HashMap<K, V>, HashMap<K, V>)>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
    T: SparseStore<K, V>,
{
    kernel::zip_split(s, t, "div_rem", V::div_rem)
}

/// Return the elementwise minimum, `min((t_0)_i, (t_1)_i, …)`
///
/// Runs over the union of all key sets; per key, the minimum of the
/// operands that hold it. Needs no arithmetic, only an order, so any
/// `Clone + PartialOrd` coefficient works. An incomparable pair (float
/// NaN) keeps the earlier operand's value.
pub fn tenshadamardmin<K, V, S>(ts: &[&S]) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Clone + PartialOrd,
    S: SparseStore<K, V>,
{
    let mut result = HashMap::new();
    for t in ts {
        kernel::merge(&mut result, *t, |a, b| Ok(if b < a { b } else { a }), Ok)?;
    }
    Ok(result)
}

/// Return the elementwise maximum, `max((t_0)_i, (t_1)_i, …)`
///
/// The order-dual of [`tenshadamardmin`].
pub fn tenshadamardmax<K, V, S>(ts: &[&S]) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Clone + PartialOrd,
    S: SparseStore<K, V>,
{
    let mut result = HashMap::new();
    for t in ts {
        kernel::merge(&mut result, *t, |a, b| Ok(if b > a { b } else { a }), Ok)?;
    }
    Ok(result)
}
