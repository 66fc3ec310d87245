//! Vector space operations on sparse tensors
//!
//! The flat operation surface of the crate: identity/negation, variadic
//! sum, difference, single-coordinate combination, and the scalar
//! multiplicative family. Each copying form returns a fresh
//! [`HashMap`]-backed tensor; each in-place form (`tensi*`) mutates its
//! first operand through the store contract and allocates nothing beyond
//! per-entry update cost.
//!
//! Coefficient-level arithmetic is delegated to the operand's
//! [`Coefficient`] impl; containers are accessed through [`SparseStore`],
//! so the same operations work on the fast-path `HashMap`, the shipped
//! `BTreeMap` generic path, or any caller-provided conforming container.
//!
//! # Naming
//!
//! `tenstruediv`/`tensfloordiv` instead of a single `tensdiv`: the crate
//! serves integer coefficient rings as well as fields, so exact and floor
//! division both have to exist and neither gets the privileged name.

use std::collections::HashMap;
use std::hash::Hash;

use crate::coeff::Coefficient;
use crate::error::Result;
use crate::kernel;
use crate::store::SparseStore;

/// Return the identity, `+t`
pub fn tenspos<K, V, S>(t: &S) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::map_unary(t, V::pos)
}

/// Apply unary plus, `t = +t`
pub fn tensipos<K, V, S>(t: &mut S) -> Result<()>
where
    K: Clone,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::imap_unary(t, V::pos)
}

/// Return the negation, `-t`
pub fn tensneg<K, V, S>(t: &S) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::map_unary(t, V::neg)
}

/// Negate, `t = -t`
pub fn tensineg<K, V, S>(t: &mut S) -> Result<()>
where
    K: Clone,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::imap_unary(t, V::neg)
}

/// Return the sum, `t_0 + t_1 + …`
///
/// Zero operands give the empty tensor; one operand gives a fresh copy.
///
/// See also [`tensaddc`] for the sum with a single coefficient.
pub fn tensadd<K, V, S>(ts: &[&S]) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    let mut result = HashMap::new();
    for t in ts {
        kernel::merge(&mut result, *t, V::add, V::pos)?;
    }
    Ok(result)
}

/// Add, `s += t_0 + t_1 + …`
///
/// See also [`tensiaddc`] for the sum with a single coefficient.
pub fn tensiadd<K, V, D, S>(s: &mut D, ts: &[&S]) -> Result<()>
where
    K: Clone,
    V: Coefficient,
    D: SparseStore<K, V>,
    S: SparseStore<K, V>,
{
    for t in ts {
        kernel::merge(s, *t, V::add, V::pos)?;
    }
    Ok(())
}

/// Return the sum with a basis tensor, `t + c·e_i`
///
/// Pass `None` for `i` to address the rank-0 (scalar) coordinate, the
/// empty multi-index.
///
/// See also [`tensadd`] for the sum of whole tensors.
pub fn tensaddc<K, V, S, I>(t: &S, c: V, i: I) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash + Default,
    V: Coefficient,
    S: SparseStore<K, V>,
    I: Into<Option<K>>,
{
    let mut result = kernel::copy(t);
    kernel::combine_at(&mut result, c, i.into().unwrap_or_default(), V::add, V::pos)?;
    Ok(result)
}

/// Add a basis tensor, `t += c·e_i`
///
/// See also [`tensiadd`] for the sum of whole tensors.
pub fn tensiaddc<K, V, S, I>(t: &mut S, c: V, i: I) -> Result<()>
where
    K: Clone + Default,
    V: Coefficient,
    S: SparseStore<K, V>,
    I: Into<Option<K>>,
{
    kernel::combine_at(t, c, i.into().unwrap_or_default(), V::add, V::pos)
}

/// Return the difference, `s - t`
///
/// See also [`tenssubc`] for the difference with a single coefficient.
pub fn tenssub<K, V, S, T>(s: &S, t: &T) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
    T: SparseStore<K, V>,
{
    let mut result = kernel::copy(s);
    kernel::merge(&mut result, t, V::sub, V::neg)?;
    Ok(result)
}

/// Subtract, `s -= t`
///
/// See also [`tensisubc`] for the difference with a single coefficient.
pub fn tensisub<K, V, D, S>(s: &mut D, t: &S) -> Result<()>
where
    K: Clone,
    V: Coefficient,
    D: SparseStore<K, V>,
    S: SparseStore<K, V>,
{
    kernel::merge(s, t, V::sub, V::neg)
}

/// Return the difference with a basis tensor, `t - c·e_i`
///
/// Pass `None` for `i` to address the rank-0 (scalar) coordinate.
///
/// See also [`tenssub`] for the difference of whole tensors.
pub fn tenssubc<K, V, S, I>(t: &S, c: V, i: I) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash + Default,
    V: Coefficient,
    S: SparseStore<K, V>,
    I: Into<Option<K>>,
{
    let mut result = kernel::copy(t);
    kernel::combine_at(&mut result, c, i.into().unwrap_or_default(), V::sub, V::neg)?;
    Ok(result)
}

/// Subtract a basis tensor, `t -= c·e_i`
///
/// See also [`tensisub`] for the difference of whole tensors.
pub fn tensisubc<K, V, S, I>(t: &mut S, c: V, i: I) -> Result<()>
where
    K: Clone + Default,
    V: Coefficient,
    S: SparseStore<K, V>,
    I: Into<Option<K>>,
{
    kernel::combine_at(t, c, i.into().unwrap_or_default(), V::sub, V::neg)
}

/// Return the product with a scalar on the right, `t·a`
pub fn tensmul<K, V, S>(t: &S, a: V) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::map_binary(t, a, V::mul)
}

/// Return the product with a scalar on the left, `a·t`
///
/// The reflected form; for commutative coefficient algebras it agrees
/// with [`tensmul`].
pub fn tensrmul<K, V, S>(a: V, t: &S) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::map_rbinary(t, a, V::mul)
}

/// Multiply by a scalar, `t ·= a`
pub fn tensimul<K, V, S>(t: &mut S, a: V) -> Result<()>
where
    K: Clone,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::imap_binary(t, a, V::mul)
}

/// Return the true quotient, `t / a`
pub fn tenstruediv<K, V, S>(t: &S, a: V) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::map_binary(t, a, V::true_div)
}

/// True divide by a scalar, `t /= a`
pub fn tensitruediv<K, V, S>(t: &mut S, a: V) -> Result<()>
where
    K: Clone,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::imap_binary(t, a, V::true_div)
}

/// Return the floor quotient, `⌊t / a⌋`
pub fn tensfloordiv<K, V, S>(t: &S, a: V) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::map_binary(t, a, V::floor_div)
}

/// Floor divide by a scalar, `t //= a`
pub fn tensifloordiv<K, V, S>(t: &mut S, a: V) -> Result<()>
where
    K: Clone,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::imap_binary(t, a, V::floor_div)
}

/// Return the remainder, `t mod a`
pub fn tensmod<K, V, S>(t: &S, a: V) -> Result<HashMap<K, V>>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::map_binary(t, a, V::rem)
}

/// Mod by a scalar, `t %= a`
pub fn tensimod<K, V, S>(t: &mut S, a: V) -> Result<()>
where
    K: Clone,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::imap_binary(t, a, V::rem)
}

/// Return the floor quotient and remainder, `(⌊t / a⌋, t mod a)`
///
/// One coefficient-level divmod per entry; its pair is split across the
/// two result tensors at the same key.
pub fn tensdivmod<K, V, S>(t: &S, a: V) -> Result<(HashMap<K, V>, HashMap<K, V>)>
where
    K: Clone + Eq + Hash,
    V: Coefficient,
    S: SparseStore<K, V>,
{
    kernel::divmod_split(t, a, V::div_rem)
}
