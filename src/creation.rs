//! Sparse tensor constructors
//!
//! Tensors are plain mappings; these constructors produce the fast-path
//! `HashMap` form with canonically trimmed [`Idx`] keys. The random
//! constructors fill every coordinate of a dense shape, which is the
//! conventional starting point for tests and numeric experiments —
//! sparsity is a storage property, so a fully populated map is still a
//! valid sparse tensor.

use std::collections::HashMap;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::index::{trim, Idx};

/// Return the zero tensor: the empty mapping
pub fn tenszero<V>() -> HashMap<Idx, V> {
    HashMap::new()
}

/// Return a basis tensor, `c·e_i`: a single entry `i: c`
///
/// The index is trimmed to its canonical form, so `tensbasis(vec![1, 2,
/// 3, 0], 4)` stores its coefficient at `[1, 2, 3]`.
pub fn tensbasis<V>(i: Idx, c: V) -> HashMap<Idx, V> {
    HashMap::from([(trim(i), c)])
}

/// Return a random tensor of uniformly sampled coefficients
///
/// One coefficient per coordinate of the dense shape `dims`, sampled from
/// `[0, 1)`. An empty `dims` gives a single rank-0 entry; a zero axis
/// gives the empty tensor.
pub fn tensrand(dims: &[usize]) -> HashMap<Idx, f64> {
    let mut rng = rand::rng();
    dense_indices(dims)
        .into_iter()
        .map(|i| (trim(i), rng.random::<f64>()))
        .collect()
}

/// Return a random tensor of normally sampled coefficients
///
/// One coefficient per coordinate of the dense shape `dims`, sampled from
/// `N(mu, sigma)`.
pub fn tensrandn(dims: &[usize], mu: f64, sigma: f64) -> HashMap<Idx, f64> {
    let mut rng = rand::rng();
    dense_indices(dims)
        .into_iter()
        .map(|i| {
            let z: f64 = rng.sample(StandardNormal);
            (trim(i), mu + sigma * z)
        })
        .collect()
}

/// Every multi-index of a dense shape, last axis varying fastest
fn dense_indices(dims: &[usize]) -> Vec<Idx> {
    if dims.contains(&0) {
        return Vec::new();
    }
    let mut indices = Vec::with_capacity(dims.iter().product());
    let mut current = vec![0; dims.len()];
    loop {
        indices.push(current.clone());
        let mut axis = dims.len();
        loop {
            if axis == 0 {
                return indices;
            }
            axis -= 1;
            current[axis] += 1;
            if current[axis] < dims[axis] {
                break;
            }
            current[axis] = 0;
        }
    }
}
