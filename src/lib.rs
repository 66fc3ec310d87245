//! # tensr
//!
//! **Sparse multilinear tensor arithmetic over generic coefficient rings.**
//!
//! tensr combines tensors represented as sparse mappings from multi-indices
//! to coefficients — the natural encoding of multivariate polynomials and
//! other mostly-zero multilinear objects. A tensor is just a map: the
//! fast-path [`std::collections::HashMap`], or any container implementing
//! the minimal [`store::SparseStore`] contract.
//!
//! ## Why tensr?
//!
//! - **Generic coefficients**: any ring/field-like type plugs in through
//!   the [`coeff::Coefficient`] capability trait — integers, floats,
//!   complex numbers, or your own algebra
//! - **Generic containers**: one mapping contract, a fast path for
//!   `HashMap` and a snapshot-safe generic path for everything else
//! - **Sparse-correct merging**: missing entries behave as the additive
//!   identity without the zero element ever being materialized
//! - **Copying and in-place forms** of every operation
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use tensr::prelude::*;
//!
//! let s = HashMap::from([(vec![0], 2i64), (vec![1], 3)]);
//! let t = HashMap::from([(vec![1], 1i64), (vec![2], 4)]);
//!
//! let sum = tensadd(&[&s, &t])?;
//! assert_eq!(sum, HashMap::from([(vec![0], 2), (vec![1], 4), (vec![2], 4)]));
//!
//! let (q, r) = tensdivmod(&HashMap::from([(vec![0], 7i64)]), 2)?;
//! assert_eq!(q[&vec![0]], 3);
//! assert_eq!(r[&vec![0]], 1);
//! # Ok::<(), tensr::error::Error>(())
//! ```
//!
//! ## Module Map
//!
//! - [`store`]: the mapping access contract (fast path / generic path)
//! - [`kernel`]: the elementwise combinator kernel
//! - [`coeff`]: coefficient algebras and conjugation
//! - [`vector_space`]: the public arithmetic surface (`tens*` operations)
//! - [`elementwise`]: the hadamard family (`tenshadamard*` operations)
//! - [`hilbert_space`]: conjugation operations
//! - [`creation`], [`utility`]: constructors and structural helpers over
//!   the canonical [`index::Idx`] multi-index

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coeff;
pub mod creation;
pub mod elementwise;
pub mod error;
pub mod hilbert_space;
pub mod index;
pub mod kernel;
pub mod store;
pub mod utility;
pub mod vector_space;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coeff::{Coefficient, Complex128, Complex64};
    pub use crate::error::{Error, Result};
    pub use crate::index::Idx;
    pub use crate::store::SparseStore;

    pub use crate::creation::{tensbasis, tensrand, tensrandn, tenszero};
    pub use crate::elementwise::{
        tenshadamard, tenshadamarddivmod, tenshadamardfloordiv, tenshadamardmax,
        tenshadamardmin, tenshadamardmod, tenshadamardtruediv,
    };
    pub use crate::hilbert_space::{tensconj, tensiconj, try_conjugate};
    pub use crate::utility::{tensdim, tenseq, tensrank, tensround, tenstrim};
    pub use crate::vector_space::{
        tensadd, tensaddc, tensdivmod, tensfloordiv, tensiadd, tensiaddc, tensifloordiv,
        tensimod, tensimul, tensineg, tensipos, tensisub, tensisubc, tensitruediv, tensmod,
        tensmul, tensneg, tenspos, tensrmul, tenssub, tenssubc, tenstruediv,
    };
}
