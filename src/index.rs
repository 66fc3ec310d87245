//! Concrete multi-index type
//!
//! The kernel and the vector space operations treat keys opaquely — any
//! `Clone + Eq + Hash` type indexes a sparse tensor. The modules that must
//! inspect index structure ([`crate::creation`], [`crate::utility`]) work
//! on the canonical representation: a trimmed sequence of non-negative
//! axis positions. The empty index addresses the rank-0 (scalar)
//! coordinate.

/// Canonical multi-index: one axis position per tensor axis
///
/// Kept trimmed of trailing zeros, so `[1, 2]`, `[1, 2, 0]` and
/// `[1, 2, 0, 0]` all denote the same coordinate `[1, 2]`.
pub type Idx = Vec<usize>;

/// Trim trailing zero axis positions off a multi-index
pub fn trim(mut i: Idx) -> Idx {
    while i.last() == Some(&0) {
        i.pop();
    }
    i
}
