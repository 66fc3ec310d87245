//! Integration tests for the vector space operation surface
//!
//! Tests verify correctness across:
//! - Copying and in-place forms
//! - Merge boundary behavior (present-in-both vs present-in-one)
//! - Variadic arities
//! - The default (rank-0) single-coordinate index

use std::collections::HashMap;

use tensr::prelude::*;

fn tens(entries: &[(&[usize], i64)]) -> HashMap<Idx, i64> {
    entries.iter().map(|(i, v)| (i.to_vec(), *v)).collect()
}

// ============================================================================
// Identity / Negation
// ============================================================================

#[test]
fn test_tenspos_is_fresh_copy() {
    let t = tens(&[(&[1, 2, 3], 4)]);
    let r = tenspos(&t).unwrap();
    assert_eq!(r, t);

    // fresh container: mutating the result leaves the input alone
    let mut r = r;
    r.insert(vec![9], 9);
    assert_eq!(t.len(), 1);
}

#[test]
fn test_tensneg() {
    let t = tens(&[(&[1, 2, 3], 4), (&[0], -5)]);
    assert_eq!(tensneg(&t).unwrap(), tens(&[(&[1, 2, 3], -4), (&[0], 5)]));
}

#[test]
fn test_tensipos_tensineg_in_place() {
    let mut t = tens(&[(&[0], 2)]);
    tensipos(&mut t).unwrap();
    assert_eq!(t, tens(&[(&[0], 2)]));
    tensineg(&mut t).unwrap();
    assert_eq!(t, tens(&[(&[0], -2)]));
    assert_eq!(tensneg(&t).unwrap(), tens(&[(&[0], 2)]));
}

// ============================================================================
// Sum
// ============================================================================

#[test]
fn test_tensadd_spec_example() {
    let s = tens(&[(&[0], 2), (&[1], 3)]);
    let t = tens(&[(&[1], 1), (&[2], 4)]);
    assert_eq!(
        tensadd(&[&s, &t]).unwrap(),
        tens(&[(&[0], 2), (&[1], 4), (&[2], 4)])
    );
}

#[test]
fn test_tensadd_zero_operands_is_empty() {
    let r: HashMap<Idx, i64> = tensadd::<Idx, i64, HashMap<Idx, i64>>(&[]).unwrap();
    assert!(r.is_empty());
}

#[test]
fn test_tensadd_one_operand_is_copy() {
    let t = tens(&[(&[1, 2, 3], 4)]);
    let r = tensadd(&[&t]).unwrap();
    assert_eq!(r, t);
}

#[test]
fn test_tensadd_with_explicit_zero_entry() {
    // explicit zeros are ordinary entries; nothing prunes them
    let s = tens(&[(&[0], 0)]);
    let t = tens(&[(&[1], 1)]);
    assert_eq!(tensadd(&[&s, &t]).unwrap(), tens(&[(&[0], 0), (&[1], 1)]));
}

#[test]
fn test_tensiadd_matches_tensadd() {
    let s = tens(&[(&[0], 2), (&[1], 3)]);
    let t = tens(&[(&[1], 1), (&[2], 4)]);

    let mut dest = s.clone();
    tensiadd(&mut dest, &[&t]).unwrap();
    assert_eq!(dest, tensadd(&[&s, &t]).unwrap());
}

#[test]
fn test_tensiadd_no_sources_is_noop() {
    let mut s = tens(&[(&[0], 1)]);
    tensiadd::<Idx, i64, _, HashMap<Idx, i64>>(&mut s, &[]).unwrap();
    assert_eq!(s, tens(&[(&[0], 1)]));
}

// ============================================================================
// Single-coordinate add / sub
// ============================================================================

#[test]
fn test_tensaddc_explicit_index() {
    let t = tens(&[(&[0], 1)]);
    assert_eq!(
        tensaddc(&t, 4, vec![2]).unwrap(),
        tens(&[(&[0], 1), (&[2], 4)])
    );
}

#[test]
fn test_tensaddc_default_index_is_rank0() {
    let t = tens(&[(&[0], 1)]);
    let defaulted = tensaddc(&t, 4, None).unwrap();
    let explicit = tensaddc(&t, 4, vec![]).unwrap();
    assert_eq!(defaulted, explicit);
    assert_eq!(defaulted, tens(&[(&[0], 1), (&[], 4)]));
}

#[test]
fn test_tensaddc_combines_existing_coordinate() {
    let t = tens(&[(&[1, 2, 3], 4)]);
    assert_eq!(
        tensaddc(&t, 5, vec![1, 2, 3]).unwrap(),
        tens(&[(&[1, 2, 3], 9)])
    );
}

#[test]
fn test_tensiaddc_matches_tensaddc() {
    let t = tens(&[(&[0], 1)]);
    let mut u = t.clone();
    tensiaddc(&mut u, 4, vec![2]).unwrap();
    assert_eq!(u, tensaddc(&t, 4, vec![2]).unwrap());
}

#[test]
fn test_tenssubc_default_index() {
    let t = tens(&[(&[1, 2, 3], 4)]);
    assert_eq!(
        tenssubc(&t, 5, None).unwrap(),
        tens(&[(&[1, 2, 3], 4), (&[], -5)])
    );
}

#[test]
fn test_tensisubc_matches_tenssubc() {
    let t = tens(&[(&[0], 3)]);
    let mut u = t.clone();
    tensisubc(&mut u, 1, vec![0]).unwrap();
    assert_eq!(u, tenssubc(&t, 1, vec![0]).unwrap());
    assert_eq!(u, tens(&[(&[0], 2)]));
}

// ============================================================================
// Difference
// ============================================================================

#[test]
fn test_tenssub_spec_example() {
    let s = tens(&[(&[0], 5)]);
    let t = tens(&[(&[0], 2), (&[1], 1)]);
    assert_eq!(tenssub(&s, &t).unwrap(), tens(&[(&[0], 3), (&[1], -1)]));
}

#[test]
fn test_tenssub_missing_left_entry_negates() {
    let s: HashMap<Idx, i64> = HashMap::new();
    let t = tens(&[(&[4, 5], 7)]);
    assert_eq!(tenssub(&s, &t).unwrap(), tens(&[(&[4, 5], -7)]));
}

#[test]
fn test_tensisub_matches_tenssub() {
    let s = tens(&[(&[0], 5)]);
    let t = tens(&[(&[0], 2), (&[1], 1)]);
    let mut dest = s.clone();
    tensisub(&mut dest, &t).unwrap();
    assert_eq!(dest, tenssub(&s, &t).unwrap());
}

// ============================================================================
// Scalar multiplicative family
// ============================================================================

#[test]
fn test_tensmul_spec_example() {
    let t = tens(&[(&[0], 3), (&[1], -2)]);
    assert_eq!(tensmul(&t, 5).unwrap(), tens(&[(&[0], 15), (&[1], -10)]));
}

#[test]
fn test_tensrmul_commutative_coefficients() {
    let t = tens(&[(&[0], 3), (&[1], -2)]);
    assert_eq!(tensrmul(5, &t).unwrap(), tensmul(&t, 5).unwrap());
}

#[test]
fn test_tensimul_matches_tensmul() {
    let t = tens(&[(&[0], 3)]);
    let mut u = t.clone();
    tensimul(&mut u, 5).unwrap();
    assert_eq!(u, tensmul(&t, 5).unwrap());
}

#[test]
fn test_tenstruediv_floats() {
    let t = HashMap::from([(vec![0usize], 1.0f64), (vec![1], 3.0)]);
    let r = tenstruediv(&t, 2.0).unwrap();
    assert_eq!(r[&vec![0]], 0.5);
    assert_eq!(r[&vec![1]], 1.5);
}

#[test]
fn test_tensfloordiv_and_tensmod_floored() {
    let t = tens(&[(&[0], 7), (&[1], -7)]);
    assert_eq!(tensfloordiv(&t, 2).unwrap(), tens(&[(&[0], 3), (&[1], -4)]));
    assert_eq!(tensmod(&t, 2).unwrap(), tens(&[(&[0], 1), (&[1], 1)]));
}

#[test]
fn test_in_place_division_family() {
    let t = tens(&[(&[0], 7)]);

    let mut u = t.clone();
    tensifloordiv(&mut u, 2).unwrap();
    assert_eq!(u, tensfloordiv(&t, 2).unwrap());

    let mut u = t.clone();
    tensimod(&mut u, 2).unwrap();
    assert_eq!(u, tensmod(&t, 2).unwrap());

    let mut u = HashMap::from([(vec![0usize], 7.0f64)]);
    tensitruediv(&mut u, 2.0).unwrap();
    assert_eq!(u[&vec![0]], 3.5);
}

#[test]
fn test_division_by_zero_propagates() {
    let t = tens(&[(&[0], 7)]);
    assert!(tensfloordiv(&t, 0).is_err());
    assert!(tensmod(&t, 0).is_err());
    assert!(tensdivmod(&t, 0).is_err());
}

// ============================================================================
// Divmod
// ============================================================================

#[test]
fn test_tensdivmod_spec_example() {
    let t = tens(&[(&[0], 7)]);
    let (q, r) = tensdivmod(&t, 2).unwrap();
    assert_eq!(q, tens(&[(&[0], 3)]));
    assert_eq!(r, tens(&[(&[0], 1)]));
}

#[test]
fn test_tensdivmod_per_entry_consistency() {
    let t = tens(&[(&[0], 7), (&[1], -7), (&[2], 0), (&[0, 1], 13)]);
    let (q, r) = tensdivmod(&t, 3).unwrap();
    for (k, v) in &t {
        let (qe, re) = Coefficient::div_rem(*v, 3).unwrap();
        assert_eq!(q[k], qe);
        assert_eq!(r[k], re);
    }
}
