#![cfg(feature = "smallvec")]

//! Integration tests for the `SmallVec` implementation.

use rstest::rstest;
use seqlist::sequence::Sequence;
use smallvec::{SmallVec, smallvec};

seqlist::sequence_conformance!(inline_four, SmallVec<[i32; 4]>);
seqlist::sequence_conformance!(inline_one, SmallVec<[i32; 1]>);

#[rstest]
fn test_retain_all_against_vec() {
    let mut values: SmallVec<[i32; 4]> = smallvec![1, 2, 3, 4, 5];
    assert!(values.retain_all(&vec![5, 1]));
    assert_eq!(values.as_slice(), &[1, 5]);
}

#[rstest]
fn test_sort_across_spill() {
    let mut values: SmallVec<[i32; 2]> = smallvec![4, 3, 2, 1];
    Sequence::sort(&mut values);
    assert_eq!(values.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(values.sorted_search(&3), Ok(2));
}
