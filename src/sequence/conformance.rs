//! A reusable test suite for `Sequence` implementers.

/// Generates a test module checking a container against the `Sequence`
/// contract.
///
/// The container must implement `Sequence<Element = i32> + Default`. The
/// generated module is named `<name>_sequence_conformance` and contains one
/// `#[test]` per contract rule: bounds handling of positional operations,
/// scan order of the predicate searches, single-pass removal, sort and
/// sorted search, and the derived bulk operations.
///
/// Names visible where the macro is invoked are visible to the container
/// type expression.
///
/// # Examples
///
/// ```rust,ignore
/// use seqlist::container::LinkedSequence;
///
/// seqlist::sequence_conformance!(linked, LinkedSequence<i32>);
/// seqlist::sequence_conformance!(vec, Vec<i32>);
/// ```
#[macro_export]
macro_rules! sequence_conformance {
    ($name:ident, $sequence:ty) => {
        $crate::paste::paste! {
            #[cfg(test)]
            #[allow(clippy::bool_assert_comparison)]
            mod [<$name _sequence_conformance>] {
                #[allow(unused_imports)]
                use super::*;
                use $crate::sequence::Sequence;

                fn build(items: &[i32]) -> $sequence {
                    let mut sequence = <$sequence>::default();
                    for item in items {
                        Sequence::add(&mut sequence, *item);
                    }
                    sequence
                }

                fn contents(sequence: &$sequence) -> Vec<i32> {
                    Sequence::elements(sequence).copied().collect()
                }

                #[test]
                fn add_appends_at_the_end() {
                    let mut sequence = build(&[1, 2]);
                    Sequence::add(&mut sequence, 3);
                    assert_eq!(Sequence::size(&sequence), 3);
                    assert_eq!(Sequence::get(&sequence, 2), Some(&3));
                }

                #[test]
                fn add_at_every_valid_position() {
                    for index in 0..=3 {
                        let mut sequence = build(&[10, 20, 30]);
                        assert!(Sequence::add_at(&mut sequence, index, 99).is_ok());
                        assert_eq!(Sequence::size(&sequence), 4);
                        assert_eq!(Sequence::get(&sequence, index), Some(&99));
                    }
                }

                #[test]
                fn add_at_past_the_end_is_rejected() {
                    let mut sequence = build(&[10, 20]);
                    let error = Sequence::add_at(&mut sequence, 3, 99).unwrap_err();
                    assert_eq!(error.index, 3);
                    assert_eq!(error.size, 2);
                    assert_eq!(error.into_element(), 99);
                    assert_eq!(contents(&sequence), vec![10, 20]);
                }

                #[test]
                fn get_out_of_bounds_is_none() {
                    let sequence = build(&[1]);
                    assert_eq!(Sequence::get(&sequence, 1), None);
                    assert_eq!(Sequence::get(&sequence, usize::MAX), None);
                }

                #[test]
                fn remove_at_shifts_later_elements() {
                    let mut sequence = build(&[1, 2, 3, 4]);
                    assert_eq!(Sequence::remove_at(&mut sequence, 1), Some(2));
                    assert_eq!(contents(&sequence), vec![1, 3, 4]);
                    assert_eq!(Sequence::remove_at(&mut sequence, 2), Some(4));
                    assert_eq!(contents(&sequence), vec![1, 3]);
                }

                #[test]
                fn remove_at_out_of_bounds_is_none() {
                    let mut sequence = build(&[1, 2]);
                    assert_eq!(Sequence::remove_at(&mut sequence, 2), None);
                    assert_eq!(Sequence::size(&sequence), 2);
                }

                #[test]
                fn index_where_scans_forward_and_backward() {
                    let sequence = build(&[5, 8, 6, 8, 7]);
                    let even = |value: &i32| value % 2 == 0;
                    assert_eq!(Sequence::index_where(&sequence, even), Some(1));
                    assert_eq!(Sequence::last_index_where(&sequence, even), Some(3));
                    assert_eq!(Sequence::index_where(&sequence, |value: &i32| *value > 100), None);
                    assert_eq!(Sequence::last_index_where(&sequence, |value: &i32| *value > 100), None);
                }

                #[test]
                fn remove_if_compacts_adjacent_matches() {
                    let mut sequence = build(&[2, 2, 3, 4, 4, 5, 6]);
                    assert!(Sequence::remove_if(&mut sequence, |value: &i32| value % 2 == 0));
                    assert_eq!(contents(&sequence), vec![3, 5]);
                    assert!(!Sequence::remove_if(&mut sequence, |value: &i32| value % 2 == 0));
                    assert_eq!(contents(&sequence), vec![3, 5]);
                }

                #[test]
                fn remove_if_can_empty_the_sequence() {
                    let mut sequence = build(&[1, 1, 1]);
                    assert!(Sequence::remove_if(&mut sequence, |_: &i32| true));
                    assert!(Sequence::is_empty(&sequence));
                }

                #[test]
                fn sort_by_comparator() {
                    let mut sequence = build(&[2, 9, 4, 1]);
                    Sequence::sort_by(&mut sequence, |left: &i32, right: &i32| right.cmp(left));
                    assert_eq!(contents(&sequence), vec![9, 4, 2, 1]);
                }

                #[test]
                fn sort_then_sorted_search() {
                    let mut sequence = build(&[3, 1, 2]);
                    Sequence::sort(&mut sequence);
                    assert_eq!(contents(&sequence), vec![1, 2, 3]);
                    assert_eq!(Sequence::sorted_search(&sequence, &2), Ok(1));
                    assert_eq!(Sequence::sorted_search(&sequence, &5), Err(3));
                    assert_eq!(Sequence::sorted_search(&sequence, &0), Err(0));
                }

                #[test]
                fn clear_leaves_size_zero() {
                    let mut sequence = build(&[1, 2, 3]);
                    Sequence::clear(&mut sequence);
                    assert_eq!(Sequence::size(&sequence), 0);
                    Sequence::add(&mut sequence, 4);
                    assert_eq!(contents(&sequence), vec![4]);
                }

                #[test]
                fn derived_search_operations() {
                    let sequence = build(&[4, 7, 4]);
                    assert!(Sequence::contains(&sequence, &7));
                    assert!(!Sequence::contains(&sequence, &5));
                    assert_eq!(Sequence::index_of(&sequence, &4), Some(0));
                    assert_eq!(Sequence::last_index_of(&sequence, &4), Some(2));
                    assert_eq!(Sequence::index_of(&sequence, &5), None);
                }

                #[test]
                fn remove_all_and_retain_all() {
                    let others = build(&[2, 4]);

                    let mut removed = build(&[1, 2, 3, 4]);
                    assert!(Sequence::remove_all(&mut removed, &others));
                    assert_eq!(contents(&removed), vec![1, 3]);

                    let mut retained = build(&[1, 2, 3, 4]);
                    assert!(Sequence::retain_all(&mut retained, &others));
                    assert_eq!(contents(&retained), vec![2, 4]);
                    assert!(Sequence::remove_all(&mut retained, &others));
                    assert!(Sequence::is_empty(&retained));
                }

                #[test]
                fn elements_traverse_in_index_order() {
                    let sequence = build(&[3, 1, 4, 1, 5]);
                    assert_eq!(contents(&sequence), vec![3, 1, 4, 1, 5]);
                    let backward: Vec<i32> = Sequence::elements(&sequence).rev().copied().collect();
                    assert_eq!(backward, vec![5, 1, 4, 1, 3]);
                }

                #[test]
                fn remove_all_own_clears() {
                    let mut sequence = build(&[1, 2, 3]);
                    assert_eq!(Sequence::remove_all_own(&mut sequence), true);
                    assert_eq!(Sequence::size(&sequence), 0);
                }
            }
        }
    };
}
