//! Integration tests for `LinkedSequence`.

use rstest::rstest;
use seqlist::container::LinkedSequence;
use seqlist::sequence::Sequence;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_sequence() {
    let sequence: LinkedSequence<i32> = LinkedSequence::new();
    assert!(sequence.is_empty());
    assert_eq!(sequence.size(), 0);
    assert_eq!(sequence.first(), None);
}

#[rstest]
fn test_default_equals_new() {
    assert_eq!(LinkedSequence::<i32>::default(), LinkedSequence::new());
}

#[rstest]
fn test_from_iterator_and_extend() {
    let mut sequence: LinkedSequence<i32> = (1..=3).collect();
    sequence.extend([4, 5]);
    assert_eq!(sequence.to_string(), "[1, 2, 3, 4, 5]");
    assert_eq!(sequence.last(), Some(&5));
}

// =============================================================================
// Mixed Edits
// =============================================================================

#[rstest]
fn test_front_and_positional_edits_interleave() {
    let mut sequence = LinkedSequence::new();
    sequence.add(3);
    sequence.push_front(1);
    assert!(sequence.add_at(1, 2).is_ok());
    assert!(sequence.add_at(3, 4).is_ok());
    assert_eq!(sequence.remove_at(0), Some(1));
    assert_eq!(sequence.pop_back(), Some(4));
    assert_eq!(sequence.to_string(), "[2, 3]");
}

#[rstest]
fn test_add_at_rejection_returns_element() {
    let mut sequence: LinkedSequence<String> = LinkedSequence::new();
    let error = sequence.add_at(1, String::from("late")).unwrap_err();
    assert_eq!(error.to_string(), "insert position 1 is out of bounds for a sequence of size 0");
    assert_eq!(error.into_element(), "late");
    assert!(sequence.is_empty());
}

#[rstest]
fn test_remove_first_only_touches_first_occurrence() {
    let mut sequence: LinkedSequence<char> = "abcab".chars().collect();
    assert_eq!(sequence.remove_first(&'b'), Some('b'));
    assert_eq!(sequence.iter().collect::<String>(), "acab");
    assert_eq!(sequence.remove_first(&'z'), None);
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn test_sort_then_search_scenario() {
    let mut sequence: LinkedSequence<i32> = [3, 1, 2].into_iter().collect();
    Sequence::sort(&mut sequence);
    assert_eq!(sequence.to_string(), "[1, 2, 3]");
    assert_eq!(sequence.sorted_search(&2), Ok(1));
    assert_eq!(sequence.sorted_search(&5), Err(3));
}

#[rstest]
fn test_sort_by_descending_then_search_with_same_comparator() {
    let mut sequence: LinkedSequence<i32> = [4, 8, 1, 6].into_iter().collect();
    let descending = |left: &i32, right: &i32| right.cmp(left);
    sequence.sort_by(descending);
    assert_eq!(sequence.to_string(), "[8, 6, 4, 1]");
    assert_eq!(sequence.sorted_search_by(&4, descending), Ok(2));
    assert_eq!(sequence.sorted_search_by(&5, descending), Err(2));
}

#[rstest]
fn test_remove_all_own_clears_and_reports_change() {
    let mut sequence: LinkedSequence<i32> = (0..3).collect();
    assert!(sequence.remove_all_own());
    assert!(sequence.is_empty());
    assert!(sequence.remove_all_own());
}

#[rstest]
fn test_bulk_operations_against_vec() {
    let mut sequence: LinkedSequence<i32> = (1..=6).collect();
    assert!(sequence.remove_all_hashed(&vec![1, 6]));
    assert!(sequence.retain_all_hashed(&vec![2, 3, 5, 7]));
    assert_eq!(sequence.to_string(), "[2, 3, 5]");
    assert!(!sequence.retain_all(&vec![2, 3, 5]));
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn test_borrowing_into_iterator() {
    let sequence: LinkedSequence<i32> = (1..=4).collect();
    let mut total = 0;
    for value in &sequence {
        total += value;
    }
    assert_eq!(total, 10);
    assert_eq!(sequence.iter().len(), 4);
}

#[rstest]
fn test_elements_matches_iter() {
    let sequence: LinkedSequence<i32> = (1..=5).collect();
    assert!(sequence.elements().eq(sequence.iter()));
    assert!(sequence.elements().rev().eq(sequence.iter().rev()));
}

#[rstest]
fn test_owning_iterator_from_back() {
    let sequence: LinkedSequence<i32> = (1..=3).collect();
    let reversed: Vec<i32> = sequence.into_iter().rev().collect();
    assert_eq!(reversed, vec![3, 2, 1]);
}

#[rstest]
fn test_hashed_removal_against_large_linked_others() {
    let others: LinkedSequence<i32> = (0..20_000).collect();
    let mut values = vec![-1, 5, 19_999, 20_000];
    assert!(values.remove_all_hashed(&others));
    assert_eq!(values, vec![-1, 20_000]);
    assert!(values.retain_all_hashed(&others));
    assert!(values.is_empty());
}
