//! Runs the `Sequence` conformance suite against every bundled container.

use seqlist::container::LinkedSequence;
use std::collections::VecDeque;

seqlist::sequence_conformance!(vec, Vec<i32>);
seqlist::sequence_conformance!(vec_deque, VecDeque<i32>);
seqlist::sequence_conformance!(linked, LinkedSequence<i32>);
