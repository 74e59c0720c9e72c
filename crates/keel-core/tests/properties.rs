// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Property-based tests for the cursor layer.

use keel_core::algorithm::{distance, lexicographical_compare};
use keel_core::iter::range::CursorRange;
use keel_core::iter::reverse::ReverseCursor;
use keel_core::iter::slice::SliceCursor;
use keel_core::iter::traits::{Cursor, RandomAccessCursor, Readable};
use keel_core::utils::pair::{Pair, make_pair};
use proptest::prelude::*;

/// A non-empty sequence with a valid reverse position and an offset that
/// stays inside it.
fn sequence_with_position_and_offset() -> impl Strategy<Value = (Vec<i32>, usize, isize)> {
    prop::collection::vec(any::<i32>(), 1..64).prop_flat_map(|data| {
        let len = data.len();
        (Just(data), 1..=len).prop_flat_map(|(data, position)| {
            (Just(data), Just(position), 0..position as isize)
        })
    })
}

proptest! {
    #[test]
    fn reverse_walk_yields_elements_in_reverse(data in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut rev = ReverseCursor::new(SliceCursor::end(&data));
        let rend = ReverseCursor::new(SliceCursor::begin(&data));

        let mut seen = Vec::with_capacity(data.len());
        for _ in 0..data.len() {
            seen.push(*rev.read());
            rev.increment();
        }

        let expected: Vec<i64> = data.iter().rev().copied().collect();
        prop_assert_eq!(seen, expected);
        prop_assert_eq!(rev, rend);
    }

    #[test]
    fn distance_equals_length(data in prop::collection::vec(any::<u8>(), 0..128)) {
        let begin = SliceCursor::begin(&data);
        let end = SliceCursor::end(&data);
        prop_assert_eq!(distance(begin, end), data.len() as isize);
        prop_assert_eq!(distance(begin, begin), 0);
        prop_assert_eq!(distance(end, end), 0);
        prop_assert_eq!(CursorRange::new(begin, end).len(), data.len());
    }

    #[test]
    fn reverse_offset_identities((data, position, n) in sequence_with_position_and_offset()) {
        let rev = ReverseCursor::new(SliceCursor::new(&data, position));

        prop_assert_eq!(*(rev + n).read(), *rev.at(n));
        prop_assert_eq!(rev + n - n, rev);
        prop_assert_eq!(n + rev, rev + n);
        prop_assert_eq!(&(rev + n) - &rev, n);
        prop_assert_eq!(rev.distance_to(&(rev + n)), n);
    }

    #[test]
    fn reverse_ordering_inverts_base_ordering(len in 2usize..64, a in 0usize..64, b in 0usize..64) {
        let data = vec![0u8; len];
        let (a, b) = (a % (len + 1), b % (len + 1));
        let (ca, cb) = (SliceCursor::new(&data, a), SliceCursor::new(&data, b));
        let (ra, rb) = (ReverseCursor::new(ca), ReverseCursor::new(cb));

        prop_assert_eq!(ca < cb, rb < ra);
        prop_assert_eq!(ca <= cb, rb <= ra);
        prop_assert_eq!(ca == cb, ra == rb);
        prop_assert_eq!(ra.partial_cmp(&rb), cb.partial_cmp(&ca));
    }

    #[test]
    fn lexicographical_compare_agrees_with_slice_ordering(
        left in prop::collection::vec(0u8..4, 0..8),
        right in prop::collection::vec(0u8..4, 0..8),
    ) {
        let ours = lexicographical_compare(
            SliceCursor::begin(&left),
            SliceCursor::end(&left),
            SliceCursor::begin(&right),
            SliceCursor::end(&right),
        );
        prop_assert_eq!(ours, left < right);
    }

    #[test]
    fn pair_ordering_agrees_with_tuple_ordering(
        a in (0i32..4, 0i32..4),
        b in (0i32..4, 0i32..4),
    ) {
        prop_assert_eq!(Pair::from(a) < Pair::from(b), a < b);
        prop_assert_eq!(Pair::from(a).cmp(&Pair::from(b)), a.cmp(&b));
    }

    #[test]
    fn pair_conversion_preserves_values(first in any::<i32>(), second in "[a-z]{0,8}") {
        let converted: Pair<i64, String> = make_pair(first, second.as_str()).convert();
        prop_assert_eq!(converted.first, i64::from(first));
        prop_assert_eq!(converted.second, second);
    }
}
