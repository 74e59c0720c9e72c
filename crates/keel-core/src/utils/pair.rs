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

//! # Pairs
//!
//! `Pair<T1, T2>` is a two-slot value type with independently typed, public
//! `first` and `second` fields. Associative containers use it for their
//! entries, and insertion routines use it to report a position together with
//! a flag.
//!
//! Pairs compare structurally: equality requires both slots to be equal,
//! and ordering is lexicographic, comparing `second` only when the `first`
//! slots are equal. This is a strict weak ordering, so pairs are safe keys
//! for sorted containers.
//!
//! ```rust
//! use keel_core::utils::pair::{make_pair, Pair};
//!
//! let entry = make_pair(1, "x");
//! let owned: Pair<i64, String> = entry.convert();
//! assert_eq!(owned, Pair::new(1, String::from("x")));
//!
//! assert!(make_pair(1, 9) < make_pair(2, 0));
//! assert!(make_pair(1, 1) < make_pair(1, 2));
//! ```

use crate::types::{constant::FalseType, integral::IsIntegral};

/// Two values of independent types.
///
/// The default pair holds the default value of each slot.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Pair<T1, T2> {
    /// The first slot.
    pub first: T1,
    /// The second slot.
    pub second: T2,
}

impl<T1, T2> Pair<T1, T2> {
    /// Creates a pair from its two slots.
    #[inline(always)]
    pub const fn new(first: T1, second: T2) -> Self {
        Self { first, second }
    }

    /// Converts each slot into the corresponding slot type of another pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::utils::pair::Pair;
    /// let narrow = Pair::new(7u8, 'c');
    /// let wide: Pair<u32, u32> = narrow.convert();
    /// assert_eq!(wide, Pair::new(7, 99));
    /// ```
    #[inline]
    pub fn convert<U, V>(self) -> Pair<U, V>
    where
        T1: Into<U>,
        T2: Into<V>,
    {
        Pair::new(self.first.into(), self.second.into())
    }

    /// Copies both slots from `other` and returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::utils::pair::Pair;
    /// let mut a = Pair::new(0, String::new());
    /// let b = Pair::new(1, String::from("one"));
    /// a.assign(&b).first += 1;
    /// assert_eq!(a, Pair::new(2, String::from("one")));
    /// ```
    #[inline]
    pub fn assign(&mut self, other: &Self) -> &mut Self
    where
        T1: Clone,
        T2: Clone,
    {
        self.first.clone_from(&other.first);
        self.second.clone_from(&other.second);
        self
    }

    /// Returns a pair of references to both slots.
    #[inline(always)]
    pub const fn as_ref(&self) -> Pair<&T1, &T2> {
        Pair::new(&self.first, &self.second)
    }

    /// Returns the pair with its slots exchanged.
    #[inline]
    pub fn swap(self) -> Pair<T2, T1> {
        Pair::new(self.second, self.first)
    }

    /// Returns the slots as a tuple.
    #[inline]
    pub fn into_tuple(self) -> (T1, T2) {
        (self.first, self.second)
    }
}

/// Creates a pair, deducing both slot types from the arguments.
///
/// # Examples
///
/// ```rust
/// # use keel_core::utils::pair::{make_pair, Pair};
/// let p: Pair<&str, f64> = make_pair("half", 0.5);
/// assert_eq!(p.first, "half");
/// ```
#[inline(always)]
pub const fn make_pair<T1, T2>(first: T1, second: T2) -> Pair<T1, T2> {
    Pair::new(first, second)
}

impl<T1, T2> From<(T1, T2)> for Pair<T1, T2> {
    #[inline]
    fn from((first, second): (T1, T2)) -> Self {
        Self::new(first, second)
    }
}

impl<T1, T2> From<Pair<T1, T2>> for (T1, T2) {
    #[inline]
    fn from(pair: Pair<T1, T2>) -> Self {
        pair.into_tuple()
    }
}

impl<T1, T2> IsIntegral for Pair<T1, T2> {
    type Output = FalseType;
}

impl<T1, T2> std::fmt::Display for Pair<T1, T2>
where
    T1: std::fmt::Display,
    T2: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::integral::is_integral;
    use std::collections::BTreeSet;

    #[test]
    fn test_default_pair_holds_default_slots() {
        let pair: Pair<i32, String> = Pair::default();
        assert_eq!(pair.first, 0);
        assert_eq!(pair.second, "");
    }

    #[test]
    fn test_converting_copy_preserves_values() {
        let source = make_pair(1, "x");
        let converted: Pair<i32, String> = source.convert();
        assert_eq!(converted.first, 1);
        assert_eq!(converted.second, "x");
        // The source is untouched and still usable.
        assert_eq!(source, Pair::new(1, "x"));
    }

    #[test]
    fn test_equality_requires_both_slots() {
        assert_eq!(make_pair(1, 'a'), make_pair(1, 'a'));
        assert_ne!(make_pair(1, 'a'), make_pair(1, 'b'));
        assert_ne!(make_pair(1, 'a'), make_pair(2, 'a'));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        // `first` decides whenever it differs, regardless of `second`.
        assert!(make_pair(1, 5) < make_pair(2, 0));
        assert!(!(make_pair(2, 0) < make_pair(1, 5)));
        assert!(make_pair(1, 0) < make_pair(1, 1));

        assert!(make_pair(1, 1) <= make_pair(1, 1));
        assert!(make_pair(2, 0) > make_pair(1, 9));
        assert!(make_pair(2, 0) >= make_pair(2, 0));
    }

    #[test]
    fn test_ordering_is_transitive_for_sorted_containers() {
        let set: BTreeSet<Pair<i32, i32>> = [(2, 1), (1, 3), (1, 2), (3, 0)]
            .into_iter()
            .map(Pair::from)
            .collect();
        let order: Vec<(i32, i32)> = set.into_iter().map(Into::into).collect();
        assert_eq!(order, vec![(1, 2), (1, 3), (2, 1), (3, 0)]);
    }

    #[test]
    fn test_assign_copies_both_slots() {
        let mut target = make_pair(String::from("old"), vec![1]);
        let source = make_pair(String::from("new"), vec![2, 3]);
        target.assign(&source).second.push(4);
        assert_eq!(target.first, "new");
        assert_eq!(target.second, vec![2, 3, 4]);
        assert_eq!(source.second, vec![2, 3]);
    }

    #[test]
    fn test_tuple_conversions_swap_and_display() {
        let pair = Pair::from(("k", 1));
        assert_eq!(pair.swap(), make_pair(1, "k"));
        assert_eq!(pair.as_ref(), make_pair(&"k", &1));
        assert_eq!(<(&str, i32)>::from(pair), ("k", 1));
        assert_eq!(format!("{}", pair), "(k, 1)");
    }

    #[test]
    fn test_pair_is_not_integral() {
        assert!(!is_integral::<Pair<i32, i32>>());
    }
}
