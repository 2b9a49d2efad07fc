//! Whole version strings as ordered segment sequences
//!
//! A [`VersionString`] is the raw string split on `.`, each piece parsed
//! into a [`Part`]. Comparison is strictly positional over the longer of the
//! two sequences, with a default segment standing in for missing positions.
//!
//! Equality and ordering intentionally disagree on one point: equality
//! carries a trailing `*` segment forward over missing positions
//! (`"1.*" == "1.*.*"`), while the greater-than walk substitutes fresh
//! default segments instead. Stored compatibility ranges depend on this
//! historical behavior, so both code paths are kept separate and must not
//! be unified.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::version::part::Part;

/// A comparable add-on version string such as `"1.2.3a1"` or `"5.*"`.
///
/// Construction never fails; malformed segments rank lowest. The raw string
/// is kept verbatim: no trimming or normalization happens before splitting.
#[derive(Debug, Clone)]
pub struct VersionString {
    raw: String,
    parts: Vec<Part>,
}

impl VersionString {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parts = raw.split('.').map(Part::parse).collect();
        Self { raw, parts }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Three-way comparison: equality first (with the wildcard carry), then
    /// the positional greater-than walk to break the tie.
    ///
    /// The two walks leave a few pairs incomparable under the historical
    /// semantics, e.g. `""` against `"0"`: unequal by the raw-emptiness
    /// short-circuit, yet neither side greater positionally. Such pairs
    /// resolve to `Less` in both directions, a deterministic if
    /// non-antisymmetric answer.
    pub fn compare(&self, other: &VersionString) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.gt_parts(other) {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }

    fn eq_parts(&self, other: &VersionString) -> bool {
        let empty = Part::default();
        let mut ours: &Part = &empty;
        let mut theirs: &Part = &empty;
        for index in 0..self.parts.len().max(other.parts.len()) {
            ours = match self.parts.get(index) {
                Some(part) => part,
                // a trailing wildcard covers every later position
                None if ours.is_wildcard() => ours,
                None => &empty,
            };
            theirs = match other.parts.get(index) {
                Some(part) => part,
                None if theirs.is_wildcard() => theirs,
                None => &empty,
            };
            if ours != theirs {
                return false;
            }
        }
        true
    }

    // No wildcard carry here; see the module docs.
    fn gt_parts(&self, other: &VersionString) -> bool {
        let empty = Part::default();
        for index in 0..self.parts.len().max(other.parts.len()) {
            let ours = self.parts.get(index).unwrap_or(&empty);
            let theirs = other.parts.get(index).unwrap_or(&empty);
            if ours != theirs {
                return ours > theirs;
            }
        }
        false
    }
}

/// Three-way comparison of two raw version strings, for sorting and for
/// "is this upload newer than the current version" checks.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    VersionString::new(a).compare(&VersionString::new(b))
}

impl PartialEq for VersionString {
    fn eq(&self, other: &Self) -> bool {
        // One has content, the other has none.
        if self.raw.is_empty() != other.raw.is_empty() {
            return false;
        }
        self.eq_parts(other)
    }
}

impl PartialEq<&str> for VersionString {
    fn eq(&self, other: &&str) -> bool {
        *self == VersionString::new(*other)
    }
}

impl PartialOrd for VersionString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }

    // The comparison operators mirror the historical semantics directly:
    // `>` and `<` are the plain positional walk, `>=`/`<=` combine it with
    // the carrying equality. On trailing-wildcard input this makes `==` and
    // `>` answer from different walks, which is load-bearing for existing
    // stored ranges.
    fn gt(&self, other: &Self) -> bool {
        self.gt_parts(other)
    }

    fn lt(&self, other: &Self) -> bool {
        other.gt_parts(self)
    }

    fn ge(&self, other: &Self) -> bool {
        self.gt_parts(other) || self == other
    }

    fn le(&self, other: &Self) -> bool {
        other.gt_parts(self) || self == other
    }
}

impl From<&str> for VersionString {
    fn from(raw: &str) -> Self {
        VersionString::new(raw)
    }
}

impl From<String> for VersionString {
    fn from(raw: String) -> Self {
        VersionString::new(raw)
    }
}

impl FromStr for VersionString {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(VersionString::new(raw))
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", "1.2.3")]
    #[case("", "")]
    #[case("1.0", "1.0.0")] // a missing segment equals an explicit zero
    #[case("1.2.3", "1.2.3.0")]
    #[case("1.0", "1.00")]
    #[case("1.0+", "1.1pre")]
    #[case("1.*", "1.*.*")] // trailing wildcard carries over missing positions
    #[case("*", "*.*.*")]
    fn equality_holds_both_ways(#[case] a: &str, #[case] b: &str) {
        assert_eq!(VersionString::new(a), VersionString::new(b));
        assert_eq!(VersionString::new(b), VersionString::new(a));
    }

    #[rstest]
    #[case("1.0", "1.0.1")]
    #[case("", "1.0")] // only one side is empty
    #[case("1.0", "")]
    #[case("1.*", "1.5")] // a wildcard segment never equals a number
    #[case("1.*", "1.*.0")] // the carried wildcard never equals a number either
    #[case("1.0", "1.0b1")]
    fn inequality_holds_both_ways(#[case] a: &str, #[case] b: &str) {
        assert_ne!(VersionString::new(a), VersionString::new(b));
        assert_ne!(VersionString::new(b), VersionString::new(a));
    }

    #[rstest]
    #[case("1.10.0", "1.2.3")] // numeric, not lexicographic
    #[case("2.0", "2.0a1")]
    #[case("2.0a2", "2.0a1")]
    #[case("1.0", "1.0b1")]
    #[case("1.0b1", "1.0a9")]
    #[case("1.0.1", "1.0")]
    #[case("2.*", "2.99.99")] // wildcard supremacy
    #[case("*", "99999.99")]
    #[case("1.1pre", "1.0")]
    #[case("1.0", "1.0pre1")]
    fn ordering_ranks_greater_side_first(#[case] greater: &str, #[case] lesser: &str) {
        assert!(VersionString::new(greater) > VersionString::new(lesser));
        assert!(VersionString::new(lesser) < VersionString::new(greater));
        assert_eq!(compare_versions(greater, lesser), Ordering::Greater);
        assert_eq!(compare_versions(lesser, greater), Ordering::Less);
    }

    #[test]
    fn compare_reports_equal_for_equivalent_strings() {
        assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Equal);
    }

    #[test]
    fn derived_operators_combine_walks() {
        let a = VersionString::new("1.0");
        let b = VersionString::new("1.0.0");
        assert!(a >= b);
        assert!(a <= b);
        assert!(!(a > b));
        assert!(!(a < b));
    }

    /// Historical quirk, kept on purpose: equality carries a trailing
    /// wildcard forward but the greater-than walk does not, so `"1.*.*"`
    /// is simultaneously equal to and greater than `"1.*"`.
    #[test]
    fn trailing_wildcard_equality_and_ordering_disagree() {
        let short = VersionString::new("1.*");
        let long = VersionString::new("1.*.*");
        assert_eq!(short, long);
        assert!(long > short);
        assert!(short < long);
        // compare() checks equality first, so it reports Equal both ways
        assert_eq!(compare_versions("1.*", "1.*.*"), Ordering::Equal);
        assert_eq!(compare_versions("1.*.*", "1.*"), Ordering::Equal);
    }

    /// Companion quirk: pairs that are unequal yet positionally tied, like
    /// `""` against `"0"`, resolve to `Less` from either side. Deterministic,
    /// kept as documented behavior.
    #[test]
    fn incomparable_pairs_resolve_to_less_both_ways() {
        assert_ne!(VersionString::new(""), VersionString::new("0"));
        assert!(!(VersionString::new("") > VersionString::new("0")));
        assert!(!(VersionString::new("0") > VersionString::new("")));
        assert_eq!(compare_versions("", "0"), Ordering::Less);
        assert_eq!(compare_versions("0", ""), Ordering::Less);
    }

    #[test]
    fn comparison_against_raw_strings() {
        assert_eq!(VersionString::new("1.2.3"), "1.2.3");
        assert_ne!(VersionString::new("1.2.3"), "1.2.4");
    }

    #[rstest]
    #[case("")]
    #[case("not-a-version")]
    #[case("....")]
    #[case("\u{2322} ugh")]
    fn garbage_input_is_deterministic_and_low(#[case] garbage: &str) {
        let parsed = VersionString::new(garbage);
        assert_eq!(parsed, VersionString::new(garbage));
        // ranks at or below a plain release
        assert!(!(parsed > VersionString::new("0.1")));
    }

    #[test]
    fn display_round_trips_the_raw_string() {
        assert_eq!(VersionString::new("1.2.3b1").to_string(), "1.2.3b1");
    }

    #[test]
    fn from_str_never_fails() {
        let parsed: VersionString = "3.5.0a1pre2".parse().unwrap();
        assert_eq!(parsed, VersionString::new("3.5.0a1pre2"));
    }
}
