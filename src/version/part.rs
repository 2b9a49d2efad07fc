//! A single dot-separated segment of a version string
//!
//! Segments decompose into a 4-field shape: a leading number, a run of
//! letters, a second number, and whatever is left. `"5b3x"` becomes
//! `(5, "b", 3, "x")`; `"*"` becomes the unbounded segment that outranks
//! everything. Parsing is lenient by contract: any input yields a segment,
//! and unparseable input ranks lowest rather than failing.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

// Leading number of a segment: optional spaces, optional minus, digits.
static LEADING_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(-?\d+)").unwrap());

// Remainder of a segment: letters, an optional signed number, then the tail.
static SEGMENT_REST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^-+\d]*)([-+]?\d+)?(.*)$").unwrap());

/// The numeric lead of a segment: a plain integer, or unbounded for `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SegmentNumber {
    Finite(i64),
    Infinity,
}

impl Default for SegmentNumber {
    fn default() -> Self {
        SegmentNumber::Finite(0)
    }
}

/// One parsed version segment, e.g. the `"0a1"` in `"3.5.0a1"`.
///
/// Ordering: the unbounded segment outranks every other segment; otherwise
/// fields compare in order `a`, `b`, `c`, `d`. For `b`, `c` and `d` a missing
/// (empty or zero) field outranks a present one, so `"1.0"` is a later
/// release than `"1.0b1"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Part {
    a: SegmentNumber,
    b: String,
    c: i64,
    d: String,
}

impl Part {
    /// Parse one segment. Never fails: input without a leading number yields
    /// the all-default segment, which ranks the same as an empty segment.
    pub fn parse(segment: &str) -> Part {
        if segment == "*" {
            return Part {
                a: SegmentNumber::Infinity,
                ..Part::default()
            };
        }

        let Some(caps) = LEADING_NUMBER_RE.captures(segment) else {
            trace!("segment {segment:?} has no leading number, ranking it lowest");
            return Part::default();
        };
        let a = parse_number(&caps[1]);
        let matched_len = caps.get(0).map_or(0, |m| m.end());
        let rest = &segment[matched_len..];

        // Legacy quirk: "1+" is shorthand for "2pre".
        if rest.starts_with('+') {
            return Part {
                a: SegmentNumber::Finite(a.saturating_add(1)),
                b: "pre".to_string(),
                ..Part::default()
            };
        }

        let (b, c, d) = match SEGMENT_REST_RE.captures(rest) {
            Some(caps) => (
                caps.get(1).map_or("", |m| m.as_str()).to_string(),
                caps.get(2).map_or(0, |m| parse_number(m.as_str())),
                caps.get(3).map_or("", |m| m.as_str()).to_string(),
            ),
            None => Default::default(),
        };

        Part {
            a: SegmentNumber::Finite(a),
            b,
            c,
            d,
        }
    }

    /// Whether this is the unbounded `*` segment.
    pub fn is_wildcard(&self) -> bool {
        self.a == SegmentNumber::Infinity
    }
}

impl Ord for Part {
    fn cmp(&self, other: &Self) -> Ordering {
        // Infinity outranks every finite lead, and a differing finite lead
        // decides the whole comparison. A wildcard segment carries default
        // b/c/d, so the chain below is a no-op for it either way.
        self.a
            .cmp(&other.a)
            .then_with(|| cmp_optional_str(&self.b, &other.b))
            .then_with(|| cmp_optional_num(self.c, other.c))
            .then_with(|| cmp_optional_str(&self.d, &other.d))
    }
}

impl PartialOrd for Part {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Saturating parse of a digit run the regex already validated.
fn parse_number(digits: &str) -> i64 {
    digits.parse().unwrap_or_else(|_| {
        if digits.trim_start().starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

// A missing field outranks a present one: an empty letter run marks the
// plain release, a non-empty one ("a", "b", "pre") marks something earlier.
fn cmp_optional_str(ours: &str, theirs: &str) -> Ordering {
    match (ours.is_empty(), theirs.is_empty()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => ours.cmp(theirs),
    }
}

fn cmp_optional_num(ours: i64, theirs: i64) -> Ordering {
    match (ours == 0, theirs == 0) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => ours.cmp(&theirs),
    }
}
