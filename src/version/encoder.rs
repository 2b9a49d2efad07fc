//! Fixed-width integer encoding of application release versions
//!
//! Application versions follow the narrow legacy grammar
//! `major.minor1.minor2.minor3[(a|b)alpha_ver][pre pre_ver]`, where every
//! numeric group may also be `*`. [`version_int`] packs the parsed fields
//! into one sortable integer so compatibility bounds can live in an indexed
//! column and range checks become plain integer comparisons.
//!
//! # Packing layout
//!
//! The fields concatenate as decimal digits, most significant first:
//!
//! ```text
//! major | minor1 | minor2 | minor3 | stage | alpha_ver | final | pre_ver
//!  var      2        2        2       1         2          1        2
//! ```
//!
//! `stage` is 0/1/2 for alpha/beta/final and `final` is 0 when a `pre`
//! suffix is present, so finals sort above betas above alphas, and every
//! pre-release sorts below its plain release. `"3.5.0a1pre2"` packs to
//! `3_05_00_00_0_01_0_02`, i.e. `3050000001002`.
//!
//! A `*` group resolves to its field's cap, and groups *absent* after a
//! wildcard inherit the cap instead of 0, so `"5.*"` encodes like
//! `"5.99.99.99"`. Input that does not match the grammar at all encodes to
//! the all-absent minimum, by contract rather than as an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use tracing::debug;

/// Largest value [`version_int`] may return (positive BIGINT bound).
pub const VERSION_INT_MAX: i64 = i64::MAX;

/// Cap for the major field.
pub const APP_MAJOR_VERSION_PART_MAX: u32 = 65_535;

/// Cap for every numeric field after major.
pub const APP_MINOR_VERSION_PART_MAX: u32 = 99;

static APP_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)^
        (?P<major>\d+|\*)          # major (x in x.y)
        \.?(?P<minor1>\d+|\*)?     # minor1 (y in x.y)
        \.?(?P<minor2>\d+|\*)?     # minor2 (z in x.y.z)
        \.?(?P<minor3>\d+|\*)?     # minor3 (w in x.y.z.w)
        (?P<alpha>[ab])?           # alpha/beta marker
        (?P<alpha_ver>\d+|\*)?     # alpha/beta version
        (?P<pre>pre)?              # pre-release marker
        (?P<pre_ver>\d+|\*)?       # pre-release version
        ",
    )
    .unwrap()
});

/// One numeric group of the grammar.
///
/// Absent and zero stay distinct: wildcard inheritance only applies to
/// groups that were never written, never to an explicit `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberField {
    #[default]
    Absent,
    Wildcard,
    Value(u32),
}

impl NumberField {
    fn from_capture(text: Option<&str>) -> Self {
        match text {
            None => NumberField::Absent,
            Some("*") => NumberField::Wildcard,
            // oversized digit runs saturate; the cap bounds them below anyway
            Some(digits) => NumberField::Value(digits.parse().unwrap_or(u32::MAX)),
        }
    }

    /// Resolve to a concrete number, updating the wildcard tracker for the
    /// groups that follow in the same inheritance scope.
    fn resolve(self, cap: u32, wildcard: &mut bool) -> i64 {
        let value = match self {
            NumberField::Wildcard => {
                *wildcard = true;
                cap
            }
            NumberField::Value(value) => {
                *wildcard = false;
                value.min(cap)
            }
            NumberField::Absent => {
                if *wildcard {
                    cap
                } else {
                    0
                }
            }
        };
        i64::from(value)
    }
}

impl Serialize for NumberField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NumberField::Absent => serializer.serialize_none(),
            NumberField::Wildcard => serializer.serialize_str("*"),
            NumberField::Value(value) => serializer.serialize_u32(*value),
        }
    }
}

/// Release stage from the alpha/beta marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseStage {
    Alpha,
    Beta,
    #[default]
    Final,
}

impl ReleaseStage {
    fn rank(self) -> i64 {
        match self {
            ReleaseStage::Alpha => 0,
            ReleaseStage::Beta => 1,
            ReleaseStage::Final => 2,
        }
    }
}

/// The tokenized fields of an application version string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VersionDict {
    pub major: NumberField,
    pub minor1: NumberField,
    pub minor2: NumberField,
    pub minor3: NumberField,
    pub stage: ReleaseStage,
    pub alpha_ver: NumberField,
    pub pre: bool,
    pub pre_ver: NumberField,
}

/// Tokenize an application version string.
///
/// Input that does not match the grammar yields the all-absent dict, which
/// is a valid, low-sorting value rather than an error.
pub fn version_dict(version: &str) -> VersionDict {
    let Some(caps) = APP_VERSION_RE.captures(version) else {
        debug!("version {version:?} does not match the application version grammar");
        return VersionDict::default();
    };
    let group = |name: &str| caps.name(name).map(|m| m.as_str());

    VersionDict {
        major: NumberField::from_capture(group("major")),
        minor1: NumberField::from_capture(group("minor1")),
        minor2: NumberField::from_capture(group("minor2")),
        minor3: NumberField::from_capture(group("minor3")),
        stage: match group("alpha") {
            Some("a") => ReleaseStage::Alpha,
            Some("b") => ReleaseStage::Beta,
            _ => ReleaseStage::Final,
        },
        alpha_ver: NumberField::from_capture(group("alpha_ver")),
        pre: group("pre").is_some(),
        pre_ver: NumberField::from_capture(group("pre_ver")),
    }
}

/// Pack an application version string into one sortable integer.
///
/// Total by contract: unparseable input packs to the all-absent minimum
/// (`200100`), out-of-range groups clamp to their cap, and the result is
/// bounded by [`VERSION_INT_MAX`].
pub fn version_int(version: &str) -> i64 {
    pack(&version_dict(version))
}

fn pack(fields: &VersionDict) -> i64 {
    let mut wildcard = false;
    let major = fields.major.resolve(APP_MAJOR_VERSION_PART_MAX, &mut wildcard);
    let minor1 = fields.minor1.resolve(APP_MINOR_VERSION_PART_MAX, &mut wildcard);
    let minor2 = fields.minor2.resolve(APP_MINOR_VERSION_PART_MAX, &mut wildcard);
    let minor3 = fields.minor3.resolve(APP_MINOR_VERSION_PART_MAX, &mut wildcard);

    // alpha_ver and pre_ver are each their own inheritance scope
    wildcard = false;
    let alpha_ver = fields.alpha_ver.resolve(APP_MINOR_VERSION_PART_MAX, &mut wildcard);
    wildcard = false;
    let pre_ver = fields.pre_ver.resolve(APP_MINOR_VERSION_PART_MAX, &mut wildcard);

    // 0 when a pre suffix is present, so finals sort above pre-releases
    let final_release = if fields.pre { 0 } else { 1 };

    // decimal concatenation per the module docs; the widest possible value
    // (65535 99 99 99 2 99 1 99) still fits in an i64
    let packed = ((((((major * 100 + minor1) * 100 + minor2) * 100 + minor3) * 10
        + fields.stage.rank())
        * 100
        + alpha_ver)
        * 10
        + final_release)
        * 100
        + pre_ver;
    packed.min(VERSION_INT_MAX)
}

/// Decode a packed integer back into its fields, peeling groups off the low
/// end in the reverse of the packing order.
///
/// Decoding cannot distinguish an absent group from an explicit `0`, or a
/// wildcard from its cap, so every numeric field comes back as a concrete
/// value. Re-packing a decoded dict yields the original integer.
pub fn dict_from_int(packed: i64) -> VersionDict {
    // negative input cannot come from version_int; decode it as the minimum
    let mut rest = packed.max(0);

    let pre_ver = rest % 100;
    rest /= 100;
    let final_release = rest % 10;
    rest /= 10;
    let alpha_ver = rest % 100;
    rest /= 100;
    let stage = match rest % 10 {
        0 => ReleaseStage::Alpha,
        1 => ReleaseStage::Beta,
        _ => ReleaseStage::Final,
    };
    rest /= 10;
    let minor3 = rest % 100;
    rest /= 100;
    let minor2 = rest % 100;
    rest /= 100;
    let minor1 = rest % 100;
    rest /= 100;
    let major = rest;

    VersionDict {
        major: NumberField::Value(major as u32),
        minor1: NumberField::Value(minor1 as u32),
        minor2: NumberField::Value(minor2 as u32),
        minor3: NumberField::Value(minor3 as u32),
        stage,
        alpha_ver: NumberField::Value(alpha_ver as u32),
        pre: final_release == 0,
        pre_ver: NumberField::Value(pre_ver as u32),
    }
}
