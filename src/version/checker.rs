//! Update selection and compatibility-range checks
//!
//! Thin operations over the two comparison primitives: picking the newest
//! published version of a package, deciding whether an install should be
//! offered an update, and testing an add-on's declared min/max application
//! range against a running application version.

use std::cmp::Ordering;

use crate::version::encoder::version_int;
use crate::version::string::{VersionString, compare_versions};

/// Where an installed version stands relative to the newest published one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Installed version is the newest published version
    Current,
    /// A newer version has been published
    Outdated,
    /// Installed version is ahead of everything published
    Newer,
}

/// Classify an installed version against the published set.
pub fn update_status(installed: &str, published: &[String]) -> UpdateStatus {
    match latest_version(published) {
        Some(latest) => match compare_versions(installed, latest) {
            Ordering::Less => UpdateStatus::Outdated,
            Ordering::Equal => UpdateStatus::Current,
            Ordering::Greater => UpdateStatus::Newer,
        },
        // nothing published, nothing to be behind
        None => UpdateStatus::Current,
    }
}

/// The newest version in `published`, by add-on version ordering.
pub fn latest_version(published: &[String]) -> Option<&str> {
    published
        .iter()
        .map(String::as_str)
        .max_by(|a, b| compare_versions(a, b))
}

/// The newest published version that is a strict upgrade over `installed`,
/// or `None` when the install is already current.
pub fn find_update<'a>(installed: &str, published: &'a [String]) -> Option<&'a str> {
    let current = VersionString::new(installed);
    published
        .iter()
        .map(String::as_str)
        .filter(|candidate| VersionString::new(*candidate) > current)
        .max_by(|a, b| compare_versions(a, b))
}

/// Whether an add-on's declared `[min, max]` application range covers
/// `app_version`.
///
/// All three strings go through [`version_int`], matching how ranges are
/// stored and queried. Callers must not mix this with [`compare_versions`]
/// for the same logical comparison, since the two comparators can disagree
/// on wildcard and suffix edge cases.
pub fn supports_app_version(min: &str, max: &str, app_version: &str) -> bool {
    let app = version_int(app_version);
    version_int(min) <= app && app <= version_int(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn published(versions: &[&str]) -> Vec<String> {
        versions.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case("2.0", &["1.0", "1.5", "2.0"], UpdateStatus::Current)]
    #[case("1.5", &["1.0", "1.5", "2.0"], UpdateStatus::Outdated)]
    #[case("3.0a1", &["1.0", "1.5", "2.0"], UpdateStatus::Newer)]
    #[case("2.0", &["2.0.0"], UpdateStatus::Current)] // trailing zero is the same release
    #[case("1.0", &[], UpdateStatus::Current)]
    fn update_status_classifies_installs(
        #[case] installed: &str,
        #[case] versions: &[&str],
        #[case] expected: UpdateStatus,
    ) {
        assert_eq!(update_status(installed, &published(versions)), expected);
    }

    #[rstest]
    #[case(&["1.0", "1.0.1", "1.0b1", "2.0a1", "2.0"], Some("2.0"))]
    #[case(&["1.10.0", "1.2.3", "1.9.9"], Some("1.10.0"))] // numeric, not lexicographic
    #[case(&[], None)]
    fn latest_version_picks_the_newest(
        #[case] versions: &[&str],
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(latest_version(&published(versions)), expected);
    }

    #[rstest]
    #[case("1.0", &["1.0", "1.0.1", "2.0"], Some("2.0"))]
    #[case("2.0", &["1.0", "1.0.1", "2.0"], None)] // already current
    #[case("2.0b1", &["2.0b2", "2.0"], Some("2.0"))]
    #[case("5.0", &["1.0", "2.0"], None)] // ahead of everything published
    #[case("1.0", &[], None)]
    fn find_update_picks_the_newest_strict_upgrade(
        #[case] installed: &str,
        #[case] versions: &[&str],
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(find_update(installed, &published(versions)), expected);
    }

    #[rstest]
    #[case("42.0", "56.*", "55.0", true)]
    #[case("42.0", "56.*", "56.9", true)] // wildcard max covers the whole 56 line
    #[case("42.0", "56.*", "57.0", false)]
    #[case("42.0", "56.*", "41.0", false)]
    #[case("42.0", "*", "9999.0", true)] // open-ended range
    #[case("4.0b1", "4.0", "4.0", true)] // beta lower bound sits below the final
    #[case("42.0", "56.*", "not-a-version", false)] // garbage encodes below any real min
    fn supports_app_version_checks_encoded_bounds(
        #[case] min: &str,
        #[case] max: &str,
        #[case] app: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(supports_app_version(min, max, app), expected);
    }
}
