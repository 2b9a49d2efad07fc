//! Comparison and integer encoding for add-on version strings.
//!
//! The version grammar here is deliberately not SemVer: it is the permissive
//! extension-platform scheme (up to four dotted numeric components, `a`/`b`/
//! `pre` markers, `*` wildcards, legacy `+` handling) that existing stored
//! version strings and compatibility ranges depend on, preserved bit for
//! bit. See [`version`] for the two entry points:
//! [`version::compare_versions`] and [`version::version_int`].

pub mod version;
