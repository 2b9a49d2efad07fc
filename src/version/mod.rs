//! Version comparison engine for add-on packages
//!
//! Two independent, pure comparators over raw version strings:
//!
//! ```text
//! ┌───────────────┐      ┌─────────────┐
//! │ VersionString │─────▶│    Part     │
//! │ (ordering)    │      │ (segments)  │
//! └───────────────┘      └─────────────┘
//! ┌───────────────┐
//! │   Encoder     │  version string ──▶ one sortable i64
//! │ (version_int) │
//! └───────────────┘
//! ```
//!
//! [`string::compare_versions`] orders arbitrary package version strings
//! (permissive grammar: four dotted components, alpha/beta/pre markers,
//! wildcards, legacy `+` quirks). [`encoder::version_int`] packs application
//! release versions into fixed-width integers for stored range queries. The
//! two deliberately stay separate: they can disagree on wildcard and suffix
//! edge cases, so a single logical comparison must use one or the other,
//! never both.
//!
//! # Modules
//!
//! - [`part`]: one dot-separated segment, parsed and comparable
//! - [`string`]: whole version strings as segment sequences
//! - [`encoder`]: the legacy fixed-width integer encoding
//! - [`checker`]: update selection and compatibility-range checks

pub mod checker;
pub mod encoder;
pub mod part;
pub mod string;

pub use checker::{UpdateStatus, find_update, latest_version, supports_app_version, update_status};
pub use encoder::{
    APP_MAJOR_VERSION_PART_MAX, APP_MINOR_VERSION_PART_MAX, NumberField, ReleaseStage,
    VERSION_INT_MAX, VersionDict, dict_from_int, version_dict, version_int,
};
pub use part::Part;
pub use string::{VersionString, compare_versions};
