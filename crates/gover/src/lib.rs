//! Version parsing and comparison library compatible with HashiCorp go-version
//!
//! This crate parses version strings of the shape accepted by HashiCorp's
//! go-version library and orders them the same way: an optional `v` prefix,
//! one or more numeric segments zero padded to at least `MAJOR.MINOR.PATCH`,
//! an optional prerelease (the leading `-` may be omitted) and optional
//! `+metadata` that never takes part in ordering.
//!
//! Prerelease identifiers are compared as plain strings, not numerically,
//! so `1.0.0-9` sorts above `1.0.0-10`. This deviates from strict SemVer
//! but matches the compatibility target. A corollary of its tie-breaks for
//! missing identifiers: prereleases mixing numeric and non numeric
//! identifiers at the same position under differing identifier counts can
//! form a comparison cycle (`1.0-x < 1.0-x.10 < 1.0-x.a < 1.0-x`), so
//! [`Ord`] and sorting are only well behaved away from that shape.
//!
//! ```
//! use gover::Version;
//!
//! let release = Version::parse("1.7.0").unwrap();
//! let beta = Version::parse("1.7.0-beta.1").unwrap();
//! assert!(beta < release);
//!
//! let padded = Version::parse("v1.7").unwrap();
//! assert_eq!(padded, release);
//! assert_eq!(padded.to_string(), "1.7.0");
//! ```

mod comparator;
mod version;

pub use version::{Version, VersionError, VERSION_PATTERN};
