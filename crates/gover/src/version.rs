//! Version parsing and string representation

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// The raw regular expression a version string has to match.
///
/// Accepted shape: an optional `v` prefix, one or more dot separated numeric
/// segments, an optional prerelease (the leading `-` may be omitted, so
/// `1.7rc2` parses with prerelease `rc2`) and an optional `+metadata` trailer.
pub const VERSION_PATTERN: &str = r"v?([0-9]+(\.[0-9]+)*?)(-?([0-9A-Za-z\-]+(\.[0-9A-Za-z\-]+)*))?(\+([0-9A-Za-z\-]+(\.[0-9A-Za-z\-]+)*))??";

lazy_static! {
    // Anchored so the pattern has to consume the whole input
    static ref VERSION_RE: Regex = Regex::new(&format!("^{}$", VERSION_PATTERN)).unwrap();
}

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Malformed version string \"{version}\"")]
    MalformedVersion { version: String },
    #[error("Invalid version segment \"{segment}\": {source}")]
    InvalidSegment {
        segment: String,
        source: ParseIntError,
    },
}

/// A parsed version: numeric segments plus optional prerelease and build
/// metadata. Versions are immutable once parsed and cheap to clone.
///
/// Ordering ignores metadata; prerelease versions sort below the release
/// with the same segments.
#[derive(Debug, Clone)]
pub struct Version {
    segments: Vec<i32>,
    specificity: usize,
    prerelease: String,
    metadata: String,
}

impl Version {
    /// Parse a version string.
    ///
    /// Segments are zero padded to at least `MAJOR.MINOR.PATCH`, so `"1.2"`
    /// parses to the same value as `"1.2.0"`.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let caps = VERSION_RE
            .captures(input)
            .ok_or_else(|| VersionError::MalformedVersion {
                version: input.to_string(),
            })?;

        // Group 1 is present on every match
        let numeric = caps.get(1).unwrap().as_str();
        let mut segments = Vec::with_capacity(3);
        for token in numeric.split('.') {
            let value = token
                .parse::<i32>()
                .map_err(|source| VersionError::InvalidSegment {
                    segment: token.to_string(),
                    source,
                })?;
            segments.push(value);
        }
        let specificity = segments.len();

        while segments.len() < 3 {
            segments.push(0);
        }

        Ok(Version {
            segments,
            specificity,
            prerelease: caps.get(4).map_or("", |m| m.as_str()).to_string(),
            metadata: caps.get(7).map_or("", |m| m.as_str()).to_string(),
        })
    }

    /// Parse a version string, panicking if it is not valid.
    pub fn must_parse(input: &str) -> Self {
        match Self::parse(input) {
            Ok(version) => version,
            Err(err) => panic!("{err}"),
        }
    }

    /// The numeric segments, zero padded to at least three entries.
    pub fn segments(&self) -> &[i32] {
        &self.segments
    }

    /// How many numeric segments the original input spelled out, before
    /// padding. `"1.2"` has specificity 2 even though it carries a third
    /// zero segment.
    pub fn specificity(&self) -> usize {
        self.specificity
    }

    /// The prerelease identifiers after `-`, or `""` for a release version.
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// The build metadata after `+`, or `""` if there is none.
    pub fn metadata(&self) -> &str {
        &self.metadata
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.metadata.is_empty() {
            write!(f, "+{}", self.metadata)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
