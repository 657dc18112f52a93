//! Total ordering over parsed versions

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::version::Version;

impl Version {
    /// Compare this version to another.
    ///
    /// Build metadata never takes part in the comparison, so
    /// `1.0.0+build.1` and `1.0.0+build.2` are equal. Numeric segments
    /// compare positionally with trailing zero segments counting as absent
    /// (`1.0 == 1.0.0.0`). Once the segments are equivalent the prerelease
    /// identifiers decide. A release outranks any prerelease of the same
    /// segments.
    pub fn compare(&self, other: &Self) -> Ordering {
        // Field-for-field equality skips the walk entirely
        if self.segments() == other.segments()
            && self.prerelease() == other.prerelease()
            && self.metadata() == other.metadata()
        {
            return Ordering::Equal;
        }

        if self.segments() != other.segments() {
            if let Some(ordering) = compare_segments(self.segments(), other.segments()) {
                return ordering;
            }
        }

        // Numerically equivalent, so the prerelease side decides
        match (self.prerelease().is_empty(), other.prerelease().is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => compare_prereleases(self.prerelease(), other.prerelease()),
        }
    }
}

/// Walk two segment slices positionally. `None` means the slices are
/// numerically equivalent (any length difference is an all zero tail) and
/// the decision falls through to the prerelease identifiers.
fn compare_segments(own: &[i32], other: &[i32]) -> Option<Ordering> {
    // The slices can be jagged when the inputs spelled out a different
    // number of segments
    let highest = own.len().max(other.len());
    for i in 0..highest {
        if i >= own.len() {
            if !all_zero(&other[i..]) {
                return Some(Ordering::Less);
            }
            break;
        }
        if i >= other.len() {
            if !all_zero(&own[i..]) {
                return Some(Ordering::Greater);
            }
            break;
        }
        match own[i].cmp(&other[i]) {
            Ordering::Equal => continue,
            decided => return Some(decided),
        }
    }

    None
}

fn all_zero(segments: &[i32]) -> bool {
    segments.iter().all(|segment| *segment == 0)
}

fn compare_prereleases(own: &str, other: &str) -> Ordering {
    if own == other {
        return Ordering::Equal;
    }

    let own_parts: Vec<&str> = own.split('.').collect();
    let other_parts: Vec<&str> = other.split('.').collect();

    let longest = own_parts.len().max(other_parts.len());
    for i in 0..longest {
        let own_part = own_parts.get(i).copied().unwrap_or("");
        let other_part = other_parts.get(i).copied().unwrap_or("");

        match compare_identifiers(own_part, other_part) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }

    Ordering::Equal
}

/// Identifiers compare as plain strings, so `"10"` sorts before `"9"`. A
/// missing identifier loses to a numeric one and beats a non numeric one.
fn compare_identifiers(own: &str, other: &str) -> Ordering {
    if own == other {
        return Ordering::Equal;
    }

    if own.is_empty() {
        return if other.parse::<i64>().is_ok() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    if other.is_empty() {
        return if own.parse::<i64>().is_ok() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    own.cmp(other)
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Keeps `Hash` consistent with `Eq`: trailing zero segments and
        // metadata do not take part in either
        let end = self
            .segments()
            .iter()
            .rposition(|segment| *segment != 0)
            .map_or(0, |last| last + 1);
        self.segments()[..end].hash(state);
        self.prerelease().hash(state);
    }
}
