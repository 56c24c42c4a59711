// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Domain names in canonical DNS order

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ZoneError;

/// A fully qualified domain name, stored as a sequence of lowercase labels.
///
/// Labels are kept in wire order: `labels[0]` is the leftmost label, the last
/// label is the TLD. The root name has no labels at all. There is no explicit
/// trailing root label stored — `Name` is always implicitly fully qualified.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Name {
    labels: Vec<Box<[u8]>>,
}

/// The wildcard label, a single asterisk, as used by owner names per RFC 4592.
pub const WILDCARD_LABEL: &[u8] = b"*";

impl Name {
    /// The root name, `.`
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    /// Builds a `Name` directly from already-lowercased labels, skipping validation.
    /// Used internally once labels have already been canonicalized.
    pub(crate) fn from_labels(labels: Vec<Box<[u8]>>) -> Self {
        Self { labels }
    }

    /// Parses a name from presentation format (e.g. `"www.Example.com."`), lowercasing
    /// every label. A missing trailing dot is tolerated; the name is always treated as
    /// fully qualified.
    pub fn parse(input: &str) -> Result<Self, ZoneError> {
        if input.is_empty() {
            return Err(ZoneError::NotFQDN(input.to_string()));
        }
        let trimmed = input.strip_suffix('.').unwrap_or(input);
        if trimmed.is_empty() {
            // the root name, "."
            return Ok(Self::root());
        }
        let labels = trimmed
            .split('.')
            .map(|label| {
                if label.is_empty() {
                    return Err(ZoneError::NotFQDN(input.to_string()));
                }
                Ok(label.as_bytes().to_ascii_lowercase().into_boxed_slice())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { labels })
    }

    /// Number of labels in the name, not counting the implicit root label.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Iterates over the labels, leftmost first.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.labels.iter().map(|l| l.as_ref())
    }

    /// True if the leftmost label is the literal wildcard label `*`.
    pub fn is_wildcard(&self) -> bool {
        matches!(self.labels.first(), Some(label) if label.as_ref() == WILDCARD_LABEL)
    }

    /// Returns the name with its leftmost label (the wildcard `*`) removed, i.e. `*.example.`
    /// becomes `example.`. Panics if this name is not a wildcard; callers must check
    /// [`Self::is_wildcard`] first.
    pub fn strip_wildcard(&self) -> Self {
        assert!(self.is_wildcard(), "strip_wildcard called on non-wildcard name");
        Self {
            labels: self.labels[1..].to_vec(),
        }
    }

    /// Returns the suffix of this name made up of its last `count` labels (rightmost
    /// `count` labels), i.e. the ancestor `count` labels deep counted from the root.
    /// Returns the whole name unchanged if `count >= label_count()`.
    pub fn trailing(&self, count: usize) -> Self {
        if count >= self.labels.len() {
            return self.clone();
        }
        let start = self.labels.len() - count;
        Self {
            labels: self.labels[start..].to_vec(),
        }
    }

    /// Suffix selector by label count from the right, per the zone engine's
    /// `from(name, labels, offset)` name utility.
    ///
    /// A `count` of zero is a sentinel for "no truncation": it returns `self`
    /// unchanged rather than the root name. This matters only at the zone
    /// apex, where `origin.label_count()` is itself zero (the root zone) —
    /// without the sentinel, every name's zero-label suffix would collapse to
    /// the root and become indistinguishable from the apex itself. For any
    /// `count >= 1` this behaves exactly like [`Self::trailing`].
    pub fn suffix(&self, count: usize) -> Self {
        if count == 0 {
            return self.clone();
        }
        self.trailing(count)
    }

    /// Prepends a label (already lowercased by the caller) to this name.
    pub fn with_prepended(&self, label: &[u8]) -> Self {
        let mut labels = Vec::with_capacity(self.labels.len() + 1);
        labels.push(label.to_ascii_lowercase().into_boxed_slice());
        labels.extend(self.labels.iter().cloned());
        Self { labels }
    }

    /// True if `self` is equal to or a descendant of `other`, i.e. `other`'s labels are
    /// a right-aligned suffix of `self`'s labels.
    pub fn is_subdomain_of(&self, other: &Self) -> bool {
        if other.labels.len() > self.labels.len() {
            return false;
        }
        let start = self.labels.len() - other.labels.len();
        self.labels[start..] == other.labels[..]
    }

    /// Returns the wire-form label bytes, for hashing / signing purposes.
    pub fn labels(&self) -> &[Box<[u8]>] {
        &self.labels
    }
}

impl FromStr for Name {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return write!(f, ".");
        }
        for label in &self.labels {
            write!(f, "{}.", String::from_utf8_lossy(label))?;
        }
        Ok(())
    }
}

/// Canonical DNS name ordering (RFC 4034 §6.1): compare label by label starting from
/// the rightmost label; a name that is a strict right-suffix of another (i.e. has
/// fewer labels but otherwise matches) sorts before it.
impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.labels.iter().rev().zip(other.labels.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.labels.len().cmp(&other.labels.len())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_and_lowercases() {
        let name = Name::parse("WWW.Example.COM.").unwrap();
        assert_eq!(name.to_string(), "www.example.com.");
    }

    #[test]
    fn root_name() {
        assert_eq!(Name::parse(".").unwrap(), Name::root());
        assert_eq!(Name::root().to_string(), ".");
        assert_eq!(Name::root().label_count(), 0);
    }

    #[test]
    fn canonical_order_by_rightmost_label() {
        let a = Name::parse("a.example.").unwrap();
        let z = Name::parse("z.example.").unwrap();
        let com = Name::parse("com.").unwrap();
        assert!(a < z);
        // "com." has one label, "a.example." has two; under rightmost-label-first
        // comparison "com" and "example" differ first, so order follows that label.
        assert!(com < a);
    }

    #[test]
    fn shorter_suffix_sorts_first() {
        let example = Name::parse("example.").unwrap();
        let www_example = Name::parse("www.example.").unwrap();
        assert!(example < www_example);
    }

    #[test]
    fn subdomain_check() {
        let origin = Name::parse("example.com.").unwrap();
        let child = Name::parse("www.example.com.").unwrap();
        let other = Name::parse("example.net.").unwrap();
        assert!(child.is_subdomain_of(&origin));
        assert!(origin.is_subdomain_of(&origin));
        assert!(!other.is_subdomain_of(&origin));
    }

    #[test]
    fn wildcard_detection_and_strip() {
        let wild = Name::parse("*.example.com.").unwrap();
        assert!(wild.is_wildcard());
        assert_eq!(wild.strip_wildcard(), Name::parse("example.com.").unwrap());
    }

    #[test]
    fn trailing_labels() {
        let name = Name::parse("www.example.com.").unwrap();
        assert_eq!(name.trailing(2), Name::parse("example.com.").unwrap());
        assert_eq!(name.trailing(0), Name::root());
        assert_eq!(name.trailing(10), name);
    }

    #[test]
    fn suffix_zero_is_unchanged_not_root() {
        let name = Name::parse("com.").unwrap();
        assert_eq!(name.suffix(0), name);
        assert_ne!(name.suffix(0), Name::root());
    }

    #[test]
    fn suffix_nonzero_matches_trailing() {
        let name = Name::parse("www.example.com.").unwrap();
        assert_eq!(name.suffix(2), name.trailing(2));
    }
}
