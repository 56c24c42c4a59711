// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! A sorted set of owner names, used to find NSEC predecessors

use crate::error::ZoneError;
use crate::rr::Name;

/// A canonically sorted, duplicate-free sequence of owner names.
///
/// `Zone` keeps exactly the set of names that carry an `NSEC` record here. NSEC
/// denial-of-existence proofs need the immediate predecessor of a name that does
/// not exist in the zone; a sorted vector with binary search is enough because
/// the list only grows as records are inserted, it is never queried mid-mutation
/// at scale that would justify a tree.
#[derive(Clone, Debug, Default)]
pub struct NameList {
    names: Vec<Name>,
}

impl NameList {
    /// Builds an empty name list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name`, preserving canonical order. A no-op if already present.
    pub fn insert(&mut self, name: Name) {
        match self.names.binary_search(&name) {
            Ok(_) => {}
            Err(pos) => self.names.insert(pos, name),
        }
    }

    /// Returns the greatest stored name strictly less than `name` in canonical
    /// order, or `None` if no stored name is smaller.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::NotAnNXDomain`] if `name` is itself present in the
    /// list: this function only makes sense for names proven absent from the
    /// zone, and a present name means the caller should have taken the no-data
    /// path instead of the NXDOMAIN path.
    pub fn lower(&self, name: &Name) -> Result<Option<&Name>, ZoneError> {
        match self.names.binary_search(name) {
            Ok(_) => Err(ZoneError::NotAnNXDomain(name.clone())),
            Err(0) => Ok(None),
            Err(pos) => Ok(Some(&self.names[pos - 1])),
        }
    }

    /// Removes every name from the list.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Number of names currently tracked.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no names are tracked.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
