// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a trackable value or memory slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element(u32);

impl Element {
    pub const fn new(id: u32) -> Self {
        Element(id)
    }

    pub const fn id(self) -> u32 {
        self.0
    }
}

impl From<u32> for Element {
    fn from(id: u32) -> Self {
        Element(id)
    }
}

impl From<Element> for u32 {
    fn from(element: Element) -> Self {
        element.0
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// A region named by its canonical representative, the minimum element it contains.
///
/// Two partitions that group elements identically report identical regions,
/// regardless of the order in which the groupings were built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(Element);

impl Region {
    pub(crate) const fn of(representative: Element) -> Self {
        Region(representative)
    }

    pub const fn representative(self) -> Element {
        self.0
    }
}

impl From<Region> for u32 {
    fn from(region: Region) -> Self {
        region.0.id()
    }
}

impl PartialEq<u32> for Region {
    fn eq(&self, other: &u32) -> bool {
        self.0.id() == *other
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "region({})", self.0.id())
    }
}

/// Default opaque witness: a handle to whatever caused a transfer, typically the
/// id of an instruction or operand owned by the caller.
///
/// The partition stores and forwards witnesses but never interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Witness(u64);

impl Witness {
    pub const fn new(handle: u64) -> Self {
        Witness(handle)
    }

    pub const fn handle(self) -> u64 {
        self.0
    }
}

impl From<u64> for Witness {
    fn from(handle: u64) -> Self {
        Witness(handle)
    }
}

impl fmt::Display for Witness {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
